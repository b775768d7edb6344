use crate::utils::error::{ApodError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// 每日天文圖的中繼資料，直接對應 API 回傳的 JSON 物件
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub data: HashMap<String, serde_json::Value>,
}

impl Record {
    /// body 必須是 JSON 物件，陣列或純量一律拒絕
    pub fn from_json_slice(bytes: &[u8]) -> Result<Self> {
        let data: HashMap<String, serde_json::Value> = serde_json::from_slice(bytes)?;
        Ok(Self { data })
    }

    pub fn get_str(&self, key: &str) -> Result<&str> {
        self.opt_str(key).ok_or_else(|| ApodError::MissingField {
            field: key.to_string(),
        })
    }

    fn opt_str(&self, key: &str) -> Option<&str> {
        self.data.get(key).and_then(|v| v.as_str())
    }

    pub fn title(&self) -> Result<&str> {
        self.get_str("title")
    }

    pub fn explanation(&self) -> Result<&str> {
        self.get_str("explanation")
    }

    pub fn url(&self) -> Result<&str> {
        self.get_str("url")
    }

    pub fn hd_url(&self) -> Option<&str> {
        self.opt_str("hdurl")
    }

    pub fn media_type(&self) -> Option<&str> {
        self.opt_str("media_type")
    }

    pub fn date(&self) -> Option<&str> {
        self.opt_str("date")
    }

    pub fn copyright(&self) -> Option<&str> {
        self.opt_str("copyright")
    }

    /// 有要求高解析度且紀錄有 `hdurl` 時使用它，否則回到 `url`
    pub fn image_url(&self, prefer_hd: bool) -> Result<&str> {
        match self.hd_url() {
            Some(hd) if prefer_hd => Ok(hd),
            _ => self.url(),
        }
    }
}
