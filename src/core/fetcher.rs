use crate::core::{Record, RecordSource};
use crate::utils::error::{ApodError, Result};
use reqwest::{Client, StatusCode};
use std::time::Duration;

pub const DEFAULT_ENDPOINT: &str = "https://go-apod.herokuapp.com/apod";

/// 共用的 HTTP client；沒有設定 timeout 時沿用 reqwest 的預設
pub fn build_client(timeout_seconds: Option<u64>) -> Result<Client> {
    let mut builder =
        Client::builder().user_agent(concat!("apod-viewer/", env!("CARGO_PKG_VERSION")));
    if let Some(secs) = timeout_seconds {
        builder = builder.timeout(Duration::from_secs(secs));
    }
    Ok(builder.build()?)
}

pub struct ApodClient {
    endpoint: String,
    client: Client,
}

impl ApodClient {
    pub fn new(endpoint: impl Into<String>, client: Client) -> Self {
        Self {
            endpoint: endpoint.into(),
            client,
        }
    }
}

#[async_trait::async_trait]
impl RecordSource for ApodClient {
    async fn fetch_daily_record(&self) -> Result<Record> {
        tracing::debug!("Making API request to: {}", self.endpoint);
        let response = self.client.get(&self.endpoint).send().await?;

        let status = response.status();
        tracing::debug!("API response status: {}", status);

        // 非 200 直接失敗，不解析 body
        if status != StatusCode::OK {
            return Err(ApodError::HttpStatus {
                url: self.endpoint.clone(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        let record = Record::from_json_slice(&body)?;
        tracing::debug!("Parsed record with {} fields", record.data.len());

        Ok(record)
    }
}
