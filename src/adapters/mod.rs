// Adapters layer: concrete implementations for external systems (filesystem, viewer process).

pub mod storage;
pub mod viewer;

pub use storage::LocalStorage;
pub use viewer::{CommandViewer, NoopViewer};
