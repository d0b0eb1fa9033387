//! FILENAME: app/dashboard/src/error.rs

use dataset::DatasetError;
use sales_engine::FilterError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Failed to load dataset: {0}")]
    Dataset(#[from] DatasetError),

    #[error("Invalid filter selection: {0}")]
    Filter(#[from] FilterError),

    #[error("Render error: {0}")]
    Render(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
