use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    RequestFailed,
    Transport,
    Decode,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("request failed: {status} for {url}")]
    RequestFailed { url: String, status: u16 },
    #[error("transport error for {url}: {message}")]
    Transport { url: String, message: String },
    #[error("malformed response body from {url}: {message}")]
    Decode { url: String, message: String },
}

impl CatalogError {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::RequestFailed { .. } => ErrorCode::RequestFailed,
            Self::Transport { .. } => ErrorCode::Transport,
            Self::Decode { .. } => ErrorCode::Decode,
        }
    }

    pub fn url(&self) -> &str {
        match self {
            Self::RequestFailed { url, .. }
            | Self::Transport { url, .. }
            | Self::Decode { url, .. } => url,
        }
    }
}
