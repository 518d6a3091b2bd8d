#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl CatalogError {
    /// True when the error came from decoding the bundled catalog document.
    pub fn is_decode(&self) -> bool {
        matches!(self, CatalogError::Json(_))
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;
