#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Invalid class file: {0}")]
    InvalidClass(String),
    #[error("Plugin failure: {0}")]
    Plugin(String),
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn io(path: impl std::fmt::Display, source: std::io::Error) -> Self {
        ApiError::Io {
            path: path.to_string(),
            source,
        }
    }
}

pub type ApiResult<T> = std::result::Result<T, ApiError>;
