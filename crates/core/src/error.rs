use std::path::PathBuf;
use thiserror::Error;
use weaver_api::ApiError;

#[derive(Error, Debug)]
pub enum WeaveError {
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Cannot read archive {}: {source}", path.display())]
    Archive {
        path: PathBuf,
        #[source]
        source: zip::result::ZipError,
    },
    #[error("Invalid class file {name}: {reason}")]
    ClassFormat { name: String, reason: String },
    #[error("Invalid variant: {0}")]
    InvalidVariant(String),
    #[error("Invalid plugin metadata in {}: {reason}", path.display())]
    Metadata { path: PathBuf, reason: String },
    #[error("Plugin class not found: {0}")]
    ClassNotFound(String),
    #[error("Plugin type {0} is abstract or an interface")]
    NotInstantiable(String),
    #[error("Plugin {plugin} requires an argument of type {type_name} but none is bound")]
    UnboundArgument { plugin: String, type_name: String },
    #[error("Failed to create class scope: {0}")]
    ClassLoader(String),
    #[error("JSON serialization/deserialization error: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Api(#[from] ApiError),
}

impl WeaveError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        WeaveError::Io {
            path: path.into(),
            source,
        }
    }

    pub fn archive(path: impl Into<PathBuf>, source: zip::result::ZipError) -> Self {
        WeaveError::Archive {
            path: path.into(),
            source,
        }
    }
}

impl From<WeaveError> for ApiError {
    fn from(err: WeaveError) -> Self {
        match err {
            WeaveError::Api(inner) => inner,
            WeaveError::Io { path, source } => ApiError::io(path.display(), source),
            WeaveError::ClassNotFound(name) => ApiError::NotFound(name),
            WeaveError::ClassFormat { name, reason } => {
                ApiError::InvalidClass(format!("{name}: {reason}"))
            }
            other => ApiError::Internal(other.to_string()),
        }
    }
}

pub type Result<T> = std::result::Result<T, WeaveError>;
