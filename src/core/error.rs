use std::io;

pub type Result<T> = std::result::Result<T, ViewError>;

#[derive(Debug)]
pub enum ViewError {
    Io(io::Error),
    Json(serde_json::Error),
    /// The backend sent something that cannot be applied to the current view state.
    Protocol(String),
}

impl std::fmt::Display for ViewError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ViewError::Io(e) => write!(f, "IO error: {}", e),
            ViewError::Json(e) => write!(f, "JSON error: {}", e),
            ViewError::Protocol(msg) => write!(f, "Protocol error: {}", msg),
        }
    }
}

impl std::error::Error for ViewError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ViewError::Io(e) => Some(e),
            ViewError::Json(e) => Some(e),
            ViewError::Protocol(_) => None,
        }
    }
}

impl From<io::Error> for ViewError {
    fn from(e: io::Error) -> Self {
        ViewError::Io(e)
    }
}

impl From<serde_json::Error> for ViewError {
    fn from(e: serde_json::Error) -> Self {
        ViewError::Json(e)
    }
}
