use thiserror::Error;

/// Label attached to every error reported by the transform
pub const PLUGIN_NAME: &str = "gulp-ng-http2js";

#[derive(Debug, Error)]
pub enum TransformError {
    /// The input arrived as an unbounded stream instead of a buffer
    #[error("{plugin}: Streaming not supported")]
    StreamingNotSupported { plugin: &'static str },

    #[error("{}: pipeline already finalized", PLUGIN_NAME)]
    AlreadyFinalized,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl TransformError {
    pub fn streaming_not_supported() -> Self {
        TransformError::StreamingNotSupported {
            plugin: PLUGIN_NAME,
        }
    }

    /// Name of the plugin that raised the error
    pub fn plugin(&self) -> &'static str {
        match self {
            TransformError::StreamingNotSupported { plugin } => plugin,
            _ => PLUGIN_NAME,
        }
    }

    /// Message text without the plugin label
    pub fn message(&self) -> String {
        match self {
            TransformError::StreamingNotSupported { .. } => "Streaming not supported".to_string(),
            TransformError::AlreadyFinalized => "pipeline already finalized".to_string(),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, TransformError>;
