use thiserror::Error;

#[derive(Error, Debug)]
pub enum HandError {
    #[error("network interface not found: {0}")]
    UnknownInterface(String),

    #[error("DDS transport error: {0}")]
    Transport(String),

    #[error("failed to publish on {topic}: {reason}")]
    Publish { topic: String, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
