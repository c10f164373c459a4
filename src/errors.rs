use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("server rejected request with status {status}")]
    Rejected { status: u16, detail: Option<String> },

    #[error("config error: {0}")]
    Config(String),
}

impl ClientError {
    /// Server-provided `detail` of a rejected request, if it sent one.
    pub fn detail(&self) -> Option<&str> {
        match self {
            ClientError::Rejected { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
