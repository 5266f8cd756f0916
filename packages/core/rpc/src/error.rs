use thiserror::Error;

/// Failure of a single request at the transport level.
///
/// A call that returns this error produced no reply. Whether the remote operation itself
/// succeeded is a separate signal carried inside the reply.
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum RpcError {
    #[error("Transport error: {0}")]
    Transport(String),
    #[error("Unexpected http status: {0}")]
    HttpStatus(u16),
    #[error("Decode error: {0}")]
    Decode(String),
    #[error("Remote error {code}: {message}")]
    Remote { code: i64, message: String },
}

impl From<reqwest::Error> for RpcError {
    fn from(value: reqwest::Error) -> Self {
        if value.is_decode() {
            RpcError::Decode(value.to_string())
        } else {
            RpcError::Transport(value.to_string())
        }
    }
}

impl From<serde_json::Error> for RpcError {
    fn from(value: serde_json::Error) -> Self {
        RpcError::Decode(value.to_string())
    }
}
