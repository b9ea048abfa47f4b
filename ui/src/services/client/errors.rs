use thiserror::Error;

/// Failures from the registry's HTTP collaborators.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Http(String),

    #[error("invalid response body: {0}")]
    Decode(String),

    #[error("server rejected request: {0}")]
    Rejected(String),
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ClientError::Decode(err.to_string())
        } else {
            ClientError::Http(err.to_string())
        }
    }
}

pub type ClientResult<T> = Result<T, ClientError>;
