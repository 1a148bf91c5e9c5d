//! Errors returned by [`crate::OpenDotaClient`].

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("OpenDota API error ({status}): {body}")]
    Status { status: u16, body: String },

    #[error("Not found: {0}")]
    NotFound(String),
}

impl ClientError {
    /// True for 404 responses and objects OpenDota reports as missing.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ClientError::NotFound(_))
    }
}
