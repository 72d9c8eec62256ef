use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

pub type ApiError = (StatusCode, Json<ServerError>);

#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct ServerError {
    pub error: String,
}

impl ServerError {
    pub fn with_message<S: Into<String>>(message: S) -> Self {
        ServerError {
            error: message.into(),
        }
    }
}

/// Failures of a single call against the platform API.
#[derive(Debug, thiserror::Error)]
pub enum DiscordError {
    #[error("Too many rate limit retries ({retries})")]
    RateLimitExceeded { retries: u32 },

    #[error("Discord responded with {status}: {body}")]
    Http {
        status: StatusCode,
        body: serde_json::Value,
    },

    #[error("Failed to send request to Discord: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Malformed message page: {0}")]
    MalformedPage(String),
}

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error(transparent)]
    Discord(#[from] DiscordError),

    #[error("Failed to write export file: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum SignatureError {
    #[error("Missing {0} header")]
    MissingHeader(&'static str),

    #[error("Invalid public key: {0}")]
    InvalidPublicKey(String),

    #[error("Malformed signature")]
    MalformedSignature,

    #[error("Bad request signature")]
    BadSignature,
}
