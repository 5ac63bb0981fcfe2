use serde::Deserialize;

/// Normalized failure of a single remote call.
///
/// The carried message is the server's `detail` when one was sent.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ClientError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{message}")]
    Server { status: u16, message: String },

    /// The request never completed or the body could not be decoded.
    #[error("{0}")]
    Transport(String),

    #[error("Not authenticated: no bearer token available")]
    MissingCredential,
}

#[derive(Deserialize)]
struct ErrorBody {
    detail: Option<serde_json::Value>,
}

impl ClientError {
    /// Builds the error for a non-2xx response from its status and raw body.
    pub fn from_status(status: u16, body: &[u8]) -> Self {
        let message = detail_message(body)
            .unwrap_or_else(|| format!("Request failed with status {}", status));

        match status {
            400 | 422 => ClientError::Validation(message),
            401 | 403 => ClientError::Unauthorized(message),
            404 => ClientError::NotFound(message),
            409 => ClientError::Conflict(message),
            _ => ClientError::Server { status, message },
        }
    }
}

// Only a non-blank string detail is surfaced
fn detail_message(body: &[u8]) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_slice(body).ok()?;
    match parsed.detail? {
        serde_json::Value::String(s) if !s.trim().is_empty() => Some(s),
        _ => None,
    }
}
