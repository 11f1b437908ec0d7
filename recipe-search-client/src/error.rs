use crate::search_parameters::InvalidParameterError;
use serde::Deserialize;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ErrorKind {
    /// The upstream rejected the call because the plan's quota is used up.
    #[error("API quota exceeded")]
    QuotaExceeded,
    #[error("recipe not found")]
    NotFound,
    #[error("upstream responded with {status}: {}", .message.as_deref().unwrap_or("no message"))]
    Upstream { status: u16, message: Option<String> },
    /// No response was received at all.
    #[error("network error: {0}")]
    Network(String),
    #[error("malformed {payload} response: {reason}")]
    MalformedResponse { payload: &'static str, reason: String },
    #[error(transparent)]
    InvalidParameters(#[from] InvalidParameterError),
    #[error("unexpected error: {0}")]
    Unexpected(String),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}")]
pub struct Error {
    kind: ErrorKind,
}

/// Upstream error bodies look like `{"status": "failure", "code": 402, "message": "..."}`.
#[derive(Deserialize)]
struct UpstreamErrorBody {
    message: Option<String>,
}

impl Error {
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind }
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    pub fn network(err: impl std::fmt::Display) -> Self {
        Self::new(ErrorKind::Network(err.to_string()))
    }

    pub fn unexpected(err: impl std::fmt::Display) -> Self {
        Self::new(ErrorKind::Unexpected(err.to_string()))
    }

    pub fn malformed(payload: &'static str, err: impl std::fmt::Display) -> Self {
        Self::new(ErrorKind::MalformedResponse {
            payload,
            reason: err.to_string(),
        })
    }

    /// Classify a non-success response. `not_found_is_missing` is set for
    /// lookups by identifier, where a 404 means the recipe does not exist.
    pub fn from_status(status: u16, body: &str, not_found_is_missing: bool) -> Self {
        let kind = match status {
            402 => ErrorKind::QuotaExceeded,
            404 if not_found_is_missing => ErrorKind::NotFound,
            _ => ErrorKind::Upstream {
                status,
                message: serde_json::from_str::<UpstreamErrorBody>(body)
                    .ok()
                    .and_then(|b| b.message)
                    .filter(|m| !m.trim().is_empty()),
            },
        };
        Self::new(kind)
    }

    /// Message suitable for showing to the person who triggered the request.
    pub fn user_message(&self) -> String {
        match &self.kind {
            ErrorKind::QuotaExceeded => "API quota exceeded. Please try again later.".to_string(),
            ErrorKind::NotFound => "Recipe not found.".to_string(),
            ErrorKind::Upstream { message, .. } => {
                format!("Error: {}", message.as_deref().unwrap_or("An error occurred."))
            }
            ErrorKind::Network(_) => "Network error. Please check your connection.".to_string(),
            ErrorKind::MalformedResponse { payload, .. } => {
                format!("Received an unreadable {} response from the recipe service.", payload)
            }
            ErrorKind::InvalidParameters(err) => err.to_string(),
            ErrorKind::Unexpected(_) => "An unexpected error occurred.".to_string(),
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Self::new(kind)
    }
}

impl From<InvalidParameterError> for Error {
    fn from(err: InvalidParameterError) -> Self {
        Self::new(ErrorKind::InvalidParameters(err))
    }
}
