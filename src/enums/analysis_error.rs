use thiserror::Error;

/// Notification shown for every failed scan, whatever the cause.
pub const REQUEST_FAILED_MESSAGE: &str = "Error connecting to server. Ensure your backend is live!";

/// Why a scan produced no report.
///
/// All variants surface to the user as [`REQUEST_FAILED_MESSAGE`]; the
/// distinction is kept for logging.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AnalysisError {
    #[error("request to {url} failed: {reason}")]
    Network { url: String, reason: String },

    #[error("{url} responded with HTTP {status}")]
    Status { url: String, status: u16, body: String },

    #[error("could not decode analysis response: {reason}")]
    Parse { reason: String },
}

impl AnalysisError {
    pub fn network(url: &str, reason: impl Into<String>) -> Self {
        Self::Network { url: url.to_string(), reason: reason.into() }
    }

    pub fn status(url: &str, status: u16, body: impl Into<String>) -> Self {
        Self::Status { url: url.to_string(), status, body: body.into() }
    }

    pub fn parse(reason: impl Into<String>) -> Self {
        Self::Parse { reason: reason.into() }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Network { .. } => "network",
            Self::Status { .. } => "status",
            Self::Parse { .. } => "parse",
        }
    }

    pub fn user_message(&self) -> &'static str {
        REQUEST_FAILED_MESSAGE
    }
}
