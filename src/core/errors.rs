use std::fmt;
use thiserror::Error;

/// A `(code, message)` pair reported by the server, optionally tied to one item id.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct ApiFault {
    pub code: String,
    pub message: String,
    /// The requested item id this fault refers to, for item-level faults.
    pub item_id: Option<String>,
    /// Server-side request id, when the fault envelope carries one.
    pub request_id: Option<String>,
}

impl ApiFault {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            item_id: None,
            request_id: None,
        }
    }

    #[must_use]
    pub fn with_item_id(mut self, item_id: impl Into<String>) -> Self {
        self.item_id = Some(item_id.into());
        self
    }

    #[must_use]
    pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
        self.request_id = Some(request_id.into());
        self
    }
}

impl fmt::Display for ApiFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.code, self.message)
    }
}

#[derive(Error, Debug)]
pub enum PaapiError {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// The whole call was rejected (bad signature, bad credentials, throttling).
    #[error("API error: {0}")]
    EnvelopeFault(ApiFault),

    /// One item id of a batch lookup could not be resolved.
    #[error("Item error: {0}")]
    ItemFault(ApiFault),

    #[error("Authentication error: {0}")]
    AuthError(String),

    #[error("Invalid parameters: {0}")]
    InvalidParameters(String),

    #[error("Configuration error: {0}")]
    ConfigError(#[from] crate::core::config::ConfigError),
}

impl PaapiError {
    /// The structured server fault carried by this error, if any.
    pub fn fault(&self) -> Option<&ApiFault> {
        match self {
            Self::EnvelopeFault(fault) | Self::ItemFault(fault) => Some(fault),
            _ => None,
        }
    }
}
