//! Share error taxonomy
//!
//! Every failure of a share operation ends up as one of these variants and is
//! turned into a single user-facing message at the command boundary.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0

use thiserror::Error;

/// Errors surfaced by a share operation
#[derive(Error, Debug)]
pub enum ShareError {
    /// Missing or unusable configuration, raised before any network activity
    #[error("{0}")]
    Configuration(String),

    /// The user declined a prompt
    #[error("Share cancelled")]
    Cancelled,

    /// Nothing to share (empty selection or document)
    #[error("No content to share.")]
    EmptyContent,

    /// The source document could not be read or the selection is invalid
    #[error("{0}")]
    Source(String),

    /// An interactive prompt could not be shown or read
    #[error("Prompt failed: {0}")]
    Prompt(String),

    /// A payload was not delivered; earlier parts stay delivered
    #[error("Failed to share to Discord: part {part}/{total} was not delivered ({reason})")]
    Delivery {
        part: usize,
        total: usize,
        reason: DeliveryFailure,
    },
}

/// Why a single payload was not delivered
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DeliveryFailure {
    #[error("status code {status}{}", describe_body(.body))]
    Status { status: u16, body: String },

    #[error("{0}")]
    Transport(String),

    #[error("could not serialize payload: {0}")]
    Serialize(String),
}

fn describe_body(body: &str) -> String {
    if body.trim().is_empty() {
        String::new()
    } else {
        format!(": {}", body.trim())
    }
}

/// How an error should be shown to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Nothing is shown
    Silent,
    Info,
    Error,
}

impl ShareError {
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    pub fn source_error(message: impl Into<String>) -> Self {
        Self::Source(message.into())
    }

    pub fn severity(&self) -> Severity {
        match self {
            ShareError::Cancelled => Severity::Silent,
            ShareError::EmptyContent => Severity::Info,
            ShareError::Configuration(_)
            | ShareError::Source(_)
            | ShareError::Prompt(_)
            | ShareError::Delivery { .. } => Severity::Error,
        }
    }

    /// Message to show the user, if any
    pub fn user_message(&self) -> Option<String> {
        match self.severity() {
            Severity::Silent => None,
            _ => Some(self.to_string()),
        }
    }
}
