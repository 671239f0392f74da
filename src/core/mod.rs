//! # Core Module
//!
//! Core types, configuration, and error handling for discord-share.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0
//! - **Toggleable**: false

pub mod config;
pub mod error;
pub mod response;

// Re-export commonly used items
pub use config::{ShareConfig, ShareMode};
pub use error::{DeliveryFailure, Severity, ShareError};
pub use response::{
    char_len, chunk_exact, truncate_chars, truncate_for_field, truncate_for_title, EMBED_LIMIT,
    FIELD_LIMIT, MESSAGE_LIMIT, TITLE_LIMIT,
};
