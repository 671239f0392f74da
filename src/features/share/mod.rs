//! # Feature: Share
//!
//! Post source text to a Discord webhook as one or more code-block messages.
//! The formatter splits and decorates the text; the dispatcher sends the
//! resulting payloads in order and stops at the first failure.
//!
//! - **Version**: 1.1.0
//! - **Since**: 0.1.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 1.1.0: Line-range selections, author labels, confirmation prompt
//! - 1.0.0: Initial release with embed and plain message modes

pub mod dispatcher;
pub mod formatter;
pub mod languages;
pub mod payload;
pub mod prompt;
pub mod source;

pub use dispatcher::{Dispatcher, ReqwestTransport, TransportResponse, WebhookTransport};
pub use formatter::{
    chunk_text, format_request, number_lines, Chunk, ShareOptions, ShareRequest, TOOL_NAME,
    TOOL_VERSION,
};
pub use languages::display_name;
pub use payload::Payload;
#[cfg(feature = "prompt")]
pub use prompt::TerminalPrompt;
pub use prompt::{NoPrompt, PromptOutcome, SharePrompt};
pub use source::{read_source, select, LineRange, Selection, SourceText};
