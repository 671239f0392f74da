//! # Commands
//!
//! Command-line surface and the top-level share operation.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0

pub mod cli;
pub mod context;
pub mod share;

pub use cli::{Cli, Commands, ShareArgs};
pub use context::{non_interactive, ShareContext};
pub use share::{run_share, ShareInvocation, ShareOutcome};
