// Core layer - shared types, configuration and errors
pub mod core;

// Features layer - formatting and delivery
pub mod features;

// Application layer
pub mod commands;

pub use self::core::{ShareConfig, ShareError, ShareMode};

pub use features::share::{
    format_request, Dispatcher, Payload, ReqwestTransport, ShareOptions, ShareRequest,
    WebhookTransport,
};

pub use commands::{run_share, ShareContext, ShareInvocation, ShareOutcome};
