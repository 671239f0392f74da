//! # Features
//!
//! - **share**: chunk source text and deliver it to a Discord webhook

pub mod share;

pub use share::{
    Dispatcher, Payload, ReqwestTransport, ShareOptions, SharePrompt, ShareRequest,
    WebhookTransport,
};
