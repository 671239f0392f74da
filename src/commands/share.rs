//! Share command: the top-level share operation
//!
//! Handles: file, selection
//!
//! - **Version**: 1.1.0
//! - **Since**: 0.1.0
//!
//! ## Changelog
//! - 1.1.0: Dry-run preview, confirmation prompt
//! - 1.0.0: Initial implementation

use chrono::Utc;
use log::{debug, info};
use uuid::Uuid;

use super::context::ShareContext;
use crate::core::{ShareError, ShareMode};
use crate::features::share::{
    format_request, Dispatcher, Payload, PromptOutcome, ShareOptions, ShareRequest, SourceText,
};

/// One user-initiated share
#[derive(Debug, Clone)]
pub struct ShareInvocation {
    pub source: SourceText,
    /// Comment given up front; when absent the prompt may ask for one
    pub comment: Option<String>,
    /// Build payloads but send nothing
    pub dry_run: bool,
}

#[derive(Debug)]
pub enum ShareOutcome {
    Delivered { parts: usize, mode: ShareMode },
    Preview { payloads: Vec<Payload> },
}

impl ShareOutcome {
    pub fn message(&self) -> String {
        match self {
            ShareOutcome::Delivered { parts, mode } => {
                let kind = match mode {
                    ShareMode::Embed => "embed",
                    ShareMode::PlainMessage => "message",
                };
                let plural = if *parts == 1 { "" } else { "s" };
                format!("Successfully shared to Discord ({parts} {kind}{plural}).")
            }
            ShareOutcome::Preview { payloads } => {
                format!("Dry run: {} payload(s) built, nothing sent.", payloads.len())
            }
        }
    }
}

/// Run a share from start to finish.
///
/// Checks run before anything is built: empty text, then the endpoint, then
/// the prompts. A cancelled prompt means no payload is built or sent.
pub async fn run_share(
    ctx: &ShareContext,
    invocation: ShareInvocation,
) -> Result<ShareOutcome, ShareError> {
    let share_id = Uuid::new_v4();
    let ShareInvocation {
        source,
        comment,
        dry_run,
    } = invocation;

    if source.text.is_empty() {
        return Err(ShareError::EmptyContent);
    }

    let endpoint = if dry_run {
        None
    } else {
        Some(ctx.config.webhook_url()?)
    };

    let comment = match comment {
        Some(comment) => Some(comment),
        None if ctx.config.ask_comment => match ctx.prompt.comment().map_err(prompt_error)? {
            PromptOutcome::Answered(comment) => comment,
            PromptOutcome::Cancelled => return Err(ShareError::Cancelled),
        },
        None => None,
    };

    if ctx.config.confirm && !dry_run {
        let summary = format!(
            "{} line(s) of {} to Discord",
            source.line_count(),
            source.base_name()
        );
        if let PromptOutcome::Cancelled = ctx.prompt.confirm(&summary).map_err(prompt_error)? {
            info!("[{}] Share cancelled at confirmation", share_id);
            return Err(ShareError::Cancelled);
        }
    }

    let request = ShareRequest {
        file_extension: source.extension(),
        file_base_name: source.base_name(),
        starting_line: source.starting_line,
        text: source.text,
        comment,
        options: ShareOptions::from_config(&ctx.config),
    };

    let payloads = format_request(&request, Utc::now())?;
    debug!(
        "[{}] Built {} payload(s) for {}",
        share_id,
        payloads.len(),
        request.file_base_name
    );

    match endpoint {
        None => Ok(ShareOutcome::Preview { payloads }),
        Some(endpoint) => {
            let parts = Dispatcher::new(ctx.transport.clone(), endpoint)
                .with_share_id(share_id)
                .deliver_all(&payloads)
                .await?;
            Ok(ShareOutcome::Delivered {
                parts,
                mode: request.options.mode,
            })
        }
    }
}

fn prompt_error(e: anyhow::Error) -> ShareError {
    ShareError::Prompt(format!("{e:#}"))
}
