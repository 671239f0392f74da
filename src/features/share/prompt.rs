//! Interactive prompts asked before a share.
//!
//! The terminal implementation needs the `prompt` feature (dialoguer).

use anyhow::Result;

/// Answer to an optional question
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptOutcome<T> {
    Answered(T),
    Cancelled,
}

pub trait SharePrompt: Send + Sync {
    /// Optional comment to attach; an empty answer means no comment
    fn comment(&self) -> Result<PromptOutcome<Option<String>>>;

    /// Final go-ahead, given a short description of what will be sent
    fn confirm(&self, summary: &str) -> Result<PromptOutcome<()>>;
}

/// Never asks: no comment, always confirmed
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPrompt;

impl SharePrompt for NoPrompt {
    fn comment(&self) -> Result<PromptOutcome<Option<String>>> {
        Ok(PromptOutcome::Answered(None))
    }

    fn confirm(&self, _summary: &str) -> Result<PromptOutcome<()>> {
        Ok(PromptOutcome::Answered(()))
    }
}

#[cfg(feature = "prompt")]
pub use terminal::TerminalPrompt;

#[cfg(feature = "prompt")]
mod terminal {
    use super::{PromptOutcome, SharePrompt};
    use anyhow::{Context, Result};
    use dialoguer::{Confirm, Input};

    /// Asks on the terminal. Esc or `q` at the confirmation cancels.
    #[derive(Debug, Clone, Copy, Default)]
    pub struct TerminalPrompt;

    impl SharePrompt for TerminalPrompt {
        fn comment(&self) -> Result<PromptOutcome<Option<String>>> {
            let comment: String = Input::<String>::new()
                .with_prompt("Comment (optional)")
                .allow_empty(true)
                .interact_text()
                .context("Failed to read comment")?;

            let comment = comment.trim();
            Ok(PromptOutcome::Answered(
                (!comment.is_empty()).then(|| comment.to_string()),
            ))
        }

        fn confirm(&self, summary: &str) -> Result<PromptOutcome<()>> {
            let answer = Confirm::new()
                .with_prompt(format!("Share {summary}?"))
                .default(true)
                .interact_opt()
                .context("Failed to read confirmation")?;

            Ok(match answer {
                Some(true) => PromptOutcome::Answered(()),
                Some(false) | None => PromptOutcome::Cancelled,
            })
        }
    }
}
