//! CLI argument definitions using clap.

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::core::{ShareConfig, ShareMode};
use crate::features::share::{LineRange, Selection};

/// Share source code to a Discord channel through a webhook
#[derive(Parser, Debug)]
#[command(
    name = "discord-share",
    author,
    version,
    about = "Share source code to a Discord channel through a webhook",
    long_about = "Posts a file, or a range of lines from it, to a Discord webhook as \n\
                  code-block embeds or messages. Long text is split into numbered parts \n\
                  that are sent in order."
)]
pub struct Cli {
    /// Increase logging verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to a YAML configuration file
    #[arg(short, long, global = true, env = "DISCORD_SHARE_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Share a whole file
    File(ShareArgs),

    /// Share a range of lines from a file
    Selection(SelectionArgs),
}

impl Commands {
    pub fn share_args(&self) -> &ShareArgs {
        match self {
            Commands::File(args) => args,
            Commands::Selection(args) => &args.share,
        }
    }

    pub fn selection(&self) -> Selection {
        match self {
            Commands::File(_) => Selection::Document,
            Commands::Selection(args) => Selection::Lines(args.lines),
        }
    }
}

/// Output mode
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModeArg {
    /// Rich embeds with title, footer and timestamp
    Embed,
    /// Plain message content
    Message,
}

impl From<ModeArg> for ShareMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Embed => ShareMode::Embed,
            ModeArg::Message => ShareMode::PlainMessage,
        }
    }
}

/// Arguments shared by both commands
#[derive(Args, Debug, Clone)]
pub struct ShareArgs {
    /// File to share
    pub path: PathBuf,

    /// Comment attached to the first embed
    #[arg(short = 'm', long)]
    pub comment: Option<String>,

    /// Override the configured output mode
    #[arg(long, value_enum)]
    pub mode: Option<ModeArg>,

    /// Prefix lines with their line numbers
    #[arg(short = 'n', long)]
    pub line_numbers: bool,

    /// Attach an author label
    #[arg(short, long)]
    pub author: bool,

    /// Author label to use instead of the current user
    #[arg(long, requires = "author")]
    pub author_name: Option<String>,

    /// Leave out the file-name line above the code block
    #[arg(long)]
    pub no_file_name: bool,

    /// Never prompt (no comment question, no confirmation)
    #[arg(short = 'y', long)]
    pub yes: bool,

    /// Print the JSON payloads instead of sending them
    #[arg(long)]
    pub dry_run: bool,
}

impl ShareArgs {
    /// Command-line flags take precedence over file and environment settings
    pub fn apply(&self, config: &mut ShareConfig) {
        if let Some(mode) = self.mode {
            config.mode = mode.into();
        }
        if self.line_numbers {
            config.show_line_numbers = true;
        }
        if self.author {
            config.show_author = true;
        }
        if let Some(name) = &self.author_name {
            config.author_name = Some(name.clone());
        }
        if self.no_file_name {
            config.show_file_name = Some(false);
        }
        if self.yes {
            config.ask_comment = false;
            config.confirm = false;
        }
    }
}

/// Arguments for the `selection` command
#[derive(Args, Debug, Clone)]
pub struct SelectionArgs {
    #[command(flatten)]
    pub share: ShareArgs,

    /// Lines to share, 1-based and inclusive: START-END, START:END or N
    #[arg(short, long)]
    pub lines: LineRange,
}

/// Log level for a `-v` count, falling back to the configured level
pub fn log_level(verbose: u8, configured: &str) -> String {
    match verbose {
        0 => configured.to_string(),
        1 => "info".to_string(),
        _ => "debug".to_string(),
    }
}
