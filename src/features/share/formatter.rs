//! # Share Formatter
//!
//! Turns a [`ShareRequest`] into the ordered list of webhook payloads that
//! carries the whole text to Discord. Pure apart from the author fallback,
//! which reads the current user from the environment.
//!
//! - **Version**: 1.1.0
//! - **Since**: 0.1.0
//!
//! ## Changelog
//! - 1.1.0: Measure decoration per request so every payload fits its limit
//! - 1.0.0: Line numbering, fixed-width chunking, embed and plain payloads

use chrono::{DateTime, SecondsFormat, Utc};
use log::{debug, warn};
use std::borrow::Cow;

use super::languages::display_name;
use super::payload::{
    Embed, EmbedAuthor, EmbedField, EmbedFooter, EmbedMessage, Payload, PlainMessage,
};
use crate::core::{
    char_len, chunk_exact, truncate_chars, truncate_for_field, truncate_for_title, ShareConfig,
    ShareError, ShareMode,
};

/// Name shown in embed footers
pub const TOOL_NAME: &str = "Discord Share";
pub const TOOL_VERSION: &str = env!("CARGO_PKG_VERSION");

const LINE_NUMBER_WIDTH: usize = 4;
const LINE_NUMBER_SEPARATOR: &str = " | ";
const COMMENT_FIELD: &str = "Comment";
const ANONYMOUS: &str = "Anonymous";
/// Discord caps webhook username overrides at 80 characters
const USERNAME_LIMIT: usize = 80;
/// Checked in order when no author name is configured
const IDENTITY_VARS: &[&str] = &["USER", "USERNAME", "LOGNAME"];

/// Presentation options for one share
#[derive(Debug, Clone, PartialEq)]
pub struct ShareOptions {
    pub mode: ShareMode,
    pub show_line_numbers: bool,
    pub show_author: bool,
    pub author_name: Option<String>,
    pub show_file_name: bool,
    /// Hard per-message limit of the remote service for `mode`
    pub max_payload_length: usize,
    /// Minimum characters reserved for decoration around each chunk
    pub wrapper_overhead_length: usize,
    pub color: u32,
}

impl ShareOptions {
    pub fn from_config(config: &ShareConfig) -> Self {
        Self {
            mode: config.mode,
            show_line_numbers: config.show_line_numbers,
            show_author: config.show_author,
            author_name: config.author_name.clone(),
            show_file_name: config.shows_file_name(config.mode),
            max_payload_length: config.max_payload_length(config.mode),
            wrapper_overhead_length: config.wrapper_overhead,
            color: config.color,
        }
    }
}

/// Everything the formatter needs for one share
#[derive(Debug, Clone)]
pub struct ShareRequest {
    pub text: String,
    pub file_extension: String,
    pub file_base_name: String,
    /// 0-based line of the document the text starts on
    pub starting_line: usize,
    pub comment: Option<String>,
    pub options: ShareOptions,
}

/// A contiguous slice of the (possibly numbered) text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    pub index: usize,
    pub total: usize,
    pub body: String,
}

impl Chunk {
    /// `Part i/n` (1-based), only when the text was split
    pub fn part_label(&self) -> Option<String> {
        part_label(self.index + 1, self.total)
    }
}

fn part_label(part: usize, total: usize) -> Option<String> {
    (total > 1).then(|| format!("Part {part}/{total}"))
}

/// Prefix each line with its absolute 1-based number, right-aligned.
///
/// `starting_line` is the 0-based document line of the first line, so a
/// selection starting on line index 5 is numbered from 6.
pub fn number_lines(text: &str, starting_line: usize) -> String {
    text.split('\n')
        .enumerate()
        .map(|(i, line)| {
            format!(
                "{:>width$}{}{}",
                starting_line + i + 1,
                LINE_NUMBER_SEPARATOR,
                line.strip_suffix('\r').unwrap_or(line),
                width = LINE_NUMBER_WIDTH
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Characters left for chunk text once decoration is subtracted
pub fn effective_limit(max_payload_length: usize, overhead: usize) -> Result<usize, ShareError> {
    match max_payload_length.checked_sub(overhead) {
        Some(limit) if limit > 0 => Ok(limit),
        _ => Err(ShareError::configuration(format!(
            "Payload limit of {max_payload_length} characters leaves no room for text \
             after {overhead} characters of wrapper overhead"
        ))),
    }
}

/// Split text into chunks of at most `effective_limit` characters.
///
/// Non-empty text always produces at least one chunk, and the chunk bodies
/// concatenate back to `text`.
pub fn chunk_text(text: &str, effective_limit: usize) -> Result<Vec<Chunk>, ShareError> {
    if effective_limit == 0 {
        return Err(ShareError::configuration(
            "Effective chunk limit must be greater than zero",
        ));
    }
    if text.is_empty() {
        return Err(ShareError::EmptyContent);
    }

    let pieces = chunk_exact(text, effective_limit);
    let total = pieces.len();
    Ok(pieces
        .into_iter()
        .enumerate()
        .map(|(index, body)| Chunk {
            index,
            total,
            body: body.to_string(),
        })
        .collect())
}

/// Build every payload for `request`, in delivery order
pub fn format_request(
    request: &ShareRequest,
    timestamp: DateTime<Utc>,
) -> Result<Vec<Payload>, ShareError> {
    if request.text.is_empty() {
        return Err(ShareError::EmptyContent);
    }

    let options = &request.options;
    let text: Cow<str> = if options.show_line_numbers {
        Cow::Owned(number_lines(&request.text, request.starting_line))
    } else {
        Cow::Borrowed(request.text.as_str())
    };

    let chunks = plan_chunks(request, &text)?;

    let author = options
        .show_author
        .then(|| resolve_author(options.author_name.as_deref()));
    let comment = request
        .comment
        .as_deref()
        .map(str::trim)
        .filter(|c| !c.is_empty());
    if comment.is_some() && options.mode == ShareMode::PlainMessage {
        warn!("Comments are only attached in embed mode; dropping comment");
    }
    let timestamp = timestamp.to_rfc3339_opts(SecondsFormat::Secs, true);

    Ok(chunks
        .iter()
        .map(|chunk| match options.mode {
            ShareMode::Embed => {
                embed_payload(request, chunk, author.as_deref(), comment, &timestamp)
            }
            ShareMode::PlainMessage => plain_payload(request, chunk, author.as_deref()),
        })
        .collect())
}

/// Chunk with an overhead large enough for the decoration of the final part count.
///
/// Part labels grow with the number of parts, so the overhead is re-measured
/// until the chunk count it produces fits the overhead it was computed with.
fn plan_chunks(request: &ShareRequest, text: &str) -> Result<Vec<Chunk>, ShareError> {
    let options = &request.options;
    let mut assumed_total = 1;

    loop {
        let overhead = options
            .wrapper_overhead_length
            .max(decoration_len(request, assumed_total));
        let limit = effective_limit(options.max_payload_length, overhead)?;
        let chunks = chunk_text(text, limit)?;
        let total = chunks.len();

        if decoration_len(request, total) <= overhead {
            debug!(
                "Split {} characters into {} chunk(s) of at most {} (overhead {})",
                char_len(text),
                total,
                limit,
                overhead
            );
            return Ok(chunks);
        }
        assumed_total = total;
    }
}

/// Decoration length of the largest payload when the text has `total` parts
fn decoration_len(request: &ShareRequest, total: usize) -> usize {
    let header = header_line(request, total, total)
        .map(|h| char_len(&h) + 1)
        .unwrap_or(0);
    header + char_len(&code_block(&request.file_extension, ""))
}

/// Line above the code block: file name, plus the part label in plain mode
fn header_line(request: &ShareRequest, part: usize, total: usize) -> Option<String> {
    let file = request
        .options
        .show_file_name
        .then(|| format!("**{}**", request.file_base_name));

    match request.options.mode {
        ShareMode::Embed => file,
        ShareMode::PlainMessage => match (file, part_label(part, total)) {
            (Some(file), Some(label)) => Some(format!("{file} ({label})")),
            (file, None) => file,
            (None, label) => label,
        },
    }
}

fn code_block(extension: &str, body: &str) -> String {
    format!("```{extension}\n{body}\n```")
}

fn compose_body(request: &ShareRequest, chunk: &Chunk) -> String {
    let block = code_block(&request.file_extension, &chunk.body);
    match header_line(request, chunk.index + 1, chunk.total) {
        Some(header) => format!("{header}\n{block}"),
        None => block,
    }
}

fn embed_payload(
    request: &ShareRequest,
    chunk: &Chunk,
    author: Option<&str>,
    comment: Option<&str>,
    timestamp: &str,
) -> Payload {
    let language = display_name(&request.file_extension);
    let title = match chunk.part_label() {
        Some(label) => format!("{language} ({label})"),
        None => language,
    };

    let fields = match comment {
        Some(comment) if chunk.index == 0 => vec![EmbedField {
            name: COMMENT_FIELD.to_string(),
            value: truncate_for_field(comment),
            inline: false,
        }],
        _ => Vec::new(),
    };

    Payload::Embed(EmbedMessage {
        embeds: vec![Embed {
            title: truncate_for_title(&title),
            description: compose_body(request, chunk),
            color: request.options.color,
            timestamp: Some(timestamp.to_string()),
            footer: Some(EmbedFooter {
                text: format!("{TOOL_NAME} v{TOOL_VERSION}"),
            }),
            author: author.map(|name| EmbedAuthor {
                name: truncate_for_title(name),
            }),
            fields,
        }],
    })
}

fn plain_payload(request: &ShareRequest, chunk: &Chunk, author: Option<&str>) -> Payload {
    Payload::Plain(PlainMessage {
        content: compose_body(request, chunk),
        username: author.map(|name| truncate_chars(name, USERNAME_LIMIT)),
    })
}

/// Author label: configured name, else the current user, else "Anonymous"
pub fn resolve_author(author_name: Option<&str>) -> String {
    resolve_author_with(author_name, |key| std::env::var(key).ok())
}

pub fn resolve_author_with<F>(author_name: Option<&str>, lookup: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    author_name
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .or_else(|| {
            IDENTITY_VARS
                .iter()
                .filter_map(|key| lookup(key))
                .map(|v| v.trim().to_string())
                .find(|v| !v.is_empty())
        })
        .unwrap_or_else(|| ANONYMOUS.to_string())
}
