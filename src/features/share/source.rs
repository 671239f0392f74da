//! Source text to share: a whole document or a line range of it.

use std::path::Path;
use std::str::FromStr;

use crate::core::ShareError;

/// Text taken from a document, with where it came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceText {
    pub text: String,
    /// Path or name of the document
    pub file_name: String,
    /// 0-based line the text starts on
    pub starting_line: usize,
}

impl SourceText {
    /// Extension without the dot, empty when there is none
    pub fn extension(&self) -> String {
        Path::new(&self.file_name)
            .extension()
            .map(|ext| ext.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    pub fn base_name(&self) -> String {
        Path::new(&self.file_name)
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.file_name.clone())
    }

    pub fn line_count(&self) -> usize {
        self.text.split('\n').count()
    }
}

/// Inclusive, 1-based line range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineRange {
    pub start: usize,
    pub end: usize,
}

impl FromStr for LineRange {
    type Err = String;

    /// Accepts `START-END`, `START:END` or a single line `N`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse = |v: &str| {
            v.trim()
                .parse::<usize>()
                .map_err(|_| format!("invalid line number: {:?}", v.trim()))
        };

        let (start, end) = match s.split_once(&['-', ':'][..]) {
            Some((start, end)) => (parse(start)?, parse(end)?),
            None => {
                let line = parse(s)?;
                (line, line)
            }
        };

        if start == 0 {
            return Err("line numbers start at 1".to_string());
        }
        if end < start {
            return Err(format!("range end {end} is before start {start}"));
        }
        Ok(LineRange { start, end })
    }
}

/// Which part of the document to share
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Document,
    Lines(LineRange),
}

/// Cut the selected text out of a document's contents.
///
/// A range running past the end of the document is clamped; a range starting
/// after it is an error.
pub fn select(contents: &str, file_name: &str, selection: Selection) -> Result<SourceText, ShareError> {
    match selection {
        Selection::Document => Ok(SourceText {
            text: contents.to_string(),
            file_name: file_name.to_string(),
            starting_line: 0,
        }),
        Selection::Lines(range) => {
            let lines: Vec<&str> = contents.split('\n').collect();
            if range.start > lines.len() {
                return Err(ShareError::source_error(format!(
                    "Selection starts at line {} but {} has only {} line(s)",
                    range.start,
                    file_name,
                    lines.len()
                )));
            }
            let end = range.end.min(lines.len());
            Ok(SourceText {
                text: lines[range.start - 1..end].join("\n"),
                file_name: file_name.to_string(),
                starting_line: range.start - 1,
            })
        }
    }
}

/// Read a document from disk and select from it
pub async fn read_source(path: &Path, selection: Selection) -> Result<SourceText, ShareError> {
    let contents = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| ShareError::source_error(format!("Failed to read {}: {}", path.display(), e)))?;
    select(&contents, &path.to_string_lossy(), selection)
}
