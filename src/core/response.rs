//! Response chunking and Discord message utilities
//!
//! - **Version**: 2.0.0
//! - **Since**: 0.1.0
//!
//! ## Changelog
//! - 2.0.0: Lossless fixed-width chunking for shared source text, char-based limits
//! - 1.0.0: Embed/message limits with truncation helpers

/// Discord embed description limit
pub const EMBED_LIMIT: usize = 4096;
/// Discord message content limit
pub const MESSAGE_LIMIT: usize = 2000;
/// Discord embed title limit
pub const TITLE_LIMIT: usize = 256;
/// Discord embed field value limit
pub const FIELD_LIMIT: usize = 1024;

/// Length of `text` as Discord counts it (characters, not bytes)
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Split text into consecutive pieces of at most `max_chars` characters.
///
/// Nothing is trimmed, dropped or reordered: joining the pieces gives back
/// `text` exactly. Boundaries always fall on UTF-8 character boundaries and
/// may land in the middle of a line. The last piece may be shorter.
///
/// Returns no pieces for empty text or a zero limit.
pub fn chunk_exact(text: &str, max_chars: usize) -> Vec<&str> {
    if text.is_empty() || max_chars == 0 {
        return Vec::new();
    }

    let mut chunks = Vec::new();
    let mut start = 0;
    let mut count = 0;

    for (idx, _) in text.char_indices() {
        if count == max_chars {
            chunks.push(&text[start..idx]);
            start = idx;
            count = 0;
        }
        count += 1;
    }
    chunks.push(&text[start..]);

    chunks
}

/// Truncate text to `limit` characters, adding ellipsis if needed
pub fn truncate_chars(text: &str, limit: usize) -> String {
    if char_len(text) <= limit {
        return text.to_string();
    }
    // Room for "..."
    let keep = limit.saturating_sub(3);
    let mut out: String = text.chars().take(keep).collect();
    out.push_str("...");
    out
}

/// Truncate text to fit an embed title
pub fn truncate_for_title(text: &str) -> String {
    truncate_chars(text, TITLE_LIMIT)
}

/// Truncate text to fit an embed field value
pub fn truncate_for_field(text: &str) -> String {
    truncate_chars(text, FIELD_LIMIT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_text_single_chunk() {
        assert_eq!(chunk_exact("hello", 100), vec!["hello"]);
    }

    #[test]
    fn test_exactly_at_limit() {
        let text = "a".repeat(100);
        let result = chunk_exact(&text, 100);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].len(), 100);
    }

    #[test]
    fn test_one_over_limit() {
        let text = "a".repeat(101);
        let result = chunk_exact(&text, 100);
        assert_eq!(result.len(), 2);
        assert_eq!(result[1], "a");
    }

    #[test]
    fn test_chunks_rebuild_original() {
        let text = "fn main() {\n    println!(\"hi\");\n}\n\n// trailing  \r\n";
        for limit in 1..=text.len() + 1 {
            let chunks = chunk_exact(text, limit);
            assert_eq!(chunks.concat(), text, "limit {limit}");
            assert!(chunks.iter().all(|c| char_len(c) <= limit));
        }
    }

    #[test]
    fn test_chunks_are_maximal_except_last() {
        let chunks = chunk_exact("abcdefghij", 3);
        assert_eq!(chunks, vec!["abc", "def", "ghi", "j"]);
    }

    #[test]
    fn test_utf8_safety() {
        let text = "Hello 世界! ".repeat(50);
        let chunks = chunk_exact(&text, 7);
        for chunk in &chunks {
            assert!(char_len(chunk) <= 7);
        }
        assert_eq!(chunks.concat(), text);
    }

    #[test]
    fn test_empty_text_or_zero_limit() {
        assert!(chunk_exact("", 10).is_empty());
        assert!(chunk_exact("abc", 0).is_empty());
    }

    #[test]
    fn test_truncate_short() {
        assert_eq!(truncate_for_field("short text"), "short text");
    }

    #[test]
    fn test_truncate_long() {
        let result = truncate_for_field(&"é".repeat(2000));
        assert_eq!(char_len(&result), FIELD_LIMIT);
        assert!(result.ends_with("..."));
    }
}
