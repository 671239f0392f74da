//! Webhook request bodies
//!
//! Serializable shapes for Discord's "execute webhook" endpoint: either one
//! embed per request, or plain message content.

use serde::Serialize;

/// One unit of delivery. Serializes to exactly the JSON body of one request.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Payload {
    Embed(EmbedMessage),
    Plain(PlainMessage),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmbedMessage {
    pub embeds: Vec<Embed>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Embed {
    pub title: String,
    pub description: String,
    pub color: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer: Option<EmbedFooter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<EmbedAuthor>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<EmbedField>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmbedFooter {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmbedAuthor {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmbedField {
    pub name: String,
    pub value: String,
    pub inline: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlainMessage {
    pub content: String,
    /// Overrides the webhook's display name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

impl Payload {
    /// The size-limited text: embed description or message content
    pub fn body(&self) -> &str {
        match self {
            Payload::Embed(message) => message
                .embeds
                .first()
                .map(|e| e.description.as_str())
                .unwrap_or_default(),
            Payload::Plain(message) => &message.content,
        }
    }

    pub fn title(&self) -> Option<&str> {
        match self {
            Payload::Embed(message) => message.embeds.first().map(|e| e.title.as_str()),
            Payload::Plain(_) => None,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_plain_message_shape() {
        let payload = Payload::Plain(PlainMessage {
            content: "```text\nHello\n```".to_string(),
            username: None,
        });
        let value: serde_json::Value = serde_json::from_str(&payload.to_json().unwrap()).unwrap();
        assert_eq!(value, json!({ "content": "```text\nHello\n```" }));
    }

    #[test]
    fn test_embed_optional_parts_omitted() {
        let payload = Payload::Embed(EmbedMessage {
            embeds: vec![Embed {
                title: "Rust".to_string(),
                description: "```rs\nfn main() {}\n```".to_string(),
                color: 0x0099ff,
                timestamp: None,
                footer: None,
                author: None,
                fields: vec![],
            }],
        });
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            value,
            json!({
                "embeds": [{
                    "title": "Rust",
                    "description": "```rs\nfn main() {}\n```",
                    "color": 39423
                }]
            })
        );
        assert_eq!(payload.title(), Some("Rust"));
        assert_eq!(payload.body(), "```rs\nfn main() {}\n```");
    }

    #[test]
    fn test_embed_full_shape() {
        let payload = Payload::Embed(EmbedMessage {
            embeds: vec![Embed {
                title: "Python".to_string(),
                description: "x".to_string(),
                color: 1,
                timestamp: Some("2024-01-01T00:00:00+00:00".to_string()),
                footer: Some(EmbedFooter {
                    text: "Discord Share v0.1.0".to_string(),
                }),
                author: Some(EmbedAuthor {
                    name: "ada".to_string(),
                }),
                fields: vec![EmbedField {
                    name: "Comment".to_string(),
                    value: "look".to_string(),
                    inline: false,
                }],
            }],
        });
        let value = serde_json::to_value(&payload).unwrap();
        let embed = &value["embeds"][0];
        assert_eq!(embed["footer"]["text"], "Discord Share v0.1.0");
        assert_eq!(embed["author"]["name"], "ada");
        assert_eq!(embed["fields"][0]["name"], "Comment");
        assert_eq!(embed["fields"][0]["inline"], false);
        assert_eq!(embed["timestamp"], "2024-01-01T00:00:00+00:00");
    }
}
