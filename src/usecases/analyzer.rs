//! Per-document analysis: one exported chat JSON -> participant directory + mention set.
//!
//! Export shapes vary across Telegram versions, so every field access is
//! optional and type-checked: absent, null, or wrong-typed fields degrade to
//! "contributes nothing" instead of failing the document. Only a top-level
//! decode or parse failure aborts a document.

use crate::domain::{ChatSummary, DomainError, UserId};
use serde_json::Value;

/// Analyze one export document's raw bytes.
///
/// Expected top-level shape: an object with an optional `messages` array.
/// A missing or non-array `messages` yields an empty summary, not an error.
///
/// Per message:
/// - `from` + `from_id` record a participant when both are present and
///   non-empty (a numeric id of 0 counts as absent);
/// - `text_entities` entries of type `mention` contribute their `text`;
/// - a list-typed `text` field contributes the `text` of its object parts
///   of type `mention`. A plain-string `text` is not scanned for handles.
///
/// Mentions are stored without the leading `@`.
pub fn analyze_document(bytes: &[u8]) -> Result<ChatSummary, DomainError> {
    let text = std::str::from_utf8(bytes).map_err(|e| DomainError::Decode(e.to_string()))?;
    let data: Value = serde_json::from_str(text).map_err(|e| DomainError::Parse(e.to_string()))?;

    let mut summary = ChatSummary::default();

    let messages = match data.get("messages").and_then(Value::as_array) {
        Some(list) => list.as_slice(),
        None => &[],
    };

    for msg in messages {
        let Some(msg) = msg.as_object() else {
            continue;
        };

        if let (Some(name), Some(id)) = (
            msg.get("from").and_then(author_name),
            msg.get("from_id").and_then(author_id),
        ) {
            summary.users.insert(id, name.to_string());
        }

        if let Some(entities) = msg.get("text_entities").and_then(Value::as_array) {
            for entity in entities {
                if let Some(username) = mention_text(entity) {
                    summary.mentions.insert(username);
                }
            }
        }

        // `text` may itself be a list of mixed string/object parts; mention
        // parts in it carry usernames that never appear in `text_entities`
        // on some export versions.
        if let Some(parts) = msg.get("text").and_then(Value::as_array) {
            for part in parts {
                if let Some(username) = mention_text(part) {
                    summary.mentions.insert(username);
                }
            }
        }
    }

    Ok(summary)
}

/// Display name: a non-empty string, else nothing.
fn author_name(value: &Value) -> Option<&str> {
    value.as_str().filter(|s| !s.is_empty())
}

/// Participant id: a non-empty string or nonzero integer token.
fn author_id(value: &Value) -> Option<UserId> {
    match value {
        Value::String(s) if !s.is_empty() => Some(UserId::Text(s.clone())),
        Value::Number(n) => n.as_i64().filter(|&id| id != 0).map(UserId::Numeric),
        _ => None,
    }
}

/// Extracts the username from a `{"type": "mention", "text": "@handle"}`
/// object, stripping the `@` prefix. Anything else (wrong type tag, missing
/// or non-string text, plain-string part) yields nothing, as does a value
/// that is empty once stripped.
fn mention_text(value: &Value) -> Option<String> {
    let entity = value.as_object()?;
    if entity.get("type").and_then(Value::as_str) != Some("mention") {
        return None;
    }
    entity
        .get("text")
        .and_then(Value::as_str)
        .map(|t| t.trim_start_matches('@'))
        .filter(|t| !t.is_empty())
        .map(String::from)
}
