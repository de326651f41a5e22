//! # Prompt
//!
//! The prompt record and the optional-field input used to create and patch it.
//!
//! Records are persisted with camelCase field names. Loading is lenient: any
//! field other than `id`, `createdAt` and `updatedAt` may be missing from the
//! document and is filled in with its default.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

pub const DEFAULT_CATEGORY: &str = "General";
pub const DEFAULT_TONE: &str = "Neutral";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prompt {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub content: String,
    #[serde(default = "default_category")]
    pub category: String,
    #[serde(default, deserialize_with = "lenient_tags")]
    pub tags: Vec<String>,
    #[serde(default = "default_tone")]
    pub tone: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub is_example: bool,
    #[serde(default)]
    pub usage_count: u64,
}

/// Data for creating a prompt, or a sparse patch applied on update.
///
/// Only the fields that are `Some` take effect. The usage counter is not part
/// of the input; it only moves through [`Prompt::record_use`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PromptInput {
    pub title: Option<String>,
    pub description: Option<String>,
    pub content: Option<String>,
    pub category: Option<String>,
    pub tags: Option<Vec<String>>,
    pub tone: Option<String>,
    pub is_example: Option<bool>,
}

impl Prompt {
    /// Builds a fresh record from `input`, stamping both timestamps with `now`.
    ///
    /// Does not validate; the repository rejects missing titles and content
    /// before calling this.
    pub fn from_input(id: String, input: PromptInput, now: DateTime<Utc>) -> Prompt {
        let mut prompt = Prompt {
            id,
            title: input.title.unwrap_or_default(),
            description: input.description.unwrap_or_default(),
            content: input.content.unwrap_or_default(),
            category: input.category.unwrap_or_default(),
            tags: input.tags.unwrap_or_default(),
            tone: input.tone.unwrap_or_default(),
            created_at: now,
            updated_at: now,
            is_example: input.is_example.unwrap_or(false),
            usage_count: 0,
        };
        prompt.normalize();
        prompt
    }

    /// Returns a copy with `patch` applied and `updated_at` set to `now`.
    ///
    /// `id` and `created_at` are never touched.
    pub fn patched(&self, patch: PromptInput, now: DateTime<Utc>) -> Prompt {
        let mut next = self.clone();
        if let Some(title) = patch.title {
            next.title = title;
        }
        if let Some(description) = patch.description {
            next.description = description;
        }
        if let Some(content) = patch.content {
            next.content = content;
        }
        if let Some(category) = patch.category {
            next.category = category;
        }
        if let Some(tags) = patch.tags {
            next.tags = tags;
        }
        if let Some(tone) = patch.tone {
            next.tone = tone;
        }
        if let Some(is_example) = patch.is_example {
            next.is_example = is_example;
        }
        next.updated_at = now;
        next.normalize();
        next
    }

    /// Returns a copy with the usage count bumped by one and `updated_at` set to `now`.
    pub(crate) fn record_use(&self, now: DateTime<Utc>) -> Prompt {
        let mut next = self.clone();
        next.usage_count = next.usage_count.saturating_add(1);
        next.updated_at = now;
        next
    }

    /// Replaces empty category and tone with their defaults.
    pub fn normalize(&mut self) {
        if self.category.is_empty() {
            self.category = DEFAULT_CATEGORY.to_string();
        }
        if self.tone.is_empty() {
            self.tone = DEFAULT_TONE.to_string();
        }
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

fn default_category() -> String {
    DEFAULT_CATEGORY.to_string()
}

fn default_tone() -> String {
    DEFAULT_TONE.to_string()
}

// Anything that isn't an array of strings loads as no tags.
fn lenient_tags<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    let tags = match value {
        serde_json::Value::Array(items) => items
            .into_iter()
            .filter_map(|item| match item {
                serde_json::Value::String(tag) => Some(tag),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    };
    Ok(tags)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(secs, 0).unwrap()
    }

    #[test]
    fn test_from_input_applies_defaults() {
        let input = PromptInput {
            title: Some("Title".to_string()),
            content: Some("Body".to_string()),
            ..Default::default()
        };

        let prompt = Prompt::from_input("abc".to_string(), input, at(100));

        assert_eq!(prompt.id, "abc");
        assert_eq!(prompt.description, "");
        assert_eq!(prompt.category, DEFAULT_CATEGORY);
        assert_eq!(prompt.tone, DEFAULT_TONE);
        assert!(prompt.tags.is_empty());
        assert!(!prompt.is_example);
        assert_eq!(prompt.usage_count, 0);
        assert_eq!(prompt.created_at, at(100));
        assert_eq!(prompt.updated_at, at(100));
    }

    #[test]
    fn test_from_input_empty_category_falls_back() {
        let input = PromptInput {
            title: Some("Title".to_string()),
            content: Some("Body".to_string()),
            category: Some(String::new()),
            tone: Some(String::new()),
            ..Default::default()
        };

        let prompt = Prompt::from_input("abc".to_string(), input, at(0));
        assert_eq!(prompt.category, "General");
        assert_eq!(prompt.tone, "Neutral");
    }

    #[test]
    fn test_patched_keeps_unspecified_fields() {
        let original = Prompt::from_input(
            "abc".to_string(),
            PromptInput {
                title: Some("Old".to_string()),
                content: Some("Body".to_string()),
                tags: Some(vec!["a".to_string(), "b".to_string()]),
                category: Some("Marketing".to_string()),
                ..Default::default()
            },
            at(10),
        );

        let patch = PromptInput {
            title: Some("New".to_string()),
            ..Default::default()
        };
        let next = original.patched(patch, at(20));

        assert_eq!(next.title, "New");
        assert_eq!(next.content, "Body");
        assert_eq!(next.tags, vec!["a".to_string(), "b".to_string()]);
        assert_eq!(next.category, "Marketing");
        assert_eq!(next.id, "abc");
        assert_eq!(next.created_at, at(10));
        assert_eq!(next.updated_at, at(20));
    }

    #[test]
    fn test_serializes_camel_case() {
        let prompt = Prompt::from_input(
            "abc".to_string(),
            PromptInput {
                title: Some("T".to_string()),
                content: Some("C".to_string()),
                ..Default::default()
            },
            at(0),
        );

        let json = serde_json::to_value(&prompt).unwrap();
        let object = json.as_object().unwrap();
        for field in [
            "id", "title", "description", "content", "category", "tags", "tone",
            "createdAt", "updatedAt", "isExample", "usageCount",
        ] {
            assert!(object.contains_key(field), "missing field {}", field);
        }
        assert_eq!(object.len(), 11);
    }

    #[test]
    fn test_lenient_load_of_sparse_record() {
        let json = r#"{
            "id": "x1",
            "title": "Only a title",
            "createdAt": "2024-05-01T10:00:00.000Z",
            "updatedAt": "2024-05-02T10:00:00.000Z",
            "tags": "not-a-list"
        }"#;

        let prompt: Prompt = serde_json::from_str(json).unwrap();
        assert_eq!(prompt.title, "Only a title");
        assert_eq!(prompt.content, "");
        assert_eq!(prompt.category, "General");
        assert_eq!(prompt.tone, "Neutral");
        assert!(prompt.tags.is_empty());
        assert_eq!(prompt.usage_count, 0);
        assert!(!prompt.is_example);
    }

    #[test]
    fn test_load_without_timestamps_fails() {
        let json = r#"{ "id": "x1", "title": "T", "content": "C" }"#;
        let result: Result<Prompt, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_input_deserializes_partial_patch() {
        let patch: PromptInput = serde_json::from_str(r#"{ "isExample": true }"#).unwrap();
        assert_eq!(patch.is_example, Some(true));
        assert!(patch.title.is_none());
        assert!(patch.tags.is_none());
    }

    #[test]
    fn test_patch_cannot_set_usage_count() {
        let mut original = Prompt::from_input("abc".to_string(), PromptInput::default(), at(0));
        original.usage_count = 4;

        let patch: PromptInput =
            serde_json::from_str(r#"{ "usageCount": 99, "title": "T" }"#).unwrap();
        let next = original.patched(patch, at(1));

        assert_eq!(next.title, "T");
        assert_eq!(next.usage_count, 4);
    }

    #[test]
    fn test_record_use() {
        let original = Prompt::from_input("abc".to_string(), PromptInput::default(), at(0));

        let used = original.record_use(at(5));
        assert_eq!(used.usage_count, 1);
        assert_eq!(used.updated_at, at(5));
        assert_eq!(used.created_at, at(0));
    }

    #[test]
    fn test_record_use_saturates() {
        let mut original = Prompt::from_input("abc".to_string(), PromptInput::default(), at(0));
        original.usage_count = u64::MAX;

        assert_eq!(original.record_use(at(1)).usage_count, u64::MAX);
    }
}
