//! # Search
//!
//! Filtering and ordering of prompt collections.
//!
//! [`SearchFilters`] mirrors the query shape callers send (`search`, `category`,
//! `tone`, `tag`, `sortBy`, `sortOrder`). Every filter is optional and an empty
//! string means "no constraint"; the filters that are set are AND-combined.

use crate::prompt::Prompt;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortKey {
    Title,
    CreatedAt,
    #[default]
    UpdatedAt,
    UsageCount,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortKey {
    /// Parses a sort key; anything unrecognized sorts by `updatedAt`.
    pub fn parse(value: &str) -> SortKey {
        match value {
            "title" => SortKey::Title,
            "createdAt" => SortKey::CreatedAt,
            "usageCount" => SortKey::UsageCount,
            _ => SortKey::UpdatedAt,
        }
    }

    fn compare(self, a: &Prompt, b: &Prompt) -> Ordering {
        match self {
            SortKey::Title => compare_titles(&a.title, &b.title),
            SortKey::CreatedAt => a.created_at.cmp(&b.created_at),
            SortKey::UpdatedAt => a.updated_at.cmp(&b.updated_at),
            SortKey::UsageCount => a.usage_count.cmp(&b.usage_count),
        }
    }
}

impl SortOrder {
    /// Only `asc` sorts ascending.
    pub fn parse(value: &str) -> SortOrder {
        if value == "asc" { SortOrder::Asc } else { SortOrder::Desc }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchFilters {
    pub search: Option<String>,
    pub category: Option<String>,
    pub tone: Option<String>,
    pub tag: Option<String>,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
}

impl SearchFilters {
    pub fn sort_key(&self) -> SortKey {
        self.sort_by.as_deref().map(SortKey::parse).unwrap_or_default()
    }

    pub fn sort_order(&self) -> SortOrder {
        self.sort_order.as_deref().map(SortOrder::parse).unwrap_or_default()
    }

    /// Whether `prompt` satisfies every filter that is set.
    pub fn matches(&self, prompt: &Prompt) -> bool {
        if let Some(term) = non_empty(&self.search) {
            if !matches_text(prompt, &term.to_lowercase()) {
                return false;
            }
        }
        if let Some(category) = non_empty(&self.category) {
            if prompt.category != category {
                return false;
            }
        }
        if let Some(tone) = non_empty(&self.tone) {
            if prompt.tone != tone {
                return false;
            }
        }
        if let Some(tag) = non_empty(&self.tag) {
            if !prompt.has_tag(tag) {
                return false;
            }
        }
        true
    }

    /// Keeps the matching prompts and sorts them. The sort is stable.
    pub fn apply(&self, prompts: Vec<Prompt>) -> Vec<Prompt> {
        let mut found: Vec<Prompt> = prompts.into_iter().filter(|p| self.matches(p)).collect();
        sort_prompts(&mut found, self.sort_key(), self.sort_order());
        found
    }
}

pub fn sort_prompts(prompts: &mut [Prompt], key: SortKey, order: SortOrder) {
    prompts.sort_by(|a, b| {
        let ordering = key.compare(a, b);
        match order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    });
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

// `term` is already lowercased.
fn matches_text(prompt: &Prompt, term: &str) -> bool {
    prompt.title.to_lowercase().contains(term)
        || prompt.description.to_lowercase().contains(term)
        || prompt.content.to_lowercase().contains(term)
        || prompt.tags.iter().any(|tag| tag.to_lowercase() == term)
}

fn compare_titles(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase()).then_with(|| a.cmp(b))
}
