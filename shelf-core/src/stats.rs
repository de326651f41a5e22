//! Aggregate statistics over a prompt collection.

use crate::prompt::Prompt;
use crate::search::{SortKey, SortOrder, sort_prompts};
use serde::Serialize;
use std::collections::BTreeMap;

/// How many prompts the `most_used` and `recent` lists hold.
pub const TOP_N: usize = 5;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptStats {
    pub total: usize,
    pub categories: BTreeMap<String, usize>,
    pub tones: BTreeMap<String, usize>,
    pub tags: BTreeMap<String, usize>,
    pub total_usage: u64,
    /// Highest usage count first. Order among equal counts is unspecified.
    pub most_used: Vec<Prompt>,
    /// Most recently updated first. Order among equal timestamps is unspecified.
    pub recent: Vec<Prompt>,
}

impl PromptStats {
    pub fn compute(prompts: &[Prompt]) -> PromptStats {
        let mut stats = PromptStats {
            total: prompts.len(),
            ..Default::default()
        };

        for prompt in prompts {
            *stats.categories.entry(prompt.category.clone()).or_default() += 1;
            *stats.tones.entry(prompt.tone.clone()).or_default() += 1;
            for tag in &prompt.tags {
                *stats.tags.entry(tag.clone()).or_default() += 1;
            }
            stats.total_usage = stats.total_usage.saturating_add(prompt.usage_count);
        }

        stats.most_used = top(prompts, SortKey::UsageCount);
        stats.recent = top(prompts, SortKey::UpdatedAt);
        stats
    }
}

fn top(prompts: &[Prompt], key: SortKey) -> Vec<Prompt> {
    let mut sorted = prompts.to_vec();
    sort_prompts(&mut sorted, key, SortOrder::Desc);
    sorted.truncate(TOP_N);
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::PromptInput;
    use chrono::{TimeZone, Utc};

    fn prompt(
        id: &str,
        category: &str,
        tone: &str,
        tags: &[&str],
        usage: u64,
        updated: i64,
    ) -> Prompt {
        let mut prompt = Prompt::from_input(
            id.to_string(),
            PromptInput {
                title: Some(id.to_string()),
                content: Some("content".to_string()),
                category: Some(category.to_string()),
                tone: Some(tone.to_string()),
                tags: Some(tags.iter().map(|t| t.to_string()).collect()),
                ..Default::default()
            },
            Utc.timestamp_opt(0, 0).unwrap(),
        );
        prompt.usage_count = usage;
        prompt.updated_at = Utc.timestamp_opt(updated, 0).unwrap();
        prompt
    }

    #[test]
    fn test_empty_collection() {
        let stats = PromptStats::compute(&[]);
        assert_eq!(stats.total, 0);
        assert_eq!(stats.total_usage, 0);
        assert!(stats.categories.is_empty());
        assert!(stats.most_used.is_empty());
        assert!(stats.recent.is_empty());
    }

    #[test]
    fn test_counts() {
        let prompts = vec![
            prompt("a", "Marketing", "Formal", &["x", "y"], 3, 1),
            prompt("b", "Marketing", "Casual", &["x", "x"], 4, 2),
            prompt("c", "Studies", "Formal", &[], 0, 3),
        ];
        let stats = PromptStats::compute(&prompts);

        assert_eq!(stats.total, 3);
        assert_eq!(stats.categories["Marketing"], 2);
        assert_eq!(stats.categories["Studies"], 1);
        assert_eq!(stats.categories.values().sum::<usize>(), stats.total);
        assert_eq!(stats.tones["Formal"], 2);
        assert_eq!(stats.tones["Casual"], 1);
        assert_eq!(stats.tags["x"], 3);
        assert_eq!(stats.tags["y"], 1);
        assert_eq!(stats.total_usage, 7);
    }

    #[test]
    fn test_total_usage_saturates() {
        let prompts = vec![
            prompt("a", "General", "Neutral", &[], u64::MAX, 1),
            prompt("b", "General", "Neutral", &[], 2, 2),
        ];
        assert_eq!(PromptStats::compute(&prompts).total_usage, u64::MAX);
    }

    #[test]
    fn test_top_lists_are_capped_and_ordered() {
        let prompts: Vec<Prompt> = (0..8)
            .map(|i| prompt(&format!("p{}", i), "General", "Neutral", &[], i as u64, 100 - i))
            .collect();
        let stats = PromptStats::compute(&prompts);

        assert_eq!(stats.most_used.len(), TOP_N);
        let usage: Vec<u64> = stats.most_used.iter().map(|p| p.usage_count).collect();
        assert_eq!(usage, vec![7, 6, 5, 4, 3]);

        assert_eq!(stats.recent.len(), TOP_N);
        let recent: Vec<&str> = stats.recent.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(recent, vec!["p0", "p1", "p2", "p3", "p4"]);
    }

    #[test]
    fn test_serializes_camel_case() {
        let stats = PromptStats::compute(&[prompt("a", "General", "Neutral", &[], 2, 0)]);
        let json = serde_json::to_value(&stats).unwrap();
        assert_eq!(json["totalUsage"], 2);
        assert!(json["mostUsed"].is_array());
        assert!(json["recent"].is_array());
    }
}
