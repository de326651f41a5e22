//! Rendering of command results on stdout.

use serde::Serialize;
use shelf_core::catalog::Catalog;
use shelf_core::prompt::{DEFAULT_CATEGORY, DEFAULT_TONE, Prompt};
use shelf_core::stats::PromptStats;
use std::collections::BTreeMap;
use std::fmt::Write;

pub fn json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// The `--json` body for a successful delete.
pub fn deleted(id: &str) -> serde_json::Value {
    serde_json::json!({ "id": id, "deleted": true })
}

/// One line per prompt: id, usage count, category and title.
pub fn prompt_list(prompts: &[Prompt]) -> String {
    if prompts.is_empty() {
        return "No prompts found.\n".to_string();
    }

    let mut out = String::new();
    for prompt in prompts {
        let example = if prompt.is_example { " (example)" } else { "" };
        let _ = writeln!(
            out,
            "{}  [{}x]  {} / {}  {}{}",
            prompt.id, prompt.usage_count, prompt.category, prompt.tone, prompt.title, example
        );
    }
    out
}

/// Full view of one prompt. Categories and tones missing from `catalog` are marked as custom.
pub fn prompt_detail(prompt: &Prompt, catalog: &Catalog) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", prompt.title);
    let _ = writeln!(out, "  id:          {}", prompt.id);
    if !prompt.description.is_empty() {
        let _ = writeln!(out, "  description: {}", prompt.description);
    }
    let category = match catalog.category(&prompt.category) {
        Some(known) => format!("{} {}", known.icon, known.name),
        None => {
            let mark = custom_mark(false, &prompt.category, DEFAULT_CATEGORY);
            format!("{}{}", prompt.category, mark)
        }
    };
    let _ = writeln!(out, "  category:    {}", category);
    let mark = custom_mark(catalog.has_tone(&prompt.tone), &prompt.tone, DEFAULT_TONE);
    let _ = writeln!(out, "  tone:        {}{}", prompt.tone, mark);
    if !prompt.tags.is_empty() {
        let _ = writeln!(out, "  tags:        {}", prompt.tags.join(", "));
    }
    let _ = writeln!(out, "  used:        {} times", prompt.usage_count);
    let _ = writeln!(out, "  created:     {}", prompt.created_at.to_rfc3339());
    let _ = writeln!(out, "  updated:     {}", prompt.updated_at.to_rfc3339());
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", prompt.content);
    out
}

pub fn stats(stats: &PromptStats) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Prompts:     {}", stats.total);
    let _ = writeln!(out, "Total usage: {}", stats.total_usage);
    counts(&mut out, "Categories", &stats.categories);
    counts(&mut out, "Tones", &stats.tones);
    counts(&mut out, "Tags", &stats.tags);

    let _ = writeln!(out, "\nMost used:");
    for prompt in &stats.most_used {
        let _ = writeln!(out, "  {:>4}x  {}", prompt.usage_count, prompt.title);
    }
    let _ = writeln!(out, "\nRecently updated:");
    for prompt in &stats.recent {
        let _ = writeln!(out, "  {}  {}", prompt.updated_at.format("%Y-%m-%d %H:%M"), prompt.title);
    }
    out
}

pub fn catalog(catalog: &Catalog) -> String {
    let mut out = String::from("Categories:\n");
    for category in &catalog.categories {
        let _ = writeln!(out, "  {} {} ({})", category.icon, category.name, category.color);
    }
    let _ = writeln!(out, "\nTones:\n  {}", catalog.tones.join(", "));
    out
}

fn custom_mark(known: bool, value: &str, default: &str) -> &'static str {
    if known || value == default { "" } else { " (custom)" }
}

fn counts(out: &mut String, heading: &str, counts: &BTreeMap<String, usize>) {
    let _ = writeln!(out, "\n{}:", heading);
    for (name, count) in counts {
        let _ = writeln!(out, "  {:<24} {}", name, count);
    }
}
