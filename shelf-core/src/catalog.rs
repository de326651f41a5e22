//! Read-only reference data: the default categories and the available tones.

use crate::file_storage::read_json;
use crate::storage::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: u32,
    pub name: String,
    pub icon: String,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    pub categories: Vec<Category>,
    pub tones: Vec<String>,
}

impl Default for Catalog {
    fn default() -> Self {
        let category = |id, name: &str, icon: &str, color: &str| Category {
            id,
            name: name.to_string(),
            icon: icon.to_string(),
            color: color.to_string(),
        };

        Self {
            categories: vec![
                category(1, "Studies", "📚", "#3498db"),
                category(2, "Marketing", "📈", "#e74c3c"),
                category(3, "Programming", "💻", "#2ecc71"),
                category(4, "Customer Service", "🎧", "#f39c12"),
                category(5, "Creativity", "🎨", "#9b59b6"),
            ],
            tones: ["Formal", "Creative", "Instructive", "Persuasive", "Casual", "Technical"]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}

impl Catalog {
    /// Reads a catalog document, falling back to the built-in one when the file is absent.
    pub fn load(path: &Path) -> Result<Catalog> {
        Ok(read_json(path)?.unwrap_or_default())
    }

    pub fn category(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.name == name)
    }

    pub fn has_tone(&self, tone: &str) -> bool {
        self.tones.iter().any(|t| t == tone)
    }
}
