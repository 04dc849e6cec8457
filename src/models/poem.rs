//! Poem model

use serde::{Deserialize, Serialize};

/// A poem as served by PoetryDB
///
/// Two poems are the same poem when title, author and every line match.
/// There is no server-assigned identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Poem {
    /// Poem title
    pub title: String,
    /// Author name
    pub author: String,
    /// Lines in order (stanza breaks arrive as empty strings)
    pub lines: Vec<String>,
}

impl Poem {
    /// Create a poem from its parts
    pub fn new(title: &str, author: &str, lines: &[&str]) -> Self {
        Self {
            title: title.to_string(),
            author: author.to_string(),
            lines: lines.iter().map(ToString::to_string).collect(),
        }
    }

    /// Number of lines, stanza breaks included
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Get a short preview of the first non-empty line (for list display)
    pub fn preview(&self, max_len: usize) -> String {
        let first = self
            .lines
            .iter()
            .map(|l| l.trim())
            .find(|l| !l.is_empty())
            .unwrap_or_default();

        if first.chars().count() <= max_len {
            first.to_string()
        } else {
            let cut: String = first.chars().take(max_len.saturating_sub(3)).collect();
            format!("{cut}...")
        }
    }
}
