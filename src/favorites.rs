//! Favorite poems, kept as one JSON list in the key-value table
//!
//! Every mutation re-reads and rewrites the whole list. There is no
//! protection against two writers interleaving; the last write wins.

use crate::db::Database;
use crate::models::Poem;

/// Key the favorites list is stored under
pub const FAVORITES_KEY: &str = "favorited_poems";

/// Deduplicated list of favorite poems
pub struct FavoritesStore<'a> {
    db: &'a Database,
}

impl<'a> FavoritesStore<'a> {
    /// Create a store backed by `db`
    pub const fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// All favorites in insertion order
    ///
    /// Missing or unreadable data reads as an empty list.
    pub fn get_all(&self) -> Vec<Poem> {
        let raw = match self.db.get_value(FAVORITES_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                tracing::warn!("Failed to read favorites: {e}");
                return Vec::new();
            }
        };

        serde_json::from_str(&raw).unwrap_or_else(|e| {
            tracing::warn!("Ignoring corrupt favorites data: {e}");
            Vec::new()
        })
    }

    /// Whether `poem` is a favorite
    pub fn is_favorite(&self, poem: &Poem) -> bool {
        self.get_all().contains(poem)
    }

    /// Add `poem` unless an equal poem is already present
    pub fn add(&self, poem: &Poem) {
        let mut current = self.get_all();
        if !current.contains(poem) {
            current.push(poem.clone());
            self.save(&current);
        }
    }

    /// Remove every entry equal to `poem`
    pub fn remove(&self, poem: &Poem) {
        let mut current = self.get_all();
        current.retain(|p| p != poem);
        self.save(&current);
    }

    /// Flip the favorite status of `poem` and return the new status
    pub fn toggle(&self, poem: &Poem) -> bool {
        if self.is_favorite(poem) {
            self.remove(poem);
        } else {
            self.add(poem);
        }
        self.is_favorite(poem)
    }

    /// Favorite at `index`, in insertion order
    pub fn get(&self, index: usize) -> Option<Poem> {
        self.get_all().into_iter().nth(index)
    }

    /// Remove the favorite at `index` and return it
    pub fn remove_at(&self, index: usize) -> Option<Poem> {
        let poem = self.get(index)?;
        self.remove(&poem);
        Some(poem)
    }

    fn save(&self, poems: &[Poem]) {
        let json = match serde_json::to_string(poems) {
            Ok(json) => json,
            Err(e) => {
                tracing::warn!("Failed to encode favorites: {e}");
                return;
            }
        };

        if let Err(e) = self.db.set_value(FAVORITES_KEY, &json) {
            tracing::warn!("Failed to save favorites: {e}");
        }
    }
}
