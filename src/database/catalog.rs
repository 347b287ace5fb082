use crate::models::FoodEntry;

/// Read-only, ordered reference table of food entries.
///
/// Insertion order is significant: partial-match lookups return the first
/// entry that matches, so callers relying on a specific precedence must load
/// entries in that order. The table may be empty; resolution degrades to
/// heuristic estimation in that case.
#[derive(Debug, Clone, Default)]
pub struct FoodDatabase {
    entries: Vec<FoodEntry>,
}

impl FoodDatabase {
    /// Build a database from a list of entries.
    ///
    /// Deduplicates case-insensitively: the last occurrence's values win, at
    /// the first occurrence's position.
    pub fn new(entries: Vec<FoodEntry>) -> Self {
        let mut deduped: Vec<FoodEntry> = Vec::with_capacity(entries.len());
        for entry in entries {
            match deduped.iter().position(|e| e.key() == entry.key()) {
                Some(idx) => deduped[idx] = entry,
                None => deduped.push(entry),
            }
        }
        Self { entries: deduped }
    }

    /// An empty database (heuristic-only resolution).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Exact, case-sensitive lookup on the stored name.
    pub fn exact(&self, name: &str) -> Option<&FoodEntry> {
        self.entries.iter().find(|e| e.name == name)
    }

    /// Case-insensitive lookup by canonical key.
    pub fn get(&self, name: &str) -> Option<&FoodEntry> {
        let key = name.to_lowercase();
        self.entries.iter().find(|e| e.key() == key)
    }

    /// Entries in stored order.
    pub fn iter(&self) -> impl Iterator<Item = &FoodEntry> {
        self.entries.iter()
    }

    /// Stored dish names, in order.
    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
