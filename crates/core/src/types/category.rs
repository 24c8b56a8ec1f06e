//! Product categories.

use serde::{Deserialize, Serialize};

/// Preferred display ordering for the standard menu sections. Categories
/// outside this list are appended lexicographically.
const PREFERRED_ORDER: [&str; 4] = ["Starters", "Main Courses", "Desserts", "Beverages"];

/// A menu category name.
///
/// Categories are case-normalized at creation time ("title case" on each
/// word) so near-duplicates like `soups` and `Soups ` collapse to one entry.
/// Values deserialized from storage are taken as-is; normalization applies
/// at the creation boundary only.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Category(String);

impl Category {
    /// Wrap an already-normalized category name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Normalize free-form input into a canonical category name.
    ///
    /// Trims, collapses internal whitespace, and title-cases each word.
    /// Returns `None` for empty or whitespace-only input.
    #[must_use]
    pub fn normalized(input: &str) -> Option<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return None;
        }

        let name = trimmed
            .split_whitespace()
            .map(title_case_word)
            .collect::<Vec<_>>()
            .join(" ");
        Some(Self(name))
    }

    /// Get the category name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Category {
    fn from(name: &str) -> Self {
        Self(name.to_owned())
    }
}

impl From<String> for Category {
    fn from(name: String) -> Self {
        Self(name)
    }
}

fn title_case_word(word: &str) -> String {
    let lower = word.to_lowercase();
    let mut chars = lower.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Arrange categories for display: the preferred menu sections first, in
/// their fixed order, then everything else lexicographically.
#[must_use]
pub fn ordered_for_display(categories: &[Category]) -> Vec<Category> {
    let mut ordered: Vec<Category> = PREFERRED_ORDER
        .iter()
        .filter(|preferred| categories.iter().any(|c| c.as_str() == **preferred))
        .map(|preferred| Category::new(*preferred))
        .collect();

    let mut rest: Vec<Category> = categories
        .iter()
        .filter(|c| !PREFERRED_ORDER.contains(&c.as_str()))
        .cloned()
        .collect();
    rest.sort();

    ordered.extend(rest);
    ordered
}
