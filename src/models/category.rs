//! Budget categories
//!
//! An allowance is split across four canonical buckets. Data written by older
//! versions may carry other names; those are kept as [`Category::Other`] so
//! they still show up in reports, but new plans and transactions may only use
//! the canonical set.

use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// A budget bucket that allocations and transactions are tagged with
///
/// The derived ordering puts the canonical categories first, in their fixed
/// order, followed by any other names alphabetically.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    Save,
    Spend,
    Share,
    Need,
    /// A non-canonical name tolerated from stored data
    Other(String),
}

impl Category {
    /// The canonical categories in display order
    pub const CANONICAL: [Category; 4] = [
        Category::Save,
        Category::Spend,
        Category::Share,
        Category::Need,
    ];

    /// Parse a canonical category name (case-insensitive)
    pub fn parse(name: &str) -> Result<Self, ValidationError> {
        match Self::canonical(name) {
            Some(category) => Ok(category),
            None => Err(ValidationError::UnknownCategory(name.trim().to_string())),
        }
    }

    /// Map a stored category name, tolerating non-canonical names
    pub fn from_stored(name: &str) -> Result<Self, ValidationError> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptyCategory);
        }

        Ok(Self::canonical(trimmed).unwrap_or_else(|| Category::Other(trimmed.to_string())))
    }

    fn canonical(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "save" => Some(Category::Save),
            "spend" => Some(Category::Spend),
            "share" => Some(Category::Share),
            "need" => Some(Category::Need),
            _ => None,
        }
    }

    pub fn is_canonical(&self) -> bool {
        !matches!(self, Category::Other(_))
    }

    /// The tag used in storage and on the command line
    pub fn as_str(&self) -> &str {
        match self {
            Category::Save => "save",
            Category::Spend => "spend",
            Category::Share => "share",
            Category::Need => "need",
            Category::Other(name) => name,
        }
    }

    /// Capitalised label for reports ("save" -> "Save")
    pub fn title(&self) -> String {
        let name = self.as_str();
        let mut chars = name.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
