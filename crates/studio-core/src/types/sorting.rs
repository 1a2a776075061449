//! Sorting types for child listings.

use serde::{Deserialize, Serialize};

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Ascending order.
    #[default]
    Asc,
    /// Descending order.
    Desc,
}

impl SortDirection {
    /// Apply this direction to an ascending comparison result.
    pub fn apply(&self, ordering: std::cmp::Ordering) -> std::cmp::Ordering {
        match self {
            Self::Asc => ordering,
            Self::Desc => ordering.reverse(),
        }
    }
}

/// Field used to order children of a folder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    /// Keep the store's insertion order.
    #[default]
    Insertion,
    /// Case-insensitive display name.
    Name,
    /// Creation timestamp.
    CreatedAt,
    /// Folders before files.
    Kind,
}

/// A child ordering consisting of a key, a direction, and whether folders
/// are always grouped ahead of files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ChildOrder {
    /// Field to sort by.
    #[serde(default)]
    pub key: SortKey,
    /// Sort direction.
    #[serde(default)]
    pub direction: SortDirection,
    /// Group folders ahead of files regardless of `key`.
    #[serde(default)]
    pub folders_first: bool,
}

impl ChildOrder {
    /// Create a new child ordering.
    pub fn new(key: SortKey, direction: SortDirection) -> Self {
        Self {
            key,
            direction,
            folders_first: false,
        }
    }

    /// Create an ascending ordering on the given key.
    pub fn asc(key: SortKey) -> Self {
        Self::new(key, SortDirection::Asc)
    }

    /// Create a descending ordering on the given key.
    pub fn desc(key: SortKey) -> Self {
        Self::new(key, SortDirection::Desc)
    }

    /// Group folders ahead of files.
    pub fn with_folders_first(mut self, folders_first: bool) -> Self {
        self.folders_first = folders_first;
        self
    }
}
