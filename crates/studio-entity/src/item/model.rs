//! Item entity model.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use studio_core::AppError;
use studio_core::types::ItemId;

/// Whether an item is a folder or a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    /// A container for other items.
    Folder,
    /// A generated image.
    File,
}

impl ItemKind {
    /// Return the kind as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Folder => "folder",
            Self::File => "file",
        }
    }

    /// Human-readable label used in listings.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Folder => "Folder",
            Self::File => "Image",
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ItemKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "folder" => Ok(Self::Folder),
            "file" => Ok(Self::File),
            _ => Err(AppError::validation(format!(
                "Invalid item kind: '{s}'. Expected one of: folder, file"
            ))),
        }
    }
}

/// A folder or file in the project tree.
///
/// Serialized with the camelCase field names used by seed files. Ids may be
/// read from plain string or integer keys; see [`super::seed_id`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Unique item identifier.
    #[serde(with = "super::seed_id")]
    pub id: ItemId,
    /// Containing folder (None for the root level).
    #[serde(default, with = "super::seed_id::option")]
    pub parent_id: Option<ItemId>,
    /// Folder or file.
    #[serde(rename = "type")]
    pub kind: ItemKind,
    /// Display name.
    pub name: String,
    /// Preview image, files only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
    /// When the item was created.
    #[serde(with = "super::timestamp")]
    pub created_at: DateTime<Utc>,
}

impl Item {
    /// Build a new folder with a fresh identifier, stamped now.
    pub fn folder(parent_id: Option<ItemId>, name: impl Into<String>) -> Self {
        Self {
            id: ItemId::new(),
            parent_id,
            kind: ItemKind::Folder,
            name: name.into(),
            thumbnail_url: None,
            created_at: Utc::now(),
        }
    }

    /// Build a new file with a fresh identifier, stamped now.
    pub fn file(
        parent_id: Option<ItemId>,
        name: impl Into<String>,
        thumbnail_url: impl Into<String>,
    ) -> Self {
        Self {
            id: ItemId::new(),
            parent_id,
            kind: ItemKind::File,
            name: name.into(),
            thumbnail_url: Some(thumbnail_url.into()),
            created_at: Utc::now(),
        }
    }

    /// Check if this item is a folder.
    pub fn is_folder(&self) -> bool {
        self.kind == ItemKind::Folder
    }

    /// Check if this item is a file.
    pub fn is_file(&self) -> bool {
        self.kind == ItemKind::File
    }

    /// Check if this item sits at the root level (no parent).
    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }

    /// Creation date as `YYYY-MM-DD`.
    pub fn created_date(&self) -> String {
        self.created_at.format("%Y-%m-%d").to_string()
    }
}
