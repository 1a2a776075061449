//! Initial item collection: loaded from a JSON file or the built-in demo.

use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use tracing::info;
use uuid::Uuid;

use studio_core::AppResult;
use studio_core::config::explorer::ExplorerConfig;
use studio_core::error::{AppError, ErrorKind};
use studio_core::types::ItemId;
use studio_entity::item::{Item, ItemKind};

use crate::manager::{ItemTreeManager, TreeSettings};

/// Reads a JSON array of items. Ids that are not UUIDs (`"1"`, `42`) are
/// mapped to stable name-based UUIDs, so `parentId` keys still match.
pub fn load_seed(path: impl AsRef<Path>) -> AppResult<Vec<Item>> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path).map_err(|e| {
        AppError::with_source(
            ErrorKind::Io,
            format!("Failed to read seed '{}': {e}", path.display()),
            e,
        )
    })?;

    let items: Vec<Item> = serde_json::from_str(&raw)?;
    info!(path = %path.display(), items = items.len(), "Seed loaded");
    Ok(items)
}

/// Builds a manager from the configured seed, or from the demo seed when
/// no path is configured.
pub fn manager_from_config(config: &ExplorerConfig) -> AppResult<ItemTreeManager> {
    let items = match &config.seed_path {
        Some(path) => load_seed(path)?,
        None => demo_seed(),
    };

    ItemTreeManager::from_seed(items, TreeSettings::from(config))
}

/// Two root folders, three images at the root and one inside "My Designs".
pub fn demo_seed() -> Vec<Item> {
    vec![
        demo_item(1, None, ItemKind::Folder, "My Designs", None, "2023-10-01"),
        demo_item(2, None, ItemKind::Folder, "Client Cases", None, "2023-10-05"),
        demo_item(
            3,
            None,
            ItemKind::File,
            "Landscape Test",
            Some("https://picsum.photos/400/300?random=1"),
            "2025/11/30 20:22",
        ),
        demo_item(
            4,
            Some(1),
            ItemKind::File,
            "Sock Design V1",
            Some("https://picsum.photos/400/300?random=2"),
            "2025/12/01 12:50",
        ),
        demo_item(
            5,
            None,
            ItemKind::File,
            "Untitled Project",
            Some("https://picsum.photos/400/300?random=3"),
            "2025/12/03 23:48",
        ),
    ]
}

/// Stable id for the n-th demo item.
pub fn demo_id(n: u128) -> ItemId {
    ItemId::from_uuid(Uuid::from_u128(n))
}

fn demo_item(
    n: u128,
    parent: Option<u128>,
    kind: ItemKind,
    name: &str,
    thumbnail_url: Option<&str>,
    created_at: &str,
) -> Item {
    Item {
        id: demo_id(n),
        parent_id: parent.map(demo_id),
        kind,
        name: name.to_string(),
        thumbnail_url: thumbnail_url.map(str::to_string),
        created_at: parse_demo_timestamp(created_at),
    }
}

fn parse_demo_timestamp(given: &str) -> DateTime<Utc> {
    studio_entity::item::timestamp::parse(given).unwrap_or_default()
}
