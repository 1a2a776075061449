//! Folder listing.

use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use crate::output::{self, OutputFormat};
use studio_core::AppResult;
use studio_core::config::AppConfig;
use studio_entity::item::Item;
use studio_service::ItemTreeManager;

use super::SortArgs;

/// Arguments for the ls command
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Folder to list (omit or `root` for the top level)
    pub parent: Option<String>,

    /// Ordering
    #[command(flatten)]
    pub sort: SortArgs,
}

/// Listing row
#[derive(Debug, Serialize, Tabled)]
pub struct ItemRow {
    /// Item ID
    pub id: String,
    /// Name
    pub name: String,
    /// Kind
    #[serde(rename = "type")]
    #[tabled(rename = "type")]
    pub kind: String,
    /// Created date
    pub created: String,
}

impl ItemRow {
    /// Row for one item, with an id that resolves back to it.
    pub fn new(manager: &ItemTreeManager, item: &Item) -> Self {
        Self {
            id: super::display_id(manager, &item.id),
            name: item.name.clone(),
            kind: item.kind.label().to_string(),
            created: item.created_date(),
        }
    }
}

/// Execute the ls command
pub fn execute(
    args: &ListArgs,
    manager: &ItemTreeManager,
    config: &AppConfig,
    format: OutputFormat,
) -> AppResult<()> {
    let parent = super::resolve_parent(manager, args.parent.as_deref())?;
    let children = manager.list_children_sorted(parent, args.sort.order(config));

    match format {
        OutputFormat::Json => output::print_json(&children, "[]"),
        OutputFormat::Table => {
            let rows: Vec<ItemRow> = children
                .into_iter()
                .map(|item| ItemRow::new(manager, item))
                .collect();
            output::print_list(&rows, format);
        }
    }

    Ok(())
}
