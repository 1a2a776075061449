//! Move destination listing.

use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use crate::output::{self, OutputFormat};
use studio_core::AppResult;
use studio_core::config::AppConfig;
use studio_service::{ItemTreeManager, MoveDestination, MoveDestinationPicker};

/// Arguments for the destinations command
#[derive(Debug, Args)]
pub struct DestinationsArgs {
    /// Item to move
    pub item: String,
}

/// Destination row
#[derive(Debug, Serialize, Tabled)]
struct DestinationRow {
    /// Indented folder label
    destination: String,
    /// Target ID
    id: String,
    /// Whether the entry can be chosen
    selectable: String,
}

impl DestinationRow {
    fn new(manager: &ItemTreeManager, entry: &MoveDestination) -> Self {
        let indent = if entry.target.is_some() {
            "  ".repeat(entry.depth + 1)
        } else {
            String::new()
        };

        Self {
            destination: format!("{indent}{}", entry.label),
            id: entry
                .target
                .map(|id| super::display_id(manager, &id))
                .unwrap_or_else(|| "root".to_string()),
            selectable: if entry.is_current {
                "current location".to_string()
            } else {
                "yes".to_string()
            },
        }
    }
}

/// Execute the destinations command
pub fn execute(
    args: &DestinationsArgs,
    manager: &ItemTreeManager,
    config: &AppConfig,
    format: OutputFormat,
) -> AppResult<()> {
    let id = super::resolve_item(manager, &args.item)?;
    let picker = MoveDestinationPicker::new(manager, &config.explorer.root_label);
    let destinations = picker.destinations_for(&id)?;

    match format {
        OutputFormat::Json => output::print_json(&destinations, "{}"),
        OutputFormat::Table => {
            println!("Move '{}' to:", destinations.item_name);
            let rows: Vec<DestinationRow> = destinations
                .entries
                .iter()
                .map(|entry| DestinationRow::new(manager, entry))
                .collect();
            output::print_list(&rows, format);
            if destinations.has_no_alternatives() {
                output::print_warning("No other destination is available");
            }
        }
    }

    Ok(())
}
