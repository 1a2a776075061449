//! CLI command definitions and dispatch.

pub mod check_move;
pub mod config;
pub mod destinations;
pub mod list;
pub mod tree;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::output::OutputFormat;
use studio_core::config::AppConfig;
use studio_core::error::AppError;
use studio_core::AppResult;
use studio_core::types::{ChildOrder, ItemId, SortDirection, SortKey};
use studio_service::ItemTreeManager;

/// Studio: inspect a project tree seed
#[derive(Debug, Parser)]
#[command(name = "studio-cli", version, about, long_about = None)]
pub struct Cli {
    /// Path to a configuration file (defaults to config/default.toml + env overlay)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Seed file to load instead of the configured one
    #[arg(short, long)]
    pub seed: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the whole tree
    Tree(tree::TreeArgs),
    /// List the children of a folder
    Ls(list::ListArgs),
    /// Show where an item may be moved
    Destinations(destinations::DestinationsArgs),
    /// Check whether a move would be accepted, without applying it
    CheckMove(check_move::CheckMoveArgs),
    /// Show the effective configuration
    Config,
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(&self) -> AppResult<()> {
        let config = self.load_config()?;

        if let Commands::Config = self.command {
            return config::execute(&config, self.format);
        }

        let manager = studio_service::seed::manager_from_config(&config.explorer)?;
        tracing::debug!(items = manager.len(), "Project tree loaded");
        match &self.command {
            Commands::Tree(args) => tree::execute(args, &manager, &config, self.format),
            Commands::Ls(args) => list::execute(args, &manager, &config, self.format),
            Commands::Destinations(args) => {
                destinations::execute(args, &manager, &config, self.format)
            }
            Commands::CheckMove(args) => check_move::execute(args, &manager, self.format),
            Commands::Config => Ok(()),
        }
    }

    fn load_config(&self) -> AppResult<AppConfig> {
        let mut config = match &self.config {
            Some(path) => AppConfig::load_from(path)?,
            None => {
                let env = std::env::var("STUDIO_ENV").unwrap_or_else(|_| "development".to_string());
                AppConfig::load(&env)?
            }
        };

        if let Some(seed) = &self.seed {
            config.explorer.seed_path = Some(seed.clone());
        }

        Ok(config)
    }
}

/// Child ordering options shared by listing commands
#[derive(Debug, Args)]
pub struct SortArgs {
    /// Sort key
    #[arg(long, value_enum, default_value = "insertion")]
    pub sort: SortArg,

    /// Sort descending
    #[arg(long)]
    pub desc: bool,

    /// Keep insertion order between folders and files
    #[arg(long)]
    pub mixed: bool,
}

impl SortArgs {
    /// Child ordering for these options
    pub fn order(&self, config: &AppConfig) -> ChildOrder {
        let direction = if self.desc {
            SortDirection::Desc
        } else {
            SortDirection::Asc
        };

        ChildOrder::new(self.sort.into(), direction)
            .with_folders_first(config.explorer.folders_first && !self.mixed)
    }
}

/// Sort key argument
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortArg {
    /// Seed order
    Insertion,
    /// Name
    Name,
    /// Creation time
    Created,
    /// Folders, then files
    Kind,
}

impl From<SortArg> for SortKey {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Insertion => SortKey::Insertion,
            SortArg::Name => SortKey::Name,
            SortArg::Created => SortKey::CreatedAt,
            SortArg::Kind => SortKey::Kind,
        }
    }
}

/// Resolve an item reference: a full UUID or a unique prefix of one.
pub fn resolve_item(manager: &ItemTreeManager, given: &str) -> AppResult<ItemId> {
    if let Ok(id) = given.parse::<ItemId>() {
        manager.require(&id)?;
        return Ok(id);
    }

    let needle = given.to_lowercase().replace('-', "");
    if needle.is_empty() {
        return Err(AppError::validation("Empty item reference"));
    }

    let mut matches = manager
        .items()
        .filter(|item| item.id.as_uuid().simple().to_string().starts_with(&needle));

    match (matches.next(), matches.next()) {
        (Some(item), None) => Ok(item.id),
        (Some(_), Some(_)) => Err(AppError::validation(format!(
            "Item reference '{given}' is ambiguous"
        ))),
        (None, _) => Err(AppError::not_found(format!("No item matches '{given}'"))),
    }
}

/// Shortest id prefix (at least eight hex digits) that names only this item,
/// so every id printed by a command can be passed back to another.
pub fn display_id(manager: &ItemTreeManager, id: &ItemId) -> String {
    let full = id.as_uuid().simple().to_string();
    let others: Vec<String> = manager
        .items()
        .filter(|item| item.id != *id)
        .map(|item| item.id.as_uuid().simple().to_string())
        .collect();

    let shown = (8..full.len())
        .map(|len| &full[..len])
        .find(|prefix| others.iter().all(|other| !other.starts_with(prefix)))
        .unwrap_or(full.as_str())
        .to_string();
    shown
}

/// Resolve a folder reference where `root` means the root level.
pub fn resolve_parent(manager: &ItemTreeManager, given: Option<&str>) -> AppResult<Option<ItemId>> {
    match given {
        None => Ok(None),
        Some(s) if s.eq_ignore_ascii_case("root") => Ok(None),
        Some(s) => {
            let id = resolve_item(manager, s)?;
            manager.require_folder(&id)?;
            Ok(Some(id))
        }
    }
}

/// Resolve a move destination where `root` means the root level. Files are
/// accepted here so the move itself reports the rejection.
pub fn resolve_destination(manager: &ItemTreeManager, given: &str) -> AppResult<Option<ItemId>> {
    if given.eq_ignore_ascii_case("root") {
        return Ok(None);
    }
    resolve_item(manager, given).map(Some)
}
