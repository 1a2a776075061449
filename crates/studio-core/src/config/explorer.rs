//! Project explorer configuration.

use serde::{Deserialize, Serialize};

/// Settings for the item tree and its browser.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExplorerConfig {
    /// Name given to newly created folders before the user renames them.
    #[serde(default = "default_folder_name")]
    pub default_folder_name: String,
    /// Label shown for the root sentinel in breadcrumbs and move pickers.
    #[serde(default = "default_root_label")]
    pub root_label: String,
    /// Path to a JSON seed collection. The built-in demo seed is used when unset.
    #[serde(default)]
    pub seed_path: Option<String>,
    /// Group folders ahead of files when listing a folder.
    #[serde(default = "default_true")]
    pub folders_first: bool,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            default_folder_name: default_folder_name(),
            root_label: default_root_label(),
            seed_path: None,
            folders_first: true,
        }
    }
}

fn default_folder_name() -> String {
    "New Folder".to_string()
}

fn default_root_label() -> String {
    "All Projects".to_string()
}

fn default_true() -> bool {
    true
}
