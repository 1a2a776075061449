//! Effective configuration display.

use crate::output::{self, OutputFormat};
use studio_core::AppResult;
use studio_core::config::AppConfig;

/// Execute the config command
pub fn execute(config: &AppConfig, format: OutputFormat) -> AppResult<()> {
    match format {
        OutputFormat::Json => output::print_json(config, "{}"),
        OutputFormat::Table => {
            println!("[logging]");
            output::print_kv("level", &config.logging.level);
            output::print_kv("format", &config.logging.format);
            println!("[explorer]");
            output::print_kv("default_folder_name", &config.explorer.default_folder_name);
            output::print_kv("root_label", &config.explorer.root_label);
            output::print_kv(
                "seed_path",
                config.explorer.seed_path.as_deref().unwrap_or("(built-in demo)"),
            );
            output::print_kv("folders_first", &config.explorer.folders_first.to_string());
        }
    }

    Ok(())
}
