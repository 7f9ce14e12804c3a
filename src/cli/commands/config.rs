use crate::cli::parser::{ConfigArgs, ConfigCommands};
use crate::config::defaults::default_config;
use crate::config::ConfigManager;
use crate::utils::{CleanerError, Result};
use std::path::{Path, PathBuf};

pub fn execute(args: ConfigArgs, config_path: Option<&Path>) -> Result<()> {
    let path = resolve_path(config_path);

    match args.command {
        Some(ConfigCommands::Show) | None => execute_show(&path),
        Some(ConfigCommands::Path) => {
            println!("{}", path.display());
            Ok(())
        }
        Some(ConfigCommands::Init { force }) => execute_init(&path, force),
    }
}

fn resolve_path(config_path: Option<&Path>) -> PathBuf {
    config_path
        .map(Path::to_path_buf)
        .unwrap_or_else(ConfigManager::get_config_path)
}

fn execute_show(path: &Path) -> Result<()> {
    let config = ConfigManager::load_with_path(Some(path))
        .map_err(|e| CleanerError::config_error(format!("Failed to load configuration: {e}")))?;

    if !path.exists() {
        println!("# {} does not exist; showing defaults", path.display());
    }
    println!("{}", serde_json::to_string_pretty(&config)?);
    Ok(())
}

fn execute_init(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(CleanerError::invalid_args(format!(
            "Configuration file {} already exists. Use --force to overwrite it.",
            path.display()
        )));
    }

    ConfigManager::save_to_path(&default_config(), path)
        .map_err(|e| CleanerError::config_error(format!("Failed to write configuration: {e}")))?;

    println!("✅ Wrote default configuration to {}", path.display());
    Ok(())
}
