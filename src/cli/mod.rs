pub mod commands;
pub mod parser;

pub use parser::{Cli, Commands};

use crate::config::{Config, ConfigManager};
use crate::utils::{CleanerError, Result};
use std::path::Path;

pub fn execute_command(cli: Cli) -> Result<()> {
    let config_path = cli.config.clone();

    match cli.command {
        Some(Commands::Config(args)) => commands::config::execute(args, config_path.as_deref()),
        Some(Commands::Audit(args)) => {
            let config = load_config(config_path.as_deref())?;
            commands::audit::execute(config, args)
        }
        None => {
            let config = load_config(config_path.as_deref())?;
            commands::audit::execute(config, parser::AuditArgs::default())
        }
    }
}

fn load_config(config_path: Option<&Path>) -> Result<Config> {
    ConfigManager::load_with_path(config_path)
        .map_err(|e| CleanerError::config_error(format!("Failed to load config: {}", e)))
}
