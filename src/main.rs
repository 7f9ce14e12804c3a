use clap::Parser;
use repo_cleaner::cli::{execute_command, Cli};
use repo_cleaner::utils::env_file::load_dotenv;
use repo_cleaner::utils::logging::init_logging;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = init_logging(cli.verbose) {
        eprintln!("repo-cleaner: failed to initialize logging: {}", e);
    }

    load_dotenv(None);

    if let Err(e) = execute_command(cli) {
        eprintln!("repo-cleaner: {}", e);
        std::process::exit(1);
    }
}
