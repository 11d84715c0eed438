use clap::Parser;
use colored::Colorize;
use directories::ProjectDirs;
use hms::config::HmsConfig;
use hms::error::{HmsError, Result};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

mod args;
mod cli;
use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config_dir = resolve_config_dir(&cli)?;
    let config = HmsConfig::load(&config_dir)?;

    match cli.command {
        Some(Commands::Config { init }) => handle_config(&config_dir, &config, init),
        Some(Commands::Session) | None => {
            let stdin = std::io::stdin();
            let stdout = std::io::stdout();
            cli::run_session(config, stdin.lock(), stdout.lock())
        }
    }
}

fn init_logging(verbosity: u8) {
    let default = match verbosity {
        0 => "hms=error",
        1 => "hms=info",
        _ => "hms=debug",
    };
    let filter = EnvFilter::try_from_env("HMS_LOG").unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn resolve_config_dir(cli: &Cli) -> Result<PathBuf> {
    if let Some(dir) = &cli.config_dir {
        return Ok(dir.clone());
    }
    ProjectDirs::from("com", "hms", "hms")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| HmsError::Config("could not determine a config directory".into()))
}

fn handle_config(config_dir: &Path, config: &HmsConfig, init: bool) -> Result<()> {
    if init {
        let path = config.save(config_dir)?;
        println!("{}", format!("Wrote {}", path.display()).green());
    }

    println!("config-dir = {}", config_dir.display());
    println!("operator = {}", config.operator);
    println!("password = {}", "*".repeat(config.password.chars().count()));
    println!("max-login-attempts = {}", config.max_login_attempts);
    println!("low-stock-threshold = {}", config.low_stock_threshold);
    println!("header-width = {}", config.header_width);
    Ok(())
}
