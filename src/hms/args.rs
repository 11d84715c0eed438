use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "hms", bin_name = "hms", version)]
#[command(about = "Hospital records console for a single operator", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding config.json (defaults to the platform config dir)
    #[arg(long, global = true, env = "HMS_CONFIG_DIR", value_name = "DIR")]
    pub config_dir: Option<PathBuf>,

    /// Verbose logging on stderr (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Log in and open the interactive menu (default)
    Session,

    /// Show the effective configuration
    Config {
        /// Write the effective configuration to config.json
        #[arg(long)]
        init: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_means_session() {
        let cli = Cli::try_parse_from(["hms"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn parses_config_init_and_verbosity() {
        let cli = Cli::try_parse_from(["hms", "-vv", "config", "--init"]).unwrap();
        assert_eq!(cli.command, Some(Commands::Config { init: true }));
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn config_dir_flag() {
        let cli = Cli::try_parse_from(["hms", "--config-dir", "/tmp/hms", "session"]).unwrap();
        assert_eq!(cli.config_dir, Some(PathBuf::from("/tmp/hms")));
        assert_eq!(cli.command, Some(Commands::Session));
    }
}
