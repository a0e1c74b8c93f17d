//! CLI argument parsing for errorfortune

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "ef")]
#[command(author, version, about = "Fortune cookies for error messages", long_about = None)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Crack a fortune from an error message
    Crack {
        /// The error message to transform
        #[arg(required = true)]
        message: String,

        /// Style to apply (default comes from config)
        #[arg(short, long)]
        style: Option<String>,

        /// Do not record the fortune in history
        #[arg(long)]
        no_save: bool,
    },

    /// Crack a fortune from a random sample error
    Sample {
        /// Style to apply (default comes from config)
        #[arg(short, long)]
        style: Option<String>,
    },

    /// List all available styles
    Styles,

    /// Show recent fortunes
    History {
        /// Maximum entries to show
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Show saved favorites
    Favorites,

    /// Toggle a fortune in or out of favorites
    Favorite {
        /// Fortune ID (a unique prefix is enough)
        #[arg(required = true)]
        id: String,
    },

    /// Export history and favorites as JSON
    Export {
        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Import history and favorites from a JSON export
    Import {
        /// Path to a previously exported file
        #[arg(required = true)]
        file: PathBuf,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_crack_with_style() {
        let cli =
            Cli::parse_from(["ef", "crack", "TypeError: bad", "--style", "pirate"]);
        match cli.command {
            Command::Crack { message, style, no_save } => {
                assert_eq!(message, "TypeError: bad");
                assert_eq!(style.as_deref(), Some("pirate"));
                assert!(!no_save);
            }
            _ => panic!("expected crack command"),
        }
    }

    #[test]
    fn test_parse_crack_no_save() {
        let cli = Cli::parse_from(["ef", "crack", "Error: boom", "--no-save"]);
        match cli.command {
            Command::Crack { no_save, .. } => assert!(no_save),
            _ => panic!("expected crack command"),
        }
    }

    #[test]
    fn test_parse_history_limit() {
        let cli = Cli::parse_from(["ef", "history", "--limit", "3"]);
        match cli.command {
            Command::History { limit } => assert_eq!(limit, Some(3)),
            _ => panic!("expected history command"),
        }
    }

    #[test]
    fn test_parse_export_to_file() {
        let cli = Cli::parse_from(["ef", "export", "-o", "backup.json"]);
        match cli.command {
            Command::Export { output } => {
                assert_eq!(output, Some(PathBuf::from("backup.json")));
            }
            _ => panic!("expected export command"),
        }
    }

    #[test]
    fn test_global_config_flag() {
        let cli = Cli::parse_from(["ef", "--config", "/tmp/ef.yml", "styles"]);
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/ef.yml")));
        assert!(matches!(cli.command, Command::Styles));
    }
}
