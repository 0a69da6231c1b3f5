//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use keypath_content::Format;

/// keypath - Look up dotted keys in settings files
#[derive(Parser, Debug)]
#[command(name = "keypath")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Options shared by every command that reads a settings file
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct SourceArgs {
    /// Settings file to read
    pub file: PathBuf,

    /// Format of the file (json, jsonc, json5, toml, yaml); detected when omitted
    #[arg(short, long, env = "KEYPATH_FORMAT")]
    pub format: Option<Format>,

    /// Resolve keys under this dotted prefix
    #[arg(short, long)]
    pub section: Option<String>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Print the value at a dotted key
    ///
    /// Literal keys containing dots take precedence over nested objects,
    /// so `editor.fontSize` finds `{"editor.fontSize": 14}` before
    /// `{"editor": {"fontSize": 12}}`.
    ///
    /// Examples:
    ///   keypath get settings.json editor.fontSize
    ///   keypath get settings.json trace --section myext --default off --raw
    Get {
        #[command(flatten)]
        source: SourceArgs,

        /// Dotted key to look up
        key: String,

        /// Value to print when the key does not exist (parsed as JSON, or taken as a string)
        #[arg(short, long)]
        default: Option<String>,

        /// Print strings without JSON quoting
        #[arg(long)]
        raw: bool,
    },

    /// Print whether a dotted key exists
    Has {
        #[command(flatten)]
        source: SourceArgs,

        /// Dotted key to look up
        key: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_get() {
        let cli = Cli::try_parse_from([
            "keypath",
            "get",
            "settings.json",
            "editor.fontSize",
            "--default",
            "12",
            "--format",
            "jsonc",
        ])
        .unwrap();

        assert!(!cli.verbose);
        assert_eq!(
            cli.command,
            Commands::Get {
                source: SourceArgs {
                    file: PathBuf::from("settings.json"),
                    format: Some(Format::Json5),
                    section: None,
                },
                key: "editor.fontSize".to_string(),
                default: Some("12".to_string()),
                raw: false,
            }
        );
    }

    #[test]
    fn test_parse_has_with_section() {
        let cli =
            Cli::try_parse_from(["keypath", "-v", "has", "s.yaml", "trace", "-s", "myext"]).unwrap();

        assert!(cli.verbose);
        match cli.command {
            Commands::Has { source, key } => {
                assert_eq!(source.section.as_deref(), Some("myext"));
                assert_eq!(key, "trace");
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_rejects_unknown_format() {
        let result = Cli::try_parse_from(["keypath", "has", "s.ini", "a", "--format", "ini"]);
        assert!(result.is_err());
    }
}
