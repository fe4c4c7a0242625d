use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::app::CopyTarget;

#[derive(Debug, Parser)]
#[command(
    name = "diffboard",
    version,
    about = "Compare two texts line by line"
)]
pub struct Cli {
    /// JSON configuration file
    #[arg(long, global = true, env = "DIFFBOARD_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Diff two files (use `-` to read one side from stdin)
    Compare(CompareArgs),

    /// Pretty-print a JSON file
    Format {
        /// File to format, or `-` for stdin
        file: PathBuf,
    },

    /// Show or change the persisted theme
    Theme {
        #[arg(value_enum)]
        theme: Option<ThemeArg>,
    },

    /// Remove every persisted setting
    ClearSettings,
}

#[derive(Debug, Args)]
pub struct CompareArgs {
    /// The original text
    pub left: PathBuf,

    /// The modified text
    pub right: PathBuf,

    #[arg(long, value_enum, default_value_t = OutputFormat::Unified)]
    pub format: OutputFormat,

    /// Only show changes and the lines around them
    #[arg(long)]
    pub diff_only: bool,

    /// Exchange the two sides before comparing
    #[arg(long)]
    pub swap: bool,

    /// Reformat both sides as JSON before comparing
    #[arg(long)]
    pub json_mode: bool,

    /// Stop searching for a minimal diff after this many milliseconds
    #[arg(long, value_name = "MS")]
    pub timeout_ms: Option<u64>,

    /// Print part of the comparison instead of rendering it
    #[arg(long, value_enum)]
    pub copy: Option<CopyArg>,

    /// Disable coloured output
    #[arg(long)]
    pub no_color: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Unified,
    SideBySide,
    Stats,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CopyArg {
    Left,
    Right,
    Added,
    Removed,
    Patch,
}

impl From<CopyArg> for CopyTarget {
    fn from(arg: CopyArg) -> Self {
        match arg {
            CopyArg::Left => CopyTarget::Left,
            CopyArg::Right => CopyTarget::Right,
            CopyArg::Added => CopyTarget::Added,
            CopyArg::Removed => CopyTarget::Removed,
            CopyArg::Patch => CopyTarget::Patch,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ThemeArg {
    Light,
    Dark,
    Toggle,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_compare_with_flags() {
        let cli = Cli::try_parse_from([
            "diffboard",
            "compare",
            "old.txt",
            "-",
            "--format",
            "side-by-side",
            "--diff-only",
            "--copy",
            "added",
            "--timeout-ms",
            "250",
        ])
        .unwrap();

        let Commands::Compare(args) = cli.command else {
            panic!("expected compare");
        };
        assert_eq!(args.left, PathBuf::from("old.txt"));
        assert_eq!(args.right, PathBuf::from("-"));
        assert_eq!(args.format, OutputFormat::SideBySide);
        assert!(args.diff_only);
        assert!(!args.swap);
        assert_eq!(args.copy, Some(CopyArg::Added));
        assert_eq!(args.timeout_ms, Some(250));
    }

    #[test]
    fn config_flag_is_global() {
        let cli = Cli::try_parse_from(["diffboard", "theme", "toggle", "--config", "cfg.json"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("cfg.json")));
        assert!(matches!(
            cli.command,
            Commands::Theme {
                theme: Some(ThemeArg::Toggle)
            }
        ));
    }

    #[test]
    fn compare_requires_both_sides() {
        assert!(Cli::try_parse_from(["diffboard", "compare", "only.txt"]).is_err());
    }
}
