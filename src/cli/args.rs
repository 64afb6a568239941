//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::utils::date::DateTimeUtc;

/// Site configuration provider for IHMC documentation sites
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Profile file path (default: site.toml, searched upward; built-in profiles if absent)
    #[arg(short = 'C', long, global = true, value_hint = clap::ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Print the resolved configuration of one profile
    #[command(visible_alias = "s")]
    Show {
        #[command(flatten)]
        args: ShowArgs,
    },

    /// Validate profiles and report every problem
    #[command(visible_alias = "c")]
    Check {
        #[command(flatten)]
        args: CheckArgs,
    },

    /// List available profiles
    #[command(visible_alias = "l")]
    List,

    /// Write a starter site.toml with the built-in profiles
    #[command(visible_alias = "i")]
    Init {
        /// Target directory (default: current directory)
        #[arg(value_hint = clap::ValueHint::DirPath)]
        dir: Option<PathBuf>,

        /// Overwrite an existing site.toml
        #[arg(short, long)]
        force: bool,
    },
}

/// Output format of `show`
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Plain JSON object
    #[default]
    Json,
    /// CommonJS module (`siteConfig.js`)
    Js,
}

/// Show command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct ShowArgs {
    /// Profile to show (default: the configured default profile)
    pub profile: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t)]
    pub format: OutputFormat,

    /// Print JSON on a single line
    #[arg(long)]
    pub compact: bool,

    /// Build date (YYYY-MM-DD); overrides SOURCE_DATE_EPOCH and the system clock
    #[arg(short, long, value_parser = parse_date)]
    pub date: Option<DateTimeUtc>,

    /// Write output to file instead of stdout
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,
}

/// Check command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct CheckArgs {
    /// Profiles to check. If omitted, checks every profile.
    pub profiles: Vec<String>,

    /// Treat unknown keys in the profile file as errors
    #[arg(short, long)]
    pub strict: bool,

    /// Build date (YYYY-MM-DD) used for the computed fields
    #[arg(short, long, value_parser = parse_date)]
    pub date: Option<DateTimeUtc>,
}

fn parse_date(s: &str) -> Result<DateTimeUtc, String> {
    DateTimeUtc::parse(s)
        .ok_or_else(|| format!("invalid date '{s}', expected YYYY-MM-DD or YYYY-MM-DDTHH:MM:SSZ"))
}
