//! Command-line interface module.

mod args;
pub mod check;
pub mod common;
pub mod init;
pub mod list;
pub mod show;

pub use args::{CheckArgs, Cli, Commands, OutputFormat, ShowArgs};

use anyhow::Result;

use crate::debug;

/// Run the parsed command.
pub fn run(cli: &Cli) -> Result<()> {
    match &cli.command {
        Commands::Show { args } => {
            let profiles = common::load_profiles(cli, false)?;
            let date = common::build_date(args.date);
            debug!("show"; "build date {}", date.to_date_string());
            show::show_profile(&profiles, args, date)
        }
        Commands::Check { args } => {
            let profiles = common::load_profiles(cli, args.strict)?;
            let date = common::build_date(args.date);
            check::check_profiles(&profiles, &args.profiles, date)
        }
        Commands::List => list::list_profiles(&common::load_profiles(cli, false)?),
        Commands::Init { dir, force } => {
            let dir = match dir {
                Some(dir) => dir.clone(),
                None => std::env::current_dir()?,
            };
            init::write_config(&dir, *force).map(|_| ())
        }
    }
}
