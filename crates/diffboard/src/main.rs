use std::process::ExitCode;

use clap::Parser;
use log::debug;

use diffboard::cli::{Cli, Commands};
use diffboard::commands;
use diffboard::{AppConfig, CompareError};

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = AppConfig::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Compare(args) => commands::compare(config, args),
        Commands::Format { file } => commands::format(&file),
        Commands::Theme { theme } => commands::theme(config, theme),
        Commands::ClearSettings => commands::clear_settings(config),
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    debug!("Parsed command line: {:?}", cli);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        // already reported as a toast
        Err(err) if err.downcast_ref::<CompareError>().is_some() => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
