//! `flights` - CLI for flightlog
//!
//! This binary opens the interactive flight session, or runs one of the
//! configuration maintenance commands.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use std::io;

use anyhow::Context;
use clap::Parser;
use tracing::info;

use flightlog::cli::{Cli, Command, ConfigCommand, ShellArgs};
use flightlog::{init_logging, persistence, Config, FlightLog, Session};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    init_logging(cli.verbosity());

    // Load configuration
    let config = Config::load_from(cli.config.clone()).context("loading configuration")?;

    match cli.command {
        None => run_shell(&config, &cli.shell),
        Some(Command::Config(config_cmd)) => handle_config(&config, config_cmd),
    }
}

fn run_shell(config: &Config, args: &ShellArgs) -> anyhow::Result<()> {
    let strict = args.strict || config.session.strict;

    let mut log = FlightLog::new();
    if let Some(path) = args.file.as_ref().or(config.session.autoload.as_ref()) {
        let records = persistence::load(path)
            .with_context(|| format!("loading flights from {}", path.display()))?;
        info!("Starting with {} flights from {}", records.len(), path.display());
        log.replace(records);
    }

    let mut session = Session::new(io::stdin().lock(), io::stdout(), io::stderr(), config)
        .with_log(log)
        .strict(strict);
    session.run()?;
    Ok(())
}

fn handle_config(config: &Config, cmd: ConfigCommand) -> anyhow::Result<()> {
    match cmd {
        ConfigCommand::Show { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(config)?);
            } else {
                println!("Current Configuration");
                println!("=====================");
                println!();
                println!("[Session]");
                println!("  Prompt:             {:?}", config.session.prompt);
                println!("  Strict:             {}", config.session.strict);
                match &config.session.autoload {
                    Some(path) => println!("  Autoload:           {}", path.display()),
                    None => println!("  Autoload:           (none)"),
                }
                println!();
                println!("[Display]");
                println!("  Empty message:      {:?}", config.display.empty_message);
            }
        }
        ConfigCommand::Path => {
            println!("{}", Config::default_config_path().display());
        }
        ConfigCommand::Validate { file } => {
            let path = file.unwrap_or_else(Config::default_config_path);
            println!("Validating configuration: {}", path.display());
            match Config::load_from(Some(path)) {
                Ok(_) => println!("Configuration is valid."),
                Err(e) => println!("Configuration error: {e}"),
            }
        }
    }
    Ok(())
}
