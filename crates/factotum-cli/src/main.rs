//! Factotum CLI - maintenance tooling for the static content dataset.

use clap::{CommandFactory, Parser};
use factotum_cli::commands;
use factotum_cli::{Cli, Command, Config, Formatter};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .init();

    match run() {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn run() -> factotum_cli::Result<i32> {
    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?;
    let formatter = Formatter::new(!cli.no_color);

    match cli.command {
        Command::StripField => {
            commands::execute_strip(&config, &formatter)?;
            Ok(0)
        }
        Command::Propagate(args) => {
            if args.check_expiry {
                commands::execute_check_expiry(&config, &formatter)
            } else if let Some(input) = args.input.as_deref() {
                commands::execute_propagate(input, args.dry_run, &config, &formatter)
            } else {
                // Neither an input file nor --check-expiry: show usage.
                let mut command = Cli::command();
                if let Some(sub) = command.find_subcommand_mut("propagate") {
                    sub.print_help()?;
                }
                Ok(1)
            }
        }
    }
}
