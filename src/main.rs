mod cli;
mod commands;
mod progress;
mod samples;
mod ui;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::generate;
use cli::Cli;
use std::io;

/// Global context for the application
pub struct Context {
    pub verbose: u8,
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    let log_level = match cli.verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };

    env_logger::Builder::new()
        .filter_level(log_level)
        .format_timestamp(None)
        .init();

    if let Err(err) = dispatch(cli) {
        report(&err);
        std::process::exit(1);
    }
}

fn dispatch(cli: Cli) -> Result<()> {
    let ctx = Context {
        verbose: cli.verbose,
    };

    if let Some(shell) = cli.completions {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "quickinit", &mut io::stdout());
        return Ok(());
    }
    if cli.list {
        return commands::drivers::list();
    }
    if cli.list_templates {
        return commands::templates::list();
    }
    if let Some(name) = cli.generate.as_deref() {
        return commands::templates::generate(name);
    }

    match cli.config.as_deref() {
        Some(config) => commands::setup::run(&ctx, config, cli.dry_run),
        None => anyhow::bail!(
            "a setup document is required unless using --list, --list-templates or --generate"
        ),
    }
}

fn report(err: &anyhow::Error) {
    ui::error(&format!("{err:#}"));

    let category = err
        .chain()
        .find_map(|cause| cause.downcast_ref::<setupkit::Error>())
        .map(setupkit::Error::category);
    if let Some(category) = category {
        eprintln!("  {}: {}", category.description(), category.advice());
    }
}
