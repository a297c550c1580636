use anyhow::{Context as _, Result};
use colored::Colorize;
use std::path::Path;
use std::time::Instant;

use setupkit::{Document, RunContext, RunOptions, RunSummary, SystemShell};

use crate::Context;
use crate::progress::ConsoleReporter;
use crate::ui;

pub fn run(ctx: &Context, config: &Path, dry_run: bool) -> Result<()> {
    let started = Instant::now();

    let document = Document::load(config)?;
    log::info!(
        "Loaded {} with driver '{}' and {} parameter(s)",
        config.display(),
        document.driver(),
        document.params.len()
    );

    ui::header(&format!("Quick Setup - {}", config.display()));
    ui::kv("Driver", document.driver());
    if dry_run {
        ui::warn("Dry run - nothing will be executed or written");
    }

    if document.is_empty() {
        ui::info("Nothing to do - the document has no steps");
        return Ok(());
    }

    let options = RunOptions {
        verbose: ctx.verbose > 0,
        dry_run,
    };
    let mut reporter = ConsoleReporter::new();
    let mut run_ctx = RunContext::new(options, &SystemShell, &mut reporter);
    let summary = setupkit::execute(&mut run_ctx, &document)
        .with_context(|| format!("Setup from {} aborted", config.display()))?;

    println!();
    print_summary(&summary, dry_run);
    ui::success(&format!(
        "Setup completed in {}",
        ui::format_elapsed(started.elapsed().as_secs_f64())
    ));
    Ok(())
}

fn print_summary(summary: &RunSummary, dry_run: bool) {
    if summary.is_empty() {
        ui::dim("No commands, packages or files after expansion");
        return;
    }
    let verb = if dry_run { "planned" } else { "done" };
    ui::dim(&format!(
        "{} command(s), {} package(s), {} file(s) {}",
        summary.commands.to_string().bold(),
        summary.packages.to_string().bold(),
        summary.files.to_string().bold(),
        verb
    ));
}
