//! Console reporter for setup runs.
//!
//! Every command is announced on its own line before it starts. Nothing is
//! redrawn while a child runs, since the child may own the terminal (a `sudo`
//! password prompt, for one).

use colored::Colorize;
use setupkit::{Phase, Reporter};
use std::path::Path;

use crate::ui;

#[derive(Debug, Default)]
pub struct ConsoleReporter;

impl ConsoleReporter {
    pub fn new() -> Self {
        Self
    }
}

/// Position of `phase` in the fixed run order, as `[n/total]`.
fn phase_position(phase: Phase) -> String {
    let index = Phase::ALL.iter().position(|p| *p == phase).unwrap_or(0);
    format!("[{}/{}]", index + 1, Phase::ALL.len())
}

impl Reporter for ConsoleReporter {
    fn on_phase_start(&mut self, phase: Phase) {
        ui::section(&format!(
            "⏳ {} {}...",
            phase_position(phase),
            phase.description()
        ));
    }

    fn on_section_start(&mut self, name: &str) {
        println!("{} {}", "📍".cyan(), format!("<< {name} >>").bold());
    }

    fn on_command_start(&mut self, command: &str, workdir: Option<&str>, dry_run: bool) {
        let line = ui::command_line(command, workdir);
        if dry_run {
            println!("{} ➡️  Running: {}", "[DRY-RUN]".yellow().bold(), line);
        } else {
            println!("{} Running: {}", "➡️ ".blue(), line);
        }
    }

    fn on_command_complete(&mut self, command: &str, success: bool) {
        if success {
            ui::success(command);
        } else {
            ui::error(&format!("Failed: {command}"));
        }
    }

    fn on_file(&mut self, path: &Path, dry_run: bool) {
        if dry_run {
            println!(
                "{} 📝 Would create file: {}",
                "[DRY-RUN]".yellow().bold(),
                path.display()
            );
        } else {
            println!("📝 Created file: {}", path.display());
        }
    }
}
