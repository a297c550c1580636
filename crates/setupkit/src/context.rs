//! Run context and reporting hooks
//!
//! The engine never prints. Everything a user might want to see goes through
//! a [`Reporter`], and every process goes through an [`Executor`], so the
//! crate can be driven from a terminal UI, a test, or anything else.

use std::path::Path;

use crate::runner::Executor;
use crate::sequencer::Phase;

/// Options shared by every step of a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunOptions {
    /// Stream child process output instead of discarding it
    pub verbose: bool,
    /// Report intended actions without spawning processes or writing files
    pub dry_run: bool,
}

/// Receives progress updates during a run.
pub trait Reporter {
    /// Called when a non-empty phase begins
    fn on_phase_start(&mut self, phase: Phase);

    /// Called before the commands of a named `after` section run
    fn on_section_start(&mut self, name: &str);

    /// Called with the fully substituted command before it runs (or instead
    /// of running it, in dry-run mode)
    fn on_command_start(&mut self, command: &str, workdir: Option<&str>, dry_run: bool);

    /// Called once a spawned command exits
    fn on_command_complete(&mut self, command: &str, success: bool);

    /// Called after a file is written, or instead of writing it in dry-run mode
    fn on_file(&mut self, path: &Path, dry_run: bool);
}

/// Reporter that ignores every event.
pub struct NoReport;

impl Reporter for NoReport {
    fn on_phase_start(&mut self, _phase: Phase) {}
    fn on_section_start(&mut self, _name: &str) {}
    fn on_command_start(&mut self, _command: &str, _workdir: Option<&str>, _dry_run: bool) {}
    fn on_command_complete(&mut self, _command: &str, _success: bool) {}
    fn on_file(&mut self, _path: &Path, _dry_run: bool) {}
}

/// Everything a step needs besides its own inputs.
pub struct RunContext<'a> {
    pub options: RunOptions,
    pub executor: &'a dyn Executor,
    pub reporter: &'a mut dyn Reporter,
}

impl<'a> RunContext<'a> {
    pub fn new(
        options: RunOptions,
        executor: &'a dyn Executor,
        reporter: &'a mut dyn Reporter,
    ) -> Self {
        Self {
            options,
            executor,
            reporter,
        }
    }

    pub fn is_dry_run(&self) -> bool {
        self.options.dry_run
    }
}
