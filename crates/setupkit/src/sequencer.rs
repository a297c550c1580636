//! Step sequencer - runs the four phases of a document in order
//!
//! Phases run as `before` → `install` → `after` → `files`. An empty phase is
//! skipped without being reported. The first error aborts the run; whatever
//! earlier phases did stays done.

use std::fmt;

use crate::context::RunContext;
use crate::document::{CommandSpec, Document};
use crate::error::Result;
use crate::files;
use crate::installer;
use crate::params::ParameterStore;
use crate::runner;
use crate::template;

/// The ordered phases of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Before,
    Install,
    After,
    Files,
}

impl Phase {
    pub const ALL: [Phase; 4] = [Phase::Before, Phase::Install, Phase::After, Phase::Files];

    pub fn name(&self) -> &'static str {
        match self {
            Phase::Before => "before",
            Phase::Install => "install",
            Phase::After => "after",
            Phase::Files => "files",
        }
    }

    /// Human-readable description of what the phase does.
    pub fn description(&self) -> &'static str {
        match self {
            Phase::Before => "Running before commands",
            Phase::Install => "Installing software",
            Phase::After => "Running after commands",
            Phase::Files => "Creating files",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Counts of what a run did (or would do, in dry-run mode).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub commands: usize,
    pub packages: usize,
    pub files: usize,
}

impl RunSummary {
    pub fn is_empty(&self) -> bool {
        self.commands == 0 && self.packages == 0 && self.files == 0
    }
}

/// Expand and run a list of command specs, in order.
///
/// Returns the number of concrete commands run.
pub fn run_commands(
    ctx: &mut RunContext<'_>,
    specs: &[CommandSpec],
    params: &ParameterStore,
) -> Result<usize> {
    let mut count = 0;
    for spec in specs {
        for command in template::expand(&spec.command, params) {
            runner::run(ctx, &command, spec.workdir.as_deref(), params)?;
            count += 1;
        }
    }
    Ok(count)
}

/// Run every phase of `document`.
pub fn execute(ctx: &mut RunContext<'_>, document: &Document) -> Result<RunSummary> {
    let params = &document.params;
    let mut summary = RunSummary::default();

    if !document.before.is_empty() {
        ctx.reporter.on_phase_start(Phase::Before);
        summary.commands += run_commands(ctx, &document.before, params)?;
    }

    if !document.install.is_empty() {
        ctx.reporter.on_phase_start(Phase::Install);
        summary.packages += installer::install(ctx, &document.install, document.driver(), params)?;
    }

    if !document.after.is_empty() {
        ctx.reporter.on_phase_start(Phase::After);
        for section in &document.after {
            ctx.reporter.on_section_start(&section.name);
            summary.commands += run_commands(ctx, &section.commands, params)?;
        }
    }

    if !document.files.is_empty() {
        ctx.reporter.on_phase_start(Phase::Files);
        summary.files += files::materialize(ctx, &document.files, params)?;
    }

    log::info!(
        "run finished: {} command(s), {} package(s), {} file(s)",
        summary.commands,
        summary.packages,
        summary.files
    );
    Ok(summary)
}
