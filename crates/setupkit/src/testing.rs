//! Test doubles for the executor and reporter seams

use std::cell::RefCell;
use std::io;
use std::path::{Path, PathBuf};

use crate::context::Reporter;
use crate::runner::{CommandStatus, Executor};
use crate::sequencer::Phase;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Phase(Phase),
    Section(String),
    Command {
        command: String,
        workdir: Option<String>,
        dry_run: bool,
    },
    Completed {
        command: String,
        success: bool,
    },
    File {
        path: PathBuf,
        dry_run: bool,
    },
}

#[derive(Debug, Default)]
pub struct Recorder {
    pub events: Vec<Event>,
}

impl Recorder {
    /// Commands reported as started, in order.
    pub fn commands(&self) -> Vec<String> {
        self.events
            .iter()
            .filter_map(|event| match event {
                Event::Command { command, .. } => Some(command.clone()),
                _ => None,
            })
            .collect()
    }
}

impl Reporter for Recorder {
    fn on_phase_start(&mut self, phase: Phase) {
        self.events.push(Event::Phase(phase));
    }

    fn on_section_start(&mut self, name: &str) {
        self.events.push(Event::Section(name.to_string()));
    }

    fn on_command_start(&mut self, command: &str, workdir: Option<&str>, dry_run: bool) {
        self.events.push(Event::Command {
            command: command.to_string(),
            workdir: workdir.map(str::to_string),
            dry_run,
        });
    }

    fn on_command_complete(&mut self, command: &str, success: bool) {
        self.events.push(Event::Completed {
            command: command.to_string(),
            success,
        });
    }

    fn on_file(&mut self, path: &Path, dry_run: bool) {
        self.events.push(Event::File {
            path: path.to_path_buf(),
            dry_run,
        });
    }
}

type Call = (String, Option<PathBuf>, bool);

/// Records every command and reports success.
#[derive(Debug, Default)]
pub struct RecordingExecutor {
    calls: RefCell<Vec<Call>>,
}

impl RecordingExecutor {
    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn commands(&self) -> Vec<String> {
        self.calls.borrow().iter().map(|c| c.0.clone()).collect()
    }
}

impl Executor for RecordingExecutor {
    fn execute(
        &self,
        command: &str,
        workdir: Option<&Path>,
        stream_output: bool,
    ) -> io::Result<CommandStatus> {
        self.calls.borrow_mut().push((
            command.to_string(),
            workdir.map(Path::to_path_buf),
            stream_output,
        ));
        Ok(CommandStatus::from_code(0))
    }
}

/// Records every command; the one matching `target` exits with `code`.
#[derive(Debug)]
pub struct FailingExecutor {
    target: String,
    code: i32,
    inner: RecordingExecutor,
}

impl FailingExecutor {
    pub fn on(target: &str, code: i32) -> Self {
        Self {
            target: target.to_string(),
            code,
            inner: RecordingExecutor::default(),
        }
    }

    pub fn commands(&self) -> Vec<String> {
        self.inner.commands()
    }
}

impl Executor for FailingExecutor {
    fn execute(
        &self,
        command: &str,
        workdir: Option<&Path>,
        stream_output: bool,
    ) -> io::Result<CommandStatus> {
        self.inner.execute(command, workdir, stream_output)?;
        if command == self.target {
            Ok(CommandStatus::from_code(self.code))
        } else {
            Ok(CommandStatus::from_code(0))
        }
    }
}

/// Fails the test if anything is executed.
pub struct PanickingExecutor;

impl Executor for PanickingExecutor {
    fn execute(
        &self,
        command: &str,
        _workdir: Option<&Path>,
        _stream_output: bool,
    ) -> io::Result<CommandStatus> {
        panic!("unexpected execution of '{command}'");
    }
}
