//! # setupkit
//!
//! Template expansion and step sequencing for declarative workstation
//! bootstrap.
//!
//! A bootstrap [`Document`] names a package-manager driver, a set of
//! parameters, and four phases of work:
//!
//! 1. `before` - shell commands run before anything is installed
//! 2. `install` - packages installed through the driver
//! 3. `after` - named groups of shell commands
//! 4. `files` - files written from templates
//!
//! Commands are templates. `$name` / `${name}` substitute scalar parameters
//! (unknown names are left alone) and `{{name}}` fans a command out over a
//! list parameter, one command per element.
//!
//! ## Example
//!
//! ```no_run
//! use setupkit::{Document, NoReport, RunContext, RunOptions, SystemShell, execute};
//!
//! let document = Document::from_yaml(r#"
//! driver: brew
//! params:
//!   langs: [rust, go]
//! install:
//!   - git
//! after:
//!   toolchains:
//!     - echo installing {{langs}}
//! "#)?;
//!
//! let options = RunOptions { verbose: false, dry_run: true };
//! let mut reporter = NoReport;
//! let mut ctx = RunContext::new(options, &SystemShell, &mut reporter);
//! let summary = execute(&mut ctx, &document)?;
//! assert_eq!(summary.commands, 2);
//! # Ok::<(), setupkit::Error>(())
//! ```
//!
//! ## Provider Traits
//!
//! - [`Executor`]: spawns commands ([`SystemShell`] uses the host shell)
//! - [`Reporter`]: receives progress events ([`NoReport`] ignores them)

pub mod context;
pub mod document;
pub mod driver;
pub mod error;
pub mod files;
pub mod installer;
pub mod params;
pub mod runner;
pub mod sequencer;
pub mod template;

#[cfg(test)]
pub(crate) mod testing;

pub use context::{NoReport, Reporter, RunContext, RunOptions};
pub use document::{CommandSpec, DEFAULT_DRIVER, Document, FileSpec, Section};
pub use driver::Driver;
pub use error::{Error, ErrorCategory, Result};
pub use params::{ParamValue, ParameterStore};
pub use runner::{CommandStatus, Executor, SystemShell};
pub use sequencer::{Phase, RunSummary, execute};
pub use template::{expand, substitute};
