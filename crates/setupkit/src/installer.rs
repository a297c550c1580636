//! Package installer - turns package entries into driver install commands

use crate::context::RunContext;
use crate::driver::Driver;
use crate::error::Result;
use crate::params::ParameterStore;
use crate::runner;
use crate::template;

/// Resolve package entries into concrete package identifiers.
///
/// Entries containing a list placeholder are expanded (fan-out plus the
/// scalar pass that comes with it). Every other entry is taken literally;
/// `$name` inside a plain package entry is not substituted.
pub fn resolve_packages(packages: &[String], params: &ParameterStore) -> Vec<String> {
    packages
        .iter()
        .flat_map(|entry| {
            if template::has_list_placeholder(entry) {
                template::expand(entry, params)
            } else {
                vec![entry.clone()]
            }
        })
        .collect()
}

/// Install commands for `packages`, in install order.
pub fn install_commands(
    packages: &[String],
    driver: Driver,
    params: &ParameterStore,
) -> Vec<String> {
    resolve_packages(packages, params)
        .iter()
        .map(|package| driver.install_command(package))
        .collect()
}

/// Install every package with the named driver.
///
/// The driver is resolved before anything runs, so an unknown driver has no
/// side effects. Returns the number of install commands run.
pub fn install(
    ctx: &mut RunContext<'_>,
    packages: &[String],
    driver: &str,
    params: &ParameterStore,
) -> Result<usize> {
    let driver: Driver = driver.parse()?;
    let commands = install_commands(packages, driver, params);
    log::debug!("installing {} package(s) with {driver}", commands.len());

    // Install commands are already final; they see no parameters.
    let no_params = ParameterStore::new();
    for command in &commands {
        runner::run(ctx, command, None, &no_params)?;
    }
    Ok(commands.len())
}
