//! File materializer - writes templated files to templated paths

use std::fs;
use std::path::PathBuf;

use crate::context::RunContext;
use crate::document::FileSpec;
use crate::error::{Error, Result};
use crate::params::ParameterStore;
use crate::template;

/// Resolve a destination path template.
///
/// `~` and environment variables are expanded first (unknown variables stay
/// as written), then scalar parameters are substituted.
pub fn resolve_path(path: &str, params: &ParameterStore) -> PathBuf {
    let home_expanded = shellexpand::tilde(path);
    let env_expanded =
        shellexpand::env_with_context_no_errors(home_expanded.as_ref(), |var| {
            std::env::var(var).ok()
        });
    PathBuf::from(template::substitute(env_expanded.as_ref(), params))
}

/// Write every file, in declaration order.
///
/// Existing files are overwritten. Returns the number of files handled.
pub fn materialize(
    ctx: &mut RunContext<'_>,
    files: &[FileSpec],
    params: &ParameterStore,
) -> Result<usize> {
    for file in files {
        let path = resolve_path(&file.path, params);

        if ctx.is_dry_run() {
            ctx.reporter.on_file(&path, true);
            continue;
        }

        let content = template::substitute(&file.content, params);
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| Error::Filesystem {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        fs::write(&path, content).map_err(|source| Error::Filesystem {
            path: path.clone(),
            source,
        })?;
        log::debug!("wrote {}", path.display());
        ctx.reporter.on_file(&path, false);
    }
    Ok(files.len())
}
