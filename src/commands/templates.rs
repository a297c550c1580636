use anyhow::{Result, bail};

use crate::samples::{self, SAMPLES};
use crate::ui;

pub fn list() -> Result<()> {
    ui::header("Available templates");
    for sample in SAMPLES {
        println!("  - {}", sample.name);
    }
    Ok(())
}

/// Print a sample document to stdout so it can be redirected to a file.
pub fn generate(name: &str) -> Result<()> {
    match samples::find(name) {
        Some(sample) => {
            print!("{}", sample.content);
            Ok(())
        }
        None => {
            ui::error(&format!("Unknown template: {name}"));
            list()?;
            bail!("unknown template '{name}'")
        }
    }
}
