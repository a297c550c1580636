use anyhow::Result;
use setupkit::{DEFAULT_DRIVER, Driver};

use crate::ui;

pub fn list() -> Result<()> {
    ui::header("Available drivers");
    for driver in Driver::ALL {
        let name = if driver.name() == DEFAULT_DRIVER {
            format!("{driver} (default)")
        } else {
            driver.to_string()
        };
        ui::kv(&name, driver.template());
    }
    Ok(())
}
