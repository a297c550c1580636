//! Package manager driver table

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Slot in a driver template that receives the package identifier.
pub const PACKAGE_SLOT: &str = "{pkg}";

/// Host package managers with a known install command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Driver {
    Winget,
    Scoop,
    Chocolatey,
    Brew,
    Apt,
    Pacman,
    Dnf,
}

impl Driver {
    /// Every driver, in table order.
    pub const ALL: [Driver; 7] = [
        Driver::Winget,
        Driver::Scoop,
        Driver::Chocolatey,
        Driver::Brew,
        Driver::Apt,
        Driver::Pacman,
        Driver::Dnf,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Driver::Winget => "winget",
            Driver::Scoop => "scoop",
            Driver::Chocolatey => "chocolatey",
            Driver::Brew => "brew",
            Driver::Apt => "apt",
            Driver::Pacman => "pacman",
            Driver::Dnf => "dnf",
        }
    }

    /// Install command template with a single [`PACKAGE_SLOT`].
    pub fn template(&self) -> &'static str {
        match self {
            Driver::Winget => {
                r#"winget install --id "{pkg}" --silent --accept-source-agreements --accept-package-agreements"#
            }
            Driver::Scoop => "scoop install {pkg}",
            Driver::Chocolatey => "choco install {pkg} -y",
            Driver::Brew => "brew install {pkg}",
            Driver::Apt => "sudo apt-get install -y {pkg}",
            Driver::Pacman => "sudo pacman -S --noconfirm {pkg}",
            Driver::Dnf => "sudo dnf install -y {pkg}",
        }
    }

    /// Install command for one package identifier.
    pub fn install_command(&self, package: &str) -> String {
        self.template().replace(PACKAGE_SLOT, package)
    }
}

impl fmt::Display for Driver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Driver {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Driver::ALL
            .into_iter()
            .find(|driver| driver.name() == s)
            .ok_or_else(|| Error::UnknownDriver {
                name: s.to_string(),
            })
    }
}
