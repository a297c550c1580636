//! Configuration document
//!
//! The document is YAML with six optional top-level keys:
//!
//! ```yaml
//! driver: winget
//! params:
//!   name: Your Name
//!   dotnet_sdk: [8, 10]
//! before:
//!   - echo starting
//! install:
//!   - Git.Git
//!   - Microsoft.DotNet.SDK.{{dotnet_sdk}}
//! after:
//!   git:
//!     - git config --global user.name "${name}"
//!     - cmd: git lfs install
//!       dir: ~/src
//! files:
//!   ~/notes/${name}.txt: hello ${name}
//! ```
//!
//! Missing and null keys mean "nothing to do". Mappings keep their
//! declaration order.

use serde::de::{self, MapAccess, Visitor};
use serde::{Deserialize, Deserializer};
use std::fmt;
use std::marker::PhantomData;
use std::path::Path;

use crate::error::{Error, Result};
use crate::params::{ParameterStore, render_scalar};

/// Driver used when the document does not name one.
pub const DEFAULT_DRIVER: &str = "winget";

/// A command template with an optional working directory.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawCommandSpec")]
pub struct CommandSpec {
    pub command: String,
    pub workdir: Option<String>,
}

impl CommandSpec {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            workdir: None,
        }
    }

    pub fn in_dir(mut self, workdir: impl Into<String>) -> Self {
        self.workdir = Some(workdir.into());
        self
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawCommandSpec {
    Structured {
        #[serde(alias = "command")]
        cmd: String,
        #[serde(default, alias = "cwd")]
        dir: Option<String>,
    },
    Bare(serde_yaml::Value),
}

impl TryFrom<RawCommandSpec> for CommandSpec {
    type Error = String;

    fn try_from(raw: RawCommandSpec) -> std::result::Result<Self, Self::Error> {
        match raw {
            RawCommandSpec::Structured { cmd, dir } => Ok(Self {
                command: cmd,
                workdir: dir,
            }),
            RawCommandSpec::Bare(serde_yaml::Value::Null) => {
                Err("command entries must not be empty".to_string())
            }
            RawCommandSpec::Bare(value) => render_scalar(&value).map(Self::new).ok_or_else(|| {
                "command entries must be a scalar or a mapping with a 'cmd' key".to_string()
            }),
        }
    }
}

/// A named group of post-install commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub name: String,
    pub commands: Vec<CommandSpec>,
}

/// A file to write: destination path template and content template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSpec {
    pub path: String,
    pub content: String,
}

/// A parsed bootstrap document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Document {
    #[serde(default)]
    driver: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub params: ParameterStore,
    #[serde(default, deserialize_with = "null_as_default")]
    pub before: Vec<CommandSpec>,
    #[serde(default, deserialize_with = "deserialize_packages")]
    pub install: Vec<String>,
    #[serde(default, deserialize_with = "deserialize_sections")]
    pub after: Vec<Section>,
    #[serde(default, deserialize_with = "deserialize_files")]
    pub files: Vec<FileSpec>,
}

impl Document {
    /// Parse a document from YAML text. Blank input is an empty document.
    pub fn from_yaml(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    /// Read and parse a document from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| Error::ReadConfig {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("Loaded configuration from {}", path.display());
        Self::from_yaml(&content)
    }

    /// Driver name, falling back to [`DEFAULT_DRIVER`].
    pub fn driver(&self) -> &str {
        self.driver.as_deref().unwrap_or(DEFAULT_DRIVER)
    }

    #[cfg(test)]
    pub fn with_driver(mut self, driver: impl Into<String>) -> Self {
        self.driver = Some(driver.into());
        self
    }

    /// Whether every phase is empty.
    pub fn is_empty(&self) -> bool {
        self.before.is_empty()
            && self.install.is_empty()
            && self.after.is_empty()
            && self.files.is_empty()
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn deserialize_packages<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Vec<serde_yaml::Value> = null_as_default(deserializer)?;
    raw.iter()
        .map(|value| {
            render_scalar(value)
                .ok_or_else(|| de::Error::custom("install entries must be scalar values"))
        })
        .collect()
}

fn deserialize_sections<'de, D>(deserializer: D) -> std::result::Result<Vec<Section>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Vec<(String, Vec<CommandSpec>)> = deserialize_ordered(deserializer)?;
    Ok(raw
        .into_iter()
        .map(|(name, commands)| Section { name, commands })
        .collect())
}

fn deserialize_files<'de, D>(deserializer: D) -> std::result::Result<Vec<FileSpec>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Vec<(String, String)> = deserialize_ordered(deserializer)?;
    Ok(raw
        .into_iter()
        .map(|(path, content)| FileSpec { path, content })
        .collect())
}

/// Deserialize a mapping into `(key, value)` pairs in declaration order.
///
/// A null mapping is empty, and a null value becomes `V::default()`.
pub(crate) fn deserialize_ordered<'de, D, V>(
    deserializer: D,
) -> std::result::Result<Vec<(String, V)>, D::Error>
where
    D: Deserializer<'de>,
    V: Deserialize<'de> + Default,
{
    struct OrderedVisitor<V>(PhantomData<V>);

    impl<'de, V> Visitor<'de> for OrderedVisitor<V>
    where
        V: Deserialize<'de> + Default,
    {
        type Value = Vec<(String, V)>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a mapping")
        }

        fn visit_unit<E: de::Error>(self) -> std::result::Result<Self::Value, E> {
            Ok(Vec::new())
        }

        fn visit_none<E: de::Error>(self) -> std::result::Result<Self::Value, E> {
            Ok(Vec::new())
        }

        fn visit_map<A>(self, mut map: A) -> std::result::Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
            while let Some((key, value)) = map.next_entry::<String, Option<V>>()? {
                entries.push((key, value.unwrap_or_default()));
            }
            Ok(entries)
        }
    }

    deserializer.deserialize_any(OrderedVisitor(PhantomData))
}
