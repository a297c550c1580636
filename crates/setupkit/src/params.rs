//! Parameter store - named scalar and list values referenced by templates

use serde::{Deserialize, Deserializer};
use serde_yaml::Value;

use crate::document::deserialize_ordered;

/// A single parameter value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamValue {
    /// Substituted in place of `$name` / `${name}`
    Scalar(String),
    /// Fanned out in place of `{{name}}`
    List(Vec<String>),
}

impl ParamValue {
    pub fn as_scalar(&self) -> Option<&str> {
        match self {
            Self::Scalar(value) => Some(value),
            Self::List(_) => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Self::Scalar(_) => None,
            Self::List(items) => Some(items),
        }
    }

    /// Convert a parsed YAML value. Nested mappings and nested sequences are
    /// rejected; any other scalar is rendered as text.
    fn from_yaml(name: &str, value: &Value) -> Result<Self, String> {
        match value {
            Value::Sequence(items) => items
                .iter()
                .map(|item| {
                    render_scalar(item).ok_or_else(|| {
                        format!("parameter '{name}' must be a list of scalar values")
                    })
                })
                .collect::<Result<Vec<_>, _>>()
                .map(Self::List),
            Value::Tagged(tagged) => Self::from_yaml(name, &tagged.value),
            other => render_scalar(other)
                .map(Self::Scalar)
                .ok_or_else(|| format!("parameter '{name}' must be a scalar or a list")),
        }
    }
}

/// Render a YAML scalar as the string a template sees.
///
/// Returns `None` for sequences and mappings.
pub(crate) fn render_scalar(value: &Value) -> Option<String> {
    match value {
        Value::Null => Some(String::new()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::String(s) => Some(s.clone()),
        Value::Tagged(tagged) => render_scalar(&tagged.value),
        Value::Sequence(_) | Value::Mapping(_) => None,
    }
}

/// Ordered mapping from parameter name to value.
///
/// Order is significant: list fan-out processes parameters in the order
/// they were declared. A name holds exactly one value; inserting an existing
/// name replaces the value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParameterStore {
    entries: Vec<(String, ParamValue)>,
}

impl ParameterStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: ParamValue) {
        let name = name.into();
        if let Some(slot) = self.entries.iter_mut().find(|(n, _)| *n == name) {
            slot.1 = value;
        } else {
            self.entries.push((name, value));
        }
    }

    pub fn with_scalar(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, ParamValue::Scalar(value.into()));
        self
    }

    pub fn with_list<I, S>(mut self, name: impl Into<String>, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let items = items.into_iter().map(Into::into).collect();
        self.insert(name, ParamValue::List(items));
        self
    }

    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, value)| value)
    }

    /// Look up a scalar parameter. List parameters are not visible here.
    pub fn scalar(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(ParamValue::as_scalar)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v))
    }

    /// List-valued parameters in declaration order.
    pub fn lists(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.iter()
            .filter_map(|(name, value)| value.as_list().map(|items| (name, items)))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, ParamValue)> for ParameterStore {
    fn from_iter<T: IntoIterator<Item = (String, ParamValue)>>(iter: T) -> Self {
        let mut store = Self::new();
        for (name, value) in iter {
            store.insert(name, value);
        }
        store
    }
}

impl<'de> Deserialize<'de> for ParameterStore {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Vec<(String, Value)> = deserialize_ordered(deserializer)?;
        raw.into_iter()
            .map(|(name, value)| {
                ParamValue::from_yaml(&name, &value)
                    .map(|value| (name, value))
                    .map_err(serde::de::Error::custom)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_replaces_in_place() {
        let mut store = ParameterStore::new()
            .with_scalar("a", "1")
            .with_list("b", ["x", "y"]);
        store.insert("a", ParamValue::List(vec!["2".to_string()]));

        let names: Vec<_> = store.iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["a", "b"]);
        assert_eq!(store.len(), 2);
        assert!(store.scalar("a").is_none());
        assert_eq!(store.get("a").and_then(ParamValue::as_list).map(<[_]>::len), Some(1));
    }

    #[test]
    fn test_scalar_hides_lists() {
        let store = ParameterStore::new()
            .with_scalar("name", "demo")
            .with_list("sdk", ["8"]);
        assert_eq!(store.scalar("name"), Some("demo"));
        assert_eq!(store.scalar("sdk"), None);
        assert_eq!(store.scalar("missing"), None);
    }

    #[test]
    fn test_lists_in_declaration_order() {
        let store = ParameterStore::new()
            .with_list("z", ["1"])
            .with_scalar("m", "x")
            .with_list("a", ["2", "3"]);
        let lists: Vec<_> = store.lists().map(|(n, items)| (n, items.len())).collect();
        assert_eq!(lists, vec![("z", 1), ("a", 2)]);
    }

    #[test]
    fn test_deserialize_yaml_scalars_and_lists() {
        let yaml = r"
name: Your Name
python_default: 3.12
enabled: true
empty:
dotnet_sdk:
  - 8
  - 10
";
        let store: ParameterStore = serde_yaml::from_str(yaml).unwrap();
        let names: Vec<_> = store.iter().map(|(n, _)| n).collect();
        assert_eq!(
            names,
            vec!["name", "python_default", "enabled", "empty", "dotnet_sdk"]
        );
        assert_eq!(store.scalar("name"), Some("Your Name"));
        assert_eq!(store.scalar("python_default"), Some("3.12"));
        assert_eq!(store.scalar("enabled"), Some("true"));
        assert_eq!(store.scalar("empty"), Some(""));
        assert_eq!(
            store.get("dotnet_sdk"),
            Some(&ParamValue::List(vec!["8".to_string(), "10".to_string()]))
        );
    }

    #[test]
    fn test_deserialize_rejects_nested_mapping() {
        let yaml = "nested:\n  inner: 1\n";
        let err = serde_yaml::from_str::<ParameterStore>(yaml).unwrap_err();
        assert!(err.to_string().contains("parameter 'nested'"));
    }

    #[test]
    fn test_deserialize_rejects_nested_list() {
        let yaml = "grid:\n  - [1, 2]\n";
        let err = serde_yaml::from_str::<ParameterStore>(yaml).unwrap_err();
        assert!(err.to_string().contains("list of scalar values"));
    }
}
