//! Template expansion
//!
//! Two placeholder syntaxes share a template:
//!
//! - `$name` / `${name}` - scalar substitution. Unknown names (and list
//!   parameters) are left verbatim; `$$` is a literal `$`.
//! - `{{name}}` - list fan-out. One variant is produced per list element,
//!   with the element wrapped in double quotes.
//!
//! Fan-out runs first, one list parameter at a time in store order, then
//! every variant gets a final scalar pass.

use regex::{Captures, Regex};
use std::sync::LazyLock;

use crate::params::ParameterStore;

static SCALAR_PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\$(?:(?P<escaped>\$)|(?P<named>[_a-zA-Z][_a-zA-Z0-9]*)|\{(?P<braced>[_a-zA-Z][_a-zA-Z0-9]*)\})",
    )
    .expect("scalar placeholder pattern is valid")
});

/// Marker that opens a list placeholder.
pub const LIST_MARKER: &str = "{{";

/// The literal `{{name}}` placeholder for a list parameter.
pub fn list_placeholder(name: &str) -> String {
    format!("{{{{{name}}}}}")
}

/// Whether `template` contains anything that looks like a list placeholder.
pub fn has_list_placeholder(template: &str) -> bool {
    template.contains(LIST_MARKER)
}

/// Substitute scalar placeholders, leaving unresolved ones untouched.
pub fn substitute(template: &str, params: &ParameterStore) -> String {
    SCALAR_PLACEHOLDER
        .replace_all(template, |caps: &Captures| {
            if caps.name("escaped").is_some() {
                return "$".to_string();
            }
            caps.name("named")
                .or_else(|| caps.name("braced"))
                .and_then(|name| params.scalar(name.as_str()))
                .map_or_else(|| caps[0].to_string(), str::to_string)
        })
        .into_owned()
}

/// Expand `template` into concrete strings.
///
/// With no list placeholders the result has exactly one element. A list
/// parameter bound to an empty list removes every variant that references it.
pub fn expand(template: &str, params: &ParameterStore) -> Vec<String> {
    let mut variants = vec![template.to_string()];

    for (name, items) in params.lists() {
        let placeholder = list_placeholder(name);
        if !variants.iter().any(|v| v.contains(&placeholder)) {
            continue;
        }

        log::trace!("fanning out {placeholder} over {} value(s)", items.len());
        variants = variants
            .into_iter()
            .flat_map(|variant| {
                if variant.contains(&placeholder) {
                    items
                        .iter()
                        .map(|item| variant.replace(&placeholder, &format!("\"{item}\"")))
                        .collect()
                } else {
                    vec![variant]
                }
            })
            .collect();
    }

    variants
        .iter()
        .map(|variant| substitute(variant, params))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_substitute_named_and_braced() {
        let params = ParameterStore::new().with_scalar("name", "demo");
        assert_eq!(substitute("hi $name", &params), "hi demo");
        assert_eq!(substitute("${name}.txt", &params), "demo.txt");
        assert_eq!(substitute("$name_x", &params), "$name_x");
    }

    #[test]
    fn test_substitute_is_safe() {
        let params = ParameterStore::new();
        assert_eq!(substitute("echo ${missing} $other", &params), "echo ${missing} $other");
        assert_eq!(substitute("cost: $5 and ${ bad }", &params), "cost: $5 and ${ bad }");
        assert_eq!(substitute("trailing $", &params), "trailing $");
    }

    #[test]
    fn test_substitute_escape() {
        let params = ParameterStore::new().with_scalar("x", "1");
        assert_eq!(substitute("$$x is $x", &params), "$x is 1");
    }

    #[test]
    fn test_substitute_skips_lists() {
        let params = ParameterStore::new().with_list("repos", ["a", "b"]);
        assert_eq!(substitute("clone $repos", &params), "clone $repos");
    }

    #[test]
    fn test_expand_without_lists_is_single() {
        let params = ParameterStore::new()
            .with_scalar("email", "me@example.com")
            .with_list("unused", ["1", "2"]);
        let result = expand("git config user.email ${email}", &params);
        assert_eq!(result, vec!["git config user.email me@example.com"]);
    }

    #[test]
    fn test_expand_single_list_keeps_order() {
        let params = ParameterStore::new().with_list("sdk", ["8", "10", "9"]);
        let result = expand("install {{sdk}}", &params);
        assert_eq!(
            result,
            vec!["install \"8\"", "install \"10\"", "install \"9\""]
        );
    }

    #[test]
    fn test_expand_two_lists_is_product() {
        let params = ParameterStore::new()
            .with_list("os", ["linux", "mac"])
            .with_list("arch", ["x64", "arm64", "x86"]);
        let result = expand("build {{arch}} {{os}}", &params);
        assert_eq!(result.len(), 6);
        // outer loop follows store order: os first
        assert_eq!(
            result,
            vec![
                "build \"x64\" \"linux\"",
                "build \"arm64\" \"linux\"",
                "build \"x86\" \"linux\"",
                "build \"x64\" \"mac\"",
                "build \"arm64\" \"mac\"",
                "build \"x86\" \"mac\"",
            ]
        );
    }

    #[test]
    fn test_expand_repeated_placeholder_uses_same_value() {
        let params = ParameterStore::new().with_list("v", ["1", "2"]);
        let result = expand("{{v}}-{{v}}", &params);
        assert_eq!(result, vec!["\"1\"-\"1\"", "\"2\"-\"2\""]);
    }

    #[test]
    fn test_expand_then_substitutes_scalars() {
        let params = ParameterStore::new()
            .with_list("repos", ["git@host:a.git", "git@host:b.git"])
            .with_scalar("dir", "/src");
        let result = expand("git clone {{repos}} --into ${dir}", &params);
        assert_eq!(
            result,
            vec![
                "git clone \"git@host:a.git\" --into /src",
                "git clone \"git@host:b.git\" --into /src",
            ]
        );
    }

    #[test]
    fn test_expand_scalar_in_double_braces_is_verbatim() {
        let params = ParameterStore::new().with_scalar("name", "Your Name");
        let result = expand("git config user.name \"{{name}}\"", &params);
        assert_eq!(result, vec!["git config user.name \"{{name}}\""]);
    }

    #[test]
    fn test_expand_empty_list_drops_variant() {
        let params = ParameterStore::new().with_list("none", Vec::<String>::new());
        assert!(expand("echo {{none}}", &params).is_empty());
    }

    #[test]
    fn test_expand_is_deterministic() {
        let params = ParameterStore::new()
            .with_list("a", ["1", "2"])
            .with_list("b", ["x", "y"]);
        let first = expand("{{a}}{{b}}", &params);
        for _ in 0..5 {
            assert_eq!(expand("{{a}}{{b}}", &params), first);
        }
    }

    #[test]
    fn test_list_placeholder_and_marker() {
        assert_eq!(list_placeholder("sdk"), "{{sdk}}");
        assert!(has_list_placeholder("Pkg.{{sdk}}"));
        assert!(!has_list_placeholder("Pkg.${sdk}"));
    }
}
