//! Environment variable expansion for companion config values.
//!
//! String values may embed `${NAME}`, replaced by the value of `NAME`.
//! Use `$${...}` to escape and produce a literal `${...}`.

use std::path::Path;

use toml::{Table, Value};

use super::ConfigError;

/// Expands every `${NAME}` in the string values of `table`, recursing into
/// nested tables and arrays.
///
/// Names that `lookup` cannot resolve expand to the empty string. Expanded
/// text is not scanned again.
pub fn expand_variables<F>(table: &mut Table, path: &Path, lookup: &F) -> Result<(), ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    for (_, value) in table.iter_mut() {
        expand_value(value, path, lookup)?;
    }
    Ok(())
}

fn expand_value<F>(value: &mut Value, path: &Path, lookup: &F) -> Result<(), ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match value {
        Value::String(s) => {
            *s = expand_string(s, lookup)
                .ok_or_else(|| ConfigError::UnclosedReference(path.to_path_buf()))?;
            Ok(())
        }
        Value::Table(t) => expand_variables(t, path, lookup),
        Value::Array(arr) => arr
            .iter_mut()
            .try_for_each(|item| expand_value(item, path, lookup)),
        _ => Ok(()),
    }
}

/// Returns `None` when a `${` has no closing brace.
fn expand_string<F>(s: &str, lookup: &F) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch != '$' {
            result.push(ch);
            continue;
        }
        match chars.peek() {
            Some('$') => {
                chars.next();
                result.push('$');
            }
            Some('{') => {
                chars.next();
                let mut name = String::new();
                loop {
                    match chars.next()? {
                        '}' => break,
                        c => name.push(c),
                    }
                }
                result.push_str(&lookup(&name).unwrap_or_default());
            }
            _ => result.push('$'),
        }
    }

    Some(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup(name: &str) -> Option<String> {
        match name {
            "TOKEN" => Some("secret".into()),
            "HOST" => Some("example.com".into()),
            "RECURSIVE" => Some("${TOKEN}".into()),
            _ => None,
        }
    }

    fn expand(toml_str: &str) -> Result<Table, ConfigError> {
        let mut table: Table = toml::from_str(toml_str).unwrap();
        expand_variables(&mut table, Path::new("config.toml"), &lookup)?;
        Ok(table)
    }

    #[test]
    fn test_simple_variable() {
        let table = expand(r#"token = "${TOKEN}""#).unwrap();
        assert_eq!(table["token"].as_str().unwrap(), "secret");
    }

    #[test]
    fn test_nested_table_and_array() {
        let table = expand(
            r#"
            urls = ["https://${HOST}/a", "https://${HOST}/b"]

            [graph]
            token = "Bearer ${TOKEN}"
            "#,
        )
        .unwrap();
        assert_eq!(table["graph"]["token"].as_str().unwrap(), "Bearer secret");
        let urls = table["urls"].as_array().unwrap();
        assert_eq!(urls[0].as_str().unwrap(), "https://example.com/a");
        assert_eq!(urls[1].as_str().unwrap(), "https://example.com/b");
    }

    #[test]
    fn test_unset_variable_is_empty() {
        let table = expand(r#"token = "[${MISSING}]""#).unwrap();
        assert_eq!(table["token"].as_str().unwrap(), "[]");
    }

    #[test]
    fn test_escape_sequence() {
        let table = expand(r#"value = "literal $${TOKEN} and $5""#).unwrap();
        assert_eq!(table["value"].as_str().unwrap(), "literal ${TOKEN} and $5");
    }

    #[test]
    fn test_expansion_is_single_pass() {
        let table = expand(r#"value = "${RECURSIVE}""#).unwrap();
        assert_eq!(table["value"].as_str().unwrap(), "${TOKEN}");
    }

    #[test]
    fn test_non_string_values_untouched() {
        let table = expand("enabled = true\nport = 8080").unwrap();
        assert_eq!(table["enabled"].as_bool(), Some(true));
        assert_eq!(table["port"].as_integer(), Some(8080));
    }

    #[test]
    fn test_unclosed_reference() {
        let result = expand(r#"token = "${TOKEN""#);
        assert!(matches!(result, Err(ConfigError::UnclosedReference(_))));
    }
}
