//! File readers for the companion and static router configs.
//!
//! Both files are required once a path is known: a missing file is an error,
//! never a silent fallback to defaults.

use std::path::Path;

use super::companion::CompanionConfig;
use super::expand::expand_variables;
use super::router::StaticRouterConfig;
use super::ConfigError;

/// Loads the companion TOML config, expanding `${NAME}` references from the
/// process environment.
pub fn load_companion_config(path: impl AsRef<Path>) -> Result<CompanionConfig, ConfigError> {
    load_companion_config_with(path.as_ref(), &|name: &str| std::env::var(name).ok())
}

fn load_companion_config_with<F>(path: &Path, lookup: &F) -> Result<CompanionConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let contents = read_file(path)?;
    let parse_error = |source| ConfigError::ParseError {
        path: path.to_path_buf(),
        source,
    };

    let mut table: toml::Table = toml::from_str(&contents).map_err(parse_error)?;
    expand_variables(&mut table, path, lookup)?;

    toml::Value::Table(table).try_into().map_err(parse_error)
}

/// Loads and deserializes the static router config JSON.
pub fn load_router_config(path: impl AsRef<Path>) -> Result<StaticRouterConfig, ConfigError> {
    let path = path.as_ref();
    let contents = read_file(path)?;
    serde_json::from_str(&contents).map_err(|e| ConfigError::JsonError {
        path: path.to_path_buf(),
        source: e,
    })
}

fn read_file(path: &Path) -> Result<String, ConfigError> {
    std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ConfigError::FileNotFound(path.to_path_buf())
        } else {
            ConfigError::ReadError {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_temp(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{contents}").unwrap();
        file
    }

    #[test]
    fn test_companion_loads_valid_file() {
        let file = write_temp("graphql_path = \"/api\"\n[graph]\ntoken = \"${TOKEN}\"\n");
        let lookup = |name: &str| (name == "TOKEN").then(|| "from-env".to_string());

        let config = load_companion_config_with(file.path(), &lookup).unwrap();

        assert_eq!(config.graphql_path, "/api");
        assert_eq!(config.graph.token, "from-env");
    }

    #[test]
    fn test_companion_missing_file() {
        let result = load_companion_config("/nonexistent/path/config.toml");
        assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
    }

    #[test]
    fn test_companion_invalid_toml() {
        let file = write_temp("graphql_path = ");
        let result = load_companion_config(file.path());
        assert!(matches!(result, Err(ConfigError::ParseError { .. })));
    }

    #[test]
    fn test_companion_wrong_type() {
        let file = write_temp("introspection_enabled = \"yes\"");
        let result = load_companion_config(file.path());
        assert!(matches!(result, Err(ConfigError::ParseError { .. })));
    }

    #[test]
    fn test_router_config_loads_valid_file() {
        let file = write_temp(r#"{"version": "42", "engineConfig": {}}"#);
        let config = load_router_config(file.path()).unwrap();
        assert_eq!(config.version, "42");
        assert!(config.subgraphs.is_empty());
    }

    #[test]
    fn test_router_config_missing_file() {
        let result = load_router_config("/nonexistent/router.json");
        assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
    }

    #[test]
    fn test_router_config_invalid_json() {
        let file = write_temp("{ not json");
        let result = load_router_config(file.path());
        assert!(matches!(result, Err(ConfigError::JsonError { .. })));
    }
}
