//! Configuration loading from disk and the environment.

use std::env;
use std::fs;
use std::net::SocketAddr;
use std::path::Path;

use crate::config::schema::ApiConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Validation(Vec<ValidationError>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
            ConfigError::Validation(errors) => {
                write!(f, "Validation failed: ")?;
                for (i, err) in errors.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", err)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Load configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<ApiConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: ApiConfig = toml::from_str(&content).map_err(ConfigError::Parse)?;
    Ok(config)
}

/// Resolve the effective configuration: file (or defaults), then environment
/// overrides, then semantic validation.
pub fn resolve_config(path: Option<&Path>) -> Result<ApiConfig, ConfigError> {
    let mut config = match path {
        Some(path) => load_config(path)?,
        None => ApiConfig::default(),
    };

    apply_env_overrides(&mut config);

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Apply environment overrides on top of a loaded config.
///
/// `PORT` replaces the listener port, `DB_USER` and `DB_PASSWORD` replace the
/// store credentials. Unset variables leave the config untouched.
pub fn apply_env_overrides(config: &mut ApiConfig) {
    if let Ok(port) = env::var("PORT") {
        match port.parse::<u16>() {
            Ok(port) => {
                if let Ok(mut addr) = config.listener.bind_address.parse::<SocketAddr>() {
                    addr.set_port(port);
                    config.listener.bind_address = addr.to_string();
                }
            }
            Err(_) => {
                tracing::warn!(value = %port, "Ignoring unparsable PORT override");
            }
        }
    }

    if let Ok(user) = env::var("DB_USER") {
        config.database.user = user;
    }

    if let Ok(password) = env::var("DB_PASSWORD") {
        config.database.password = password;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn empty_file_yields_defaults() {
        let mut file = tempfile_path("empty.toml");
        write!(file.1, "").unwrap();
        let config = load_config(&file.0).unwrap();
        assert_eq!(config.listener.bind_address, "0.0.0.0:5000");
        assert_eq!(config.database.name, "techTonicDb");
    }

    #[test]
    fn file_values_are_read() {
        let mut file = tempfile_path("full.toml");
        write!(
            file.1,
            r#"
[listener]
bind_address = "127.0.0.1:9000"

[database]
uri = "mongodb://127.0.0.1:27017"
name = "catalogTest"
"#
        )
        .unwrap();
        let config = load_config(&file.0).unwrap();
        assert_eq!(config.listener.bind_address, "127.0.0.1:9000");
        assert_eq!(config.database.name, "catalogTest");
        assert_eq!(
            config.database.uri.as_deref(),
            Some("mongodb://127.0.0.1:27017")
        );
    }

    #[test]
    fn env_overrides_replace_port_and_credentials() {
        env::set_var("PORT", "7070");
        env::set_var("DB_USER", "ops");
        env::set_var("DB_PASSWORD", "hunter2");

        let mut config = ApiConfig::default();
        apply_env_overrides(&mut config);

        env::remove_var("PORT");
        env::remove_var("DB_USER");
        env::remove_var("DB_PASSWORD");

        assert_eq!(config.listener.bind_address, "0.0.0.0:7070");
        assert_eq!(config.database.user, "ops");
        assert_eq!(config.database.password, "hunter2");
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_config(Path::new("/nonexistent/api.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn invalid_toml_is_parse_error() {
        let mut file = tempfile_path("broken.toml");
        write!(file.1, "[listener\nbind_address = ").unwrap();
        let err = load_config(&file.0).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn resolution_runs_semantic_validation() {
        let mut file = tempfile_path("invalid.toml");
        write!(
            file.1,
            r#"
[listener]
bind_address = "not-an-address"

[database]
uri = "mongodb://127.0.0.1:27017"
"#
        )
        .unwrap();
        let err = resolve_config(Some(&file.0)).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    fn tempfile_path(name: &str) -> (std::path::PathBuf, fs::File) {
        let path = env::temp_dir().join(format!("techtonic-api-{}-{}", std::process::id(), name));
        let file = fs::File::create(&path).unwrap();
        (path, file)
    }
}
