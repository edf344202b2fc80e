//! Runtime configuration.
//!
//! Sources, lowest precedence first: built-in defaults, the optional TOML
//! file, then `LIBRIS_*` environment variables (e.g. `LIBRIS_PORT=8080`).

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// How much internal detail error responses may reveal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
  Development,
  #[default]
  Production,
  Test,
}

impl Environment {
  pub fn is_development(self) -> bool { self == Self::Development }
}

/// Runtime server configuration, deserialised from `config.toml`.
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
  pub host:             String,
  pub port:             u16,
  pub database_path:    PathBuf,
  #[serde(default)]
  pub environment:      Environment,
  pub seed_sample_data: bool,
}

impl ServerConfig {
  pub fn load(path: &Path) -> Result<Self, config::ConfigError> {
    config::Config::builder()
      .set_default("host", "127.0.0.1")?
      .set_default("port", 3000)?
      .set_default("database_path", "books.db")?
      .set_default("environment", "production")?
      .set_default("seed_sample_data", true)?
      .add_source(config::File::from(path).required(false))
      .add_source(config::Environment::with_prefix("LIBRIS").try_parsing(true))
      .build()?
      .try_deserialize()
  }

  /// `database_path` with a leading `~` expanded to the user's home directory.
  pub fn resolved_database_path(&self) -> PathBuf { expand_tilde(&self.database_path) }

  pub fn bind_address(&self) -> String { format!("{}:{}", self.host, self.port) }
}

fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn missing_file_falls_back_to_defaults() {
    let cfg = ServerConfig::load(Path::new("/nonexistent/libris.toml")).unwrap();
    assert_eq!(cfg.port, 3000);
    assert_eq!(cfg.database_path, PathBuf::from("books.db"));
    assert_eq!(cfg.environment, Environment::Production);
    assert!(cfg.seed_sample_data);
  }

  #[test]
  fn file_values_override_defaults() {
    let path = std::env::temp_dir().join(format!("libris-config-{}.toml", std::process::id()));
    std::fs::write(
      &path,
      "port = 8081\nenvironment = \"development\"\nseed_sample_data = false\n",
    )
    .unwrap();

    let cfg = ServerConfig::load(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(cfg.port, 8081);
    assert_eq!(cfg.bind_address(), "127.0.0.1:8081");
    assert!(cfg.environment.is_development());
    assert!(!cfg.seed_sample_data);
  }

  #[test]
  fn tilde_is_expanded() {
    let cfg = ServerConfig {
      host:             "127.0.0.1".into(),
      port:             3000,
      database_path:    PathBuf::from("~/libris/books.db"),
      environment:      Environment::Test,
      seed_sample_data: false,
    };
    if let Ok(home) = std::env::var("HOME") {
      assert_eq!(
        cfg.resolved_database_path(),
        PathBuf::from(home).join("libris/books.db")
      );
    }
  }
}
