use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::constants::{DATABASE_FILE, DEFAULT_BIND, DEFAULT_PORT};

fn default_port() -> u16 {
    DEFAULT_PORT
}

fn default_bind() -> String {
    DEFAULT_BIND.to_string()
}

/// Server configuration file structure (TOML)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FileConfig {
    /// gPodder directory holding `Database` and `Downloads/`
    pub archive_root: Option<PathBuf>,
    /// Port to listen on (default: 3000)
    pub port: Option<u16>,
    /// Address to bind (default: [::], IPv4 + IPv6)
    pub bind: Option<String>,
    /// Database file (default: <archive_root>/Database)
    pub database: Option<PathBuf>,
    /// Open the database in SQLite immutable mode (default: false)
    pub immutable: Option<bool>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file '{}': {}", path.display(), e))?;
        let config: FileConfig = toml::from_str(&content)
            .map_err(|e| format!("Failed to parse config file '{}': {}", path.display(), e))?;
        Ok(config)
    }
}

/// Values given on the command line, each overriding the config file
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub archive_root: Option<PathBuf>,
    pub port: Option<u16>,
    pub bind: Option<String>,
    pub database: Option<PathBuf>,
    pub immutable: bool,
}

/// Fully resolved server settings
#[derive(Debug, Clone, PartialEq)]
pub struct ServeConfig {
    pub archive_root: PathBuf,
    pub database: PathBuf,
    pub port: u16,
    pub bind: String,
    pub immutable: bool,
}

impl ServeConfig {
    pub fn resolve(file: FileConfig, overrides: Overrides) -> Result<Self, String> {
        let archive_root = overrides
            .archive_root
            .or(file.archive_root)
            .ok_or("Please specify the path to the gPodder directory (--path or archive_root)")?;
        let database = overrides
            .database
            .or(file.database)
            .unwrap_or_else(|| archive_root.join(DATABASE_FILE));

        Ok(Self {
            database,
            port: overrides.port.or(file.port).unwrap_or_else(default_port),
            bind: overrides.bind.or(file.bind).unwrap_or_else(default_bind),
            immutable: overrides.immutable || file.immutable.unwrap_or(false),
            archive_root,
        })
    }

    /// Check the archive layout before starting the server
    pub fn validate(&self) -> Result<(), String> {
        if !self.archive_root.is_dir() {
            return Err(format!(
                "Archive directory not found: {}",
                self.archive_root.display()
            ));
        }
        if !self.database.is_file() {
            return Err(format!("Database file not found: {}", self.database.display()));
        }
        Ok(())
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.bind, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_from_archive_root() {
        let config = ServeConfig::resolve(
            FileConfig::default(),
            Overrides {
                archive_root: Some(PathBuf::from("/srv/gPodder")),
                ..Default::default()
            },
        )
        .unwrap();

        assert_eq!(config.database, PathBuf::from("/srv/gPodder/Database"));
        assert_eq!(config.port, 3000);
        assert_eq!(config.listen_addr(), "[::]:3000");
        assert!(!config.immutable);
    }

    #[test]
    fn test_cli_overrides_file() {
        let file: FileConfig = toml::from_str(
            r#"
            archive_root = "/from/file"
            port = 8080
            bind = "127.0.0.1"
            immutable = true
            "#,
        )
        .unwrap();
        let config = ServeConfig::resolve(
            file,
            Overrides {
                port: Some(9000),
                database: Some(PathBuf::from("/elsewhere/db.sqlite")),
                ..Default::default()
            },
        )
        .unwrap();

        assert_eq!(config.archive_root, PathBuf::from("/from/file"));
        assert_eq!(config.database, PathBuf::from("/elsewhere/db.sqlite"));
        assert_eq!(config.listen_addr(), "127.0.0.1:9000");
        assert!(config.immutable);
    }

    #[test]
    fn test_archive_root_required() {
        let err = ServeConfig::resolve(FileConfig::default(), Overrides::default()).unwrap_err();
        assert!(err.contains("gPodder directory"));
    }

    #[test]
    fn test_validate_missing_database() {
        let dir = tempfile::tempdir().unwrap();
        let config = ServeConfig::resolve(
            FileConfig::default(),
            Overrides {
                archive_root: Some(dir.path().to_path_buf()),
                ..Default::default()
            },
        )
        .unwrap();

        let err = config.validate().unwrap_err();
        assert!(err.starts_with("Database file not found"));

        std::fs::write(dir.path().join("Database"), b"").unwrap();
        assert!(config.validate().is_ok());
    }
}
