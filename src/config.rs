//! Configuration management for vault block search.
//!
//! This module handles loading and validating configuration from environment variables,
//! reading a `.env` file first when one is present.

use crate::error::{ConfigError, ConfigResult};
use crate::search::{SortField, SortOrder, SortSpec};
use std::env;
use std::path::PathBuf;

/// Configuration for the query engine and the filesystem vault.
#[derive(Debug, Clone)]
pub struct Config {
    /// Root directory of the markdown vault (optional when documents come from elsewhere)
    pub vault_root: Option<PathBuf>,

    /// Sort applied when the caller has no preference (default: title ascending)
    pub default_sort: SortSpec,

    /// Skip documents whose text cannot be read instead of aborting the query (default: false)
    pub isolate_read_failures: bool,

    /// Descend into dot-directories such as `.obsidian` (default: false)
    pub include_hidden: bool,

    /// Log level (default: "warn")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `VAULT_ROOT`: Vault directory, must exist when set
    /// - `SEARCH_SORT_FIELD`: `title`, `modified` or `created` (default: title)
    /// - `SEARCH_SORT_DESCENDING`: Sort descending (default: false)
    /// - `SEARCH_ISOLATE_READ_FAILURES`: Skip unreadable documents (default: false)
    /// - `VAULT_INCLUDE_HIDDEN`: Scan hidden directories (default: false)
    /// - `LOG_LEVEL`: Logging level (default: "warn")
    pub fn from_env() -> ConfigResult<Self> {
        // A missing .env file is not an error
        let _ = dotenvy::dotenv();

        let vault_root = match env::var("VAULT_ROOT") {
            Ok(raw) if !raw.trim().is_empty() => {
                let path = PathBuf::from(raw.trim());
                if !path.is_dir() {
                    return Err(ConfigError::InvalidValue {
                        var: "VAULT_ROOT".to_string(),
                        reason: format!("Not a directory: {}", path.display()),
                    });
                }
                Some(path)
            }
            _ => None,
        };

        let field = match env::var("SEARCH_SORT_FIELD") {
            Ok(val) => val
                .parse::<SortField>()
                .map_err(|reason| ConfigError::InvalidValue {
                    var: "SEARCH_SORT_FIELD".to_string(),
                    reason,
                })?,
            Err(_) => SortField::default(),
        };
        let order = if Self::parse_env_bool("SEARCH_SORT_DESCENDING", false)? {
            SortOrder::Descending
        } else {
            SortOrder::Ascending
        };

        let isolate_read_failures = Self::parse_env_bool("SEARCH_ISOLATE_READ_FAILURES", false)?;
        let include_hidden = Self::parse_env_bool("VAULT_INCLUDE_HIDDEN", false)?;
        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "warn".to_string());

        Ok(Config {
            vault_root,
            default_sort: SortSpec { field, order },
            isolate_read_failures,
            include_hidden,
            log_level,
        })
    }

    /// The vault root, or an error naming the missing variable.
    pub fn require_vault_root(&self) -> ConfigResult<&PathBuf> {
        self.vault_root
            .as_ref()
            .ok_or_else(|| ConfigError::MissingVar("VAULT_ROOT".to_string()))
    }

    /// Parse an environment variable as a boolean with a default value.
    fn parse_env_bool(var_name: &str, default: bool) -> ConfigResult<bool> {
        match env::var(var_name) {
            Ok(val) => match val.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => Ok(true),
                "0" | "false" | "no" | "off" => Ok(false),
                _ => Err(ConfigError::InvalidValue {
                    var: var_name.to_string(),
                    reason: format!("Must be true or false, got: {}", val),
                }),
            },
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            vault_root: None,
            default_sort: SortSpec::default(),
            isolate_read_failures: false,
            include_hidden: false,
            log_level: "warn".to_string(),
        }
    }
}
