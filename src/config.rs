use crate::collection::{FolderFallback, SnapshotFallback};
use crate::import::{ImportPolicy, DEFAULT_COURTESY_DELAY};
use std::time::Duration;
use thiserror::Error;

pub const TOKEN_VAR: &str = "DISCOGS_TOKEN";
pub const USER_AGENT_VAR: &str = "DISCOGS_USER_AGENT";
pub const USERNAME_VAR: &str = "DISCOGS_USERNAME";
pub const FOLDER_VAR: &str = "DISCOGS_COLLECTION_FOLDER";
pub const API_URL_VAR: &str = "DISCOGS_API_URL";
pub const COURTESY_DELAY_VAR: &str = "DISCOGS_COURTESY_DELAY_SECS";
pub const FOLDER_FALLBACK_VAR: &str = "DISCOGS_FOLDER_FALLBACK";
pub const SNAPSHOT_FALLBACK_VAR: &str = "DISCOGS_SNAPSHOT_FALLBACK";

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),
    #[error("{var} has an invalid value '{value}'")]
    Invalid { var: &'static str, value: String },
}

/// Application configuration
/// Loaded from a .env file (if present) and the process environment
#[derive(Clone, Debug)]
pub struct Config {
    /// Discogs personal access token
    pub token: String,
    /// Client identification sent as User-Agent
    pub user_agent: String,
    /// Owner of the collection
    pub username: String,
    /// Display name of the target collection folder
    pub collection_folder: String,
    /// Override for the API host (tests, proxies)
    pub api_url: Option<String>,
    pub policy: ImportPolicy,
}

impl Config {
    /// Load configuration, with `folder_override` taking precedence over the environment
    pub fn load(folder_override: Option<String>) -> Result<Self, ConfigError> {
        if dotenvy::dotenv().is_ok() {
            tracing::debug!("Config: loaded .env file");
        }

        Self::from_lookup(|var| std::env::var(var).ok(), folder_override)
    }

    /// Build configuration from any variable lookup
    pub fn from_lookup<F>(lookup: F, folder_override: Option<String>) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let optional = |var: &str| {
            lookup(var)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let required = |var: &'static str| optional(var).ok_or(ConfigError::Missing(var));

        let collection_folder = match folder_override
            .map(|f| f.trim().to_string())
            .filter(|f| !f.is_empty())
        {
            Some(folder) => folder,
            None => required(FOLDER_VAR)?,
        };

        let courtesy_delay = match optional(COURTESY_DELAY_VAR) {
            Some(value) => value
                .parse::<f64>()
                .ok()
                .and_then(|secs| Duration::try_from_secs_f64(secs).ok())
                .ok_or(ConfigError::Invalid {
                    var: COURTESY_DELAY_VAR,
                    value,
                })?,
            None => DEFAULT_COURTESY_DELAY,
        };

        let folder_fallback = match optional(FOLDER_FALLBACK_VAR) {
            Some(value) => match value.to_lowercase().as_str() {
                "default" | "uncategorized" => FolderFallback::DefaultFolder,
                "abort" => FolderFallback::Abort,
                _ => {
                    return Err(ConfigError::Invalid {
                        var: FOLDER_FALLBACK_VAR,
                        value,
                    })
                }
            },
            None => FolderFallback::default(),
        };

        let snapshot_fallback = match optional(SNAPSHOT_FALLBACK_VAR) {
            Some(value) => match value.to_lowercase().as_str() {
                "assume-empty" => SnapshotFallback::AssumeEmpty,
                "skip-inserts" => SnapshotFallback::SkipInserts,
                _ => {
                    return Err(ConfigError::Invalid {
                        var: SNAPSHOT_FALLBACK_VAR,
                        value,
                    })
                }
            },
            None => SnapshotFallback::default(),
        };

        Ok(Self {
            token: required(TOKEN_VAR)?,
            user_agent: required(USER_AGENT_VAR)?,
            username: required(USERNAME_VAR)?,
            collection_folder,
            api_url: optional(API_URL_VAR),
            policy: ImportPolicy {
                folder_fallback,
                snapshot_fallback,
                courtesy_delay,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn base() -> HashMap<String, String> {
        vars(&[
            (TOKEN_VAR, "abc123"),
            (USER_AGENT_VAR, "DiscogsImport/0.1"),
            (USERNAME_VAR, "digger"),
            (FOLDER_VAR, "Vinyl"),
        ])
    }

    fn load(env: &HashMap<String, String>, folder: Option<&str>) -> Result<Config, ConfigError> {
        Config::from_lookup(|var| env.get(var).cloned(), folder.map(str::to_string))
    }

    #[test]
    fn test_defaults() {
        let config = load(&base(), None).unwrap();
        assert_eq!(config.token, "abc123");
        assert_eq!(config.collection_folder, "Vinyl");
        assert_eq!(config.api_url, None);
        assert_eq!(config.policy, ImportPolicy::default());
        assert_eq!(config.policy.courtesy_delay, Duration::from_secs(4));
    }

    #[test]
    fn test_missing_token() {
        let mut env = base();
        env.remove(TOKEN_VAR);
        assert_eq!(load(&env, None).unwrap_err(), ConfigError::Missing(TOKEN_VAR));
    }

    #[test]
    fn test_blank_value_counts_as_missing() {
        let mut env = base();
        env.insert(USERNAME_VAR.to_string(), "   ".to_string());
        assert_eq!(
            load(&env, None).unwrap_err(),
            ConfigError::Missing(USERNAME_VAR)
        );
    }

    #[test]
    fn test_folder_override() {
        let mut env = base();
        env.remove(FOLDER_VAR);
        assert_eq!(load(&env, None).unwrap_err(), ConfigError::Missing(FOLDER_VAR));

        let config = load(&env, Some("Cassettes")).unwrap();
        assert_eq!(config.collection_folder, "Cassettes");
    }

    #[test]
    fn test_policy_overrides() {
        let mut env = base();
        env.insert(COURTESY_DELAY_VAR.to_string(), "0.5".to_string());
        env.insert(FOLDER_FALLBACK_VAR.to_string(), "Abort".to_string());
        env.insert(SNAPSHOT_FALLBACK_VAR.to_string(), "skip-inserts".to_string());

        let config = load(&env, None).unwrap();
        assert_eq!(config.policy.courtesy_delay, Duration::from_millis(500));
        assert_eq!(config.policy.folder_fallback, FolderFallback::Abort);
        assert_eq!(
            config.policy.snapshot_fallback,
            SnapshotFallback::SkipInserts
        );
    }

    #[test]
    fn test_invalid_values() {
        let mut env = base();
        env.insert(COURTESY_DELAY_VAR.to_string(), "-1".to_string());
        assert!(matches!(
            load(&env, None),
            Err(ConfigError::Invalid {
                var: COURTESY_DELAY_VAR,
                ..
            })
        ));

        for value in ["1e20", "NaN", "soon"] {
            let mut env = base();
            env.insert(COURTESY_DELAY_VAR.to_string(), value.to_string());
            assert_eq!(
                load(&env, None).unwrap_err(),
                ConfigError::Invalid {
                    var: COURTESY_DELAY_VAR,
                    value: value.to_string(),
                }
            );
        }

        let mut env = base();
        env.insert(SNAPSHOT_FALLBACK_VAR.to_string(), "maybe".to_string());
        assert!(matches!(
            load(&env, None),
            Err(ConfigError::Invalid {
                var: SNAPSHOT_FALLBACK_VAR,
                ..
            })
        ));
    }
}
