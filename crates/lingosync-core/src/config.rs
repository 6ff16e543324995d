//! Configuration module for lingosync.
//!
//! Provides typed configuration structs that map to the YAML configuration
//! file, plus [`ResolvedOptions`]: the immutable, fully-resolved option set
//! built once per invocation from the config file and CLI flag overrides.
//! Engines only ever see `ResolvedOptions`; nothing reads ambient config
//! state after resolution.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration problems, all reported before any network or file I/O
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// No project given on the command line or in the config file
    #[error("no project configured; pass --project or set `project` in lingosync.yaml")]
    MissingProject,

    /// No space given on the command line or in the config file
    #[error("no space configured; pass --space or set `space` in lingosync.yaml")]
    MissingSpace,

    /// Both force flags were set at once
    #[error("--force-local and --force-remote are mutually exclusive")]
    ConflictingForceFlags,

    /// Unknown translation file format name
    #[error("unknown format '{0}'; valid: json, yaml")]
    InvalidFormat(String),

    /// File pattern does not contain the `{lang}` placeholder exactly once
    #[error("invalid file pattern '{0}': must contain '{{lang}}' exactly once")]
    InvalidPattern(String),
}

/// Translation file format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormatKind {
    Json,
    Yaml,
}

impl FormatKind {
    /// File suffix associated with the format.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Yaml => "yaml",
        }
    }
}

impl FromStr for FormatKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            other => Err(ConfigError::InvalidFormat(other.to_string())),
        }
    }
}

impl std::fmt::Display for FormatKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.extension())
    }
}

/// How conflicts are resolved when sync detects them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResolvePolicy {
    /// Every conflict keeps the local value
    ForceLocal,
    /// Every conflict takes the remote value
    ForceRemote,
    /// Ask the operator per conflict (default when neither force flag is set)
    #[default]
    Interactive,
}

/// Top-level configuration for lingosync.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Remote project identifier.
    pub project: Option<String>,
    /// Translation space within the project.
    pub space: Option<String>,
    /// Branch within the space.
    pub branch: Option<String>,
    /// Translation file format: `json` or `yaml`.
    pub format: Option<String>,
    /// Write nested objects (`a.b.c` as an object path) instead of flat keys.
    pub nested: bool,
    /// Indentation width for serialized files.
    pub indent: Option<usize>,
    /// Root directory for local translation files.
    pub output_dir: Option<PathBuf>,
    /// File name pattern containing a `{lang}` placeholder.
    pub file_pattern: Option<String>,
    /// Remote API settings.
    pub api: ApiConfig,
}

/// Remote store API settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL of the remote translation store.
    pub base_url: String,
    /// Bearer token for authenticating API requests.
    pub token: Option<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.lingosync.dev".to_string(),
            token: None,
        }
    }
}

impl Config {
    /// Load configuration from a YAML file at `path`.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Load the first config that exists: an explicit `--config` path, a
    /// project-local `lingosync.yaml` in the working directory, then the
    /// user config path. Falls back to [`Config::default`].
    pub fn discover(explicit: Option<&Path>) -> anyhow::Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        let local = PathBuf::from("lingosync.yaml");
        if local.exists() {
            return Self::load(&local);
        }
        let user = Self::default_path();
        if user.exists() {
            return Self::load(&user);
        }
        Ok(Self::default())
    }

    /// Platform-appropriate default path for the configuration file.
    ///
    /// Typically `$XDG_CONFIG_HOME/lingosync/config.yaml` on Linux.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("~/.config"))
            .join("lingosync")
            .join("config.yaml")
    }
}

/// CLI flag values that override config-file defaults
///
/// All fields are optional; `None` means the flag was not given.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub project: Option<String>,
    pub space: Option<String>,
    pub branch: Option<String>,
    pub format: Option<String>,
    pub dir: Option<PathBuf>,
    pub lang: Option<String>,
    pub force_local: bool,
    pub force_remote: bool,
}

/// Fully-resolved, immutable options for one command invocation
///
/// Built once by [`ResolvedOptions::resolve`] and passed by value into the
/// engines. Resolution order: CLI flag, then config file, then default.
#[derive(Debug, Clone)]
pub struct ResolvedOptions {
    pub project: String,
    pub space: String,
    pub branch: String,
    pub format: FormatKind,
    pub nested: bool,
    pub indent: usize,
    pub dir: PathBuf,
    pub file_pattern: String,
    pub lang: Option<String>,
    pub policy: ResolvePolicy,
    pub api_base_url: String,
    pub api_token: Option<String>,
}

impl ResolvedOptions {
    /// Merge the config file and CLI overrides into a resolved option set.
    ///
    /// Fails with a [`ConfigError`] when required values are missing or
    /// flags contradict each other; no I/O has happened at that point.
    pub fn resolve(config: &Config, cli: &CliOverrides) -> Result<Self, ConfigError> {
        if cli.force_local && cli.force_remote {
            return Err(ConfigError::ConflictingForceFlags);
        }

        let project = cli
            .project
            .clone()
            .or_else(|| config.project.clone())
            .ok_or(ConfigError::MissingProject)?;
        let space = cli
            .space
            .clone()
            .or_else(|| config.space.clone())
            .ok_or(ConfigError::MissingSpace)?;
        let branch = cli
            .branch
            .clone()
            .or_else(|| config.branch.clone())
            .unwrap_or_else(|| "main".to_string());

        let format = match cli.format.as_deref().or(config.format.as_deref()) {
            Some(s) => FormatKind::from_str(s)?,
            None => FormatKind::Json,
        };

        let file_pattern = config
            .file_pattern
            .clone()
            .unwrap_or_else(|| format!("{{lang}}.{}", format.extension()));
        if file_pattern.matches("{lang}").count() != 1 {
            return Err(ConfigError::InvalidPattern(file_pattern));
        }

        let policy = if cli.force_local {
            ResolvePolicy::ForceLocal
        } else if cli.force_remote {
            ResolvePolicy::ForceRemote
        } else {
            ResolvePolicy::Interactive
        };

        Ok(Self {
            project,
            space,
            branch,
            format,
            nested: config.nested,
            indent: config.indent.unwrap_or(2),
            dir: cli
                .dir
                .clone()
                .or_else(|| config.output_dir.clone())
                .unwrap_or_else(|| PathBuf::from("translations")),
            file_pattern,
            lang: cli.lang.clone(),
            policy,
            api_base_url: config.api.base_url.clone(),
            api_token: config.api.token.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_config() -> Config {
        Config {
            project: Some("acme".to_string()),
            space: Some("web".to_string()),
            ..Config::default()
        }
    }

    #[test]
    fn test_resolve_defaults() {
        let opts = ResolvedOptions::resolve(&minimal_config(), &CliOverrides::default()).unwrap();
        assert_eq!(opts.project, "acme");
        assert_eq!(opts.space, "web");
        assert_eq!(opts.branch, "main");
        assert_eq!(opts.format, FormatKind::Json);
        assert_eq!(opts.file_pattern, "{lang}.json");
        assert_eq!(opts.indent, 2);
        assert_eq!(opts.dir, PathBuf::from("translations"));
        assert_eq!(opts.policy, ResolvePolicy::Interactive);
    }

    #[test]
    fn test_cli_flags_win_over_config() {
        let cli = CliOverrides {
            project: Some("other".to_string()),
            branch: Some("feature/login".to_string()),
            format: Some("yaml".to_string()),
            ..CliOverrides::default()
        };
        let opts = ResolvedOptions::resolve(&minimal_config(), &cli).unwrap();
        assert_eq!(opts.project, "other");
        assert_eq!(opts.branch, "feature/login");
        assert_eq!(opts.format, FormatKind::Yaml);
        // Default pattern follows the resolved format.
        assert_eq!(opts.file_pattern, "{lang}.yaml");
    }

    #[test]
    fn test_missing_project_is_an_error() {
        let config = Config {
            space: Some("web".to_string()),
            ..Config::default()
        };
        let err = ResolvedOptions::resolve(&config, &CliOverrides::default()).unwrap_err();
        assert_eq!(err, ConfigError::MissingProject);
    }

    #[test]
    fn test_missing_space_is_an_error() {
        let config = Config {
            project: Some("acme".to_string()),
            ..Config::default()
        };
        let err = ResolvedOptions::resolve(&config, &CliOverrides::default()).unwrap_err();
        assert_eq!(err, ConfigError::MissingSpace);
    }

    #[test]
    fn test_conflicting_force_flags_rejected() {
        let cli = CliOverrides {
            force_local: true,
            force_remote: true,
            ..CliOverrides::default()
        };
        let err = ResolvedOptions::resolve(&minimal_config(), &cli).unwrap_err();
        assert_eq!(err, ConfigError::ConflictingForceFlags);
    }

    #[test]
    fn test_force_flags_map_to_policy() {
        let cli = CliOverrides {
            force_local: true,
            ..CliOverrides::default()
        };
        let opts = ResolvedOptions::resolve(&minimal_config(), &cli).unwrap();
        assert_eq!(opts.policy, ResolvePolicy::ForceLocal);

        let cli = CliOverrides {
            force_remote: true,
            ..CliOverrides::default()
        };
        let opts = ResolvedOptions::resolve(&minimal_config(), &cli).unwrap();
        assert_eq!(opts.policy, ResolvePolicy::ForceRemote);
    }

    #[test]
    fn test_invalid_format_rejected() {
        let cli = CliOverrides {
            format: Some("toml".to_string()),
            ..CliOverrides::default()
        };
        let err = ResolvedOptions::resolve(&minimal_config(), &cli).unwrap_err();
        assert_eq!(err, ConfigError::InvalidFormat("toml".to_string()));
    }

    #[test]
    fn test_pattern_without_placeholder_rejected() {
        let mut config = minimal_config();
        config.file_pattern = Some("messages.json".to_string());
        let err = ResolvedOptions::resolve(&config, &CliOverrides::default()).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPattern(_)));
    }

    #[test]
    fn test_config_yaml_round_trip() {
        let yaml = r#"
project: acme
space: web
branch: develop
format: yaml
nested: true
indent: 4
output_dir: locales
api:
  base_url: "https://store.example.com"
  token: "secret"
"#;
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.project.as_deref(), Some("acme"));
        assert_eq!(config.branch.as_deref(), Some("develop"));
        assert!(config.nested);
        assert_eq!(config.indent, Some(4));
        assert_eq!(config.api.base_url, "https://store.example.com");
        assert_eq!(config.api.token.as_deref(), Some("secret"));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lingosync.yaml");
        std::fs::write(&path, "project: acme\nspace: web\n").unwrap();
        let config = Config::load(&path).unwrap();
        assert_eq!(config.project.as_deref(), Some("acme"));
        assert_eq!(config.space.as_deref(), Some("web"));
    }

    #[test]
    fn test_format_kind_from_str() {
        assert_eq!(FormatKind::from_str("json").unwrap(), FormatKind::Json);
        assert_eq!(FormatKind::from_str("YAML").unwrap(), FormatKind::Yaml);
        assert_eq!(FormatKind::from_str("yml").unwrap(), FormatKind::Yaml);
        assert!(FormatKind::from_str("ini").is_err());
    }
}
