//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.atrium/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;

use crate::core::state::Section;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct AtriumConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub server: ServerConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Section the shell opens on: "home", "inbox", or "agents".
    pub start_section: Option<String>,
    /// Ping the health endpoint once at startup.
    pub ping_on_start: Option<bool>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ServerConfig {
    pub base_url: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";
pub const DEFAULT_PING_ON_START: bool = true;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub start_section: Section,
    pub ping_on_start: bool,
    pub base_url: String,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.atrium/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".atrium").join("config.toml"))
}

/// Load config from `~/.atrium/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `AtriumConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<AtriumConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(AtriumConfig::default());
        }
    };
    load_config_from(&path)
}

/// Load config from an explicit path. A missing file is not an error; a
/// malformed one is, and callers must surface it rather than default past it.
fn load_config_from(path: &PathBuf) -> Result<AtriumConfig, ConfigError> {
    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(path);
        return Ok(AtriumConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config: AtriumConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &PathBuf) {
    let default_content = r#"# Atrium Configuration
# All settings are optional — defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# start_section = "home"        # "home", "inbox", or "agents"
# ping_on_start = true          # ping the health endpoint at startup

# [server]
# base_url = "http://localhost:3000"   # Or set ATRIUM_BASE_URL env var
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
///
/// `cli_section` and `cli_base_url` come from CLI flags (None = not specified).
pub fn resolve(
    config: &AtriumConfig,
    cli_section: Option<&str>,
    cli_base_url: Option<&str>,
) -> ResolvedConfig {
    // Start section: CLI → env → config → default. Unknown names are
    // logged and fall through to the next source.
    let start_section = cli_section
        .and_then(parse_section_or_warn)
        .or_else(|| std::env::var("ATRIUM_SECTION").ok().as_deref().and_then(parse_section_or_warn))
        .or_else(|| {
            config
                .general
                .start_section
                .as_deref()
                .and_then(parse_section_or_warn)
        })
        .unwrap_or_default();

    // Base URL: CLI → env → config → default
    let base_url = cli_base_url
        .map(|s| s.to_string())
        .or_else(|| std::env::var("ATRIUM_BASE_URL").ok())
        .or_else(|| config.server.base_url.clone())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

    ResolvedConfig {
        start_section,
        ping_on_start: config.general.ping_on_start.unwrap_or(DEFAULT_PING_ON_START),
        base_url,
    }
}

fn parse_section_or_warn(name: &str) -> Option<Section> {
    let parsed = Section::parse(name);
    if parsed.is_none() {
        warn!("Unknown section name '{}', ignoring", name);
    }
    parsed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses() {
        let config = AtriumConfig::default();
        assert!(config.general.start_section.is_none());
        assert!(config.server.base_url.is_none());
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let config = AtriumConfig::default();
        let resolved = resolve(&config, None, None);
        assert_eq!(resolved.start_section, Section::Home);
        assert!(resolved.ping_on_start);
        assert_eq!(resolved.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = AtriumConfig {
            general: GeneralConfig {
                start_section: Some("inbox".to_string()),
                ping_on_start: Some(false),
            },
            server: ServerConfig {
                base_url: Some("http://10.0.0.2:8080".to_string()),
            },
        };
        let resolved = resolve(&config, None, None);
        assert_eq!(resolved.start_section, Section::Inbox);
        assert!(!resolved.ping_on_start);
        assert_eq!(resolved.base_url, "http://10.0.0.2:8080");
    }

    #[test]
    fn test_resolve_cli_flags_win() {
        let config = AtriumConfig {
            general: GeneralConfig {
                start_section: Some("inbox".to_string()),
                ping_on_start: None,
            },
            server: ServerConfig {
                base_url: Some("http://from-config".to_string()),
            },
        };
        let resolved = resolve(&config, Some("agents"), Some("http://from-cli"));
        assert_eq!(resolved.start_section, Section::Agents);
        assert_eq!(resolved.base_url, "http://from-cli");
    }

    #[test]
    fn test_resolve_unknown_cli_section_falls_through() {
        let config = AtriumConfig {
            general: GeneralConfig {
                start_section: Some("inbox".to_string()),
                ping_on_start: None,
            },
            ..Default::default()
        };
        let resolved = resolve(&config, Some("dashboard"), None);
        assert_eq!(resolved.start_section, Section::Inbox);
    }

    #[test]
    fn test_sparse_toml_parses() {
        // Only override one thing — everything else stays default
        let toml_str = r#"
[server]
base_url = "http://staging.internal:3000"
"#;
        let config: AtriumConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(
            config.server.base_url.as_deref(),
            Some("http://staging.internal:3000")
        );
        assert!(config.general.start_section.is_none());
        assert!(config.general.ping_on_start.is_none());
    }

    #[test]
    fn test_full_toml_round_trip() {
        let toml_str = r#"
[general]
start_section = "agents"
ping_on_start = false

[server]
base_url = "http://localhost:4000"
"#;
        let config: AtriumConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.start_section.as_deref(), Some("agents"));
        assert_eq!(config.general.ping_on_start, Some(false));
        assert_eq!(config.server.base_url.as_deref(), Some("http://localhost:4000"));
    }

    #[test]
    fn test_malformed_toml_is_a_parse_error() {
        let err = toml::from_str::<AtriumConfig>("[general\nstart_section = 3").unwrap_err();
        // Surface the toml error through ConfigError's Display
        let wrapped = ConfigError::Parse(err);
        assert!(wrapped.to_string().contains("config parse error"));
    }

    fn scratch_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("atrium-config-test-{}", std::process::id()))
            .join(name)
    }

    #[test]
    fn test_load_surfaces_parse_error_for_malformed_file() {
        let path = scratch_path("malformed/config.toml");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "[general\nstart_section = 3").unwrap();

        // A typo'd file must fail loudly, never fall back to defaults
        match load_config_from(&path) {
            Err(ConfigError::Parse(_)) => {}
            other => panic!("expected parse error, got {:?}", other),
        }
        fs::remove_dir_all(path.parent().unwrap()).unwrap();
    }

    #[test]
    fn test_load_missing_file_defaults_and_generates() {
        let path = scratch_path("missing/config.toml");
        let _ = fs::remove_dir_all(path.parent().unwrap());

        let config = load_config_from(&path).unwrap();
        assert!(config.general.start_section.is_none());
        // First run leaves a commented-out template behind
        let written = fs::read_to_string(&path).unwrap();
        assert!(written.contains("# [general]"));
        fs::remove_dir_all(path.parent().unwrap()).unwrap();
    }
}
