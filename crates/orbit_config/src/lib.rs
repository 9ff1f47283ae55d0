use orbit_astro::EngineSettings;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Relative locations tried when no explicit config path is given.
pub const CONFIG_SEARCH_PATHS: [&str; 2] = ["configs/orbit.toml", "../../configs/orbit.toml"];

pub const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputSettings {
    pub pretty: bool,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self { pretty: true }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingSettings {
    /// `env_logger` filter used when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrbitConfig {
    pub engine: EngineSettings,
    pub output: OutputSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
struct OutputToml {
    #[serde(default = "default_pretty")]
    pretty: bool,
}

fn default_pretty() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize)]
struct LoggingToml {
    #[serde(default)]
    log_filter: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
struct RootConfigToml {
    #[serde(default)]
    engine: EngineSettings,
    #[serde(default)]
    output: Option<OutputToml>,
    #[serde(default)]
    logging: Option<LoggingToml>,
}

/// Try the common relative paths for `configs/orbit.toml`.
pub fn read_config_toml_text() -> Option<(String, &'static str)> {
    CONFIG_SEARCH_PATHS
        .iter()
        .find_map(|p| fs::read_to_string(p).ok().map(|text| (text, *p)))
}

pub fn parse_config(text: &str) -> anyhow::Result<OrbitConfig> {
    let root: RootConfigToml =
        toml::from_str(text).map_err(|e| anyhow::anyhow!("Failed to parse orbit.toml: {e}"))?;

    let engine = root.engine;
    if engine.default_partner_name.trim().is_empty() {
        anyhow::bail!("engine.default_partner_name must not be empty");
    }

    let output = root
        .output
        .map(|o| OutputSettings { pretty: o.pretty })
        .unwrap_or_default();

    let logging = match root.logging.and_then(|l| l.log_filter) {
        Some(filter) if !filter.trim().is_empty() => LoggingSettings { log_filter: filter },
        _ => LoggingSettings::default(),
    };

    Ok(OrbitConfig {
        engine,
        output,
        logging,
    })
}

/// Load from `path`, or from the search paths, falling back to defaults
/// when no config file is present. An explicit path must exist.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<OrbitConfig> {
    if let Some(path) = path {
        let text = fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Could not read config {}: {e}", path.display()))?;
        log::debug!("loaded config from {}", path.display());
        return parse_config(&text);
    }
    match read_config_toml_text() {
        Some((text, found)) => {
            log::debug!("loaded config from {found}");
            parse_config(&text)
        }
        None => {
            log::debug!("no orbit.toml found in {:?}; using defaults", CONFIG_SEARCH_PATHS);
            Ok(OrbitConfig::default())
        }
    }
}
