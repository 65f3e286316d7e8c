use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::planner::Provider;

pub const API_KEY_ENV: &str = "MIGRATION_PLANNER_API_KEY";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub version: String,
    pub server: ServerConfig,
    #[serde(default)]
    pub planner: PlannerConfig,
    #[serde(default)]
    pub remote: Option<RemoteConfig>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PlannerConfig {
    #[serde(default)]
    pub default_provider: Provider,
    /// Pause before answering a form submit
    #[serde(default = "default_delay_ms")]
    pub simulated_delay_ms: u64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RemoteConfig {
    pub enabled: bool,
    pub url: String,
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_delay_ms() -> u64 {
    1000
}

fn default_max_tokens() -> u32 {
    500
}

fn default_temperature() -> f32 {
    0.7
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8501,
        }
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            default_provider: Provider::Aws,
            simulated_delay_ms: default_delay_ms(),
        }
    }
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            url: "https://api.gemini.com/v1/generate".to_string(),
            api_key: String::new(),
            max_tokens: default_max_tokens(),
            temperature: default_temperature(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            server: ServerConfig::default(),
            planner: PlannerConfig::default(),
            remote: None,
        }
    }
}

impl Config {
    pub fn load(path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let content = fs::read_to_string(path)?;
        let mut config: Config = serde_json::from_str(&content)?;
        config.apply_env();
        Ok(config)
    }

    /// Load `path`, falling back to built-in defaults when the file is absent.
    /// A file that exists but doesn't parse is still an error.
    pub fn load_or_default(path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        if !Path::new(path).exists() {
            tracing::warn!("{} not found, using default configuration", path);
            let mut config = Config::default();
            config.apply_env();
            return Ok(config);
        }
        Self::load(path)
    }

    fn apply_env(&mut self) {
        if let Ok(key) = std::env::var(API_KEY_ENV) {
            if let Some(remote) = self.remote.as_mut() {
                remote.api_key = key;
            }
        }
    }

    /// Remote settings, only when remote generation is switched on
    pub fn active_remote(&self) -> Option<&RemoteConfig> {
        self.remote.as_ref().filter(|r| r.enabled)
    }

    pub fn get_version(&self) -> &str {
        &self.version
    }
}
