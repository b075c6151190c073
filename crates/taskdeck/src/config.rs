/*
[INPUT]:  Built-in defaults, optional YAML file, TASKDECK_* environment, CLI flags
[OUTPUT]: Resolved client and UI configuration
[POS]:    Configuration layer - startup settings
[UPDATE]: When adding new configuration options
*/

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result, bail};
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use taskdeck_adapter::{ClientConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};

const ENV_PREFIX: &str = "TASKDECK";

/// Top-level configuration for the task manager client
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct TaskdeckConfig {
    /// Address of the task service
    pub base_url: String,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
    /// Allow running task commands from the client
    pub enable_execute: bool,
    /// Tracing filter directive, e.g. "info" or "taskdeck=debug"
    pub log_level: String,
    /// Optional file receiving a copy of all log output
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
}

impl Default for TaskdeckConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT.as_secs(),
            enable_execute: false,
            log_level: "info".to_string(),
            log_file: None,
        }
    }
}

/// Values given on the command line; they win over every other source
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub base_url: Option<String>,
    pub log_level: Option<String>,
}

impl TaskdeckConfig {
    /// Load configuration from `path`, or from the per-user config file when
    /// no path is given and that file exists.
    pub fn load(path: Option<&Path>, overrides: &ConfigOverrides) -> Result<Self> {
        let file = match path {
            Some(path) => Some((path.to_path_buf(), true)),
            None => default_config_path().map(|path| (path, false)),
        };
        Self::build(file, true, overrides)
    }

    fn build(
        file: Option<(PathBuf, bool)>,
        with_env: bool,
        overrides: &ConfigOverrides,
    ) -> Result<Self> {
        let defaults = Self::default();
        let mut builder = Config::builder()
            .set_default("base_url", defaults.base_url)?
            .set_default("timeout_secs", defaults.timeout_secs)?
            .set_default("enable_execute", defaults.enable_execute)?
            .set_default("log_level", defaults.log_level)?;

        if let Some((path, required)) = file {
            tracing::debug!(path = %path.display(), required, "adding config file source");
            builder = builder.add_source(
                File::from(path)
                    .format(FileFormat::Yaml)
                    .required(required),
            );
        }
        if with_env {
            builder = builder.add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true));
        }

        builder = builder
            .set_override_option("base_url", overrides.base_url.clone())?
            .set_override_option("log_level", overrides.log_level.clone())?;

        let config: Self = builder
            .build()
            .context("read configuration sources")?
            .try_deserialize()
            .context("parse configuration")?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            bail!("base_url must be an http(s) URL, got {:?}", self.base_url);
        }
        if self.timeout_secs == 0 {
            bail!("timeout_secs must be greater than zero");
        }
        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            base_url: self.base_url.clone(),
            timeout: self.timeout(),
        }
    }

    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).context("serialize configuration")
    }
}

fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("taskdeck").join("config.yaml"))
}
