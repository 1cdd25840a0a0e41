///
/// # Runtime Configuration
///
/// Hosts may tune the runtime through a `[runtime]` table in TOML:
///
/// ```toml
/// [runtime]
/// fatal_status = 70
/// ```
///
/// The configuration is installed once per process. Until a host installs
/// one, `current()` hands out the defaults.
///

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use thiserror::Error;

/// Exit status used when the runtime hits a fatal error
pub const DEFAULT_FATAL_STATUS: i32 = 70;

/// Fatal statuses must be nonzero and survive truncation to 8 bits
pub const FATAL_STATUS_RANGE: std::ops::RangeInclusive<i32> = 1..=255;

static INSTALLED: OnceLock<RuntimeConfig> = OnceLock::new();
static DEFAULTS: RuntimeConfig = RuntimeConfig { fatal_status: DEFAULT_FATAL_STATUS };

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RuntimeConfig {
    #[serde(default = "default_fatal_status")]
    pub fatal_status: i32,
}

#[derive(Debug, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    runtime: Option<RuntimeConfig>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read runtime config at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid fatal_status {status}: must be between 1 and 255")]
    InvalidFatalStatus { status: i32 },
}

fn default_fatal_status() -> i32 {
    DEFAULT_FATAL_STATUS
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        DEFAULTS.clone()
    }
}

impl RuntimeConfig {
    /// Parse a config document; a missing `[runtime]` table yields the defaults.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let file: ConfigFile = toml::from_str(source)?;
        let config = file.runtime.unwrap_or_default();
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if FATAL_STATUS_RANGE.contains(&self.fatal_status) {
            Ok(())
        } else {
            Err(ConfigError::InvalidFatalStatus { status: self.fatal_status })
        }
    }

    /// Status a fatal error exits with; an out-of-range value falls back to the default
    pub fn exit_status(&self) -> i32 {
        if FATAL_STATUS_RANGE.contains(&self.fatal_status) {
            self.fatal_status
        } else {
            DEFAULT_FATAL_STATUS
        }
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&source)
    }
}

/// Install the process-wide config. Returns false if one was already installed,
/// in which case the earlier config stays in effect.
pub fn install(config: RuntimeConfig) -> bool {
    if let Err(err) = config.validate() {
        tracing::warn!("{err}; fatal errors will exit with {DEFAULT_FATAL_STATUS}");
    }
    let installed = INSTALLED.set(config).is_ok();
    if !installed {
        tracing::debug!("runtime config already installed, keeping the first one");
    }
    installed
}

pub fn current() -> &'static RuntimeConfig {
    INSTALLED.get().unwrap_or(&DEFAULTS)
}
