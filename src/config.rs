use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::{
    error::{ConfigError, Result},
    pipeline::CompositeJob,
};

/// Main configuration for the Keyed-Compositor
///
/// Every section has a default, so a TOML file only needs to list what it sets.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Input and output files
    pub paths: PathsConfig,

    /// Key mode selection
    pub keying: KeyingConfig,

    /// What to do when compositing fails
    pub fallback: FallbackConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|_| ConfigError::FileNotFound { path: path.display().to_string() })?;

        let config: Config = toml::from_str(&content)
            .map_err(|_| ConfigError::ParseFailed { path: path.display().to_string() })?;
        Ok(config)
    }

    /// Save configuration to a TOML file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::InvalidValue {
                key: "config".to_string(),
                value: e.to_string(),
            })?;

        std::fs::write(path, content)?;
        Ok(())
    }

    /// Replace every value the overrides set; unset overrides leave the file's value
    pub fn apply_overrides(&mut self, overrides: ConfigOverrides) {
        if let Some(background) = overrides.background {
            self.paths.background = Some(background);
        }
        if let Some(overlay) = overrides.overlay {
            self.paths.overlay = Some(overlay);
        }
        if let Some(output) = overrides.output {
            self.paths.output = Some(output);
        }
        if let Some(mode) = overrides.mode {
            self.keying.mode = Some(mode);
        }
        if overrides.no_fallback {
            self.fallback.enabled = false;
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        self.paths.validate()?;
        self.keying.validate()?;
        Ok(())
    }

    /// Validate and turn the configuration into a runnable job
    pub fn job(&self) -> Result<CompositeJob> {
        self.validate()?;

        Ok(CompositeJob {
            background: required(&self.paths.background, "paths.background")?.to_path_buf(),
            overlay: required(&self.paths.overlay, "paths.overlay")?.to_path_buf(),
            output: required(&self.paths.output, "paths.output")?.to_path_buf(),
            fallback: self.fallback.enabled,
        })
    }
}

/// Values given on the command line, applied on top of a loaded [`Config`]
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub background: Option<PathBuf>,
    pub overlay: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub mode: Option<String>,

    /// Turn the background-copy fallback off; `false` keeps the configured value
    pub no_fallback: bool,
}

fn required<'a>(value: &'a Option<PathBuf>, key: &str) -> Result<&'a Path> {
    value
        .as_deref()
        .ok_or_else(|| {
            ConfigError::MissingKey {
                key: key.to_string(),
            }
            .into()
        })
}

/// Input and output file locations
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    /// Image the overlay is composited onto; also the fallback output
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<PathBuf>,

    /// Text or logo image on a near-black background
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overlay: Option<PathBuf>,

    /// Where the PNG result is written
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,
}

impl PathsConfig {
    fn validate(&self) -> Result<()> {
        let background = required(&self.background, "paths.background")?;
        required(&self.overlay, "paths.overlay")?;
        let output = required(&self.output, "paths.output")?;

        // The fallback copies the background onto the output
        if background == output {
            return Err(ConfigError::InvalidValue {
                key: "paths.output".to_string(),
                value: output.display().to_string(),
            }
            .into());
        }

        Ok(())
    }
}

/// Key mode selection
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyingConfig {
    /// Name of a registered key mode ("white" or "passthrough" for the built-ins).
    /// There is no default: the mode has to be chosen per overlay.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
}

impl KeyingConfig {
    fn validate(&self) -> Result<()> {
        match self.mode.as_deref() {
            None => Err(ConfigError::MissingKey {
                key: "keying.mode".to_string(),
            }
            .into()),
            Some(mode) if mode.trim().is_empty() => Err(ConfigError::InvalidValue {
                key: "keying.mode".to_string(),
                value: mode.to_string(),
            }
            .into()),
            Some(_) => Ok(()),
        }
    }
}

/// Failure policy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FallbackConfig {
    /// Copy the background to the output path when compositing fails
    pub enabled: bool,
}

impl Default for FallbackConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}
