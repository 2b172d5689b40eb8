//! Configuration loading and timer configuration validation

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Pomodoro timer configuration
///
/// Immutable per session except via explicit reconfiguration while the
/// countdown is paused. All durations are in whole seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerConfig {
    /// Length of a focus session
    pub focus_seconds: u32,
    /// Length of a short break
    pub break_seconds: u32,
    /// Length of a long break
    pub long_break_seconds: u32,
    /// Focus sessions completed before a long break is taken
    pub cycles_before_long_break: u32,
}

impl TimerConfig {
    /// Validate that every duration and the cycle count are positive
    pub fn validate(&self) -> Result<()> {
        if self.focus_seconds == 0 {
            return Err(Error::InvalidInput(
                "focus_seconds must be greater than zero".to_string(),
            ));
        }
        if self.break_seconds == 0 {
            return Err(Error::InvalidInput(
                "break_seconds must be greater than zero".to_string(),
            ));
        }
        if self.long_break_seconds == 0 {
            return Err(Error::InvalidInput(
                "long_break_seconds must be greater than zero".to_string(),
            ));
        }
        if self.cycles_before_long_break == 0 {
            return Err(Error::InvalidInput(
                "cycles_before_long_break must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for TimerConfig {
    /// Classic Pomodoro: 25 minute focus, 5 minute break,
    /// 15 minute long break every 4 cycles
    fn default() -> Self {
        Self {
            focus_seconds: 25 * 60,
            break_seconds: 5 * 60,
            long_break_seconds: 15 * 60,
            cycles_before_long_break: 4,
        }
    }
}

/// Service configuration loaded from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP listen port
    #[serde(default = "default_port")]
    pub port: u16,
    /// Initial timer configuration
    #[serde(default)]
    pub timer: TimerConfig,
}

fn default_port() -> u16 {
    5840
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            timer: TimerConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration following the priority order:
    /// 1. Explicit path (command-line argument, highest priority)
    /// 2. FOCUSTUNE_CONFIG environment variable
    /// 3. Platform config directory (~/.config/focustune/config.toml)
    /// 4. Compiled defaults (fallback)
    pub fn load(cli_path: Option<&str>) -> Result<Self> {
        if let Some(path) = cli_path {
            return Self::from_file(&PathBuf::from(path));
        }

        if let Ok(path) = std::env::var("FOCUSTUNE_CONFIG") {
            return Self::from_file(&PathBuf::from(path));
        }

        if let Some(path) = default_config_path() {
            if path.exists() {
                return Self::from_file(&path);
            }
        }

        Ok(Self::default())
    }

    /// Parse configuration from a TOML file
    pub fn from_file(path: &PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("failed to read {}: {}", path.display(), e)))?;
        let config: AppConfig = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("failed to parse {}: {}", path.display(), e)))?;
        config.timer.validate()?;
        Ok(config)
    }
}

/// Platform config file path (~/.config/focustune/config.toml or equivalent)
fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("focustune").join("config.toml"))
}
