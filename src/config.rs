//! Application configuration.
//!
//! The configuration is loaded from `$XDG_CONFIG_HOME/hyprlayout/config.json`.
//! The file is optional and every key inside it is optional; anything left
//! out falls back to the compiled-in defaults, which reproduce the stock
//! behaviour (`hyprctl`, `~/.config/hypr/monitor-layout.conf`, 5 s command
//! timeout, 2 s reconnect backoff, 1 s settle delay).
//!
//! # Example
//!
//! ```json
//! {
//!   "hyprctl": "/usr/bin/hyprctl",
//!   "layout_file": "/home/me/.config/hypr/monitor-layout.conf",
//!   "timing": {
//!     "command_timeout_ms": 5000,
//!     "reconnect_backoff_ms": 2000,
//!     "settle_delay_ms": 1000
//!   }
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Runtime directory used when `XDG_RUNTIME_DIR` is unset.
pub const DEFAULT_RUNTIME_DIR: &str = "/run/user/1000";

/// Top-level configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Control command used for `-j monitors` and `reload`.
    pub hyprctl: String,

    /// Where the generated monitor directives are written.  `None` means
    /// `~/.config/hypr/monitor-layout.conf`.
    pub layout_file: Option<PathBuf>,

    /// Timeouts and delays.
    pub timing: TimingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            hyprctl: "hyprctl".into(),
            layout_file: None,
            timing: TimingConfig::default(),
        }
    }
}

/// Timeouts and delays, all in **milliseconds**.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    /// Upper bound for a single control-command invocation.
    pub command_timeout_ms: u64,
    /// Wait between event-socket connection attempts.
    pub reconnect_backoff_ms: u64,
    /// Wait after a hotplug event before probing, so the new display has
    /// time to report its modes.
    pub settle_delay_ms: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            command_timeout_ms: 5_000,
            reconnect_backoff_ms: 2_000,
            settle_delay_ms: 1_000,
        }
    }
}

impl TimingConfig {
    pub fn command_timeout(&self) -> Duration {
        Duration::from_millis(self.command_timeout_ms)
    }

    pub fn reconnect_backoff(&self) -> Duration {
        Duration::from_millis(self.reconnect_backoff_ms)
    }

    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_delay_ms)
    }
}

impl Config {
    /// Load configuration from a JSON file at `path`.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError(format!("failed to read {}: {}", path.display(), e)))?;
        let config: Self = serde_json::from_str(&contents)
            .map_err(|e| ConfigError(format!("failed to parse {}: {}", path.display(), e)))?;
        Ok(config)
    }

    /// The configured layout file, or the default under `$HOME`.
    pub fn layout_file_path(&self) -> PathBuf {
        self.layout_file
            .clone()
            .unwrap_or_else(default_layout_file)
    }
}

/// Error from loading or parsing a configuration file.
#[derive(Debug, thiserror::Error)]
#[error("config error: {0}")]
pub struct ConfigError(String);

//  Paths

fn home_dir() -> PathBuf {
    PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| "/tmp".into()))
}

/// Resolve the config directory (`$XDG_CONFIG_HOME/hyprlayout`).
pub fn config_dir() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| home_dir().join(".config"));
    base.join("hyprlayout")
}

/// `~/.config/hypr/monitor-layout.conf`
pub fn default_layout_file() -> PathBuf {
    home_dir().join(".config/hypr/monitor-layout.conf")
}

/// Build the Hyprland event socket path from the two environment values.
///
/// Missing values fall back to [`DEFAULT_RUNTIME_DIR`] and an empty
/// instance signature respectively.
pub fn event_socket_path(runtime_dir: Option<&str>, signature: Option<&str>) -> PathBuf {
    PathBuf::from(runtime_dir.unwrap_or(DEFAULT_RUNTIME_DIR))
        .join("hypr")
        .join(signature.unwrap_or(""))
        .join(".socket2.sock")
}

/// Resolve the event socket path from `XDG_RUNTIME_DIR` and
/// `HYPRLAND_INSTANCE_SIGNATURE`.
pub fn event_socket_path_from_env() -> PathBuf {
    let runtime = std::env::var("XDG_RUNTIME_DIR").ok();
    let signature = std::env::var("HYPRLAND_INSTANCE_SIGNATURE").ok();
    event_socket_path(runtime.as_deref(), signature.as_deref())
}
