// ABOUTME: Configuration management for brandmagnet
// Handles funnel latency, carousel autoplay policy, UI variant, and locale strings

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub mod locale;

pub use locale::LocaleStrings;

use crate::carousel::{AutoplayCadence, CarouselSettings};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Qualification funnel settings
    #[serde(default)]
    pub funnel: FunnelConfig,

    /// Testimonial carousel settings
    #[serde(default)]
    pub carousel: CarouselConfig,

    /// Presentation settings
    #[serde(default)]
    pub ui: UiConfig,

    /// User-visible strings
    #[serde(default)]
    pub locale: LocaleStrings,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunnelConfig {
    /// Delay before the simulated lead intake acknowledges (default: 1500ms)
    #[serde(default = "default_submission_latency")]
    pub submission_latency_ms: u64,
}

impl Default for FunnelConfig {
    fn default() -> Self {
        Self {
            submission_latency_ms: default_submission_latency(),
        }
    }
}

impl FunnelConfig {
    pub const fn submission_latency(&self) -> Duration {
        Duration::from_millis(self.submission_latency_ms)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarouselConfig {
    /// Whether autoplay starts enabled
    #[serde(default = "default_true")]
    pub autoplay: bool,

    /// Autoplay period in milliseconds (default: 6000ms)
    #[serde(default = "default_autoplay_interval")]
    pub autoplay_interval_ms: u64,

    /// Whether manual navigation restarts the autoplay interval
    #[serde(default)]
    pub cadence: AutoplayCadence,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            autoplay: default_true(),
            autoplay_interval_ms: default_autoplay_interval(),
            cadence: AutoplayCadence::default(),
        }
    }
}

impl CarouselConfig {
    pub const fn settings(&self) -> CarouselSettings {
        CarouselSettings {
            interval: Duration::from_millis(self.autoplay_interval_ms),
            cadence: self.cadence,
            autoplay: self.autoplay,
        }
    }
}

/// Visual variant; the polished variant adds decorative embellishment only
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UiVariant {
    #[default]
    Baseline,
    Polished,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default)]
    pub variant: UiVariant,

    /// Event loop tick rate in milliseconds (default: 100ms)
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            variant: UiVariant::default(),
            tick_rate_ms: default_tick_rate(),
        }
    }
}

const fn default_submission_latency() -> u64 {
    1500
}

const fn default_autoplay_interval() -> u64 {
    6000
}

const fn default_tick_rate() -> u64 {
    100
}

const fn default_true() -> bool {
    true
}

impl SiteConfig {
    /// Load configuration from default locations.
    ///
    /// Later files override earlier ones key by key.
    pub fn load() -> Result<Self> {
        let paths: Vec<PathBuf> = Self::get_config_paths()
            .into_iter()
            .filter(|p| p.exists())
            .collect();
        Self::load_layered(&paths)
    }

    /// Load a single explicit configuration file
    pub fn load_from(path: &Path) -> Result<Self> {
        Self::load_layered(&[path.to_path_buf()])
    }

    fn load_layered(paths: &[PathBuf]) -> Result<Self> {
        let mut merged = toml::Table::new();

        for path in paths {
            let content = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            let table: toml::Table = toml::from_str(&content)
                .with_context(|| format!("Failed to parse config from {}", path.display()))?;
            tracing::debug!(path = %path.display(), "Loaded config layer");
            merge_tables(&mut merged, table);
        }

        toml::Value::Table(merged)
            .try_into()
            .context("Invalid configuration values")
    }

    /// Get configuration file paths in order of precedence (lowest first)
    fn get_config_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from("/etc/brandmagnet/config.toml")];

        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".brandmagnet").join("config.toml"));
        }

        if let Ok(cwd) = std::env::current_dir() {
            paths.push(cwd.join(".brandmagnet").join("config.toml"));
        }

        paths
    }
}

fn merge_tables(base: &mut toml::Table, overlay: toml::Table) {
    for (key, value) in overlay {
        match (base.get_mut(&key), value) {
            (Some(toml::Value::Table(existing)), toml::Value::Table(incoming)) => {
                merge_tables(existing, incoming);
            }
            (_, value) => {
                base.insert(key, value);
            }
        }
    }
}
