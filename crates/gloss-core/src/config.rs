//! Configuration types for gloss.
//!
//! [`Config::load`] reads `~/.config/gloss/config.toml`, creating it with
//! hardcoded defaults if it does not yet exist. [`Config::defaults`] returns
//! the same defaults without touching the filesystem (useful in tests).

use serde::Deserialize;
use std::path::PathBuf;

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[catalog]
# "embedded", a path to a glossary JSON file, or an http:// URL
source = "embedded"

[ui]
theme                  = "default"
domain_pane_width_pct  = 24
detail_pane_height_pct = 45
show_examples          = true
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level application configuration, loaded from `~/.config/gloss/config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// `[catalog]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogConfig {
    #[serde(default = "default_source")]
    pub source: String,
}

fn default_source() -> String { "embedded".to_string() }

impl Default for CatalogConfig {
    fn default() -> Self {
        Self { source: default_source() }
    }
}

/// `[ui]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_theme")]
    pub theme: String,
    #[serde(default = "default_domain_pane_width_pct")]
    pub domain_pane_width_pct: u16,
    #[serde(default = "default_detail_pane_height_pct")]
    pub detail_pane_height_pct: u16,
    #[serde(default = "default_show_examples")]
    pub show_examples: bool,
}

fn default_theme() -> String { "default".to_string() }
fn default_domain_pane_width_pct() -> u16 { 24 }
fn default_detail_pane_height_pct() -> u16 { 45 }
fn default_show_examples() -> bool { true }

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            domain_pane_width_pct: default_domain_pane_width_pct(),
            detail_pane_height_pct: default_detail_pane_height_pct(),
            show_examples: default_show_examples(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load from `~/.config/gloss/config.toml`, layered on top of the built-in
    /// defaults. Creates the file with defaults if it does not exist.
    pub fn load() -> anyhow::Result<Self> {
        let path = Self::path();

        if !path.exists() {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&path, DEFAULT_CONFIG.trim_start())?;
            tracing::info!(path = %path.display(), "wrote default config");
        }

        Self::from_sources(Some(path))
    }

    /// Where [`Config::load`] reads and writes the user's config file.
    pub fn path() -> PathBuf {
        config_path()
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        Self::from_sources(None).expect("built-in default config must be valid TOML")
    }

    fn from_sources(path: Option<PathBuf>) -> anyhow::Result<Self> {
        let mut builder = config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml));
        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path.as_path()).required(false));
        }
        let mut cfg: Config = builder.build()?.try_deserialize()?;
        cfg.ui.domain_pane_width_pct = cfg.ui.domain_pane_width_pct.clamp(10, 60);
        cfg.ui.detail_pane_height_pct = cfg.ui.detail_pane_height_pct.clamp(20, 80);
        Ok(cfg)
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("gloss")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
