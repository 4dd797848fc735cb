//! Gallery configuration module.
//!
//! Handles loading, validating, and merging `gallery.toml`. Stock defaults
//! are the base layer; a user file only needs the keys it overrides.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [site]
//! title = "Gallery"
//!
//! [media]
//! cloud_name = "demo"       # Media host account the public ids live in
//! thumbnail_width = 180     # Grid and filmstrip thumbnails
//! full_width = 1920         # Widest variant requested for the lightbox
//!
//! [viewer]
//! max_width = 1280          # Widest the lightbox image is displayed
//! margin = 100              # Space kept around the image on each axis
//! filmstrip_radius = 15     # Thumbnails on each side of the current photo
//! swipe_threshold = 50      # Horizontal pixels before a drag is a swipe
//! transition_travel = 1000  # Slide distance of the transition
//! default_viewport = [1400, 900]  # Viewport assumed for pre-rendered pages
//!
//! [order]
//! mode = "sequential"       # or "shuffled"
//! # seed = 0                # Shuffle seed (shuffled mode only)
//!
//! [colors.light]
//! background = "#ffffff"
//! text = "#111111"
//! text_muted = "#666666"
//! border = "#e0e0e0"
//! overlay = "rgba(255, 255, 255, 0.92)"
//!
//! [colors.dark]
//! background = "#0a0a0a"
//! text = "#eeeeee"
//! text_muted = "#999999"
//! border = "#333333"
//! overlay = "rgba(0, 0, 0, 0.92)"
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use crate::collection::NavigationOrder;
use crate::types::Viewport;
use crate::viewer::{LayoutLimits, ViewerSettings};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// File name looked up in a gallery directory.
pub const CONFIG_FILENAME: &str = "gallery.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Gallery configuration loaded from `gallery.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GalleryConfig {
    pub site: SiteConfig,
    /// Media host account and requested image widths.
    pub media: MediaConfig,
    /// Lightbox layout and input tunables.
    pub viewer: ViewerConfig,
    /// How navigation ids are assigned.
    pub order: NavigationOrder,
    /// Color schemes for light and dark modes.
    pub colors: ColorConfig,
}

impl GalleryConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.media.cloud_name.trim().is_empty() {
            return Err(ConfigError::Validation(
                "media.cloud_name must not be empty".into(),
            ));
        }
        if self.media.thumbnail_width == 0 || self.media.full_width == 0 {
            return Err(ConfigError::Validation(
                "media widths must be non-zero".into(),
            ));
        }
        if self.viewer.max_width == 0 {
            return Err(ConfigError::Validation(
                "viewer.max_width must be non-zero".into(),
            ));
        }
        let [w, h] = self.viewer.default_viewport;
        if w <= self.viewer.margin || h <= self.viewer.margin {
            return Err(ConfigError::Validation(
                "viewer.default_viewport must be larger than viewer.margin".into(),
            ));
        }
        if self.viewer.swipe_threshold <= 0.0 {
            return Err(ConfigError::Validation(
                "viewer.swipe_threshold must be positive".into(),
            ));
        }
        if self.viewer.transition_travel <= 0 {
            return Err(ConfigError::Validation(
                "viewer.transition_travel must be positive".into(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Page title of the grid and the photo pages.
    pub title: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Gallery".to_string(),
        }
    }
}

/// Media host settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MediaConfig {
    /// Account name on the media host.
    pub cloud_name: String,
    /// Width requested for grid and filmstrip thumbnails.
    pub thumbnail_width: u32,
    /// Widest variant requested for the lightbox image.
    pub full_width: u32,
}

impl Default for MediaConfig {
    fn default() -> Self {
        Self {
            cloud_name: "demo".to_string(),
            thumbnail_width: 180,
            full_width: 1920,
        }
    }
}

/// Lightbox settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ViewerConfig {
    pub max_width: u32,
    pub margin: u32,
    pub filmstrip_radius: usize,
    pub swipe_threshold: f64,
    pub transition_travel: i32,
    /// Viewport assumed when rendering pages ahead of time, `[width, height]`.
    pub default_viewport: [u32; 2],
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            max_width: 1280,
            margin: 100,
            filmstrip_radius: 15,
            swipe_threshold: 50.0,
            transition_travel: 1000,
            default_viewport: [1400, 900],
        }
    }
}

impl ViewerConfig {
    pub fn settings(&self) -> ViewerSettings {
        ViewerSettings {
            limits: LayoutLimits {
                max_width: self.max_width,
                margin: self.margin,
            },
            filmstrip_radius: self.filmstrip_radius,
            transition_travel: self.transition_travel,
        }
    }

    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.default_viewport[0], self.default_viewport[1])
    }
}

/// Color configuration for light and dark modes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorConfig {
    pub light: ColorScheme,
    pub dark: ColorScheme,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            light: ColorScheme::default_light(),
            dark: ColorScheme::default_dark(),
        }
    }
}

/// Individual color scheme (light or dark).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorScheme {
    pub background: String,
    pub text: String,
    /// Muted/secondary text color (counters, captions).
    pub text_muted: String,
    pub border: String,
    /// Backdrop behind the lightbox.
    pub overlay: String,
}

impl ColorScheme {
    pub fn default_light() -> Self {
        Self {
            background: "#ffffff".to_string(),
            text: "#111111".to_string(),
            text_muted: "#666666".to_string(),
            border: "#e0e0e0".to_string(),
            overlay: "rgba(255, 255, 255, 0.92)".to_string(),
        }
    }

    pub fn default_dark() -> Self {
        Self {
            background: "#0a0a0a".to_string(),
            text: "#eeeeee".to_string(),
            text_muted: "#999999".to_string(),
            border: "#333333".to_string(),
            overlay: "rgba(0, 0, 0, 0.92)".to_string(),
        }
    }
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::default_light()
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
pub fn stock_defaults_value() -> Result<toml::Value, ConfigError> {
    toml::Value::try_from(GalleryConfig::default())
        .map_err(|e| ConfigError::Validation(format!("default config must serialize: {e}")))
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load a config file as a raw TOML value. `Ok(None)` if it does not exist.
pub fn load_raw_config(path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<GalleryConfig, ConfigError> {
    let merged = match overlay {
        // `order` is a tagged enum: replace it whole so a switch to
        // "sequential" does not inherit a stale seed.
        Some(toml::Value::Table(mut ov)) => {
            let order = ov.remove("order");
            let mut merged = merge_toml(base, toml::Value::Table(ov));
            if let (Some(order), toml::Value::Table(table)) = (order, &mut merged) {
                table.insert("order".to_string(), order);
            }
            merged
        }
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: GalleryConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from `path`, falling back to stock defaults if it is missing.
pub fn load_config_file(path: &Path) -> Result<GalleryConfig, ConfigError> {
    let overlay = load_raw_config(path)?;
    if overlay.is_some() {
        tracing::debug!(path = %path.display(), "loaded config");
    }
    resolve_config(stock_defaults_value()?, overlay)
}

/// Load `gallery.toml` from a directory.
pub fn load_config(dir: &Path) -> Result<GalleryConfig, ConfigError> {
    load_config_file(&dir.join(CONFIG_FILENAME))
}

/// Returns a fully-commented stock `gallery.toml`.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Gallery Configuration
# =====================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults. Unknown keys cause an error.

[site]
# Title of the grid page and prefix of photo page titles.
title = "Gallery"

# ---------------------------------------------------------------------------
# Media host
# ---------------------------------------------------------------------------
[media]
# Account the uploaded public ids live in.
cloud_name = "demo"

# Width requested for grid and filmstrip thumbnails.
thumbnail_width = 180

# Widest variant requested for the lightbox image.
full_width = 1920

# ---------------------------------------------------------------------------
# Lightbox
# ---------------------------------------------------------------------------
[viewer]
# Widest the lightbox image is displayed, in pixels.
max_width = 1280

# Space kept around the image on each axis, in pixels.
margin = 100

# Thumbnails shown on each side of the current photo in the filmstrip.
filmstrip_radius = 15

# Horizontal travel, in pixels, before a drag counts as a swipe.
swipe_threshold = 50.0

# Slide distance of the transition between photos, in pixels.
transition_travel = 1000

# Viewport assumed for pre-rendered photo pages, [width, height].
default_viewport = [1400, 900]

# ---------------------------------------------------------------------------
# Browse order used by swipe navigation
# ---------------------------------------------------------------------------
[order]
# "sequential" follows upload order; "shuffled" uses a seeded permutation.
mode = "sequential"
# seed = 0

# ---------------------------------------------------------------------------
# Colors - Light mode (prefers-color-scheme: light)
# ---------------------------------------------------------------------------
[colors.light]
background = "#ffffff"
text = "#111111"
text_muted = "#666666"
border = "#e0e0e0"
overlay = "rgba(255, 255, 255, 0.92)"

# ---------------------------------------------------------------------------
# Colors - Dark mode (prefers-color-scheme: dark)
# ---------------------------------------------------------------------------
[colors.dark]
background = "#0a0a0a"
text = "#eeeeee"
text_muted = "#999999"
border = "#333333"
overlay = "rgba(0, 0, 0, 0.92)"
"##
}

/// Generate CSS custom properties from color config.
pub fn generate_color_css(colors: &ColorConfig) -> String {
    format!(
        r#":root {{
    --color-bg: {light_bg};
    --color-text: {light_text};
    --color-text-muted: {light_text_muted};
    --color-border: {light_border};
    --color-overlay: {light_overlay};
}}

@media (prefers-color-scheme: dark) {{
    :root {{
        --color-bg: {dark_bg};
        --color-text: {dark_text};
        --color-text-muted: {dark_text_muted};
        --color-border: {dark_border};
        --color-overlay: {dark_overlay};
    }}
}}"#,
        light_bg = colors.light.background,
        light_text = colors.light.text,
        light_text_muted = colors.light.text_muted,
        light_border = colors.light.border,
        light_overlay = colors.light.overlay,
        dark_bg = colors.dark.background,
        dark_text = colors.dark.text,
        dark_text_muted = colors.dark.text_muted,
        dark_border = colors.dark.border,
        dark_overlay = colors.dark.overlay,
    )
}
