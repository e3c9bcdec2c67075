//! Theme configuration for trellis-player
//!
//! Provides configurable colors for cell diff states and badges.
//! Configuration is stored as YAML in the user's config directory.
//! Default location: ~/.config/trellis-player/theme.yaml

use iced::Color;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

/// Global theme instance (initialized once at startup)
static THEME: OnceLock<ThemeConfig> = OnceLock::new();

/// Root theme configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Cell colors for the track grids
    pub cells: CellColors,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            cells: CellColors::default(),
        }
    }
}

/// Cell color configuration
///
/// Colors are specified as hex strings (e.g., "#2F6B3C")
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CellColors {
    /// Background for cells whose token changed this step (default: green)
    pub changed: String,
    /// Background for cells whose token disappeared this step (default: red)
    pub removed: String,
    /// Resting cell background
    pub cell: String,
    /// Normal token text color
    pub text: String,
    /// Text color for sentinel tokens ([EoT], newline escapes)
    pub muted_text: String,
    /// Completion badge accent color
    pub badge: String,
}

impl Default for CellColors {
    fn default() -> Self {
        Self {
            changed: "#2F6B3C".to_string(),    // Green
            removed: "#7A2E2E".to_string(),    // Dark Red
            cell: "#202024".to_string(),       // Panel gray
            text: "#E6E6E6".to_string(),       // Near-white
            muted_text: "#8A8A8A".to_string(), // Gray
            badge: "#00CCCC".to_string(),      // Cyan
        }
    }
}

/// Parsed, render-ready palette
#[derive(Debug, Clone, Copy)]
pub struct CellPalette {
    pub changed: Color,
    pub removed: Color,
    pub cell: Color,
    pub text: Color,
    pub muted_text: Color,
    pub badge: Color,
}

/// Initialize the theme from the user's theme.yaml (or defaults)
///
/// Call once at startup, before the first view.
pub fn init_theme() {
    let path = default_theme_path();
    let config = load_theme(&path);
    let _ = THEME.set(config);
}

/// Get the active cell palette
pub fn palette() -> CellPalette {
    let config = THEME.get_or_init(ThemeConfig::default);
    let cells = &config.cells;
    CellPalette {
        changed: parse_hex_color(&cells.changed),
        removed: parse_hex_color(&cells.removed),
        cell: parse_hex_color(&cells.cell),
        text: parse_hex_color(&cells.text),
        muted_text: parse_hex_color(&cells.muted_text),
        badge: parse_hex_color(&cells.badge),
    }
}

/// Default theme file path: ~/.config/trellis-player/theme.yaml
fn default_theme_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
        .join("trellis-player")
        .join("theme.yaml")
}

/// Load theme config, falling back to defaults on any problem
fn load_theme(path: &Path) -> ThemeConfig {
    if !path.exists() {
        return ThemeConfig::default();
    }
    match std::fs::read_to_string(path) {
        Ok(contents) => match serde_yaml::from_str::<ThemeConfig>(&contents) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("Invalid theme config ({}), using defaults", e);
                ThemeConfig::default()
            }
        },
        Err(e) => {
            log::warn!("Could not read theme config ({}), using defaults", e);
            ThemeConfig::default()
        }
    }
}

/// Parse a hex color string to an iced Color
///
/// Supports formats: "#RRGGBB" or "RRGGBB"
/// Returns white on parse failure
fn parse_hex_color(hex: &str) -> Color {
    let hex = hex.trim_start_matches('#');
    if hex.len() != 6 {
        log::warn!("Invalid hex color '{}', using white", hex);
        return Color::WHITE;
    }
    let parsed = u32::from_str_radix(hex, 16);
    match parsed {
        Ok(rgb) => Color::from_rgb8(
            ((rgb >> 16) & 0xFF) as u8,
            ((rgb >> 8) & 0xFF) as u8,
            (rgb & 0xFF) as u8,
        ),
        Err(_) => {
            log::warn!("Invalid hex color '{}', using white", hex);
            Color::WHITE
        }
    }
}
