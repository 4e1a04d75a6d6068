//! Configuration file handling for glyphfall.
//!
//! Settings live in `config.toml` under the platform config directory. Every
//! field is optional; anything missing falls back to its default and values
//! out of range are clamped rather than rejected.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use color_eyre::eyre::{Result, WrapErr, eyre};
use directories::ProjectDirs;
use glyphfall_core::{ColorTheme, FallSpeed, GlyphSet, RainSettings};
use serde::{Deserialize, Serialize};

/// Name of the config file inside the config directory.
pub const CONFIG_FILE: &str = "config.toml";

/// User configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub color_theme: ColorTheme,
    pub speed: FallSpeed,
    pub glyph_set: GlyphSet,
    /// Cells between rain columns.
    pub column_spacing: u16,
    /// Reach of the cursor, in columns.
    pub cursor_radius: f32,
    /// How hard glyphs are pushed away from the cursor.
    pub cursor_strength: f32,
    /// Fraction of brightness the trail loses per frame.
    pub fade: f32,
    /// Chance per frame that a drop past the bottom restarts.
    pub reset_chance: f32,
    /// Redraws per second.
    pub fps: u32,
    /// Show the key help line at the bottom.
    pub show_help: bool,
}

impl Default for Config {
    fn default() -> Self {
        let rain = RainSettings::default();
        Self {
            color_theme: rain.theme,
            speed: rain.speed,
            glyph_set: rain.glyphs,
            column_spacing: rain.column_spacing,
            cursor_radius: rain.cursor_radius,
            cursor_strength: rain.cursor_strength,
            fade: rain.fade,
            reset_chance: rain.reset_chance,
            fps: 60,
            show_help: false,
        }
    }
}

impl Config {
    /// Default location of the config file, if a home directory is known.
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "glyphfall").map(|dirs| dirs.config_dir().join(CONFIG_FILE))
    }

    /// Load from the default location, falling back to defaults.
    pub fn load() -> Result<Self> {
        match Self::default_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load from `path`. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .wrap_err_with(|| format!("failed to read config file {}", path.display()))?;
        let config: Config = toml::from_str(&contents)
            .wrap_err_with(|| format!("failed to parse config file {}", path.display()))?;

        Ok(config.validate())
    }

    /// Save to the default location and return the path written.
    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::default_path().ok_or_else(|| eyre!("no config directory available"))?;
        self.save_to(&path)?;
        Ok(path)
    }

    /// Write to `path`, creating parent directories as needed.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .wrap_err_with(|| format!("failed to create {}", parent.display()))?;
        }
        fs::write(path, self.to_toml()?)
            .wrap_err_with(|| format!("failed to write config file {}", path.display()))
    }

    /// Serialize as pretty TOML.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).wrap_err("failed to serialize config")
    }

    /// Clamp every value into its usable range.
    pub fn validate(mut self) -> Self {
        self.column_spacing = self.column_spacing.clamp(1, 8);
        self.cursor_radius = clamp_or(self.cursor_radius, 0.0, 200.0, 12.0);
        self.cursor_strength = clamp_or(self.cursor_strength, 0.0, 4.0, 0.6);
        self.fade = clamp_or(self.fade, 0.01, 1.0, 0.1);
        self.reset_chance = clamp_or(self.reset_chance, 0.0, 1.0, 0.025);
        self.fps = self.fps.clamp(1, 240);
        self
    }

    /// Animation tunables derived from this config.
    pub fn rain_settings(&self) -> RainSettings {
        RainSettings {
            theme: self.color_theme,
            speed: self.speed,
            glyphs: self.glyph_set,
            column_spacing: self.column_spacing,
            cursor_radius: self.cursor_radius,
            cursor_strength: self.cursor_strength,
            fade: self.fade,
            reset_chance: self.reset_chance,
        }
    }

    /// Time to wait for input between redraws.
    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(1000 / u64::from(self.fps.max(1)))
    }
}

/// Clamp a float, replacing NaN with `fallback`.
fn clamp_or(value: f32, min: f32, max: f32, fallback: f32) -> f32 {
    if value.is_nan() {
        fallback
    } else {
        value.clamp(min, max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("nope.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_partial_file_merges_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "color_theme = \"cyan\"\nfps = 30\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.color_theme, ColorTheme::Cyan);
        assert_eq!(config.fps, 30);
        assert_eq!(config.speed, FallSpeed::Medium);
        assert_eq!(config.fade, 0.1);
    }

    #[test]
    fn test_out_of_range_values_clamped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(
            &path,
            "column_spacing = 0\nfade = 3.5\nreset_chance = -1.0\nfps = 1000\ncursor_radius = 9999.0\n",
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.column_spacing, 1);
        assert_eq!(config.fade, 1.0);
        assert_eq!(config.reset_chance, 0.0);
        assert_eq!(config.fps, 240);
        assert_eq!(config.cursor_radius, 200.0);
    }

    #[test]
    fn test_invalid_toml_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "color_theme = \"plaid\"\n").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(format!("{err}").contains("failed to parse config file"));
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join(CONFIG_FILE);
        let config = Config {
            color_theme: ColorTheme::Rainbow,
            speed: FallSpeed::Fast,
            glyph_set: GlyphSet::Katakana,
            column_spacing: 2,
            show_help: true,
            ..Default::default()
        };

        config.save_to(&path).unwrap();
        assert_eq!(Config::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_rain_settings_and_interval() {
        let config = Config {
            fps: 50,
            glyph_set: GlyphSet::Binary,
            ..Default::default()
        };
        assert_eq!(config.frame_interval(), Duration::from_millis(20));

        let rain = config.rain_settings();
        assert_eq!(rain.glyphs, GlyphSet::Binary);
        assert_eq!(rain, RainSettings {
            glyphs: GlyphSet::Binary,
            ..RainSettings::default()
        });
    }
}
