//! Command line flags.

use std::path::{Path, PathBuf};

use clap::Parser;
use glyphfall_core::{ColorTheme, FallSpeed, GlyphSet};
use glyphfall_config::Config;

/// Digital rain for your terminal that shies away from the mouse.
#[derive(Debug, Default, Parser)]
#[command(version, about)]
pub struct Cli {
    /// Read settings from this file instead of the default location.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Color theme (green, cyan, white, magenta, yellow, red, blue, rainbow).
    #[arg(long, value_name = "THEME")]
    pub color: Option<ColorTheme>,

    /// Fall speed (slow, medium, fast).
    #[arg(long, value_name = "SPEED")]
    pub speed: Option<FallSpeed>,

    /// Glyph set (classic, katakana, binary).
    #[arg(long, value_name = "SET")]
    pub glyphs: Option<GlyphSet>,

    /// Redraws per second.
    #[arg(long, value_name = "N")]
    pub fps: Option<u32>,

    /// Seed the random generator for a reproducible run.
    #[arg(long, value_name = "N")]
    pub seed: Option<u64>,

    /// Do not capture the mouse.
    #[arg(long)]
    pub no_mouse: bool,

    /// Print the effective configuration as TOML and exit.
    #[arg(long)]
    pub print_config: bool,

    /// Save the effective configuration to the config file and exit.
    #[arg(long)]
    pub write_config: bool,
}

impl Cli {
    /// Apply command line overrides on top of a loaded config.
    pub fn apply(&self, mut config: Config) -> Config {
        if let Some(theme) = self.color {
            config.color_theme = theme;
        }
        if let Some(speed) = self.speed {
            config.speed = speed;
        }
        if let Some(glyphs) = self.glyphs {
            config.glyph_set = glyphs;
        }
        if let Some(fps) = self.fps {
            config.fps = fps;
        }
        config.validate()
    }

    /// Handle the flags that print or write the config instead of animating.
    ///
    /// Returns the text to show the user, or `None` when the animation
    /// should start.
    pub fn one_shot(
        &self,
        config: &Config,
        config_path: Option<&Path>,
    ) -> color_eyre::Result<Option<String>> {
        if self.print_config {
            return Ok(Some(config.to_toml()?));
        }
        if self.write_config {
            let path = match config_path {
                Some(path) => {
                    config.save_to(path)?;
                    path.to_path_buf()
                }
                None => config.save()?,
            };
            return Ok(Some(format!("wrote {}\n", path.display())));
        }
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flags() {
        let cli = Cli::try_parse_from([
            "glyphfall",
            "--color",
            "rainbow",
            "--speed",
            "slow",
            "--glyphs",
            "katakana",
            "--seed",
            "7",
            "--no-mouse",
        ])
        .unwrap();

        assert_eq!(cli.color, Some(ColorTheme::Rainbow));
        assert_eq!(cli.speed, Some(FallSpeed::Slow));
        assert_eq!(cli.glyphs, Some(GlyphSet::Katakana));
        assert_eq!(cli.seed, Some(7));
        assert!(cli.no_mouse);
    }

    #[test]
    fn test_rejects_unknown_theme() {
        assert!(Cli::try_parse_from(["glyphfall", "--color", "plaid"]).is_err());
    }

    #[test]
    fn test_apply_overrides_and_clamps() {
        let cli = Cli {
            color: Some(ColorTheme::Red),
            fps: Some(0),
            ..Default::default()
        };
        let config = cli.apply(Config::default());
        assert_eq!(config.color_theme, ColorTheme::Red);
        assert_eq!(config.speed, FallSpeed::Medium);
        assert_eq!(config.fps, 1);
    }

    #[test]
    fn test_print_config_outputs_toml() {
        let cli = Cli::try_parse_from(["glyphfall", "--print-config", "--color", "cyan"]).unwrap();
        let config = cli.apply(Config::default());

        let out = cli.one_shot(&config, None).unwrap().unwrap();
        assert!(out.contains("color_theme = \"cyan\""));
        assert_eq!(toml::from_str::<Config>(&out).unwrap(), config);
    }

    #[test]
    fn test_write_config_saves_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("glyphfall").join("config.toml");
        let cli = Cli::try_parse_from(["glyphfall", "--write-config", "--speed", "fast"]).unwrap();
        let config = cli.apply(Config::default());

        let out = cli.one_shot(&config, Some(&path)).unwrap().unwrap();
        assert!(out.starts_with("wrote "));
        assert!(out.contains("config.toml"));

        let saved = Config::load_from(&path).unwrap();
        assert_eq!(saved.speed, FallSpeed::Fast);
        assert_eq!(saved, config);
    }

    #[test]
    fn test_no_one_shot_flags_starts_animation() {
        let cli = Cli::try_parse_from(["glyphfall"]).unwrap();
        assert!(cli.one_shot(&Config::default(), None).unwrap().is_none());
    }
}
