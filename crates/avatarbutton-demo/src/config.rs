//! Command-line configuration for the demo.

use avatarbutton_core::{ButtonStyle, StyleError};
use std::path::PathBuf;
use thiserror::Error;

/// Height used by the demo when no style file is given.
pub const DEMO_HEIGHT: f64 = 100.0;

pub const USAGE: &str = "usage: avatarbutton-demo [--style <style.json>] [--svg <out.svg>]";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing value for {0}")]
    MissingValue(String),
    #[error("unknown argument: {0}")]
    UnknownArgument(String),
    #[error(transparent)]
    Style(#[from] StyleError),
}

/// Demo configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct DemoConfig {
    pub title: String,
    pub width: f32,
    pub height: f32,
    pub style: ButtonStyle,
    /// Write the background as SVG here instead of opening a window.
    pub svg_out: Option<PathBuf>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            title: "avatarbutton demo".to_string(),
            width: 360.0,
            height: 260.0,
            style: ButtonStyle::with_height(DEMO_HEIGHT),
            svg_out: None,
        }
    }
}

impl DemoConfig {
    /// Build the configuration from command-line arguments (without the program name).
    pub fn from_args(args: impl IntoIterator<Item = String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--style" => {
                    let path = args.next().ok_or_else(|| ConfigError::MissingValue(arg.clone()))?;
                    config.style = ButtonStyle::load(&path)?;
                }
                "--svg" => {
                    let path = args.next().ok_or_else(|| ConfigError::MissingValue(arg.clone()))?;
                    config.svg_out = Some(PathBuf::from(path));
                }
                _ => return Err(ConfigError::UnknownArgument(arg)),
            }
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_no_args_gives_defaults() {
        let config = DemoConfig::from_args(args(&[])).unwrap();
        assert_eq!(config, DemoConfig::default());
        assert!((config.style.height - DEMO_HEIGHT).abs() < f64::EPSILON);
    }

    #[test]
    fn test_svg_flag() {
        let config = DemoConfig::from_args(args(&["--svg", "out.svg"])).unwrap();
        assert_eq!(config.svg_out, Some(PathBuf::from("out.svg")));
    }

    #[test]
    fn test_missing_value() {
        let err = DemoConfig::from_args(args(&["--style"])).unwrap_err();
        assert!(matches!(err, ConfigError::MissingValue(flag) if flag == "--style"));
    }

    #[test]
    fn test_unknown_argument() {
        let err = DemoConfig::from_args(args(&["--fast"])).unwrap_err();
        assert!(matches!(err, ConfigError::UnknownArgument(_)));
    }

    #[test]
    fn test_missing_style_file() {
        let err = DemoConfig::from_args(args(&["--style", "/nonexistent/style.json"])).unwrap_err();
        assert!(matches!(err, ConfigError::Style(StyleError::Io(_))));
    }
}
