use crate::models::{ColourParseError, Preset};
use crate::presets::NIGHT_SKY;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    pub presets: Vec<Preset>,
    /// Output image width. The gradient runs across `height` rows.
    pub width: u32,
    pub height: u32,
    /// Reverse the gradient so it reads bottom to top.
    pub flip: bool,
    pub output_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            presets: Vec::new(),
            width: 256,
            height: 128,
            flip: true,
            output_dir: PathBuf::from("."),
        }
    }
}

impl Config {
    /// Default settings with the built-in night sky presets.
    pub fn builtin() -> Result<Self, ColourParseError> {
        Ok(Config {
            presets: builtin_presets()?,
            ..Config::default()
        })
    }

    /// Keep only the presets whose name or filename is in `names`.
    /// Returns the names that matched nothing.
    pub fn retain_presets(&mut self, names: &[String]) -> Vec<String> {
        let missing = names
            .iter()
            .filter(|n| {
                !self
                    .presets
                    .iter()
                    .any(|p| p.name() == n.as_str() || p.filename == n.as_str())
            })
            .cloned()
            .collect();
        self.presets.retain(|p| {
            names
                .iter()
                .any(|n| p.name() == n.as_str() || p.filename == n.as_str())
        });
        missing
    }
}

pub fn builtin_presets() -> Result<Vec<Preset>, ColourParseError> {
    NIGHT_SKY
        .iter()
        .map(|(filename, stops)| Preset::from_hex_stops(*filename, stops))
        .collect()
}
