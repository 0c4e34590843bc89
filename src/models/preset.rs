use super::colour::{ColourParseError, Rgb};

#[derive(Debug, Clone, PartialEq)]
pub struct ColourStop {
    pub colour: Rgb,
    pub weight: f64, // relative, normalised against the preset's total
}

impl ColourStop {
    pub fn new(colour: Rgb, weight: f64) -> Self {
        ColourStop { colour, weight }
    }

    pub fn from_hex(hex: &str, weight: f64) -> Result<Self, ColourParseError> {
        Ok(ColourStop {
            colour: Rgb::from_hex(hex)?,
            weight,
        })
    }
}

/// One output image: a file name and the ordered stops that fill it.
#[derive(Debug, Clone, PartialEq)]
pub struct Preset {
    pub filename: String,
    pub stops: Vec<ColourStop>,
}

impl Preset {
    /// Build a preset from `(hex, weight)` pairs, failing on the first bad colour.
    pub fn from_hex_stops(
        filename: impl Into<String>,
        stops: &[(&str, f64)],
    ) -> Result<Self, ColourParseError> {
        let stops = stops
            .iter()
            .map(|&(hex, weight)| ColourStop::from_hex(hex, weight))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Preset {
            filename: filename.into(),
            stops,
        })
    }

    /// Filename without its extension, used to select presets by name.
    pub fn name(&self) -> &str {
        self.filename
            .rsplit_once('.')
            .map(|(stem, _)| stem)
            .unwrap_or(&self.filename)
    }
}
