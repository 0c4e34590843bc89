pub mod colour;
pub mod grid;
pub mod preset;

pub use colour::{ColourParseError, Rgb};
pub use grid::PixelGrid;
pub use preset::{ColourStop, Preset};
