pub mod batch;
pub mod cli;
pub mod config;
pub mod encoder;
pub mod gradient;
pub mod models;
mod presets;
pub mod utils;

pub use cli::Cli;
pub use config::Config;
pub use gradient::{GradientError, gradient_line, rasterize, stop_positions};
pub use models::{ColourParseError, ColourStop, PixelGrid, Preset, Rgb};
