use crate::config::Config;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "skygrad", version, about = "Render weighted colour-stop gradients to PNG")]
pub struct Cli {
    /// Directory the PNGs are written to
    #[arg(long, short, default_value = ".")]
    pub output_dir: PathBuf,

    /// Image width in pixels
    #[arg(long)]
    pub width: Option<u32>,

    /// Image height in pixels (the gradient runs along this axis)
    #[arg(long)]
    pub height: Option<u32>,

    /// Draw the gradient top to bottom instead of bottom to top
    #[arg(long)]
    pub no_flip: bool,

    /// Only render the named presets (repeatable)
    #[arg(long = "only", value_name = "NAME")]
    pub only: Vec<String>,

    /// Print the preset summary and exit
    #[arg(long)]
    pub list: bool,
}

impl Cli {
    /// Overlay the command line onto `config`, returning unknown `--only` names.
    pub fn apply(&self, config: &mut Config) -> Vec<String> {
        config.output_dir = self.output_dir.clone();
        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            config.height = height;
        }
        if self.no_flip {
            config.flip = false;
        }
        if self.only.is_empty() {
            Vec::new()
        } else {
            config.retain_presets(&self.only)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_leave_config_alone() {
        let cli = Cli::try_parse_from(["skygrad"]).unwrap();
        let mut config = Config::builtin().unwrap();
        assert!(cli.apply(&mut config).is_empty());
        assert_eq!((config.width, config.height, config.flip), (256, 128, true));
        assert_eq!(config.presets.len(), 12);
        assert_eq!(config.output_dir, PathBuf::from("."));
    }

    #[test]
    fn test_overrides() {
        let cli = Cli::try_parse_from([
            "skygrad",
            "--output-dir",
            "out",
            "--width",
            "64",
            "--height",
            "32",
            "--no-flip",
            "--only",
            "night_sky_2",
            "--only",
            "sunrise",
        ])
        .unwrap();
        let mut config = Config::builtin().unwrap();
        let missing = cli.apply(&mut config);

        assert_eq!(missing, vec!["sunrise".to_string()]);
        assert_eq!((config.width, config.height, config.flip), (64, 32, false));
        assert_eq!(config.output_dir, PathBuf::from("out"));
        assert_eq!(config.presets.len(), 1);
        assert_eq!(config.presets[0].filename, "night_sky_2.png");
    }

    #[test]
    fn test_rejects_bad_number() {
        assert!(Cli::try_parse_from(["skygrad", "--width", "-5"]).is_err());
    }
}
