use crate::config::Config;
use crate::encoder::write_png;
use crate::gradient::rasterize;
use crate::models::Preset;
use anyhow::Context;
use indicatif::{ProgressBar, ProgressStyle};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Default)]
pub struct BatchReport {
    pub written: Vec<PathBuf>,
    pub failed: Vec<(String, anyhow::Error)>,
}

impl BatchReport {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Rasterize one preset and write it to `output_dir`.
///
/// `primary` is the length the gradient runs along and ends up as the image
/// height; `secondary` becomes the width.
pub fn render_preset(
    preset: &Preset,
    primary: u32,
    secondary: u32,
    flip: bool,
    output_dir: &Path,
) -> anyhow::Result<PathBuf> {
    let grid = rasterize(primary, secondary, flip, &preset.stops)
        .with_context(|| format!("rasterizing '{}'", preset.filename))?;
    let path = output_dir.join(&preset.filename);
    write_png(&grid, &path)?;
    Ok(path)
}

/// Render every preset in order. A failing preset is recorded and the rest
/// still run; only failing to prepare the output directory aborts.
pub fn run(config: &Config) -> anyhow::Result<BatchReport> {
    fs::create_dir_all(&config.output_dir).with_context(|| {
        format!(
            "creating output directory {}",
            config.output_dir.display()
        )
    })?;

    let pb = ProgressBar::new(config.presets.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{msg}\n[{bar:40.cyan/blue}] {pos}/{len} {percent}%")?
            .progress_chars("█▇▆▅▄▃▂▁  "),
    );

    let mut report = BatchReport::default();
    for preset in &config.presets {
        pb.set_message(format!("Rendering {:<30}", preset.filename));

        // the driver's height is the gradient length, its width the repeat count
        match render_preset(
            preset,
            config.height,
            config.width,
            config.flip,
            &config.output_dir,
        ) {
            Ok(path) => {
                pb.println(format!("Gradient saved as {}", path.display()));
                report.written.push(path);
            }
            Err(err) => {
                pb.suspend(|| eprintln!("❌ Failed to render '{}': {:#}", preset.filename, err));
                report.failed.push((preset.filename.clone(), err));
            }
        }

        pb.inc(1);
    }

    if report.is_success() {
        pb.finish_with_message("✅ All presets rendered!");
    } else {
        pb.finish_with_message(format!(
            "⚠️ {} of {} presets failed",
            report.failed.len(),
            config.presets.len()
        ));
    }
    println!("📦 Images written: {}", report.written.len());

    Ok(report)
}
