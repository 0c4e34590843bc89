use crate::models::PixelGrid;
use image::{ColorType, ImageEncoder, codecs::png::PngEncoder};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EncodeError {
    #[error("failed to write {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to encode {path:?}: {source}")]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

/// Encode the grid as an 8-bit RGB PNG into `writer`.
pub fn encode_png<W: Write>(grid: &PixelGrid, writer: W) -> image::ImageResult<()> {
    let img = grid.to_rgb_image();
    PngEncoder::new(writer).write_image(
        img.as_raw(),
        img.width(),
        img.height(),
        ColorType::Rgb8.into(),
    )
}

/// Write the grid to `path`. The file handle is dropped on every return path.
pub fn write_png(grid: &PixelGrid, path: &Path) -> Result<(), EncodeError> {
    let io_err = |source| EncodeError::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(io_err)?;
    let mut writer = BufWriter::new(file);
    encode_png(grid, &mut writer).map_err(|source| EncodeError::Image {
        path: path.to_path_buf(),
        source,
    })?;
    writer.flush().map_err(io_err)?;
    Ok(())
}
