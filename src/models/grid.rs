use super::colour::Rgb;
use image::RgbImage;

/// Row-major grid of RGB pixels, ready for encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    width: u32,
    height: u32,
    pixels: Vec<Rgb>,
}

impl PixelGrid {
    pub(crate) fn from_rows(width: u32, rows: Vec<Vec<Rgb>>) -> Self {
        let height = rows.len() as u32;
        let pixels = rows.into_iter().flatten().collect();
        PixelGrid {
            width,
            height,
            pixels,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixel(&self, col: u32, row: u32) -> Option<Rgb> {
        if col >= self.width || row >= self.height {
            return None;
        }
        self.pixels
            .get(row as usize * self.width as usize + col as usize)
            .copied()
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Rgb]> {
        self.pixels.chunks(self.width.max(1) as usize)
    }

    pub fn to_rgb_image(&self) -> RgbImage {
        RgbImage::from_fn(self.width, self.height, |col, row| {
            let px = self.pixels[row as usize * self.width as usize + col as usize];
            image::Rgb(px.channels())
        })
    }
}
