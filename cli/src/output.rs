//! Drawing the lattice.

use ecagen_lib::Lattice;
use image::{GrayImage, ImageError, ImageFormat, Luma};
use std::path::Path;

/// White, for dead cells.
const LIGHT: Luma<u8> = Luma([255]);
/// Black, for living cells.
const DARK: Luma<u8> = Luma([0]);

/// Draws the lattice, one row of pixels per generation.
pub(crate) fn to_image(lattice: &Lattice) -> GrayImage {
    GrayImage::from_fn(
        lattice.width() as u32,
        lattice.generations() as u32,
        |x, y| match lattice.get(x as usize, y as usize) {
            Some(state) if state.is_alive() => DARK,
            _ => LIGHT,
        },
    )
}

/// Saves the lattice as a PNG image.
pub(crate) fn write_png(lattice: &Lattice, path: &Path) -> Result<(), ImageError> {
    to_image(lattice).save_with_format(path, ImageFormat::Png)
}
