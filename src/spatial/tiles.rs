//! Square tile extraction, anti-diagonal flipping and pasting
//!
//! Tiles are copied out of the source image into owned pixel grids so that
//! each one can be transformed independently of the image it came from.

use crate::spatial::grid::{TilePosition, TileSize};
use image::{Rgba, RgbaImage};
use ndarray::Array2;

/// Fully transparent pixel, the default value of a fresh canvas
pub const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// An owned square block of pixels tagged with its grid position
///
/// Pixels are stored row-major and indexed `(row, col)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelTile {
    position: TilePosition,
    pixels: Array2<Rgba<u8>>,
}

impl PixelTile {
    /// Copy the tile at `position` out of `image`
    ///
    /// Grid positions never extend past the image, so every source pixel
    /// exists; any that did not would read as transparent.
    pub fn extract(image: &RgbaImage, position: TilePosition, tile_size: TileSize) -> Self {
        let edge = tile_size.get() as usize;
        let (origin_x, origin_y) = position.origin(tile_size);

        let pixels = Array2::from_shape_fn((edge, edge), |(row, col)| {
            image
                .get_pixel_checked(origin_x + col as u32, origin_y + row as u32)
                .copied()
                .unwrap_or(TRANSPARENT)
        });

        Self { position, pixels }
    }

    /// Build a tile directly from a pixel grid
    ///
    /// Returns `None` unless the grid is square.
    pub fn from_pixels(position: TilePosition, pixels: Array2<Rgba<u8>>) -> Option<Self> {
        let (rows, cols) = pixels.dim();
        (rows == cols).then_some(Self { position, pixels })
    }

    /// Grid position the tile was taken from
    pub const fn position(&self) -> TilePosition {
        self.position
    }

    /// Edge length in pixels
    pub fn edge(&self) -> usize {
        self.pixels.nrows()
    }

    /// Pixel at local column `x` and row `y`
    pub fn pixel(&self, x: usize, y: usize) -> Option<Rgba<u8>> {
        self.pixels.get((y, x)).copied()
    }

    /// Underlying pixel grid
    pub const fn pixels(&self) -> &Array2<Rgba<u8>> {
        &self.pixels
    }

    /// Flip the tile across its anti-diagonal, swapping its two axes
    ///
    /// The pixel at local `(i, j)` moves to `(j, i)`. This is a transpose,
    /// not a mirror or a rotation, and applying it twice restores the tile.
    #[must_use]
    pub fn flipped(&self) -> Self {
        let edge = self.edge();
        let pixels = Array2::from_shape_fn((edge, edge), |(row, col)| {
            self.pixels.get((col, row)).copied().unwrap_or(TRANSPARENT)
        });

        Self {
            position: self.position,
            pixels,
        }
    }

    /// Write the tile into `canvas` at its grid position
    ///
    /// Pixels that would land outside the canvas are skipped.
    pub fn paste_into(&self, canvas: &mut RgbaImage) {
        let edge = self.edge() as u32;
        let (origin_x, origin_y) = (self.position.x * edge, self.position.y * edge);

        for ((row, col), pixel) in self.pixels.indexed_iter() {
            if let Some(target) =
                canvas.get_pixel_mut_checked(origin_x + col as u32, origin_y + row as u32)
            {
                *target = *pixel;
            }
        }
    }
}
