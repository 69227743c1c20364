//! Whole-image tile flipping
//!
//! Splits a decoded image into a grid of square tiles, flips each tile
//! across its anti-diagonal and composes the results onto a fresh canvas of
//! the same dimensions. Pixels outside the whole-tile grid stay transparent.

use crate::spatial::{PixelTile, TileGrid, TilePosition, TileSize};
use image::RgbaImage;
use log::debug;

/// Result of flipping one image
#[derive(Debug, Clone)]
pub struct FlipOutcome {
    /// Composed output, same dimensions as the input
    pub image: RgbaImage,
    /// Grid that was processed
    pub grid: TileGrid,
    /// Number of tiles flipped
    pub tiles_flipped: usize,
}

impl FlipOutcome {
    /// Columns of pixels at the right edge that no whole tile covered
    pub fn excluded_columns(&self) -> u32 {
        self.image.width() - self.grid.covered_width()
    }

    /// Rows of pixels at the bottom edge that no whole tile covered
    pub fn excluded_rows(&self) -> u32 {
        self.image.height() - self.grid.covered_height()
    }
}

/// Applies the per-tile anti-diagonal flip to whole images
#[derive(Debug, Clone, Copy, Default)]
pub struct TileFlipper {
    tile_size: TileSize,
}

impl TileFlipper {
    /// Create a flipper for the given tile size
    pub const fn new(tile_size: TileSize) -> Self {
        Self { tile_size }
    }

    /// Tile size used by this flipper
    pub const fn tile_size(&self) -> TileSize {
        self.tile_size
    }

    /// Flip every whole tile of `source`
    pub fn flip(&self, source: &RgbaImage) -> FlipOutcome {
        self.flip_with_progress(source, |_position| {})
    }

    /// Flip every whole tile of `source`, reporting each finished tile
    ///
    /// `on_tile` is called once per tile in row-major order, after the tile
    /// has been flipped and before composition.
    pub fn flip_with_progress<F>(&self, source: &RgbaImage, mut on_tile: F) -> FlipOutcome
    where
        F: FnMut(TilePosition),
    {
        let (width, height) = source.dimensions();
        let grid = TileGrid::for_dimensions(width, height, self.tile_size);

        debug!(
            "Tiling {width}x{height} image into {}x{} tiles of {}px",
            grid.cols(),
            grid.rows(),
            self.tile_size
        );

        let mut flipped_tiles = Vec::with_capacity(grid.tile_count());
        for position in grid.positions() {
            let tile = PixelTile::extract(source, position, self.tile_size);
            flipped_tiles.push(tile.flipped());
            on_tile(position);
        }

        let mut canvas = RgbaImage::new(width, height);
        for tile in &flipped_tiles {
            tile.paste_into(&mut canvas);
        }

        let outcome = FlipOutcome {
            image: canvas,
            grid,
            tiles_flipped: flipped_tiles.len(),
        };

        if outcome.excluded_columns() > 0 || outcome.excluded_rows() > 0 {
            debug!(
                "Left {} trailing columns and {} trailing rows untouched",
                outcome.excluded_columns(),
                outcome.excluded_rows()
            );
        }

        outcome
    }
}
