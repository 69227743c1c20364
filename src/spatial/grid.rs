//! Tile size validation and grid geometry
//!
//! A grid covers only the whole tiles that fit inside an image. Trailing
//! columns and rows narrower than one tile are excluded from the grid.

use crate::io::configuration::DEFAULT_TILE_SIZE;
use crate::io::error::{FlipError, Result};
use std::fmt;
use std::num::{IntErrorKind, NonZeroU32};

/// Edge length of a square tile in pixels, always strictly positive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileSize(NonZeroU32);

impl TileSize {
    /// Create a tile size, returning `None` for zero
    pub const fn new(pixels: u32) -> Option<Self> {
        match NonZeroU32::new(pixels) {
            Some(size) => Some(Self(size)),
            None => None,
        }
    }

    /// Parse an optional command-line argument into a tile size
    ///
    /// A missing argument yields the default size. Surrounding whitespace and
    /// a leading `+` are accepted. Values above `u32::MAX` saturate, which no
    /// decodable image can hold a whole tile of.
    ///
    /// # Errors
    ///
    /// Returns `FlipError::InvalidTileSize` if the argument is not an integer
    /// or is not strictly positive
    pub fn parse(argument: Option<&str>) -> Result<Self> {
        let Some(raw) = argument else {
            return Ok(Self::default());
        };

        let invalid = || FlipError::InvalidTileSize {
            value: raw.to_string(),
        };

        let parsed: i64 = match raw.trim().parse() {
            Ok(value) => value,
            Err(error) if *error.kind() == IntErrorKind::PosOverflow => i64::MAX,
            Err(_parse_error) => return Err(invalid()),
        };
        if parsed <= 0 {
            return Err(invalid());
        }

        let pixels = u32::try_from(parsed).unwrap_or(u32::MAX);
        Self::new(pixels).ok_or_else(invalid)
    }

    /// Edge length in pixels
    pub const fn get(self) -> u32 {
        self.0.get()
    }
}

impl Default for TileSize {
    fn default() -> Self {
        Self(NonZeroU32::new(DEFAULT_TILE_SIZE).unwrap_or(NonZeroU32::MIN))
    }
}

impl fmt::Display for TileSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Grid coordinates of a tile, in tiles rather than pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TilePosition {
    /// Column index
    pub x: u32,
    /// Row index
    pub y: u32,
}

impl TilePosition {
    /// Create a position from column and row indices
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// Pixel coordinates of the tile's top-left corner
    pub const fn origin(self, tile_size: TileSize) -> (u32, u32) {
        (self.x * tile_size.get(), self.y * tile_size.get())
    }
}

/// Whole-tile grid laid over an image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileGrid {
    tile_size: TileSize,
    cols: u32,
    rows: u32,
}

impl TileGrid {
    /// Compute the grid for an image of the given dimensions
    pub const fn for_dimensions(width: u32, height: u32, tile_size: TileSize) -> Self {
        Self {
            tile_size,
            cols: width / tile_size.get(),
            rows: height / tile_size.get(),
        }
    }

    /// Tile size the grid was built with
    pub const fn tile_size(&self) -> TileSize {
        self.tile_size
    }

    /// Number of whole tiles along the horizontal axis
    pub const fn cols(&self) -> u32 {
        self.cols
    }

    /// Number of whole tiles along the vertical axis
    pub const fn rows(&self) -> u32 {
        self.rows
    }

    /// Total number of tiles in the grid
    pub const fn tile_count(&self) -> usize {
        self.cols as usize * self.rows as usize
    }

    /// Width in pixels covered by whole tiles
    pub const fn covered_width(&self) -> u32 {
        self.cols * self.tile_size.get()
    }

    /// Height in pixels covered by whole tiles
    pub const fn covered_height(&self) -> u32 {
        self.rows * self.tile_size.get()
    }

    /// Iterate over tile positions in row-major order
    pub fn positions(&self) -> impl Iterator<Item = TilePosition> + use<> {
        let cols = self.cols;
        (0..self.rows).flat_map(move |y| (0..cols).map(move |x| TilePosition::new(x, y)))
    }
}
