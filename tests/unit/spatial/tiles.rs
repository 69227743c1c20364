//! Tests for tile extraction, anti-diagonal flipping and pasting

#[cfg(test)]
mod tests {
    use image::{Rgba, RgbaImage};
    use ndarray::Array2;
    use tileflip::spatial::tiles::TRANSPARENT;
    use tileflip::spatial::{PixelTile, TilePosition, TileSize};

    // Each pixel encodes its own coordinates so positions can be recovered
    fn coordinate_image(width: u32, height: u32) -> RgbaImage {
        RgbaImage::from_fn(width, height, |x, y| Rgba([x as u8, y as u8, 7, 255]))
    }

    fn size(pixels: u32) -> TileSize {
        TileSize::new(pixels).unwrap()
    }

    // Tests extraction copies the right block of pixels
    // Verified by ignoring the tile origin offset
    #[test]
    fn test_extract_offsets_by_position() {
        let image = coordinate_image(12, 12);
        let tile = PixelTile::extract(&image, TilePosition::new(1, 2), size(4));

        assert_eq!(tile.edge(), 4);
        assert_eq!(tile.position(), TilePosition::new(1, 2));
        assert_eq!(tile.pixel(0, 0), Some(Rgba([4, 8, 7, 255])));
        assert_eq!(tile.pixel(3, 1), Some(Rgba([7, 9, 7, 255])));
        assert_eq!(tile.pixel(4, 0), None);
    }

    // Tests the flip swaps axes rather than mirroring or rotating
    // Verified by replacing the transpose with a horizontal mirror
    #[test]
    fn test_flip_transposes_pixels() {
        let image = coordinate_image(5, 5);
        let tile = PixelTile::extract(&image, TilePosition::new(0, 0), size(5));
        let flipped = tile.flipped();

        for i in 0..5 {
            for j in 0..5 {
                assert_eq!(flipped.pixel(j, i), tile.pixel(i, j));
            }
        }
        assert_eq!(flipped.pixel(4, 0), Some(Rgba([0, 4, 7, 255])));
        assert_eq!(flipped.position(), tile.position());
    }

    // Tests flipping twice restores the original tile
    // Verified by flipping along the other diagonal
    #[test]
    fn test_flip_is_involution() {
        let image = RgbaImage::from_fn(9, 9, |x, y| {
            Rgba([(x * 31 + y) as u8, (y * 17) as u8, (x ^ y) as u8, (x + y) as u8])
        });
        let tile = PixelTile::extract(&image, TilePosition::new(0, 0), size(9));

        assert_eq!(tile.flipped().flipped(), tile);
    }

    // Tests diagonal pixels stay in place
    // Verified by offsetting the destination index
    #[test]
    fn test_flip_keeps_diagonal() {
        let image = coordinate_image(6, 6);
        let tile = PixelTile::extract(&image, TilePosition::new(0, 0), size(6));
        let flipped = tile.flipped();

        for i in 0..6 {
            assert_eq!(flipped.pixel(i, i), tile.pixel(i, i));
        }
    }

    // Tests pasting writes at the tile's grid origin only
    // Verified by pasting at the pixel origin of the first tile
    #[test]
    fn test_paste_into_grid_origin() {
        let source = coordinate_image(8, 8);
        let tile = PixelTile::extract(&source, TilePosition::new(1, 1), size(4));

        let mut canvas = RgbaImage::new(8, 8);
        tile.paste_into(&mut canvas);

        assert_eq!(*canvas.get_pixel(4, 4), Rgba([4, 4, 7, 255]));
        assert_eq!(*canvas.get_pixel(7, 5), Rgba([7, 5, 7, 255]));
        assert_eq!(*canvas.get_pixel(3, 3), TRANSPARENT);
        assert_eq!(*canvas.get_pixel(0, 7), TRANSPARENT);
    }

    // Tests pasting past the canvas edge is clipped instead of panicking
    // Verified by using unchecked pixel access
    #[test]
    fn test_paste_clips_to_canvas() {
        let pixels = Array2::from_elem((4, 4), Rgba([1, 2, 3, 4]));
        let tile = PixelTile::from_pixels(TilePosition::new(1, 0), pixels).unwrap();

        let mut canvas = RgbaImage::new(6, 3);
        tile.paste_into(&mut canvas);

        assert_eq!(*canvas.get_pixel(5, 2), Rgba([1, 2, 3, 4]));
        assert_eq!(*canvas.get_pixel(3, 0), TRANSPARENT);
    }

    // Tests only square pixel grids form tiles
    // Verified by removing the shape check
    #[test]
    fn test_from_pixels_requires_square() {
        let rect = Array2::from_elem((2, 3), TRANSPARENT);
        assert!(PixelTile::from_pixels(TilePosition::new(0, 0), rect).is_none());

        let square = Array2::from_elem((3, 3), TRANSPARENT);
        let tile = PixelTile::from_pixels(TilePosition::new(0, 0), square).unwrap();
        assert_eq!(tile.pixels().dim(), (3, 3));
    }
}
