use crate::Grid;
use eframe::egui::{Color32, ColorImage};

/// Colours used to paint the field.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Palette {
    pub alive: Color32,
    pub dead: Color32,
    pub gap: Color32,
}

/// Paints `grid` into an image of `cell_size` pixels per cell.
///
/// Cell `(x, y)` becomes a `(cell_size - 1)`-pixel square with its top left
/// corner at `(x * cell_size, y * cell_size)`; the last row and column of
/// each cell stay in the gap colour.
pub fn rasterize(grid: &Grid, cell_size: usize, palette: &Palette) -> ColorImage {
    let (w, h) = (grid.width() * cell_size, grid.height() * cell_size);
    let mut image = ColorImage::new([w, h], palette.gap);
    let fill = cell_size.saturating_sub(1);
    for (y, row) in grid.rows().enumerate() {
        for (x, &alive) in row.iter().enumerate() {
            let color = if alive { palette.alive } else { palette.dead };
            let (left, top) = (x * cell_size, y * cell_size);
            for py in top..top + fill {
                image.pixels[py * w + left..py * w + left + fill].fill(color);
            }
        }
    }
    image
}

#[cfg(test)]
mod tests {
    use super::*;

    const PALETTE: Palette = Palette {
        alive: Color32::WHITE,
        dead: Color32::BLACK,
        gap: Color32::RED,
    };

    #[test]
    fn test_cell_squares_and_gaps() {
        let mut grid = Grid::square(2);
        grid.set(1, 0, true);
        let image = rasterize(&grid, 3, &PALETTE);
        assert_eq!(image.size, [6, 6]);

        let px = |x: usize, y: usize| image.pixels[y * 6 + x];
        // dead cell (0, 0) covers pixels 0..2
        assert_eq!(px(0, 0), Color32::BLACK);
        assert_eq!(px(1, 1), Color32::BLACK);
        assert_eq!(px(2, 0), Color32::RED);
        assert_eq!(px(0, 2), Color32::RED);
        // live cell (1, 0) starts at pixel column 3
        assert_eq!(px(3, 0), Color32::WHITE);
        assert_eq!(px(4, 1), Color32::WHITE);
        assert_eq!(px(5, 1), Color32::RED);
        assert_eq!(px(4, 2), Color32::RED);
    }

    #[test]
    fn test_pixel_count_matches_population() {
        let grid = Grid::from_fn(5, 5, |x, y| (x + y) % 3 == 0);
        let image = rasterize(&grid, 4, &PALETTE);
        let alive_pixels = image.pixels.iter().filter(|&&c| c == Color32::WHITE).count();
        assert_eq!(alive_pixels, crate::count(&grid) * 9);
    }

    #[test]
    fn test_unit_cells_are_all_gap() {
        let mut grid = Grid::square(3);
        grid.set(1, 1, true);
        let image = rasterize(&grid, 1, &PALETTE);
        assert!(image.pixels.iter().all(|&c| c == Color32::RED));
    }
}
