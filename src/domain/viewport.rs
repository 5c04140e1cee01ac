use super::Cell;

/// Visible area in pixels plus the size of one rendered cell.
/// Cells are culled against this box after every step.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
    pub cell_size: u32,
}

impl Viewport {
    pub const fn new(width: u32, height: u32, cell_size: u32) -> Self {
        Self { width, height, cell_size }
    }

    /// Viewport spanning `cols × rows` cells
    pub const fn from_cells(cols: u32, rows: u32, cell_size: u32) -> Self {
        Self {
            width: cols.saturating_mul(cell_size),
            height: rows.saturating_mul(cell_size),
            cell_size,
        }
    }

    /// True when the rendered box of `cell` lies strictly inside the viewport:
    /// left > 0, right < width, top > 0, bottom < height.
    pub fn contains(&self, cell: Cell) -> bool {
        let size = i64::from(self.cell_size);
        let left = i64::from(cell.x) * size;
        let top = i64::from(cell.y) * size;

        left > 0
            && left + size < i64::from(self.width)
            && top > 0
            && top + size < i64::from(self.height)
    }

    /// Inclusive cell range that can satisfy `contains`, or `None` if no cell fits
    pub fn cell_bounds(&self) -> Option<(Cell, Cell)> {
        if self.cell_size == 0 {
            return None;
        }
        let size = i64::from(self.cell_size);
        // left >= size and left + size <= width - 1
        let max_x = (i64::from(self.width) - 1 - size).div_euclid(size);
        let max_y = (i64::from(self.height) - 1 - size).div_euclid(size);
        if max_x < 1 || max_y < 1 {
            return None;
        }
        let clamp = |v: i64| v.min(i64::from(i32::MAX)) as i32;
        Some((Cell::new(1, 1), Cell::new(clamp(max_x), clamp(max_y))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges_are_excluded() {
        let viewport = Viewport::from_cells(10, 10, 14);

        assert!(!viewport.contains(Cell::new(0, 5)));
        assert!(!viewport.contains(Cell::new(5, 0)));
        assert!(viewport.contains(Cell::new(1, 1)));
        assert!(viewport.contains(Cell::new(8, 8)));
        // right edge touches width exactly
        assert!(!viewport.contains(Cell::new(9, 5)));
        assert!(!viewport.contains(Cell::new(5, 9)));
    }

    #[test]
    fn test_negative_cells_are_outside() {
        let viewport = Viewport::new(800, 600, 10);
        assert!(!viewport.contains(Cell::new(-3, 4)));
        assert!(!viewport.contains(Cell::new(4, -3)));
    }

    #[test]
    fn test_partial_cells_are_outside() {
        // 105px wide, 10px cells: cell 9 spans 90..100, cell 10 spans 100..110
        let viewport = Viewport::new(105, 105, 10);
        assert!(viewport.contains(Cell::new(9, 9)));
        assert!(!viewport.contains(Cell::new(10, 9)));
    }

    #[test]
    fn test_extreme_coordinates_do_not_overflow() {
        let viewport = Viewport::new(u32::MAX, u32::MAX, u32::MAX);
        assert!(!viewport.contains(Cell::new(i32::MAX, i32::MAX)));
        assert!(!viewport.contains(Cell::new(i32::MIN, i32::MIN)));
    }

    #[test]
    fn test_cell_bounds_match_contains() {
        let viewport = Viewport::new(105, 73, 10);
        let (min, max) = viewport.cell_bounds().unwrap();

        assert!(viewport.contains(min));
        assert!(viewport.contains(max));
        assert!(!viewport.contains(Cell::new(max.x + 1, max.y)));
        assert!(!viewport.contains(Cell::new(max.x, max.y + 1)));
    }

    #[test]
    fn test_cell_bounds_empty_for_tiny_viewport() {
        assert_eq!(Viewport::from_cells(2, 2, 10).cell_bounds(), None);
        assert_eq!(Viewport::new(100, 100, 0).cell_bounds(), None);
    }
}
