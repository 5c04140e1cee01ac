use crate::domain::Cell;

/// Camera shifts where cells are drawn. It is purely presentational: the
/// engine culls against the unshifted viewport regardless of the offset.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Camera {
    pub offset_x: f32,
    pub offset_y: f32,
    drag_anchor: Option<(f32, f32)>,
}

impl Camera {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pan camera
    pub fn pan(&mut self, dx: f32, dy: f32) {
        self.offset_x += dx;
        self.offset_y += dy;
    }

    /// Follow a drag: pans by the pointer's movement since the last frame
    pub fn drag(&mut self, pointer: (f32, f32)) {
        if let Some((last_x, last_y)) = self.drag_anchor {
            self.pan(pointer.0 - last_x, pointer.1 - last_y);
        }
        self.drag_anchor = Some(pointer);
    }

    pub fn end_drag(&mut self) {
        self.drag_anchor = None;
    }

    /// Cell under a screen position
    pub fn screen_to_cell(&self, screen_x: f32, screen_y: f32, cell_size: f32) -> Cell {
        let x = ((screen_x - self.offset_x) / cell_size).floor();
        let y = ((screen_y - self.offset_y) / cell_size).floor();
        // float-to-int casts saturate at the i32 limits
        Cell::new(x as i32, y as i32)
    }

    /// Top-left screen position of a cell
    pub fn cell_to_screen(&self, cell: Cell, cell_size: f32) -> (f32, f32) {
        (
            cell.x as f32 * cell_size + self.offset_x,
            cell.y as f32 * cell_size + self.offset_y,
        )
    }

    /// Reset camera to default
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screen_to_cell_without_offset() {
        let camera = Camera::new();
        assert_eq!(camera.screen_to_cell(0.0, 0.0, 14.0), Cell::new(0, 0));
        assert_eq!(camera.screen_to_cell(29.0, 13.9, 14.0), Cell::new(2, 0));
    }

    #[test]
    fn test_offset_round_trip() {
        let mut camera = Camera::new();
        camera.pan(-35.0, 20.0);

        let cell = Cell::new(4, 7);
        let (sx, sy) = camera.cell_to_screen(cell, 10.0);
        assert_eq!((sx, sy), (5.0, 90.0));
        assert_eq!(camera.screen_to_cell(sx + 1.0, sy + 1.0, 10.0), cell);
    }

    #[test]
    fn test_negative_positions_floor() {
        let mut camera = Camera::new();
        camera.pan(50.0, 50.0);
        assert_eq!(camera.screen_to_cell(45.0, 45.0, 10.0), Cell::new(-1, -1));
    }

    #[test]
    fn test_drag_pans_by_pointer_delta() {
        let mut camera = Camera::new();
        camera.drag((100.0, 100.0));
        camera.drag((110.0, 95.0));
        assert_eq!((camera.offset_x, camera.offset_y), (10.0, -5.0));

        camera.end_drag();
        camera.drag((500.0, 500.0));
        assert_eq!((camera.offset_x, camera.offset_y), (10.0, -5.0));
    }

    #[test]
    fn test_reset() {
        let mut camera = Camera::new();
        camera.drag((1.0, 1.0));
        camera.pan(3.0, 4.0);
        camera.reset();
        assert_eq!(camera, Camera::default());
    }
}
