/// Cell is an integer coordinate on the unbounded plane.
/// Identity is value equality; a cell carries no state of its own.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Offset by (dx, dy), or `None` when either axis leaves the `i32` range
    pub fn checked_offset(self, dx: i32, dy: i32) -> Option<Self> {
        Some(Self {
            x: self.x.checked_add(dx)?,
            y: self.y.checked_add(dy)?,
        })
    }

    /// The 8 surrounding coordinates (Moore neighborhood).
    /// Neighbors that would overflow are skipped.
    pub fn neighbors(self) -> impl Iterator<Item = Cell> {
        (-1..=1)
            .flat_map(|dy| (-1..=1).map(move |dx| (dx, dy)))
            .filter(|&(dx, dy)| dx != 0 || dy != 0)
            .filter_map(move |(dx, dy)| self.checked_offset(dx, dy))
    }
}

impl From<(i32, i32)> for Cell {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

/// Whether a coordinate is currently populated.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum CellState {
    Dead,
    Alive,
}

impl CellState {
    pub const fn is_alive(self) -> bool {
        matches!(self, CellState::Alive)
    }

    pub const fn from_alive(alive: bool) -> Self {
        if alive { CellState::Alive } else { CellState::Dead }
    }

    /// Conway's rule (B3/S23):
    /// 1. Live cell with 2-3 neighbors survives
    /// 2. Dead cell with exactly 3 neighbors becomes alive
    /// 3. All other cases result in death
    pub const fn evolve(self, neighbors: u8) -> Self {
        match (self, neighbors) {
            (CellState::Alive, 2 | 3) => CellState::Alive,
            (CellState::Dead, 3) => CellState::Alive,
            _ => CellState::Dead,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_underpopulation() {
        assert_eq!(CellState::Alive.evolve(0), CellState::Dead);
        assert_eq!(CellState::Alive.evolve(1), CellState::Dead);
    }

    #[test]
    fn test_survival() {
        assert_eq!(CellState::Alive.evolve(2), CellState::Alive);
        assert_eq!(CellState::Alive.evolve(3), CellState::Alive);
    }

    #[test]
    fn test_overpopulation() {
        assert_eq!(CellState::Alive.evolve(4), CellState::Dead);
        assert_eq!(CellState::Alive.evolve(8), CellState::Dead);
    }

    #[test]
    fn test_reproduction() {
        assert_eq!(CellState::Dead.evolve(3), CellState::Alive);
        assert_eq!(CellState::Dead.evolve(2), CellState::Dead);
        assert_eq!(CellState::Dead.evolve(6), CellState::Dead);
    }

    #[test]
    fn test_neighbors_are_the_eight_surrounding_cells() {
        let mut neighbors: Vec<_> = Cell::new(0, 0).neighbors().collect();
        neighbors.sort();
        assert_eq!(neighbors.len(), 8);
        assert!(!neighbors.contains(&Cell::new(0, 0)));
        assert!(neighbors.contains(&Cell::new(-1, -1)));
        assert!(neighbors.contains(&Cell::new(1, 1)));
    }

    #[test]
    fn test_neighbors_skip_overflow() {
        let corner = Cell::new(i32::MAX, i32::MAX);
        assert_eq!(corner.neighbors().count(), 3);
    }
}
