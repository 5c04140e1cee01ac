use super::{AliveSet, Cell, life};

/// A named shape that can be stamped into an alive-set
#[derive(Clone, Copy, Debug)]
pub struct Pattern {
    pub name: &'static str,
    /// Alive cells relative to the pattern's top-left corner
    pub cells: &'static [(i32, i32)],
}

impl Pattern {
    /// Bounding box size in cells
    pub fn dimensions(&self) -> (i32, i32) {
        let width = self.cells.iter().map(|&(x, _)| x).max().map_or(0, |x| x + 1);
        let height = self.cells.iter().map(|&(_, y)| y).max().map_or(0, |y| y + 1);
        (width, height)
    }

    /// Top-left origin that centers the pattern on `cell`
    pub fn centered_on(&self, cell: Cell) -> Cell {
        let (width, height) = self.dimensions();
        Cell::new(
            cell.x.saturating_sub(width / 2),
            cell.y.saturating_sub(height / 2),
        )
    }

    /// Absolute coordinates when placed at `origin`
    pub fn cells_at(&self, origin: Cell) -> impl Iterator<Item = Cell> + '_ {
        self.cells
            .iter()
            .filter_map(move |&(dx, dy)| origin.checked_offset(dx, dy))
    }

    /// Stamp the pattern at `origin`; cells already alive stay alive
    pub fn place_on(&self, set: AliveSet, origin: Cell) -> AliveSet {
        self.cells_at(origin)
            .fold(set, |set, cell| life::toggle_cell(set, cell, true))
    }
}

/// Classic Game of Life patterns library
pub mod presets {
    use super::Pattern;

    pub const BLOCK: Pattern = Pattern {
        name: "Block",
        cells: &[(0, 0), (1, 0), (0, 1), (1, 1)],
    };

    pub const BLINKER: Pattern = Pattern {
        name: "Blinker",
        cells: &[(0, 1), (1, 1), (2, 1)],
    };

    pub const TOAD: Pattern = Pattern {
        name: "Toad",
        cells: &[
            (1, 0), (2, 0), (3, 0),
            (0, 1), (1, 1), (2, 1),
        ],
    };

    pub const BEACON: Pattern = Pattern {
        name: "Beacon",
        cells: &[
            (0, 0), (1, 0),
            (0, 1),
            (3, 2),
            (2, 3), (3, 3),
        ],
    };

    /// Simplest spaceship, moves diagonally
    pub const GLIDER: Pattern = Pattern {
        name: "Glider",
        cells: &[
            (1, 0),
            (2, 1),
            (0, 2), (1, 2), (2, 2),
        ],
    };

    pub const LWSS: Pattern = Pattern {
        name: "LWSS",
        cells: &[
            (1, 0), (4, 0),
            (0, 1),
            (0, 2), (4, 2),
            (0, 3), (1, 3), (2, 3), (3, 3),
        ],
    };

    /// Methuselah, stabilizes after 1103 generations on an open plane
    pub const R_PENTOMINO: Pattern = Pattern {
        name: "R-pentomino",
        cells: &[
            (1, 0), (2, 0),
            (0, 1), (1, 1),
            (1, 2),
        ],
    };

    /// Ordered to match the number keys 1-7
    pub const ALL: [Pattern; 7] = [BLOCK, BLINKER, TOAD, BEACON, GLIDER, LWSS, R_PENTOMINO];
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Viewport, life::step};

    #[test]
    fn test_dimensions() {
        assert_eq!(presets::GLIDER.dimensions(), (3, 3));
        assert_eq!(presets::LWSS.dimensions(), (5, 4));
        assert_eq!(presets::BLINKER.dimensions(), (3, 2));
    }

    #[test]
    fn test_centered_on() {
        let origin = presets::GLIDER.centered_on(Cell::new(10, 10));
        assert_eq!(origin, Cell::new(9, 9));
    }

    #[test]
    fn test_place_on_keeps_existing_cells() {
        let set: AliveSet = [(0, 0)].into();
        let placed = presets::BLOCK.place_on(set, Cell::new(5, 5));

        assert_eq!(placed.len(), 5);
        assert!(placed.contains(Cell::new(0, 0)));
        assert!(placed.contains(Cell::new(6, 6)));
    }

    #[test]
    fn test_place_on_overlap_is_idempotent() {
        let once = presets::TOAD.place_on(AliveSet::new(), Cell::new(3, 3));
        let twice = presets::TOAD.place_on(once.clone(), Cell::new(3, 3));
        assert_eq!(once, twice);
    }

    #[test]
    fn test_oscillators_have_period_two() {
        let viewport = Viewport::from_cells(30, 30, 10);
        for pattern in [presets::BLINKER, presets::TOAD, presets::BEACON] {
            let start = pattern.place_on(AliveSet::new(), Cell::new(10, 10));
            let once = step(&start, viewport);
            assert_ne!(once, start, "{} should change", pattern.name);
            assert_eq!(step(&once, viewport), start, "{} should return", pattern.name);
        }
    }

    #[test]
    fn test_names_are_unique() {
        let mut names: Vec<_> = presets::ALL.iter().map(|p| p.name).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), presets::ALL.len());
    }
}
