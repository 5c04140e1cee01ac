use std::collections::HashSet;
use std::collections::hash_set;

use super::Cell;

/// AliveSet is the whole simulation state: every currently alive cell.
/// No ordering is implied. Steps produce a fresh set rather than editing one.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AliveSet {
    cells: HashSet<Cell>,
}

impl AliveSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.cells.contains(&cell)
    }

    /// Returns true if the cell was not already alive
    pub fn insert(&mut self, cell: Cell) -> bool {
        self.cells.insert(cell)
    }

    /// Returns true if the cell was alive
    pub fn remove(&mut self, cell: Cell) -> bool {
        self.cells.remove(&cell)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn iter(&self) -> hash_set::Iter<'_, Cell> {
        self.cells.iter()
    }

    pub(crate) fn as_hash_set(&self) -> &HashSet<Cell> {
        &self.cells
    }
}

impl FromIterator<Cell> for AliveSet {
    fn from_iter<I: IntoIterator<Item = Cell>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}

impl<const N: usize> From<[(i32, i32); N]> for AliveSet {
    fn from(coords: [(i32, i32); N]) -> Self {
        coords.into_iter().map(Cell::from).collect()
    }
}

impl<'a> IntoIterator for &'a AliveSet {
    type Item = &'a Cell;
    type IntoIter = hash_set::Iter<'a, Cell>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}
