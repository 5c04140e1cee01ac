//! The life engine: one pure step over a sparse alive-set, plus the small
//! set of edits the presentation layer needs between steps.
//!
//! Only coordinates next to an alive cell are ever counted. A dead cell with
//! no alive neighbors can never reach the birth count of 3, so nothing else
//! needs visiting.

use std::collections::HashMap;

use rand::Rng;
use rayon::prelude::*;

use super::{AliveSet, Cell, CellState, Strategy, Viewport};

/// Transient neighbor tally, rebuilt every step
type NeighborCounts = HashMap<Cell, u8>;

fn tally(mut counts: NeighborCounts, cell: &Cell) -> NeighborCounts {
    for neighbor in cell.neighbors() {
        *counts.entry(neighbor).or_insert(0) += 1;
    }
    counts
}

fn count_neighbors(alive: &AliveSet) -> NeighborCounts {
    alive
        .iter()
        .fold(NeighborCounts::with_capacity(alive.len() * 8), tally)
}

/// Per-thread tallies merged pairwise; the smaller map drains into the larger
fn count_neighbors_parallel(alive: &AliveSet) -> NeighborCounts {
    alive
        .as_hash_set()
        .par_iter()
        .fold(NeighborCounts::new, tally)
        .reduce(NeighborCounts::new, |a, b| {
            let (mut into, from) = if a.len() >= b.len() { (a, b) } else { (b, a) };
            for (cell, count) in from {
                *into.entry(cell).or_insert(0) += count;
            }
            into
        })
}

/// Advance one generation with the serial strategy.
pub fn step(alive: &AliveSet, viewport: Viewport) -> AliveSet {
    step_with(alive, viewport, Strategy::Serial)
}

/// Advance one generation.
///
/// Survival on 2-3 neighbors, birth on exactly 3. The result is culled to
/// cells whose rendered box lies strictly inside `viewport`; anything that
/// grows past the edge is gone for good.
pub fn step_with(alive: &AliveSet, viewport: Viewport, strategy: Strategy) -> AliveSet {
    let counts = match strategy {
        Strategy::Serial => count_neighbors(alive),
        Strategy::Parallel => count_neighbors_parallel(alive),
    };

    counts
        .into_iter()
        .filter(|&(cell, neighbors)| {
            CellState::from_alive(alive.contains(cell))
                .evolve(neighbors)
                .is_alive()
        })
        .map(|(cell, _)| cell)
        .filter(|&cell| viewport.contains(cell))
        .collect()
}

/// Set a single cell alive or dead. Repeating the same edit is a no-op.
pub fn toggle_cell(mut set: AliveSet, cell: Cell, alive: bool) -> AliveSet {
    if alive {
        set.insert(cell);
    } else {
        set.remove(cell);
    }
    set
}

/// Drop every cell
pub fn clear(_set: AliveSet) -> AliveSet {
    AliveSet::new()
}

/// Fill the viewport with a random soup; each visible cell is alive with
/// probability `density` (clamped to 0.0..=1.0).
pub fn randomize<R: Rng>(viewport: Viewport, density: f64, rng: &mut R) -> AliveSet {
    let density = if density.is_nan() { 0.0 } else { density.clamp(0.0, 1.0) };
    let Some((min, max)) = viewport.cell_bounds() else {
        return AliveSet::new();
    };

    (min.y..=max.y)
        .flat_map(|y| (min.x..=max.x).map(move |x| Cell::new(x, y)))
        .filter(|_| rng.random_bool(density))
        .collect()
}
