//! Island counting over a `LandGrid`.
//!
//! An island is a maximal set of land cells connected through their north,
//! south, east and west neighbours. Cells are scanned in row-major order and
//! each newly found island is flooded with an explicit-stack depth-first
//! traversal.

use crate::grid::{Grid, LandGrid};
use crate::Topology;

/// Floods the island containing `(x, y)`, marking every reached cell in
/// `visited`. Returns the number of cells in the island.
///
/// `(x, y)` must be an unvisited land cell.
fn flood(
    grid: &LandGrid,
    visited: &mut Grid<bool>,
    x: usize,
    y: usize,
    topology: Topology,
) -> usize {
    let mut size = 0;
    let mut stack = vec![(x, y)];
    if let Some(seen) = visited.get_mut(x, y) {
        *seen = true;
    }

    while let Some((cx, cy)) = stack.pop() {
        size += 1;
        for (nx, ny) in grid.neighbors(cx, cy, topology) {
            let is_land = grid.get(nx, ny).copied().unwrap_or(false);
            if !is_land {
                continue;
            }
            if let Some(seen) = visited.get_mut(nx, ny) {
                if !*seen {
                    // Marked on push so a cell is never stacked twice.
                    *seen = true;
                    stack.push((nx, ny));
                }
            }
        }
    }

    size
}

/// Sizes of every island in the order they are discovered (row-major by
/// their first cell). The grid itself is left untouched.
pub fn island_sizes(grid: &LandGrid, topology: Topology) -> Vec<usize> {
    let mut visited: Grid<bool> = grid.overlay();
    let mut sizes = Vec::new();

    for (x, y) in grid.coords() {
        let is_land = grid.get(x, y).copied().unwrap_or(false);
        let seen = visited.get(x, y).copied().unwrap_or(true);
        if is_land && !seen {
            sizes.push(flood(grid, &mut visited, x, y, topology));
        }
    }

    log::debug!(
        "{}x{} grid ({topology:?}): {} islands, sizes {sizes:?}",
        grid.width,
        grid.height,
        sizes.len()
    );
    sizes
}

/// Counts islands under the given topology without modifying the grid.
pub fn count_islands_with(grid: &LandGrid, topology: Topology) -> usize {
    island_sizes(grid, topology).len()
}

/// Counts 4-connected islands in a bounded grid without modifying it.
pub fn count_islands(grid: &LandGrid) -> usize {
    count_islands_with(grid, Topology::Bounded)
}

/// Counts islands in a bounded grid by sinking each one as it is found.
///
/// Every land cell is turned into water, so calling this again on the same
/// grid returns 0. Use [`count_islands`] to keep the grid intact.
pub fn sink_islands(grid: &mut LandGrid) -> usize {
    let mut count = 0;

    for y in 0..grid.height {
        for x in 0..grid.width {
            if !grid.get(x, y).copied().unwrap_or(false) {
                continue;
            }
            count += 1;

            let mut stack = vec![(x, y)];
            while let Some((cx, cy)) = stack.pop() {
                match grid.get_mut(cx, cy) {
                    Some(cell) if *cell => *cell = false,
                    _ => continue,
                }
                let neighbors: Vec<_> = grid.neighbors(cx, cy, Topology::Bounded).collect();
                stack.extend(
                    neighbors
                        .into_iter()
                        .filter(|&(nx, ny)| grid.get(nx, ny).copied().unwrap_or(false)),
                );
            }
        }
    }

    count
}
