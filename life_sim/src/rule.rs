// rule.rs - The scatter-birth update rule
//
// Not Conway's rules. For every cell alive at the start of the tick the
// rule body runs once per entry of the cell's neighbor list, and the last
// write of each pass copies that entry's state into the cell. The cell
// therefore ends the tick with the state its bottom-right neighbor had when
// the cell was reached, while random births along the way are kept.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::grid::Grid;

/// Applies one tick in place. Writes are visible to cells processed later
/// in the same tick.
pub fn step<R: Rng + ?Sized>(grid: &mut Grid, rng: &mut R) {
    for (x, y) in grid.live_cells() {
        let enumerated = grid.neighbors(x, y);

        for is_alive in enumerated {
            let states = grid.neighbors(x, y);
            let alive_neighbors = states.iter().filter(|&&alive| alive).count();

            match alive_neighbors {
                2 | 3 => {
                    grid.set(x, y, true);
                    scatter_birth(grid, x, y, &states, rng);
                }
                // Loneliness (<= 1) and crowding (>= 4) both kill
                _ => grid.set(x, y, false),
            }

            // FIXME: this write makes the branches above inert for (x, y),
            // only their births survive. Pinned by
            // test_bottom_right_neighbor_decides_final_state.
            grid.set(x, y, is_alive);
        }
    }
}

/// Brings one dead neighbor of `(x, y)` to life. Out-of-range neighbors
/// count as dead candidates, and picking one writes nothing.
fn scatter_birth<R: Rng + ?Sized>(grid: &mut Grid, x: i32, y: i32, states: &[bool; 8], rng: &mut R) {
    let dead: Vec<(i32, i32)> = Grid::neighbor_positions(x, y)
        .into_iter()
        .zip(states.iter())
        .filter(|(_, alive)| !**alive)
        .map(|(pos, _)| pos)
        .collect();

    if let Some(&(bx, by)) = dead.choose(rng) {
        grid.set(bx, by, true);
    }
}
