//! Pathfinding for ball moves.
//!
//! A ball may only travel through empty cells, one orthogonal step at a
//! time. The search keeps a frontier of partial paths and always grows
//! the ones whose ends lie closest to the destination (by Manhattan
//! distance), which reproduces the game's characteristic routes: it
//! heads straight for the target and only fans out when blocked. The
//! result is not guaranteed shortest under every tie pattern, but it is
//! deterministic for identical inputs.

use tracing::trace;

use crate::board::{Coord, OccupancyMask};

/// A route across the board: origin first, destination last, every
/// consecutive pair orthogonally adjacent, every cell after the origin
/// empty at search time.
pub type Path = Vec<Coord>;

/// Expansion order for each path end: right, down, left, up.
const ORTHO_STEPS: [(isize, isize); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];

/// Searches for a route from `origin` to `destination` over the empty
/// cells of `mask`.
///
/// The origin itself is exempt from the occupancy check (the ball
/// sitting there is the one about to move), and the destination is
/// expected to be empty by the caller. A coordinate is expanded at most
/// once in the whole search, so the frontier never cycles.
///
/// Returns `None` when either endpoint is out of range or no
/// unobstructed route exists. `origin == destination` yields the
/// single-cell path.
///
/// # Examples
/// ```
/// use color_lines::board::Coord;
/// use color_lines::path::find_path;
/// use color_lines::utils::board_from_str_rows;
///
/// let board = board_from_str_rows(&["R...."]).unwrap();
/// let path = find_path(&board.occupancy_mask(), Coord::new(0, 0), Coord::new(0, 4));
/// assert_eq!(path.map(|p| p.len()), Some(5));
/// ```
pub fn find_path(mask: &OccupancyMask, origin: Coord, destination: Coord) -> Option<Path> {
    if !mask.in_bounds(origin) || !mask.in_bounds(destination) {
        return None;
    }
    if origin == destination {
        return Some(vec![origin]);
    }

    let mut visited = vec![false; mask.width() * mask.height()];
    visited[origin.row * mask.width() + origin.col] = true;

    // Each frontier entry caches its end cell next to the full path.
    let mut frontier: Vec<(Coord, Path)> = vec![(origin, vec![origin])];

    while !frontier.is_empty() {
        trace!(frontier = frontier.len(), "expanding frontier");

        // Closest ends expand first. The sort is stable, so ties keep
        // their discovery order and the search stays deterministic.
        frontier.sort_by_key(|(end, _)| end.manhattan(destination));

        let mut next_frontier: Vec<(Coord, Path)> = Vec::new();

        for (end, path) in &frontier {
            for (dr, dc) in ORTHO_STEPS {
                let candidate = match end.offset(dr, dc) {
                    Some(coord) => coord,
                    None => continue,
                };
                let occupied = match mask.occupied(candidate) {
                    Some(occupied) => occupied,
                    None => continue, // off the board
                };
                let idx = candidate.row * mask.width() + candidate.col;
                if visited[idx] {
                    continue;
                }
                // Only the destination may be stepped onto regardless of
                // the mask; every intermediate cell must be free.
                if occupied && candidate != destination {
                    continue;
                }
                visited[idx] = true;

                let mut extended = path.clone();
                extended.push(candidate);
                if candidate == destination {
                    return Some(extended);
                }
                next_frontier.push((candidate, extended));
            }
        }

        frontier = next_frontier;
    }

    None
}
