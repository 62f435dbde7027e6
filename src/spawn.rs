//! Ball spawning.
//!
//! Each non-matching turn ends with a wave of new balls dropped onto
//! random empty cells. The policy here only chooses placements; the turn
//! controller is the one that writes them to the board and decides
//! whether the wave ended the game.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::board::{Board, ColorId, Coord};

/// Picks up to `count` distinct empty cells and a color for each.
///
/// Cells are sampled by shuffling the board's current empty-cell list
/// and taking a prefix, which keeps the picks distinct no matter how few
/// empty cells remain. Colors are drawn uniformly from `palette` with
/// repetition allowed.
///
/// Returns fewer placements than `count` (possibly none) when the board
/// lacks empty cells, and nothing when `palette` is empty. The board is
/// never touched.
pub fn pick_spawns(
    board: &Board,
    palette: &[ColorId],
    count: usize,
    rng: &mut impl Rng,
) -> Vec<(Coord, ColorId)> {
    if palette.is_empty() {
        return Vec::new();
    }

    let mut empties = board.empty_cells();
    empties.shuffle(rng);
    empties.truncate(count);

    let mut placements = Vec::with_capacity(empties.len());
    for coord in empties {
        if let Some(&color) = palette.choose(rng) {
            placements.push((coord, color));
        }
    }
    placements
}
