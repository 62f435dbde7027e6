//! Turn controller for the color lines game.
//!
//! This module owns everything that changes during play: the board, the
//! selection state machine, the session status, and the RNG feeding the
//! spawn policy. A presentation layer drives it through a single entry
//! point, [`Game::select`], and reads the resulting [`MoveOutcome`] to
//! decide what to highlight, animate, or announce. The controller is the
//! only code in the crate that writes to the board.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use rand::rngs::SmallRng;
use rand::SeedableRng;
use tracing::debug;

use crate::board::{Board, ColorId, Coord};
use crate::error::{ConfigError, OutOfBounds, RejectReason};
use crate::lines::find_runs;
use crate::path::{find_path, Path};
use crate::spawn::pick_spawns;

/// Session-level game state. Only the controller transitions it: to
/// `Lost` when the board fills up, to `Won` on request from outside (no
/// board situation triggers a win by itself).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Running,
    Won,
    Lost,
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GameStatus::Running => "running",
            GameStatus::Won => "won",
            GameStatus::Lost => "lost",
        };
        write!(f, "{}", name)
    }
}

/// Parameters fixed when a game is created.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameConfig {
    /// Board width in cells.
    pub width: usize,
    /// Board height in cells.
    pub height: usize,
    /// Minimum run length that clears.
    pub match_threshold: usize,
    /// Balls added after every move that clears nothing.
    pub spawn_per_turn: usize,
    /// Balls placed by `reset_game` (and at construction).
    pub initial_spawn: usize,
    /// Colors spawned balls are drawn from.
    pub palette: Vec<ColorId>,
}

impl Default for GameConfig {
    /// The classic setup: 10x10 board, five colors, lines of 5 clear,
    /// three balls per turn, five balls to start.
    fn default() -> Self {
        GameConfig {
            width: 10,
            height: 10,
            match_threshold: 5,
            spawn_per_turn: 3,
            initial_spawn: 5,
            palette: ColorId::ALL[..5].to_vec(),
        }
    }
}

impl GameConfig {
    /// The classic board; same as `Default`.
    pub fn easy() -> Self {
        Self::default()
    }

    /// A roomier board with a sixth color in the mix.
    pub fn medium() -> Self {
        GameConfig {
            width: 12,
            height: 12,
            palette: ColorId::ALL[..6].to_vec(),
            ..Self::default()
        }
    }

    /// The largest board, drawing from all seven colors.
    pub fn hard() -> Self {
        GameConfig {
            width: 14,
            height: 14,
            palette: ColorId::ALL.to_vec(),
            ..Self::default()
        }
    }

    /// Checks the configuration for values no game can be built from.
    ///
    /// An `initial_spawn` larger than the board is allowed; the spawn is
    /// capped at the number of empty cells when it happens.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        if self.match_threshold < 2 {
            return Err(ConfigError::InvalidThreshold(self.match_threshold));
        }
        if self.palette.is_empty() {
            return Err(ConfigError::EmptyPalette);
        }
        if self.spawn_per_turn == 0 || self.initial_spawn == 0 {
            return Err(ConfigError::InvalidSpawnCounts {
                spawn_per_turn: self.spawn_per_turn,
                initial_spawn: self.initial_spawn,
            });
        }
        Ok(())
    }
}

/// Selection state: either nothing is armed, or exactly one occupied
/// cell is waiting for a destination.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Selection {
    Idle,
    Selected(Coord),
}

/// Everything that happened during one successful move, in the order a
/// presentation layer would animate it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppliedMove {
    /// The route the ball traveled, origin first, destination last.
    pub path: Path,
    /// Cells cleared by match resolution, the union over every
    /// qualifying line. Empty when the move completed no line.
    pub cleared: BTreeSet<Coord>,
    /// Balls spawned after a non-clearing move, keyed by cell. Empty on
    /// clearing moves (a clear skips the spawn) and when the board was
    /// already full.
    pub spawned: BTreeMap<Coord, ColorId>,
}

/// Result of a [`Game::select`] call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    /// An occupied cell was armed.
    Selected(Coord),
    /// The armed cell was replaced by another occupied cell.
    Reselected(Coord),
    /// Nothing changed; the reason says why.
    MoveRejected(RejectReason),
    /// A ball was relocated; the report carries path, clears and spawns.
    MoveApplied(AppliedMove),
    /// Input arrived after the game had already ended.
    GameEnded(GameStatus),
}

/// A running color lines session.
///
/// # Examples
/// ```
/// use color_lines::game::{Game, GameConfig, GameStatus};
///
/// let game = Game::with_seed(GameConfig::default(), 7).unwrap();
/// assert_eq!(game.status(), GameStatus::Running);
/// // Five balls on the board to start.
/// assert_eq!(game.board().count_empty(), 95);
/// ```
pub struct Game {
    config: GameConfig,
    board: Board,
    selection: Selection,
    status: GameStatus,
    rng: SmallRng,
    turns: u32,
    balls_cleared: u32,
}

impl Game {
    /// Creates a game with entropy-seeded randomness and performs the
    /// initial spawn.
    ///
    /// # Errors
    /// Fails with `ConfigError` when the configuration is unusable.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        Self::with_rng(config, SmallRng::from_entropy())
    }

    /// Creates a game whose spawn sequence is fully determined by
    /// `seed`. Two games built from the same configuration and seed
    /// evolve identically under identical inputs.
    pub fn with_seed(config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        Self::with_rng(config, SmallRng::seed_from_u64(seed))
    }

    fn with_rng(config: GameConfig, rng: SmallRng) -> Result<Self, ConfigError> {
        config.validate()?;
        let board = Board::new(config.width, config.height);
        let mut game = Game {
            board,
            selection: Selection::Idle,
            status: GameStatus::Running,
            rng,
            turns: 0,
            balls_cleared: 0,
            config,
        };
        game.reset_game();
        Ok(game)
    }

    /// Creates a game over a prepared board, skipping the initial spawn.
    ///
    /// Useful for scripted scenarios and tests: the board is taken
    /// as-is, so runs and near-full positions can be set up directly.
    ///
    /// # Errors
    /// Fails with `ConfigError` when the configuration is unusable or
    /// the board dimensions do not match it.
    pub fn with_board(config: GameConfig, board: Board, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        if board.width() != config.width || board.height() != config.height {
            return Err(ConfigError::BoardMismatch {
                expected_width: config.width,
                expected_height: config.height,
                width: board.width(),
                height: board.height(),
            });
        }
        Ok(Game {
            board,
            selection: Selection::Idle,
            status: GameStatus::Running,
            rng: SmallRng::seed_from_u64(seed),
            turns: 0,
            balls_cleared: 0,
            config,
        })
    }

    /// Current board, as a read-only view.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Session status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// The armed cell, if any.
    pub fn selection(&self) -> Option<Coord> {
        match self.selection {
            Selection::Idle => None,
            Selection::Selected(coord) => Some(coord),
        }
    }

    /// The configuration the game was built with.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Number of successful moves this round.
    pub fn turns(&self) -> u32 {
        self.turns
    }

    /// Total balls removed by line clears this round.
    pub fn balls_cleared(&self) -> u32 {
        self.balls_cleared
    }

    /// Handles one click at `coord`.
    ///
    /// While the game is running: an occupied cell arms (or re-arms) the
    /// selection; an empty cell is either rejected (nothing armed, or no
    /// route) or treated as the destination of a move. A successful move
    /// relocates the ball, clears any completed lines, and otherwise
    /// spawns the per-turn wave of new balls, which can end the game.
    /// After the game has ended every click reports `GameEnded`.
    ///
    /// # Errors
    /// Fails with `OutOfBounds` only when `coord` lies outside the
    /// board; that is a caller bug, not a player mistake. Everything a
    /// player can cause is reported through the outcome.
    pub fn select(&mut self, coord: Coord) -> Result<MoveOutcome, OutOfBounds> {
        let cell = self.board.get(coord)?;

        if self.status != GameStatus::Running {
            return Ok(MoveOutcome::GameEnded(self.status));
        }

        match (self.selection, cell) {
            (Selection::Idle, Some(_)) => {
                self.selection = Selection::Selected(coord);
                debug!(%coord, "ball selected");
                Ok(MoveOutcome::Selected(coord))
            }
            (Selection::Idle, None) => Ok(MoveOutcome::MoveRejected(
                RejectReason::EmptySelection(coord),
            )),
            (Selection::Selected(_), Some(_)) => {
                self.selection = Selection::Selected(coord);
                debug!(%coord, "selection moved");
                Ok(MoveOutcome::Reselected(coord))
            }
            (Selection::Selected(origin), None) => self.try_move(origin, coord),
        }
    }

    /// Attempts to relocate the armed ball to `destination`, then runs
    /// match resolution and, when nothing cleared, the spawn phase.
    fn try_move(
        &mut self,
        origin: Coord,
        destination: Coord,
    ) -> Result<MoveOutcome, OutOfBounds> {
        let mask = self.board.occupancy_mask();
        let path = match find_path(&mask, origin, destination) {
            Some(path) => path,
            None => {
                debug!(%origin, %destination, "move rejected, no route");
                return Ok(MoveOutcome::MoveRejected(
                    RejectReason::UnreachableDestination {
                        from: origin,
                        to: destination,
                    },
                ));
            }
        };

        let color = self
            .board
            .get(origin)?
            .expect("an armed cell always holds a ball");
        self.board.clear_cell(origin)?;
        self.board.set(destination, Some(color))?;
        self.selection = Selection::Idle;
        self.turns += 1;
        debug!(%origin, %destination, steps = path.len(), "ball moved");

        let runs = find_runs(&self.board, destination, self.config.match_threshold);
        let mut cleared = BTreeSet::new();
        let mut spawned = BTreeMap::new();

        if runs.is_empty() {
            spawned = self.spawn_wave(self.config.spawn_per_turn);
        } else {
            for run in &runs {
                cleared.extend(run.cells.iter().copied());
            }
            for &coord in &cleared {
                self.board.clear_cell(coord)?;
            }
            self.balls_cleared += cleared.len() as u32;
            debug!(
                runs = runs.len(),
                cells = cleared.len(),
                "lines cleared, spawn skipped"
            );
        }

        Ok(MoveOutcome::MoveApplied(AppliedMove {
            path,
            cleared,
            spawned,
        }))
    }

    /// Runs one spawn wave of up to `count` balls and applies the
    /// termination rule: a board with no empty cell before the wave
    /// loses immediately with no spawn, and a board left without empty
    /// cells by the wave loses right after it.
    fn spawn_wave(&mut self, count: usize) -> BTreeMap<Coord, ColorId> {
        if self.board.count_empty() == 0 {
            self.status = GameStatus::Lost;
            debug!("no empty cells before spawn, game lost");
            return BTreeMap::new();
        }

        let spawned = self.apply_spawns(count);
        debug!(count = spawned.len(), "balls spawned");

        if self.board.count_empty() == 0 {
            self.status = GameStatus::Lost;
            debug!("board filled by spawn, game lost");
        }
        spawned
    }

    /// Picks one wave of placements and writes them to the board.
    fn apply_spawns(&mut self, count: usize) -> BTreeMap<Coord, ColorId> {
        let picks = pick_spawns(&self.board, &self.config.palette, count, &mut self.rng);
        let mut spawned = BTreeMap::new();
        for (coord, color) in picks {
            self.board
                .set(coord, Some(color))
                .expect("spawn picks come from the board's own empty-cell list");
            spawned.insert(coord, color);
        }
        spawned
    }

    /// Starts a fresh round: clears the board, disarms the selection,
    /// sets the status back to `Running`, zeroes the counters, and
    /// places the configured initial balls.
    ///
    /// The initial spawn never ends the game, even when it fills a
    /// degenerate board completely; a reset game is always running.
    pub fn reset_game(&mut self) {
        self.board.reset();
        self.selection = Selection::Idle;
        self.status = GameStatus::Running;
        self.turns = 0;
        self.balls_cleared = 0;
        let placed = self.apply_spawns(self.config.initial_spawn);
        debug!(balls = placed.len(), "game reset");
    }

    /// Ends the round as a win.
    ///
    /// No board situation triggers this on its own; the rule set has no
    /// built-in victory. The operation exists for front ends that layer
    /// one on top (a timed mode, a clear-count goal). It only applies to
    /// a running game; finished games keep their status.
    pub fn declare_won(&mut self) {
        if self.status == GameStatus::Running {
            self.status = GameStatus::Won;
            debug!("game declared won");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::board_from_str_rows;

    fn config_for(width: usize, height: usize) -> GameConfig {
        GameConfig {
            width,
            height,
            ..GameConfig::default()
        }
    }

    fn game_from_rows(rows: &[&str]) -> Game {
        let board = board_from_str_rows(rows).unwrap();
        let config = config_for(board.width(), board.height());
        Game::with_board(config, board, 7).unwrap()
    }

    fn occupied(game: &Game) -> usize {
        game.board().width() * game.board().height() - game.board().count_empty()
    }

    /// A game one move past its last empty cells, ended by the spawn
    /// rule. Used by the tests that poke at finished games.
    fn lost_game() -> Game {
        let board = board_from_str_rows(&[
            "RGBR", //
            "GBRG", //
            "BRG.", //
            "RGB.", //
        ])
        .unwrap();
        let config = GameConfig {
            spawn_per_turn: 5,
            ..config_for(4, 4)
        };
        let mut game = Game::with_board(config, board, 11).unwrap();
        game.select(Coord::new(3, 2)).unwrap();
        game.select(Coord::new(3, 3)).unwrap();
        assert_eq!(game.status(), GameStatus::Lost);
        game
    }

    #[test]
    fn test_new_game_spawns_initial_balls() {
        let game = Game::with_seed(GameConfig::default(), 42).unwrap();
        assert_eq!(game.status(), GameStatus::Running);
        assert_eq!(occupied(&game), 5);
        assert_eq!(game.turns(), 0);
        assert_eq!(game.selection(), None);
    }

    #[test]
    fn test_initial_spawn_is_capped_by_board_size() {
        let config = GameConfig {
            initial_spawn: 9,
            ..config_for(2, 2)
        };
        let game = Game::with_seed(config, 1).unwrap();
        // The spawn caps at the four available cells, and a reset game
        // is always running regardless.
        assert_eq!(game.board().count_empty(), 0);
        assert_eq!(game.status(), GameStatus::Running);
    }

    #[test]
    fn test_selecting_empty_cell_while_idle_is_idempotent() {
        let mut game = game_from_rows(&[
            "R..", //
            "...", //
            "...", //
        ]);
        for _ in 0..3 {
            let outcome = game.select(Coord::new(1, 1)).unwrap();
            assert_eq!(
                outcome,
                MoveOutcome::MoveRejected(RejectReason::EmptySelection(Coord::new(1, 1)))
            );
            assert_eq!(game.status(), GameStatus::Running);
            assert_eq!(occupied(&game), 1);
            assert_eq!(game.selection(), None);
        }
    }

    #[test]
    fn test_select_and_reselect() {
        let mut game = game_from_rows(&[
            "RG.", //
            "...", //
            "...", //
        ]);
        assert_eq!(
            game.select(Coord::new(0, 0)).unwrap(),
            MoveOutcome::Selected(Coord::new(0, 0))
        );
        assert_eq!(game.selection(), Some(Coord::new(0, 0)));
        assert_eq!(
            game.select(Coord::new(0, 1)).unwrap(),
            MoveOutcome::Reselected(Coord::new(0, 1))
        );
        assert_eq!(game.selection(), Some(Coord::new(0, 1)));
        // Clicking the armed ball again simply re-arms it.
        assert_eq!(
            game.select(Coord::new(0, 1)).unwrap(),
            MoveOutcome::Reselected(Coord::new(0, 1))
        );
    }

    #[test]
    fn test_select_out_of_bounds_is_an_error() {
        let mut game = Game::with_seed(GameConfig::default(), 3).unwrap();
        let err = game.select(Coord::new(99, 0)).unwrap_err();
        assert_eq!(err.coord, Coord::new(99, 0));
        assert_eq!(err.width, 10);
        assert_eq!(err.height, 10);
    }

    #[test]
    fn test_unreachable_destination_keeps_selection() {
        // The red ball is walled in by the two greens.
        let mut game = game_from_rows(&[
            "RG.", //
            "G..", //
            "...", //
        ]);
        game.select(Coord::new(0, 0)).unwrap();
        let outcome = game.select(Coord::new(2, 2)).unwrap();
        assert_eq!(
            outcome,
            MoveOutcome::MoveRejected(RejectReason::UnreachableDestination {
                from: Coord::new(0, 0),
                to: Coord::new(2, 2),
            })
        );
        assert_eq!(game.selection(), Some(Coord::new(0, 0)));
        assert_eq!(game.status(), GameStatus::Running);
        assert_eq!(occupied(&game), 3);
        assert_eq!(game.turns(), 0);

        // The selection survives, so swapping to a mobile ball works.
        assert_eq!(
            game.select(Coord::new(0, 1)).unwrap(),
            MoveOutcome::Reselected(Coord::new(0, 1))
        );
        match game.select(Coord::new(2, 2)).unwrap() {
            MoveOutcome::MoveApplied(_) => {}
            other => panic!("expected MoveApplied, got {:?}", other),
        }
    }

    #[test]
    fn test_simple_move_spawns_per_turn_balls() {
        let mut game = game_from_rows(&[
            "..........",
            "....B.....",
            "..........",
            "..........",
            "..........",
            "..........",
            "..........",
            "..........",
            "..........",
            "..........",
        ]);
        game.select(Coord::new(1, 4)).unwrap();
        let report = match game.select(Coord::new(1, 7)).unwrap() {
            MoveOutcome::MoveApplied(report) => report,
            other => panic!("expected MoveApplied, got {:?}", other),
        };

        assert_eq!(report.path.first(), Some(&Coord::new(1, 4)));
        assert_eq!(report.path.last(), Some(&Coord::new(1, 7)));
        assert!(report.cleared.is_empty());
        assert_eq!(report.spawned.len(), 3);

        assert_eq!(game.board().get(Coord::new(1, 7)), Ok(Some(ColorId::Blue)));
        assert_eq!(game.board().get(Coord::new(1, 4)), Ok(None));
        for (&coord, &color) in &report.spawned {
            assert_eq!(game.board().get(coord), Ok(Some(color)));
        }
        assert_eq!(occupied(&game), 4);
        assert_eq!(game.turns(), 1);
        assert_eq!(game.selection(), None);
        assert_eq!(game.status(), GameStatus::Running);
    }

    #[test]
    fn test_four_reds_move_detours_and_spawns() {
        let mut game = game_from_rows(&[
            "RRRR......",
            "..........",
            "..........",
            "..........",
            "..........",
            "..........",
            "..........",
            "..........",
            "..........",
            "..........",
        ]);
        game.select(Coord::new(0, 0)).unwrap();
        let report = match game.select(Coord::new(0, 4)).unwrap() {
            MoveOutcome::MoveApplied(report) => report,
            other => panic!("expected MoveApplied, got {:?}", other),
        };

        // Row 0 is blocked by the other three reds, so the route dips
        // through row 1.
        assert!(report.path.len() >= 7);
        assert!(report.path.iter().any(|coord| coord.row == 1));

        // Four in a row after the move: no clear, so a wave spawns.
        assert!(report.cleared.is_empty());
        assert_eq!(report.spawned.len(), 3);
        assert_eq!(game.board().get(Coord::new(0, 4)), Ok(Some(ColorId::Red)));
        assert_eq!(game.board().get(Coord::new(0, 0)), Ok(None));
    }

    #[test]
    fn test_completing_a_line_clears_and_skips_spawn() {
        let mut game = game_from_rows(&[
            "RRRR.R....",
            "..........",
            "..........",
            "..........",
            "..........",
            "..........",
            "..........",
            "..........",
            "..........",
            "..........",
        ]);
        game.select(Coord::new(0, 5)).unwrap();
        let report = match game.select(Coord::new(0, 4)).unwrap() {
            MoveOutcome::MoveApplied(report) => report,
            other => panic!("expected MoveApplied, got {:?}", other),
        };

        let expected: BTreeSet<Coord> = (0..5).map(|c| Coord::new(0, c)).collect();
        assert_eq!(report.cleared, expected);
        assert!(report.spawned.is_empty());
        assert_eq!(game.balls_cleared(), 5);
        assert_eq!(occupied(&game), 0);
        assert_eq!(game.status(), GameStatus::Running);
    }

    #[test]
    fn test_t_shape_move_clears_union_of_runs() {
        // Moving the lone red into (2, 2) completes the row 2 line and
        // the column 2 line at once.
        let mut game = game_from_rows(&[
            "R.........",
            "..........",
            "RR.RR.....",
            "..R.......",
            "..R.......",
            "..R.......",
            "..R.......",
            "..........",
            "..........",
            "..........",
        ]);
        game.select(Coord::new(0, 0)).unwrap();
        let report = match game.select(Coord::new(2, 2)).unwrap() {
            MoveOutcome::MoveApplied(report) => report,
            other => panic!("expected MoveApplied, got {:?}", other),
        };

        // Both five-cell lines, junction counted once.
        assert_eq!(report.cleared.len(), 9);
        assert!(report.cleared.contains(&Coord::new(2, 2)));
        assert!(report.spawned.is_empty());
        assert_eq!(game.balls_cleared(), 9);
        assert_eq!(occupied(&game), 0);
    }

    #[test]
    fn test_filling_last_cells_loses_after_spawn() {
        // One empty cell plus the one the ball vacates: the wave fills
        // the board and the game is lost.
        let mut game = game_from_rows(&[
            "RGB", //
            "GBR", //
            "BR.", //
        ]);
        game.select(Coord::new(2, 1)).unwrap();
        let report = match game.select(Coord::new(2, 2)).unwrap() {
            MoveOutcome::MoveApplied(report) => report,
            other => panic!("expected MoveApplied, got {:?}", other),
        };

        assert!(report.cleared.is_empty());
        assert_eq!(report.spawned.len(), 1);
        assert!(report.spawned.contains_key(&Coord::new(2, 1)));
        assert_eq!(game.status(), GameStatus::Lost);
        assert_eq!(game.board().count_empty(), 0);
    }

    #[test]
    fn test_oversized_wave_places_remainder_then_loses() {
        // Two empty cells after the move, a wave of five requested: the
        // wave places two balls and the game is lost.
        let board = board_from_str_rows(&[
            "RGBR", //
            "GBRG", //
            "BRG.", //
            "RGB.", //
        ])
        .unwrap();
        let config = GameConfig {
            spawn_per_turn: 5,
            ..config_for(4, 4)
        };
        let mut game = Game::with_board(config, board, 11).unwrap();
        game.select(Coord::new(3, 2)).unwrap();
        let report = match game.select(Coord::new(3, 3)).unwrap() {
            MoveOutcome::MoveApplied(report) => report,
            other => panic!("expected MoveApplied, got {:?}", other),
        };

        assert_eq!(report.spawned.len(), 2);
        assert_eq!(game.status(), GameStatus::Lost);
        assert_eq!(game.board().count_empty(), 0);
    }

    #[test]
    fn test_select_after_game_over_reports_ended() {
        let mut game = lost_game();
        let board_before = game.board().clone();
        assert_eq!(
            game.select(Coord::new(0, 0)).unwrap(),
            MoveOutcome::GameEnded(GameStatus::Lost)
        );
        assert_eq!(
            game.select(Coord::new(1, 1)).unwrap(),
            MoveOutcome::GameEnded(GameStatus::Lost)
        );
        assert_eq!(game.board(), &board_before);
    }

    #[test]
    fn test_reset_game_starts_fresh() {
        let mut game = lost_game();
        game.reset_game();
        assert_eq!(game.status(), GameStatus::Running);
        assert_eq!(game.selection(), None);
        assert_eq!(game.turns(), 0);
        assert_eq!(game.balls_cleared(), 0);
        assert_eq!(occupied(&game), game.config().initial_spawn);
    }

    #[test]
    fn test_declare_won_gates_further_input() {
        let mut game = Game::with_seed(GameConfig::default(), 8).unwrap();
        game.declare_won();
        assert_eq!(game.status(), GameStatus::Won);
        assert_eq!(
            game.select(Coord::new(0, 0)).unwrap(),
            MoveOutcome::GameEnded(GameStatus::Won)
        );

        // A finished game keeps its status.
        let mut lost = lost_game();
        lost.declare_won();
        assert_eq!(lost.status(), GameStatus::Lost);
    }

    #[test]
    fn test_same_seed_gives_identical_games() {
        let mut game_a = Game::with_seed(GameConfig::default(), 1234).unwrap();
        let mut game_b = Game::with_seed(GameConfig::default(), 1234).unwrap();
        assert_eq!(game_a.board(), game_b.board());

        let src = game_a
            .board()
            .coords()
            .find(|&coord| game_a.board().get(coord).unwrap().is_some())
            .unwrap();
        assert_eq!(game_a.select(src).unwrap(), game_b.select(src).unwrap());

        let dst = game_a
            .board()
            .coords()
            .find(|&coord| game_a.board().get(coord).unwrap().is_none())
            .unwrap();
        assert_eq!(game_a.select(dst).unwrap(), game_b.select(dst).unwrap());
        assert_eq!(game_a.board(), game_b.board());
    }

    #[test]
    fn test_config_validation_rejects_bad_values() {
        assert_eq!(
            Game::new(GameConfig {
                width: 0,
                ..GameConfig::default()
            })
            .err(),
            Some(ConfigError::InvalidDimensions {
                width: 0,
                height: 10
            })
        );
        assert_eq!(
            Game::new(GameConfig {
                match_threshold: 1,
                ..GameConfig::default()
            })
            .err(),
            Some(ConfigError::InvalidThreshold(1))
        );
        assert_eq!(
            Game::new(GameConfig {
                palette: Vec::new(),
                ..GameConfig::default()
            })
            .err(),
            Some(ConfigError::EmptyPalette)
        );
        assert_eq!(
            Game::new(GameConfig {
                spawn_per_turn: 0,
                ..GameConfig::default()
            })
            .err(),
            Some(ConfigError::InvalidSpawnCounts {
                spawn_per_turn: 0,
                initial_spawn: 5
            })
        );

        let board = Board::new(3, 3);
        assert_eq!(
            Game::with_board(GameConfig::default(), board, 0).err(),
            Some(ConfigError::BoardMismatch {
                expected_width: 10,
                expected_height: 10,
                width: 3,
                height: 3
            })
        );
    }

    #[test]
    fn test_spawn_wave_on_full_board_loses_without_spawning() {
        let board = board_from_str_rows(&[
            "RG", //
            "GR", //
        ])
        .unwrap();
        let mut game = Game::with_board(config_for(2, 2), board, 0).unwrap();
        let before = game.board().clone();

        let spawned = game.spawn_wave(3);
        assert!(spawned.is_empty());
        assert_eq!(game.status(), GameStatus::Lost);
        assert_eq!(game.board(), &before);
    }

    #[test]
    fn test_difficulty_presets_are_valid() {
        for config in [GameConfig::easy(), GameConfig::medium(), GameConfig::hard()] {
            assert!(config.validate().is_ok());
        }
        assert_eq!(GameConfig::easy(), GameConfig::default());
        assert_eq!(GameConfig::medium().width, 12);
        assert_eq!(GameConfig::medium().palette.len(), 6);
        assert_eq!(GameConfig::hard().width, 14);
        assert_eq!(GameConfig::hard().palette.len(), 7);
    }
}
