//! # Color Lines Library
//!
//! This library provides the board engine for the color lines puzzle
//! game: a grid of colored balls where the player moves one ball per
//! turn along open paths, clears runs of same-colored balls, and loses
//! when the board fills up.
//!
//! It is used by two binaries:
//! - `human_player`: Allows interactive gameplay via the command line.
//! - `auto_player`: Plays random legal moves across many seeded games
//!   and reports survival statistics.
//!
//! ## Modules
//! - `board`: Contains the grid representation (`Board`), coordinates
//!   (`Coord`), ball colors (`ColorId`), and the occupancy mask used by
//!   pathfinding.
//! - `error`: Defines the error and rejection types shared by the crate.
//! - `game`: Contains the turn controller (`Game`), its configuration
//!   (`GameConfig`), and the outcome types reported to callers.
//! - `lines`: Detects runs of same-colored balls along the four axes.
//! - `path`: Finds routes for a ball across empty cells.
//! - `spawn`: Picks random cells and colors for new balls.
//! - `utils`: Provides utility functions, such as parsing board
//!   configurations from strings.

pub mod board;
pub mod error;
pub mod game;
pub mod lines;
pub mod path;
pub mod spawn;
pub mod utils;

// Items from sub-modules like `game`, `board`, etc., if public, should
// be accessed via their full path, e.g., `color_lines::game::Game`.
// This keeps the top-level library namespace cleaner.
