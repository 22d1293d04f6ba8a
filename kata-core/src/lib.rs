//! Core library for the kata drills.
//! Four independent algorithms plus the small grid type the island counter runs on.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Balanced-bracket validation with an explicit stack.
pub mod brackets;
/// Counting coin combinations that sum to a target amount.
pub mod coins;
/// Generic 2D grid and the land/water grid built on it.
pub mod grid;
/// Counting 4-connected islands of land in a grid.
pub mod islands;
/// Shortest window of a string covering a set of characters.
pub mod window;

pub use crate::brackets::{brackets_balanced, check_brackets, BracketError};
pub use crate::coins::{
    coin_combinations, CoinError, CombinationCounter, MemoizedCounter, TabulatedCounter,
};
pub use crate::grid::{Grid, GridError, LandGrid};
pub use crate::islands::{count_islands, count_islands_with, island_sizes, sink_islands};
pub use crate::window::{find_covering_window, shortest_covering_window, Window};

/// Any error produced by the kata algorithms.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KataError {
    /// Coin counting was given unusable input or overflowed.
    #[error("Coin counting error: {0}")]
    Coins(#[from] CoinError),
    /// A bracket expression was not balanced.
    #[error("Bracket error: {0}")]
    Brackets(#[from] BracketError),
    /// A grid could not be built from the supplied rows.
    #[error("Grid error: {0}")]
    Grid(#[from] GridError),
}

/// How grid edges are treated when looking for neighbouring cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum Topology {
    /// Grid boundaries are hard walls; cells outside the grid do not exist.
    #[default]
    Bounded,
    /// Edges wrap around (toroidal topology).
    Toroidal,
}
