//! Minesweeper rules: board generation, reveal with flood fill, marks and win/loss detection.
//!
//! Presentation layers generate a [`Board`] and [`MineSet`] with a [`BoardGenerator`], then route
//! clicks through [`reveal_cell`] and [`cycle_mark`], or let a [`Session`] do the bookkeeping.

#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use board::*;
pub use cell::*;
pub use config::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use session::*;
pub use types::*;

mod board;
mod cell;
mod config;
mod engine;
mod error;
mod generator;
mod session;
mod types;

/// Valid transitions:
/// - NotStarted -> InProgress
/// - NotStarted -> Won
/// - NotStarted -> Lost
/// - InProgress -> Won
/// - InProgress -> Lost
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameState {
    #[default]
    NotStarted,
    InProgress,
    Won,
    Lost,
}

impl GameState {
    pub const fn is_started(self) -> bool {
        !matches!(self, Self::NotStarted)
    }

    /// Indicates the game has ended and no moves can be made anymore
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}
