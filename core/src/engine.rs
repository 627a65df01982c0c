use alloc::collections::{BTreeSet, VecDeque};
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RevealOutcome {
    /// The cell was already revealed.
    NoChange,
    Continue,
    Lost,
    Won,
}

impl RevealOutcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoChange)
    }

    pub const fn is_final(self) -> bool {
        matches!(self, Self::Lost | Self::Won)
    }
}

/// Everything a single reveal changed, in one piece.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevealResult {
    pub newly_revealed: BTreeSet<Coord2>,
    pub outcome: RevealOutcome,
}

impl RevealResult {
    pub fn unchanged() -> Self {
        Self {
            newly_revealed: BTreeSet::new(),
            outcome: RevealOutcome::NoChange,
        }
    }
}

/// Reveals the cell at `coords`.
///
/// Hitting a mine reveals every mine in `mines` and loses. A zero cell flood-reveals its connected
/// zero region plus the numbered border around it. Revealing an already revealed cell is a no-op.
/// Once the game is over, hidden cells can no longer be revealed.
pub fn reveal_cell(board: &mut Board, mines: &MineSet, coords: Coord2) -> Result<RevealResult> {
    use RevealOutcome::*;

    let coords = board.validate_coords(coords)?;
    if board[coords].revealed {
        return Ok(RevealResult::unchanged());
    }
    if board.state().is_finished() {
        log::warn!("Ignoring reveal at {:?}, game already ended", coords);
        return Err(GameError::AlreadyEnded);
    }

    let mut newly_revealed = BTreeSet::new();
    let value = board[coords].value;
    match value {
        CellValue::Mine => {
            board.detonate(coords);
            newly_revealed.insert(coords);
            for pos in mines.iter() {
                if board.contains(pos) && board.reveal(pos) {
                    newly_revealed.insert(pos);
                }
            }
            log::debug!("Hit mine at {:?}, revealed {} mines", coords, newly_revealed.len());
            return Ok(RevealResult {
                newly_revealed,
                outcome: Lost,
            });
        }
        CellValue::Safe(0) => flood_reveal(board, coords, &mut newly_revealed),
        CellValue::Safe(count) => {
            board.reveal(coords);
            newly_revealed.insert(coords);
            log::debug!("Revealed cell at {:?}, mine count: {}", coords, count);
        }
    }

    debug_assert_eq!(board.hidden_safe(), board.count_hidden_safe());
    let outcome = if board.is_cleared() {
        log::debug!("All safe cells revealed");
        Won
    } else {
        Continue
    };
    Ok(RevealResult {
        newly_revealed,
        outcome,
    })
}

/// Breadth-first reveal from a zero cell: every hidden safe neighbor is revealed, only zero
/// neighbors are queued.
fn flood_reveal(board: &mut Board, seed: Coord2, newly_revealed: &mut BTreeSet<Coord2>) {
    board.reveal(seed);
    newly_revealed.insert(seed);

    let mut to_visit = VecDeque::from([seed]);
    while let Some(visit_coords) = to_visit.pop_front() {
        for pos in board.neighbors(visit_coords) {
            let cell = board[pos];
            if cell.revealed || cell.value.is_mine() {
                continue;
            }

            board.reveal(pos);
            newly_revealed.insert(pos);
            if cell.value.is_zero() {
                to_visit.push_back(pos);
            }
        }
    }

    log::trace!(
        "Flood-fill from {:?} revealed {} cells",
        seed,
        newly_revealed.len()
    );
}

/// Advances the mark on a hidden cell and returns the new mark; revealed cells are left alone.
pub fn cycle_mark(board: &mut Board, coords: Coord2, cycle: MarkCycle) -> Result<Mark> {
    let coords = board.validate_coords(coords)?;
    let cell = board.cell_mut(coords);
    if !cell.revealed {
        cell.mark = cycle.next(cell.mark);
    }
    Ok(cell.mark)
}

/// Mines not yet accounted for by a flag, negative when over-flagged.
pub fn remaining_flags(mine_count: CellCount, board: &Board) -> isize {
    (mine_count as isize) - (board.flag_count() as isize)
}
