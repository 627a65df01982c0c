use alloc::collections::BTreeSet;
use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Coordinates of every mine on a board, fixed once the board is generated.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MineSet {
    mines: BTreeSet<Coord2>,
}

impl MineSet {
    pub fn contains(&self, coords: Coord2) -> bool {
        self.mines.contains(&coords)
    }

    pub fn len(&self) -> CellCount {
        self.mines.len().try_into().unwrap_or(CellCount::MAX)
    }

    pub fn is_empty(&self) -> bool {
        self.mines.is_empty()
    }

    /// Mines in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = Coord2> + '_ {
        self.mines.iter().copied()
    }
}

/// Duplicate coordinates collapse into one mine.
impl FromIterator<Coord2> for MineSet {
    fn from_iter<I: IntoIterator<Item = Coord2>>(iter: I) -> Self {
        Self {
            mines: iter.into_iter().collect(),
        }
    }
}

/// Only the cells and the detonated mine are stored, the counters are rebuilt when loading.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "StoredBoard", into = "StoredBoard")]
pub struct Board {
    cells: Array2<Cell>,
    mine_count: CellCount,
    hidden_safe: CellCount,
    detonated: Option<Coord2>,
}

impl Board {
    /// A board with no mines, every cell hidden and zero.
    pub fn empty(width: Coord, height: Coord) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(GameError::InvalidDimensions);
        }
        Ok(Self {
            cells: Array2::default((height, width).to_nd_index()),
            mine_count: 0,
            hidden_safe: mult(width, height),
            detonated: None,
        })
    }

    /// Places `mines` and fills in the adjacency count of every safe cell.
    pub fn with_mines(width: Coord, height: Coord, mines: &MineSet) -> Result<Self> {
        let mut board = Self::empty(width, height)?;
        if mines.len() >= board.total_cells() {
            return Err(GameError::InvalidMineCount);
        }

        for coords in mines.iter() {
            let coords = board.validate_coords(coords)?;
            board.cell_mut(coords).value = CellValue::Mine;
        }

        for coords in mines.iter() {
            for pos in board.neighbors(coords) {
                if let CellValue::Safe(count) = &mut board.cell_mut(pos).value {
                    *count += 1;
                }
            }
        }

        board.mine_count = mines.len();
        board.hidden_safe = board.total_cells() - board.mine_count;
        Ok(board)
    }

    pub fn width(&self) -> Coord {
        self.shape().1
    }

    pub fn height(&self) -> Coord {
        self.shape().0
    }

    /// Grid shape as `(rows, cols)`.
    pub fn shape(&self) -> Coord2 {
        let (rows, cols) = self.cells.dim();
        // both axes were built from `Coord` values
        (rows as Coord, cols as Coord)
    }

    pub fn total_cells(&self) -> CellCount {
        mult(self.width(), self.height())
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.total_cells() - self.mine_count
    }

    pub fn contains(&self, (row, col): Coord2) -> bool {
        let (rows, cols) = self.shape();
        row < rows && col < cols
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        if self.contains(coords) {
            Ok(coords)
        } else {
            Err(GameError::OutOfBounds)
        }
    }

    pub fn neighbors(&self, coords: Coord2) -> Neighbors {
        Neighbors::new(coords, self.shape())
    }

    /// Every cell with its coordinates, in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Coord2, &Cell)> + '_ {
        self.cells
            .indexed_iter()
            .map(|((row, col), cell)| ((row as Coord, col as Coord), cell))
    }

    /// The mine that ended the game, if one was hit.
    pub fn detonated(&self) -> Option<Coord2> {
        self.detonated
    }

    /// Cached number of safe cells still hidden.
    pub fn hidden_safe(&self) -> CellCount {
        self.hidden_safe
    }

    /// Recounts the hidden safe cells from scratch.
    pub fn count_hidden_safe(&self) -> CellCount {
        self.cells
            .iter()
            .filter(|cell| cell.is_hidden() && !cell.value.is_mine())
            .count()
            .try_into()
            .unwrap_or(CellCount::MAX)
    }

    pub fn flag_count(&self) -> CellCount {
        self.cells
            .iter()
            .filter(|cell| cell.is_flagged())
            .count()
            .try_into()
            .unwrap_or(CellCount::MAX)
    }

    /// Every safe cell is revealed.
    pub fn is_cleared(&self) -> bool {
        self.hidden_safe == 0
    }

    pub fn state(&self) -> GameState {
        if self.detonated.is_some() {
            GameState::Lost
        } else if self.is_cleared() {
            GameState::Won
        } else if self.hidden_safe < self.safe_cell_count() {
            GameState::InProgress
        } else {
            GameState::NotStarted
        }
    }

    pub(crate) fn cell_mut(&mut self, coords: Coord2) -> &mut Cell {
        &mut self.cells[coords.to_nd_index()]
    }

    /// Reveals a cell and clears its mark, returns whether it was hidden before.
    pub(crate) fn reveal(&mut self, coords: Coord2) -> bool {
        let cell = self.cell_mut(coords);
        if cell.revealed {
            return false;
        }
        cell.revealed = true;
        cell.mark = Mark::Clear;
        if !cell.value.is_mine() {
            self.hidden_safe -= 1;
        }
        true
    }

    pub(crate) fn detonate(&mut self, coords: Coord2) {
        self.detonated = Some(coords);
        self.reveal(coords);
    }
}

#[derive(Serialize, Deserialize)]
struct StoredBoard {
    cells: Array2<Cell>,
    detonated: Option<Coord2>,
}

impl From<Board> for StoredBoard {
    fn from(board: Board) -> Self {
        Self {
            cells: board.cells,
            detonated: board.detonated,
        }
    }
}

impl TryFrom<StoredBoard> for Board {
    type Error = GameError;

    fn try_from(stored: StoredBoard) -> Result<Self> {
        let (rows, cols) = stored.cells.dim();
        let (Ok(height), Ok(width)) = (Coord::try_from(rows), Coord::try_from(cols)) else {
            return Err(GameError::InvalidDimensions);
        };
        let mines: MineSet = stored
            .cells
            .indexed_iter()
            .filter(|(_, cell)| cell.value.is_mine())
            .map(|((row, col), _)| (row as Coord, col as Coord))
            .collect();

        let mut board = Self::with_mines(width, height, &mines)?;
        for (coords, cell) in board.cells.indexed_iter_mut() {
            let stored_cell = stored.cells[coords];
            if stored_cell.value != cell.value {
                return Err(GameError::InconsistentBoard);
            }
            *cell = stored_cell;
        }

        if let Some(coords) = stored.detonated {
            let cell = board.validate_coords(coords).map(|coords| board[coords]);
            if !matches!(cell, Ok(Cell { value: CellValue::Mine, revealed: true, .. })) {
                return Err(GameError::InconsistentBoard);
            }
        }
        board.detonated = stored.detonated;
        board.hidden_safe = board.count_hidden_safe();
        Ok(board)
    }
}

impl Index<Coord2> for Board {
    type Output = Cell;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}
