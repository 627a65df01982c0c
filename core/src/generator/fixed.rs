use alloc::vec::Vec;

use super::*;

/// Places mines at caller-chosen coordinates, for replaying a known layout.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FixedBoardGenerator {
    mines: Vec<Coord2>,
}

impl FixedBoardGenerator {
    pub fn new(mines: impl IntoIterator<Item = Coord2>) -> Self {
        Self {
            mines: mines.into_iter().collect(),
        }
    }
}

impl BoardGenerator for FixedBoardGenerator {
    /// Only the dimensions of `config` are used, the mine count comes from the layout.
    fn generate(self, config: GameConfig) -> Result<(Board, MineSet)> {
        let mines: MineSet = self.mines.into_iter().collect();
        let board = Board::with_mines(config.width, config.height, &mines)?;
        if mines.len() != config.mines {
            log::warn!(
                "Fixed layout has {} mines, config requested {}",
                mines.len(),
                config.mines
            );
        }
        Ok((board, mines))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uses_given_layout() {
        let (board, mines) = FixedBoardGenerator::new([(0, 0)])
            .generate(GameConfig::new(3, 3, 1))
            .unwrap();

        assert!(mines.contains((0, 0)));
        assert_eq!(board[(0, 0)].value, CellValue::Mine);
        assert_eq!(board[(1, 1)].value, CellValue::Safe(1));
        assert_eq!(board[(2, 2)].value, CellValue::Safe(0));
    }

    #[test]
    fn duplicate_coordinates_count_once() {
        let (board, mines) = FixedBoardGenerator::new([(1, 1), (1, 1)])
            .generate(GameConfig::new(3, 3, 1))
            .unwrap();
        assert_eq!(mines.len(), 1);
        assert_eq!(board[(0, 0)].value, CellValue::Safe(1));
    }

    #[test]
    fn rejects_mines_outside_board() {
        assert_eq!(
            FixedBoardGenerator::new([(3, 0)]).generate(GameConfig::new(3, 3, 1)),
            Err(GameError::OutOfBounds)
        );
    }
}
