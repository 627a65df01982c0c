use rand::rngs::SmallRng;
use rand::seq::index;
use rand::{Rng, SeedableRng};

use super::*;

/// Purely random placement, reproducible from a seed.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RandomBoardGenerator {
    seed: u64,
}

impl RandomBoardGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl BoardGenerator for RandomBoardGenerator {
    fn generate(self, config: GameConfig) -> Result<(Board, MineSet)> {
        log::debug!("Generating {:?} with seed {}", config, self.seed);
        let mut rng = SmallRng::seed_from_u64(self.seed);
        generate_with_rng(config, &mut rng)
    }
}

/// Places `config.mines` mines at distinct cells drawn from `rng`.
///
/// Cells are sampled without replacement over the flattened grid, so this terminates for any valid
/// mine count, including a board with a single safe cell.
pub fn generate_with_rng<R: Rng + ?Sized>(config: GameConfig, rng: &mut R) -> Result<(Board, MineSet)> {
    let config = config.validate()?;
    let width = usize::from(config.width);

    let mines: MineSet = index::sample(rng, config.total_cells().into(), config.mines.into())
        .into_iter()
        .map(|i| ((i / width) as Coord, (i % width) as Coord))
        .collect();

    let board = Board::with_mines(config.width, config.height, &mines)?;
    if board.mine_count() != config.mines {
        log::warn!(
            "Generated board count mismatch, actual: {}, requested: {}",
            board.mine_count(),
            config.mines
        );
    }
    Ok((board, mines))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mine_cells(board: &Board) -> CellCount {
        board.iter().filter(|(_, cell)| cell.value.is_mine()).count() as CellCount
    }

    #[test]
    fn places_exactly_the_requested_mines() {
        for difficulty in Difficulty::ALL {
            let config = difficulty.config();
            let (board, mines) = RandomBoardGenerator::new(7).generate(config).unwrap();

            assert_eq!(mines.len(), config.mines);
            assert_eq!(mine_cells(&board), config.mines);
            assert!(mines.iter().all(|pos| board[pos].value.is_mine()));
            assert_eq!(board.shape(), config.shape());
        }
    }

    #[test]
    fn same_seed_same_board() {
        let config = Difficulty::Medium.config();
        let first = RandomBoardGenerator::new(42).generate(config).unwrap();
        let second = RandomBoardGenerator::new(42).generate(config).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn different_seeds_usually_differ() {
        let config = Difficulty::Hard.config();
        let (_, a) = RandomBoardGenerator::new(1).generate(config).unwrap();
        let (_, b) = RandomBoardGenerator::new(2).generate(config).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn zero_mines_gives_all_zero_board() {
        let (board, mines) = RandomBoardGenerator::new(3)
            .generate(GameConfig::new(5, 4, 0))
            .unwrap();
        assert!(mines.is_empty());
        assert!(board.iter().all(|(_, cell)| cell.value == CellValue::Safe(0)));
    }

    #[test]
    fn maximum_density_terminates() {
        let config = GameConfig::new(24, 20, 24 * 20 - 1);
        let (board, mines) = RandomBoardGenerator::new(9).generate(config).unwrap();
        assert_eq!(mines.len(), config.mines);
        assert_eq!(board.safe_cell_count(), 1);
    }

    #[test]
    fn rejects_invalid_configs() {
        let generate = |config| RandomBoardGenerator::new(0).generate(config);
        assert_eq!(generate(GameConfig::new(0, 3, 0)), Err(GameError::InvalidDimensions));
        assert_eq!(generate(GameConfig::new(3, 3, 9)), Err(GameError::InvalidMineCount));
    }
}
