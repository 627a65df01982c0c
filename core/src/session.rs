use serde::{Deserialize, Serialize};

use crate::*;

/// One player's run of games: the current board plus the bookkeeping a front end shows around it.
///
/// Time is counted in external ticks, see [`Session::tick`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Session {
    config: GameConfig,
    marks: MarkCycle,
    board: Board,
    mines: MineSet,
    elapsed: u32,
    best_time: Option<u32>,
}

impl Session {
    pub fn new(config: GameConfig, marks: MarkCycle, seed: u64) -> Result<Self> {
        let (board, mines) = RandomBoardGenerator::new(seed).generate(config)?;
        Ok(Self {
            config,
            marks,
            board,
            mines,
            elapsed: 0,
            best_time: None,
        })
    }

    pub fn with_difficulty(difficulty: Difficulty, marks: MarkCycle, seed: u64) -> Result<Self> {
        Self::new(difficulty.config(), marks, seed)
    }

    /// Starts a session from a previously stored record.
    pub fn with_best_time(mut self, best_time: Option<u32>) -> Self {
        self.best_time = best_time;
        self
    }

    /// Replaces the board with a fresh one of the same config, keeping the best time.
    pub fn restart(&mut self, seed: u64) -> Result<()> {
        self.start_board(self.config, seed)
    }

    pub fn change_difficulty(&mut self, difficulty: Difficulty, seed: u64) -> Result<()> {
        self.start_board(difficulty.config(), seed)
    }

    fn start_board(&mut self, config: GameConfig, seed: u64) -> Result<()> {
        let (board, mines) = RandomBoardGenerator::new(seed).generate(config)?;
        log::debug!("New board {:?}", config);
        self.config = config;
        self.board = board;
        self.mines = mines;
        self.elapsed = 0;
        Ok(())
    }

    pub fn reveal(&mut self, coords: Coord2) -> Result<RevealResult> {
        let result = reveal_cell(&mut self.board, &self.mines, coords)?;
        if result.outcome == RevealOutcome::Won {
            self.record_win();
        }
        Ok(result)
    }

    pub fn cycle_mark(&mut self, coords: Coord2) -> Result<Mark> {
        let coords = self.board.validate_coords(coords)?;
        if self.state().is_finished() {
            return Err(GameError::AlreadyEnded);
        }
        cycle_mark(&mut self.board, coords, self.marks)
    }

    /// Advances the clock by one second while a game is in progress, returns the elapsed time.
    pub fn tick(&mut self) -> u32 {
        if self.state() == GameState::InProgress {
            self.elapsed = self.elapsed.saturating_add(1);
        }
        self.elapsed
    }

    fn record_win(&mut self) {
        if self.best_time.is_none_or(|best| self.elapsed < best) {
            log::debug!("New best time: {}s", self.elapsed);
            self.best_time = Some(self.elapsed);
        }
    }

    pub fn state(&self) -> GameState {
        self.board.state()
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn mark_cycle(&self) -> MarkCycle {
        self.marks
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn mines(&self) -> &MineSet {
        &self.mines
    }

    pub fn elapsed(&self) -> u32 {
        self.elapsed
    }

    pub fn best_time(&self) -> Option<u32> {
        self.best_time
    }

    pub fn flags_remaining(&self) -> isize {
        remaining_flags(self.mines.len(), &self.board)
    }
}
