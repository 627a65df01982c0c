use crate::*;
pub use fixed::*;
pub use random::*;

mod fixed;
mod random;

pub trait BoardGenerator {
    fn generate(self, config: GameConfig) -> Result<(Board, MineSet)>;
}
