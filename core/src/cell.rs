use serde::{Deserialize, Serialize};

/// Contents of a cell, fixed at generation time.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellValue {
    Mine,
    /// Safe cell holding the number of adjacent mines, `0..=8`.
    Safe(u8),
}

impl CellValue {
    pub const fn is_mine(self) -> bool {
        matches!(self, Self::Mine)
    }

    pub const fn is_zero(self) -> bool {
        matches!(self, Self::Safe(0))
    }

    pub const fn count(self) -> Option<u8> {
        match self {
            Self::Mine => None,
            Self::Safe(count) => Some(count),
        }
    }
}

impl Default for CellValue {
    fn default() -> Self {
        Self::Safe(0)
    }
}

/// `-1` for a mine, the adjacency count otherwise.
impl From<CellValue> for i8 {
    fn from(value: CellValue) -> Self {
        match value {
            CellValue::Mine => -1,
            CellValue::Safe(count) => count as i8,
        }
    }
}

/// Player annotation on a hidden cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mark {
    #[default]
    Clear,
    Flag,
    Question,
}

/// Which marks a player can cycle through.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MarkCycle {
    /// clear -> flag -> clear
    FlagOnly,
    /// clear -> flag -> question -> clear
    #[default]
    FlagQuestion,
}

impl MarkCycle {
    pub const fn next(self, mark: Mark) -> Mark {
        use Mark::*;
        match (self, mark) {
            (_, Clear) => Flag,
            (Self::FlagOnly, Flag) => Clear,
            (Self::FlagQuestion, Flag) => Question,
            (_, Question) => Clear,
        }
    }

    /// Number of steps before a mark comes back to where it started.
    pub const fn period(self) -> usize {
        match self {
            Self::FlagOnly => 2,
            Self::FlagQuestion => 3,
        }
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub value: CellValue,
    pub revealed: bool,
    pub mark: Mark,
}

impl Cell {
    pub const fn is_hidden(self) -> bool {
        !self.revealed
    }

    pub const fn is_flagged(self) -> bool {
        !self.revealed && matches!(self.mark, Mark::Flag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_converts_to_signed_convention() {
        assert_eq!(i8::from(CellValue::Mine), -1);
        assert_eq!(i8::from(CellValue::Safe(0)), 0);
        assert_eq!(i8::from(CellValue::Safe(8)), 8);
    }

    #[test]
    fn cycles_return_to_clear_after_their_period() {
        for cycle in [MarkCycle::FlagOnly, MarkCycle::FlagQuestion] {
            let mut mark = Mark::Clear;
            for step in 1..=cycle.period() {
                mark = cycle.next(mark);
                assert_eq!(mark == Mark::Clear, step == cycle.period(), "{cycle:?} step {step}");
            }
        }
    }

    #[test]
    fn flag_only_cycle_drops_stray_question_marks() {
        assert_eq!(MarkCycle::FlagOnly.next(Mark::Question), Mark::Clear);
    }

    #[test]
    fn new_cell_is_hidden_zero_and_clear() {
        let cell = Cell::default();
        assert!(cell.is_hidden());
        assert!(!cell.is_flagged());
        assert_eq!(cell.value, CellValue::Safe(0));
        assert_eq!(cell.mark, Mark::Clear);
    }
}
