use serde::{Deserialize, Serialize};

use crate::PuzzleSlot;

/// Where the session currently is.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Stage {
    #[default]
    Puzzle1Active,
    Puzzle1SolvedPause,
    Puzzle2Active,
    Puzzle2SolvedPause,
    QuestionShown,
    FinalShown,
}

impl Stage {
    /// Puzzle shown on the board, including during the pause after solving it.
    pub const fn active_puzzle(self) -> Option<PuzzleSlot> {
        use Stage::*;
        match self {
            Puzzle1Active | Puzzle1SolvedPause => Some(PuzzleSlot::First),
            Puzzle2Active | Puzzle2SolvedPause => Some(PuzzleSlot::Second),
            QuestionShown | FinalShown => None,
        }
    }

    pub const fn is_paused(self) -> bool {
        matches!(self, Self::Puzzle1SolvedPause | Self::Puzzle2SolvedPause)
    }

    pub const fn accepts_tile_input(self) -> bool {
        matches!(self, Self::Puzzle1Active | Self::Puzzle2Active)
    }

    /// Stage entered when the board of an active puzzle is complete.
    pub const fn solved(self) -> Option<Self> {
        use Stage::*;
        match self {
            Puzzle1Active => Some(Puzzle1SolvedPause),
            Puzzle2Active => Some(Puzzle2SolvedPause),
            _ => None,
        }
    }

    /// Stage entered once the pause after a solve has elapsed.
    pub const fn after_pause(self) -> Option<Self> {
        use Stage::*;
        match self {
            Puzzle1SolvedPause => Some(Puzzle2Active),
            Puzzle2SolvedPause => Some(QuestionShown),
            _ => None,
        }
    }
}
