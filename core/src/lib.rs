#![no_std]

extern crate alloc;

use core::fmt;
use serde::{Deserialize, Serialize};

pub use answer::*;
pub use asset::*;
pub use burst::*;
pub use controller::*;
pub use error::*;
pub use grid::*;
pub use render::*;
pub use shuffle::*;
pub use stage::*;
pub use types::*;

mod answer;
mod asset;
mod burst;
mod controller;
mod error;
mod grid;
mod render;
mod shuffle;
mod stage;
mod types;

/// One of the two pictures the session walks through.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PuzzleSlot {
    First,
    Second,
}

impl PuzzleSlot {
    pub const ALL: [Self; 2] = [Self::First, Self::Second];

    /// 1-based number used in user-facing text.
    pub const fn number(self) -> u8 {
        match self {
            Self::First => 1,
            Self::Second => 2,
        }
    }

    pub const fn index(self) -> usize {
        match self {
            Self::First => 0,
            Self::Second => 1,
        }
    }

    pub const fn asset_path(self) -> &'static str {
        match self {
            Self::First => "/puzzle1.jpeg",
            Self::Second => "/puzzle2.jpeg",
        }
    }
}

impl fmt::Display for PuzzleSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "puzzle {}", self.number())
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum SelectOutcome {
    NoChange,
    Selected,
    Deselected,
    Swapped,
}

impl SelectOutcome {
    pub const fn has_update(self) -> bool {
        use SelectOutcome::*;
        match self {
            NoChange => false,
            Selected => true,
            Deselected => true,
            Swapped => true,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ControlOutcome {
    NoChange,
    Changed,
    /// A puzzle was just solved; the ticket has to be handed back through
    /// [`PuzzleController::advance`] once the pause elapses.
    Solved(AdvanceTicket),
    Advanced,
    /// "Yes" was chosen and the final page is up.
    Accepted,
}

impl ControlOutcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoChange)
    }

    pub const fn ticket(self) -> Option<AdvanceTicket> {
        match self {
            Self::Solved(ticket) => Some(ticket),
            _ => None,
        }
    }
}

impl From<SelectOutcome> for ControlOutcome {
    fn from(outcome: SelectOutcome) -> Self {
        if outcome.has_update() {
            Self::Changed
        } else {
            Self::NoChange
        }
    }
}
