use bitflags::bitflags;
use core::time::Duration;
use serde::{Deserialize, Serialize};

use crate::*;

bitflags! {
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
    pub struct SolvedPuzzles: u8 {
        const FIRST  = 1;
        const SECOND = 1 << 1;
    }
}

impl SolvedPuzzles {
    pub const fn of(slot: PuzzleSlot) -> Self {
        match slot {
            PuzzleSlot::First => Self::FIRST,
            PuzzleSlot::Second => Self::SECOND,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StageTiming {
    /// How long a solved board stays up before the next stage.
    pub solved_pause: Duration,
    pub burst: BurstPlan,
}

impl Default for StageTiming {
    fn default() -> Self {
        Self {
            solved_pause: Duration::from_millis(1500),
            burst: BurstPlan::default(),
        }
    }
}

/// Handle for a pending stage advance. Only valid for the session generation and
/// stage it was issued in.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdvanceTicket {
    pub generation: u32,
    pub from: Stage,
}

/// Everything a page view remembers.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PuzzleSession {
    stage: Stage,
    grid: TileGrid,
    solved: SolvedPuzzles,
    no_clicks: u32,
    generation: u32,
}

impl PuzzleSession {
    fn new(grid: TileGrid, generation: u32) -> Self {
        Self {
            stage: Stage::default(),
            grid,
            solved: SolvedPuzzles::empty(),
            no_clicks: 0,
            generation,
        }
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn grid(&self) -> &TileGrid {
        &self.grid
    }

    pub fn solved(&self) -> SolvedPuzzles {
        self.solved
    }

    pub fn is_solved(&self, slot: PuzzleSlot) -> bool {
        self.solved.contains(SolvedPuzzles::of(slot))
    }

    pub fn no_clicks(&self) -> u32 {
        self.no_clicks
    }

    pub fn generation(&self) -> u32 {
        self.generation
    }
}

/// Drives a session from user input and timer callbacks.
#[derive(Clone, Debug)]
pub struct PuzzleController<S = RandomShuffler> {
    session: PuzzleSession,
    shuffler: S,
    timing: StageTiming,
    geometry: SurfaceGeometry,
}

impl<S: Shuffler> PuzzleController<S> {
    pub fn new(mut shuffler: S, timing: StageTiming) -> Self {
        let grid = TileGrid::shuffled(&mut shuffler);
        Self {
            session: PuzzleSession::new(grid, 0),
            shuffler,
            timing,
            geometry: SurfaceGeometry::default(),
        }
    }

    pub fn with_geometry(mut self, geometry: SurfaceGeometry) -> Self {
        self.geometry = geometry;
        self
    }

    pub fn session(&self) -> &PuzzleSession {
        &self.session
    }

    pub fn stage(&self) -> Stage {
        self.session.stage
    }

    pub fn grid(&self) -> &TileGrid {
        &self.session.grid
    }

    pub fn no_clicks(&self) -> u32 {
        self.session.no_clicks
    }

    pub fn timing(&self) -> &StageTiming {
        &self.timing
    }

    pub fn geometry(&self) -> SurfaceGeometry {
        self.geometry
    }

    /// Runs the solved check on the current board. A fresh shuffle can come out
    /// already solved, in which case it counts as solved right away.
    pub fn settle(&mut self) -> ControlOutcome {
        let stage = self.session.stage;
        let (Some(slot), Some(next)) = (stage.active_puzzle(), stage.solved()) else {
            return ControlOutcome::NoChange;
        };

        if !self.session.grid.is_solved() {
            return ControlOutcome::NoChange;
        }

        let flag = SolvedPuzzles::of(slot);
        if self.session.solved.contains(flag) {
            return ControlOutcome::NoChange;
        }

        self.session.solved.insert(flag);
        self.session.grid.clear_selection();
        self.session.stage = next;
        log::debug!("{} solved, {:?} -> {:?}", slot, stage, next);

        ControlOutcome::Solved(AdvanceTicket {
            generation: self.session.generation,
            from: next,
        })
    }

    /// Handles a click in surface pixels. Clicks off the board are dropped.
    pub fn click(&mut self, x: f64, y: f64) -> ControlOutcome {
        match self.geometry.pick(x, y) {
            Ok(slot) => self.pick(slot),
            Err(err) => {
                log::trace!("click ({}, {}) ignored: {}", x, y, err);
                ControlOutcome::NoChange
            }
        }
    }

    pub fn pick(&mut self, slot: TileIndex) -> ControlOutcome {
        if !self.session.stage.accepts_tile_input() {
            log::trace!("pick {} ignored in {:?}", slot, self.session.stage);
            return ControlOutcome::NoChange;
        }

        let outcome = self.session.grid.swap_or_select(slot);
        log::trace!("pick {}: {:?}", slot, outcome);

        match outcome {
            SelectOutcome::Swapped => match self.settle() {
                ControlOutcome::NoChange => ControlOutcome::Changed,
                solved => solved,
            },
            other => other.into(),
        }
    }

    /// Called when the pause timer behind `ticket` fires.
    pub fn advance(&mut self, ticket: AdvanceTicket) -> ControlOutcome {
        let stage = self.session.stage;
        if ticket.generation != self.session.generation || ticket.from != stage {
            log::debug!(
                "stale advance {:?} ignored (now {:?}, generation {})",
                ticket,
                stage,
                self.session.generation
            );
            return ControlOutcome::NoChange;
        }

        let Some(next) = stage.after_pause() else {
            return ControlOutcome::NoChange;
        };

        if next.accepts_tile_input() {
            self.session.grid = TileGrid::shuffled(&mut self.shuffler);
        } else {
            self.session.grid.clear_selection();
        }
        self.session.stage = next;
        log::debug!("{:?} -> {:?}", stage, next);

        match self.settle() {
            ControlOutcome::NoChange => ControlOutcome::Advanced,
            solved => solved,
        }
    }

    pub fn answer_yes(&mut self) -> ControlOutcome {
        if self.session.stage != Stage::QuestionShown {
            return ControlOutcome::NoChange;
        }
        self.session.stage = Stage::FinalShown;
        log::debug!("yes after {} refusals", self.session.no_clicks);
        ControlOutcome::Accepted
    }

    pub fn answer_no(&mut self) -> ControlOutcome {
        if self.session.stage != Stage::QuestionShown || !no_available(self.session.no_clicks) {
            return ControlOutcome::NoChange;
        }
        self.session.no_clicks += 1;
        log::debug!("no #{}", self.session.no_clicks);
        ControlOutcome::Changed
    }

    /// Starts over from the first puzzle. Tickets handed out before this are void.
    pub fn reset(&mut self) -> ControlOutcome {
        let generation = self.session.generation.wrapping_add(1);
        let grid = TileGrid::shuffled(&mut self.shuffler);
        self.session = PuzzleSession::new(grid, generation);
        log::debug!("session reset, generation {}", generation);

        match self.settle() {
            ControlOutcome::NoChange => ControlOutcome::Changed,
            solved => solved,
        }
    }
}
