use alloc::string::String;
use serde::{Deserialize, Serialize};

use crate::*;

/// Intrinsic size of a loaded puzzle picture.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageInfo {
    pub width: u32,
    pub height: u32,
}

impl ImageInfo {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Part of the picture that belongs in slot `correct_position`.
    pub fn tile_source(&self, correct_position: TileIndex) -> Rect {
        let (row, column) = cell_of(correct_position);
        let side = f64::from(GRID_SIDE);
        let width = f64::from(self.width) / side;
        let height = f64::from(self.height) / side;
        Rect::new(
            f64::from(column) * width,
            f64::from(row) * height,
            width,
            height,
        )
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum LoadStatus {
    Loading,
    Ready,
    Failed(PuzzleError),
}

/// Collects the two independent image loads; the board only exists once both succeeded.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AssetGate {
    images: [Option<ImageInfo>; 2],
    failure: Option<PuzzleError>,
}

impl AssetGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_loaded(&mut self, slot: PuzzleSlot, info: ImageInfo) -> LoadStatus {
        if info.is_empty() {
            return self.record_failed(slot, "image has no pixels".into());
        }
        self.images[slot.index()] = Some(info);
        self.status()
    }

    /// Records a failed load; the first failure sticks.
    pub fn record_failed(&mut self, slot: PuzzleSlot, reason: String) -> LoadStatus {
        log::error!("Error loading {}: {}", slot, reason);
        if self.failure.is_none() {
            self.failure = Some(PuzzleError::AssetLoadFailure { slot, reason });
        }
        self.status()
    }

    pub fn status(&self) -> LoadStatus {
        if let Some(err) = &self.failure {
            LoadStatus::Failed(err.clone())
        } else if self.images.iter().all(Option::is_some) {
            LoadStatus::Ready
        } else {
            LoadStatus::Loading
        }
    }

    pub fn image(&self, slot: PuzzleSlot) -> Option<ImageInfo> {
        self.images[slot.index()]
    }
}
