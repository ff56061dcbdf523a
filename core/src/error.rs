use alloc::string::String;
use thiserror::Error;

use crate::PuzzleSlot;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PuzzleError {
    #[error("Click outside of the puzzle board")]
    InvalidClickCoordinate,
    #[error("Tile index out of range")]
    InvalidTileIndex,
    #[error("Tile order is not a permutation of the board slots")]
    InvalidPermutation,
    #[error("Failed to load {slot}: {reason}")]
    AssetLoadFailure { slot: PuzzleSlot, reason: String },
}

pub type Result<T> = core::result::Result<T, PuzzleError>;
