use core::ops::Index;
use serde::{Deserialize, Serialize};

use crate::*;

/// A single piece of the picture.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    pub id: TileIndex,
    /// Slot the piece belongs to once the picture is complete.
    pub correct_position: TileIndex,
}

impl Tile {
    pub const fn is_home(self, slot: TileIndex) -> bool {
        self.correct_position == slot
    }
}

/// Board of tiles indexed by the slot they currently occupy.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TileGrid {
    tiles: [Tile; TILE_COUNT],
    selected: Option<TileIndex>,
}

impl TileGrid {
    /// Builds a board where slot `i` holds the piece whose correct slot is `order[i]`.
    pub fn from_order(order: &[usize]) -> Result<Self> {
        if order.len() != TILE_COUNT {
            return Err(PuzzleError::InvalidPermutation);
        }

        let mut seen = [false; TILE_COUNT];
        let mut tiles = [Tile {
            id: 0,
            correct_position: 0,
        }; TILE_COUNT];

        for (slot, &correct) in order.iter().enumerate() {
            if correct >= TILE_COUNT || seen[correct] {
                return Err(PuzzleError::InvalidPermutation);
            }
            seen[correct] = true;
            tiles[slot] = Tile {
                id: slot as TileIndex,
                correct_position: correct as TileIndex,
            };
        }

        Ok(Self {
            tiles,
            selected: None,
        })
    }

    pub fn solved() -> Self {
        let mut tiles = [Tile {
            id: 0,
            correct_position: 0,
        }; TILE_COUNT];
        for (slot, tile) in tiles.iter_mut().enumerate() {
            tile.id = slot as TileIndex;
            tile.correct_position = slot as TileIndex;
        }
        Self {
            tiles,
            selected: None,
        }
    }

    pub fn shuffled<S: Shuffler + ?Sized>(shuffler: &mut S) -> Self {
        let order = shuffler.shuffle(TILE_COUNT);
        Self::from_order(&order).unwrap_or_else(|err| {
            log::warn!("Shuffler produced {:?} ({}), using solved board", order, err);
            Self::solved()
        })
    }

    pub fn tiles(&self) -> &[Tile; TILE_COUNT] {
        &self.tiles
    }

    pub fn tile_at(&self, slot: TileIndex) -> Option<Tile> {
        self.tiles.get(usize::from(slot)).copied()
    }

    pub fn selected(&self) -> Option<TileIndex> {
        self.selected
    }

    pub fn is_selected(&self, slot: TileIndex) -> bool {
        self.selected == Some(slot)
    }

    /// Correct position of the piece in each slot, in slot order.
    pub fn correct_order(&self) -> [TileIndex; TILE_COUNT] {
        self.tiles.map(|tile| tile.correct_position)
    }

    pub fn is_solved(&self) -> bool {
        self.tiles
            .iter()
            .enumerate()
            .all(|(slot, tile)| tile.is_home(slot as TileIndex))
    }

    pub fn clear_selection(&mut self) -> bool {
        self.selected.take().is_some()
    }

    /// Marks `slot` as picked when nothing is picked yet.
    pub fn select(&mut self, slot: TileIndex) -> SelectOutcome {
        if self.is_solved() || self.validate_slot(slot).is_err() || self.selected.is_some() {
            return SelectOutcome::NoChange;
        }
        self.selected = Some(slot);
        SelectOutcome::Selected
    }

    /// Second click of a pair: swaps with the picked tile, or drops the pick when
    /// the same slot is clicked again.
    pub fn swap_or_select(&mut self, slot: TileIndex) -> SelectOutcome {
        if self.is_solved() || self.validate_slot(slot).is_err() {
            return SelectOutcome::NoChange;
        }

        match self.selected.take() {
            None => self.select(slot),
            Some(picked) if picked == slot => SelectOutcome::Deselected,
            Some(picked) => {
                self.tiles.swap(usize::from(picked), usize::from(slot));
                SelectOutcome::Swapped
            }
        }
    }

    pub fn swap(&mut self, a: TileIndex, b: TileIndex) -> Result<()> {
        let a = self.validate_slot(a)?;
        let b = self.validate_slot(b)?;
        self.tiles.swap(usize::from(a), usize::from(b));
        Ok(())
    }

    fn validate_slot(&self, slot: TileIndex) -> Result<TileIndex> {
        if usize::from(slot) < TILE_COUNT {
            Ok(slot)
        } else {
            Err(PuzzleError::InvalidTileIndex)
        }
    }
}

impl Index<TileIndex> for TileGrid {
    type Output = Tile;

    fn index(&self, slot: TileIndex) -> &Self::Output {
        &self.tiles[usize::from(slot)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(order: &[usize]) -> TileGrid {
        TileGrid::from_order(order).unwrap()
    }

    #[test]
    fn identity_order_is_solved() {
        assert!(grid(&[0, 1, 2, 3, 4, 5, 6, 7, 8]).is_solved());
        assert!(TileGrid::solved().is_solved());
    }

    #[test]
    fn single_transposition_is_not_solved() {
        assert!(!grid(&[0, 1, 2, 3, 5, 4, 6, 7, 8]).is_solved());
    }

    #[test]
    fn from_order_rejects_non_permutations() {
        assert_eq!(
            TileGrid::from_order(&[0, 1, 2]),
            Err(PuzzleError::InvalidPermutation)
        );
        assert_eq!(
            TileGrid::from_order(&[0, 0, 2, 3, 4, 5, 6, 7, 8]),
            Err(PuzzleError::InvalidPermutation)
        );
        assert_eq!(
            TileGrid::from_order(&[0, 1, 2, 3, 4, 5, 6, 7, 9]),
            Err(PuzzleError::InvalidPermutation)
        );
    }

    #[test]
    fn tile_ids_follow_the_initial_slot() {
        let board = grid(&[4, 0, 1, 2, 3, 5, 6, 7, 8]);
        assert_eq!(board[0], Tile { id: 0, correct_position: 4 });
        assert_eq!(board.tile_at(8).map(|tile| tile.id), Some(8));
        assert_eq!(board.tile_at(9), None);
    }

    #[test]
    fn swapping_twice_restores_the_board() {
        let original = grid(&[3, 1, 4, 0, 5, 8, 2, 6, 7]);
        let mut board = original.clone();

        board.swap(2, 7).unwrap();
        assert_ne!(board, original);
        board.swap(2, 7).unwrap();

        assert_eq!(board, original);
    }

    #[test]
    fn swap_rejects_out_of_range_slots() {
        let mut board = TileGrid::solved();
        assert_eq!(board.swap(0, 9), Err(PuzzleError::InvalidTileIndex));
        assert!(board.is_solved());
    }

    #[test]
    fn selecting_the_same_slot_twice_only_clears_the_pick() {
        let original = grid(&[1, 0, 2, 3, 4, 5, 6, 7, 8]);
        let mut board = original.clone();

        assert_eq!(board.swap_or_select(4), SelectOutcome::Selected);
        assert_eq!(board.selected(), Some(4));
        assert_eq!(board.swap_or_select(4), SelectOutcome::Deselected);

        assert_eq!(board.selected(), None);
        assert_eq!(board.correct_order(), original.correct_order());
    }

    #[test]
    fn select_keeps_an_existing_pick() {
        let mut board = grid(&[1, 0, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(board.select(3), SelectOutcome::Selected);
        assert_eq!(board.select(5), SelectOutcome::NoChange);
        assert_eq!(board.selected(), Some(3));
    }

    #[test]
    fn solving_scenario_swaps_pairs_until_identity() {
        let mut board = grid(&[2, 0, 1, 3, 4, 5, 6, 7, 8]);

        board.swap_or_select(0);
        assert_eq!(board.swap_or_select(1), SelectOutcome::Swapped);
        assert_eq!(board.correct_order(), [0, 2, 1, 3, 4, 5, 6, 7, 8]);
        assert_eq!(board.selected(), None);
        assert!(!board.is_solved());

        board.swap_or_select(1);
        board.swap_or_select(2);
        assert_eq!(board.correct_order(), [0, 1, 2, 3, 4, 5, 6, 7, 8]);
        assert!(board.is_solved());
    }

    #[test]
    fn solved_board_ignores_input() {
        let mut board = TileGrid::solved();
        assert_eq!(board.select(0), SelectOutcome::NoChange);
        assert_eq!(board.swap_or_select(1), SelectOutcome::NoChange);
        assert_eq!(board.selected(), None);
    }

    #[test]
    fn out_of_range_slot_is_ignored() {
        let mut board = grid(&[1, 0, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(board.swap_or_select(9), SelectOutcome::NoChange);
        assert_eq!(board.selected(), None);
    }
}
