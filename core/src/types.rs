use serde::{Deserialize, Serialize};

/// Slot or tile number on the board, row-major.
pub type TileIndex = u8;

/// Tiles along one side of the board.
pub const GRID_SIDE: TileIndex = 3;

/// Tiles on a board.
pub const TILE_COUNT: usize = (GRID_SIDE as usize) * (GRID_SIDE as usize);

/// `(row, column)` of a slot.
pub type Cell = (TileIndex, TileIndex);

pub const fn cell_of(index: TileIndex) -> Cell {
    (index / GRID_SIDE, index % GRID_SIDE)
}

/// Row-major index of `(row, column)`, only when it lies on the board.
pub const fn index_of((row, column): Cell) -> Option<TileIndex> {
    if row < GRID_SIDE && column < GRID_SIDE {
        Some(row * GRID_SIDE + column)
    } else {
        None
    }
}

/// Axis-aligned rectangle in pixels.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub const fn square(x: f64, y: f64, side: f64) -> Self {
        Self::new(x, y, side, side)
    }

    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x && y >= self.y && x < self.x + self.width && y < self.y + self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_and_index_agree_on_every_slot() {
        for index in 0..TILE_COUNT as TileIndex {
            assert_eq!(index_of(cell_of(index)), Some(index));
        }
        assert_eq!(cell_of(5), (1, 2));
    }

    #[test]
    fn index_of_rejects_cells_off_the_board() {
        assert_eq!(index_of((3, 0)), None);
        assert_eq!(index_of((0, 3)), None);
        assert_eq!(index_of((2, 2)), Some(8));
    }

    #[test]
    fn rect_contains_is_half_open() {
        let rect = Rect::square(0.0, 0.0, 600.0);
        assert!(rect.contains(0.0, 599.9));
        assert!(!rect.contains(600.0, 10.0));
        assert!(!rect.contains(-0.1, 10.0));
    }
}
