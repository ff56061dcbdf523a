use serde::{Deserialize, Serialize};

use crate::*;

/// Pixel layout of the drawing surface: a square of `GRID_SIDE` × `GRID_SIDE` cells.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SurfaceGeometry {
    pub tile_size: f64,
}

impl Default for SurfaceGeometry {
    fn default() -> Self {
        Self { tile_size: 200.0 }
    }
}

impl SurfaceGeometry {
    pub fn side(&self) -> f64 {
        self.tile_size * f64::from(GRID_SIDE)
    }

    pub fn bounds(&self) -> Rect {
        Rect::square(0.0, 0.0, self.side())
    }

    pub fn tile_dest(&self, slot: TileIndex) -> Rect {
        let (row, column) = cell_of(slot);
        Rect::square(
            f64::from(column) * self.tile_size,
            f64::from(row) * self.tile_size,
            self.tile_size,
        )
    }

    /// Maps a surface-local click to the slot under it.
    pub fn pick(&self, x: f64, y: f64) -> Result<TileIndex> {
        if !x.is_finite() || !y.is_finite() || x < 0.0 || y < 0.0 || self.tile_size <= 0.0 {
            return Err(PuzzleError::InvalidClickCoordinate);
        }

        // non-negative, so truncation is floor
        let column = x / self.tile_size;
        let row = y / self.tile_size;
        let side = f64::from(GRID_SIDE);
        if column >= side || row >= side {
            return Err(PuzzleError::InvalidClickCoordinate);
        }

        index_of((row as TileIndex, column as TileIndex))
            .ok_or(PuzzleError::InvalidClickCoordinate)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Highlight {
    Normal,
    Selected,
}

impl Highlight {
    pub const fn stroke_color(self) -> &'static str {
        match self {
            Self::Normal => "#666",
            Self::Selected => "#ef4444",
        }
    }

    pub const fn line_width(self) -> f64 {
        match self {
            Self::Normal => 2.0,
            Self::Selected => 4.0,
        }
    }
}

/// Copy `source` of the picture into `dest` on the surface, then outline it.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TileDraw {
    pub source: Rect,
    pub dest: Rect,
    pub highlight: Highlight,
}

pub trait RenderSurface {
    type Error;

    fn clear(&mut self, area: Rect) -> core::result::Result<(), Self::Error>;

    fn draw_tile(&mut self, draw: &TileDraw) -> core::result::Result<(), Self::Error>;
}

pub fn draw_list(
    grid: &TileGrid,
    image: ImageInfo,
    geometry: SurfaceGeometry,
) -> impl Iterator<Item = TileDraw> + '_ {
    grid.tiles().iter().enumerate().map(move |(slot, tile)| {
        let slot = slot as TileIndex;
        TileDraw {
            source: image.tile_source(tile.correct_position),
            dest: geometry.tile_dest(slot),
            highlight: if grid.is_selected(slot) {
                Highlight::Selected
            } else {
                Highlight::Normal
            },
        }
    })
}

/// Repaints the whole board.
pub fn paint<R: RenderSurface + ?Sized>(
    surface: &mut R,
    grid: &TileGrid,
    image: ImageInfo,
    geometry: SurfaceGeometry,
) -> core::result::Result<(), R::Error> {
    surface.clear(geometry.bounds())?;
    for draw in draw_list(grid, image, geometry) {
        surface.draw_tile(&draw)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[derive(Default)]
    struct Recorder {
        cleared: Option<Rect>,
        draws: Vec<TileDraw>,
        fail_after: Option<usize>,
    }

    impl RenderSurface for Recorder {
        type Error = &'static str;

        fn clear(&mut self, area: Rect) -> core::result::Result<(), Self::Error> {
            self.cleared = Some(area);
            Ok(())
        }

        fn draw_tile(&mut self, draw: &TileDraw) -> core::result::Result<(), Self::Error> {
            if self.fail_after == Some(self.draws.len()) {
                return Err("context lost");
            }
            self.draws.push(*draw);
            Ok(())
        }
    }

    #[test]
    fn pick_maps_pixels_to_row_major_slots() {
        let geometry = SurfaceGeometry::default();
        assert_eq!(geometry.pick(0.0, 0.0), Ok(0));
        assert_eq!(geometry.pick(250.0, 10.0), Ok(1));
        assert_eq!(geometry.pick(599.0, 599.0), Ok(8));
        assert_eq!(geometry.pick(10.0, 450.0), Ok(6));
    }

    #[test]
    fn pick_rejects_clicks_off_the_board() {
        let geometry = SurfaceGeometry::default();
        for (x, y) in [
            (600.0, 10.0),
            (10.0, 600.0),
            (-1.0, 10.0),
            (10.0, -0.5),
            (f64::NAN, 10.0),
            (f64::INFINITY, 10.0),
        ] {
            assert_eq!(
                geometry.pick(x, y),
                Err(PuzzleError::InvalidClickCoordinate),
                "({x}, {y})"
            );
        }
    }

    #[test]
    fn paint_draws_each_piece_from_its_correct_region() {
        let mut grid = TileGrid::from_order(&[8, 1, 2, 3, 4, 5, 6, 7, 0]).unwrap();
        grid.select(0);
        let image = ImageInfo::new(300, 300);
        let mut surface = Recorder::default();

        paint(&mut surface, &grid, image, SurfaceGeometry::default()).unwrap();

        assert_eq!(surface.cleared, Some(Rect::square(0.0, 0.0, 600.0)));
        assert_eq!(surface.draws.len(), TILE_COUNT);
        assert_eq!(
            surface.draws[0],
            TileDraw {
                source: Rect::square(200.0, 200.0, 100.0),
                dest: Rect::square(0.0, 0.0, 200.0),
                highlight: Highlight::Selected,
            }
        );
        assert_eq!(surface.draws[8].source, Rect::square(0.0, 0.0, 100.0));
        assert_eq!(surface.draws[8].dest, Rect::square(400.0, 400.0, 200.0));
        assert_eq!(surface.draws[8].highlight, Highlight::Normal);
    }

    #[test]
    fn paint_stops_at_the_first_surface_error() {
        let mut surface = Recorder {
            fail_after: Some(3),
            ..Recorder::default()
        };
        let result = paint(
            &mut surface,
            &TileGrid::solved(),
            ImageInfo::new(90, 90),
            SurfaceGeometry::default(),
        );
        assert_eq!(result, Err("context lost"));
        assert_eq!(surface.draws.len(), 3);
    }
}
