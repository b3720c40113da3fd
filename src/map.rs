use glam::{vec2, Vec2};
use thiserror::Error;

/// Smallest supported map side, in cells.
pub const MIN_SIDE: usize = 3;

#[derive(Error, Debug, PartialEq)]
pub enum MapError {
    #[error("map must be at least {MIN_SIDE}x{MIN_SIDE} cells, got {rows}x{cols}")]
    TooSmall { rows: usize, cols: usize },
    #[error("map row {row} has {got} cells, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        got: usize,
    },
    #[error("cell dimensions must be positive, got {width}x{height}")]
    BadCellSize { width: f32, height: f32 },
}

/// Rectangular grid of material classes plus the world size of one cell.
///
/// 0 is passable; any positive value is a wall, the value selecting a render
/// material. The engine only ever reads the grid.
#[derive(Clone, PartialEq, Debug)]
pub struct Map {
    width: usize,
    height: usize,
    cells: Vec<u8>,
    cell_width: f32,
    cell_height: f32,
}

impl Map {
    pub fn new(rows: Vec<Vec<u8>>, cell_width: f32, cell_height: f32) -> Result<Self, MapError> {
        if !(cell_width > 0.0 && cell_height > 0.0) {
            return Err(MapError::BadCellSize {
                width: cell_width,
                height: cell_height,
            });
        }

        let height = rows.len();
        let width = rows.first().map(Vec::len).unwrap_or(0);
        if height < MIN_SIDE || width < MIN_SIDE {
            return Err(MapError::TooSmall {
                rows: height,
                cols: width,
            });
        }
        for (row, cells) in rows.iter().enumerate() {
            if cells.len() != width {
                return Err(MapError::Ragged {
                    row,
                    expected: width,
                    got: cells.len(),
                });
            }
        }

        Ok(Self {
            width,
            height,
            cells: rows.into_iter().flatten().collect(),
            cell_width,
            cell_height,
        })
    }

    /// Columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Rows.
    pub fn height(&self) -> usize {
        self.height
    }

    pub fn cell_width(&self) -> f32 {
        self.cell_width
    }

    pub fn cell_height(&self) -> f32 {
        self.cell_height
    }

    pub fn in_bounds(&self, row: isize, col: isize) -> bool {
        row >= 0 && col >= 0 && (row as usize) < self.height && (col as usize) < self.width
    }

    /// Material class of a cell; out-of-range indices read as empty.
    pub fn material(&self, row: usize, col: usize) -> u8 {
        if row < self.height && col < self.width {
            self.cells[row * self.width + col]
        } else {
            0
        }
    }

    pub fn is_wall(&self, row: isize, col: isize) -> bool {
        self.in_bounds(row, col) && self.material(row as usize, col as usize) > 0
    }

    /// `(row, col)` of the cell containing a world position. Positions left
    /// of or above the grid yield negative indices, which `in_bounds` rejects.
    pub fn cell_indices(&self, pos: Vec2) -> (isize, isize) {
        (
            (pos.y / self.cell_height).floor() as isize,
            (pos.x / self.cell_width).floor() as isize,
        )
    }

    /// World position of the center of a cell.
    pub fn cell_center(&self, row: usize, col: usize) -> Vec2 {
        vec2(
            (col as f32 + 0.5) * self.cell_width,
            (row as f32 + 0.5) * self.cell_height,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(fill: u8, size: usize) -> Vec<Vec<u8>> {
        vec![vec![fill; size]; size]
    }

    #[test]
    fn rejects_too_small_grids() {
        let err = Map::new(square(0, 2), 50.0, 50.0).unwrap_err();
        assert_eq!(err, MapError::TooSmall { rows: 2, cols: 2 });
        assert!(Map::new(Vec::new(), 50.0, 50.0).is_err());
    }

    #[test]
    fn rejects_ragged_grids() {
        let mut rows = square(0, 4);
        rows[2].push(1);
        let err = Map::new(rows, 50.0, 50.0).unwrap_err();
        assert_eq!(
            err,
            MapError::Ragged {
                row: 2,
                expected: 4,
                got: 5
            }
        );
    }

    #[test]
    fn rejects_degenerate_cell_sizes() {
        assert!(matches!(
            Map::new(square(0, 4), 0.0, 50.0),
            Err(MapError::BadCellSize { .. })
        ));
        assert!(matches!(
            Map::new(square(0, 4), 50.0, -1.0),
            Err(MapError::BadCellSize { .. })
        ));
    }

    #[test]
    fn material_lookup_is_row_major() {
        let mut rows = square(0, 4);
        rows[1][2] = 3;
        let map = Map::new(rows, 50.0, 50.0).unwrap();
        assert_eq!(map.material(1, 2), 3);
        assert_eq!(map.material(2, 1), 0);
        assert_eq!(map.material(9, 9), 0);
    }

    #[test]
    fn cell_indices_floor_toward_negative_infinity() {
        let map = Map::new(square(0, 4), 50.0, 50.0).unwrap();
        assert_eq!(map.cell_indices(vec2(275.0, 30.0)), (0, 5));
        assert_eq!(map.cell_indices(vec2(-1.0, 120.0)), (2, -1));
        assert!(!map.in_bounds(2, -1));
        assert!(!map.in_bounds(0, 5));
        assert!(map.in_bounds(3, 3));
    }

    #[test]
    fn cell_center_round_trips_through_indices() {
        let map = Map::new(square(0, 5), 40.0, 60.0).unwrap();
        let center = map.cell_center(2, 4);
        assert_eq!(center, vec2(180.0, 150.0));
        assert_eq!(map.cell_indices(center), (2, 4));
    }
}
