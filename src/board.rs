use thiserror::Error;

/// Highest material class a wall can carry.
pub const MATERIAL_CLASSES: u8 = 3;

#[derive(Error, Debug, PartialEq)]
pub enum BoardError {
    #[error("board must be at least 3x3, got {0}x{0}")]
    TooSmall(usize),
}

/// Authoring-time state of a square map editor: an uneditable wall border,
/// toggleable interior cells, and a player spawn marker.
///
/// The board is a plain value; [`grid`](Board::grid) is a pure function of it
/// producing the rows consumed by [`Map::new`](crate::Map::new).
#[derive(Clone, PartialEq, Debug)]
pub struct Board {
    size: usize,
    cells: Vec<u8>,
    player: (usize, usize),
}

impl Board {
    /// Fresh board: border walls of class 1, empty interior, player centered.
    pub fn new(size: usize) -> Result<Self, BoardError> {
        if size < 3 {
            return Err(BoardError::TooSmall(size));
        }

        let mut cells = vec![0u8; size * size];
        for row in 0..size {
            for col in 0..size {
                if row == 0 || col == 0 || row == size - 1 || col == size - 1 {
                    cells[row * size + col] = 1;
                }
            }
        }

        Ok(Self {
            size,
            cells,
            player: (size / 2, size / 2),
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// `(row, col)` of the spawn marker.
    pub fn player_cell(&self) -> (usize, usize) {
        self.player
    }

    fn is_border(&self, row: usize, col: usize) -> bool {
        row == 0 || col == 0 || row == self.size - 1 || col == self.size - 1
    }

    /// Cycle an interior cell through the material classes
    /// (empty -> 1 -> 2 -> 3 -> empty). Border cells, the player cell and
    /// out-of-range indices are not editable; returns whether the board
    /// changed.
    pub fn toggle_wall(&mut self, row: usize, col: usize) -> bool {
        if row >= self.size || col >= self.size {
            return false;
        }
        if self.is_border(row, col) || self.player == (row, col) {
            return false;
        }

        let cell = &mut self.cells[row * self.size + col];
        *cell = (*cell + 1) % (MATERIAL_CLASSES + 1);
        true
    }

    /// Move the spawn marker. Border cells, walls and out-of-range indices
    /// are refused; returns whether the marker moved.
    pub fn place_player(&mut self, row: usize, col: usize) -> bool {
        if row >= self.size || col >= self.size {
            return false;
        }
        if self.is_border(row, col) || self.cells[row * self.size + col] > 0 {
            return false;
        }

        self.player = (row, col);
        true
    }

    /// Rows for the engine's map. The spawn marker is authoring state only
    /// and does not appear in the grid.
    pub fn grid(&self) -> Vec<Vec<u8>> {
        self.cells
            .chunks(self.size)
            .map(|row| row.to_vec())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_board_has_a_wall_border_and_centered_player() {
        let board = Board::new(10).unwrap();
        let grid = board.grid();

        assert_eq!(board.player_cell(), (5, 5));
        for i in 0..10 {
            assert_eq!(grid[0][i], 1);
            assert_eq!(grid[9][i], 1);
            assert_eq!(grid[i][0], 1);
            assert_eq!(grid[i][9], 1);
        }
        assert_eq!(grid[5][5], 0);
    }

    #[test]
    fn rejects_tiny_boards() {
        assert_eq!(Board::new(2).unwrap_err(), BoardError::TooSmall(2));
        assert!(Board::new(3).is_ok());
    }

    #[test]
    fn toggling_cycles_through_material_classes() {
        let mut board = Board::new(10).unwrap();
        for expected in [1u8, 2, 3, 0] {
            assert!(board.toggle_wall(3, 4));
            assert_eq!(board.grid()[3][4], expected);
        }
    }

    #[test]
    fn border_and_player_cells_are_not_editable() {
        let mut board = Board::new(10).unwrap();
        assert!(!board.toggle_wall(0, 4));
        assert!(!board.toggle_wall(4, 9));
        assert!(!board.toggle_wall(5, 5));
        assert!(!board.toggle_wall(10, 10));
        assert_eq!(board, Board::new(10).unwrap());
    }

    #[test]
    fn player_placement_refuses_borders_and_walls() {
        let mut board = Board::new(10).unwrap();
        board.toggle_wall(4, 4);

        assert!(!board.place_player(0, 3));
        assert!(!board.place_player(4, 4));
        assert!(!board.place_player(12, 3));
        assert_eq!(board.player_cell(), (5, 5));

        assert!(board.place_player(2, 7));
        assert_eq!(board.player_cell(), (2, 7));
    }
}
