//! Board geometry and palette defaults.

/// Number of rows and columns on the board.
pub const BOARD_SIZE: usize = 19;

/// Column symbols, left to right. `I` is included, so labels run `A`..`S`.
pub const COLUMN_ALPHABET: &str = "ABCDEFGHIJKLMNOPQRS";

/// Distance between neighbouring cells, in surface units (em).
pub const CELL_SPACING: f32 = 2.0;

/// Offset of the first row and column from the container's origin.
pub const BOARD_MARGIN: f32 = 2.0;

/// Identifier of the container the grid is appended to.
pub const BOARD_CONTAINER: &str = "board";

/// Marker styles cycled through on each placement.
pub const DEFAULT_PALETTE: [&str; 2] = ["black-stone", "white-stone"];

/// Parameters consumed by [`GridBuilder`](crate::GridBuilder).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridConfig {
    pub size: usize,
    pub alphabet: &'static str,
    pub spacing: f32,
    pub margin: f32,
    pub container: &'static str,
}

impl GridConfig {
    /// Column symbol for a 0-based column index, if the alphabet has one.
    pub fn column_symbol(&self, col: usize) -> Option<char> {
        self.alphabet.chars().nth(col)
    }

    /// Column index of `symbol` within the first `size` alphabet symbols.
    pub fn column_index(&self, symbol: char) -> Option<usize> {
        self.alphabet.chars().take(self.size).position(|c| c == symbol)
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            size: BOARD_SIZE,
            alphabet: COLUMN_ALPHABET,
            spacing: CELL_SPACING,
            margin: BOARD_MARGIN,
            container: BOARD_CONTAINER,
        }
    }
}
