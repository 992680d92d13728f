//! Board coordinates and their textual labels.

use alloc::string::String;
use core::fmt::Write;

use crate::config::GridConfig;

/// 0-based board coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Label of this position: column symbol followed by the 1-based row,
    /// e.g. `(0, 0)` is `A1` and `(18, 18)` is `S19`. Returns `None` when the
    /// column lies outside the alphabet.
    pub fn label(&self, config: &GridConfig) -> Option<String> {
        let symbol = config.column_symbol(self.col)?;
        let mut label = String::new();
        label.push(symbol);
        let _ = write!(label, "{}", self.row + 1);
        Some(label)
    }

    /// Parse user input such as `d4` or ` Q16 ` into a position on the board
    /// described by `config`. Column symbols are matched case-insensitively.
    pub fn parse(input: &str, config: &GridConfig) -> Option<Self> {
        let input = input.trim();
        let mut chars = input.chars();
        let symbol = chars.next()?.to_ascii_uppercase();
        let col = config.column_index(symbol)?;
        let digits = chars.as_str();
        if digits.is_empty()
            || digits.starts_with('0')
            || !digits.bytes().all(|b| b.is_ascii_digit())
        {
            return None;
        }
        let row: usize = digits.parse().ok()?;
        if row == 0 || row > config.size {
            return None;
        }
        Some(Self { row: row - 1, col })
    }
}

/// Normalize user input into a canonical label, falling back to the trimmed
/// input when it does not name a board position. The fallback keeps unknown
/// labels intact so the placement session can report them.
pub fn normalize_label(input: &str, config: &GridConfig) -> String {
    Position::parse(input, config)
        .and_then(|p| p.label(config))
        .unwrap_or_else(|| String::from(input.trim()))
}
