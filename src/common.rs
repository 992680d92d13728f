//! Error types shared by the grid builder and the placement session.

use alloc::string::String;

/// Configuration errors raised while building the board. These are fatal at
/// startup; nothing is mutated when one is returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Board dimension is zero.
    ZeroSize,
    /// Column alphabet holds fewer symbols than the board has columns.
    AlphabetTooShort { required: usize, available: usize },
    /// The same column symbol appears twice among the symbols in use.
    DuplicateColumnSymbol(char),
    /// Surface has no container with the configured identifier.
    MissingContainer(String),
    /// A palette must hold at least one style.
    EmptyPalette,
    /// A cell with this identifier is already attached to the surface.
    DuplicateCell(String),
}

impl core::fmt::Display for GridError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GridError::ZeroSize => write!(f, "Board size must be at least 1"),
            GridError::AlphabetTooShort {
                required,
                available,
            } => write!(
                f,
                "Column alphabet has {} symbols, board needs {}",
                available, required
            ),
            GridError::DuplicateColumnSymbol(c) => {
                write!(f, "Column symbol '{}' appears more than once", c)
            }
            GridError::MissingContainer(id) => write!(f, "No container named '{}'", id),
            GridError::EmptyPalette => write!(f, "Palette must contain at least one style"),
            GridError::DuplicateCell(id) => write!(f, "Cell '{}' already exists", id),
        }
    }
}

/// Errors raised when a placement cannot be applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlacementError {
    /// No cell carries the given position label.
    NoSuchCell(String),
}

impl core::fmt::Display for PlacementError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            PlacementError::NoSuchCell(label) => write!(f, "No such cell: {}", label),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GridError {}

#[cfg(feature = "std")]
impl std::error::Error for PlacementError {}
