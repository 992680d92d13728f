//! Rendering surface capabilities required by the grid builder and the
//! placement session.
//!
//! A backend supplies a [`Surface`] (the container and its lookup) and a
//! [`Cell`] type (one addressable board point). [`memory::MemorySurface`]
//! is the bundled retained-mode backend.

use alloc::string::String;
use alloc::vec::Vec;

use crate::common::{GridError, PlacementError};

pub mod memory;

/// Two-axis offset of a cell inside its container, in surface units.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Offset {
    pub x: f32,
    pub y: f32,
}

impl Offset {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Handler kinds a cell can register for its activation event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivationHandler {
    /// Place the next marker on the activated cell.
    PlaceStone,
}

/// A handler resolved against the cell it was registered on. The label is
/// read back from the cell, not from the code that registered the handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activation {
    pub handler: ActivationHandler,
    pub label: String,
}

/// One addressable, visually positioned board point.
pub trait Cell {
    /// Unique identifier (the position label).
    fn id(&self) -> &str;

    /// Attach a style. Styles accumulate; nothing is replaced.
    fn add_style(&mut self, style: &str);

    fn set_offset(&mut self, offset: Offset);

    /// Register a handler for the cell's activation event.
    fn on_activate(&mut self, handler: ActivationHandler);
}

/// Container-level operations of a rendering backend.
pub trait Surface {
    type Cell: Cell;

    /// Whether a container with this identifier exists.
    fn has_container(&self, container: &str) -> bool;

    /// Whether a cell with this identifier is attached.
    fn has_cell(&self, id: &str) -> bool;

    /// Create a detached cell carrying `id`.
    fn create_cell(&mut self, id: &str) -> Self::Cell;

    /// Append a cell to a container, making it addressable by its id.
    /// Identifiers are unique: appending an id that is already attached
    /// fails with [`GridError::DuplicateCell`].
    fn append(&mut self, container: &str, cell: Self::Cell) -> Result<(), GridError>;

    /// Look up an attached cell by its identifier.
    fn cell_mut(&mut self, id: &str) -> Option<&mut Self::Cell>;

    /// Resolve the handlers registered on the cell `id`, in registration
    /// order.
    fn activate(&self, id: &str) -> Result<Vec<Activation>, PlacementError>;
}
