use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;

use crate::common::{GridError, PlacementError};
use crate::config::BOARD_CONTAINER;
use crate::surface::{Activation, ActivationHandler, Cell, Offset, Surface};

/// Cell retained in memory by [`MemorySurface`].
#[derive(Debug, Clone, PartialEq)]
pub struct MemoryCell {
    id: String,
    offset: Offset,
    styles: Vec<String>,
    handlers: Vec<ActivationHandler>,
}

impl MemoryCell {
    pub fn offset(&self) -> Offset {
        self.offset
    }

    /// Applied styles, oldest first.
    pub fn styles(&self) -> &[String] {
        &self.styles
    }

    /// Most recently applied style.
    pub fn top_style(&self) -> Option<&str> {
        self.styles.last().map(String::as_str)
    }

    pub fn handlers(&self) -> &[ActivationHandler] {
        &self.handlers
    }
}

impl Cell for MemoryCell {
    fn id(&self) -> &str {
        &self.id
    }

    fn add_style(&mut self, style: &str) {
        self.styles.push(String::from(style));
    }

    fn set_offset(&mut self, offset: Offset) {
        self.offset = offset;
    }

    fn on_activate(&mut self, handler: ActivationHandler) {
        self.handlers.push(handler);
    }
}

/// In-memory surface: named containers holding cells in append order.
#[derive(Debug, Default, Clone)]
pub struct MemorySurface {
    containers: BTreeMap<String, Vec<usize>>,
    cells: Vec<MemoryCell>,
    by_id: BTreeMap<String, usize>,
}

impl MemorySurface {
    /// Surface without any containers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Surface holding an empty container named [`BOARD_CONTAINER`].
    pub fn board() -> Self {
        let mut surface = Self::new();
        surface.add_container(BOARD_CONTAINER);
        surface
    }

    /// Add an empty container; an existing one is left as is.
    pub fn add_container(&mut self, id: &str) {
        self.containers.entry(String::from(id)).or_default();
    }

    pub fn cell(&self, id: &str) -> Option<&MemoryCell> {
        self.by_id.get(id).map(|&i| &self.cells[i])
    }

    /// All attached cells in append order.
    pub fn cells(&self) -> &[MemoryCell] {
        &self.cells
    }

    /// Cells of one container in append order.
    pub fn children<'a>(&'a self, container: &str) -> impl Iterator<Item = &'a MemoryCell> + 'a {
        self.containers
            .get(container)
            .into_iter()
            .flat_map(move |ids| ids.iter().map(move |&i| &self.cells[i]))
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl Surface for MemorySurface {
    type Cell = MemoryCell;

    fn has_container(&self, container: &str) -> bool {
        self.containers.contains_key(container)
    }

    fn has_cell(&self, id: &str) -> bool {
        self.by_id.contains_key(id)
    }

    fn create_cell(&mut self, id: &str) -> MemoryCell {
        MemoryCell {
            id: String::from(id),
            offset: Offset::default(),
            styles: Vec::new(),
            handlers: Vec::new(),
        }
    }

    fn append(&mut self, container: &str, cell: MemoryCell) -> Result<(), GridError> {
        let children = self
            .containers
            .get_mut(container)
            .ok_or_else(|| GridError::MissingContainer(String::from(container)))?;
        if self.by_id.contains_key(&cell.id) {
            return Err(GridError::DuplicateCell(cell.id));
        }
        let index = self.cells.len();
        children.push(index);
        self.by_id.insert(cell.id.clone(), index);
        self.cells.push(cell);
        Ok(())
    }

    fn cell_mut(&mut self, id: &str) -> Option<&mut MemoryCell> {
        let index = *self.by_id.get(id)?;
        self.cells.get_mut(index)
    }

    fn activate(&self, id: &str) -> Result<Vec<Activation>, PlacementError> {
        let cell = self
            .cell(id)
            .ok_or_else(|| PlacementError::NoSuchCell(String::from(id)))?;
        Ok(cell
            .handlers
            .iter()
            .map(|&handler| Activation {
                handler,
                label: cell.id.clone(),
            })
            .collect())
    }
}
