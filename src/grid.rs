//! Builds the board: one addressable, positioned, activatable cell per
//! board point.

use alloc::string::String;
use alloc::vec::Vec;
use log::debug;

use crate::common::GridError;
use crate::config::GridConfig;
use crate::position::Position;
use crate::surface::{ActivationHandler, Cell, Offset, Surface};

/// Populates a surface container with a `size × size` grid of cells.
#[derive(Debug, Clone, Copy, Default)]
pub struct GridBuilder {
    config: GridConfig,
}

impl GridBuilder {
    pub fn new(config: GridConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// Check that the configuration and surface can hold the grid.
    pub fn validate<S: Surface>(&self, surface: &S) -> Result<(), GridError> {
        let size = self.config.size;
        if size == 0 {
            return Err(GridError::ZeroSize);
        }
        let available = self.config.alphabet.chars().count();
        if available < size {
            return Err(GridError::AlphabetTooShort {
                required: size,
                available,
            });
        }
        let mut seen: Vec<char> = Vec::with_capacity(size);
        for symbol in self.config.alphabet.chars().take(size) {
            if seen.contains(&symbol) {
                return Err(GridError::DuplicateColumnSymbol(symbol));
            }
            seen.push(symbol);
        }
        if !surface.has_container(self.config.container) {
            return Err(GridError::MissingContainer(String::from(
                self.config.container,
            )));
        }
        for row in 0..size {
            for col in 0..size {
                if let Some(label) = Position::new(row, col).label(&self.config) {
                    if surface.has_cell(&label) {
                        return Err(GridError::DuplicateCell(label));
                    }
                }
            }
        }
        Ok(())
    }

    /// Surface offset of the cell at `position`.
    pub fn offset_of(&self, position: Position) -> Offset {
        Offset::new(
            position.col as f32 * self.config.spacing + self.config.margin,
            position.row as f32 * self.config.spacing + self.config.margin,
        )
    }

    /// Create every cell, row by row, and return their labels in creation
    /// order. The surface is left untouched when validation fails.
    pub fn build<S: Surface>(&self, surface: &mut S) -> Result<Vec<String>, GridError> {
        self.validate(surface)?;
        let size = self.config.size;
        let mut labels = Vec::with_capacity(size * size);
        for row in 0..size {
            for col in 0..size {
                let position = Position::new(row, col);
                let label = position.label(&self.config).ok_or(GridError::AlphabetTooShort {
                    required: size,
                    available: col,
                })?;
                let mut cell = surface.create_cell(&label);
                cell.set_offset(self.offset_of(position));
                cell.on_activate(ActivationHandler::PlaceStone);
                surface.append(self.config.container, cell)?;
                labels.push(label);
            }
        }
        debug!(
            "Built {}x{} grid in container '{}'",
            size, size, self.config.container
        );
        Ok(labels)
    }
}
