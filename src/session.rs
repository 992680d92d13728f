//! Placement session: the rotation counter and the marker placer.

use log::{debug, warn};

use crate::common::PlacementError;
use crate::palette::Palette;
use crate::surface::{Cell, Surface};

/// Owns the rotation counter and applies palette styles to cells.
///
/// One session drives one board. The counter only moves forward; its value
/// modulo the palette length picks the next style.
#[derive(Debug, Clone, Default)]
pub struct PlacementSession {
    palette: Palette,
    counter: u64,
}

impl PlacementSession {
    pub fn new(palette: Palette) -> Self {
        Self {
            palette,
            counter: 0,
        }
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Number of successful placements so far.
    pub fn counter(&self) -> u64 {
        self.counter
    }

    /// Style the next successful placement will apply.
    pub fn next_style(&self) -> &str {
        self.palette.style_for(self.counter)
    }

    /// Apply the next style to the cell labelled `label` and advance the
    /// counter. Returns the applied style.
    ///
    /// An unknown label leaves the counter and every cell unchanged.
    pub fn place_stone<S: Surface>(
        &mut self,
        surface: &mut S,
        label: &str,
    ) -> Result<&str, PlacementError> {
        let cell = surface
            .cell_mut(label)
            .ok_or_else(|| PlacementError::NoSuchCell(label.into()))?;
        let applied = self.counter;
        cell.add_style(self.palette.style_for(applied));
        self.counter += 1;
        let style = self.palette.style_for(applied);
        debug!("{} -> {} (counter {})", label, style, self.counter);
        Ok(style)
    }

    /// Activation entry point: place a stone, reporting and dropping
    /// lookup failures. Returns `true` when a style was applied.
    pub fn activate<S: Surface>(&mut self, surface: &mut S, label: &str) -> bool {
        match self.place_stone(surface, label) {
            Ok(_) => true,
            Err(e) => {
                warn!("Activation dropped: {}", e);
                false
            }
        }
    }
}
