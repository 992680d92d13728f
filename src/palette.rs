//! Ordered marker styles cycled through by the placement session.

use alloc::string::String;
use alloc::vec::Vec;

use crate::common::GridError;
use crate::config::DEFAULT_PALETTE;

/// Non-empty, read-only list of style identifiers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    styles: Vec<String>,
}

impl Palette {
    /// Build a palette from the given styles, in order.
    pub fn new<I, S>(styles: I) -> Result<Self, GridError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let styles: Vec<String> = styles.into_iter().map(Into::into).collect();
        if styles.is_empty() {
            return Err(GridError::EmptyPalette);
        }
        Ok(Self { styles })
    }

    pub fn len(&self) -> usize {
        self.styles.len()
    }

    /// A built palette is never empty.
    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }

    /// Style selected by a rotation counter value.
    pub fn style_for(&self, counter: u64) -> &str {
        let index = (counter % self.styles.len() as u64) as usize;
        &self.styles[index]
    }

    /// Position of `style` within the palette.
    pub fn index_of(&self, style: &str) -> Option<usize> {
        self.styles.iter().position(|s| s == style)
    }

    pub fn styles(&self) -> &[String] {
        &self.styles
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            styles: DEFAULT_PALETTE.iter().map(|s| String::from(*s)).collect(),
        }
    }
}
