#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod common;
mod config;
mod grid;
mod palette;
mod position;
mod render;
mod session;
pub mod surface;
#[cfg(feature = "std")]
mod cli;
#[cfg(feature = "std")]
pub mod events;
#[cfg(feature = "std")]
mod logging;

pub use common::*;
pub use config::*;
pub use grid::*;
pub use palette::*;
pub use position::*;
pub use render::*;
pub use session::*;
pub use surface::memory::{MemoryCell, MemorySurface};
pub use surface::{Activation, ActivationHandler, Cell, Offset, Surface};
#[cfg(feature = "std")]
pub use cli::*;
#[cfg(feature = "std")]
pub use events::{
    ActivationSource, ChannelSource, EventLoop, Outcome, ScriptedSource, SessionSummary,
    StdinSource,
};
#[cfg(feature = "std")]
pub use logging::{format_record, init_logging};
