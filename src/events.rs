#![cfg(feature = "std")]

//! Event-driven front end: activations arrive from an [`ActivationSource`]
//! and are applied one at a time by an [`EventLoop`] that owns the surface
//! and the placement session.

use std::collections::VecDeque;

use log::{info, warn};
use serde::{Deserialize, Serialize};
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tokio::sync::mpsc;

use crate::{
    common::PlacementError,
    config::GridConfig,
    position::normalize_label,
    session::PlacementSession,
    surface::{ActivationHandler, Surface},
};

/// Producer of activated position labels.
#[async_trait::async_trait]
pub trait ActivationSource: Send {
    /// Next activated label, or `None` when no more activations will come.
    async fn next_activation(&mut self) -> anyhow::Result<Option<String>>;
}

/// Replays a fixed list of labels.
pub struct ScriptedSource {
    queue: VecDeque<String>,
}

impl ScriptedSource {
    pub fn new<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            queue: labels.into_iter().map(Into::into).collect(),
        }
    }
}

#[async_trait::async_trait]
impl ActivationSource for ScriptedSource {
    async fn next_activation(&mut self) -> anyhow::Result<Option<String>> {
        Ok(self.queue.pop_front())
    }
}

/// Receives labels from any number of senders. Ends once every sender is
/// dropped and the queue is drained.
pub struct ChannelSource {
    rx: mpsc::UnboundedReceiver<String>,
}

impl ChannelSource {
    pub fn channel() -> (mpsc::UnboundedSender<String>, Self) {
        let (tx, rx) = mpsc::unbounded_channel();
        (tx, Self { rx })
    }
}

#[async_trait::async_trait]
impl ActivationSource for ChannelSource {
    async fn next_activation(&mut self) -> anyhow::Result<Option<String>> {
        Ok(self.rx.recv().await)
    }
}

/// Reads one label per line from standard input. Blank lines are skipped;
/// `quit`, `exit` or end of input stop the source.
pub struct StdinSource {
    lines: Lines<BufReader<Stdin>>,
    config: GridConfig,
}

impl StdinSource {
    pub fn new(config: GridConfig) -> Self {
        Self {
            lines: BufReader::new(tokio::io::stdin()).lines(),
            config,
        }
    }
}

#[async_trait::async_trait]
impl ActivationSource for StdinSource {
    async fn next_activation(&mut self) -> anyhow::Result<Option<String>> {
        while let Some(line) = self.lines.next_line().await? {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            if line.eq_ignore_ascii_case("quit") || line.eq_ignore_ascii_case("exit") {
                return Ok(None);
            }
            return Ok(Some(normalize_label(line, &self.config)));
        }
        Ok(None)
    }
}

/// Result of dispatching a single activation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A style was applied to the cell.
    Placed { label: String, style: String },
    /// The activation referenced no cell and was dropped.
    Dropped(PlacementError),
    /// The cell exists but has no handler registered.
    Unhandled(String),
}

/// Counts reported when an event loop finishes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub placed: u64,
    pub dropped: u64,
    pub counter: u64,
}

/// Single consumer of activations for one board.
pub struct EventLoop<S> {
    surface: S,
    session: PlacementSession,
    placed: u64,
    dropped: u64,
}

impl<S: Surface> EventLoop<S> {
    pub fn new(surface: S, session: PlacementSession) -> Self {
        Self {
            surface,
            session,
            placed: 0,
            dropped: 0,
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn session(&self) -> &PlacementSession {
        &self.session
    }

    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            placed: self.placed,
            dropped: self.dropped,
            counter: self.session.counter(),
        }
    }

    pub fn into_parts(self) -> (S, PlacementSession) {
        (self.surface, self.session)
    }

    /// Activate the cell labelled `label` and run its handlers.
    pub fn dispatch(&mut self, label: &str) -> Outcome {
        let activations = match self.surface.activate(label) {
            Ok(activations) => activations,
            Err(e) => {
                warn!("Activation dropped: {}", e);
                self.dropped += 1;
                return Outcome::Dropped(e);
            }
        };
        let mut outcome = Outcome::Unhandled(label.into());
        for activation in activations {
            match activation.handler {
                ActivationHandler::PlaceStone => {
                    outcome = match self.session.place_stone(&mut self.surface, &activation.label) {
                        Ok(style) => {
                            self.placed += 1;
                            Outcome::Placed {
                                label: activation.label,
                                style: style.into(),
                            }
                        }
                        Err(e) => {
                            warn!("Activation dropped: {}", e);
                            self.dropped += 1;
                            Outcome::Dropped(e)
                        }
                    };
                }
            }
        }
        outcome
    }

    /// Drain `source`, dispatching each activation in arrival order.
    pub async fn run<A>(&mut self, source: &mut A) -> anyhow::Result<SessionSummary>
    where
        A: ActivationSource + ?Sized,
    {
        self.run_with(source, |_, _| {}).await
    }

    /// Like [`run`](Self::run), calling `observer` after every activation.
    pub async fn run_with<A, F>(
        &mut self,
        source: &mut A,
        mut observer: F,
    ) -> anyhow::Result<SessionSummary>
    where
        A: ActivationSource + ?Sized,
        F: FnMut(&Self, &Outcome),
    {
        info!("Event loop started");
        while let Some(label) = source.next_activation().await? {
            let outcome = self.dispatch(&label);
            observer(&*self, &outcome);
        }
        let summary = self.summary();
        info!(
            "Event loop finished: {} placed, {} dropped",
            summary.placed, summary.dropped
        );
        Ok(summary)
    }
}
