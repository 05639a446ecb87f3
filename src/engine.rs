//! Audio/waveform engine: decodes tracks, drives playback and publishes
//! waveform peaks for the UI.
//!
//! The engine runs on its own thread. It consumes [`EngineCmd`] values and
//! reports back through a stream of [`EngineEvent`]s consumed at a single
//! dispatch point in the player controller. Events that belong to a specific
//! load carry that load's generation so a superseded load can never leak
//! state into its successor.

mod handle;
mod peaks;
mod sink;
mod thread;
mod types;

pub use handle::Engine;
pub use sink::EngineError;
pub use types::*;

#[cfg(test)]
mod tests;
