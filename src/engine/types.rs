//! Engine-facing small types and handles.
//!
//! Commands flow into the engine thread, events flow back out. Everything
//! tied to a particular load is stamped with that load's generation.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// Zoom is unitless and moves in steps of this size.
pub const ZOOM_STEP: u32 = 5;

#[derive(Debug, Clone, PartialEq)]
pub enum EngineCmd {
    /// Decode `path` and prepare it for playback. `generation` identifies
    /// this load in every event the engine emits for it.
    Load { path: PathBuf, generation: u64 },
    /// Resume/start playback of the loaded track.
    Play,
    /// Pause playback.
    Pause,
    /// Set the waveform zoom level.
    Zoom(u32),
    /// Stop playback and exit the engine thread.
    Shutdown,
}

#[derive(Debug, Clone, PartialEq)]
pub enum EngineEvent {
    /// The load identified by `generation` finished decoding.
    Ready { generation: u64, duration: f64 },
    /// Playback started.
    Playing,
    /// Playback paused.
    Paused,
    /// Periodic playhead report while playing.
    TimeUpdate { generation: u64, seconds: f64 },
    /// The current track played to its end.
    Finished { generation: u64 },
    /// The load identified by `generation` could not be decoded.
    LoadFailed { generation: u64, reason: String },
}

/// Snapshot of the visible waveform window, published for the UI.
#[derive(Debug, Clone, Default)]
pub struct WaveformFrame {
    /// Min/max peak pairs, one per visible column.
    pub columns: Vec<(f32, f32)>,
    /// Playhead position within the visible window, `0.0..=1.0`.
    pub progress: f64,
}

pub type WaveformHandle = Arc<Mutex<WaveformFrame>>;
