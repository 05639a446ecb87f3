use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

use crate::config::WaveformSettings;

use super::thread::spawn_engine_thread;
use super::types::{EngineCmd, EngineEvent, WaveformFrame, WaveformHandle};

/// Owning handle for the engine thread.
///
/// Created once per run and shut down exactly once; dropping the handle after
/// `shutdown()` leaves no thread behind.
pub struct Engine {
    tx: Sender<EngineCmd>,
    events: Receiver<EngineEvent>,
    waveform: WaveformHandle,
    join: Mutex<Option<JoinHandle<()>>>,
}

impl Engine {
    pub fn new(settings: WaveformSettings) -> Self {
        let (tx, cmd_rx) = mpsc::channel::<EngineCmd>();
        let (event_tx, events) = mpsc::channel::<EngineEvent>();
        let waveform: WaveformHandle = Arc::new(Mutex::new(WaveformFrame::default()));

        let join = spawn_engine_thread(cmd_rx, event_tx, waveform.clone(), settings);

        Self {
            tx,
            events,
            waveform,
            join: Mutex::new(Some(join)),
        }
    }

    pub fn send(&self, cmd: EngineCmd) -> Result<(), mpsc::SendError<EngineCmd>> {
        self.tx.send(cmd)
    }

    /// Drain one pending event, if any. Called in a loop by the runtime so
    /// all dispatch happens in a single place.
    pub fn try_event(&self) -> Option<EngineEvent> {
        self.events.try_recv().ok()
    }

    /// Snapshot of the currently visible waveform window.
    pub fn waveform(&self) -> WaveformFrame {
        self.waveform
            .lock()
            .map(|f| f.clone())
            .unwrap_or_default()
    }

    /// Stop playback, terminate the engine thread and wait for it.
    pub fn shutdown(&self) {
        let _ = self.send(EngineCmd::Shutdown);

        if let Ok(mut j) = self.join.lock() {
            if let Some(h) = j.take() {
                let _ = h.join();
            }
        }
    }
}
