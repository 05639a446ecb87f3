use std::path::Path;
use std::sync::mpsc::{Receiver, RecvTimeoutError, Sender};
use std::thread;
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use rodio::{OutputStream, OutputStreamBuilder, Sink, Source};

use crate::config::WaveformSettings;

use super::peaks::{compute_peaks, progress_in_window, zoom_window};
use super::sink::{EngineError, create_sink, open_decoder};
use super::types::{EngineCmd, EngineEvent, WaveformFrame, WaveformHandle};

/// How often the engine reports the playhead and checks for track end.
const TICK: Duration = Duration::from_millis(200);

struct LoadedTrack {
    sink: Sink,
    peaks: Vec<(f32, f32)>,
    duration: f64,
}

pub(super) fn spawn_engine_thread(
    rx: Receiver<EngineCmd>,
    events: Sender<EngineEvent>,
    waveform: WaveformHandle,
    settings: WaveformSettings,
) -> JoinHandle<()> {
    thread::spawn(move || {
        let mut stream =
            OutputStreamBuilder::open_default_stream().expect("ERR: No audio output device");
        // rodio logs to stderr when OutputStream is dropped. That's useful in
        // debugging, but noisy for a TUI app.
        stream.log_on_drop(false);

        let mut sink: Option<Sink> = None;
        let mut generation: u64 = 0;
        let mut paused = true;
        let mut zoom: u32 = 0;
        let mut peaks: Vec<(f32, f32)> = Vec::new();
        let mut duration = 0.0f64;

        // Track start time and accumulated elapsed when paused.
        let mut started_at: Option<Instant> = None;
        let mut accumulated = Duration::ZERO;

        loop {
            match rx.recv_timeout(TICK) {
                Ok(cmd) => match cmd {
                    EngineCmd::Load {
                        path,
                        generation: r#gen,
                    } => {
                        // A load supersedes whatever was playing; from here on
                        // only events stamped with `gen` are current.
                        if let Some(s) = sink.take() {
                            s.stop();
                        }
                        generation = r#gen;
                        paused = true;
                        started_at = None;
                        accumulated = Duration::ZERO;
                        peaks.clear();
                        duration = 0.0;
                        publish(&waveform, &peaks, 0.0, zoom);

                        match load_track(&stream, &path, settings.resolution) {
                            Ok(loaded) => {
                                peaks = loaded.peaks;
                                duration = loaded.duration;
                                sink = Some(loaded.sink);
                                publish(&waveform, &peaks, 0.0, zoom);
                                let _ = events.send(EngineEvent::Ready {
                                    generation,
                                    duration,
                                });
                            }
                            Err(e) => {
                                let _ = events.send(EngineEvent::LoadFailed {
                                    generation,
                                    reason: e.to_string(),
                                });
                            }
                        }
                    }

                    EngineCmd::Play => {
                        if let Some(ref s) = sink {
                            if paused {
                                s.play();
                                paused = false;
                                started_at = Some(Instant::now());
                                let _ = events.send(EngineEvent::Playing);
                            }
                        }
                    }

                    EngineCmd::Pause => {
                        if let Some(ref s) = sink {
                            if !paused {
                                s.pause();
                                paused = true;
                                if let Some(st) = started_at.take() {
                                    accumulated += st.elapsed();
                                }
                                let _ = events.send(EngineEvent::Paused);
                            }
                        }
                    }

                    EngineCmd::Zoom(level) => {
                        zoom = level;
                        let elapsed =
                            accumulated + started_at.map_or(Duration::ZERO, |st| st.elapsed());
                        publish(
                            &waveform,
                            &peaks,
                            track_progress(elapsed.as_secs_f64(), duration),
                            zoom,
                        );
                    }

                    EngineCmd::Shutdown => {
                        if let Some(s) = sink.take() {
                            s.stop();
                        }
                        break;
                    }
                },

                Err(RecvTimeoutError::Timeout) => {
                    if paused || sink.is_none() {
                        continue;
                    }

                    let drained = sink.as_ref().is_some_and(|s| s.empty());
                    if drained {
                        // Played to the end. Report it once; the controller
                        // decides what to load next.
                        sink = None;
                        paused = true;
                        started_at = None;
                        accumulated = Duration::ZERO;
                        let _ = events.send(EngineEvent::Finished { generation });
                        continue;
                    }

                    let elapsed =
                        accumulated + started_at.map_or(Duration::ZERO, |st| st.elapsed());
                    let seconds = elapsed.as_secs_f64();
                    let _ = events.send(EngineEvent::TimeUpdate {
                        generation,
                        seconds,
                    });
                    publish(&waveform, &peaks, track_progress(seconds, duration), zoom);
                }

                Err(RecvTimeoutError::Disconnected) => break,
            }
        }
    })
}

/// Decode `path`: peak columns for the display, duration, and a paused sink.
fn load_track(
    stream: &OutputStream,
    path: &Path,
    resolution: usize,
) -> Result<LoadedTrack, EngineError> {
    let decoder = open_decoder(path)?;
    let decoder_duration = decoder.total_duration();
    let samples: Vec<f32> = decoder.collect();
    let peaks = compute_peaks(&samples, resolution);

    // Tag metadata tends to be more reliable than the decoder's estimate.
    let duration = lofty::read_from_path(path)
        .ok()
        .map(|tagged| lofty::prelude::AudioFile::properties(&tagged).duration())
        .or(decoder_duration)
        .map_or(0.0, |d| d.as_secs_f64());

    let sink = create_sink(stream, path)?;

    Ok(LoadedTrack {
        sink,
        peaks,
        duration,
    })
}

fn track_progress(seconds: f64, duration: f64) -> f64 {
    if duration <= 0.0 {
        0.0
    } else {
        (seconds / duration).clamp(0.0, 1.0)
    }
}

/// Publish the visible peak window for the current zoom and playhead.
fn publish(waveform: &WaveformHandle, peaks: &[(f32, f32)], progress: f64, zoom: u32) {
    let window = zoom_window(peaks.len(), progress, zoom);
    let frame = WaveformFrame {
        progress: progress_in_window(peaks.len(), progress, &window),
        columns: peaks[window].to_vec(),
    };

    if let Ok(mut f) = waveform.lock() {
        *f = frame;
    }
}
