//! The player state machine.
//!
//! `Player` performs no I/O. Operations and engine events return the
//! [`EngineCmd`] the caller should forward, which keeps every contract here
//! testable without an audio device.

use crate::engine::{EngineCmd, EngineEvent, ZOOM_STEP};
use crate::playlist::{Playlist, Track};

pub struct Player {
    playlist: Playlist,
    current: usize,
    playing: bool,
    elapsed: f64,
    total: f64,
    zoom: u32,
    loading: bool,
    load_error: Option<String>,
    /// Token of the most recent load. Engine events carrying an older
    /// generation belong to a superseded load and are dropped.
    generation: u64,
    autoplay_on_ready: bool,
}

impl Player {
    pub fn new(playlist: Playlist, autoplay_on_ready: bool) -> Self {
        Self {
            playlist,
            current: 0,
            playing: false,
            elapsed: 0.0,
            total: 0.0,
            zoom: 0,
            loading: false,
            load_error: None,
            generation: 0,
            autoplay_on_ready,
        }
    }

    /// Load the starting track. Issued once, right after mount.
    pub fn initial_load(&mut self) -> EngineCmd {
        self.load(self.current)
    }

    /// Advance to the next track, wrapping at the end of the playlist.
    pub fn select_next(&mut self) -> EngineCmd {
        let next = self.playlist.next_index(self.current);
        self.load(next)
    }

    /// Go back one track, wrapping at the start of the playlist.
    pub fn select_previous(&mut self) -> EngineCmd {
        let prev = self.playlist.prev_index(self.current);
        self.load(prev)
    }

    /// Pause if playing, play if paused. Returns `None` while the current
    /// track is still loading or failed to load; the toggle must never reach
    /// an engine that has nothing to drive.
    pub fn toggle_playback(&self) -> Option<EngineCmd> {
        if self.loading || self.load_error.is_some() {
            return None;
        }

        if self.playing {
            Some(EngineCmd::Pause)
        } else {
            Some(EngineCmd::Play)
        }
    }

    pub fn zoom_in(&mut self) -> EngineCmd {
        self.zoom += ZOOM_STEP;
        EngineCmd::Zoom(self.zoom)
    }

    /// Zoom out one step, never below zero. The level is forwarded even when
    /// already at the floor.
    pub fn zoom_out(&mut self) -> EngineCmd {
        self.zoom = self.zoom.saturating_sub(ZOOM_STEP);
        EngineCmd::Zoom(self.zoom)
    }

    /// Single dispatch point for everything the engine reports back.
    pub fn handle_event(&mut self, event: EngineEvent) -> Option<EngineCmd> {
        match event {
            EngineEvent::Ready {
                generation,
                duration,
            } => {
                if generation != self.generation {
                    return None;
                }
                self.loading = false;
                self.total = duration;
                // Load completion implies immediate playback start.
                self.autoplay_on_ready.then_some(EngineCmd::Play)
            }

            EngineEvent::Playing => {
                self.playing = true;
                None
            }

            EngineEvent::Paused => {
                self.playing = false;
                None
            }

            EngineEvent::TimeUpdate {
                generation,
                seconds,
            } => {
                if generation == self.generation {
                    self.elapsed = seconds;
                }
                None
            }

            EngineEvent::Finished { generation } => {
                if generation != self.generation {
                    return None;
                }
                // Completion always auto-advances; a single-track playlist
                // replays from the start.
                Some(self.select_next())
            }

            EngineEvent::LoadFailed { generation, reason } => {
                if generation != self.generation {
                    return None;
                }
                self.loading = false;
                self.load_error = Some(reason);
                None
            }
        }
    }

    fn load(&mut self, index: usize) -> EngineCmd {
        self.current = index;
        self.generation += 1;
        self.loading = true;
        self.load_error = None;
        self.playing = false;
        self.elapsed = 0.0;
        self.total = 0.0;

        EngineCmd::Load {
            path: self.playlist.track(index).audio.clone(),
            generation: self.generation,
        }
    }

    pub fn playlist(&self) -> &Playlist {
        &self.playlist
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_track(&self) -> &Track {
        self.playlist.track(self.current)
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn load_error(&self) -> Option<&str> {
        self.load_error.as_deref()
    }

    pub fn elapsed_seconds(&self) -> f64 {
        self.elapsed
    }

    pub fn total_seconds(&self) -> f64 {
        self.total
    }

    pub fn zoom_level(&self) -> u32 {
        self.zoom
    }
}
