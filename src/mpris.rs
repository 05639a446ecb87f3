use std::collections::HashMap;
use std::sync::{Arc, Mutex, mpsc::Sender};

use async_io::{Timer, block_on};
use zbus::{Connection, interface};
use zvariant::{OwnedObjectPath, OwnedValue, Value};

use crate::playlist::Track;

/// Transport commands arriving from outside the TUI (media keys, playerctl).
#[derive(Clone, Debug)]
pub enum ControlCmd {
    Quit,
    Play,
    Pause,
    PlayPause,
    Next,
    Prev,
}

#[derive(Debug, Default)]
struct SharedState {
    playing: bool,
    title: Option<String>,
    url: Option<String>,
    genres: Vec<String>,
    length_micros: Option<u64>,
    track_id: Option<OwnedObjectPath>,
}

pub struct MprisHandle {
    state: Arc<Mutex<SharedState>>,
}

impl MprisHandle {
    pub fn set_playing(&self, playing: bool) {
        if let Ok(mut s) = self.state.lock() {
            s.playing = playing;
        }
    }

    pub fn set_track_metadata(&self, index: Option<usize>, track: Option<&Track>) {
        let Ok(mut s) = self.state.lock() else {
            return;
        };

        match (index, track) {
            (Some(i), Some(track)) => {
                s.title = Some(track.title.clone());
                s.url = Some(format!("file://{}", track.audio.display()));
                s.genres = track.tags.clone();
                s.track_id =
                    zvariant::ObjectPath::try_from(format!("/org/mpris/MediaPlayer2/track/{i}"))
                        .ok()
                        .map(OwnedObjectPath::from);
            }
            _ => {
                s.title = None;
                s.url = None;
                s.genres = Vec::new();
                s.track_id = None;
            }
        }
    }

    /// Track length as reported by the engine once the load is ready.
    pub fn set_length_seconds(&self, seconds: f64) {
        if let Ok(mut s) = self.state.lock() {
            s.length_micros = if seconds > 0.0 {
                Some((seconds * 1_000_000.0) as u64)
            } else {
                None
            };
        }
    }
}

struct RootIface {
    tx: Sender<ControlCmd>,
}

#[interface(name = "org.mpris.MediaPlayer2")]
impl RootIface {
    fn raise(&self) {
        // No-op for TUI.
    }

    fn quit(&self) {
        let _ = self.tx.send(ControlCmd::Quit);
    }

    #[zbus(property)]
    fn can_quit(&self) -> bool {
        true
    }

    #[zbus(property)]
    fn can_raise(&self) -> bool {
        false
    }

    #[zbus(property)]
    fn has_track_list(&self) -> bool {
        false
    }

    #[zbus(property)]
    fn identity(&self) -> &str {
        "crest"
    }

    #[zbus(property)]
    fn supported_uri_schemes(&self) -> Vec<String> {
        vec![]
    }

    #[zbus(property)]
    fn supported_mime_types(&self) -> Vec<String> {
        vec![]
    }
}

struct PlayerIface {
    tx: Sender<ControlCmd>,
    state: Arc<Mutex<SharedState>>,
}

#[interface(name = "org.mpris.MediaPlayer2.Player")]
impl PlayerIface {
    fn next(&self) {
        let _ = self.tx.send(ControlCmd::Next);
    }

    fn previous(&self) {
        let _ = self.tx.send(ControlCmd::Prev);
    }

    fn play(&self) {
        let _ = self.tx.send(ControlCmd::Play);
    }

    fn pause(&self) {
        let _ = self.tx.send(ControlCmd::Pause);
    }

    fn play_pause(&self) {
        let _ = self.tx.send(ControlCmd::PlayPause);
    }

    fn stop(&self) {
        let _ = self.tx.send(ControlCmd::Pause);
    }

    #[zbus(property)]
    fn playback_status(&self) -> &str {
        let Ok(s) = self.state.lock() else {
            return "Paused";
        };
        if s.playing { "Playing" } else { "Paused" }
    }

    #[zbus(property)]
    fn can_control(&self) -> bool {
        true
    }

    #[zbus(property)]
    fn can_play(&self) -> bool {
        true
    }

    #[zbus(property)]
    fn can_pause(&self) -> bool {
        true
    }

    #[zbus(property)]
    fn can_go_next(&self) -> bool {
        true
    }

    #[zbus(property)]
    fn can_go_previous(&self) -> bool {
        true
    }

    #[zbus(property)]
    fn metadata(&self) -> HashMap<String, OwnedValue> {
        let mut map = HashMap::new();
        let Ok(s) = self.state.lock() else {
            return map;
        };

        if let Some(ref id) = s.track_id {
            insert_owned(
                &mut map,
                "mpris:trackid",
                Value::ObjectPath(id.clone().into_inner()),
            );
        }
        if let Some(ref title) = s.title {
            insert_owned(&mut map, "xesam:title", Value::from(title.clone()));
        }
        if let Some(ref url) = s.url {
            insert_owned(&mut map, "xesam:url", Value::from(url.clone()));
        }
        if !s.genres.is_empty() {
            insert_owned(
                &mut map,
                "xesam:genre",
                Value::from(zvariant::Array::from(s.genres.clone())),
            );
        }
        if let Some(micros) = s.length_micros {
            insert_owned(&mut map, "mpris:length", Value::from(micros as i64));
        }

        map
    }
}

fn insert_owned(map: &mut HashMap<String, OwnedValue>, key: &str, value: Value<'_>) {
    if let Ok(v) = OwnedValue::try_from(value) {
        map.insert(key.to_string(), v);
    }
}

pub fn spawn_mpris(tx: Sender<ControlCmd>) -> MprisHandle {
    let state = Arc::new(Mutex::new(SharedState::default()));

    let state_for_thread = state.clone();
    std::thread::spawn(move || {
        block_on(async move {
            let path = "/org/mpris/MediaPlayer2";

            let connection = match Connection::session().await {
                Ok(c) => c,
                Err(e) => {
                    eprintln!("MPRIS: failed to connect to session bus: {e}");
                    return;
                }
            };

            if let Err(e) = connection.request_name("org.mpris.MediaPlayer2.crest").await {
                eprintln!("MPRIS: failed to acquire name: {e}");
                return;
            }

            let object_server = connection.object_server();

            if let Err(e) = object_server.at(path, RootIface { tx: tx.clone() }).await {
                eprintln!("MPRIS: failed to register root iface: {e}");
                return;
            }

            if let Err(e) = object_server
                .at(
                    path,
                    PlayerIface {
                        tx,
                        state: state_for_thread,
                    },
                )
                .await
            {
                eprintln!("MPRIS: failed to register player iface: {e}");
                return;
            }

            // Keep the service alive.
            loop {
                Timer::after(std::time::Duration::from_secs(3600)).await;
            }
        });
    });

    MprisHandle { state }
}

#[cfg(test)]
mod tests;
