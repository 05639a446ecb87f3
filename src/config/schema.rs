use std::path::PathBuf;

use serde::Deserialize;

/// Top-level application settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/crest/config.toml` or `~/.config/crest/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `CREST__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub ui: UiSettings,
    pub waveform: WaveformSettings,
    pub playback: PlaybackSettings,
    pub playlist: PlaylistSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// The text rendered inside the top "crest" header box.
    pub header_text: String,

    /// Separator between elapsed and total time in the transport line.
    pub time_separator: String,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            header_text: " ~ ride the waveform ~ ".to_string(),
            time_separator: " / ".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WaveformSettings {
    /// Number of min/max peak columns decoded per track. Higher values keep
    /// more detail at deep zoom levels at the cost of a larger decode pass.
    pub resolution: usize,
}

impl Default for WaveformSettings {
    fn default() -> Self {
        Self { resolution: 480 }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PlaybackSettings {
    /// Whether a finished load starts playback immediately.
    pub autoplay_on_ready: bool,
}

impl Default for PlaybackSettings {
    fn default() -> Self {
        Self {
            autoplay_on_ready: true,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PlaylistSettings {
    /// Directory holding the built-in playlist's `audio/` and `images/`.
    pub assets_dir: PathBuf,
}

impl Default for PlaylistSettings {
    fn default() -> Self {
        Self {
            assets_dir: PathBuf::from("assets"),
        }
    }
}
