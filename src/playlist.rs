use std::path::{Path, PathBuf};

use thiserror::Error;

/// One playable audio item plus the metadata shown alongside it.
#[derive(Clone, Debug)]
pub struct Track {
    /// Audio file handed to the engine.
    pub audio: PathBuf,
    /// Artwork file referenced in the metadata panel.
    pub image: PathBuf,
    pub title: String,
    pub description: String,
    /// May be empty.
    pub tags: Vec<String>,
}

#[derive(Debug, Error)]
pub enum PlaylistError {
    #[error("playlist must contain at least one track")]
    Empty,
}

/// An immutable, ordered, non-empty sequence of tracks.
///
/// Non-emptiness is enforced at construction so index arithmetic never has to
/// deal with a zero modulus.
#[derive(Clone, Debug)]
pub struct Playlist {
    tracks: Vec<Track>,
}

impl Playlist {
    pub fn new(tracks: Vec<Track>) -> Result<Self, PlaylistError> {
        if tracks.is_empty() {
            return Err(PlaylistError::Empty);
        }
        Ok(Self { tracks })
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn track(&self, index: usize) -> &Track {
        &self.tracks[index]
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    /// Index after `index`, wrapping at the end.
    pub fn next_index(&self, index: usize) -> usize {
        (index + 1) % self.tracks.len()
    }

    /// Index before `index`, wrapping at the start.
    pub fn prev_index(&self, index: usize) -> usize {
        (index + self.tracks.len() - 1) % self.tracks.len()
    }
}

/// The compiled-in playlist. Audio and artwork are resolved relative to
/// `assets_dir` (see `[playlist]` in the config).
pub fn builtin(assets_dir: &Path) -> Playlist {
    let tracks = vec![
        Track {
            audio: assets_dir.join("audio").join("popsmoke.wav"),
            image: assets_dir.join("images").join("popsmoke.jpg"),
            title: "Pop Smoke Type Beat".to_string(),
            description:
                "Pop Smoke x Fivio Foreign Type Beat 2023 - \"SMOKE\" | Dark Drill Type Beats"
                    .to_string(),
            tags: vec!["Beat".to_string(), "Drill".to_string(), "Dark".to_string()],
        },
        Track {
            audio: assets_dir.join("audio").join("rnb.wav"),
            image: assets_dir.join("images").join("rnb.jpg"),
            title: "RnB Type Beat".to_string(),
            description: "RnB Type Beat 2023 - \"LOVE\" | RnB Type Beats".to_string(),
            tags: vec![
                "RnB".to_string(),
                "AfroBeat".to_string(),
                "Beat".to_string(),
            ],
        },
    ];

    Playlist { tracks }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(title: &str) -> Track {
        Track {
            audio: PathBuf::from(format!("{title}.wav")),
            image: PathBuf::new(),
            title: title.into(),
            description: String::new(),
            tags: Vec::new(),
        }
    }

    #[test]
    fn new_rejects_empty_track_list() {
        assert!(matches!(Playlist::new(Vec::new()), Err(PlaylistError::Empty)));
        assert!(Playlist::new(vec![t("A")]).is_ok());
    }

    #[test]
    fn next_and_prev_wrap_around() {
        let p = Playlist::new(vec![t("A"), t("B"), t("C")]).unwrap();
        assert_eq!(p.next_index(0), 1);
        assert_eq!(p.next_index(2), 0);
        assert_eq!(p.prev_index(0), 2);
        assert_eq!(p.prev_index(1), 0);
    }

    #[test]
    fn single_track_playlist_wraps_to_itself() {
        let p = Playlist::new(vec![t("A")]).unwrap();
        assert_eq!(p.next_index(0), 0);
        assert_eq!(p.prev_index(0), 0);
    }

    #[test]
    fn builtin_playlist_resolves_paths_under_assets_dir() {
        let p = builtin(Path::new("/srv/assets"));
        assert!(p.len() >= 1);
        for track in p.tracks() {
            assert!(track.audio.starts_with("/srv/assets"));
            assert!(track.image.starts_with("/srv/assets"));
            assert!(!track.title.is_empty());
        }
    }
}
