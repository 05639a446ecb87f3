use super::*;
use std::path::PathBuf;
use std::sync::mpsc;

fn make_track() -> Track {
    Track {
        audio: PathBuf::from("/tmp/music/test.wav"),
        image: PathBuf::from("/tmp/music/test.jpg"),
        title: "Test Title".to_string(),
        description: "A test track".to_string(),
        tags: vec!["Beat".to_string(), "Drill".to_string()],
    }
}

#[test]
fn set_track_metadata_sets_and_clears_shared_state() {
    let state = Arc::new(Mutex::new(SharedState::default()));
    let handle = MprisHandle {
        state: state.clone(),
    };

    let track = make_track();
    handle.set_track_metadata(Some(7), Some(&track));
    handle.set_length_seconds(1.234567);

    {
        let s = state.lock().unwrap();
        assert_eq!(s.title.as_deref(), Some("Test Title"));
        assert!(s.url.as_deref().unwrap().contains("/tmp/music/test.wav"));
        assert_eq!(s.genres, vec!["Beat".to_string(), "Drill".to_string()]);
        assert_eq!(s.length_micros, Some(1_234_567));
        assert_eq!(
            s.track_id.as_ref().map(|p| p.as_str()),
            Some("/org/mpris/MediaPlayer2/track/7")
        );
    }

    handle.set_track_metadata(None, None);
    handle.set_length_seconds(0.0);
    {
        let s = state.lock().unwrap();
        assert_eq!(s.title, None);
        assert_eq!(s.url, None);
        assert!(s.genres.is_empty());
        assert_eq!(s.length_micros, None);
        assert!(s.track_id.is_none());
    }
}

#[test]
fn playback_status_maps_playing_flag_to_mpris_strings() {
    let state = Arc::new(Mutex::new(SharedState::default()));
    let (tx, _rx) = mpsc::channel::<ControlCmd>();
    let iface = PlayerIface {
        tx,
        state: state.clone(),
    };

    assert_eq!(iface.playback_status(), "Paused");

    {
        let mut s = state.lock().unwrap();
        s.playing = true;
    }
    assert_eq!(iface.playback_status(), "Playing");
}

#[test]
fn metadata_includes_expected_keys_when_present() {
    let state = Arc::new(Mutex::new(SharedState::default()));
    let (tx, _rx) = mpsc::channel::<ControlCmd>();
    let iface = PlayerIface {
        tx,
        state: state.clone(),
    };

    let handle = MprisHandle {
        state: state.clone(),
    };
    handle.set_track_metadata(Some(1), Some(&make_track()));
    handle.set_length_seconds(42.0);

    let map = iface.metadata();
    for k in [
        "mpris:trackid",
        "xesam:title",
        "xesam:url",
        "xesam:genre",
        "mpris:length",
    ] {
        assert!(map.contains_key(k), "missing key: {k}");
    }
}

#[test]
fn player_iface_methods_send_transport_commands() {
    let state = Arc::new(Mutex::new(SharedState::default()));
    let (tx, rx) = mpsc::channel::<ControlCmd>();
    let iface = PlayerIface { tx, state };

    iface.play_pause();
    iface.next();
    iface.previous();

    assert!(matches!(rx.try_recv(), Ok(ControlCmd::PlayPause)));
    assert!(matches!(rx.try_recv(), Ok(ControlCmd::Next)));
    assert!(matches!(rx.try_recv(), Ok(ControlCmd::Prev)));
}
