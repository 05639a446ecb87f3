use std::sync::mpsc;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::config;
use crate::engine::Engine;
use crate::mpris::{ControlCmd, MprisHandle};
use crate::player::Player;
use crate::runtime::mpris_sync::update_mpris;
use crate::ui;

/// Main terminal event loop: dispatches engine events into the player,
/// forwards the resulting commands back to the engine, draws the UI and
/// handles keys and MPRIS control commands. Returns `Ok(())` on shutdown.
pub fn run(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    settings: &config::Settings,
    player: &mut Player,
    engine: &Engine,
    mpris: &MprisHandle,
    control_rx: &mpsc::Receiver<ControlCmd>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut last_mpris_index = player.current_index();
    let mut last_mpris_playing = player.is_playing();

    loop {
        // Single dispatch point for everything the engine reports. A command
        // produced by an event (autoplay on ready, reload on finish) goes
        // straight back to the engine.
        while let Some(ev) = engine.try_event() {
            if let Some(cmd) = player.handle_event(ev) {
                let _ = engine.send(cmd);
            }
        }

        // Keep MPRIS in sync even when changes come from auto-advance.
        if player.current_index() != last_mpris_index || player.is_playing() != last_mpris_playing
        {
            update_mpris(mpris, player);
            last_mpris_index = player.current_index();
            last_mpris_playing = player.is_playing();
        }

        let waveform = engine.waveform();
        terminal.draw(|f| ui::draw(f, player, &waveform, &settings.ui))?;

        while let Ok(cmd) = control_rx.try_recv() {
            if handle_control_cmd(cmd, player, engine, mpris) {
                engine.shutdown();
                return Ok(());
            }
        }

        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if handle_key_event(key, player, engine, mpris) {
                    engine.shutdown();
                    return Ok(());
                }
            }
        }
    }
}

/// Handle one MPRIS control command. Returns `true` to request shutdown.
fn handle_control_cmd(
    cmd: ControlCmd,
    player: &mut Player,
    engine: &Engine,
    mpris: &MprisHandle,
) -> bool {
    match cmd {
        ControlCmd::Quit => return true,
        ControlCmd::Play => {
            if !player.is_playing() {
                if let Some(c) = player.toggle_playback() {
                    let _ = engine.send(c);
                }
            }
        }
        ControlCmd::Pause => {
            if player.is_playing() {
                if let Some(c) = player.toggle_playback() {
                    let _ = engine.send(c);
                }
            }
        }
        ControlCmd::PlayPause => {
            if let Some(c) = player.toggle_playback() {
                let _ = engine.send(c);
            }
        }
        ControlCmd::Next => {
            let _ = engine.send(player.select_next());
            update_mpris(mpris, player);
        }
        ControlCmd::Prev => {
            let _ = engine.send(player.select_previous());
            update_mpris(mpris, player);
        }
    }

    false
}

/// Handle one key press. Returns `true` to request shutdown.
fn handle_key_event(key: KeyEvent, player: &mut Player, engine: &Engine, mpris: &MprisHandle) -> bool {
    match key.code {
        KeyCode::Char('q') => return true,
        KeyCode::Char(' ') | KeyCode::Char('p') => {
            // No-op while the current track is still loading.
            if let Some(cmd) = player.toggle_playback() {
                let _ = engine.send(cmd);
            }
        }
        KeyCode::Char('l') | KeyCode::Right => {
            let _ = engine.send(player.select_next());
            update_mpris(mpris, player);
        }
        KeyCode::Char('h') | KeyCode::Left => {
            let _ = engine.send(player.select_previous());
            update_mpris(mpris, player);
        }
        KeyCode::Char('+') | KeyCode::Char('=') => {
            let _ = engine.send(player.zoom_in());
        }
        KeyCode::Char('-') | KeyCode::Char('_') => {
            let _ = engine.send(player.zoom_out());
        }
        _ => {}
    }

    false
}
