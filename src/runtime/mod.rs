use std::sync::mpsc;

use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::engine::Engine;
use crate::mpris::ControlCmd;
use crate::player::Player;
use crate::playlist;

mod event_loop;
mod mpris_sync;
mod settings;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let settings = settings::load_settings();

    let playlist = playlist::builtin(&settings.playlist.assets_dir);
    let engine = Engine::new(settings.waveform.clone());
    let mut player = Player::new(playlist, settings.playback.autoplay_on_ready);

    let (control_tx, control_rx) = mpsc::channel::<ControlCmd>();
    let mpris = crate::mpris::spawn_mpris(control_tx);

    mpris_sync::update_mpris(&mpris, &player);

    // Kick off the first track; the engine answers with Ready (or LoadFailed).
    let _ = engine.send(player.initial_load());

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let run_result =
        event_loop::run(&mut terminal, &settings, &mut player, &engine, &mpris, &control_rx);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    run_result
}
