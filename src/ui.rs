//! UI rendering helpers for the terminal user interface.
//!
//! This module contains functions to render the TUI using `ratatui`.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Padding, Paragraph, Wrap},
};

use crate::config::UiSettings;
use crate::engine::WaveformFrame;
use crate::player::Player;

/// Glyphs used for waveform columns, lowest amplitude first.
const BLOCKS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// Format seconds as `M:SS`.
fn format_mmss(seconds: f64) -> String {
    let secs = seconds.max(0.0) as u64;
    format!("{}:{:02}", secs / 60, secs % 60)
}

/// Map one peak column to a block glyph by its amplitude.
fn amplitude_glyph(min: f32, max: f32) -> char {
    let amp = ((max - min) / 2.0).clamp(0.0, 1.0);
    BLOCKS[((amp * 7.0).round() as usize).min(BLOCKS.len() - 1)]
}

/// Squash peak columns down to `width` columns, preserving extremes.
fn resample_columns(columns: &[(f32, f32)], width: usize) -> Vec<(f32, f32)> {
    if columns.is_empty() || width == 0 {
        return Vec::new();
    }

    let width = width.min(columns.len());
    (0..width)
        .map(|x| {
            let start = x * columns.len() / width;
            let end = ((x + 1) * columns.len() / width).max(start + 1);
            columns[start..end]
                .iter()
                .fold((f32::MAX, f32::MIN), |(min, max), &(a, b)| {
                    (min.min(a), max.max(b))
                })
        })
        .collect()
}

/// Build the waveform line: played columns highlighted, the rest dimmed.
fn waveform_line(frame: &WaveformFrame, width: usize) -> Line<'static> {
    let columns = resample_columns(&frame.columns, width);
    if columns.is_empty() {
        return Line::from(Span::styled(
            "· · ·",
            Style::default().add_modifier(Modifier::DIM),
        ));
    }

    let played = (frame.progress * columns.len() as f64).round() as usize;
    let mut spans: Vec<Span> = Vec::with_capacity(columns.len());
    for (i, &(min, max)) in columns.iter().enumerate() {
        let glyph = amplitude_glyph(min, max).to_string();
        let style = if i < played {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().add_modifier(Modifier::DIM)
        };
        spans.push(Span::styled(glyph, style));
    }

    Line::from(spans)
}

/// One-word playback state for the status line.
fn state_text(player: &Player) -> String {
    if player.load_error().is_some() {
        "Load failed".to_string()
    } else if player.is_loading() {
        "Loading…".to_string()
    } else if player.is_playing() {
        "Playing".to_string()
    } else {
        "Paused".to_string()
    }
}

/// Render tags as `[tag]` chips joined with spaces.
fn tags_text(tags: &[String]) -> String {
    tags.iter()
        .map(|t| format!("[{t}]"))
        .collect::<Vec<String>>()
        .join(" ")
}

/// Render the entire UI into the provided `frame`.
pub fn draw(
    frame: &mut Frame,
    player: &Player,
    waveform: &WaveformFrame,
    ui_settings: &UiSettings,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(6),
            Constraint::Min(1),
            Constraint::Length(3),
        ])
        .split(frame.area());

    // Header
    let header = Paragraph::new(ui_settings.header_text.as_str())
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" crest ")
                .title_alignment(Alignment::Center),
        );
    frame.render_widget(header, chunks[0]);

    // Waveform
    {
        let inner_width = chunks[1].width.saturating_sub(2) as usize;
        let wave = Paragraph::new(waveform_line(waveform, inner_width)).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" waveform ")
                .title_alignment(Alignment::Center),
        );
        frame.render_widget(wave, chunks[1]);
    }

    // Transport/status line
    let status = {
        let mut parts: Vec<String> = Vec::new();
        parts.push(state_text(player));
        parts.push(format!(
            "{}{}{}",
            format_mmss(player.elapsed_seconds()),
            ui_settings.time_separator,
            format_mmss(player.total_seconds())
        ));
        parts.push(format!("Zoom: x{}", player.zoom_level()));
        if let Some(err) = player.load_error() {
            parts.push(err.to_string());
        }
        parts.join(" • ")
    };
    let status_par = Paragraph::new(status)
        .block(
            Block::bordered()
                .padding(Padding {
                    left: 1,
                    right: 0,
                    top: 0,
                    bottom: 0,
                })
                .title(" status "),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(status_par, chunks[2]);

    // Current track metadata
    {
        let track = player.current_track();
        let mut lines: Vec<Line> = Vec::new();
        lines.push(Line::from(Span::styled(
            track.title.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(track.description.clone()));
        if !track.tags.is_empty() {
            lines.push(Line::from(tags_text(&track.tags)));
        }
        if let Some(art) = track.image.file_name().and_then(|n| n.to_str()) {
            lines.push(Line::from(Span::styled(
                format!("Artwork: {art}"),
                Style::default().add_modifier(Modifier::DIM),
            )));
        }

        let info = Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" track ")
                    .padding(Padding {
                        left: 1,
                        right: 0,
                        top: 0,
                        bottom: 0,
                    }),
            )
            .wrap(Wrap { trim: true });
        frame.render_widget(info, chunks[3]);
    }

    // Playlist
    {
        let items: Vec<ListItem> = player
            .playlist()
            .tracks()
            .iter()
            .enumerate()
            .map(|(i, t)| {
                if i == player.current_index() {
                    ListItem::new(format!("▶ {}", t.title))
                } else {
                    ListItem::new(format!("  {}", t.title))
                }
            })
            .collect();

        let title = format!(" playlist ({}) ", player.playlist().len());
        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL).title(title))
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED));
        let mut state = ratatui::widgets::ListState::default();
        state.select(Some(player.current_index()));
        frame.render_stateful_widget(list, chunks[4], &mut state);
    }

    // Footer
    let footer = Paragraph::new("[space/p] play/pause | [l] next | [h] prev | [+/-] zoom | [q] quit")
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" controls ")
                .padding(Padding {
                    left: 1,
                    right: 0,
                    top: 0,
                    bottom: 0,
                }),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(footer, chunks[5]);
}
