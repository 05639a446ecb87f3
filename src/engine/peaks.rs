//! Peak extraction and zoom windowing for the waveform display.
//!
//! A decoded track is reduced once to a fixed number of min/max peak columns;
//! zooming only changes which slice of those columns is visible.

use std::ops::Range;

use super::types::ZOOM_STEP;

/// Reduce interleaved samples to `columns` min/max pairs.
pub(crate) fn compute_peaks(samples: &[f32], columns: usize) -> Vec<(f32, f32)> {
    if samples.is_empty() || columns == 0 {
        return Vec::new();
    }

    let columns = columns.min(samples.len());
    (0..columns)
        .map(|c| {
            let start = c * samples.len() / columns;
            let end = ((c + 1) * samples.len() / columns).max(start + 1);
            samples[start..end]
                .iter()
                .fold((f32::MAX, f32::MIN), |(min, max), &s| {
                    (min.min(s), max.max(s))
                })
        })
        .collect()
}

/// Visible column range for a zoom `level`.
///
/// Level 0 shows the whole track; a level of `n` shows
/// `len / (1 + n / ZOOM_STEP)` columns, centered on the playhead and clamped
/// to the track bounds.
pub(crate) fn zoom_window(len: usize, progress: f64, level: u32) -> Range<usize> {
    if len == 0 {
        return 0..0;
    }

    let factor = 1 + (level / ZOOM_STEP) as usize;
    let width = (len / factor).max(1);
    let center = (progress.clamp(0.0, 1.0) * len as f64) as usize;
    let start = center.saturating_sub(width / 2).min(len - width);
    start..start + width
}

/// Playhead position relative to `window`, `0.0..=1.0`.
pub(crate) fn progress_in_window(len: usize, progress: f64, window: &Range<usize>) -> f64 {
    if window.is_empty() {
        return 0.0;
    }

    let playhead = progress.clamp(0.0, 1.0) * len as f64;
    ((playhead - window.start as f64) / window.len() as f64).clamp(0.0, 1.0)
}
