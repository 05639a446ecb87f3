use super::peaks::{compute_peaks, progress_in_window, zoom_window};

#[test]
fn compute_peaks_buckets_min_and_max() {
    let samples = vec![0.5, -0.5, 0.25, -0.25, 1.0, -1.0, 0.0, 0.0];
    let peaks = compute_peaks(&samples, 2);
    assert_eq!(peaks, vec![(-0.5, 0.5), (-1.0, 1.0)]);
}

#[test]
fn compute_peaks_handles_empty_and_zero_columns() {
    assert!(compute_peaks(&[], 100).is_empty());
    assert!(compute_peaks(&[0.1, 0.2], 0).is_empty());
}

#[test]
fn compute_peaks_never_produces_more_columns_than_samples() {
    let peaks = compute_peaks(&[0.1, -0.2, 0.3], 10);
    assert_eq!(peaks.len(), 3);
}

#[test]
fn zoom_window_level_zero_shows_everything() {
    assert_eq!(zoom_window(100, 0.0, 0), 0..100);
    assert_eq!(zoom_window(100, 1.0, 0), 0..100);
}

#[test]
fn zoom_window_shrinks_with_level_and_follows_playhead() {
    // One step halves the window.
    let w = zoom_window(100, 0.5, 5);
    assert_eq!(w.len(), 50);
    assert!(w.contains(&50));

    // Two steps: a third of the track.
    let w = zoom_window(99, 0.5, 10);
    assert_eq!(w.len(), 33);
}

#[test]
fn zoom_window_clamps_to_track_bounds() {
    let w = zoom_window(100, 0.0, 5);
    assert_eq!(w, 0..50);

    let w = zoom_window(100, 1.0, 5);
    assert_eq!(w, 50..100);
}

#[test]
fn zoom_window_of_empty_track_is_empty() {
    assert_eq!(zoom_window(0, 0.5, 5), 0..0);
}

#[test]
fn progress_in_window_is_relative_to_the_window() {
    let w = zoom_window(100, 0.5, 5); // 25..75
    let p = progress_in_window(100, 0.5, &w);
    assert!((p - 0.5).abs() < 1e-9);

    // Playhead before the window start clamps to 0.
    assert_eq!(progress_in_window(100, 0.0, &(50..100)), 0.0);
}
