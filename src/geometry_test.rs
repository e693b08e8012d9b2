#![allow(clippy::float_cmp)]

use super::*;

fn scale() -> Vec<i32> {
    vec![1, 5, 10, 20, 50]
}

fn bounds<V>(geometry: &ScaleGeometry<V>) -> Vec<(f64, f64)> {
    geometry.entries().iter().map(|e| (e.start, e.end)).collect()
}

// =============================================================
// Validation
// =============================================================

#[test]
fn empty_scale_is_rejected() {
    let err = build(Vec::<i32>::new(), 400.0).unwrap_err();
    assert!(matches!(err, RulerError::InvalidScale { len: 0 }));
}

#[test]
fn single_value_scale_is_rejected() {
    let err = build(vec![1], 400.0).unwrap_err();
    assert!(matches!(err, RulerError::InvalidScale { len: 1 }));
}

#[test]
fn zero_width_is_rejected() {
    let err = build(scale(), 0.0).unwrap_err();
    assert!(matches!(err, RulerError::InvalidWidth(w) if w == 0.0));
}

#[test]
fn negative_width_is_rejected() {
    assert!(matches!(build(scale(), -10.0), Err(RulerError::InvalidWidth(_))));
}

#[test]
fn non_finite_width_is_rejected() {
    assert!(matches!(build(scale(), f64::NAN), Err(RulerError::InvalidWidth(_))));
    assert!(matches!(build(scale(), f64::INFINITY), Err(RulerError::InvalidWidth(_))));
}

#[test]
fn scale_spec_keeps_values_in_order() {
    let spec = ScaleSpec::new(scale()).unwrap();
    assert_eq!(spec.values(), &[1, 5, 10, 20, 50]);
}

// =============================================================
// Metrics
// =============================================================

#[test]
fn track_metrics_for_five_values() {
    let track = TrackGeometry::new(400.0, 5).unwrap();
    assert_eq!(track.width, 400.0);
    assert_eq!(track.segment_width, 100.0);
    assert_eq!(track.half_segment, 50.0);
}

#[test]
fn track_metrics_for_two_values() {
    let track = TrackGeometry::new(300.0, 2).unwrap();
    assert_eq!(track.segment_width, 300.0);
    assert_eq!(track.half_segment, 150.0);
}

// =============================================================
// Boundary table
// =============================================================

#[test]
fn boundaries_for_five_values() {
    let geometry = build(scale(), 400.0).unwrap();
    assert_eq!(
        bounds(&geometry),
        vec![(0.0, 50.0), (50.0, 150.0), (150.0, 250.0), (250.0, 350.0), (350.0, 400.0)]
    );
}

#[test]
fn only_last_entry_is_closed() {
    let geometry = build(scale(), 400.0).unwrap();
    let closed: Vec<bool> = geometry.entries().iter().map(|e| e.closed).collect();
    assert_eq!(closed, vec![false, false, false, false, true]);
}

#[test]
fn entries_keep_scale_values() {
    let geometry = build(scale(), 400.0).unwrap();
    let values: Vec<i32> = geometry.entries().iter().map(|e| e.value).collect();
    assert_eq!(values, scale());
}

#[test]
fn two_values_split_track_in_half() {
    let geometry = build(vec!["lo", "hi"], 250.0).unwrap();
    assert_eq!(bounds(&geometry), vec![(0.0, 125.0), (125.0, 250.0)]);
}

#[test]
fn boundaries_are_contiguous_and_span_track() {
    for count in 2..40 {
        for width in [1.0, 3.0, 99.0, 100.0, 333.3, 400.0, 401.5, 1234.567] {
            let geometry = build((0..count).collect::<Vec<_>>(), width).unwrap();
            let entries = geometry.entries();
            assert_eq!(entries[0].start, 0.0);
            assert_eq!(entries[entries.len() - 1].end, width);
            for pair in entries.windows(2) {
                assert_eq!(pair[0].end, pair[1].start, "gap or overlap for n={count} w={width}");
                assert!(pair[0].start <= pair[1].start);
            }
        }
    }
}

#[test]
fn interior_interval_matches_segment_formula() {
    let geometry = build((0..7).collect::<Vec<_>>(), 600.0).unwrap();
    let track = geometry.track();
    for (i, entry) in geometry.entries().iter().enumerate().skip(1).take(5) {
        let start = track.segment_width * i as f64 - track.half_segment;
        assert!((entry.start - start).abs() < 1e-9);
        assert!((entry.end - (start + track.segment_width)).abs() < 1e-9);
    }
}

// =============================================================
// Containment
// =============================================================

#[test]
fn half_open_entry_excludes_its_end() {
    let entry = BoundaryEntry { value: 5, start: 50.0, end: 150.0, closed: false };
    assert!(entry.contains(50.0));
    assert!(entry.contains(149.9));
    assert!(!entry.contains(150.0));
    assert!(!entry.contains(49.9));
}

#[test]
fn closed_entry_includes_its_end() {
    let entry = BoundaryEntry { value: 50, start: 350.0, end: 400.0, closed: true };
    assert!(entry.contains(400.0));
    assert!(!entry.contains(400.1));
}

#[test]
fn containment_uses_whole_pixel_bounds() {
    let entry = BoundaryEntry { value: 1, start: 16.67, end: 50.9, closed: false };
    assert_eq!(entry.start_px(), 16.0);
    assert_eq!(entry.end_px(), 50.0);
    assert!(entry.contains(16.0));
    assert!(!entry.contains(50.5));
}

#[test]
fn closed_entry_keeps_fractional_track_end() {
    let entry = BoundaryEntry { value: 1, start: 300.5, end: 401.5, closed: true };
    assert!(entry.contains(401.2));
}

// =============================================================
// Ticks
// =============================================================

#[test]
fn ticks_sit_on_segment_multiples() {
    let geometry = build(scale(), 400.0).unwrap();
    let positions: Vec<f64> = geometry.ticks().map(|t| t.position).collect();
    assert_eq!(positions, vec![0.0, 100.0, 200.0, 300.0, 400.0]);
}

#[test]
fn ticks_carry_values_and_label_width() {
    let geometry = build(scale(), 400.0).unwrap();
    let ticks: Vec<_> = geometry.ticks().collect();
    assert_eq!(ticks.len(), 5);
    assert_eq!(*ticks[3].value, 20);
    assert!(ticks.iter().all(|t| t.label_width == 100.0));
}

#[test]
fn last_tick_lands_on_track_width() {
    let geometry = build((0..4).collect::<Vec<_>>(), 100.0).unwrap();
    assert_eq!(geometry.ticks().last().map(|t| t.position), Some(100.0));
}
