use approx::assert_abs_diff_eq;
use window_graph::ChartError;
use window_graph::core::{
    ChartScale, ValueRange, ValueRangeTuning, Viewport, VisibleWindow, WindowSize,
    map_index_to_x, map_value_to_y, slot_width,
};

const SCENARIO: [f64; 12] = [
    5.0, 11.0, 22.0, 98.0, 32.0, 69.0, 88.0, 45.0, 52.0, 36.0, 1.0, 73.0,
];

fn full_range(samples: &[f64], tuning: ValueRangeTuning) -> ValueRange {
    let window = VisibleWindow::resolve(samples.len(), WindowSize::All).expect("window");
    ValueRange::from_window(samples, window, tuning).expect("range")
}

#[test]
fn scenario_range_pads_minimum_from_padded_maximum() {
    let range = full_range(&SCENARIO, ValueRangeTuning::default());

    // raw: min 0 (anchored), max 98, diff 98
    assert_abs_diff_eq!(range.maximum, 117.6, epsilon = 1e-9);
    assert_abs_diff_eq!(range.minimum, -23.52, epsilon = 1e-9);
}

#[test]
fn mixed_sign_range_does_not_use_fallback() {
    let range = full_range(&[5.0, -2.0, 5.0], ValueRangeTuning::default());

    // diff = 7 -> max 5 + 1.4, min -2 - (6.4 + 2) * 0.2
    assert_abs_diff_eq!(range.maximum, 6.4, epsilon = 1e-9);
    assert_abs_diff_eq!(range.minimum, -3.68, epsilon = 1e-9);
}

#[test]
fn flat_window_is_still_anchored_at_zero_by_default() {
    let range = full_range(&[4.0, 4.0, 4.0], ValueRangeTuning::default());

    assert_abs_diff_eq!(range.maximum, 4.8, epsilon = 1e-9);
    assert_abs_diff_eq!(range.minimum, -0.96, epsilon = 1e-9);
}

#[test]
fn flat_window_without_zero_anchor_uses_fallback_span() {
    let tuning = ValueRangeTuning {
        anchor_zero: false,
        ..ValueRangeTuning::default()
    };
    let range = full_range(&[4.0, 4.0, 4.0], tuning);

    // raw diff 0 -> fallback 5 -> max 4 + 1, min 4 - (5 - 4) * 0.2
    assert_abs_diff_eq!(range.maximum, 5.0, epsilon = 1e-9);
    assert_abs_diff_eq!(range.minimum, 3.8, epsilon = 1e-9);
}

#[test]
fn all_zero_window_uses_fallback_span() {
    let range = full_range(&[0.0, 0.0], ValueRangeTuning::default());

    assert_abs_diff_eq!(range.maximum, 1.0, epsilon = 1e-9);
    assert_abs_diff_eq!(range.minimum, -0.2, epsilon = 1e-9);
    assert!(range.span() > 0.0);
}

#[test]
fn all_negative_window_keeps_zero_in_range() {
    let range = full_range(&[-3.0, -10.0], ValueRangeTuning::default());

    assert_abs_diff_eq!(range.maximum, 2.0, epsilon = 1e-9);
    assert_abs_diff_eq!(range.minimum, -12.4, epsilon = 1e-9);
    assert!(range.contains(0.0));
}

#[test]
fn range_only_scans_visible_window() {
    let samples = [500.0, -500.0, 1.0, 2.0, 3.0];
    let window = VisibleWindow::resolve(samples.len(), WindowSize::Last(3)).expect("window");
    let range = ValueRange::from_window(&samples, window, ValueRangeTuning::default())
        .expect("range");

    assert_abs_diff_eq!(range.maximum, 3.6, epsilon = 1e-9);
    assert_abs_diff_eq!(range.minimum, -0.72, epsilon = 1e-9);
}

#[test]
fn non_finite_samples_are_rejected() {
    let window = VisibleWindow::resolve(2, WindowSize::All).expect("window");
    let result = ValueRange::from_window(&[1.0, f64::NAN], window, ValueRangeTuning::default());
    assert!(matches!(result, Err(ChartError::InvalidData(_))));
}

#[test]
fn invalid_tuning_is_rejected() {
    let window = VisibleWindow::resolve(1, WindowSize::All).expect("window");
    let tuning = ValueRangeTuning {
        fallback_span: 0.0,
        ..ValueRangeTuning::default()
    };
    assert!(ValueRange::from_window(&[1.0], window, tuning).is_err());
}

#[test]
fn slot_width_and_index_mapping_follow_window_size() {
    let slot = slot_width(600.0, 12);
    assert_abs_diff_eq!(slot, 600.0 / 13.0, epsilon = 1e-12);
    assert_abs_diff_eq!(map_index_to_x(0, slot), slot, epsilon = 1e-12);
    assert_abs_diff_eq!(map_index_to_x(11, slot), slot * 12.0, epsilon = 1e-12);
}

#[test]
fn value_mapping_spans_viewport_height() {
    let range = ValueRange {
        minimum: -10.0,
        maximum: 30.0,
    };
    assert_abs_diff_eq!(map_value_to_y(-10.0, range, 300.0), 0.0, epsilon = 1e-12);
    assert_abs_diff_eq!(map_value_to_y(30.0, range, 300.0), 300.0, epsilon = 1e-12);
    assert_abs_diff_eq!(map_value_to_y(10.0, range, 300.0), 150.0, epsilon = 1e-12);
}

#[test]
fn chart_scale_positions_use_offset_inside_window() {
    let samples = [1.0, 2.0, 3.0, 4.0, 5.0];
    let window = VisibleWindow::resolve(samples.len(), WindowSize::Last(2)).expect("window");
    let scale = ChartScale::fit(
        &samples,
        Viewport::new(300.0, 100.0),
        window,
        ValueRangeTuning::default(),
    )
    .expect("scale");

    assert_abs_diff_eq!(scale.slot_width, 100.0, epsilon = 1e-12);
    let first = scale.position(3, 4.0);
    let second = scale.position(4, 5.0);
    assert_abs_diff_eq!(first.x, 100.0, epsilon = 1e-12);
    assert_abs_diff_eq!(second.x, 200.0, epsilon = 1e-12);
    assert!(second.y > first.y);
}

#[test]
fn chart_scale_rejects_invalid_viewport() {
    let window = VisibleWindow::resolve(1, WindowSize::All).expect("window");
    for viewport in [
        Viewport::new(0.0, 100.0),
        Viewport::new(100.0, -1.0),
        Viewport::new(f64::INFINITY, 100.0),
    ] {
        let result = ChartScale::fit(&[1.0], viewport, window, ValueRangeTuning::default());
        assert!(matches!(result, Err(ChartError::InvalidViewport { .. })));
    }
}
