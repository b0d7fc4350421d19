//! Margin growth across successive frames.

use stripchart::{ChartConfig, LayoutState, Margins, StripChart, Viewport};
use stripchart_test_utils::FixedMetrics;

const VIEWPORT: Option<Viewport> = Some(Viewport {
    width: 600.0,
    height: 400.0,
});

fn next(chart: &StripChart, layout: LayoutState, now: f64, metrics: &FixedMetrics) -> LayoutState {
    chart.render_frame(layout, now, VIEWPORT, &[], metrics).layout
}

#[test]
fn test_defaults_fit_without_growth() {
    let chart = StripChart::default();
    let layout = next(&chart, chart.initial_layout(), 0.0, &FixedMetrics::default());
    assert_eq!(layout.margins, Margins::default());
}

#[test]
fn test_wide_value_labels_grow_left_margin() {
    // "100 degrees Celsius" is 19 glyphs, 114px at 6px each
    let chart = StripChart::new(ChartConfig::default().with_units("degrees Celsius", 1.0)).unwrap();
    let metrics = FixedMetrics::default();

    let first = chart.initial_layout();
    let frame = chart.render_frame(first, 0.0, VIEWPORT, &[], &metrics);
    assert_eq!(frame.layout.margins.left, 124.0);

    // the frame that triggered growth was still drawn with the old margin
    assert!(!frame.commands.is_empty());

    // once grown the label fits exactly at x = 5 and nothing changes
    let settled = next(&chart, frame.layout, 1.0, &metrics);
    assert_eq!(settled, frame.layout);
}

#[test]
fn test_tall_labels_grow_bottom_margin() {
    let chart = StripChart::default();
    let metrics = FixedMetrics::new(6.0, 22.0);
    let layout = next(&chart, chart.initial_layout(), 0.0, &metrics);
    assert_eq!(layout.margins.bottom, 27.0);
}

#[test]
fn test_margins_never_shrink() {
    let mut chart = StripChart::new(ChartConfig::default().with_units("kilowatt hours", 1.0)).unwrap();
    let big = FixedMetrics::new(7.0, 30.0);
    let small = FixedMetrics::new(3.0, 8.0);

    let mut layout = chart.initial_layout();
    let mut previous = layout.margins;
    for frame in 0..20 {
        let metrics = if frame % 3 == 0 { &big } else { &small };
        if frame == 10 {
            chart.set_units("W", 1.0).unwrap();
        }

        layout = next(&chart, layout, frame as f64, metrics);
        assert!(
            layout.margins.covers(&previous),
            "frame {}: {:?} shrank from {:?}",
            frame,
            layout.margins,
            previous
        );
        previous = layout.margins;
    }
    assert!(layout.margins.left > Margins::default().left);
    assert!(layout.margins.bottom > Margins::default().bottom);
}

#[test]
fn test_unrenderable_frame_keeps_layout() {
    let chart = StripChart::default();
    let grown = LayoutState::new(Margins::new(300.0, 300.0, 10.0, 20.0));
    let frame = chart.render_frame(grown, 0.0, VIEWPORT, &[], &FixedMetrics::default());
    assert!(frame.is_empty());
    assert_eq!(frame.layout, grown);
}
