//! Whole-frame rendering tests.
//!
//! Frames are replayed onto a `RecordingCanvas` so assertions can be made
//! against what would actually be painted, with the colour, dash and clip in
//! effect at the time.

use glam::Vec2;
use stripchart::{
    ChartConfig, DashPattern, Graphable, LayoutState, REDLINE_COLOR, Rect, StripChart,
    TelemetrySource, Viewport,
};
use stripchart_core::Color;
use stripchart_test_utils::{FixedMetrics, PaintOp, PathSegment, RecordingCanvas};

const VIEWPORT: Viewport = Viewport {
    width: 400.0,
    height: 300.0,
};

fn render(
    chart: &StripChart,
    now: f64,
    sources: &[&dyn Graphable],
) -> (RecordingCanvas, LayoutState) {
    let mut canvas = RecordingCanvas::new();
    let layout = chart.render_to(
        &mut canvas,
        chart.initial_layout(),
        now,
        Some(VIEWPORT),
        sources,
        &FixedMetrics::default(),
    );
    (canvas, layout)
}

fn source_with_ramp(name: &str, color: Color, samples: usize) -> TelemetrySource {
    let mut source = TelemetrySource::new(name, color);
    for i in 0..samples {
        source.record("load", i as f64, (i * 5) as f32);
    }
    source
}

fn gridline_strokes(canvas: &RecordingCanvas) -> Vec<(Vec2, Vec2)> {
    canvas
        .strokes()
        .into_iter()
        .filter(|(_, state)| state.dash == DashPattern::dotted(1.0))
        .filter_map(|(path, _)| match path {
            [PathSegment::MoveTo(a), PathSegment::LineTo(b)] => Some((*a, *b)),
            _ => None,
        })
        .collect()
}

#[test]
fn test_frame_is_balanced_and_clipped_to_viewport() {
    let chart = StripChart::default();
    let (canvas, _) = render(&chart, 0.0, &[]);

    assert!(canvas.is_balanced());
    assert!(canvas.pending_path().is_empty());

    // first paint is the plot background, inside the viewport clip
    match &canvas.ops()[0] {
        PaintOp::Fill { path, state } => {
            assert_eq!(path, &[PathSegment::Rect(Rect::new(70.0, 10.0, 310.0, 270.0))]);
            assert_eq!(state.color, Color::WHITE);
            assert_eq!(state.clip, Some(Rect::new(0.0, 0.0, 400.0, 300.0)));
        }
        other => panic!("expected background fill, got {:?}", other),
    }
}

#[test]
fn test_axes_path() {
    let chart = StripChart::default();
    let (canvas, _) = render(&chart, 0.0, &[]);

    let (path, state) = canvas.strokes()[0];
    assert_eq!(
        path,
        &[
            PathSegment::MoveTo(Vec2::new(70.5, 10.0)),
            PathSegment::LineTo(Vec2::new(70.5, 280.5)),
            PathSegment::LineTo(Vec2::new(380.5, 280.5)),
        ]
    );
    assert_eq!(state.color, Color::BLACK);
    assert_eq!(state.line_width, 1.0);
    assert!(state.dash.is_solid());
}

#[test]
fn test_no_viewport_draws_nothing() {
    let chart = StripChart::default();
    let mut canvas = RecordingCanvas::new();
    let metrics = FixedMetrics::default();
    let layout = chart.render_to(
        &mut canvas,
        chart.initial_layout(),
        0.0,
        None,
        &[],
        &metrics,
    );

    assert_eq!(canvas.call_count(), 0);
    assert_eq!(metrics.measure_count(), 0);
    assert_eq!(layout, chart.initial_layout());
}

#[test]
fn test_horizontal_gridlines_for_default_scale() {
    let chart = StripChart::default();
    let (canvas, _) = render(&chart, 0.0, &[]);

    let ys: Vec<f32> = gridline_strokes(&canvas)
        .into_iter()
        .filter(|(a, b)| a.y == b.y)
        .map(|(a, _)| a.y)
        .collect();

    // 10..=100 in steps of 10: 27px apart, snapped to pixel centres
    assert_eq!(ys.len(), 10);
    assert_eq!(ys[0], 253.5);
    assert_eq!(ys[9], 10.5);

    let texts = canvas.texts();
    for label in ["10 %", "50 %", "100 %"] {
        assert!(texts.contains(&label), "missing label {}", label);
    }
    assert!(!texts.contains(&"0 %"));
}

#[test]
fn test_vertical_gridlines_walk_back_from_now() {
    let chart = StripChart::default();
    let (canvas, _) = render(&chart, 100.0, &[]);

    let xs: Vec<f32> = gridline_strokes(&canvas)
        .into_iter()
        .filter(|(a, b)| a.x == b.x)
        .map(|(a, _)| a.x)
        .collect();
    assert_eq!(xs, vec![380.5, 280.5, 180.5, 80.5]);

    let texts = canvas.texts();
    for label in ["0:00", "0:10", "0:20", "0:30"] {
        assert!(texts.contains(&label), "missing label {}", label);
    }
    assert!(!texts.contains(&"0:40"));
}

#[test]
fn test_gridline_style() {
    let chart = StripChart::default();
    let (canvas, _) = render(&chart, 0.0, &[]);

    for (_, state) in canvas
        .strokes()
        .into_iter()
        .filter(|(_, s)| !s.dash.is_solid())
    {
        assert_eq!(state.line_width, 0.5);
        assert_eq!(state.color, Color::BLACK);
    }
}

#[test]
fn test_redlines_disabled_by_default() {
    let chart = StripChart::default();
    let (canvas, _) = render(&chart, 0.0, &[]);

    assert!(
        canvas
            .fills()
            .iter()
            .all(|(_, state)| state.color != REDLINE_COLOR)
    );
}

#[test]
fn test_redline_bands() {
    let chart = StripChart::new(ChartConfig::default().with_redlines(20.0, 80.0)).unwrap();
    let (canvas, _) = render(&chart, 0.0, &[]);

    let bands: Vec<Rect> = canvas
        .fills()
        .into_iter()
        .filter(|(_, state)| state.color == REDLINE_COLOR)
        .filter_map(|(path, _)| match path {
            [PathSegment::Rect(r)] => Some(*r),
            _ => None,
        })
        .collect();
    assert_eq!(bands.len(), 2);

    // low band: y(20) = 226 down to the bottom edge
    assert!((bands[0].y - 226.0).abs() < 1e-3);
    assert!((bands[0].bottom() - 280.0).abs() < 1e-3);
    // high band: top edge down to y(80) = 64
    assert!((bands[1].y - 10.0).abs() < 1e-3);
    assert!((bands[1].bottom() - 64.0).abs() < 1e-3);
}

#[test]
fn test_redline_on_scale_edge_is_disabled() {
    let chart = StripChart::new(ChartConfig::default().with_redlines(0.0, 90.0)).unwrap();
    let (canvas, _) = render(&chart, 0.0, &[]);

    let bands = canvas
        .fills()
        .into_iter()
        .filter(|(_, state)| state.color == REDLINE_COLOR)
        .count();
    assert_eq!(bands, 1);
}

#[test]
fn test_series_segments_and_clip() {
    let chart = StripChart::new(ChartConfig::default().with_series_name("load")).unwrap();
    let cpu = source_with_ramp("cpu", Color::RED, 12);
    let sources: [&dyn Graphable; 1] = [&cpu];
    let (canvas, _) = render(&chart, 12.0, &sources);

    let series: Vec<_> = canvas
        .strokes()
        .into_iter()
        .filter(|(_, state)| state.color == Color::RED)
        .collect();
    assert_eq!(series.len(), 1);

    let (path, state) = series[0];
    let line_tos = path
        .iter()
        .filter(|s| matches!(s, PathSegment::LineTo(_)))
        .count();
    assert_eq!(line_tos, 11);
    assert_eq!(state.clip, Some(Rect::new(70.0, 10.0, 310.0, 270.0)));
    assert_eq!(state.line_width, 1.0);
}

#[test]
fn test_short_series_not_drawn() {
    let chart = StripChart::new(ChartConfig::default().with_series_name("load")).unwrap();
    let lonely = source_with_ramp("lonely", Color::RED, 1);
    let sources: [&dyn Graphable; 1] = [&lonely];
    let (canvas, _) = render(&chart, 1.0, &sources);

    assert!(
        canvas
            .strokes()
            .iter()
            .all(|(_, state)| state.color != Color::RED)
    );
}

#[test]
fn test_only_selected_subseries_is_drawn() {
    let chart = StripChart::new(ChartConfig::default().with_series_name("temperature")).unwrap();
    let cpu = source_with_ramp("cpu", Color::RED, 10);
    let sources: [&dyn Graphable; 1] = [&cpu];
    let (canvas, _) = render(&chart, 10.0, &sources);

    assert!(
        canvas
            .strokes()
            .iter()
            .all(|(_, state)| state.color != Color::RED)
    );
    // still listed in the legend
    assert!(canvas.texts().contains(&"cpu"));
}

#[test]
fn test_legend_lists_sources_in_order() {
    let chart = StripChart::new(ChartConfig::default().with_series_name("load")).unwrap();
    let a = source_with_ramp("alpha", Color::RED, 3);
    let b = source_with_ramp("beta", Color::BLUE, 3).with_visible(false);
    let sources: [&dyn Graphable; 2] = [&a, &b];
    let (canvas, _) = render(&chart, 3.0, &sources);

    let legend: Vec<(&str, Vec2, Color)> = canvas
        .ops()
        .iter()
        .filter_map(|op| match op {
            PaintOp::Text {
                text,
                origin,
                state,
                ..
            } if text == "alpha" || text == "beta" => Some((text.as_str(), *origin, state.color)),
            _ => None,
        })
        .collect();

    assert_eq!(
        legend,
        vec![
            ("alpha", Vec2::new(74.0, 14.0), Color::RED),
            ("beta", Vec2::new(74.0, 29.0), Color::BLUE),
        ]
    );

    // background plus the legend box: 5 glyphs * 6px + 4, two 15px lines + 4
    let white: Vec<_> = canvas
        .fills()
        .into_iter()
        .filter(|(_, state)| state.color == Color::WHITE)
        .collect();
    assert_eq!(white.len(), 2);
    assert_eq!(white[1].0, &[PathSegment::Rect(Rect::new(72.0, 12.0, 34.0, 34.0))]);
}

#[test]
fn test_legend_can_be_disabled() {
    let chart = StripChart::new(ChartConfig::default().with_draw_legend(false)).unwrap();
    let a = source_with_ramp("alpha", Color::RED, 3);
    let sources: [&dyn Graphable; 1] = [&a];
    let (canvas, _) = render(&chart, 3.0, &sources);

    assert!(!canvas.texts().contains(&"alpha"));
}

#[test]
fn test_vertical_title_is_centred() {
    let chart = StripChart::new(ChartConfig::default().with_y_axis_title("Load")).unwrap();
    let (canvas, _) = render(&chart, 0.0, &[]);

    let title = canvas.ops().iter().find_map(|op| match op {
        PaintOp::Text {
            text,
            origin,
            vertical: true,
            ..
        } => Some((text.clone(), *origin)),
        _ => None,
    });
    // body height 270 / 2 + 24px / 2
    assert_eq!(title, Some(("Load".to_owned(), Vec2::new(10.0, 147.0))));
}

#[test]
fn test_no_title_when_empty() {
    let chart = StripChart::default();
    let (canvas, _) = render(&chart, 0.0, &[]);
    assert!(
        !canvas
            .ops()
            .iter()
            .any(|op| matches!(op, PaintOp::Text { vertical: true, .. }))
    );
}
