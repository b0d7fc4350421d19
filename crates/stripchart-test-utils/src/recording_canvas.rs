//! A canvas that records resolved paint operations.
//!
//! Rather than logging raw calls, [`RecordingCanvas`] keeps a small cairo-style
//! state machine (current path, colour, line width, dash, clip and a
//! save/restore stack) and records each `stroke`, `fill` and text call with the
//! state it would have been painted in.

use glam::Vec2;
use stripchart::{Canvas, DashPattern, FontSpec, Rect};
use stripchart_core::Color;

/// Graphics state captured at paint time.
#[derive(Debug, Clone, PartialEq)]
pub struct PaintState {
    pub color: Color,
    pub line_width: f32,
    pub dash: DashPattern,
    /// Intersection of every clip in effect, as a bounding rectangle.
    pub clip: Option<Rect>,
}

impl Default for PaintState {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            line_width: 2.0,
            dash: DashPattern::SOLID,
            clip: None,
        }
    }
}

/// One element of a path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathSegment {
    MoveTo(Vec2),
    LineTo(Vec2),
    Rect(Rect),
    Close,
}

/// A recorded paint operation.
#[derive(Debug, Clone, PartialEq)]
pub enum PaintOp {
    Stroke {
        path: Vec<PathSegment>,
        state: PaintState,
    },
    Fill {
        path: Vec<PathSegment>,
        state: PaintState,
    },
    Text {
        origin: Vec2,
        text: String,
        font: FontSpec,
        vertical: bool,
        state: PaintState,
    },
}

impl PaintOp {
    pub fn state(&self) -> &PaintState {
        match self {
            PaintOp::Stroke { state, .. }
            | PaintOp::Fill { state, .. }
            | PaintOp::Text { state, .. } => state,
        }
    }
}

/// Records what a frame would paint.
///
/// # Example
///
/// ```rust
/// use glam::Vec2;
/// use stripchart::Canvas;
/// use stripchart_core::Color;
/// use stripchart_test_utils::RecordingCanvas;
///
/// let mut canvas = RecordingCanvas::new();
/// canvas.save();
/// canvas.set_color(Color::RED);
/// canvas.move_to(Vec2::ZERO);
/// canvas.line_to(Vec2::new(10.0, 0.0));
/// canvas.stroke();
/// canvas.restore();
///
/// assert_eq!(canvas.strokes().len(), 1);
/// assert_eq!(canvas.ops()[0].state().color, Color::RED);
/// assert!(canvas.is_balanced());
/// ```
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    ops: Vec<PaintOp>,
    state: PaintState,
    stack: Vec<PaintState>,
    path: Vec<PathSegment>,
    max_depth: usize,
    unmatched_restores: usize,
    calls: usize,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ops(&self) -> &[PaintOp] {
        &self.ops
    }

    /// Paths of every stroke, with the state they were stroked in.
    pub fn strokes(&self) -> Vec<(&[PathSegment], &PaintState)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                PaintOp::Stroke { path, state } => Some((path.as_slice(), state)),
                _ => None,
            })
            .collect()
    }

    /// Paths of every fill, with the state they were filled in.
    pub fn fills(&self) -> Vec<(&[PathSegment], &PaintState)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                PaintOp::Fill { path, state } => Some((path.as_slice(), state)),
                _ => None,
            })
            .collect()
    }

    /// Every string drawn, horizontal and vertical, in draw order.
    pub fn texts(&self) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                PaintOp::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Current save/restore nesting depth.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Deepest save/restore nesting seen.
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// True when every `save` was restored and no `restore` was unmatched.
    pub fn is_balanced(&self) -> bool {
        self.stack.is_empty() && self.unmatched_restores == 0
    }

    /// Path segments built but never stroked, filled or clipped.
    pub fn pending_path(&self) -> &[PathSegment] {
        &self.path
    }

    /// Total number of canvas calls received.
    pub fn call_count(&self) -> usize {
        self.calls
    }

    fn take_path(&mut self) -> Vec<PathSegment> {
        std::mem::take(&mut self.path)
    }

    fn path_bounds(path: &[PathSegment]) -> Option<Rect> {
        let mut min = Vec2::splat(f32::INFINITY);
        let mut max = Vec2::splat(f32::NEG_INFINITY);
        for segment in path {
            match *segment {
                PathSegment::MoveTo(p) | PathSegment::LineTo(p) => {
                    min = min.min(p);
                    max = max.max(p);
                }
                PathSegment::Rect(r) => {
                    min = min.min(r.position());
                    max = max.max(r.position() + r.size());
                }
                PathSegment::Close => {}
            }
        }
        (min.x <= max.x).then(|| Rect::from_edges(min.x, min.y, max.x, max.y))
    }

    fn intersect(a: Rect, b: Rect) -> Rect {
        let left = a.x.max(b.x);
        let top = a.y.max(b.y);
        let right = a.right().min(b.right()).max(left);
        let bottom = a.bottom().min(b.bottom()).max(top);
        Rect::from_edges(left, top, right, bottom)
    }
}

impl Canvas for RecordingCanvas {
    fn save(&mut self) {
        self.calls += 1;
        self.stack.push(self.state.clone());
        self.max_depth = self.max_depth.max(self.stack.len());
    }

    fn restore(&mut self) {
        self.calls += 1;
        match self.stack.pop() {
            Some(state) => self.state = state,
            None => self.unmatched_restores += 1,
        }
    }

    fn rectangle(&mut self, rect: Rect) {
        self.calls += 1;
        self.path.push(PathSegment::Rect(rect));
    }

    fn clip(&mut self) {
        self.calls += 1;
        let path = self.take_path();
        if let Some(bounds) = Self::path_bounds(&path) {
            self.state.clip = Some(match self.state.clip {
                Some(current) => Self::intersect(current, bounds),
                None => bounds,
            });
        }
    }

    fn move_to(&mut self, point: Vec2) {
        self.calls += 1;
        self.path.push(PathSegment::MoveTo(point));
    }

    fn line_to(&mut self, point: Vec2) {
        self.calls += 1;
        self.path.push(PathSegment::LineTo(point));
    }

    fn close_path(&mut self) {
        self.calls += 1;
        self.path.push(PathSegment::Close);
    }

    fn stroke(&mut self) {
        self.calls += 1;
        let path = self.take_path();
        self.ops.push(PaintOp::Stroke {
            path,
            state: self.state.clone(),
        });
    }

    fn fill(&mut self) {
        self.calls += 1;
        let path = self.take_path();
        self.ops.push(PaintOp::Fill {
            path,
            state: self.state.clone(),
        });
    }

    fn set_color(&mut self, color: Color) {
        self.calls += 1;
        self.state.color = color;
    }

    fn set_line_width(&mut self, width: f32) {
        self.calls += 1;
        self.state.line_width = width;
    }

    fn set_dash(&mut self, dash: &DashPattern) {
        self.calls += 1;
        self.state.dash = dash.clone();
    }

    fn draw_text(&mut self, origin: Vec2, text: &str, font: &FontSpec) {
        self.calls += 1;
        self.ops.push(PaintOp::Text {
            origin,
            text: text.to_owned(),
            font: font.clone(),
            vertical: false,
            state: self.state.clone(),
        });
    }

    fn draw_text_vertical(&mut self, origin: Vec2, text: &str, font: &FontSpec) {
        self.calls += 1;
        self.ops.push(PaintOp::Text {
            origin,
            text: text.to_owned(),
            font: font.clone(),
            vertical: true,
            state: self.state.clone(),
        });
    }
}
