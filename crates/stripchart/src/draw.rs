//! Backend-neutral drawing.
//!
//! The chart describes a frame as a flat list of [`DrawCommand`]s using a
//! cairo-like path model: build a path with `move_to`/`line_to`/`rectangle`,
//! then consume it with `stroke`, `fill` or `clip`. A toolkit integration
//! implements [`Canvas`] once and replays any frame onto it.

use glam::Vec2;
use stripchart_core::Color;

use crate::grid::DashPattern;
use crate::rect::Rect;
use crate::text::FontSpec;

/// Drawing surface capability.
///
/// State (`set_color`, `set_line_width`, `set_dash`, clip) is scoped by
/// `save`/`restore` pairs, which always balance within a frame.
pub trait Canvas {
    fn save(&mut self);
    fn restore(&mut self);

    /// Add a closed rectangle to the current path.
    fn rectangle(&mut self, rect: Rect);
    /// Intersect the clip region with the current path and clear the path.
    fn clip(&mut self);

    fn move_to(&mut self, point: Vec2);
    fn line_to(&mut self, point: Vec2);
    fn close_path(&mut self);

    /// Outline the current path and clear it.
    fn stroke(&mut self);
    /// Fill the current path and clear it.
    fn fill(&mut self);

    fn set_color(&mut self, color: Color);
    fn set_line_width(&mut self, width: f32);
    fn set_dash(&mut self, dash: &DashPattern);

    /// Draw text with the top-left corner of its layout box at `origin`.
    fn draw_text(&mut self, origin: Vec2, text: &str, font: &FontSpec);
    /// Draw text rotated 90° counter-clockwise so it reads bottom to top.
    ///
    /// `origin` is where the layout box's top-left corner lands after the
    /// rotation, i.e. the start of the text.
    fn draw_text_vertical(&mut self, origin: Vec2, text: &str, font: &FontSpec);
}

/// One recorded canvas operation.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Save,
    Restore,
    Rectangle(Rect),
    Clip,
    MoveTo(Vec2),
    LineTo(Vec2),
    ClosePath,
    Stroke,
    Fill,
    SetColor(Color),
    SetLineWidth(f32),
    SetDash(DashPattern),
    Text {
        origin: Vec2,
        text: String,
        font: FontSpec,
    },
    VerticalText {
        origin: Vec2,
        text: String,
        font: FontSpec,
    },
}

impl DrawCommand {
    /// Forward this command to a canvas.
    pub fn apply<C: Canvas + ?Sized>(&self, canvas: &mut C) {
        match self {
            DrawCommand::Save => canvas.save(),
            DrawCommand::Restore => canvas.restore(),
            DrawCommand::Rectangle(rect) => canvas.rectangle(*rect),
            DrawCommand::Clip => canvas.clip(),
            DrawCommand::MoveTo(point) => canvas.move_to(*point),
            DrawCommand::LineTo(point) => canvas.line_to(*point),
            DrawCommand::ClosePath => canvas.close_path(),
            DrawCommand::Stroke => canvas.stroke(),
            DrawCommand::Fill => canvas.fill(),
            DrawCommand::SetColor(color) => canvas.set_color(*color),
            DrawCommand::SetLineWidth(width) => canvas.set_line_width(*width),
            DrawCommand::SetDash(dash) => canvas.set_dash(dash),
            DrawCommand::Text { origin, text, font } => canvas.draw_text(*origin, text, font),
            DrawCommand::VerticalText { origin, text, font } => {
                canvas.draw_text_vertical(*origin, text, font)
            }
        }
    }
}

/// An ordered list of draw commands making up one frame.
///
/// `DrawList` is itself a [`Canvas`], so drawing code can record into it
/// exactly as it would draw onto a live surface.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DrawList {
    commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DrawCommand> {
        self.commands.iter()
    }

    /// Number of commands matching `predicate`.
    pub fn count(&self, predicate: impl Fn(&DrawCommand) -> bool) -> usize {
        self.commands.iter().filter(|c| predicate(c)).count()
    }

    /// Replay every command, in order, onto `canvas`.
    pub fn replay<C: Canvas + ?Sized>(&self, canvas: &mut C) {
        for command in &self.commands {
            command.apply(canvas);
        }
    }

    pub fn into_commands(self) -> Vec<DrawCommand> {
        self.commands
    }
}

impl<'a> IntoIterator for &'a DrawList {
    type Item = &'a DrawCommand;
    type IntoIter = std::slice::Iter<'a, DrawCommand>;

    fn into_iter(self) -> Self::IntoIter {
        self.commands.iter()
    }
}

impl Canvas for DrawList {
    fn save(&mut self) {
        self.push(DrawCommand::Save);
    }

    fn restore(&mut self) {
        self.push(DrawCommand::Restore);
    }

    fn rectangle(&mut self, rect: Rect) {
        self.push(DrawCommand::Rectangle(rect));
    }

    fn clip(&mut self) {
        self.push(DrawCommand::Clip);
    }

    fn move_to(&mut self, point: Vec2) {
        self.push(DrawCommand::MoveTo(point));
    }

    fn line_to(&mut self, point: Vec2) {
        self.push(DrawCommand::LineTo(point));
    }

    fn close_path(&mut self) {
        self.push(DrawCommand::ClosePath);
    }

    fn stroke(&mut self) {
        self.push(DrawCommand::Stroke);
    }

    fn fill(&mut self) {
        self.push(DrawCommand::Fill);
    }

    fn set_color(&mut self, color: Color) {
        self.push(DrawCommand::SetColor(color));
    }

    fn set_line_width(&mut self, width: f32) {
        self.push(DrawCommand::SetLineWidth(width));
    }

    fn set_dash(&mut self, dash: &DashPattern) {
        self.push(DrawCommand::SetDash(dash.clone()));
    }

    fn draw_text(&mut self, origin: Vec2, text: &str, font: &FontSpec) {
        self.push(DrawCommand::Text {
            origin,
            text: text.to_owned(),
            font: font.clone(),
        });
    }

    fn draw_text_vertical(&mut self, origin: Vec2, text: &str, font: &FontSpec) {
        self.push(DrawCommand::VerticalText {
            origin,
            text: text.to_owned(),
            font: font.clone(),
        });
    }
}
