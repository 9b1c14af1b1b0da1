//! The 2D drawing operations the globe needs, kept independent of any
//! canvas implementation.

/// A retained-path drawing surface with the semantics of a 2D canvas context.
pub trait DrawSurface {
    fn clear_rect(&mut self, x: f64, y: f64, w: f64, h: f64);
    fn set_line_width(&mut self, width: f64);
    fn set_fill_style(&mut self, css: &str);
    fn begin_path(&mut self);
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    fn arc(&mut self, x: f64, y: f64, radius: f64, start: f64, end: f64);
    fn close_path(&mut self);
    fn fill(&mut self);
    fn stroke(&mut self);
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCall {
    ClearRect { x: f64, y: f64, w: f64, h: f64 },
    SetLineWidth(f64),
    SetFillStyle(String),
    BeginPath,
    MoveTo { x: f64, y: f64 },
    LineTo { x: f64, y: f64 },
    Arc { x: f64, y: f64, radius: f64, start: f64, end: f64 },
    ClosePath,
    Fill,
    Stroke,
}

/// Surface that draws nothing and records every call in order.
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    pub calls: Vec<DrawCall>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DrawSurface for RecordingSurface {
    fn clear_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        self.calls.push(DrawCall::ClearRect { x, y, w, h });
    }
    fn set_line_width(&mut self, width: f64) {
        self.calls.push(DrawCall::SetLineWidth(width));
    }
    fn set_fill_style(&mut self, css: &str) {
        self.calls.push(DrawCall::SetFillStyle(css.to_string()));
    }
    fn begin_path(&mut self) {
        self.calls.push(DrawCall::BeginPath);
    }
    fn move_to(&mut self, x: f64, y: f64) {
        self.calls.push(DrawCall::MoveTo { x, y });
    }
    fn line_to(&mut self, x: f64, y: f64) {
        self.calls.push(DrawCall::LineTo { x, y });
    }
    fn arc(&mut self, x: f64, y: f64, radius: f64, start: f64, end: f64) {
        self.calls.push(DrawCall::Arc {
            x,
            y,
            radius,
            start,
            end,
        });
    }
    fn close_path(&mut self) {
        self.calls.push(DrawCall::ClosePath);
    }
    fn fill(&mut self) {
        self.calls.push(DrawCall::Fill);
    }
    fn stroke(&mut self) {
        self.calls.push(DrawCall::Stroke);
    }
}
