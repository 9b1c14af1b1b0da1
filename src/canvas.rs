use crate::dom::{self, js_err};
use acqmap_core::DrawSurface;
use anyhow::anyhow;
use wasm_bindgen::JsCast;
use web_sys as web;

/// [`DrawSurface`] backed by a canvas 2D context.
pub struct CanvasSurface {
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: &web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(js_err)?
            .ok_or_else(|| anyhow!("canvas has no 2d context"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow!("{:?}", e))?;
        let style = canvas.style();
        let _ = style.set_property("display", "block");
        let _ = style.set_property("margin", "auto");
        Ok(Self { ctx })
    }

    /// Size the canvas to `width` CSS pixels square, with a backing store
    /// scaled by the device pixel ratio.
    pub fn resize(&self, canvas: &web::HtmlCanvasElement, width: f64) {
        let dpr = dom::device_pixel_ratio();
        let px = (width * dpr).round().max(1.0) as u32;
        canvas.set_width(px);
        canvas.set_height(px);
        let style = canvas.style();
        let _ = style.set_property("width", &format!("{}px", width));
        let _ = style.set_property("height", &format!("{}px", width));
        let _ = self.ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0);
    }
}

impl DrawSurface for CanvasSurface {
    fn clear_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        self.ctx.clear_rect(x, y, w, h);
    }
    fn set_line_width(&mut self, width: f64) {
        self.ctx.set_line_width(width);
    }
    fn set_fill_style(&mut self, css: &str) {
        self.ctx.set_fill_style_str(css);
    }
    fn begin_path(&mut self) {
        self.ctx.begin_path();
    }
    fn move_to(&mut self, x: f64, y: f64) {
        self.ctx.move_to(x, y);
    }
    fn line_to(&mut self, x: f64, y: f64) {
        self.ctx.line_to(x, y);
    }
    fn arc(&mut self, x: f64, y: f64, radius: f64, start: f64, end: f64) {
        // negative radii throw; they never come out of the mapper
        let _ = self.ctx.arc(x, y, radius.max(0.0), start, end);
    }
    fn close_path(&mut self) {
        self.ctx.close_path();
    }
    fn fill(&mut self) {
        self.ctx.fill();
    }
    fn stroke(&mut self) {
        self.ctx.stroke();
    }
}
