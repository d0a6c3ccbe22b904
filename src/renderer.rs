// Drawing seam between the simulation and the browser. The field only ever talks
// to a `Surface`; `CanvasSurface` is the 2d-context implementation used on the page.

use crate::color::Color;
use crate::error::{FieldError, Result};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement};

pub trait Surface {
    fn clear(&mut self, width: f64, height: f64);
    fn fill_circle(&mut self, center: [f64; 2], radius: f64, color: Color) -> Result<()>;
    fn stroke_line(&mut self, from: [f64; 2], to: [f64; 2], width: f64, color: Color);
}

pub struct CanvasSurface {
    pub canvas: HtmlCanvasElement,
    pub context: CanvasRenderingContext2d,
}

impl CanvasSurface {
    // Looks the canvas up once and grabs its 2d context; every handle the
    // background needs is validated here rather than on each frame
    pub fn acquire(document: &Document, id: &str) -> Result<Self> {
        let canvas = document
            .get_element_by_id(id)
            .ok_or_else(|| FieldError::MissingElement(id.to_owned()))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| FieldError::NotACanvas(id.to_owned()))?;
        let context = canvas
            .get_context("2d")?
            .ok_or(FieldError::NoContext)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| FieldError::NoContext)?;
        Ok(CanvasSurface { canvas, context })
    }

    pub fn resize(&self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self, width: f64, height: f64) {
        self.context.clear_rect(0.0, 0.0, width, height);
    }

    fn fill_circle(&mut self, center: [f64; 2], radius: f64, color: Color) -> Result<()> {
        self.context.begin_path();
        self.context
            .arc(center[0], center[1], radius, 0.0, std::f64::consts::PI * 2.0)?;
        #[allow(deprecated)]
        self.context
            .set_fill_style(&JsValue::from_str(&color.to_css()));
        self.context.fill();
        Ok(())
    }

    fn stroke_line(&mut self, from: [f64; 2], to: [f64; 2], width: f64, color: Color) {
        self.context.begin_path();
        #[allow(deprecated)]
        self.context
            .set_stroke_style(&JsValue::from_str(&color.to_css()));
        self.context.set_line_width(width);
        self.context.move_to(from[0], from[1]);
        self.context.line_to(to[0], to[1]);
        self.context.stroke();
    }
}
