/// Spincube Web - canvas frontend for the cube pipeline
///
/// Wraps a `CanvasRenderingContext2d` in the core's `RenderSurface` trait
/// and exports a `WebCube` handle whose `tick()` is meant to be called from
/// a `requestAnimationFrame` loop in JS.

use spincube_core::{ConfigError, CubeConfig, FrameDriver, RenderSurface, Rgb};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

struct CanvasSurface {
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
}

impl RenderSurface for CanvasSurface {
    fn width(&self) -> u32 {
        self.canvas.width()
    }

    fn height(&self) -> u32 {
        self.canvas.height()
    }

    fn clear(&mut self) {
        self.context.clear_rect(
            0.0,
            0.0,
            self.canvas.width() as f64,
            self.canvas.height() as f64,
        );
    }

    fn begin_path(&mut self) {
        self.context.begin_path();
    }

    fn move_to(&mut self, x: i32, y: i32) {
        self.context.move_to(x as f64, y as f64);
    }

    fn line_to(&mut self, x: i32, y: i32) {
        self.context.line_to(x as f64, y as f64);
    }

    fn close_path(&mut self) {
        self.context.close_path();
    }

    fn stroke(&mut self, colour: Rgb, line_width: f32) {
        self.context.set_line_width(line_width as f64);
        self.context.set_stroke_style_str(&colour.to_hex());
        self.context.stroke();
    }

    fn fill(&mut self, colour: Rgb) {
        self.context.set_fill_style_str(&colour.to_hex());
        self.context.fill();
    }
}

/// The spinning cube bound to one canvas element.
#[wasm_bindgen]
pub struct WebCube {
    driver: FrameDriver,
    surface: CanvasSurface,
}

#[wasm_bindgen]
impl WebCube {
    /// Look up the canvas by element id and build the pipeline with the
    /// stock configuration.
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_id: &str) -> Result<WebCube, JsValue> {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or_else(|| JsValue::from_str("no document"))?;
        let canvas = document
            .get_element_by_id(canvas_id)
            .ok_or_else(|| JsValue::from_str("canvas element not found"))?
            .dyn_into::<HtmlCanvasElement>()?;
        let context = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()?;

        let driver = FrameDriver::new(CubeConfig::default())
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        Ok(WebCube {
            driver,
            surface: CanvasSurface { canvas, context },
        })
    }

    /// Advance the rotation one step and redraw; call once per
    /// `requestAnimationFrame`.
    pub fn tick(&mut self) {
        self.driver.advance_and_render(&mut self.surface);
    }

    /// Switch between `"line"`, `"hidden"` and `"filled"`.
    pub fn set_style(&mut self, style: &str) -> Result<(), JsValue> {
        let style = style
            .parse()
            .map_err(|e: ConfigError| JsValue::from_str(&e.to_string()))?;
        self.driver.set_style(style);
        Ok(())
    }
}
