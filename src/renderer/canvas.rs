//! 2D canvas backend

use std::f64::consts::TAU;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};

use super::{Sprite, Surface};
use crate::consts::BALL_LINE_WIDTH;

/// Draws onto a `<canvas>` through its 2D context
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
    width: f64,
    height: f64,
    batter: Option<HtmlImageElement>,
}

impl CanvasSurface {
    pub fn new(canvas: &HtmlCanvasElement, batter: Option<HtmlImageElement>) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        if batter.is_none() {
            log::warn!("Batter image missing - sprite will not be drawn");
        }
        Ok(Self {
            ctx,
            width: canvas.width() as f64,
            height: canvas.height() as f64,
            batter,
        })
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self) {
        self.ctx.clear_rect(0.0, 0.0, self.width, self.height);
    }

    fn draw_sprite(&mut self, sprite: Sprite, x: f32, y: f32, w: f32, h: f32) {
        let image = match sprite {
            Sprite::Batter => self.batter.as_ref(),
        };
        if let Some(image) = image {
            if let Err(e) = self.ctx.draw_image_with_html_image_element_and_dw_and_dh(
                image, x as f64, y as f64, w as f64, h as f64,
            ) {
                log::warn!("Sprite draw failed: {:?}", e);
            }
        }
    }

    fn draw_circle(&mut self, x: f32, y: f32, radius: f32, fill: &str, stroke: &str) {
        let ctx = &self.ctx;
        ctx.begin_path();
        if ctx.arc(x as f64, y as f64, radius as f64, 0.0, TAU).is_err() {
            // Negative radius; nothing sensible to draw
            return;
        }
        ctx.set_fill_style_str(fill);
        ctx.fill();
        ctx.set_stroke_style_str(stroke);
        ctx.set_line_width(BALL_LINE_WIDTH);
        ctx.stroke();
        ctx.close_path();
    }
}
