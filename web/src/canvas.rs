use heartswap_core::{Rect, RenderSurface, TileDraw};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};

/// 2d canvas context painting pieces cut from one picture.
pub(crate) struct CanvasSurface<'a> {
    ctx: CanvasRenderingContext2d,
    image: &'a HtmlImageElement,
}

impl<'a> CanvasSurface<'a> {
    pub(crate) fn new(
        canvas: &HtmlCanvasElement,
        image: &'a HtmlImageElement,
    ) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(JsValue::from)?;
        Ok(Self { ctx, image })
    }
}

impl RenderSurface for CanvasSurface<'_> {
    type Error = JsValue;

    fn clear(&mut self, area: Rect) -> Result<(), Self::Error> {
        self.ctx.clear_rect(area.x, area.y, area.width, area.height);
        Ok(())
    }

    fn draw_tile(&mut self, draw: &TileDraw) -> Result<(), Self::Error> {
        let TileDraw {
            source,
            dest,
            highlight,
        } = *draw;

        self.ctx
            .draw_image_with_html_image_element_and_sw_and_sh_and_dx_and_dy_and_dw_and_dh(
                self.image,
                source.x,
                source.y,
                source.width,
                source.height,
                dest.x,
                dest.y,
                dest.width,
                dest.height,
            )?;
        self.ctx.set_stroke_style_str(highlight.stroke_color());
        self.ctx.set_line_width(highlight.line_width());
        self.ctx.stroke_rect(dest.x, dest.y, dest.width, dest.height);
        Ok(())
    }
}

/// Converts a click to surface pixels, accounting for CSS scaling of the canvas.
pub(crate) fn surface_point(
    canvas: &HtmlCanvasElement,
    client_x: i32,
    client_y: i32,
) -> (f64, f64) {
    let rect = canvas.get_bounding_client_rect();
    let x = f64::from(client_x) - rect.left();
    let y = f64::from(client_y) - rect.top();
    let scale_x = scale(canvas.width(), rect.width());
    let scale_y = scale(canvas.height(), rect.height());
    (x * scale_x, y * scale_y)
}

fn scale(surface: u32, displayed: f64) -> f64 {
    if displayed > 0.0 {
        f64::from(surface) / displayed
    } else {
        1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_maps_displayed_pixels_to_surface_pixels() {
        assert_eq!(scale(600, 300.0), 2.0);
        assert_eq!(scale(600, 600.0), 1.0);
        assert_eq!(scale(600, 0.0), 1.0);
    }
}
