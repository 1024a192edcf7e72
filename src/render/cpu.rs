use std::sync::Arc;

use crate::{
    assets::Bitmap,
    foundation::core::{Rect, Rgba8Premul, aspect_fill, aspect_fit, is_degenerate},
    foundation::error::{HandoffError, HandoffResult},
    render::composite::{over, over_in_place},
    scene::layer::{ContentMode, Layer, LayerContent},
};

/// Largest edge accepted for a rasterized region.
pub const MAX_RASTER_EDGE: u32 = 16_384;

/// Composite `layers` (back to front) into a bitmap covering `viewport`.
///
/// Layer frames are in the same coordinate space as `viewport`; the output pixel at
/// `(0, 0)` samples the viewport's top-left corner.
pub fn rasterize<'a>(
    layers: impl IntoIterator<Item = &'a Layer>,
    viewport: Rect,
    clear: Rgba8Premul,
) -> HandoffResult<Bitmap> {
    let width = viewport.width().round();
    let height = viewport.height().round();
    if !(width.is_finite() && height.is_finite()) || width < 0.0 || height < 0.0 {
        return Err(HandoffError::render("viewport must have a finite, positive size"));
    }
    if width > f64::from(MAX_RASTER_EDGE) || height > f64::from(MAX_RASTER_EDGE) {
        return Err(HandoffError::render(format!(
            "viewport {width}x{height} exceeds {MAX_RASTER_EDGE}px"
        )));
    }
    let (width, height) = (width as u32, height as u32);

    let mut data = clear.to_array().repeat((width as usize) * (height as usize));
    for layer in layers {
        draw_layer(&mut data, width, height, viewport, layer);
    }

    Ok(Bitmap {
        width,
        height,
        rgba8_premul: Arc::new(data),
    })
}

fn draw_layer(data: &mut [u8], width: u32, height: u32, viewport: Rect, layer: &Layer) {
    if layer.opacity <= 0.0 || is_degenerate(layer.frame) {
        return;
    }

    let (content_rect, bitmap) = match &layer.content {
        LayerContent::Solid(color) => {
            let clip = layer.frame.intersect(viewport);
            fill_rect(data, width, height, viewport, clip, *color, layer.opacity);
            return;
        }
        LayerContent::Image(bmp) | LayerContent::Snapshot(bmp) => {
            if bmp.is_empty() {
                return;
            }
            let rect = match layer.content_mode {
                ContentMode::AspectFill => aspect_fill(bmp.size(), layer.frame),
                ContentMode::AspectFit => aspect_fit(bmp.size(), layer.frame),
                ContentMode::ScaleToFill => layer.frame,
            };
            (rect, bmp)
        }
    };

    // A bitmap that exactly covers the viewport (a full-screen snapshot) blends
    // buffer to buffer.
    if content_rect == viewport
        && layer.frame == viewport
        && bitmap.width == width
        && bitmap.height == height
        && over_in_place(data, &bitmap.rgba8_premul, layer.opacity).is_ok()
    {
        return;
    }

    let mut clip = content_rect.intersect(viewport);
    if layer.clips_to_bounds {
        clip = clip.intersect(layer.frame);
    }
    if is_degenerate(clip) || is_degenerate(content_rect) {
        return;
    }

    let (x_range, y_range) = pixel_span(clip, viewport, width, height);
    let bw = f64::from(bitmap.width);
    let bh = f64::from(bitmap.height);
    for py in y_range {
        let cy = viewport.y0 + f64::from(py) + 0.5;
        let v = ((cy - content_rect.y0) / content_rect.height() * bh).floor();
        let sy = (v.max(0.0) as u32).min(bitmap.height - 1);
        for px in x_range.clone() {
            let cx = viewport.x0 + f64::from(px) + 0.5;
            let u = ((cx - content_rect.x0) / content_rect.width() * bw).floor();
            let sx = (u.max(0.0) as u32).min(bitmap.width - 1);
            let Some(src) = bitmap.pixel(sx, sy) else {
                continue;
            };
            blend_at(data, width, px, py, src, layer.opacity);
        }
    }
}

fn fill_rect(
    data: &mut [u8],
    width: u32,
    height: u32,
    viewport: Rect,
    clip: Rect,
    color: Rgba8Premul,
    opacity: f64,
) {
    if is_degenerate(clip) {
        return;
    }
    let src = color.to_array();
    let (x_range, y_range) = pixel_span(clip, viewport, width, height);
    for py in y_range {
        for px in x_range.clone() {
            blend_at(data, width, px, py, src, opacity);
        }
    }
}

// Pixels whose centres fall inside `clip`.
fn pixel_span(
    clip: Rect,
    viewport: Rect,
    width: u32,
    height: u32,
) -> (std::ops::Range<u32>, std::ops::Range<u32>) {
    fn span(lo: f64, hi: f64, limit: u32) -> std::ops::Range<u32> {
        let start = (lo - 0.5).ceil().clamp(0.0, f64::from(limit)) as u32;
        let end = (hi - 0.5).ceil().clamp(0.0, f64::from(limit)) as u32;
        start..end.max(start)
    }
    (
        span(clip.x0 - viewport.x0, clip.x1 - viewport.x0, width),
        span(clip.y0 - viewport.y0, clip.y1 - viewport.y0, height),
    )
}

fn blend_at(data: &mut [u8], width: u32, px: u32, py: u32, src: [u8; 4], opacity: f64) {
    let i = ((py as usize) * (width as usize) + (px as usize)) * 4;
    let Some(d) = data.get_mut(i..i + 4) else {
        return;
    };
    let out = over([d[0], d[1], d[2], d[3]], src, opacity);
    d.copy_from_slice(&out);
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
