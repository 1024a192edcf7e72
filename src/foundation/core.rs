use crate::foundation::error::{HandoffError, HandoffResult};
use crate::foundation::math::lerp;

pub use kurbo::{Point, Rect, Size, Vec2};

/// Zero-based index of a rendered frame within one transition.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct FrameIndex(pub u64);

/// Rational frame rate used by hosts that step animations on a fixed clock.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Fps {
    pub num: u32,
    pub den: u32, // must be > 0
}

impl Fps {
    pub fn new(num: u32, den: u32) -> HandoffResult<Self> {
        if den == 0 {
            return Err(HandoffError::validation("Fps den must be > 0"));
        }
        if num == 0 {
            return Err(HandoffError::validation("Fps num must be > 0"));
        }
        Ok(Self { num, den })
    }

    pub fn as_f64(self) -> f64 {
        f64::from(self.num) / f64::from(self.den)
    }

    pub fn frame_duration_secs(self) -> f64 {
        f64::from(self.den) / f64::from(self.num)
    }

    pub fn frames_to_secs(self, frames: u64) -> f64 {
        (frames as f64) * self.frame_duration_secs()
    }

    /// Number of whole frames needed to cover `secs`, never less than one.
    pub fn frames_to_cover(self, secs: f64) -> u64 {
        let frames = (secs.max(0.0) * self.as_f64() - 1e-9).ceil();
        (frames as u64).max(1)
    }
}

/// Premultiplied RGBA8 (r,g,b already multiplied by a).
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Rgba8Premul {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8Premul {
    pub const BLACK: Self = Self::opaque(0, 0, 0);
    pub const WHITE: Self = Self::opaque(255, 255, 255);

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub fn transparent() -> Self {
        Self {
            r: 0,
            g: 0,
            b: 0,
            a: 0,
        }
    }

    pub fn from_straight_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        fn premul(c: u8, a: u8) -> u8 {
            let c = u16::from(c);
            let a = u16::from(a);
            (((c * a) + 127) / 255) as u8
        }

        Self {
            r: premul(r, a),
            g: premul(g, a),
            b: premul(b, a),
            a,
        }
    }

    pub fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

/// A rectangle with no positive area: "geometry unknown" for participants.
pub fn is_degenerate(rect: Rect) -> bool {
    !(rect.width() > 0.0 && rect.height() > 0.0)
}

/// Interpolates every edge independently. `t` is not clamped, so spring
/// overshoot carries through to the frame.
pub fn lerp_rect(a: Rect, b: Rect, t: f64) -> Rect {
    Rect::new(
        lerp(a.x0, b.x0, t),
        lerp(a.y0, b.y0, t),
        lerp(a.x1, b.x1, t),
        lerp(a.y1, b.y1, t),
    )
}

/// Largest rect with `content`'s aspect ratio that fits inside `bounds`, centred.
pub fn aspect_fit(content: Size, bounds: Rect) -> Rect {
    scaled_centered(content, bounds, f64::min)
}

/// Smallest rect with `content`'s aspect ratio that covers `bounds`, centred.
pub fn aspect_fill(content: Size, bounds: Rect) -> Rect {
    scaled_centered(content, bounds, f64::max)
}

fn scaled_centered(content: Size, bounds: Rect, pick: fn(f64, f64) -> f64) -> Rect {
    if content.width <= 0.0 || content.height <= 0.0 || is_degenerate(bounds) {
        return Rect::from_origin_size(bounds.center(), Size::ZERO);
    }
    let scale = pick(
        bounds.width() / content.width,
        bounds.height() / content.height,
    );
    let size = Size::new(content.width * scale, content.height * scale);
    Rect::from_center_size(bounds.center(), size)
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
