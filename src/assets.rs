use std::sync::Arc;

use crate::foundation::core::{Rgba8Premul, Size};

pub(crate) mod decode;
pub(crate) mod library;

/// Raster pixels in premultiplied RGBA8, row-major, tightly packed.
///
/// Used both for decoded photos and for screen snapshots.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bitmap {
    pub width: u32,
    pub height: u32,
    pub rgba8_premul: Arc<Vec<u8>>,
}

impl Bitmap {
    pub fn solid(width: u32, height: u32, color: Rgba8Premul) -> Self {
        let px = color.to_array();
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            rgba8_premul: Arc::new(px.repeat(len)),
        }
    }

    pub fn size(&self) -> Size {
        Size::new(f64::from(self.width), f64::from(self.height))
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        let p = self.rgba8_premul.get(i..i + 4)?;
        Some([p[0], p[1], p[2], p[3]])
    }

    /// Straight-alpha copy suitable for encoding with `image`.
    pub fn to_rgba_image(&self) -> Option<image::RgbaImage> {
        let mut data = self.rgba8_premul.as_ref().clone();
        decode::unpremultiply_rgba8_in_place(&mut data);
        image::RgbaImage::from_raw(self.width, self.height, data)
    }
}
