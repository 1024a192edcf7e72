use std::{path::Path, sync::Arc};

use crate::{
    assets::{Bitmap, decode::load_image},
    foundation::core::Size,
    foundation::error::{HandoffError, HandoffResult},
};

/// Stable position of a photo inside its library.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct AssetId(pub u32);

/// A titled, immutable photo shared between screens.
#[derive(Clone, Debug)]
pub struct Asset {
    pub id: AssetId,
    pub title: String,
    pub image: Arc<Bitmap>,
}

impl Asset {
    /// Intrinsic pixel size.
    pub fn size(&self) -> Size {
        self.image.size()
    }
}

/// Ordered photo set backing both the gallery grid and the paged viewer.
#[derive(Clone, Debug, Default)]
pub struct PhotoLibrary {
    photos: Vec<Arc<Asset>>,
}

impl PhotoLibrary {
    pub const DEFAULT_COUNT: usize = 14;

    pub fn new(photos: impl IntoIterator<Item = Asset>) -> Self {
        Self {
            photos: photos.into_iter().map(Arc::new).collect(),
        }
    }

    /// Synthetic library of `count` distinct gradients titled "Photo 1".."Photo N".
    /// Even entries are landscape (`long_edge` x `short_edge`), odd ones portrait.
    pub fn numbered(count: usize, long_edge: u32, short_edge: u32) -> Self {
        Self::new((0..count).map(|i| {
            let (w, h) = if i % 2 == 0 {
                (long_edge, short_edge)
            } else {
                (short_edge, long_edge)
            };
            numbered_asset(i, count, w, h)
        }))
    }

    /// Loads `1.jpg`..`{count}.jpg` from `dir`.
    pub fn from_dir(dir: impl AsRef<Path>, count: usize) -> HandoffResult<Self> {
        let dir = dir.as_ref();
        if count == 0 {
            return Err(HandoffError::validation("photo count must be > 0"));
        }
        let mut photos = Vec::with_capacity(count);
        for n in 1..=count {
            let image = load_image(dir.join(format!("{n}.jpg")))?;
            photos.push(Asset {
                id: AssetId((n - 1) as u32),
                title: format!("Photo {n}"),
                image: Arc::new(image),
            });
        }
        Ok(Self::new(photos))
    }

    pub fn len(&self) -> usize {
        self.photos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.photos.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<Arc<Asset>> {
        self.photos.get(index).cloned()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<Asset>> {
        self.photos.iter()
    }
}

fn numbered_asset(index: usize, count: usize, width: u32, height: u32) -> Asset {
    let hue = (index as f64) / (count.max(1) as f64);
    let [r, g, b] = hue_to_rgb(hue);
    let mut data = Vec::with_capacity((width as usize) * (height as usize) * 4);
    for y in 0..height {
        // Top rows are brighter so orientation survives scaling.
        let shade = 1.0 - 0.5 * f64::from(y) / f64::from(height.max(1));
        for _ in 0..width {
            data.extend_from_slice(&[
                (f64::from(r) * shade) as u8,
                (f64::from(g) * shade) as u8,
                (f64::from(b) * shade) as u8,
                255,
            ]);
        }
    }
    Asset {
        id: AssetId(index as u32),
        title: format!("Photo {}", index + 1),
        image: Arc::new(Bitmap {
            width,
            height,
            rgba8_premul: Arc::new(data),
        }),
    }
}

fn hue_to_rgb(h: f64) -> [u8; 3] {
    let h6 = (h.rem_euclid(1.0)) * 6.0;
    let x = 1.0 - (h6 % 2.0 - 1.0).abs();
    let (r, g, b) = match h6 as u32 {
        0 => (1.0, x, 0.0),
        1 => (x, 1.0, 0.0),
        2 => (0.0, 1.0, x),
        3 => (0.0, x, 1.0),
        4 => (x, 0.0, 1.0),
        _ => (1.0, 0.0, x),
    };
    [(r * 255.0) as u8, (g * 255.0) as u8, (b * 255.0) as u8]
}

#[cfg(test)]
#[path = "../../tests/unit/assets/library.rs"]
mod tests;
