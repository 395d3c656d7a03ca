use image::{GrayImage, Luma, RgbaImage};

use crate::{
    foundation::error::QualityResult,
    quality::method::QualityMethod,
    scene::line::{INVALID_QUALITY, Line},
};

/// Colour bands of an RGBA raster; the fourth channel is alpha.
pub const RGBA_COLOR_BANDS: usize = 3;

/// Per-pixel quality scores for a whole scene, row-major.
#[derive(Clone, Debug, PartialEq)]
pub struct QualityMap {
    pub width: u32,
    pub height: u32,
    pub values: Vec<f32>,
}

impl QualityMap {
    pub fn row(&self, y: u32) -> Option<&[f32]> {
        if y >= self.height {
            return None;
        }
        let w = self.width as usize;
        let start = y as usize * w;
        Some(&self.values[start..start + w])
    }

    pub fn get(&self, x: u32, y: u32) -> Option<f32> {
        if x >= self.width {
            return None;
        }
        self.row(y).map(|r| r[x as usize])
    }

    /// Pixels not marked with the invalid sentinel.
    pub fn valid_count(&self) -> usize {
        self.values.iter().filter(|&&q| q != INVALID_QUALITY).count()
    }
}

/// Stream `image` through `method` one row at a time, top to bottom.
///
/// Alpha comes from the fourth channel. A line failure aborts the scan and is returned as-is.
#[tracing::instrument(
    skip(method, image),
    fields(method = method.name(), width = image.width(), height = image.height())
)]
pub fn score_rgba(method: &dyn QualityMethod, image: &RgbaImage) -> QualityResult<QualityMap> {
    let (width, height) = image.dimensions();
    let w = width as usize;
    let mut values = vec![0.0f32; w * height as usize];
    if w == 0 || height == 0 {
        return Ok(QualityMap {
            width,
            height,
            values,
        });
    }

    let mut alpha = vec![0u8; w];
    for (y, (quality, pixels)) in values.chunks_exact_mut(w).zip(image.rows()).enumerate() {
        for (a, px) in alpha.iter_mut().zip(pixels) {
            *a = px.0[3];
        }
        let mut line = Line::new(RGBA_COLOR_BANDS, quality, &alpha)?;
        if let Err(err) = method.compute_quality(&mut line) {
            tracing::warn!(row = y, error = %err, "line scoring failed");
            return Err(err);
        }
    }

    let map = QualityMap {
        width,
        height,
        values,
    };
    tracing::debug!(valid = map.valid_count(), "scene scored");
    Ok(map)
}

/// Render scores as 8-bit luma for inspection.
///
/// Invalid pixels are 0; other scores are clamped to `[0, 1]` and mapped onto `1..=255`.
pub fn quality_to_luma(map: &QualityMap) -> GrayImage {
    GrayImage::from_fn(map.width, map.height, |x, y| {
        let q = map.values[y as usize * map.width as usize + x as usize];
        if q == INVALID_QUALITY {
            return Luma([0]);
        }
        let q = if q.is_nan() { 0.0 } else { q.clamp(0.0, 1.0) };
        Luma([1 + (q * 254.0).round() as u8])
    })
}

#[cfg(test)]
#[path = "../tests/unit/pipeline.rs"]
mod tests;
