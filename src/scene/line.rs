use crate::foundation::error::{QualityError, QualityResult};

/// Alpha values below this are treated as transparent and scored invalid.
pub const ALPHA_VISIBLE_THRESHOLD: u8 = 128;

/// Quality score marking a pixel that must not be considered.
pub const INVALID_QUALITY: f32 = -1.0;

/// One image row being scored.
///
/// The quality buffer holds one score per pixel and is shared by every band: there is no
/// per-band slot. Both buffers are borrowed for a single scoring call only.
#[derive(Debug)]
pub struct Line<'a> {
    band_count: usize,
    quality: &'a mut [f32],
    alpha: &'a [u8],
}

impl<'a> Line<'a> {
    /// Wrap caller-owned buffers. `quality` and `alpha` must both be one entry per pixel.
    pub fn new(band_count: usize, quality: &'a mut [f32], alpha: &'a [u8]) -> QualityResult<Self> {
        if quality.len() != alpha.len() {
            return Err(QualityError::validation(format!(
                "line quality buffer has {} pixels but alpha has {}",
                quality.len(),
                alpha.len()
            )));
        }
        Ok(Self {
            band_count,
            quality,
            alpha,
        })
    }

    pub fn width(&self) -> usize {
        self.alpha.len()
    }

    pub fn band_count(&self) -> usize {
        self.band_count
    }

    pub fn quality(&self) -> &[f32] {
        &*self.quality
    }

    pub fn quality_mut(&mut self) -> &mut [f32] {
        &mut *self.quality
    }

    pub fn alpha(&self) -> &[u8] {
        self.alpha
    }

    /// Mutable quality and read-only alpha at the same time.
    pub fn quality_and_alpha(&mut self) -> (&mut [f32], &[u8]) {
        (&mut *self.quality, self.alpha)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/line.rs"]
mod tests;
