use rgb::RGBA8;

use crate::error::ColorError;

/// Random access to RGBA pixels in row-major order.
///
/// `pixel` returns `None` for any index it cannot read; extraction skips
/// those pixels instead of failing.
pub trait PixelSource {
    /// Declared `(width, height)`.
    fn dimensions(&self) -> (usize, usize);
    fn pixel_count(&self) -> usize;
    fn pixel(&self, index: usize) -> Option<RGBA8>;
}

/// A borrowed, flat RGBA byte buffer (4 bytes per pixel, row-major).
#[derive(Debug, Clone, Copy)]
pub struct ImageBuffer<'a> {
    width: usize,
    height: usize,
    data: &'a [u8],
}

impl<'a> ImageBuffer<'a> {
    /// Wrap `data` without validating its length. Pixels past the end of a
    /// short buffer read as missing.
    pub fn new(width: usize, height: usize, data: &'a [u8]) -> Self {
        Self {
            width,
            height,
            data,
        }
    }

    /// Like [`ImageBuffer::new`] but rejects buffers too short for the
    /// declared dimensions.
    pub fn try_new(width: usize, height: usize, data: &'a [u8]) -> Result<Self, ColorError> {
        let needed = width
            .checked_mul(height)
            .and_then(|n| n.checked_mul(4));
        match needed {
            Some(n) if data.len() >= n => Ok(Self::new(width, height, data)),
            _ => Err(ColorError::BufferTooShort {
                len: data.len(),
                width,
                height,
            }),
        }
    }
}

impl PixelSource for ImageBuffer<'_> {
    fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    fn pixel_count(&self) -> usize {
        self.width.saturating_mul(self.height)
    }

    fn pixel(&self, index: usize) -> Option<RGBA8> {
        let start = index.checked_mul(4)?;
        let px = self.data.get(start..start.checked_add(4)?)?;
        Some(RGBA8::new(px[0], px[1], px[2], px[3]))
    }
}

impl PixelSource for imgref::ImgRef<'_, RGBA8> {
    fn dimensions(&self) -> (usize, usize) {
        (self.width(), self.height())
    }

    fn pixel_count(&self) -> usize {
        self.width() * self.height()
    }

    fn pixel(&self, index: usize) -> Option<RGBA8> {
        let width = self.width();
        if width == 0 {
            return None;
        }
        let (x, y) = (index % width, index / width);
        if y >= self.height() {
            return None;
        }
        self.buf().get(y * self.stride() + x).copied()
    }
}
