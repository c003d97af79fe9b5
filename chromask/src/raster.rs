//! Decoded color raster consumed by the classifier.
//!
//! The raster is produced by whatever decodes the source image and is
//! read-only from here on. Samples are stored interleaved, row-major, with
//! three (RGB) or four (RGBA) channels per pixel. Alpha is carried only so
//! decoded buffers can be passed through unchanged; nothing reads it.

use crate::error::{ensure_non_empty, Error, Result};

/// Number of interleaved channels per pixel.
#[derive(Debug, Hash, PartialEq, Eq, Copy, Clone, Default)]
#[repr(u8)]
pub enum ChannelCount {
    Rgb = 3,
    #[default]
    Rgba = 4,
}

impl ChannelCount {
    #[inline]
    pub fn channel_count(&self) -> usize {
        *self as usize
    }
}

impl std::fmt::Display for ChannelCount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChannelCount::Rgb => write!(f, "RGB"),
            ChannelCount::Rgba => write!(f, "RGBA"),
        }
    }
}

/// A channel sample type that can be compared against thresholds.
///
/// Integer samples are compared in their native range (0-255 for `u8`,
/// 0-65535 for `u16`); float samples are compared as-is.
pub trait Sample: Copy + Send + Sync + 'static {
    fn to_f32(self) -> f32;
}

impl Sample for u8 {
    #[inline]
    fn to_f32(self) -> f32 {
        self as f32
    }
}

impl Sample for u16 {
    #[inline]
    fn to_f32(self) -> f32 {
        self as f32
    }
}

impl Sample for f32 {
    #[inline]
    fn to_f32(self) -> f32 {
        self
    }
}

/// Red, green and blue components of one pixel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Raster<T: Sample> {
    samples: Vec<T>,
    rows: usize,
    cols: usize,
    channels: ChannelCount,
}

impl<T: Sample> Raster<T> {
    /// Wrap an interleaved sample buffer.
    ///
    /// Fails when either dimension is zero or when `samples.len()` is not
    /// `rows * cols * channels`.
    pub fn new(rows: usize, cols: usize, channels: ChannelCount, samples: Vec<T>) -> Result<Self> {
        ensure_non_empty("raster", rows, cols)?;

        // Overflowing sizes can never match a real buffer; report them as usize::MAX.
        let expected = rows
            .checked_mul(cols)
            .and_then(|pixels| pixels.checked_mul(channels.channel_count()))
            .unwrap_or(usize::MAX);
        if samples.len() != expected {
            return Err(Error::SampleCount {
                expected,
                actual: samples.len(),
            });
        }

        Ok(Self {
            samples,
            rows,
            cols,
            channels,
        })
    }

    /// Build an opaque RGB raster from per-pixel triples in row-major order.
    pub fn from_rgb_pixels(rows: usize, cols: usize, pixels: &[[T; 3]]) -> Result<Self> {
        let samples = pixels.iter().flatten().copied().collect();
        Self::new(rows, cols, ChannelCount::Rgb, samples)
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    #[inline]
    pub fn channels(&self) -> ChannelCount {
        self.channels
    }

    #[inline]
    pub fn samples(&self) -> &[T] {
        &self.samples
    }

    /// Color of the pixel at `(row, col)`; alpha, if any, is dropped.
    #[inline]
    pub fn rgb(&self, row: usize, col: usize) -> Rgb {
        debug_assert!(row < self.rows && col < self.cols);
        let stride = self.channels.channel_count();
        let offset = (row * self.cols + col) * stride;
        let px = &self.samples[offset..offset + 3];
        Rgb {
            r: px[0].to_f32(),
            g: px[1].to_f32(),
            b: px[2].to_f32(),
        }
    }
}
