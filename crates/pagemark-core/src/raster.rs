//! Opaque RGBA rasters delivered by external decoders.

use peniko::Color;
use thiserror::Error;

/// Errors constructing a raster from externally decoded pixels.
#[derive(Debug, Error)]
pub enum RasterError {
    #[error("pixel buffer length {actual} does not match {width}x{height} RGBA ({expected})")]
    SizeMismatch {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },
    #[error("raster dimensions must be non-zero")]
    EmptyDimensions,
}

/// An immutable RGBA8 pixel buffer.
///
/// The core never decodes images or PDF pages itself; finished rasters
/// arrive from an external collaborator and are treated as opaque paint
/// sources from then on.
#[derive(Debug, Clone, PartialEq)]
pub struct Raster {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Raster {
    /// Wrap externally decoded RGBA8 pixels, row-major, 4 bytes per pixel.
    pub fn from_rgba8(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self, RasterError> {
        if width == 0 || height == 0 {
            return Err(RasterError::EmptyDimensions);
        }
        let expected = width as usize * height as usize * 4;
        if pixels.len() != expected {
            return Err(RasterError::SizeMismatch {
                width,
                height,
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// A solid-color raster, used for blank pages.
    pub fn solid(width: u32, height: u32, color: Color) -> Result<Self, RasterError> {
        if width == 0 || height == 0 {
            return Err(RasterError::EmptyDimensions);
        }
        let rgba = color.to_rgba8();
        let mut pixels = Vec::with_capacity(width as usize * height as usize * 4);
        for _ in 0..(width as usize * height as usize) {
            pixels.extend_from_slice(&[rgba.r, rgba.g, rgba.b, rgba.a]);
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rgba8_validates_length() {
        assert!(Raster::from_rgba8(2, 2, vec![0; 16]).is_ok());
        assert!(matches!(
            Raster::from_rgba8(2, 2, vec![0; 15]),
            Err(RasterError::SizeMismatch { .. })
        ));
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        assert!(matches!(
            Raster::from_rgba8(0, 4, Vec::new()),
            Err(RasterError::EmptyDimensions)
        ));
    }

    #[test]
    fn test_solid_fill() {
        let raster = Raster::solid(2, 1, Color::from_rgba8(10, 20, 30, 255)).unwrap();
        assert_eq!(raster.pixels(), &[10, 20, 30, 255, 10, 20, 30, 255]);
    }
}
