use crate::*;

/// Layout of the bytes in an `Image`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelFormat {
    /// Packed `R G B`.
    Rgb8,
    /// Packed `A R G B`.
    Argb8,
    /// YUV 4:2:2, `Y0 U Y1 V` per pixel pair.
    Yuyv,
    /// A complete JPEG file.
    Jpeg,
}

impl PixelFormat {
    /// Bytes per pixel for raw formats, `None` for compressed ones.
    pub fn bytes_per_pixel(self) -> Option<usize> {
        match self {
            PixelFormat::Rgb8 => Some(3),
            PixelFormat::Argb8 => Some(4),
            PixelFormat::Yuyv => Some(2),
            PixelFormat::Jpeg => None,
        }
    }

    pub fn is_compressed(self) -> bool {
        self.bytes_per_pixel().is_none()
    }

    pub(crate) fn check(self, expected: PixelFormat) -> Result<(), ImageError> {
        if self == expected {
            Ok(())
        } else {
            Err(ImageError::Decode(format!("{:?} data where {:?} was expected", self, expected)))
        }
    }
}

// BT.601, 8.8 fixed point
pub(crate) fn yuv_to_rgb(y: u8, u: u8, v: u8) -> (u8, u8, u8) {
    let y = i32::from(y);
    let u = i32::from(u) - 128;
    let v = i32::from(v) - 128;
    let clamp = |c: i32| c.clamp(0, 255) as u8;
    (
        clamp(y + ((359 * v) >> 8)),
        clamp(y - ((88 * u + 183 * v) >> 8)),
        clamp(y + ((454 * u) >> 8)),
    )
}
