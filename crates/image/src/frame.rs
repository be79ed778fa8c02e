use {crate::*, base::Vec2};

/// One still snapshot of a video surface.
#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    pub size: Vec2<usize>,
    pub data: Vec<u8>,
    pub format: PixelFormat,
}

impl Image {
    pub fn new(size: Vec2<usize>, data: Vec<u8>, format: PixelFormat) -> Self {
        Self { size, data, format }
    }

    /// Check that a raw image carries exactly `width * height * bpp` bytes.
    pub fn validate(&self) -> Result<(), ImageError> {
        if let Some(bpp) = self.format.bytes_per_pixel() {
            let expected = self.size.area() * bpp;
            if self.data.len() != expected {
                return Err(ImageError::Size {
                    expected,
                    actual: self.data.len(),
                });
            }
        }
        Ok(())
    }

    /// Convert to packed RGB8, decoding JPEG if needed.
    pub fn to_rgb(&self) -> Result<Image, ImageError> {
        self.validate()?;
        match self.format {
            PixelFormat::Rgb8 => Ok(self.clone()),
            PixelFormat::Argb8 => Ok(Image::new(
                self.size,
                argb_to_rgb(self.size, &self.data),
                PixelFormat::Rgb8,
            )),
            PixelFormat::Yuyv => Ok(Image::new(
                self.size,
                yuyv_to_rgb(self.size, &self.data),
                PixelFormat::Rgb8,
            )),
            PixelFormat::Jpeg => jpeg_to_rgb(self),
        }
    }
}
