use {
    image::{EncodedFrame, Image, ImageError, encode_data_url},
    video::VideoSource,
};

/// Turns video snapshots into JPEG data URLs.
#[derive(Debug, Clone, Copy)]
pub struct FrameEncoder {
    quality: u8,
}

impl FrameEncoder {
    /// `quality` is a JPEG quality in `1..=100`; values outside are clamped.
    pub fn new(quality: u8) -> Self {
        Self {
            quality: quality.clamp(1, 100),
        }
    }

    pub fn quality(&self) -> u8 {
        self.quality
    }

    /// Snapshot `source` and encode it. A surface that has nothing to show
    /// yet gives `Ok(None)`; the source is only read, never modified.
    pub fn sample(&self, source: &impl VideoSource) -> Result<Option<EncodedFrame>, ImageError> {
        match source.snapshot() {
            Some(image) => self.encode(&image).map(Some),
            None => Ok(None),
        }
    }

    pub fn encode(&self, image: &Image) -> Result<EncodedFrame, ImageError> {
        encode_data_url(image, self.quality)
    }
}
