use {
    crate::*,
    base64::{Engine, engine::general_purpose::STANDARD},
    std::fmt,
};

const JPEG_DATA_URL_PREFIX: &str = "data:image/jpeg;base64,";

/// A compressed still, ready to be put on the wire.
///
/// The text form is a JPEG `data:` URL. Receivers split at the first `,` and
/// base64-decode the remainder.
#[derive(Clone, PartialEq, Eq)]
pub struct EncodedFrame(String);

impl EncodedFrame {
    pub fn from_jpeg(jpeg: &[u8]) -> Self {
        let mut url = String::with_capacity(JPEG_DATA_URL_PREFIX.len() + jpeg.len() * 4 / 3 + 4);
        url.push_str(JPEG_DATA_URL_PREFIX);
        STANDARD.encode_string(jpeg, &mut url);
        Self(url)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Recover the JPEG bytes, the same way the inference service does.
    pub fn decode(&self) -> Result<Vec<u8>, ImageError> {
        let (_, payload) = self
            .0
            .split_once(',')
            .ok_or_else(|| ImageError::Decode("data URL has no payload".to_string()))?;
        Ok(STANDARD.decode(payload)?)
    }
}

// the payload is large, only show its size
impl fmt::Debug for EncodedFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EncodedFrame({} bytes)", self.0.len())
    }
}

/// Snapshot-to-wire step: compress `image` to JPEG and wrap it in a data URL.
pub fn encode_data_url(image: &Image, quality: u8) -> Result<EncodedFrame, ImageError> {
    let jpeg = image_to_jpeg(image, quality)?;
    Ok(EncodedFrame::from_jpeg(&jpeg))
}
