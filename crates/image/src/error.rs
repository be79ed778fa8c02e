use std::fmt;

#[derive(Debug)]
pub enum ImageError {
    /// Input could not be read as a picture (bad JPEG, bad base64, ...).
    Decode(String),
    /// The JPEG encoder rejected the picture.
    Encode(String),
    /// Raw pixel data does not match the frame dimensions.
    Size { expected: usize, actual: usize },
}

impl fmt::Display for ImageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageError::Decode(msg) => write!(f, "cannot decode image: {msg}"),
            ImageError::Encode(msg) => write!(f, "cannot encode image: {msg}"),
            ImageError::Size { expected, actual } => {
                write!(f, "frame holds {actual} bytes where {expected} were expected")
            }
        }
    }
}

impl std::error::Error for ImageError {}

impl From<crates_image::ImageError> for ImageError {
    fn from(err: crates_image::ImageError) -> Self {
        match err {
            crates_image::ImageError::Encoding(_) | crates_image::ImageError::Parameter(_) => {
                ImageError::Encode(err.to_string())
            }
            _ => ImageError::Decode(err.to_string()),
        }
    }
}

impl From<base64::DecodeError> for ImageError {
    fn from(err: base64::DecodeError) -> Self {
        ImageError::Decode(format!("data URL payload: {err}"))
    }
}
