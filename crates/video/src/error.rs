use {image::ImageError, std::fmt};

#[derive(Debug)]
pub enum VideoError {
    /// The camera could not be opened or was denied.
    Device(String),
    /// The camera is open but did not deliver a frame.
    Stream(String),
    /// The capture worker went away.
    Channel(String),
    /// A delivered frame could not be converted.
    Image(ImageError),
}

impl fmt::Display for VideoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VideoError::Device(msg) => write!(f, "camera unavailable: {msg}"),
            VideoError::Stream(msg) => write!(f, "no frame from camera: {msg}"),
            VideoError::Channel(msg) => write!(f, "capture worker gone: {msg}"),
            VideoError::Image(err) => write!(f, "bad frame: {err}"),
        }
    }
}

impl std::error::Error for VideoError {}

impl From<std::io::Error> for VideoError {
    fn from(err: std::io::Error) -> Self {
        VideoError::Device(err.to_string())
    }
}

impl From<ImageError> for VideoError {
    fn from(err: ImageError) -> Self {
        VideoError::Image(err)
    }
}
