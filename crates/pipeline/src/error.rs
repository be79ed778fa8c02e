use {com::ComError, image::ImageError, std::fmt, video::VideoError};

#[derive(Debug)]
pub enum PipelineError {
    Image(ImageError),
    Video(VideoError),
    Com(ComError),
}

impl fmt::Display for PipelineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PipelineError::Image(e) => write!(f, "image error: {}", e),
            PipelineError::Video(e) => write!(f, "video error: {}", e),
            PipelineError::Com(e) => write!(f, "inference error: {}", e),
        }
    }
}

impl std::error::Error for PipelineError {}

impl From<ImageError> for PipelineError {
    fn from(e: ImageError) -> Self {
        PipelineError::Image(e)
    }
}

impl From<VideoError> for PipelineError {
    fn from(e: VideoError) -> Self {
        PipelineError::Video(e)
    }
}

impl From<ComError> for PipelineError {
    fn from(e: ComError) -> Self {
        PipelineError::Com(e)
    }
}
