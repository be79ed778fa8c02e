use image::EncodedFrame;

/// Frames sent together in one inference request, in capture order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Batch {
    frames: Vec<EncodedFrame>,
}

impl Batch {
    pub fn new(frames: Vec<EncodedFrame>) -> Self {
        Self { frames }
    }

    pub fn frames(&self) -> &[EncodedFrame] {
        &self.frames
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}
