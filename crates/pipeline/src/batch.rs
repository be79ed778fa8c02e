use {com::Batch, image::EncodedFrame};

/// Groups encoded frames into batches of exactly `batch_size`.
///
/// The buffer drains completely on every flush, so it never holds more than
/// `batch_size - 1` frames between calls. Nothing limits how many flushed
/// batches may be in flight at once.
#[derive(Debug)]
pub struct BatchAccumulator {
    batch_size: usize,
    frames: Vec<EncodedFrame>,
}

impl BatchAccumulator {
    /// A size of 0 is treated as 1.
    pub fn new(batch_size: usize) -> Self {
        let batch_size = batch_size.max(1);
        Self {
            batch_size,
            frames: Vec::with_capacity(batch_size),
        }
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    /// Add a frame. Returns the completed batch when this frame filled it;
    /// the accumulator is empty again afterwards.
    pub fn append(&mut self, frame: EncodedFrame) -> Option<Batch> {
        self.frames.push(frame);
        if self.frames.len() < self.batch_size {
            return None;
        }
        let frames = std::mem::replace(&mut self.frames, Vec::with_capacity(self.batch_size));
        Some(Batch::new(frames))
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}
