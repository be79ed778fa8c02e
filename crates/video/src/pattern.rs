use {
    crate::*,
    base::Vec2,
    image::{Image, PixelFormat},
    std::time::Duration,
};

/// A synthetic camera producing a moving gradient. Stands in for real
/// hardware in demos and tests.
pub struct PatternDevice {
    size: Vec2<usize>,
    interval: Duration,
    frame: usize,
    open: bool,
}

impl PatternDevice {
    pub fn new(size: Vec2<usize>, frame_rate: f32) -> Self {
        Self {
            size,
            interval: Duration::from_secs_f32(1.0 / frame_rate.max(1.0)),
            frame: 0,
            open: false,
        }
    }
}

impl VideoInDevice for PatternDevice {
    fn open(&mut self) -> Result<Vec2<usize>, VideoError> {
        if self.size.is_empty() {
            return Err(VideoError::Device("pattern size must be non-zero".to_string()));
        }
        self.open = true;
        Ok(self.size)
    }

    fn close(&mut self) {
        self.open = false;
    }

    fn blocking_capture(&mut self) -> Result<Image, VideoError> {
        if !self.open {
            return Err(VideoError::Stream("No stream".to_string()));
        }
        std::thread::sleep(self.interval);
        let shift = self.frame;
        self.frame = self.frame.wrapping_add(4);

        let mut data = Vec::with_capacity(self.size.area() * 3);
        for y in 0..self.size.y {
            for x in 0..self.size.x {
                data.extend_from_slice(&[
                    ((x + shift) % 256) as u8,
                    (y % 256) as u8,
                    ((x + y) % 256) as u8,
                ]);
            }
        }
        Ok(Image::new(self.size, data, PixelFormat::Rgb8))
    }
}
