use {
    crate::*,
    base::Vec2,
    std::sync::{Arc, Mutex, MutexGuard},
};

/// Transparent pixel; anything else is overlay content.
pub const CLEAR: u32 = 0x0000_0000;

/// Keypoint colour, packed `0xAARRGGBB`.
pub const POINT_COLOR: u32 = 0xFFFF_0000;

/// An ARGB overlay layer. Starts fully transparent.
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    size: Vec2<usize>,
    pixels: Vec<u32>,
}

impl Canvas {
    pub fn new(size: Vec2<usize>) -> Self {
        Self {
            size,
            pixels: vec![CLEAR; size.area()],
        }
    }

    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    /// Pixel at `(x, y)`, or `None` outside the canvas.
    pub fn pixel(&self, x: usize, y: usize) -> Option<u32> {
        (x < self.size.x && y < self.size.y).then(|| self.pixels[y * self.size.x + x])
    }

    pub fn is_blank(&self) -> bool {
        self.pixels.iter().all(|&p| p == CLEAR)
    }

    pub fn clear(&mut self) {
        self.pixels.fill(CLEAR);
    }

    /// Paint the non-transparent overlay pixels over a same-sized frame.
    pub fn composite_onto(&self, frame: &mut [u32]) {
        for (dst, &src) in frame.iter_mut().zip(self.pixels.iter()) {
            if src != CLEAR {
                *dst = src;
            }
        }
    }

    fn set_pixel(&mut self, x: i32, y: i32, color: u32) {
        if x >= 0 && y >= 0 && (x as usize) < self.size.x && (y as usize) < self.size.y {
            self.pixels[y as usize * self.size.x + x as usize] = color;
        }
    }
}

impl OverlayRenderer for Canvas {
    fn size(&self) -> Vec2<usize> {
        self.size
    }

    fn resize(&mut self, size: Vec2<usize>) {
        if size != self.size {
            log::debug!("overlay resized to {}", size);
            *self = Canvas::new(size);
        }
    }

    // a pixel belongs to the disc when its centre lies strictly inside the radius
    fn draw(&mut self, at: Vec2<f32>) {
        let r2 = POINT_RADIUS * POINT_RADIUS;
        let x0 = (at.x - POINT_RADIUS).floor() as i32;
        let x1 = (at.x + POINT_RADIUS).ceil() as i32;
        let y0 = (at.y - POINT_RADIUS).floor() as i32;
        let y1 = (at.y + POINT_RADIUS).ceil() as i32;

        for y in y0..y1 {
            for x in x0..x1 {
                let dx = x as f32 + 0.5 - at.x;
                let dy = y as f32 + 0.5 - at.y;
                if dx * dx + dy * dy < r2 {
                    self.set_pixel(x, y, POINT_COLOR);
                }
            }
        }
    }

    fn erase(&mut self, at: Vec2<f32>) {
        // first pixel whose centre is past `at - half`, then exactly ERASE_SIZE on
        let side = ERASE_SIZE as i32;
        let half = ERASE_SIZE / 2.0;
        let x0 = (at.x - half + 0.5).floor() as i32;
        let y0 = (at.y - half + 0.5).floor() as i32;

        for y in y0..y0 + side {
            for x in x0..x0 + side {
                self.set_pixel(x, y, CLEAR);
            }
        }
    }
}

/// A `Canvas` shared between the pipeline, which draws on it, and a
/// display, which reads it.
#[derive(Debug, Clone)]
pub struct SharedCanvas {
    inner: Arc<Mutex<Canvas>>,
}

impl SharedCanvas {
    pub fn new(size: Vec2<usize>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Canvas::new(size))),
        }
    }

    pub fn lock(&self) -> MutexGuard<'_, Canvas> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl OverlayRenderer for SharedCanvas {
    fn size(&self) -> Vec2<usize> {
        self.lock().size()
    }

    fn resize(&mut self, size: Vec2<usize>) {
        self.lock().resize(size);
    }

    fn draw(&mut self, at: Vec2<f32>) {
        self.lock().draw(at);
    }

    fn erase(&mut self, at: Vec2<f32>) {
        self.lock().erase(at);
    }

    // hold the lock across the whole op so a reader never sees half a move
    fn execute(&mut self, op: &DrawOp) {
        self.lock().execute(op);
    }
}
