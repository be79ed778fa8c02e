use std::fmt;

/// A 2D size or position. `Vec2<usize>` is a frame size in pixels,
/// `Vec2<f32>` a point, either normalized or in pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Vec2<T> {
    pub x: T,
    pub y: T,
}

impl<T> Vec2<T> {
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

impl<T: Default + PartialEq> Vec2<T> {
    /// True when either component is zero: a surface with nothing on it.
    pub fn is_empty(&self) -> bool {
        self.x == T::default() || self.y == T::default()
    }
}

impl Vec2<usize> {
    pub fn area(&self) -> usize {
        self.x * self.y
    }
}

impl Vec2<f32> {
    /// Map a normalized `[0, 1]` position onto a pixel grid of `size`.
    pub fn to_pixels(self, size: Vec2<usize>) -> Vec2<f32> {
        Vec2::new(self.x * size.x as f32, self.y * size.y as f32)
    }
}

impl<T: fmt::Display> fmt::Display for Vec2<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.x, self.y)
    }
}
