use {crate::*, base::Vec2};

/// Radius of a drawn keypoint, in pixels.
pub const POINT_RADIUS: f32 = 5.0;

/// Side of the square cleared when a keypoint is erased, in pixels.
pub const ERASE_SIZE: f32 = 10.0;

/// A persistent drawing surface for keypoints.
///
/// `draw` and `erase` take pixel coordinates. `execute` converts a `DrawOp`
/// using the surface size at the moment of execution, so a resize between
/// drawing a point and erasing it clears the spot where the point would be
/// now, not where it was painted.
pub trait OverlayRenderer: Send {
    fn size(&self) -> Vec2<usize>;

    /// Change the surface size. A real change clears the surface.
    fn resize(&mut self, size: Vec2<usize>);

    /// Fill a disc of `POINT_RADIUS` centred on `at`.
    fn draw(&mut self, at: Vec2<f32>);

    /// Clear an `ERASE_SIZE` square centred on `at`.
    fn erase(&mut self, at: Vec2<f32>);

    fn execute(&mut self, op: &DrawOp) {
        let size = self.size();
        match *op {
            DrawOp::Draw { at, .. } => self.draw(at.to_pixels(size)),
            DrawOp::Move { from, to, .. } => {
                self.erase(from.to_pixels(size));
                self.draw(to.to_pixels(size));
            }
            DrawOp::Erase { at, .. } => self.erase(at.to_pixels(size)),
        }
    }
}
