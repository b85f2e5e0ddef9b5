//! .
//!
//! The origin of coordinate system is in top-left corner, `y` grows downwards. Every vertex is an
//! integer pixel; intermediate math is carried in `f64` and truncated toward zero, never rounded.
//! The truncation is visible in the output as a slight jitter and is kept on purpose.

use euclid::{Point2D, Vector2D, Rotation2D, Angle};

pub mod shapes;
pub use shapes::*;


/// Pixel coordinate basis
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PixelSpace;

pub type P2 = Point2D<i32, PixelSpace>;
pub type V2 = Vector2D<i32, PixelSpace>;

/// Rotate `point` about `pivot` by `theta` radians.
///
/// Returns the pivot untouched alongside the rotated point.
pub fn rotate(pivot: P2, point: P2, theta: f64) -> (P2, P2) {
  let rotation = Rotation2D::<f64, PixelSpace, PixelSpace>::new(Angle::radians(theta));
  let offset = rotation.transform_vector((point - pivot).to_f64());
  (pivot, truncate(pivot.to_f64() + offset))
}

/// Drop the fractional part of both coordinates.
pub fn truncate(point: Point2D<f64, PixelSpace>) -> P2 {
  P2::new(point.x as i32, point.y as i32)
}
