//! 2D point type.

use num_traits::Float;
use std::ops::Neg;

/// A 2D point with x and y coordinates.
///
/// Generic over floating-point types (`f32` or `f64`).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point2<F> {
    pub x: F,
    pub y: F,
}

impl<F: Float> Point2<F> {
    /// Creates a new point.
    #[inline]
    pub fn new(x: F, y: F) -> Self {
        Self { x, y }
    }

    /// Creates a point at the origin (0, 0).
    #[inline]
    pub fn origin() -> Self {
        Self {
            x: F::zero(),
            y: F::zero(),
        }
    }
}

impl<F: Float> Neg for Point2<F> {
    type Output = Self;

    /// Reflects the point through the origin.
    #[inline]
    fn neg(self) -> Self {
        Self {
            x: -self.x,
            y: -self.y,
        }
    }
}

impl<F: Float> From<(F, F)> for Point2<F> {
    #[inline]
    fn from((x, y): (F, F)) -> Self {
        Self { x, y }
    }
}

impl<F: Float> Default for Point2<F> {
    fn default() -> Self {
        Self::origin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origin() {
        let p: Point2<f64> = Point2::origin();
        assert_eq!(p, Point2::new(0.0, 0.0));
        assert_eq!(p, Point2::default());
    }

    #[test]
    fn test_neg() {
        let p = Point2::new(3.0, -4.0);
        assert_eq!(-p, Point2::new(-3.0, 4.0));
    }

    #[test]
    fn test_from_tuple() {
        let p: Point2<f32> = (1.5, 2.5).into();
        assert_eq!(p.x, 1.5);
        assert_eq!(p.y, 2.5);
    }
}
