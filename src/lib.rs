//! affinity - Immutable 2D affine transforms
//!
//! A [`Matrix`] holds the six coefficients `a, b, c, d, tx, ty` of the map
//! `(x, y) -> (a*x + c*y + tx, b*x + d*y + ty)`. Every operation returns a
//! fresh value; nothing is ever modified in place.

pub mod error;
pub mod primitives;

pub use error::AffineError;
pub use primitives::{Matrix, MatrixFields, Point2, HORIZONTAL_FLIP, IDENTITY, VERTICAL_FLIP};
