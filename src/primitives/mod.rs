//! Affine matrix and the point type it operates on.

mod fields;
mod matrix;
mod point2;

pub use fields::MatrixFields;
pub use matrix::{Matrix, HORIZONTAL_FLIP, IDENTITY, VERTICAL_FLIP};
pub use point2::Point2;
