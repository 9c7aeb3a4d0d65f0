//! 2D affine transformation matrix.

use super::{MatrixFields, Point2};
use crate::error::AffineError;
use num_traits::Float;
use std::fmt;
use std::ops::Mul;

/// An immutable 2D affine transformation matrix.
///
/// Stored as the six coefficients of a 2x3 matrix in column order:
/// ```text
/// | a  c  tx |
/// | b  d  ty |
/// ```
///
/// Transforms are applied as:
/// - Point: `(a*x + c*y + tx, b*x + d*y + ty)`
/// - Delta: `(a*x + c*y, b*x + d*y)` (no translation)
///
/// Fields are read through accessors only. Every operation returns a new
/// matrix, so the constants [`IDENTITY`], [`HORIZONTAL_FLIP`] and
/// [`VERTICAL_FLIP`] can never change:
///
/// ```compile_fail
/// let mut m = affinity::IDENTITY;
/// m.a = 2.0;
/// ```
///
/// # Example
///
/// ```
/// use affinity::{Matrix, Point2};
/// use std::f64::consts::FRAC_PI_2;
///
/// // Quarter turn about (1, 1), then shift right by 10
/// let m = Matrix::translation(10.0, 0.0).rotate(FRAC_PI_2, Some(Point2::new(1.0, 1.0)));
///
/// let p = m.transform_point(Point2::new(2.0, 1.0));
/// assert!((p.x - 11.0).abs() < 1e-12);
/// assert!((p.y - 2.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Matrix<F> {
    a: F,
    b: F,
    c: F,
    d: F,
    tx: F,
    ty: F,
}

/// The identity transform.
pub const IDENTITY: Matrix<f64> = Matrix::<f64>::IDENTITY;

/// Mirrors across the y axis: `(x, y) -> (-x, y)`.
pub const HORIZONTAL_FLIP: Matrix<f64> = Matrix::<f64>::HORIZONTAL_FLIP;

/// Mirrors across the x axis: `(x, y) -> (x, -y)`.
pub const VERTICAL_FLIP: Matrix<f64> = Matrix::<f64>::VERTICAL_FLIP;

macro_rules! matrix_constants {
    ($($float:ty),*) => {$(
        impl Matrix<$float> {
            /// The identity transform.
            pub const IDENTITY: Self = Self {
                a: 1.0,
                b: 0.0,
                c: 0.0,
                d: 1.0,
                tx: 0.0,
                ty: 0.0,
            };

            /// Mirrors across the y axis.
            pub const HORIZONTAL_FLIP: Self = Self {
                a: -1.0,
                b: 0.0,
                c: 0.0,
                d: 1.0,
                tx: 0.0,
                ty: 0.0,
            };

            /// Mirrors across the x axis.
            pub const VERTICAL_FLIP: Self = Self {
                a: 1.0,
                b: 0.0,
                c: 0.0,
                d: -1.0,
                tx: 0.0,
                ty: 0.0,
            };
        }
    )*};
}

matrix_constants!(f32, f64);

impl<F: Float> Matrix<F> {
    /// Creates a matrix from all six coefficients.
    #[inline]
    pub fn new(a: F, b: F, c: F, d: F, tx: F, ty: F) -> Self {
        Self { a, b, c, d, tx, ty }
    }

    /// Creates a matrix from coefficients that may each be omitted.
    ///
    /// Omitted coefficients take their identity value: `a` and `d` become 1,
    /// the rest become 0. An explicit zero is kept.
    #[inline]
    pub fn from_coefficients(
        a: Option<F>,
        b: Option<F>,
        c: Option<F>,
        d: Option<F>,
        tx: Option<F>,
        ty: Option<F>,
    ) -> Self {
        Self {
            a: a.unwrap_or_else(F::one),
            b: b.unwrap_or_else(F::zero),
            c: c.unwrap_or_else(F::zero),
            d: d.unwrap_or_else(F::one),
            tx: tx.unwrap_or_else(F::zero),
            ty: ty.unwrap_or_else(F::zero),
        }
    }

    /// Creates a matrix from a record of named coefficients.
    ///
    /// Same defaults as [`from_coefficients`](Self::from_coefficients).
    #[inline]
    pub fn from_fields(fields: MatrixFields<F>) -> Self {
        Self::from_coefficients(fields.a, fields.b, fields.c, fields.d, fields.tx, fields.ty)
    }

    /// Creates the identity transform.
    #[inline]
    pub fn identity() -> Self {
        Self::new(
            F::one(),
            F::zero(),
            F::zero(),
            F::one(),
            F::zero(),
            F::zero(),
        )
    }

    /// Creates a mirror across the y axis.
    #[inline]
    pub fn horizontal_flip() -> Self {
        Self::new(
            -F::one(),
            F::zero(),
            F::zero(),
            F::one(),
            F::zero(),
            F::zero(),
        )
    }

    /// Creates a mirror across the x axis.
    #[inline]
    pub fn vertical_flip() -> Self {
        Self::new(
            F::one(),
            F::zero(),
            F::zero(),
            -F::one(),
            F::zero(),
            F::zero(),
        )
    }

    /// Creates a translation transform.
    #[inline]
    pub fn translation(tx: F, ty: F) -> Self {
        Self::new(F::one(), F::zero(), F::zero(), F::one(), tx, ty)
    }

    /// Creates a rotation by `theta` radians.
    ///
    /// With the y axis pointing up, positive angles turn counter-clockwise.
    /// When `about` is given the rotation pivots around that point instead of
    /// the origin.
    pub fn rotation(theta: F, about: Option<Point2<F>>) -> Self {
        let (sin, cos) = (theta.sin(), theta.cos());
        Self::new(cos, sin, -sin, cos, F::zero(), F::zero()).pivoted(about)
    }

    /// Creates a scaling transform.
    ///
    /// `sy` falls back to `sx` when it is `None`, zero or NaN, so a single
    /// factor scales uniformly.
    pub fn scaling(sx: F, sy: Option<F>, about: Option<Point2<F>>) -> Self {
        let sy = match sy {
            Some(sy) if sy != F::zero() && !sy.is_nan() => sy,
            _ => sx,
        };
        Self::new(sx, F::zero(), F::zero(), sy, F::zero(), F::zero()).pivoted(about)
    }

    /// Creates a skew transform from two angles in radians.
    ///
    /// The result is exactly `(0, tan(skew_y), tan(skew_x), 0, 0, 0)`: the
    /// diagonal is zero, not one.
    #[inline]
    pub fn skewing(skew_x: F, skew_y: F) -> Self {
        Self::new(
            F::zero(),
            skew_y.tan(),
            skew_x.tan(),
            F::zero(),
            F::zero(),
            F::zero(),
        )
    }

    /// Conjugates `self` by a translation so it acts about `about`.
    fn pivoted(self, about: Option<Point2<F>>) -> Self {
        match about {
            Some(p) => {
                let back = -p;
                Self::translation(p.x, p.y)
                    .concat(&self)
                    .concat(&Self::translation(back.x, back.y))
            }
            None => self,
        }
    }

    #[inline]
    pub fn a(&self) -> F {
        self.a
    }

    #[inline]
    pub fn b(&self) -> F {
        self.b
    }

    #[inline]
    pub fn c(&self) -> F {
        self.c
    }

    #[inline]
    pub fn d(&self) -> F {
        self.d
    }

    #[inline]
    pub fn tx(&self) -> F {
        self.tx
    }

    #[inline]
    pub fn ty(&self) -> F {
        self.ty
    }

    /// Concatenates `other` onto this matrix.
    ///
    /// This is the matrix product `self * other`: the result maps a point
    /// through `other` first and then through `self`.
    pub fn concat(&self, other: &Self) -> Self {
        Self {
            a: self.a * other.a + self.c * other.b,
            b: self.b * other.a + self.d * other.b,
            c: self.a * other.c + self.c * other.d,
            d: self.b * other.c + self.d * other.d,
            tx: self.a * other.tx + self.c * other.ty + self.tx,
            ty: self.b * other.tx + self.d * other.ty + self.ty,
        }
    }

    /// Returns `self` concatenated with a rotation. See [`rotation`](Self::rotation).
    #[inline]
    pub fn rotate(&self, theta: F, about: Option<Point2<F>>) -> Self {
        self.concat(&Self::rotation(theta, about))
    }

    /// Returns `self` concatenated with a scale. See [`scaling`](Self::scaling).
    #[inline]
    pub fn scale(&self, sx: F, sy: Option<F>, about: Option<Point2<F>>) -> Self {
        self.concat(&Self::scaling(sx, sy, about))
    }

    /// Returns `self` concatenated with a skew. See [`skewing`](Self::skewing).
    #[inline]
    pub fn skew(&self, skew_x: F, skew_y: F) -> Self {
        self.concat(&Self::skewing(skew_x, skew_y))
    }

    /// Returns `self` concatenated with a translation.
    #[inline]
    pub fn translate(&self, tx: F, ty: F) -> Self {
        self.concat(&Self::translation(tx, ty))
    }

    /// Returns a field-for-field duplicate.
    #[inline]
    pub fn copy(&self) -> Self {
        Self::new(self.a, self.b, self.c, self.d, self.tx, self.ty)
    }

    /// Returns the determinant of the linear part.
    ///
    /// - Positive: preserves orientation
    /// - Negative: flips orientation (reflection)
    /// - Zero: singular (collapses to line or point)
    #[inline]
    pub fn determinant(&self) -> F {
        self.a * self.d - self.b * self.c
    }

    /// Returns true if [`inverse`](Self::inverse) yields finite coefficients
    /// for a finite matrix.
    #[inline]
    pub fn is_invertible(&self) -> bool {
        let det = self.determinant();
        det != F::zero() && det.is_finite()
    }

    /// Returns the inverse transform.
    ///
    /// A singular matrix is not rejected: dividing by a zero determinant
    /// leaves infinities or NaN in the result. Use
    /// [`try_inverse`](Self::try_inverse) to get an error instead.
    pub fn inverse(&self) -> Self {
        let det = self.determinant();
        Self {
            a: self.d / det,
            b: -self.b / det,
            c: -self.c / det,
            d: self.a / det,
            tx: (self.c * self.ty - self.d * self.tx) / det,
            ty: (self.b * self.tx - self.a * self.ty) / det,
        }
    }

    /// Returns the inverse transform, or an error if the determinant is zero
    /// or not finite.
    pub fn try_inverse(&self) -> Result<Self, AffineError> {
        if !self.is_invertible() {
            return Err(AffineError::Singular {
                determinant: self.determinant().to_f64().unwrap_or(f64::NAN),
            });
        }
        Ok(self.inverse())
    }

    /// Applies this transform to a point, including translation.
    #[inline]
    pub fn transform_point(&self, p: Point2<F>) -> Point2<F> {
        Point2::new(
            self.a * p.x + self.c * p.y + self.tx,
            self.b * p.x + self.d * p.y + self.ty,
        )
    }

    /// Applies only the linear part to a point, ignoring translation.
    ///
    /// Use this for offsets and directions rather than positions.
    #[inline]
    pub fn delta_transform_point(&self, p: Point2<F>) -> Point2<F> {
        Point2::new(self.a * p.x + self.c * p.y, self.b * p.x + self.d * p.y)
    }

    /// Applies this transform to multiple points.
    pub fn transform_points(&self, points: &[Point2<F>]) -> Vec<Point2<F>> {
        points.iter().map(|p| self.transform_point(*p)).collect()
    }

    /// Returns true if this is approximately the identity transform.
    pub fn is_identity(&self, epsilon: F) -> bool {
        (self.a - F::one()).abs() < epsilon
            && self.b.abs() < epsilon
            && self.c.abs() < epsilon
            && (self.d - F::one()).abs() < epsilon
            && self.tx.abs() < epsilon
            && self.ty.abs() < epsilon
    }

    /// Returns the coefficients as `[a, b, c, d, tx, ty]`.
    #[inline]
    pub fn to_array(&self) -> [F; 6] {
        [self.a, self.b, self.c, self.d, self.tx, self.ty]
    }
}

impl<F: Float> Default for Matrix<F> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<F: Float> From<MatrixFields<F>> for Matrix<F> {
    #[inline]
    fn from(fields: MatrixFields<F>) -> Self {
        Self::from_fields(fields)
    }
}

impl<F: Float> From<[F; 6]> for Matrix<F> {
    #[inline]
    fn from([a, b, c, d, tx, ty]: [F; 6]) -> Self {
        Self::new(a, b, c, d, tx, ty)
    }
}

impl<F: Float> Mul for Matrix<F> {
    type Output = Self;

    /// Same as [`Matrix::concat`].
    fn mul(self, rhs: Self) -> Self {
        self.concat(&rhs)
    }
}

impl<F: Float> Mul<Point2<F>> for Matrix<F> {
    type Output = Point2<F>;

    fn mul(self, rhs: Point2<F>) -> Point2<F> {
        self.transform_point(rhs)
    }
}

impl<F: Float + fmt::Display> fmt::Display for Matrix<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Matrix({}, {}, {}, {}, {}, {})",
            self.a, self.b, self.c, self.d, self.tx, self.ty
        )
    }
}
