//! Partially specified matrix coefficients.

/// A record of matrix coefficients where any field may be left out.
///
/// `None` means "not given" and is replaced by the identity default when the
/// record is turned into a [`Matrix`](super::Matrix). `Some(0.0)` is an
/// explicit zero and is kept as-is.
///
/// ```
/// use affinity::{Matrix, MatrixFields};
///
/// let m: Matrix<f64> = MatrixFields::new().with_tx(10.0).into();
/// assert_eq!(m, Matrix::new(1.0, 0.0, 0.0, 1.0, 10.0, 0.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MatrixFields<F> {
    pub a: Option<F>,
    pub b: Option<F>,
    pub c: Option<F>,
    pub d: Option<F>,
    pub tx: Option<F>,
    pub ty: Option<F>,
}

impl<F> MatrixFields<F> {
    /// Creates a record with every field omitted.
    #[inline]
    pub fn new() -> Self {
        Self {
            a: None,
            b: None,
            c: None,
            d: None,
            tx: None,
            ty: None,
        }
    }

    #[inline]
    pub fn with_a(self, a: F) -> Self {
        Self { a: Some(a), ..self }
    }

    #[inline]
    pub fn with_b(self, b: F) -> Self {
        Self { b: Some(b), ..self }
    }

    #[inline]
    pub fn with_c(self, c: F) -> Self {
        Self { c: Some(c), ..self }
    }

    #[inline]
    pub fn with_d(self, d: F) -> Self {
        Self { d: Some(d), ..self }
    }

    #[inline]
    pub fn with_tx(self, tx: F) -> Self {
        Self { tx: Some(tx), ..self }
    }

    #[inline]
    pub fn with_ty(self, ty: F) -> Self {
        Self { ty: Some(ty), ..self }
    }
}

impl<F> Default for MatrixFields<F> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_empty() {
        let f: MatrixFields<f64> = MatrixFields::new();
        assert_eq!(f, MatrixFields::default());
        assert!(f.a.is_none() && f.ty.is_none());
    }

    #[test]
    fn test_builders_keep_other_fields() {
        let f = MatrixFields::new().with_b(0.0).with_ty(-2.0);
        assert_eq!(f.b, Some(0.0));
        assert_eq!(f.ty, Some(-2.0));
        assert_eq!(f.a, None);
        assert_eq!(f.c, None);
        assert_eq!(f.d, None);
        assert_eq!(f.tx, None);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_missing_keys() {
        let f: MatrixFields<f64> = serde_json::from_str(r#"{"tx": 10, "b": 0}"#).unwrap();
        assert_eq!(f, MatrixFields::new().with_tx(10.0).with_b(0.0));
    }
}
