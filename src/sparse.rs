//! Compact text encoding for sparse numeric vectors.
//!
//! A vector is written as its length followed by one `index:value` pair per
//! non-zero element:
//!
//! ```text
//! <len>,<i1>:<v1>,<i2>:<v2>,...
//! ```
//!
//! Values use fixed-point notation with [`SPARSE_VALUE_PRECISION`] fractional
//! digits. A vector with no non-zero elements encodes as `<len>,` (the
//! separator after the length is always present).
//!
//! ```
//! use datasink::serialize_sparse_vector;
//!
//! assert_eq!(serialize_sparse_vector(&[1.5, 0.0, -2.0]), "3,0:1.50000000,2:-2.00000000");
//! assert_eq!(serialize_sparse_vector(&[0.0; 3]), "3,");
//! ```

use std::fmt::Write;

/// Digits after the decimal point in encoded values.
pub const SPARSE_VALUE_PRECISION: usize = 8;

/// Iterator over the non-zero `(index, value)` pairs of a slice.
///
/// Zero is tested with exact equality, so `-0.0` is skipped and `NaN` is kept.
pub struct SparseEntries<'a, T> {
    inner: std::iter::Enumerate<std::slice::Iter<'a, T>>,
}

impl<T: Copy + Into<f64>> Iterator for SparseEntries<'_, T> {
    type Item = (usize, f64);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .by_ref()
            .map(|(i, v)| (i, (*v).into()))
            .find(|&(_, v)| v != 0.0)
    }
}

/// Non-zero entries of `values`, in ascending index order.
pub fn sparse_entries<T: Copy + Into<f64>>(values: &[T]) -> SparseEntries<'_, T> {
    SparseEntries {
        inner: values.iter().enumerate(),
    }
}

/// Encode `values` as `<len>,<idx>:<value>,...`.
///
/// Never fails; non-finite values are written as `nan`, `inf` and `-inf`.
pub fn serialize_sparse_vector<T: Copy + Into<f64>>(values: &[T]) -> String {
    let mut out = format!("{},", values.len());
    for (n, (i, v)) in sparse_entries(values).enumerate() {
        if n > 0 {
            out.push(',');
        }
        // Writing to a String cannot fail.
        if v.is_nan() {
            let _ = write!(out, "{i}:nan");
        } else {
            let _ = write!(out, "{i}:{v:.prec$}", prec = SPARSE_VALUE_PRECISION);
        }
    }
    out
}
