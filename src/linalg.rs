//! Small dense helpers shared by the solver.
use ndarray::{Array1, ArrayBase, Axis, Data, Ix1, Ix2};

#[cfg(feature = "lapack")]
use ndarray_linalg::Norm;

/// Euclidean norm of a vector.
#[cfg(feature = "lapack")]
pub fn norm<S: Data<Elem = f64>>(v: &ArrayBase<S, Ix1>) -> f64 {
    v.norm_l2()
}

/// Euclidean norm of a vector.
#[cfg(not(feature = "lapack"))]
pub fn norm<S: Data<Elem = f64>>(v: &ArrayBase<S, Ix1>) -> f64 {
    v.dot(v).sqrt()
}

/// Euclidean distance between two vectors of equal length.
pub fn distance<S, T>(a: &ArrayBase<S, Ix1>, b: &ArrayBase<T, Ix1>) -> f64
where
    S: Data<Elem = f64>,
    T: Data<Elem = f64>,
{
    norm(&(a - b))
}

/// Squared Euclidean norm of every row of a matrix.
pub fn row_sq_norms<S: Data<Elem = f64>>(m: &ArrayBase<S, Ix2>) -> Array1<f64> {
    m.map_axis(Axis(1), |row| row.dot(&row))
}
