use ndarray::Array1;

use crate::linalg::row_sq_norms;
use crate::problem::Problem;

/// Squared row norms of `X` and `A`, the curvatures of the coordinate subproblems.
#[derive(Clone, Debug)]
pub struct Precomputed {
    /// `r[i] = ‖X[i,:]‖²`
    pub r: Array1<f64>,
    /// `p[k] = ‖A[k,:]‖²`
    pub p: Array1<f64>,
}

impl Precomputed {
    /// Precomputes both vectors for `problem`.
    pub fn new(problem: &Problem) -> Self {
        Precomputed {
            r: precompute_r(problem),
            p: precompute_p(problem),
        }
    }
}

/// Computes the squared norm of every sample.
pub fn precompute_r(problem: &Problem) -> Array1<f64> {
    row_sq_norms(&problem.x)
}

/// Computes the squared norm of every constraint row (empty without constraints).
pub fn precompute_p(problem: &Problem) -> Array1<f64> {
    row_sq_norms(&problem.a)
}
