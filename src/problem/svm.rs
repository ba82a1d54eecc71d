use ndarray::Array2;

use super::Problem;
use crate::error::SolverError;

impl Problem {
    /// Builds the linear SVM problem `C Σ_i max(0, 1 - y_i x_iᵀβ) + ½‖β‖²`.
    ///
    /// Labels are expected in `{-1, +1}`. The hinge of each sample is a single
    /// ReLU piece with `U[0,i] = -C y_i` and `V[0,i] = C`.
    pub fn svm(x: Array2<f64>, y: &[f64], c: f64) -> Result<Problem, SolverError> {
        if !(c > 0.0 && c.is_finite()) {
            return Err(SolverError::InvalidParameter { name: "C", value: c });
        }
        let n = x.nrows();
        if y.len() != n {
            return Err(SolverError::DimensionMismatch {
                what: "length of y",
                expected: n,
                found: y.len(),
            });
        }
        let u = Array2::from_shape_fn((1, n), |(_, i)| -c * y[i]);
        let v = Array2::from_elem((1, n), c);
        Problem::new(x)?.with_relu(u, v)
    }
}
