use ndarray::Array2;

use super::Problem;
use crate::error::SolverError;

impl Problem {
    /// Builds the linear quantile regression problem `C Σ_i ρ_q(y_i - x_iᵀβ) + ½‖β‖²`.
    ///
    /// The check loss `ρ_q(r) = q max(r, 0) + (1 - q) max(-r, 0)` splits into two
    /// ReLU pieces per sample.
    pub fn quantile(x: Array2<f64>, y: &[f64], q: f64, c: f64) -> Result<Problem, SolverError> {
        if !(q > 0.0 && q < 1.0) {
            return Err(SolverError::InvalidParameter { name: "q", value: q });
        }
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
        let u = Array2::from_shape_fn((2, n), |(l, _)| {
            if l == 0 {
                -c * q
            } else {
                c * (1.0 - q)
            }
        });
        let v = Array2::from_shape_fn((2, n), |(l, i)| {
            if l == 0 {
                c * q * y[i]
            } else {
                -c * (1.0 - q) * y[i]
            }
        });
        Problem::new(x)?.with_relu(u, v)
    }
}
