use ndarray::Array2;

use super::Problem;
use crate::error::SolverError;

impl Problem {
    /// Builds the Huber regression problem `C Σ_i H_κ(y_i - x_iᵀβ) + ½‖β‖²`.
    ///
    /// Uses `H_κ(z) = ReHU_κ(z) + ReHU_κ(-z)` and `C ReHU_κ(z) = ReHU_{√C κ}(√C z)`,
    /// giving two ReHU pieces per sample. An infinite `kappa` yields ridge regression.
    pub fn huber(x: Array2<f64>, y: &[f64], kappa: f64, c: f64) -> Result<Problem, SolverError> {
        if !(kappa > 0.0) {
            return Err(SolverError::InvalidParameter {
                name: "kappa",
                value: kappa,
            });
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
        let sqrt_c = c.sqrt();
        let s = Array2::from_shape_fn((2, n), |(h, _)| if h == 0 { -sqrt_c } else { sqrt_c });
        let t = Array2::from_shape_fn((2, n), |(h, i)| {
            if h == 0 {
                sqrt_c * y[i]
            } else {
                -sqrt_c * y[i]
            }
        });
        let tau = Array2::from_elem((2, n), sqrt_c * kappa);
        Problem::new(x)?.with_rehu(s, t, tau)
    }
}
