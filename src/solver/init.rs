use ndarray::{Array1, Array2};

use super::recover::recover_beta;
use crate::problem::Problem;
use crate::status::{Status, StatusCode};

/// Creates the default starting point of the coordinate descent method.
///
/// Uses `xi = 1`, `Lambda = 0.5`, `Gamma = min(Tau / 2, 1)` and `Omega = 0`,
/// all of which are feasible, and the matching `beta`.
pub fn initial_status(problem: &Problem) -> Status {
    let n = problem.size();
    let xi = Array1::ones(problem.n_constraints());
    let lambda = Array2::from_elem((problem.n_relu(), n), 0.5);
    let gamma = problem.tau.mapv(|tau| f64::min(0.5 * tau, 1.0));
    let omega = Array2::zeros((problem.n_rehu(), n));
    let beta = recover_beta(problem, &xi, &lambda, &gamma);
    Status {
        beta,
        xi,
        lambda,
        gamma,
        omega,
        code: StatusCode::Running,
        niter: 0,
        trace: Vec::new(),
        time: 0.0,
    }
}
