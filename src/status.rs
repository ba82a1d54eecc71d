use ndarray::{Array1, Array2};
use serde::{Deserialize, Serialize};

use crate::error::SolverError;
use crate::problem::Problem;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
/// Possible outcomes of the optimization routine
pub enum StatusCode {
    /// Optimization not finished
    Running,
    /// Movement of `xi` and `beta` over one sweep dropped below the tolerance
    ///
    /// This is a stationarity test of the iteration, not a certificate of
    /// optimality; [`Status::duality_gap`] measures the latter.
    Converged,
    /// Maximum number of iterations reached
    MaxIterReached,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
/// A struct containing the primal and dual variables and the state of the optimization routine
pub struct Status {
    /// Primal coefficient vector (length `d`)
    pub beta: Array1<f64>,
    /// Multipliers of the linear constraints (length `K`)
    pub xi: Array1<f64>,
    /// Multipliers of the ReLU pieces (`L × n`)
    pub lambda: Array2<f64>,
    /// Multipliers of the ReHU pieces (`H × n`)
    pub gamma: Array2<f64>,
    /// Multipliers of the upper bounds of `gamma` (`H × n`)
    pub omega: Array2<f64>,
    /// Current status
    pub code: StatusCode,
    /// Number of conducted iterations
    pub niter: usize,
    /// Dual objective values sampled during the iterations
    pub trace: Vec<f64>,
    /// Elapsed time (in seconds)
    pub time: f64,
}

impl Status {
    /// Checks that all variables fit the dimensions of `problem`.
    pub fn check_dims(&self, problem: &Problem) -> Result<(), SolverError> {
        let checks = [
            ("length of beta", problem.dim(), self.beta.len()),
            ("length of xi", problem.n_constraints(), self.xi.len()),
            ("rows of Lambda", problem.n_relu(), self.lambda.nrows()),
            ("columns of Lambda", problem.size(), self.lambda.ncols()),
            ("rows of Gamma", problem.n_rehu(), self.gamma.nrows()),
            ("columns of Gamma", problem.size(), self.gamma.ncols()),
            ("rows of Omega", problem.n_rehu(), self.omega.nrows()),
            ("columns of Omega", problem.size(), self.omega.ncols()),
        ];
        for (what, expected, found) in checks {
            if expected != found {
                return Err(SolverError::DimensionMismatch {
                    what,
                    expected,
                    found,
                });
            }
        }
        Ok(())
    }

    /// Returns the primal objective value at `beta`.
    pub fn primal_objective(&self, problem: &Problem) -> f64 {
        crate::solver::primal_objective(problem, &self.beta)
    }

    /// Returns the dual objective value (in minimization form).
    pub fn dual_objective(&self, problem: &Problem) -> f64 {
        crate::solver::dual_objective(problem, self)
    }

    /// Returns the sum of primal and dual objective value, which vanishes at a solution.
    pub fn duality_gap(&self, problem: &Problem) -> f64 {
        self.primal_objective(problem) + self.dual_objective(problem)
    }
}
