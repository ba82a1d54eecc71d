use serde::{Deserialize, Serialize};

/// Parameters of the coordinate descent method
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Params {
    /// Termination tolerance on the movement of `xi` and `beta` per iteration
    pub tol: f64,
    /// Maximum number of iterations
    pub max_iter: usize,
    /// Record the dual objective and report progress to the sink
    pub verbose: bool,
    /// Number of iterations between two diagnostic samples
    pub trace_period: usize,
}

impl Params {
    const DEFAULT_TOL: f64 = 1e-4;
    const DEFAULT_MAX_ITER: usize = 1000;
    const DEFAULT_TRACE_PERIOD: usize = 10;

    /// Creates a new [`Params`] struct with default parameter values.
    pub fn new() -> Self {
        Params {
            tol: Self::DEFAULT_TOL,
            max_iter: Self::DEFAULT_MAX_ITER,
            verbose: false,
            trace_period: Self::DEFAULT_TRACE_PERIOD,
        }
    }

    /// Sets the termination tolerance.
    pub fn with_tol(mut self, tol: f64) -> Self {
        self.tol = tol;
        self
    }

    /// Sets the maximum number of iterations.
    pub fn with_max_iter(mut self, max_iter: usize) -> Self {
        self.max_iter = max_iter;
        self
    }

    /// Enables or disables diagnostics.
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Sets the number of iterations between two diagnostic samples.
    pub fn with_trace_period(mut self, trace_period: usize) -> Self {
        self.trace_period = trace_period;
        self
    }
}

impl Default for Params {
    fn default() -> Self {
        Self::new()
    }
}
