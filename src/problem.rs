//! Training problem definition
//!
//! A [`Problem`] bundles the design matrix with the (possibly empty) blocks of
//! linear constraints, ReLU pieces and ReHU pieces. Dimensions are checked
//! once while the problem is assembled so that the solver can run unchecked.
use ndarray::{Array1, Array2};

use crate::error::SolverError;

mod huber;
mod quantile;
mod svm;

/// Data of a composite ReLU/ReHU loss minimization problem
///
/// ```text
/// min_β  Σ_i Σ_l ReLU(U[l,i] x_iᵀβ + V[l,i])
///      + Σ_i Σ_h ReHU_Tau[h,i](S[h,i] x_iᵀβ + T[h,i]) + ½‖β‖²
/// s.t.   Aβ + b ≥ 0
/// ```
#[derive(Clone, Debug)]
pub struct Problem {
    pub(crate) x: Array2<f64>,
    pub(crate) a: Array2<f64>,
    pub(crate) b: Array1<f64>,
    pub(crate) u: Array2<f64>,
    pub(crate) v: Array2<f64>,
    pub(crate) s: Array2<f64>,
    pub(crate) t: Array2<f64>,
    pub(crate) tau: Array2<f64>,
}

fn check_dim(what: &'static str, expected: usize, found: usize) -> Result<(), SolverError> {
    if expected != found {
        return Err(SolverError::DimensionMismatch {
            what,
            expected,
            found,
        });
    }
    Ok(())
}

fn check_finite<'a>(
    name: &'static str,
    values: impl IntoIterator<Item = &'a f64>,
) -> Result<(), SolverError> {
    if values.into_iter().all(|v| v.is_finite()) {
        Ok(())
    } else {
        Err(SolverError::NonFinite { name })
    }
}

impl Problem {
    /// Creates a problem with design matrix `x` (`n × d`) and no loss pieces or constraints.
    pub fn new(x: Array2<f64>) -> Result<Self, SolverError> {
        check_finite("X", x.iter())?;
        let (n, d) = x.dim();
        Ok(Problem {
            x,
            a: Array2::zeros((0, d)),
            b: Array1::zeros(0),
            u: Array2::zeros((0, n)),
            v: Array2::zeros((0, n)),
            s: Array2::zeros((0, n)),
            t: Array2::zeros((0, n)),
            tau: Array2::zeros((0, n)),
        })
    }

    /// Assembles a problem from all of its blocks at once.
    ///
    /// Blocks with zero rows are allowed and stand for absent constraints or pieces.
    #[allow(clippy::too_many_arguments)]
    pub fn from_parts(
        x: Array2<f64>,
        a: Array2<f64>,
        b: Array1<f64>,
        u: Array2<f64>,
        v: Array2<f64>,
        s: Array2<f64>,
        t: Array2<f64>,
        tau: Array2<f64>,
    ) -> Result<Self, SolverError> {
        Problem::new(x)?
            .with_constraints(a, b)?
            .with_relu(u, v)?
            .with_rehu(s, t, tau)
    }

    /// Sets the linear constraints `Aβ + b ≥ 0` with `a` of shape `K × d`.
    pub fn with_constraints(
        mut self,
        a: Array2<f64>,
        b: Array1<f64>,
    ) -> Result<Self, SolverError> {
        check_dim("columns of A", self.dim(), a.ncols())?;
        check_dim("length of b", a.nrows(), b.len())?;
        check_finite("A", a.iter())?;
        check_finite("b", b.iter())?;
        let zero_row = a.rows().into_iter().position(|ak| ak.iter().all(|&v| v == 0.0));
        if let Some(row) = zero_row {
            return Err(SolverError::DegenerateConstraint { row });
        }
        self.a = a;
        self.b = b;
        Ok(self)
    }

    /// Sets the ReLU pieces `ReLU(U[l,i] x_iᵀβ + V[l,i])` with `u` and `v` of shape `L × n`.
    pub fn with_relu(mut self, u: Array2<f64>, v: Array2<f64>) -> Result<Self, SolverError> {
        let n = self.size();
        check_dim("columns of U", n, u.ncols())?;
        check_dim("columns of V", n, v.ncols())?;
        check_dim("rows of V", u.nrows(), v.nrows())?;
        check_finite("U", u.iter())?;
        check_finite("V", v.iter())?;
        self.u = u;
        self.v = v;
        Ok(self)
    }

    /// Sets the ReHU pieces `ReHU_Tau[h,i](S[h,i] x_iᵀβ + T[h,i])`.
    ///
    /// `s`, `t` and `tau` have shape `H × n`.
    ///
    /// Entries of `tau` may be `+∞`, turning the piece into a half square.
    pub fn with_rehu(
        mut self,
        s: Array2<f64>,
        t: Array2<f64>,
        tau: Array2<f64>,
    ) -> Result<Self, SolverError> {
        let n = self.size();
        check_dim("columns of S", n, s.ncols())?;
        check_dim("columns of T", n, t.ncols())?;
        check_dim("columns of Tau", n, tau.ncols())?;
        check_dim("rows of T", s.nrows(), t.nrows())?;
        check_dim("rows of Tau", s.nrows(), tau.nrows())?;
        check_finite("S", s.iter())?;
        check_finite("T", t.iter())?;
        for ((row, col), &value) in tau.indexed_iter() {
            if value.is_nan() {
                return Err(SolverError::NonFinite { name: "Tau" });
            }
            if value < 0.0 {
                return Err(SolverError::NegativeBound { row, col, value });
            }
        }
        self.s = s;
        self.t = t;
        self.tau = tau;
        Ok(self)
    }

    /// Returns the number of samples `n`.
    pub fn size(&self) -> usize {
        self.x.nrows()
    }
    /// Returns the dimension `d` of the primal variable.
    pub fn dim(&self) -> usize {
        self.x.ncols()
    }
    /// Returns the number `K` of linear constraints.
    pub fn n_constraints(&self) -> usize {
        self.a.nrows()
    }
    /// Returns the number `L` of ReLU pieces per sample.
    pub fn n_relu(&self) -> usize {
        self.u.nrows()
    }
    /// Returns the number `H` of ReHU pieces per sample.
    pub fn n_rehu(&self) -> usize {
        self.s.nrows()
    }

    /// Constraint matrix `A`.
    pub fn a(&self) -> &Array2<f64> {
        &self.a
    }
    /// Constraint offsets `b`.
    pub fn b(&self) -> &Array1<f64> {
        &self.b
    }
}
