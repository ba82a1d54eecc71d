//! Solve regularized ReLU/ReHU loss minimization problems.
//!
//! The crate handles problems of the form
//!
//! ```text
//! min_β  Σ_i Σ_l ReLU(u_li x_iᵀβ + v_li) + Σ_i Σ_h ReHU_τhi(s_hi x_iᵀβ + t_hi) + ½‖β‖²
//! s.t.   Aβ + b ≥ 0
//! ```
//!
//! covering SVMs, quantile and Huber regression among others, by exact
//! coordinate descent on the dual problem.
#![warn(missing_docs)]

mod error;
mod linalg;
pub mod loss;
pub mod problem;
pub mod sink;
pub mod solver;
mod time;

mod status;
pub use crate::error::SolverError;
pub use crate::problem::Problem;
pub use crate::status::{Status, StatusCode};
