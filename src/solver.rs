//! Dual coordinate descent
//!
//! One iteration sweeps the constraint multipliers `xi`, the ReLU multipliers
//! `Lambda` and the ReHU multiplier pairs `Gamma`/`Omega`, in this order. Every
//! coordinate is minimized exactly and `beta` is patched in place, so the
//! visiting order determines the iterates.

mod init;
mod objective;
mod params;
mod precompute;
mod recover;
mod update;

pub use self::params::Params;
pub use init::initial_status;
pub use objective::{dual_objective, primal_objective};
pub use precompute::{precompute_p, precompute_r, Precomputed};
pub use recover::recover_beta;
pub use update::{sweep, update_gamma, update_lambda, update_xi};

mod solve;
pub use solve::{solve, solve_with_status};
