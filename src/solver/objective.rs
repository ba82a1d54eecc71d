use ndarray::{Array1, Zip};

use super::recover::block_product;
use crate::loss::{rehu, relu};
use crate::problem::Problem;
use crate::status::Status;

/// Computes the dual objective function value (to be minimized).
///
/// ```text
/// ½‖Aᵀxi - Xᵀ colSums(U ⊙ Lambda) - Xᵀ colSums(S ⊙ Gamma)‖² + xiᵀb - ⟨Lambda, V⟩
///     + ½‖Gamma‖² - ⟨Gamma, T⟩ + ⟨Omega, Tau⟩
/// ```
///
/// The square is expanded into one group of terms per block, so a block
/// without rows adds nothing.
pub fn dual_objective(problem: &Problem, status: &Status) -> f64 {
    let atxi = problem.a.t().dot(&status.xi);
    let u3l = block_product(&problem.x, &problem.u, &status.lambda);
    let s3g = block_product(&problem.x, &problem.s, &status.gamma);

    // constraints
    let mut obj = 0.5 * atxi.dot(&atxi) - atxi.dot(&u3l) - atxi.dot(&s3g)
        + status.xi.dot(&problem.b);

    // ReLU pieces
    obj += 0.5 * u3l.dot(&u3l) + u3l.dot(&s3g) - (&status.lambda * &problem.v).sum();

    // ReHU pieces, an infinite Tau always meets a zero Omega
    obj += 0.5 * s3g.dot(&s3g) + 0.5 * status.gamma.iter().map(|g| g * g).sum::<f64>()
        - (&status.gamma * &problem.t).sum();
    obj += Zip::from(&status.omega)
        .and(&problem.tau)
        .fold(0.0, |acc, &omega, &tau| acc + omega * tau.min(f64::MAX));
    obj
}

/// Computes the primal objective function value at `beta`.
///
/// Ignores the linear constraints; feasibility has to be checked separately.
pub fn primal_objective(problem: &Problem, beta: &Array1<f64>) -> f64 {
    let dec = problem.x.dot(beta);
    let mut loss = 0.0;
    for ((l, i), &u_li) in problem.u.indexed_iter() {
        loss += relu(u_li * dec[i] + problem.v[(l, i)]);
    }
    for ((h, i), &s_hi) in problem.s.indexed_iter() {
        loss += rehu(s_hi * dec[i] + problem.t[(h, i)], problem.tau[(h, i)]);
    }
    loss + 0.5 * beta.dot(beta)
}
