//! Exact coordinate updates of the dual blocks
//!
//! Each function visits the coordinates of its block in a fixed order and
//! patches `beta` immediately, so later coordinates see earlier updates.
use ndarray::{Array1, Array2};

use super::precompute::Precomputed;
use crate::problem::Problem;
use crate::status::Status;

/// Updates the multipliers of the linear constraints, `k = 0..K`.
pub fn update_xi(
    problem: &Problem,
    p: &Array1<f64>,
    xi: &mut Array1<f64>,
    beta: &mut Array1<f64>,
) {
    for (k, ak) in problem.a.rows().into_iter().enumerate() {
        let eps = -(beta.dot(&ak) + problem.b[k]) / p[k];
        let xi_k = f64::max(xi[k] + eps, 0.0);
        let eps = xi_k - xi[k];
        xi[k] = xi_k;
        beta.scaled_add(eps, &ak);
    }
}

/// Updates the multipliers of the ReLU pieces, row by row.
pub fn update_lambda(
    problem: &Problem,
    r: &Array1<f64>,
    lambda: &mut Array2<f64>,
    beta: &mut Array1<f64>,
) {
    let (n_relu, n) = lambda.dim();
    for l in 0..n_relu {
        for i in 0..n {
            let u_li = problem.u[(l, i)];
            let v_li = problem.v[(l, i)];
            let x_i = problem.x.row(i);
            let lambda_li = lambda[(l, i)];
            let curv = r[i] * u_li * u_li;
            let target = if curv > 0.0 {
                lambda_li + (v_li + u_li * beta.dot(&x_i)) / curv
            } else if v_li > 0.0 {
                // linear subproblem, the minimizer is a vertex of the box
                1.0
            } else {
                0.0
            };
            let new_li = target.max(0.0).min(1.0);
            let eps = new_li - lambda_li;
            lambda[(l, i)] = new_li;
            beta.scaled_add(-eps * u_li, &x_i);
        }
    }
}

/// Updates the multiplier pairs of the ReHU pieces, row by row.
///
/// `omega` is recomputed from `gamma` after each step instead of being updated incrementally.
pub fn update_gamma(
    problem: &Problem,
    r: &Array1<f64>,
    gamma: &mut Array2<f64>,
    omega: &mut Array2<f64>,
    beta: &mut Array1<f64>,
) {
    let (n_rehu, n) = gamma.dim();
    for h in 0..n_rehu {
        for i in 0..n {
            let s_hi = problem.s[(h, i)];
            let t_hi = problem.t[(h, i)];
            let tau_hi = problem.tau[(h, i)];
            let x_i = problem.x.row(i);
            let gamma_hi = gamma[(h, i)];
            let eps = (t_hi + omega[(h, i)] + s_hi * beta.dot(&x_i) - gamma_hi)
                / (s_hi * s_hi * r[i] + 1.0);
            let new_hi = (gamma_hi + eps).max(0.0).min(tau_hi);
            let eps = new_hi - gamma_hi;
            gamma[(h, i)] = new_hi;
            beta.scaled_add(-eps * s_hi, &x_i);
            omega[(h, i)] = f64::max(0.0, new_hi - tau_hi);
        }
    }
}

/// Conducts one sweep over all coordinates: `xi`, then `Lambda`, then `Gamma`/`Omega`.
pub fn sweep(problem: &Problem, pre: &Precomputed, status: &mut Status) {
    update_xi(problem, &pre.p, &mut status.xi, &mut status.beta);
    update_lambda(problem, &pre.r, &mut status.lambda, &mut status.beta);
    update_gamma(
        problem,
        &pre.r,
        &mut status.gamma,
        &mut status.omega,
        &mut status.beta,
    );
}
