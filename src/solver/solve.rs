use ndarray::Zip;

use crate::error::SolverError;
use crate::linalg::distance;
use crate::problem::Problem;
use crate::sink::{header, progress, Sink};
use crate::status::{Status, StatusCode};
use crate::time;

use super::init::initial_status;
use super::objective::dual_objective;
use super::precompute::Precomputed;
use super::recover::recover_beta;
use super::update::sweep;
use super::Params;

/// Uses dual coordinate descent to solve the given problem starting from the default initial
/// point.
pub fn solve(problem: &Problem, params: &Params, sink: Option<&mut dyn Sink>) -> Status {
    let status = initial_status(problem);
    run(status, problem, params, sink)
}

/// Uses dual coordinate descent to solve the given problem starting from a particular [`Status`].
///
/// The dual variables are projected onto their feasible boxes and `beta` is
/// recomputed from them, so any supplied `beta` is discarded.
/// New objective samples are appended to the existing trace.
pub fn solve_with_status(
    status: Status,
    problem: &Problem,
    params: &Params,
    sink: Option<&mut dyn Sink>,
) -> Result<Status, SolverError> {
    status.check_dims(problem)?;
    let mut status = status;
    project_start(problem, &mut status);
    Ok(run(status, problem, params, sink))
}

fn project_start(problem: &Problem, status: &mut Status) {
    status.xi.mapv_inplace(|xi| f64::max(xi, 0.0));
    status.lambda.mapv_inplace(|lambda| lambda.clamp(0.0, 1.0));
    Zip::from(&mut status.gamma)
        .and(&mut status.omega)
        .and(&problem.tau)
        .for_each(|gamma, omega, &tau| {
            *gamma = gamma.clamp(0.0, tau);
            *omega = f64::max(0.0, *gamma - tau);
        });
    status.beta = recover_beta(problem, &status.xi, &status.lambda, &status.gamma);
}

fn run(
    status: Status,
    problem: &Problem,
    params: &Params,
    mut sink: Option<&mut dyn Sink>,
) -> Status {
    let mut status = status;
    let start = time::now();
    let pre = Precomputed::new(problem);
    let trace_period = params.trace_period.max(1);

    log::debug!(
        "coordinate descent: n = {}, d = {}, K = {}, L = {}, H = {}",
        problem.size(),
        problem.dim(),
        problem.n_constraints(),
        problem.n_relu(),
        problem.n_rehu(),
    );
    if params.verbose {
        if let Some(out) = sink.as_deref_mut() {
            out.write_line(&header());
        }
    }

    status.code = StatusCode::Running;
    let mut iter: usize = 0;
    loop {
        // update steps and time
        status.niter = iter;
        status.time = time::until_now(start);

        // handle iteration limit
        if iter >= params.max_iter {
            status.code = StatusCode::MaxIterReached;
            log::warn!(
                "no convergence within {} iterations (tol = {:e})",
                params.max_iter,
                params.tol
            );
            break;
        }

        let xi_before = status.xi.clone();
        let beta_before = status.beta.clone();
        sweep(problem, &pre, &mut status);

        let xi_diff = distance(&status.xi, &xi_before);
        let beta_diff = distance(&status.beta, &beta_before);

        // handle progress output
        if params.verbose && iter % trace_period == 0 {
            let obj = dual_objective(problem, &status);
            status.trace.push(obj);
            if let Some(out) = sink.as_deref_mut() {
                out.write_line(&progress(iter, obj, xi_diff, beta_diff));
            }
        }

        // check for convergence
        if xi_diff < params.tol && beta_diff < params.tol {
            status.code = StatusCode::Converged;
            status.time = time::until_now(start);
            log::info!("converged after {} iterations", iter);
            break;
        }
        iter += 1;
    }
    status
}
