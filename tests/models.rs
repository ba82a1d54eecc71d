use approx::assert_abs_diff_eq;
use ndarray::{array, Array2};

use rehline::solver::{self, Params};
use rehline::{Problem, StatusCode};

fn regression_data() -> (Array2<f64>, Vec<f64>) {
    let n = 12;
    let x = Array2::from_shape_fn((n, 2), |(i, j)| {
        if j == 0 {
            1.0
        } else {
            i as f64 / n as f64 - 0.5
        }
    });
    let y = (0..n)
        .map(|i| 0.5 + 2.0 * (i as f64 / n as f64 - 0.5) + 0.3 * (i as f64 * 2.1).sin())
        .collect();
    (x, y)
}

fn tight() -> Params {
    Params::new().with_tol(1e-10).with_max_iter(200_000)
}

fn assert_no_gap(problem: &Problem, params: &Params) {
    let status = solver::solve(problem, params, None);
    assert_eq!(status.code, StatusCode::Converged);
    let primal = status.primal_objective(problem);
    let gap = status.duality_gap(problem);
    assert!(
        gap.abs() <= 1e-5 * f64::max(1.0, primal.abs()),
        "primal {} with gap {}",
        primal,
        gap
    );
}

#[test]
fn separable_svm_has_unit_margin() {
    // a symmetric sample set stalls at beta = 0.5 after the first sweep
    let x = array![[1.0], [2.0], [-1.0], [-3.0]];
    let y = [1.0, 1.0, -1.0, -1.0];
    let problem = Problem::svm(x, &y, 10.0).unwrap();
    let status = solver::solve(&problem, &tight(), None);
    assert_eq!(status.code, StatusCode::Converged);
    assert_abs_diff_eq!(status.beta[0], 1.0, epsilon = 1e-8);
    assert_abs_diff_eq!(status.duality_gap(&problem), 0.0, epsilon = 1e-6);
}

#[test]
fn svm_strong_duality() {
    let x = Array2::from_shape_fn((10, 2), |(i, j)| ((2 * i + 3 * j + 1) as f64 * 0.9).sin());
    let y: Vec<f64> = (0..10)
        .map(|i| if (i as f64 * 0.9).sin() > 0.0 { 1.0 } else { -1.0 })
        .collect();
    let problem = Problem::svm(x, &y, 2.0).unwrap();
    assert_no_gap(&problem, &tight());
}

#[test]
fn quantile_strong_duality() {
    let (x, y) = regression_data();
    for q in [0.1, 0.5, 0.9] {
        let problem = Problem::quantile(x.clone(), &y, q, 5.0).unwrap();
        assert_no_gap(&problem, &tight());
    }
}

#[test]
fn huber_strong_duality() {
    let (x, y) = regression_data();
    let problem = Problem::huber(x, &y, 0.2, 5.0).unwrap();
    assert_no_gap(&problem, &tight());
}

#[test]
fn huber_with_infinite_knot_is_ridge() {
    let x = array![[1.0], [2.0], [-1.0]];
    let y = [2.0, 3.0, -1.0];
    let c = 0.5;
    let problem = Problem::huber(x, &y, f64::INFINITY, c).unwrap();
    let status = solver::solve(&problem, &tight(), None);
    assert_eq!(status.code, StatusCode::Converged);
    // β = C Σ x y / (1 + C Σ x²) = 0.5 · 9 / (1 + 0.5 · 6)
    assert_abs_diff_eq!(status.beta[0], 1.125, epsilon = 1e-8);
    assert!(status.omega.iter().all(|&o| o == 0.0));
}

#[test]
fn constrained_svm_respects_bound() {
    let x = array![[1.0, 0.5], [2.0, -0.5], [-1.0, 0.2], [-2.0, -0.3]];
    let y = [1.0, 1.0, -1.0, -1.0];
    // force the first coefficient below 0.25
    let problem = Problem::svm(x, &y, 1.0)
        .unwrap()
        .with_constraints(array![[-1.0, 0.0]], array![0.25])
        .unwrap();
    let status = solver::solve(&problem, &tight(), None);
    assert_eq!(status.code, StatusCode::Converged);
    assert!(status.beta[0] <= 0.25 + 1e-8);
    assert!(status.xi[0] > 0.0);
    assert_abs_diff_eq!(status.duality_gap(&problem), 0.0, epsilon = 1e-6);
}
