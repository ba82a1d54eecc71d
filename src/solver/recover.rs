use ndarray::{Array1, Array2, Axis};

use crate::problem::Problem;

/// Computes `Xᵀ colSums(W ⊙ M)`, the contribution of one block of piece multipliers to `beta`.
///
/// Vanishes when the block has no rows.
pub(crate) fn block_product(x: &Array2<f64>, w: &Array2<f64>, m: &Array2<f64>) -> Array1<f64> {
    let weights = (w * m).sum_axis(Axis(0));
    x.t().dot(&weights)
}

/// Recovers the primal variable from the dual variables by the stationarity condition
///
/// ```text
/// beta = Aᵀ xi - Xᵀ (colSums(U ⊙ Lambda) + colSums(S ⊙ Gamma))
/// ```
pub fn recover_beta(
    problem: &Problem,
    xi: &Array1<f64>,
    lambda: &Array2<f64>,
    gamma: &Array2<f64>,
) -> Array1<f64> {
    let mut beta = problem.a.t().dot(xi);
    beta -= &block_product(&problem.x, &problem.u, lambda);
    beta -= &block_product(&problem.x, &problem.s, gamma);
    beta
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::array;

    #[test]
    fn all_blocks_contribute() {
        let problem = Problem::new(array![[1.0, 0.0], [1.0, 2.0]])
            .unwrap()
            .with_constraints(array![[0.0, 1.0]], array![0.0])
            .unwrap()
            .with_relu(array![[1.0, -1.0]], array![[0.0, 0.0]])
            .unwrap()
            .with_rehu(array![[2.0, 0.0]], array![[0.0, 0.0]], array![[1.0, 1.0]])
            .unwrap();
        let beta = recover_beta(
            &problem,
            &array![3.0],
            &array![[0.5, 0.25]],
            &array![[0.5, 0.7]],
        );
        // colSums: 0.5 + 1.0 = 1.5 and -0.25 + 0.0 = -0.25
        // Xᵀ [1.5, -0.25] = [1.25, -0.5]
        assert_abs_diff_eq!(beta[0], -1.25, epsilon = 1e-12);
        assert_abs_diff_eq!(beta[1], 3.5, epsilon = 1e-12);
    }

    #[test]
    fn empty_blocks_give_zero() {
        let problem = Problem::new(array![[1.0, 2.0, 3.0]]).unwrap();
        let beta = recover_beta(
            &problem,
            &Array1::zeros(0),
            &Array2::zeros((0, 1)),
            &Array2::zeros((0, 1)),
        );
        assert_eq!(beta, Array1::<f64>::zeros(3));
    }
}
