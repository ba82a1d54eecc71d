//! Scalar loss pieces
/// Rectified linear unit `max(z, 0)`.
pub fn relu(z: f64) -> f64 {
    f64::max(z, 0.0)
}

/// Rectified Huber unit with knot `tau`.
///
/// Vanishes for `z <= 0`, is quadratic on `(0, tau]` and linear beyond.
/// An infinite knot gives the plain half square of the positive part.
pub fn rehu(z: f64, tau: f64) -> f64 {
    if z <= 0.0 {
        0.0
    } else if z <= tau {
        0.5 * z * z
    } else {
        tau * (z - 0.5 * tau)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn relu_clips_negative_part() {
        assert_eq!(relu(-2.0), 0.0);
        assert_eq!(relu(0.0), 0.0);
        assert_eq!(relu(1.5), 1.5);
    }

    #[test]
    fn rehu_is_continuous_at_knot() {
        let tau = 2.0;
        assert_eq!(rehu(-1.0, tau), 0.0);
        assert_abs_diff_eq!(rehu(1.0, tau), 0.5);
        assert_abs_diff_eq!(rehu(tau, tau), 2.0);
        assert_abs_diff_eq!(rehu(tau + 1e-9, tau), 2.0, epsilon = 1e-8);
        assert_abs_diff_eq!(rehu(5.0, tau), 8.0);
    }

    #[test]
    fn rehu_with_infinite_knot_is_quadratic() {
        assert_abs_diff_eq!(rehu(1e3, f64::INFINITY), 5e5);
    }
}
