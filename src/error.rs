use thiserror::Error;

/// Errors raised while assembling a problem or a starting point.
///
/// The solver itself never fails once a [`Problem`](crate::problem::Problem)
/// has been built; all checks happen up front.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolverError {
    /// Two inputs disagree on a shared dimension.
    #[error("dimension mismatch in {what}: expected {expected}, found {found}")]
    DimensionMismatch {
        /// Which dimension was checked
        what: &'static str,
        /// Size implied by the inputs seen so far
        expected: usize,
        /// Size of the offending input
        found: usize,
    },
    /// An input contains NaN or an infinity where only finite values are allowed.
    #[error("{name} contains non-finite entries")]
    NonFinite {
        /// Name of the offending input
        name: &'static str,
    },
    /// A ReHU knot is negative, so the box of its multiplier is empty.
    #[error("Tau[{row}, {col}] = {value} is negative")]
    NegativeBound {
        /// Row (ReHU term) index
        row: usize,
        /// Column (sample) index
        col: usize,
        /// Offending value
        value: f64,
    },
    /// A model parameter lies outside of its admissible range.
    #[error("invalid value {value} for parameter {name}")]
    InvalidParameter {
        /// Name of the parameter
        name: &'static str,
        /// Offending value
        value: f64,
    },
    /// A constraint row of A vanishes, so its multiplier has no curvature.
    #[error("constraint row {row} of A is zero")]
    DegenerateConstraint {
        /// Index of the zero row
        row: usize,
    },
}
