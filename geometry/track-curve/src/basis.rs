//! B-spline basis evaluation.
//!
//! Two evaluators of the same uniform B-spline basis live here:
//!
//! - the closed-form cubic weights used for production sampling, and
//! - the recursive Cox-de Boor definition on the integer knot vector
//!   `..., -1, 0, 1, 2, ...`, which works for any degree.
//!
//! [`BasisEvaluation`] selects between them so a [`ClosedBSpline`] can be
//! driven by either one.
//!
//! [`ClosedBSpline`]: crate::ClosedBSpline

use crate::{CurveError, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Highest degree accepted by the recursive evaluator.
///
/// The recursion visits `2^degree` leaves per call.
pub const MAX_DEGREE: usize = 7;

/// Degree of the closed-form path.
pub const CUBIC_DEGREE: usize = 3;

/// Closed-form uniform cubic B-spline weights at local parameter `u ∈ [0, 1]`.
///
/// Returns the weights for control points `P[i]`, `P[i+1]`, `P[i+2]`, `P[i+3]`.
/// The weights sum to one for every `u`.
///
/// # Example
///
/// ```
/// use track_curve::uniform_cubic_weights;
///
/// let w = uniform_cubic_weights(0.0);
/// assert!((w[0] - 1.0 / 6.0).abs() < 1e-12);
/// assert!((w[1] - 4.0 / 6.0).abs() < 1e-12);
/// assert!((w[2] - 1.0 / 6.0).abs() < 1e-12);
/// assert!(w[3].abs() < 1e-12);
/// ```
#[must_use]
pub fn uniform_cubic_weights(u: f64) -> [f64; 4] {
    let u2 = u * u;
    let u3 = u2 * u;
    let inv = 1.0 - u;

    [
        inv * inv * inv / 6.0,
        (3.0 * u3 - 6.0 * u2 + 4.0) / 6.0,
        (-3.0 * u3 + 3.0 * u2 + 3.0 * u + 1.0) / 6.0,
        u3 / 6.0,
    ]
}

/// Uniform B-spline basis function `N_{i,degree}(t)` by the Cox-de Boor recursion.
///
/// Knots sit on the integers, so `N_{i,degree}` is supported on
/// `[i, i + degree + 1)`. The degree 0 basis is the indicator of `[i, i + 1)`.
///
/// # Example
///
/// ```
/// use track_curve::cox_de_boor;
///
/// assert_eq!(cox_de_boor(2, 0, 2.5), 1.0);
/// assert_eq!(cox_de_boor(2, 0, 3.0), 0.0);
///
/// // Cubic basis peaks at 2/3 in the middle of its support
/// assert!((cox_de_boor(0, 3, 2.0) - 4.0 / 6.0).abs() < 1e-12);
/// ```
#[must_use]
pub fn cox_de_boor(i: usize, degree: usize, t: f64) -> f64 {
    let start = i as f64;

    if degree == 0 {
        return if t >= start && t < start + 1.0 { 1.0 } else { 0.0 };
    }

    let k = degree as f64;
    let rising = (t - start) / k;
    let falling = (start + k + 1.0 - t) / k;

    rising * cox_de_boor(i, degree - 1, t) + falling * cox_de_boor(i + 1, degree - 1, t)
}

/// Policy used to evaluate the basis weights of a closed uniform B-spline.
///
/// Both variants describe the same mathematical function for degree 3;
/// `ClosedForm` is the fast path, `CoxDeBoor` generalizes to other degrees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(tag = "kind", rename_all = "snake_case")
)]
pub enum BasisEvaluation {
    /// Closed-form uniform cubic weights.
    #[default]
    ClosedForm,

    /// Recursive Cox-de Boor evaluation of the given degree.
    CoxDeBoor {
        /// Polynomial degree of the basis.
        degree: usize,
    },
}

impl BasisEvaluation {
    /// Polynomial degree evaluated by this policy.
    #[must_use]
    pub const fn degree(&self) -> usize {
        match self {
            Self::ClosedForm => CUBIC_DEGREE,
            Self::CoxDeBoor { degree } => *degree,
        }
    }

    /// Number of control points blended per segment (`degree + 1`).
    #[must_use]
    pub const fn span(&self) -> usize {
        self.degree() + 1
    }

    /// Check that the policy can be evaluated.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::InvalidDegree`] if a Cox-de Boor degree exceeds
    /// [`MAX_DEGREE`].
    pub fn validate(&self) -> Result<()> {
        let degree = self.degree();
        if degree > MAX_DEGREE {
            return Err(CurveError::InvalidDegree {
                degree,
                min: 0,
                max: MAX_DEGREE,
            });
        }
        Ok(())
    }

    /// Weights of the `degree + 1` control points of one segment at local
    /// parameter `u ∈ [0, 1]`.
    ///
    /// Weight `m` applies to control point `i + m` of segment `i`.
    #[must_use]
    pub fn weights(&self, u: f64) -> Vec<f64> {
        match self {
            Self::ClosedForm => uniform_cubic_weights(u).to_vec(),
            Self::CoxDeBoor { degree } => {
                // Segment [degree, degree + 1) is covered by N_0 .. N_degree.
                let t = *degree as f64 + u;
                (0..=*degree).map(|m| cox_de_boor(m, *degree, t)).collect()
            }
        }
    }
}

impl std::fmt::Display for BasisEvaluation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ClosedForm => write!(f, "closed-form cubic"),
            Self::CoxDeBoor { degree } => write!(f, "cox-de-boor degree {degree}"),
        }
    }
}
