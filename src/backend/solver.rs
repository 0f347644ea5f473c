//! Bounded one-dimensional root finding used by the Region 3 density
//! solve and the backward-equation refinement.
//!
//! Newton steps are taken while they stay inside the current bracket and
//! shrink it fast enough; otherwise the step falls back to bisection, so
//! every call terminates within `max_iterations`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::WatpropError;

/// Iteration budget and tolerances for the iterative solves.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SolverConfig {
    /// Maximum number of steps per solve.
    pub max_iterations: usize,
    /// Relative step tolerance.
    pub rel_tol: f64,
    /// Absolute step tolerance, in the unit of the unknown.
    pub abs_tol: f64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_iterations: 100,
            rel_tol: 1e-13,
            abs_tol: 1e-12,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub(crate) enum SolveError {
    #[error("{what}: no sign change in [{lo}, {hi}] (f = {f_lo}, {f_hi})")]
    NotBracketed {
        what: &'static str,
        lo: f64,
        hi: f64,
        f_lo: f64,
        f_hi: f64,
    },

    #[error("{what}: not converged after {iterations} iterations")]
    MaxIterations { what: &'static str, iterations: usize },

    #[error("{what}: residual undefined at {x} after {iterations} iterations")]
    Undefined {
        what: &'static str,
        x: f64,
        iterations: usize,
    },

    #[error("no single-phase state at p = {p} MPa, T = {t} K")]
    TwoPhase { p: f64, t: f64 },
}

impl From<SolveError> for WatpropError {
    fn from(e: SolveError) -> Self {
        match e {
            SolveError::NotBracketed { what, .. } => WatpropError::NoConvergence {
                what: what.to_string(),
                iterations: 0,
            },
            SolveError::MaxIterations { what, iterations }
            | SolveError::Undefined {
                what, iterations, ..
            } => WatpropError::NoConvergence {
                what: what.to_string(),
                iterations,
            },
            e @ SolveError::TwoPhase { .. } => WatpropError::InvalidInput(e.to_string()),
        }
    }
}

/// Find `x` in `[lo, hi]` with `f(x).0 == 0`, where `f` returns the
/// residual and its derivative. `guess` is used as the first iterate when
/// it lies strictly inside the bracket.
///
/// A non-finite residual inside the bracket ends the search with
/// [`SolveError::Undefined`]; the bracket is never moved onto such a point.
pub(crate) fn newton_bracketed<F>(
    what: &'static str,
    f: F,
    lo: f64,
    hi: f64,
    guess: Option<f64>,
    cfg: &SolverConfig,
) -> Result<f64, SolveError>
where
    F: Fn(f64) -> (f64, f64),
{
    let (f_lo, _) = f(lo);
    let (f_hi, _) = f(hi);
    if f_lo == 0.0 {
        return Ok(lo);
    }
    if f_hi == 0.0 {
        return Ok(hi);
    }
    if !(f_lo.is_finite() && f_hi.is_finite()) || f_lo.signum() == f_hi.signum() {
        return Err(SolveError::NotBracketed {
            what,
            lo,
            hi,
            f_lo,
            f_hi,
        });
    }

    // xl always has f < 0, xh has f > 0
    let (mut xl, mut xh) = if f_lo < 0.0 { (lo, hi) } else { (hi, lo) };
    let (a, b) = (lo.min(hi), lo.max(hi));
    let mut x = match guess {
        Some(g) if g > a && g < b => g,
        _ => 0.5 * (lo + hi),
    };
    let mut dx_old = (hi - lo).abs();
    let mut dx = dx_old;
    let (mut fx, mut dfx) = f(x);

    for iteration in 1..=cfg.max_iterations {
        if !fx.is_finite() {
            tracing::warn!(what, iteration, x, "residual undefined");
            return Err(SolveError::Undefined {
                what,
                x,
                iterations: iteration - 1,
            });
        }
        if fx == 0.0 {
            tracing::trace!(what, iteration, x, "exact root");
            return Ok(x);
        }

        let newton_leaves_bracket = ((x - xh) * dfx - fx) * ((x - xl) * dfx - fx) > 0.0;
        let newton_too_slow = (2.0 * fx).abs() > (dx_old * dfx).abs();
        if !dfx.is_finite() || dfx == 0.0 || newton_leaves_bracket || newton_too_slow {
            dx_old = dx;
            dx = 0.5 * (xh - xl);
            x = xl + dx;
        } else {
            dx_old = dx;
            dx = fx / dfx;
            x -= dx;
        }

        if dx.abs() <= cfg.abs_tol + cfg.rel_tol * x.abs() {
            tracing::trace!(what, iteration, x, "converged");
            return Ok(x);
        }

        (fx, dfx) = f(x);
        if fx < 0.0 {
            xl = x;
        } else if fx > 0.0 {
            xh = x;
        }
    }

    tracing::warn!(what, iterations = cfg.max_iterations, "iteration budget exhausted");
    Err(SolveError::MaxIterations {
        what,
        iterations: cfg.max_iterations,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_square_root() {
        let cfg = SolverConfig::default();
        let x = newton_bracketed("sqrt", |x| (x * x - 2.0, 2.0 * x), 0.0, 2.0, Some(1.0), &cfg)
            .unwrap();
        assert!((x - 2f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn falls_back_to_bisection_on_flat_derivative() {
        let cfg = SolverConfig::default();
        // derivative reported as zero everywhere
        let x = newton_bracketed("cube", |x| (x * x * x - 8.0, 0.0), 0.0, 5.0, None, &cfg).unwrap();
        assert!((x - 2.0).abs() < 1e-10);
    }

    #[test]
    fn reports_missing_bracket() {
        let cfg = SolverConfig::default();
        let err = newton_bracketed("none", |x| (x * x + 1.0, 2.0 * x), -1.0, 1.0, None, &cfg)
            .unwrap_err();
        assert!(matches!(err, SolveError::NotBracketed { what: "none", .. }));
    }

    #[test]
    fn reports_exhausted_budget() {
        let cfg = SolverConfig {
            max_iterations: 3,
            ..SolverConfig::default()
        };
        let err = newton_bracketed("slow", |x| (x - 0.123_456_789, 0.0), 0.0, 1.0, None, &cfg)
            .unwrap_err();
        assert_eq!(
            err,
            SolveError::MaxIterations {
                what: "slow",
                iterations: 3
            }
        );
        let public: WatpropError = err.into();
        assert!(matches!(public, WatpropError::NoConvergence { iterations: 3, .. }));
    }

    #[test]
    fn undefined_residual_stops_the_search() {
        let cfg = SolverConfig::default();
        // valid at both ends, undefined in the middle third
        let f = |x: f64| {
            if x > 1.0 && x < 2.0 {
                (f64::NAN, f64::NAN)
            } else {
                (x - 2.5, 1.0)
            }
        };
        let err = newton_bracketed("holey", f, 0.0, 3.0, None, &cfg).unwrap_err();
        assert!(
            matches!(err, SolveError::Undefined { what: "holey", iterations: 0, .. }),
            "{err:?}"
        );
        let public: WatpropError = err.into();
        assert!(matches!(public, WatpropError::NoConvergence { .. }));
    }

    #[test]
    fn undefined_residual_never_narrows_the_bracket() {
        let cfg = SolverConfig::default();
        // the guess lands on a defined point, the first bisection does not
        let f = |x: f64| {
            if x > 1.4 && x < 1.6 {
                (f64::NAN, f64::NAN)
            } else {
                (x - 0.25, 0.0)
            }
        };
        let err = newton_bracketed("gap", f, 0.0, 3.0, Some(2.9), &cfg).unwrap_err();
        assert!(matches!(err, SolveError::Undefined { x, .. } if x == 1.5), "{err:?}");
    }

    #[test]
    fn two_phase_request_is_invalid_input() {
        let public: WatpropError = SolveError::TwoPhase { p: 1.0, t: 453.0 }.into();
        assert!(matches!(public, WatpropError::InvalidInput(_)), "{public:?}");
    }
}
