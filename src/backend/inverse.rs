//! Temperature from (p, h) and (p, s).
//!
//! The candidate region comes from [`region_px`]. Inside it the IF97
//! backward equation gives a first estimate, which is then refined on the
//! forward equation so that forward and backward calls agree to solver
//! precision. Region 5 has no backward equation and starts from the
//! middle of its bracket.

use super::backward;
use super::region::{Basis, Region, region_px};
use super::solver::{SolveError, SolverConfig, newton_bracketed};
use super::state::{State, saturated};
use super::{P13, PC, T5_MAX, T13, T25, TT, b23, region1, region2, region3, region4, region5};
use crate::error::Result;

/// Widening of every temperature bracket past the region edge, K.
const PAD: f64 = 1.0;

impl Basis {
    fn of(self, st: &State) -> f64 {
        match self {
            Basis::Enthalpy => st.h,
            Basis::Entropy => st.s,
        }
    }

    /// Derivative of [`Basis::of`] with respect to T at constant p.
    fn slope(self, st: &State) -> f64 {
        let cp = st.cp.unwrap_or(f64::NAN);
        match self {
            Basis::Enthalpy => cp,
            Basis::Entropy => cp / st.t,
        }
    }

    fn estimate(self, region: Region, p: f64, x: f64) -> Option<f64> {
        let t = match (region, self) {
            (Region::One, Basis::Enthalpy) => backward::t1_ph(p, x),
            (Region::One, Basis::Entropy) => backward::t1_ps(p, x),
            (Region::Two, Basis::Enthalpy) => backward::t2_ph(p, x),
            (Region::Two, Basis::Entropy) => backward::t2_ps(p, x),
            (Region::Three, Basis::Enthalpy) => backward::t3_ph(p, x),
            (Region::Three, Basis::Entropy) => backward::t3_ps(p, x),
            _ => return None,
        };
        Some(t)
    }
}

fn label(region: Region) -> &'static str {
    match region {
        Region::One => "region 1 temperature",
        Region::Three => "region 3 temperature",
        Region::Two | Region::Boundary23 => "region 2 temperature",
        Region::Four => "saturation temperature",
        Region::Five => "region 5 temperature",
    }
}

fn evaluate(region: Region, p: f64, t: f64, cfg: &SolverConfig) -> Result<State, SolveError> {
    let state = match region {
        Region::One => State::from_gibbs(region, p, &region1::gibbs(p, t)),
        Region::Three => State::from_helmholtz(p, &region3::state_pt(p, t, cfg)?),
        Region::Two | Region::Boundary23 => {
            State::from_gibbs(Region::Two, p, &region2::gibbs(p, t))
        }
        Region::Five => State::from_gibbs(region, p, &region5::gibbs(p, t)),
        Region::Four => return Err(SolveError::TwoPhase { p, t }),
    };
    Ok(state)
}

/// Temperature in `[lo, hi]` at which `region`'s equation reaches `x`.
fn solve_in(
    region: Region,
    p: f64,
    x: f64,
    basis: Basis,
    (lo, hi): (f64, f64),
    cfg: &SolverConfig,
) -> Result<State, SolveError> {
    let t = newton_bracketed(
        label(region),
        |t| match evaluate(region, p, t, cfg) {
            Ok(st) => (basis.of(&st) - x, basis.slope(&st)),
            // a failed density solve ends the search
            Err(_) => (f64::NAN, f64::NAN),
        },
        lo,
        hi,
        basis.estimate(region, p, x),
        cfg,
    )?;
    evaluate(region, p, t, cfg)
}

fn region1_bracket(p: f64) -> (f64, f64) {
    let top = if p <= P13 { region4::tsat(p) } else { T13 };
    (TT - PAD, top + PAD)
}

fn region2_bracket(p: f64) -> (f64, f64) {
    let bottom = if p <= P13 {
        region4::tsat(p)
    } else {
        b23::t_at(p)
    };
    (bottom - PAD, T25 + PAD)
}

/// Vapor fraction of `x` between the saturated phases, or `None` when
/// `x` lies outside the dome.
fn mixture(x: f64, liquid: &State, vapor: &State, basis: Basis) -> Option<State> {
    let (f, g) = (basis.of(liquid), basis.of(vapor));
    if !(x >= f && x <= g) {
        return None;
    }
    let quality = if g > f { (x - f) / (g - f) } else { 0.0 };
    Some(State::two_phase(quality, liquid, vapor))
}

fn two_phase(p: f64, x: f64, basis: Basis, cfg: &SolverConfig) -> Result<State> {
    let t_sat = region4::tsat(p);
    let (liquid, vapor) = saturated(p, t_sat, cfg)?;
    let state = match mixture(x, &liquid, &vapor, basis) {
        Some(state) => state,
        // the candidate test used Region 1/2 saturation values; clamp
        // to the nearer phase when the two equations disagree slightly
        None if x < basis.of(&liquid) => liquid,
        None => vapor,
    };
    Ok(state)
}

fn region3(p: f64, x: f64, basis: Basis, cfg: &SolverConfig) -> Result<State> {
    let mut bracket = (T13, b23::t_at(p));
    if p < PC {
        let t_sat = region4::tsat(p);
        let (liquid, vapor) = saturated(p, t_sat, cfg)?;
        if let Some(state) = mixture(x, &liquid, &vapor, basis) {
            return Ok(state);
        }
        bracket = if x < basis.of(&liquid) {
            (T13, t_sat)
        } else {
            (t_sat, bracket.1)
        };
    }

    match solve_in(Region::Three, p, x, basis, bracket, cfg) {
        Ok(state) => Ok(state),
        Err(SolveError::NotBracketed { f_lo, .. }) => {
            let below = f_lo > 0.0;
            let fallback = if below { Region::One } else { Region::Two };
            tracing::debug!(p, x, ?basis, %fallback, "target outside Region 3");
            let bracket = if below {
                region1_bracket(p)
            } else {
                region2_bracket(p)
            };
            Ok(solve_in(fallback, p, x, basis, bracket, cfg)?)
        }
        Err(e) => Err(e.into()),
    }
}

/// State at (p, x) where `x` is an enthalpy or entropy per `basis`.
/// `p` must already be validated.
pub(crate) fn resolve(p: f64, x: f64, basis: Basis, cfg: &SolverConfig) -> Result<State> {
    let candidate = region_px(p, x, basis)?;
    let state = match candidate {
        Region::One => solve_in(Region::One, p, x, basis, region1_bracket(p), cfg)?,
        Region::Three => region3(p, x, basis, cfg)?,
        Region::Four => two_phase(p, x, basis, cfg)?,
        Region::Five => solve_in(Region::Five, p, x, basis, (T25 - PAD, T5_MAX + PAD), cfg)?,
        Region::Two | Region::Boundary23 => {
            solve_in(Region::Two, p, x, basis, region2_bracket(p), cfg)?
        }
    };
    tracing::debug!(p, x, ?basis, region = %state.region, t = state.t, "resolved state");
    Ok(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::state::state_pt;
    use approx::assert_relative_eq;

    fn cfg() -> SolverConfig {
        SolverConfig::default()
    }

    #[test]
    fn recovers_temperature_in_every_single_phase_region() {
        let points = [
            (3.0, 300.0),
            (80.0, 500.0),
            (0.0035, 700.0),
            (30.0, 700.0),
            (0.255837018e2, 650.0),
            (0.783095639e2, 750.0),
            (0.5, 1500.0),
            (30.0, 2000.0),
        ];
        for (p, t) in points {
            let st = state_pt(p, t, &cfg()).unwrap();
            for basis in [Basis::Enthalpy, Basis::Entropy] {
                let back = resolve(p, basis.of(&st), basis, &cfg()).unwrap();
                assert_relative_eq!(back.t, t, max_relative = 1e-9);
                assert_eq!(back.region, st.region);
            }
        }
    }

    #[test]
    fn two_phase_below_region_3() {
        let p = 1.0;
        let t_sat = region4::tsat(p);
        let (l, v) = saturated(p, t_sat, &cfg()).unwrap();
        let h = l.h + 0.25 * (v.h - l.h);
        let st = resolve(p, h, Basis::Enthalpy, &cfg()).unwrap();
        assert_eq!(st.region, Region::Four);
        assert_relative_eq!(st.quality.unwrap(), 0.25, max_relative = 1e-12);
        assert_relative_eq!(st.t, t_sat);
        assert_relative_eq!(st.v, l.v + 0.25 * (v.v - l.v), max_relative = 1e-12);
    }

    #[test]
    fn two_phase_inside_region_3() {
        let p = 20.0;
        let t_sat = region4::tsat(p);
        let (l, v) = saturated(p, t_sat, &cfg()).unwrap();
        assert_eq!(l.region, Region::Three);
        let s = 0.5 * (l.s + v.s);
        let st = resolve(p, s, Basis::Entropy, &cfg()).unwrap();
        assert_eq!(st.region, Region::Four);
        assert_relative_eq!(st.quality.unwrap(), 0.5, max_relative = 1e-9);
    }

    #[test]
    fn region_3_gap_falls_back_to_neighbours() {
        // between h1(p, 623.15) and h3(p, 623.15)
        let st = resolve(16.6, 1670.2, Basis::Enthalpy, &cfg()).unwrap();
        assert_eq!(st.region, Region::One);
        assert!((st.t - 623.15).abs() < 0.01, "t = {:.4}", st.t);

        // between h3(p, Tb23) and h2(p, Tb23)
        let st = resolve(25.0, 2622.77015, Basis::Enthalpy, &cfg()).unwrap();
        assert_eq!(st.region, Region::Two);
        assert!((st.t - b23::t_at(25.0)).abs() < 0.01, "t = {:.4}", st.t);
    }

    #[test]
    fn saturation_line_has_no_single_phase_equation() {
        let err = evaluate(Region::Four, 1.0, 453.0, &cfg()).unwrap_err();
        assert_eq!(err, SolveError::TwoPhase { p: 1.0, t: 453.0 });
        let st = evaluate(Region::Boundary23, 30.0, 700.0, &cfg()).unwrap();
        assert_eq!(st.region, Region::Two);
    }

    #[test]
    fn out_of_range_enthalpy_is_rejected() {
        let err = resolve(1.0, 1e5, Basis::Enthalpy, &cfg()).unwrap_err();
        assert_eq!(err.to_string(), "enthalpy out of bounds");
    }
}
