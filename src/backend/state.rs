//! A fully evaluated state point, whatever equation produced it.

use super::gibbs::Gibbs;
use super::region::{Region, region_pt};
use super::region3::{self, Helmholtz};
use super::solver::{SolveError, SolverConfig};
use super::{T13, region1, region2, region5};

/// Native-unit properties at one (p, T) point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct State {
    pub region: Region,
    pub p: f64,
    pub t: f64,
    pub v: f64,
    pub h: f64,
    pub u: f64,
    pub s: f64,
    /// Vapor mass fraction; `Some` only for two-phase states.
    pub quality: Option<f64>,
    /// Heat capacities and sound speed are undefined inside the dome.
    pub cp: Option<f64>,
    pub cv: Option<f64>,
    pub w: Option<f64>,
}

impl State {
    pub fn from_gibbs(region: Region, p: f64, g: &Gibbs) -> Self {
        Self {
            region,
            p,
            t: g.t,
            v: g.v(p),
            h: g.h(),
            u: g.u(),
            s: g.s(),
            quality: None,
            cp: Some(g.cp()),
            cv: Some(g.cv()),
            w: Some(g.w()),
        }
    }

    pub fn from_helmholtz(p: f64, st: &Helmholtz) -> Self {
        Self {
            region: Region::Three,
            p,
            t: st.t,
            v: st.v(),
            h: st.h(),
            u: st.u(),
            s: st.s(),
            quality: None,
            cp: Some(st.cp()),
            cv: Some(st.cv()),
            w: Some(st.w()),
        }
    }

    /// Mixture of `liquid` and `vapor` with vapor fraction `x`.
    pub fn two_phase(x: f64, liquid: &State, vapor: &State) -> Self {
        let mix = |f: f64, g: f64| f + x * (g - f);
        Self {
            region: Region::Four,
            p: liquid.p,
            t: liquid.t,
            v: mix(liquid.v, vapor.v),
            h: mix(liquid.h, vapor.h),
            u: mix(liquid.u, vapor.u),
            s: mix(liquid.s, vapor.s),
            quality: Some(x),
            cp: None,
            cv: None,
            w: None,
        }
    }

    /// Density, kg/m³.
    pub fn rho(&self) -> f64 {
        1.0 / self.v
    }
}

/// Single-phase state at a validated (p, t).
pub(crate) fn state_pt(p: f64, t: f64, cfg: &SolverConfig) -> Result<State, SolveError> {
    let region = region_pt(p, t);
    let state = match region {
        Region::One => State::from_gibbs(region, p, &region1::gibbs(p, t)),
        Region::Two | Region::Boundary23 => State::from_gibbs(region, p, &region2::gibbs(p, t)),
        Region::Three => State::from_helmholtz(p, &region3::state_pt(p, t, cfg)?),
        Region::Five => State::from_gibbs(region, p, &region5::gibbs(p, t)),
        Region::Four => return Err(SolveError::TwoPhase { p, t }),
    };
    Ok(state)
}

/// Saturated liquid and vapor at a point (p, t) of the saturation curve.
pub(crate) fn saturated(p: f64, t: f64, cfg: &SolverConfig) -> Result<(State, State), SolveError> {
    if t <= T13 {
        let liquid = State::from_gibbs(Region::One, p, &region1::gibbs(p, t));
        let vapor = State::from_gibbs(Region::Two, p, &region2::gibbs(p, t));
        return Ok((liquid, vapor));
    }
    let (liquid, vapor) = region3::saturated_states(p, t, cfg)?;
    Ok((State::from_helmholtz(p, &liquid), State::from_helmholtz(p, &vapor)))
}
