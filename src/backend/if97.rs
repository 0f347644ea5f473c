use crate::error::*;

use super::region::{Basis, Region};
use super::solver::SolverConfig;
use super::state::{self, State};
use super::validity::{self, SatProp};
use super::{PC, TC, inverse, region, region4, transport};

// ── Backend ─────────────────────────────────────────────────────────

/// Native-unit entry points: every method validates its inputs for its
/// property family and then evaluates. Inputs and outputs are MPa, K,
/// kJ/kg, kJ/(kg·K), m³/kg, m/s, µPa·s and mW/(m·K).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub(crate) struct If97Backend {
    pub cfg: SolverConfig,
}

impl If97Backend {
    pub fn new(cfg: SolverConfig) -> Self {
        Self { cfg }
    }

    // ================================================================
    //  (p, T)
    // ================================================================

    /// Single-phase state at (p, t), checked against `family`.
    pub fn state_pt(&self, p: f64, t: f64, family: PropertyFamily) -> Result<State> {
        validity::check_pt(p, t, family)?;
        Ok(state::state_pt(p, t, &self.cfg)?)
    }

    pub fn region_pt(&self, p: f64, t: f64) -> Result<Region> {
        validity::check_pt(p, t, PropertyFamily::PressureTemperature)?;
        Ok(region::region_pt(p, t))
    }

    pub fn viscosity(&self, p: f64, t: f64) -> Result<f64> {
        validity::check_viscosity(p, t)?;
        let st = state::state_pt(p, t, &self.cfg)?;
        Ok(transport::viscosity(st.rho(), t))
    }

    pub fn conductivity(&self, p: f64, t: f64) -> Result<f64> {
        validity::check_conductivity(p, t)?;
        let st = state::state_pt(p, t, &self.cfg)?;
        Ok(transport::conductivity(st.rho(), t))
    }

    // ================================================================
    //  (p, h) and (p, s)
    // ================================================================

    pub fn state_ph(&self, p: f64, h: f64) -> Result<State> {
        self.state_px(p, h, Basis::Enthalpy)
    }

    pub fn state_ps(&self, p: f64, s: f64) -> Result<State> {
        self.state_px(p, s, Basis::Entropy)
    }

    fn state_px(&self, p: f64, x: f64, basis: Basis) -> Result<State> {
        validity::check_pressure(p, basis.family())?;
        if !x.is_finite() {
            return Err(basis.out_of_bounds());
        }
        inverse::resolve(p, x, basis, &self.cfg)
    }

    // ================================================================
    //  Saturation curve
    // ================================================================

    pub fn tsat(&self, p: f64) -> Result<f64> {
        validity::check_saturation_p(p, None)?;
        Ok(tsat_checked(p))
    }

    pub fn psat(&self, t: f64) -> Result<f64> {
        validity::check_saturation_t(t, None)?;
        Ok(psat_checked(t))
    }

    /// Saturated liquid and vapor at pressure `p`. `accessor` selects
    /// the error wording.
    pub fn saturated_p(&self, p: f64, accessor: Option<SatProp>) -> Result<(State, State)> {
        validity::check_saturation_p(p, accessor)?;
        Ok(state::saturated(p, tsat_checked(p), &self.cfg)?)
    }

    /// Saturated liquid and vapor at temperature `t`.
    pub fn saturated_t(&self, t: f64, accessor: Option<SatProp>) -> Result<(State, State)> {
        validity::check_saturation_t(t, accessor)?;
        Ok(state::saturated(psat_checked(t), t, &self.cfg)?)
    }
}

/// The curve equations overshoot the critical point by a few ulps at
/// its ends; clamp so the saturation functions stay inside their domain.
fn tsat_checked(p: f64) -> f64 {
    region4::tsat(p).min(TC)
}

fn psat_checked(t: f64) -> f64 {
    region4::psat(t).min(PC)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn saturation_ends_at_the_critical_point() {
        let b = If97Backend::default();
        assert_relative_eq!(b.tsat(PC).unwrap(), TC, max_relative = 1e-9);
        assert_relative_eq!(b.psat(TC).unwrap(), PC, max_relative = 1e-9);
        let (l, v) = b.saturated_t(TC, Some(SatProp::Hf)).unwrap();
        assert_eq!(l.v, v.v);
    }

    #[test]
    fn family_wording_flows_through() {
        let b = If97Backend::default();
        let err = b.state_pt(0.0, 300.0, PropertyFamily::PressureTemperature).unwrap_err();
        assert_eq!(err.family(), Some(PropertyFamily::PressureTemperature));
        let err = b.state_ph(101.0, 1000.0).unwrap_err();
        assert_eq!(err.to_string(), "pressure out of bounds");
        assert_eq!(err.family(), Some(PropertyFamily::PressureEnthalpy));
        let err = b.state_ps(1.0, f64::NAN).unwrap_err();
        assert_eq!(err.to_string(), "entropy out of bounds");
    }

    #[test]
    fn transport_uses_region_3_density() {
        let b = If97Backend::default();
        let vis = b.viscosity(25.0, 650.0).unwrap();
        let k = b.conductivity(25.0, 650.0).unwrap();
        assert!(vis > 40.0 && vis < 100.0, "vis = {vis:.3}");
        assert!(k > 200.0, "k = {k:.3}");
    }
}
