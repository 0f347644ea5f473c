use crate::backend::if97::If97Backend;
use crate::backend::region::Region;
use crate::backend::solver::SolverConfig;
use crate::backend::state::State;
use crate::backend::validity::SatProp;
use crate::converter::{Converter, UnitSystem};
use crate::error::*;
use crate::properties::*;

/// High-level entry point for water and steam properties.
///
/// A `Water` pairs an input [`UnitSystem`] with an output one. Both
/// default to **English** (psia, °F, Btu/lbm, …); a side left as `None`
/// is English even when the other side is SI.
///
/// # Quick example (SI in and out)
/// ```
/// use watprop::{UnitSystem, Water};
///
/// let w = Water::with_units(Some(UnitSystem::Si), Some(UnitSystem::Si));
/// // 3 MPa, 26.85 °C: compressed liquid
/// let h = w.h_pt(3.0, 300.0 - 273.15)?;
/// assert!((h - 115.331273).abs() < 1e-4);
/// # Ok::<(), watprop::WatpropError>(())
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Water {
    backend: If97Backend,
    conv: Converter,
}

impl Water {
    // ── Constructors ─────────────────────────────────────────────────

    /// English in, English out.
    pub fn new() -> Self {
        Self::with_units(None, None)
    }

    /// Choose the input and output unit systems. `None` means English
    /// on that side.
    ///
    /// ```
    /// use watprop::{UnitSystem, Water};
    ///
    /// // SI in, English out
    /// let w = Water::with_units(Some(UnitSystem::Si), None);
    /// assert_eq!(w.converter().output, UnitSystem::English);
    /// ```
    pub fn with_units(input: Option<UnitSystem>, output: Option<UnitSystem>) -> Self {
        Self {
            backend: If97Backend::default(),
            conv: Converter::new(input, output),
        }
    }

    /// Build from textual selectors (`"SI"`, `"ENGLISH"`, or `""` for
    /// English), case-insensitive.
    ///
    /// ```
    /// use watprop::Water;
    ///
    /// assert!(Water::from_selectors("si", "").is_ok());
    /// let err = Water::from_selectors("metric", "si").unwrap_err();
    /// assert_eq!(err.to_string(), "bad input units");
    /// ```
    pub fn from_selectors(input: &str, output: &str) -> Result<Self> {
        let input = UnitSystem::parse_input(input)?;
        let output = UnitSystem::parse_output(output)?;
        Ok(Self::with_units(Some(input), Some(output)))
    }

    /// Replace the iteration budget used by the Region 3 density solve
    /// and the backward refinement.
    pub fn with_solver(mut self, cfg: SolverConfig) -> Self {
        self.backend = If97Backend::new(cfg);
        self
    }

    /// Access the active converter (useful for manual conversions).
    pub fn converter(&self) -> &Converter {
        &self.conv
    }

    pub fn solver(&self) -> &SolverConfig {
        &self.backend.cfg
    }

    // ── (p, T) ───────────────────────────────────────────────────────

    /// Specific enthalpy at (p, T).
    pub fn h_pt(&self, p: f64, t: f64) -> Result<f64> {
        let st = self.state_pt(p, t)?;
        Ok(self.conv.h_from_native(st.h))
    }

    /// Specific volume at (p, T).
    pub fn v_pt(&self, p: f64, t: f64) -> Result<f64> {
        let st = self.state_pt(p, t)?;
        Ok(self.conv.v_from_native(st.v))
    }

    /// Specific entropy at (p, T).
    pub fn s_pt(&self, p: f64, t: f64) -> Result<f64> {
        let st = self.state_pt(p, t)?;
        Ok(self.conv.s_from_native(st.s))
    }

    /// Isobaric heat capacity at (p, T).
    pub fn cp_pt(&self, p: f64, t: f64) -> Result<f64> {
        let st = self.state_pt(p, t)?;
        Ok(self.conv.cp_from_native(single_phase(st.cp, "cp")?))
    }

    /// Isochoric heat capacity at (p, T).
    pub fn cv_pt(&self, p: f64, t: f64) -> Result<f64> {
        let st = self.state_pt(p, t)?;
        Ok(self.conv.cp_from_native(single_phase(st.cv, "cv")?))
    }

    /// Speed of sound at (p, T).
    pub fn w_pt(&self, p: f64, t: f64) -> Result<f64> {
        let st = self.state_pt(p, t)?;
        Ok(self.conv.w_from_native(single_phase(st.w, "speed of sound")?))
    }

    /// Dynamic viscosity at (p, T). Undefined above 900 °C.
    pub fn vis_pt(&self, p: f64, t: f64) -> Result<f64> {
        let vis = self.backend.viscosity(self.conv.p_to_native(p), self.conv.t_to_native(t))?;
        Ok(self.conv.vis_from_native(vis))
    }

    /// Thermal conductivity at (p, T). Valid up to 802 °C.
    pub fn k_pt(&self, p: f64, t: f64) -> Result<f64> {
        let k = self
            .backend
            .conductivity(self.conv.p_to_native(p), self.conv.t_to_native(t))?;
        Ok(self.conv.k_from_native(k))
    }

    /// All thermodynamic properties at (p, T).
    pub fn props_pt(&self, p: f64, t: f64) -> Result<ThermoProp> {
        let st = self.state_pt(p, t)?;
        Ok(self.convert_thermo(&st))
    }

    /// Viscosity and thermal conductivity at (p, T), each under its own
    /// validity range.
    pub fn transport_pt(&self, p: f64, t: f64) -> Result<TransportProps> {
        Ok(TransportProps {
            viscosity: self.vis_pt(p, t)?,
            thermal_conductivity: self.k_pt(p, t)?,
            units: self.conv.output,
        })
    }

    /// IF97 region of the state at (p, T).
    pub fn region_pt(&self, p: f64, t: f64) -> Result<Region> {
        self.backend
            .region_pt(self.conv.p_to_native(p), self.conv.t_to_native(t))
    }

    // ── (p, h) ───────────────────────────────────────────────────────

    /// Temperature at (p, h). Inside the two-phase dome this is the
    /// saturation temperature.
    pub fn t_ph(&self, p: f64, h: f64) -> Result<f64> {
        let st = self.state_ph(p, h)?;
        Ok(self.conv.t_from_native(st.t))
    }

    /// Specific volume at (p, h), quality-weighted inside the dome.
    pub fn v_ph(&self, p: f64, h: f64) -> Result<f64> {
        let st = self.state_ph(p, h)?;
        Ok(self.conv.v_from_native(st.v))
    }

    /// Specific entropy at (p, h), quality-weighted inside the dome.
    pub fn s_ph(&self, p: f64, h: f64) -> Result<f64> {
        let st = self.state_ph(p, h)?;
        Ok(self.conv.s_from_native(st.s))
    }

    /// All thermodynamic properties at (p, h).
    pub fn props_ph(&self, p: f64, h: f64) -> Result<ThermoProp> {
        let st = self.state_ph(p, h)?;
        Ok(self.convert_thermo(&st))
    }

    // ── (p, s) ───────────────────────────────────────────────────────

    /// Temperature at (p, s).
    pub fn t_ps(&self, p: f64, s: f64) -> Result<f64> {
        let st = self.state_ps(p, s)?;
        Ok(self.conv.t_from_native(st.t))
    }

    /// Specific enthalpy at (p, s).
    pub fn h_ps(&self, p: f64, s: f64) -> Result<f64> {
        let st = self.state_ps(p, s)?;
        Ok(self.conv.h_from_native(st.h))
    }

    /// All thermodynamic properties at (p, s).
    pub fn props_ps(&self, p: f64, s: f64) -> Result<ThermoProp> {
        let st = self.state_ps(p, s)?;
        Ok(self.convert_thermo(&st))
    }

    // ── Saturation by pressure ───────────────────────────────────────

    /// Saturation temperature at pressure `p`.
    pub fn t_p(&self, p: f64) -> Result<f64> {
        let t = self.backend.tsat(self.conv.p_to_native(p))?;
        Ok(self.conv.t_from_native(t))
    }

    /// Saturated liquid enthalpy at pressure `p`.
    pub fn hf_p(&self, p: f64) -> Result<f64> {
        let (liquid, _) = self.sat_p(p, SatProp::Hf)?;
        Ok(self.conv.h_from_native(liquid.h))
    }

    /// Saturated vapor enthalpy at pressure `p`.
    pub fn hg_p(&self, p: f64) -> Result<f64> {
        let (_, vapor) = self.sat_p(p, SatProp::Hg)?;
        Ok(self.conv.h_from_native(vapor.h))
    }

    /// Saturated liquid entropy at pressure `p`.
    pub fn sf_p(&self, p: f64) -> Result<f64> {
        let (liquid, _) = self.sat_p(p, SatProp::Sf)?;
        Ok(self.conv.s_from_native(liquid.s))
    }

    /// Saturated vapor entropy at pressure `p`.
    pub fn sg_p(&self, p: f64) -> Result<f64> {
        let (_, vapor) = self.sat_p(p, SatProp::Sg)?;
        Ok(self.conv.s_from_native(vapor.s))
    }

    /// Saturated liquid specific volume at pressure `p`.
    pub fn vf_p(&self, p: f64) -> Result<f64> {
        let (liquid, _) = self.sat_p(p, SatProp::Vf)?;
        Ok(self.conv.v_from_native(liquid.v))
    }

    /// Saturated vapor specific volume at pressure `p`.
    pub fn vg_p(&self, p: f64) -> Result<f64> {
        let (_, vapor) = self.sat_p(p, SatProp::Vg)?;
        Ok(self.conv.v_from_native(vapor.v))
    }

    /// Both saturated phases at pressure `p`.
    pub fn saturation_p(&self, p: f64) -> Result<SaturationProps> {
        let p = self.conv.p_to_native(p);
        let (liquid, vapor) = self.backend.saturated_p(p, None)?;
        Ok(self.convert_sat(&liquid, &vapor))
    }

    // ── Saturation by temperature ────────────────────────────────────

    /// Saturation pressure at temperature `t`.
    pub fn p_t(&self, t: f64) -> Result<f64> {
        let p = self.backend.psat(self.conv.t_to_native(t))?;
        Ok(self.conv.p_from_native(p))
    }

    /// Saturated liquid enthalpy at temperature `t`.
    pub fn hf_t(&self, t: f64) -> Result<f64> {
        let (liquid, _) = self.sat_t(t, SatProp::Hf)?;
        Ok(self.conv.h_from_native(liquid.h))
    }

    /// Saturated vapor enthalpy at temperature `t`.
    pub fn hg_t(&self, t: f64) -> Result<f64> {
        let (_, vapor) = self.sat_t(t, SatProp::Hg)?;
        Ok(self.conv.h_from_native(vapor.h))
    }

    /// Saturated liquid entropy at temperature `t`.
    pub fn sf_t(&self, t: f64) -> Result<f64> {
        let (liquid, _) = self.sat_t(t, SatProp::Sf)?;
        Ok(self.conv.s_from_native(liquid.s))
    }

    /// Saturated vapor entropy at temperature `t`.
    pub fn sg_t(&self, t: f64) -> Result<f64> {
        let (_, vapor) = self.sat_t(t, SatProp::Sg)?;
        Ok(self.conv.s_from_native(vapor.s))
    }

    /// Saturated liquid specific volume at temperature `t`.
    pub fn vf_t(&self, t: f64) -> Result<f64> {
        let (liquid, _) = self.sat_t(t, SatProp::Vf)?;
        Ok(self.conv.v_from_native(liquid.v))
    }

    /// Saturated vapor specific volume at temperature `t`.
    pub fn vg_t(&self, t: f64) -> Result<f64> {
        let (_, vapor) = self.sat_t(t, SatProp::Vg)?;
        Ok(self.conv.v_from_native(vapor.v))
    }

    /// Both saturated phases at temperature `t`.
    pub fn saturation_t(&self, t: f64) -> Result<SaturationProps> {
        let t = self.conv.t_to_native(t);
        let (liquid, vapor) = self.backend.saturated_t(t, None)?;
        Ok(self.convert_sat(&liquid, &vapor))
    }

    // ── Internal helpers ─────────────────────────────────────────────

    fn state_pt(&self, p: f64, t: f64) -> Result<State> {
        self.backend.state_pt(
            self.conv.p_to_native(p),
            self.conv.t_to_native(t),
            PropertyFamily::PressureTemperature,
        )
    }

    fn state_ph(&self, p: f64, h: f64) -> Result<State> {
        self.backend
            .state_ph(self.conv.p_to_native(p), self.conv.h_to_native(h))
    }

    fn state_ps(&self, p: f64, s: f64) -> Result<State> {
        self.backend
            .state_ps(self.conv.p_to_native(p), self.conv.s_to_native(s))
    }

    fn sat_p(&self, p: f64, prop: SatProp) -> Result<(State, State)> {
        self.backend.saturated_p(self.conv.p_to_native(p), Some(prop))
    }

    fn sat_t(&self, t: f64, prop: SatProp) -> Result<(State, State)> {
        self.backend.saturated_t(self.conv.t_to_native(t), Some(prop))
    }

    fn convert_thermo(&self, st: &State) -> ThermoProp {
        ThermoProp {
            region: st.region,
            temperature: self.conv.t_from_native(st.t),
            pressure: self.conv.p_from_native(st.p),
            specific_volume: self.conv.v_from_native(st.v),
            enthalpy: self.conv.h_from_native(st.h),
            internal_energy: self.conv.h_from_native(st.u),
            entropy: self.conv.s_from_native(st.s),
            cp: st.cp.map(|cp| self.conv.cp_from_native(cp)),
            cv: st.cv.map(|cv| self.conv.cp_from_native(cv)),
            sound_speed: st.w.map(|w| self.conv.w_from_native(w)),
            quality: st.quality,
            units: self.conv.output,
        }
    }

    fn convert_sat(&self, liquid: &State, vapor: &State) -> SaturationProps {
        SaturationProps {
            temperature: self.conv.t_from_native(liquid.t),
            pressure: self.conv.p_from_native(liquid.p),
            hf: self.conv.h_from_native(liquid.h),
            hg: self.conv.h_from_native(vapor.h),
            sf: self.conv.s_from_native(liquid.s),
            sg: self.conv.s_from_native(vapor.s),
            vf: self.conv.v_from_native(liquid.v),
            vg: self.conv.v_from_native(vapor.v),
            units: self.conv.output,
        }
    }
}

/// (p, T) states are single-phase, so these are always present there.
fn single_phase(value: Option<f64>, what: &str) -> Result<f64> {
    value.ok_or_else(|| {
        WatpropError::InvalidInput(format!("{what} is undefined in the two-phase region"))
    })
}
