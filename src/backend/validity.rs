//! Input-domain checks, one per property family.
//!
//! Every comparison is written as "fail unless inside", so NaN inputs
//! are rejected by the same check that rejects out-of-range values.

use super::{P_MAX, P5_MAX, PC, T5_MAX, T25, TC, TT};
use crate::error::{PropertyFamily, Result, WatpropError};

/// Viscosity is undefined above this temperature (K).
const VIS_T_MAX: f64 = 1173.15;
/// Thermal conductivity correlation upper temperature (K).
const K_T_MAX: f64 = 1075.15;

/// The six saturated-phase accessors, each with its own error wording.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SatProp {
    Hf,
    Hg,
    Sf,
    Sg,
    Vf,
    Vg,
}

impl SatProp {
    pub fn name(self) -> &'static str {
        match self {
            SatProp::Hf => "hf",
            SatProp::Hg => "hg",
            SatProp::Sf => "sf",
            SatProp::Sg => "sg",
            SatProp::Vf => "vf",
            SatProp::Vg => "vg",
        }
    }
}

fn fail(family: PropertyFamily, message: impl Into<String>) -> Result<()> {
    Err(WatpropError::out_of_bounds(family, message))
}

/// Pressure gate shared by every (p, ·) family except conductivity.
pub(crate) fn check_pressure(p: f64, family: PropertyFamily) -> Result<()> {
    if !(p > 0.0 && p <= P_MAX) {
        return fail(family, "pressure out of bounds");
    }
    Ok(())
}

/// Domain of the (p, T) equations of state, tagged with `family`.
pub(crate) fn check_pt(p: f64, t: f64, family: PropertyFamily) -> Result<()> {
    check_pressure(p, family)?;
    if !(t >= TT && t <= T5_MAX) {
        return fail(family, "temperature out of bounds");
    }
    if t > T25 && p > P5_MAX {
        return fail(family, "pressure/temperature combination out of bounds");
    }
    Ok(())
}

pub(crate) fn check_viscosity(p: f64, t: f64) -> Result<()> {
    check_pt(p, t, PropertyFamily::Viscosity)?;
    if t > VIS_T_MAX {
        return fail(
            PropertyFamily::Viscosity,
            "shear viscosity calculation is not valid in portions of Region 5",
        );
    }
    Ok(())
}

pub(crate) fn check_conductivity(p: f64, t: f64) -> Result<()> {
    let family = PropertyFamily::Conductivity;
    if !(t >= TT && t <= K_T_MAX) {
        return fail(family, "invalid temperature in k_pt");
    }
    if !(p > 0.0 && p <= P_MAX) {
        return fail(family, "invalid pressure in k_pt");
    }
    check_pt(p, t, family)
}

/// Saturation by pressure. `accessor` is `None` for `t_p` itself.
pub(crate) fn check_saturation_p(p: f64, accessor: Option<SatProp>) -> Result<()> {
    if !(p > 0.0 && p <= PC) {
        let message = match accessor {
            None => "pressure out of bounds".to_string(),
            Some(prop) => format!("invalid pressure in {}_p", prop.name()),
        };
        return fail(PropertyFamily::SaturationPressure, message);
    }
    Ok(())
}

/// Saturation by temperature. `accessor` is `None` for `p_t` itself.
pub(crate) fn check_saturation_t(t: f64, accessor: Option<SatProp>) -> Result<()> {
    if !(t >= TT && t <= TC) {
        let message = match accessor {
            None => "temperature out of bounds".to_string(),
            Some(prop) => format!("invalid temperature in {}_t", prop.name()),
        };
        return fail(PropertyFamily::SaturationTemperature, message);
    }
    Ok(())
}
