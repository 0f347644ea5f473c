//! Region selection in (p, T) and candidate regions in (p, h) / (p, s).

use serde::{Deserialize, Serialize};

use super::{P5_MAX, P13, T5_MAX, T13, T23_MAX, T25, TT};
use super::{b23, region1, region2, region4, region5};
use crate::error::{PropertyFamily, Result, WatpropError};

/// IAPWS-IF97 region of a state point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Region {
    /// Compressed liquid.
    One,
    /// Superheated vapor.
    Two,
    /// Near-critical fluid.
    Three,
    /// Two-phase mixture on the saturation curve.
    Four,
    /// High-temperature steam.
    Five,
    /// Exactly on the Region 2/3 boundary line; evaluated with the
    /// Region 2 equation.
    Boundary23,
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Region::One => f.write_str("1"),
            Region::Two => f.write_str("2"),
            Region::Three => f.write_str("3"),
            Region::Four => f.write_str("4"),
            Region::Five => f.write_str("5"),
            Region::Boundary23 => f.write_str("2-3"),
        }
    }
}

/// Region of a validated single-phase (p, t) point. States exactly on
/// the saturation line below 623.15 K count as Region 1.
pub(crate) fn region_pt(p: f64, t: f64) -> Region {
    let region = if t <= T13 {
        if p >= region4::psat(t) {
            Region::One
        } else {
            Region::Two
        }
    } else if t <= T23_MAX {
        let p23 = b23::p_at(t);
        if (p - p23).abs() <= 1e-12 * p23 {
            Region::Boundary23
        } else if p < p23 {
            Region::Two
        } else {
            Region::Three
        }
    } else if t <= T25 {
        Region::Two
    } else {
        Region::Five
    };
    tracing::debug!(p, t, %region, "region from (p, T)");
    region
}

// ── (p, h) and (p, s) ───────────────────────────────────────────────

/// The second independent variable of an inverse lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Basis {
    Enthalpy,
    Entropy,
}

impl Basis {
    pub fn family(self) -> PropertyFamily {
        match self {
            Basis::Enthalpy => PropertyFamily::PressureEnthalpy,
            Basis::Entropy => PropertyFamily::PressureEntropy,
        }
    }

    pub fn out_of_bounds(self) -> WatpropError {
        let message = match self {
            Basis::Enthalpy => "enthalpy out of bounds",
            Basis::Entropy => "entropy out of bounds",
        };
        WatpropError::out_of_bounds(self.family(), message)
    }

    /// Allowance at the Region 2/5 seam and the Region 5 ceiling, where
    /// neighbouring equations do not meet exactly.
    fn seam_allowance(self) -> f64 {
        match self {
            Basis::Enthalpy => 1.0,
            Basis::Entropy => 1e-3,
        }
    }

    pub fn region1(self, p: f64, t: f64) -> f64 {
        match self {
            Basis::Enthalpy => region1::h(p, t),
            Basis::Entropy => region1::s(p, t),
        }
    }

    pub fn region2(self, p: f64, t: f64) -> f64 {
        match self {
            Basis::Enthalpy => region2::h(p, t),
            Basis::Entropy => region2::s(p, t),
        }
    }

    pub fn region5(self, p: f64, t: f64) -> f64 {
        match self {
            Basis::Enthalpy => region5::h(p, t),
            Basis::Entropy => region5::s(p, t),
        }
    }
}

/// Candidate region for (p, x), where `x` is an enthalpy or entropy
/// according to `basis`. `p` must already be validated.
///
/// In the Region 3 pressure band the two-phase part of Region 3 is
/// reported as [`Region::Three`]; the inverse solver separates it.
pub(crate) fn region_px(p: f64, x: f64, basis: Basis) -> Result<Region> {
    let allowance = basis.seam_allowance();
    if !(x >= basis.region1(p, TT)) {
        return Err(basis.out_of_bounds());
    }

    let region = if p <= P13 {
        let t_sat = region4::tsat(p);
        if x > basis.region5(p, T5_MAX) + allowance {
            return Err(basis.out_of_bounds());
        } else if x > basis.region2(p, T25) {
            Region::Five
        } else if x >= basis.region2(p, t_sat) {
            Region::Two
        } else if x > basis.region1(p, t_sat) {
            Region::Four
        } else {
            Region::One
        }
    } else if x <= basis.region1(p, T13) {
        Region::One
    } else if x <= basis.region2(p, b23::t_at(p)) {
        Region::Three
    } else if x <= basis.region2(p, T25) + allowance {
        Region::Two
    } else if p > P5_MAX || x > basis.region5(p, T5_MAX) + allowance {
        return Err(basis.out_of_bounds());
    } else {
        Region::Five
    };
    tracing::debug!(p, x, ?basis, %region, "candidate region");
    Ok(region)
}
