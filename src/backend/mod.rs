//! IAPWS-IF97 property engine. Everything in here works in native
//! units: MPa, K, kJ/kg, kJ/(kg·K), m³/kg, kg/m³, m/s.

pub(crate) mod b23;
pub(crate) mod backward;
pub(crate) mod gibbs;
pub(crate) mod if97;
pub(crate) mod inverse;
pub(crate) mod region;
pub(crate) mod region1;
pub(crate) mod region2;
pub(crate) mod region3;
pub(crate) mod region4;
pub(crate) mod region5;
pub(crate) mod solver;
pub(crate) mod state;
pub(crate) mod transport;
pub(crate) mod validity;

/// Specific gas constant of water, kJ/(kg·K).
pub(crate) const R: f64 = 0.461526;
/// Critical temperature, K.
pub(crate) const TC: f64 = 647.096;
/// Critical pressure, MPa.
pub(crate) const PC: f64 = 22.064;
/// Critical density, kg/m³.
pub(crate) const DC: f64 = 322.0;
/// Triple-point temperature, K.
pub(crate) const TT: f64 = 273.15;

/// Upper temperature of Region 1 and lower edge of Region 3, K.
pub(crate) const T13: f64 = 623.15;
/// Saturation pressure at [`T13`], MPa.
pub(crate) const P13: f64 = 16.5292;
/// Upper temperature of the Region 2/3 boundary, K.
pub(crate) const T23_MAX: f64 = 863.15;
/// Upper temperature of Region 2, K.
pub(crate) const T25: f64 = 1073.15;
/// Upper temperature of Region 5, K.
pub(crate) const T5_MAX: f64 = 2273.15;
/// Upper pressure of Regions 1-3, MPa.
pub(crate) const P_MAX: f64 = 100.0;
/// Upper pressure of Region 5, MPa.
pub(crate) const P5_MAX: f64 = 50.0;
