//! Unit conversion between the caller's unit system and the engine's
//! native units.
//!
//! The engine works internally in **MPa, K, kJ/kg, kJ/(kg·K), m³/kg,
//! m/s, µPa·s and mW/(m·K)**. Callers pick one of two systems for the
//! values they pass in and one for the values they get back:
//!
//! | Quantity             | Native      | `Si`        | `English`       |
//! |----------------------|-------------|-------------|-----------------|
//! | pressure             | MPa         | MPa         | psia            |
//! | temperature          | K           | °C          | °F              |
//! | enthalpy             | kJ/kg       | kJ/kg       | Btu/lbm         |
//! | entropy, cp, cv      | kJ/(kg·K)   | kJ/(kg·K)   | Btu/(lbm·R)     |
//! | specific volume      | m³/kg       | m³/kg       | ft³/lbm         |
//! | speed of sound       | m/s         | m/s         | ft/s            |
//! | viscosity            | µPa·s       | µPa·s       | lbm/(ft·s)      |
//! | thermal conductivity | mW/(m·K)    | mW/(m·K)    | Btu/(hr·ft·R)   |
//!
//! **English is the default on both sides.** Omitting the output system
//! gives English output even when the input system is SI.
//!
//! ```
//! use watprop::{Converter, UnitSystem};
//!
//! let conv = Converter::new(Some(UnitSystem::Si), None);
//! assert_eq!(conv.output, UnitSystem::English);
//! let t = conv.t_to_native(100.0); // °C → K
//! assert!((t - 373.15).abs() < 1e-12);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, WatpropError};

// ────────────────────────────────────────────────────────────────────
//  Conversion constants (English per native unit)
// ────────────────────────────────────────────────────────────────────

const ENGLISH_P: f64 = 145.0377;
const ENGLISH_TMULT: f64 = 1.8;
const ENGLISH_TADD: f64 = -459.67;
const CENTIGRADE: f64 = -273.15;
const ENGLISH_H: f64 = 1.0 / 2.326;
const ENGLISH_S: f64 = 1.0 / 4.1868;
const ENGLISH_V: f64 = 16.01846;
const ENGLISH_W: f64 = 3.2808399;
/// Pa·s → lbm/(ft·s)
const ENGLISH_VIS: f64 = 0.671969;
/// W/(m·K) → Btu/(hr·ft·R)
const ENGLISH_K: f64 = 0.5777893;
/// Native viscosity is µPa·s.
const VIS_SCALE: f64 = 1.0e6;
/// Native conductivity is mW/(m·K).
const K_SCALE: f64 = 1.0e3;

// ────────────────────────────────────────────────────────────────────
//  UnitSystem
// ────────────────────────────────────────────────────────────────────

/// The two unit systems the library speaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    /// MPa, °C, kJ/kg, kJ/(kg·K), m³/kg, m/s, µPa·s, mW/(m·K)
    Si,
    /// psia, °F, Btu/lbm, Btu/(lbm·R), ft³/lbm, ft/s, lbm/(ft·s), Btu/(hr·ft·R)
    #[default]
    English,
}

impl UnitSystem {
    /// Parse a selector for the input side. The empty string means
    /// English; anything unknown fails with `bad input units`.
    pub fn parse_input(s: &str) -> Result<Self> {
        Self::parse_selector(s).ok_or_else(|| WatpropError::BadUnits("bad input units".into()))
    }

    /// Parse a selector for the output side. Fails with
    /// `bad output units`.
    pub fn parse_output(s: &str) -> Result<Self> {
        Self::parse_selector(s).ok_or_else(|| WatpropError::BadUnits("bad output units".into()))
    }

    fn parse_selector(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "si" => Some(Self::Si),
            "english" | "" => Some(Self::English),
            _ => None,
        }
    }
}

impl FromStr for UnitSystem {
    type Err = WatpropError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse_input(s)
    }
}

impl fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Si => f.write_str("SI"),
            Self::English => f.write_str("ENGLISH"),
        }
    }
}

// ────────────────────────────────────────────────────────────────────
//  Quantity: generic to/from native
// ────────────────────────────────────────────────────────────────────

/// Physical quantity kinds the converter knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quantity {
    Pressure,
    Temperature,
    Enthalpy,
    Entropy,
    HeatCapacity,
    SpecificVolume,
    SpeedOfSound,
    Viscosity,
    ThermalConductivity,
}

impl Quantity {
    /// Convert a value expressed in `units` to native units.
    pub fn to_native(self, value: f64, units: UnitSystem) -> f64 {
        match units {
            UnitSystem::Si => match self {
                Quantity::Temperature => value - CENTIGRADE,
                _ => value,
            },
            UnitSystem::English => match self {
                Quantity::Pressure => value / ENGLISH_P,
                Quantity::Temperature => (value - ENGLISH_TADD) / ENGLISH_TMULT,
                Quantity::Enthalpy => value / ENGLISH_H,
                Quantity::Entropy | Quantity::HeatCapacity => value / ENGLISH_S,
                Quantity::SpecificVolume => value / ENGLISH_V,
                Quantity::SpeedOfSound => value / ENGLISH_W,
                Quantity::Viscosity => value / ENGLISH_VIS * VIS_SCALE,
                Quantity::ThermalConductivity => value / ENGLISH_K * K_SCALE,
            },
        }
    }

    /// Unit symbol of this quantity in `units`.
    pub fn unit(self, units: UnitSystem) -> &'static str {
        match (self, units) {
            (Quantity::Pressure, UnitSystem::Si) => "MPa",
            (Quantity::Pressure, UnitSystem::English) => "psia",
            (Quantity::Temperature, UnitSystem::Si) => "°C",
            (Quantity::Temperature, UnitSystem::English) => "°F",
            (Quantity::Enthalpy, UnitSystem::Si) => "kJ/kg",
            (Quantity::Enthalpy, UnitSystem::English) => "Btu/lbm",
            (Quantity::Entropy | Quantity::HeatCapacity, UnitSystem::Si) => "kJ/(kg·K)",
            (Quantity::Entropy | Quantity::HeatCapacity, UnitSystem::English) => "Btu/(lbm·R)",
            (Quantity::SpecificVolume, UnitSystem::Si) => "m³/kg",
            (Quantity::SpecificVolume, UnitSystem::English) => "ft³/lbm",
            (Quantity::SpeedOfSound, UnitSystem::Si) => "m/s",
            (Quantity::SpeedOfSound, UnitSystem::English) => "ft/s",
            (Quantity::Viscosity, UnitSystem::Si) => "µPa·s",
            (Quantity::Viscosity, UnitSystem::English) => "lbm/(ft·s)",
            (Quantity::ThermalConductivity, UnitSystem::Si) => "mW/(m·K)",
            (Quantity::ThermalConductivity, UnitSystem::English) => "Btu/(hr·ft·R)",
        }
    }

    /// Convert a native value to `units`.
    pub fn from_native(self, value: f64, units: UnitSystem) -> f64 {
        match units {
            UnitSystem::Si => match self {
                Quantity::Temperature => value + CENTIGRADE,
                _ => value,
            },
            UnitSystem::English => match self {
                Quantity::Pressure => value * ENGLISH_P,
                Quantity::Temperature => value * ENGLISH_TMULT + ENGLISH_TADD,
                Quantity::Enthalpy => value * ENGLISH_H,
                Quantity::Entropy | Quantity::HeatCapacity => value * ENGLISH_S,
                Quantity::SpecificVolume => value * ENGLISH_V,
                Quantity::SpeedOfSound => value * ENGLISH_W,
                Quantity::Viscosity => value / VIS_SCALE * ENGLISH_VIS,
                Quantity::ThermalConductivity => value / K_SCALE * ENGLISH_K,
            },
        }
    }
}

// ────────────────────────────────────────────────────────────────────
//  Converter: input side and output side
// ────────────────────────────────────────────────────────────────────

/// Converts caller values to native units on the way in and native
/// results to the requested system on the way out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Converter {
    pub input: UnitSystem,
    pub output: UnitSystem,
}

impl Converter {
    /// A missing side is English, whatever the other side is.
    pub fn new(input: Option<UnitSystem>, output: Option<UnitSystem>) -> Self {
        Self {
            input: input.unwrap_or_default(),
            output: output.unwrap_or_default(),
        }
    }

    /// Identity converter: SI in and out, so only temperature moves
    /// (°C ↔ K).
    pub fn si() -> Self {
        Self::new(Some(UnitSystem::Si), Some(UnitSystem::Si))
    }

    // ── Inputs ──────────────────────────────────────────────────────

    /// User → MPa
    pub fn p_to_native(&self, p: f64) -> f64 {
        Quantity::Pressure.to_native(p, self.input)
    }

    /// User → K
    pub fn t_to_native(&self, t: f64) -> f64 {
        Quantity::Temperature.to_native(t, self.input)
    }

    /// User → kJ/kg
    pub fn h_to_native(&self, h: f64) -> f64 {
        Quantity::Enthalpy.to_native(h, self.input)
    }

    /// User → kJ/(kg·K)
    pub fn s_to_native(&self, s: f64) -> f64 {
        Quantity::Entropy.to_native(s, self.input)
    }

    // ── Outputs ─────────────────────────────────────────────────────

    pub fn p_from_native(&self, p: f64) -> f64 {
        Quantity::Pressure.from_native(p, self.output)
    }

    pub fn t_from_native(&self, t: f64) -> f64 {
        Quantity::Temperature.from_native(t, self.output)
    }

    pub fn h_from_native(&self, h: f64) -> f64 {
        Quantity::Enthalpy.from_native(h, self.output)
    }

    pub fn s_from_native(&self, s: f64) -> f64 {
        Quantity::Entropy.from_native(s, self.output)
    }

    pub fn cp_from_native(&self, cp: f64) -> f64 {
        Quantity::HeatCapacity.from_native(cp, self.output)
    }

    pub fn v_from_native(&self, v: f64) -> f64 {
        Quantity::SpecificVolume.from_native(v, self.output)
    }

    pub fn w_from_native(&self, w: f64) -> f64 {
        Quantity::SpeedOfSound.from_native(w, self.output)
    }

    pub fn vis_from_native(&self, vis: f64) -> f64 {
        Quantity::Viscosity.from_native(vis, self.output)
    }

    pub fn k_from_native(&self, k: f64) -> f64 {
        Quantity::ThermalConductivity.from_native(k, self.output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_temperature_round_trip() {
        let k = Quantity::Temperature.to_native(300.0, UnitSystem::English);
        assert!((k - 422.038_888_888_888_9).abs() < 1e-9);
        let f = Quantity::Temperature.from_native(k, UnitSystem::English);
        assert!((f - 300.0).abs() < 1e-9);
    }

    #[test]
    fn si_is_identity_except_temperature() {
        assert_eq!(Quantity::Pressure.to_native(3.0, UnitSystem::Si), 3.0);
        assert_eq!(Quantity::Viscosity.from_native(890.1, UnitSystem::Si), 890.1);
        assert_eq!(Quantity::Temperature.to_native(0.0, UnitSystem::Si), 273.15);
    }

    #[test]
    fn transport_scales_are_applied() {
        // 1000 µPa·s = 1e-3 Pa·s
        let vis = Quantity::Viscosity.from_native(1000.0, UnitSystem::English);
        assert!((vis - 1.0e-3 * ENGLISH_VIS).abs() < 1e-15);
        // 1000 mW/(m·K) = 1 W/(m·K)
        let k = Quantity::ThermalConductivity.from_native(1000.0, UnitSystem::English);
        assert!((k - ENGLISH_K).abs() < 1e-12);
    }

    #[test]
    fn selectors_parse_case_insensitively() {
        assert_eq!(UnitSystem::parse_input("SI").unwrap(), UnitSystem::Si);
        assert_eq!(UnitSystem::parse_input("English").unwrap(), UnitSystem::English);
        assert_eq!(UnitSystem::parse_output("").unwrap(), UnitSystem::English);
        assert_eq!(
            UnitSystem::parse_output("metric").unwrap_err().to_string(),
            "bad output units"
        );
        assert_eq!("imperial".parse::<UnitSystem>().unwrap_err().to_string(), "bad input units");
    }

    #[test]
    fn missing_side_defaults_to_english() {
        let conv = Converter::new(Some(UnitSystem::Si), None);
        assert_eq!(conv.input, UnitSystem::Si);
        assert_eq!(conv.output, UnitSystem::English);
        assert_eq!(Converter::new(None, None), Converter::default());
    }
}
