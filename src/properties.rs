use serde::{Deserialize, Serialize};

use crate::backend::region::Region;
use crate::converter::{Quantity, UnitSystem};

fn write_opt(
    f: &mut std::fmt::Formatter<'_>,
    label: &str,
    value: Option<f64>,
    unit: &str,
) -> std::fmt::Result {
    match value {
        Some(v) => writeln!(f, "{label} = {v:.6} {unit}"),
        None => writeln!(f, "{label} = n/a (two-phase)"),
    }
}

// ── Thermodynamic properties at one state point ─────────────────────

/// Every thermodynamic property at one state point, in the output unit
/// system named by `units`.
///
/// | Field          | `Si`       | `English`    |
/// |----------------|------------|--------------|
/// | temperature    | °C         | °F           |
/// | pressure       | MPa        | psia         |
/// | specific_volume| m³/kg      | ft³/lbm      |
/// | enthalpy       | kJ/kg      | Btu/lbm      |
/// | internal_energy| kJ/kg      | Btu/lbm      |
/// | entropy        | kJ/(kg·K)  | Btu/(lbm·R)  |
/// | cp, cv         | kJ/(kg·K)  | Btu/(lbm·R)  |
/// | sound_speed    | m/s        | ft/s         |
///
/// Inside the two-phase dome `quality` is the vapor mass fraction and
/// `cp`, `cv` and `sound_speed` are `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThermoProp {
    pub region: Region,
    pub temperature: f64,
    pub pressure: f64,
    pub specific_volume: f64,
    pub enthalpy: f64,
    pub internal_energy: f64,
    pub entropy: f64,
    pub cp: Option<f64>,
    pub cv: Option<f64>,
    pub sound_speed: Option<f64>,
    pub quality: Option<f64>,
    pub units: UnitSystem,
}

impl std::fmt::Display for ThermoProp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let u = self.units;
        writeln!(f, "Region {}", self.region)?;
        writeln!(f, "T  = {:.4} {}", self.temperature, Quantity::Temperature.unit(u))?;
        writeln!(f, "P  = {:.4} {}", self.pressure, Quantity::Pressure.unit(u))?;
        writeln!(f, "V  = {:.8} {}", self.specific_volume, Quantity::SpecificVolume.unit(u))?;
        writeln!(f, "H  = {:.4} {}", self.enthalpy, Quantity::Enthalpy.unit(u))?;
        writeln!(f, "U  = {:.4} {}", self.internal_energy, Quantity::Enthalpy.unit(u))?;
        writeln!(f, "S  = {:.6} {}", self.entropy, Quantity::Entropy.unit(u))?;
        write_opt(f, "Cp", self.cp, Quantity::HeatCapacity.unit(u))?;
        write_opt(f, "Cv", self.cv, Quantity::HeatCapacity.unit(u))?;
        write_opt(f, "W ", self.sound_speed, Quantity::SpeedOfSound.unit(u))?;
        match self.quality {
            Some(x) => write!(f, "X  = {x:.6}"),
            None => write!(f, "X  = n/a (single phase)"),
        }
    }
}

// ── Saturation properties ───────────────────────────────────────────

/// Both ends of a tie line on the saturation curve, in the output unit
/// system named by `units`. `*f` fields are the saturated liquid, `*g`
/// fields the saturated vapor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaturationProps {
    pub temperature: f64,
    pub pressure: f64,
    pub hf: f64,
    pub hg: f64,
    pub sf: f64,
    pub sg: f64,
    pub vf: f64,
    pub vg: f64,
    pub units: UnitSystem,
}

impl SaturationProps {
    /// Latent heat of vaporization, hg − hf.
    pub fn hfg(&self) -> f64 {
        self.hg - self.hf
    }
}

impl std::fmt::Display for SaturationProps {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let u = self.units;
        let (h, s, v) = (
            Quantity::Enthalpy.unit(u),
            Quantity::Entropy.unit(u),
            Quantity::SpecificVolume.unit(u),
        );
        writeln!(f, "T_sat = {:.4} {}", self.temperature, Quantity::Temperature.unit(u))?;
        writeln!(f, "P_sat = {:.6} {}", self.pressure, Quantity::Pressure.unit(u))?;
        writeln!(f, "hf    = {:.4} {h}", self.hf)?;
        writeln!(f, "hg    = {:.4} {h}", self.hg)?;
        writeln!(f, "sf    = {:.6} {s}", self.sf)?;
        writeln!(f, "sg    = {:.6} {s}", self.sg)?;
        writeln!(f, "vf    = {:.8} {v}", self.vf)?;
        write!(f, "vg    = {:.8} {v}", self.vg)
    }
}

// ── Transport properties ────────────────────────────────────────────

/// Viscosity and thermal conductivity at a (p, T) state point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransportProps {
    /// Dynamic viscosity (µPa·s or lbm/(ft·s))
    pub viscosity: f64,
    /// Thermal conductivity (mW/(m·K) or Btu/(hr·ft·R))
    pub thermal_conductivity: f64,
    pub units: UnitSystem,
}

impl std::fmt::Display for TransportProps {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let u = self.units;
        writeln!(f, "eta = {:.6} {}", self.viscosity, Quantity::Viscosity.unit(u))?;
        write!(
            f,
            "tcx = {:.6} {}",
            self.thermal_conductivity,
            Quantity::ThermalConductivity.unit(u)
        )
    }
}
