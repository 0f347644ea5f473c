//! # watprop
//!
//! Water and steam properties from the
//! [IAPWS-IF97](http://www.iapws.org/relguide/IF97-Rev.html) industrial
//! formulation, with the IAPWS 1985 industrial correlations for
//! viscosity and thermal conductivity.
//!
//! ## Highlights
//!
//! * **Forward properties**: `h_pt`, `v_pt`, `s_pt`, `cp_pt`, `cv_pt`,
//!   `w_pt`, `vis_pt`, `k_pt`
//! * **Backward properties**: `t_ph`, `v_ph`, `s_ph`, `t_ps`, `h_ps`,
//!   including two-phase states
//! * **Saturation curve**: `t_p`, `p_t` and the `hf/hg/sf/sg/vf/vg`
//!   accessors by pressure or temperature
//! * **Two unit systems**: SI (MPa, °C, kJ/kg) or English (psia, °F,
//!   Btu/lbm); English is the default on both sides
//! * **Stateless**: `Water` is `Copy` and can be shared across threads
//!
//! ## Quick example
//!
//! ```
//! use watprop::{UnitSystem, Water};
//!
//! // English units: psia, °F, Btu/lbm
//! let w = Water::new();
//! let h = w.h_pt(2000.0, 300.0)?;
//! let t = w.t_ph(2000.0, h)?;
//! assert!((t - 300.0).abs() < 1e-6);
//!
//! // SI in, SI out: MPa, °C, kJ/kg
//! let si = Water::with_units(Some(UnitSystem::Si), Some(UnitSystem::Si));
//! let t_sat = si.t_p(0.101325)?;
//! assert!((t_sat - 99.97).abs() < 0.01);
//! # Ok::<(), watprop::WatpropError>(())
//! ```
//!
//! ## Errors
//!
//! Inputs outside a property family's validity range fail with
//! [`WatpropError::OutOfBounds`], whose message is the family's fixed
//! wording (for example `pressure out of bounds` or
//! `invalid temperature in k_pt`). Iterative solves that run out of
//! steps fail with [`WatpropError::NoConvergence`].
//!
//! ```
//! use watprop::{PropertyFamily, Water};
//!
//! let err = Water::new().h_pt(-1.0, 300.0).unwrap_err();
//! assert_eq!(err.to_string(), "pressure out of bounds");
//! assert_eq!(err.family(), Some(PropertyFamily::PressureTemperature));
//! ```

// ── Internal modules ─────────────────────────────────────────────────
mod backend;
pub mod converter;
pub mod error;
pub mod properties;
pub mod water;

// ── Public re-exports ────────────────────────────────────────────────
pub use backend::region::Region;
pub use backend::solver::SolverConfig;
pub use converter::{Converter, Quantity, UnitSystem};
pub use error::{PropertyFamily, Result, WatpropError};
pub use properties::{SaturationProps, ThermoProp, TransportProps};
pub use water::Water;
