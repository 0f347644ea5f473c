use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Property family whose validity check rejected an input.
///
/// The families word their messages differently, so callers that match
/// on the message text should also look at the family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PropertyFamily {
    /// `h_pt`, `v_pt`, `s_pt`, `cp_pt`, `cv_pt`, `w_pt`
    PressureTemperature,
    /// `vis_pt`
    Viscosity,
    /// `k_pt`
    Conductivity,
    /// `t_p` and the `*_p` saturated accessors
    SaturationPressure,
    /// `p_t` and the `*_t` saturated accessors
    SaturationTemperature,
    /// `t_ph`, `v_ph`, `s_ph`
    PressureEnthalpy,
    /// `t_ps`, `h_ps`
    PressureEntropy,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum WatpropError {
    /// Input outside the validity range of a property family.
    /// Displays as the bare message, e.g. `pressure out of bounds`.
    #[error("{message}")]
    OutOfBounds {
        family: PropertyFamily,
        message: String,
    },

    /// An iterative solve ran out of steps or lost its bracket.
    #[error("no convergence in {what} after {iterations} iterations")]
    NoConvergence { what: String, iterations: usize },

    /// Unrecognised unit-system selector.
    #[error("{0}")]
    BadUnits(String),

    /// Invalid input with no family-specific wording.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl WatpropError {
    pub(crate) fn out_of_bounds(family: PropertyFamily, message: impl Into<String>) -> Self {
        Self::OutOfBounds {
            family,
            message: message.into(),
        }
    }

    /// Family tag for validity errors, `None` otherwise.
    pub fn family(&self) -> Option<PropertyFamily> {
        match self {
            Self::OutOfBounds { family, .. } => Some(*family),
            _ => None,
        }
    }
}

pub type Result<T, E = WatpropError> = std::result::Result<T, E>;
