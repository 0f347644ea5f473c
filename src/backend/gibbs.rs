//! Property relations shared by the Gibbs-energy regions (1, 2 and 5).

use super::R;

/// Dimensionless Gibbs free energy γ(π, τ) and its partial derivatives
/// at one state point. For Regions 2 and 5 these are the totals of the
/// ideal-gas and residual parts.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Gibbs {
    pub t: f64,
    pub pi: f64,
    pub tau: f64,
    pub g: f64,
    pub g_pi: f64,
    pub g_pipi: f64,
    pub g_tau: f64,
    pub g_tautau: f64,
    pub g_pitau: f64,
}

impl Gibbs {
    /// Specific volume, m³/kg. `p` in MPa.
    pub fn v(&self, p: f64) -> f64 {
        self.pi * self.g_pi * R * self.t / (p * 1000.0)
    }

    /// Specific enthalpy, kJ/kg.
    pub fn h(&self) -> f64 {
        self.tau * self.g_tau * R * self.t
    }

    /// Specific internal energy, kJ/kg.
    pub fn u(&self) -> f64 {
        (self.tau * self.g_tau - self.pi * self.g_pi) * R * self.t
    }

    /// Specific entropy, kJ/(kg·K).
    pub fn s(&self) -> f64 {
        (self.tau * self.g_tau - self.g) * R
    }

    /// Isobaric heat capacity, kJ/(kg·K).
    pub fn cp(&self) -> f64 {
        -self.tau * self.tau * self.g_tautau * R
    }

    /// Isochoric heat capacity, kJ/(kg·K).
    pub fn cv(&self) -> f64 {
        let a = self.g_pi - self.tau * self.g_pitau;
        (-self.tau * self.tau * self.g_tautau + a * a / self.g_pipi) * R
    }

    /// Speed of sound, m/s.
    pub fn w(&self) -> f64 {
        let a = self.g_pi - self.tau * self.g_pitau;
        let den = a * a / (self.tau * self.tau * self.g_tautau) - self.g_pipi;
        (R * 1000.0 * self.t * self.g_pi * self.g_pi / den).sqrt()
    }
}

/// Ideal-gas part ln π + Σ nᵢ τ^Jᵢ and its derivatives, shared by
/// Regions 2 and 5. Returns `(g, g_pi, g_pipi, g_tau, g_tautau)`.
pub(crate) fn ideal_gas(pi: f64, tau: f64, j0: &[i32], n0: &[f64]) -> (f64, f64, f64, f64, f64) {
    let mut g = pi.ln();
    let mut g_tau = 0.0;
    let mut g_tautau = 0.0;
    for (&j, &n) in j0.iter().zip(n0) {
        let jf = f64::from(j);
        g += n * tau.powi(j);
        g_tau += n * jf * tau.powi(j - 1);
        g_tautau += n * jf * (jf - 1.0) * tau.powi(j - 2);
    }
    (g, 1.0 / pi, -1.0 / (pi * pi), g_tau, g_tautau)
}

/// Residual power sum Σ nᵢ π^Iᵢ x^Jᵢ and its derivatives, where
/// `x = τ − tau_shift`. Returns `(g, g_pi, g_pipi, g_tau, g_tautau, g_pitau)`.
pub(crate) fn residual(
    pi: f64,
    tau: f64,
    tau_shift: f64,
    ii: &[i32],
    jj: &[i32],
    nn: &[f64],
) -> (f64, f64, f64, f64, f64, f64) {
    let x = tau - tau_shift;
    let mut acc = (0.0, 0.0, 0.0, 0.0, 0.0, 0.0);
    for ((&i, &j), &n) in ii.iter().zip(jj).zip(nn) {
        let (fi, fj) = (f64::from(i), f64::from(j));
        let pi_i = pi.powi(i);
        let pi_i1 = pi.powi(i - 1);
        let x_j = x.powi(j);
        let x_j1 = x.powi(j - 1);
        acc.0 += n * pi_i * x_j;
        acc.1 += n * fi * pi_i1 * x_j;
        acc.2 += n * fi * (fi - 1.0) * pi.powi(i - 2) * x_j;
        acc.3 += n * pi_i * fj * x_j1;
        acc.4 += n * pi_i * fj * (fj - 1.0) * x.powi(j - 2);
        acc.5 += n * fi * pi_i1 * fj * x_j1;
    }
    acc
}
