//! Region 3: the near-critical region between the Region 1 and Region 2
//! boundaries, 623.15 K ≤ T ≤ Tb23(p).
//!
//! The basic equation is a Helmholtz free energy in density and
//! temperature, so every (p, T) evaluation first solves for density.

use super::solver::{SolveError, SolverConfig, newton_bracketed};
use super::{DC, PC, R, TC, region4};

const RHO_STAR: f64 = DC;
const T_STAR: f64 = TC;

/// Lowest density searched on the vapor and supercritical branches.
const RHO_MIN: f64 = 50.0;
/// Highest density searched on the liquid and supercritical branches.
const RHO_MAX: f64 = 800.0;
/// Within this many kelvin of TC the saturation curve and the Region 3
/// equation disagree by more than the width of the two-phase loop, so
/// the dome is treated as closed.
const NEAR_CRITICAL: f64 = 1e-3;

// ── Coefficients (first entry multiplies ln δ) ──────────────────────

const I: [i32; 40] = [
    0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 1, 1, 2, 2, 2, 2, 2, 2, 3, 3, 3, 3, 3, 4, 4, 4, 4, 5, 5, 5, 6, 6,
    6, 7, 8, 9, 9, 10, 10, 11,
];

const J: [i32; 40] = [
    0, 0, 1, 2, 7, 10, 12, 23, 2, 6, 15, 17, 0, 2, 6, 7, 22, 26, 0, 2, 4, 16, 26, 0, 2, 4, 26, 1,
    3, 26, 0, 2, 26, 2, 26, 2, 26, 0, 1, 26,
];

const N: [f64; 40] = [
    0.10658070028513e1,
    -0.15732845290239e2,
    0.20944396974307e2,
    -0.76867707878716e1,
    0.26185947787954e1,
    -0.28080781148620e1,
    0.12053369696517e1,
    -0.84566812812502e-2,
    -0.12654315477714e1,
    -0.11524407806681e1,
    0.88521043984318,
    -0.64207765181607,
    0.38493460186671,
    -0.85214708824206,
    0.48972281541877e1,
    -0.30502617256965e1,
    0.39420536879154e-1,
    0.12558408424308,
    -0.27999329698710,
    0.13899799569460e1,
    -0.20189915023570e1,
    -0.82147637173963e-2,
    -0.47596035734923,
    0.43984074473500e-1,
    -0.44476435428739,
    0.90572070719733,
    0.70522450087967,
    0.10770512626332,
    -0.32913623258954,
    -0.50871062041158,
    -0.22175400873096e-1,
    0.94260751665092e-1,
    0.16436278447961,
    -0.13503372241348e-1,
    -0.14834345352472e-1,
    0.57922953628084e-3,
    0.32308904703711e-2,
    0.80964802996215e-4,
    -0.16557679795037e-3,
    -0.44923899061815e-4,
];

// ── Density search limits near the saturation curve ─────────────────

const SAT_TEMPS: [f64; 33] = [
    623.15, 625.15, 627.15, 629.15, 631.15, 633.15, 634.15, 635.15, 636.15, 637.15, 638.15, 639.15,
    640.15, 641.15, 642.15, 643.15, 644.15, 645.15, 646.15, 646.4, 646.65, 646.75, 646.85, 646.95,
    647.0, 647.05, 647.06, 647.07, 647.08, 647.09, 647.093, 647.095, 647.096,
];

/// Upper density limit for vapor below the critical temperature.
const VAPOR_RHO_MAX: [f64; 33] = [
    161.318, 166.327, 171.649, 177.336, 183.453, 190.088, 193.637, 197.367, 201.303, 205.478,
    209.932, 214.719, 219.914, 225.621, 231.996, 239.289, 247.945, 258.897, 274.814, 280.543,
    287.863, 291.548, 295.972, 301.663, 305.393, 310.431, 311.755, 313.286, 315.16, 317.812,
    319.04, 320.292, 323.0,
];

/// Lower density limit for liquid below the critical temperature.
const LIQUID_RHO_MIN: [f64; 33] = [
    503.431, 496.687, 489.604, 482.129, 474.193, 465.702, 461.209, 456.526, 451.624, 446.473,
    441.029, 435.238, 429.027, 422.291, 414.876, 406.537, 396.845, 384.914, 368.263, 362.468,
    355.205, 351.601, 347.308, 341.823, 338.234, 333.37, 332.086, 330.597, 328.766, 326.16,
    324.946, 323.703, 321.0,
];

/// Piecewise-linear lookup over ascending `xs`; the end segments
/// extrapolate.
fn interpolate(xs: &[f64], ys: &[f64], x: f64) -> f64 {
    let last = xs.len() - 1;
    let i = (1..last).find(|&i| x <= xs[i]).unwrap_or(last);
    (x - xs[i - 1]) / (xs[i] - xs[i - 1]) * (ys[i] - ys[i - 1]) + ys[i - 1]
}

// ── Helmholtz free energy ───────────────────────────────────────────

/// φ(δ, τ) and its derivatives at one (ρ, T) point.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Helmholtz {
    pub rho: f64,
    pub t: f64,
    delta: f64,
    tau: f64,
    f: f64,
    f_d: f64,
    f_dd: f64,
    f_t: f64,
    f_tt: f64,
    f_dt: f64,
}

impl Helmholtz {
    pub fn new(rho: f64, t: f64) -> Self {
        let delta = rho / RHO_STAR;
        let tau = T_STAR / t;
        let n1 = N[0];
        let mut f = n1 * delta.ln();
        let mut f_d = n1 / delta;
        let mut f_dd = -n1 / (delta * delta);
        let mut f_t = 0.0;
        let mut f_tt = 0.0;
        let mut f_dt = 0.0;
        for k in 1..N.len() {
            let (i, j, n) = (I[k], J[k], N[k]);
            let (fi, fj) = (f64::from(i), f64::from(j));
            let d_i = delta.powi(i);
            let d_i1 = delta.powi(i - 1);
            let t_j = tau.powi(j);
            let t_j1 = tau.powi(j - 1);
            f += n * d_i * t_j;
            f_d += n * fi * d_i1 * t_j;
            f_dd += n * fi * (fi - 1.0) * delta.powi(i - 2) * t_j;
            f_t += n * d_i * fj * t_j1;
            f_tt += n * d_i * fj * (fj - 1.0) * tau.powi(j - 2);
            f_dt += n * fi * d_i1 * fj * t_j1;
        }
        Self {
            rho,
            t,
            delta,
            tau,
            f,
            f_d,
            f_dd,
            f_t,
            f_tt,
            f_dt,
        }
    }

    /// Pressure, MPa.
    pub fn p(&self) -> f64 {
        self.rho * R * self.t * self.delta * self.f_d / 1000.0
    }

    /// ∂p/∂ρ at constant T, MPa·m³/kg.
    pub fn dp_drho(&self) -> f64 {
        R * self.t * (2.0 * self.delta * self.f_d + self.delta * self.delta * self.f_dd) / 1000.0
    }

    pub fn v(&self) -> f64 {
        1.0 / self.rho
    }

    pub fn h(&self) -> f64 {
        R * self.t * (self.tau * self.f_t + self.delta * self.f_d)
    }

    pub fn u(&self) -> f64 {
        R * self.t * self.tau * self.f_t
    }

    pub fn s(&self) -> f64 {
        R * (self.tau * self.f_t - self.f)
    }

    pub fn cv(&self) -> f64 {
        -R * self.tau * self.tau * self.f_tt
    }

    pub fn cp(&self) -> f64 {
        let a = self.delta * self.f_d - self.delta * self.tau * self.f_dt;
        let b = 2.0 * self.delta * self.f_d + self.delta * self.delta * self.f_dd;
        R * (-self.tau * self.tau * self.f_tt + a * a / b)
    }

    pub fn w(&self) -> f64 {
        let a = self.delta * self.f_d - self.delta * self.tau * self.f_dt;
        let b = 2.0 * self.delta * self.f_d + self.delta * self.delta * self.f_dd;
        (R * 1000.0 * self.t * (b - a * a / (self.tau * self.tau * self.f_tt))).sqrt()
    }
}

// ── Density from (p, T) ─────────────────────────────────────────────

/// Which side of the saturation dome a density solve looks on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Branch {
    Liquid,
    Vapor,
    Supercritical,
}

impl Branch {
    /// Branch containing the single-phase state (p, t).
    pub fn of(p: f64, t: f64) -> Self {
        if t >= TC {
            Branch::Supercritical
        } else if p >= region4::psat(t) {
            Branch::Liquid
        } else {
            Branch::Vapor
        }
    }

    fn bracket(self, t: f64) -> (f64, f64) {
        match self {
            _ if t >= TC - NEAR_CRITICAL => (RHO_MIN, RHO_MAX),
            Branch::Supercritical => (RHO_MIN, RHO_MAX),
            Branch::Liquid => (interpolate(&SAT_TEMPS, &LIQUID_RHO_MIN, t), RHO_MAX),
            Branch::Vapor => (RHO_MIN, interpolate(&SAT_TEMPS, &VAPOR_RHO_MAX, t)),
        }
    }
}

fn is_critical(p: f64, t: f64) -> bool {
    (t - TC).abs() <= 1e-9 * TC && (p - PC).abs() <= 1e-9 * PC
}

/// Density (kg/m³) at (p, t) on the given branch.
pub(crate) fn density(
    p: f64,
    t: f64,
    branch: Branch,
    cfg: &SolverConfig,
) -> Result<f64, SolveError> {
    if is_critical(p, t) {
        return Ok(DC);
    }
    let (lo, hi) = branch.bracket(t);
    newton_bracketed(
        "region 3 density",
        |rho| {
            let state = Helmholtz::new(rho, t);
            (state.p() - p, state.dp_drho())
        },
        lo,
        hi,
        None,
        cfg,
    )
}

/// Helmholtz state at (p, t), choosing the branch from psat(t).
pub(crate) fn state_pt(p: f64, t: f64, cfg: &SolverConfig) -> Result<Helmholtz, SolveError> {
    let rho = density(p, t, Branch::of(p, t), cfg)?;
    Ok(Helmholtz::new(rho, t))
}

/// Saturated liquid and vapor states at (p, t) on the saturation line,
/// 623.15 K < t ≤ TC. Both collapse to the critical density within
/// [`NEAR_CRITICAL`] of the critical point.
pub(crate) fn saturated_states(
    p: f64,
    t: f64,
    cfg: &SolverConfig,
) -> Result<(Helmholtz, Helmholtz), SolveError> {
    if t >= TC - NEAR_CRITICAL || p >= PC {
        let crit = Helmholtz::new(DC, t.min(TC));
        return Ok((crit, crit));
    }
    let liquid = density(p, t, Branch::Liquid, cfg)?;
    let vapor = density(p, t, Branch::Vapor, cfg)?;
    Ok((Helmholtz::new(liquid, t), Helmholtz::new(vapor, t)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn if97_checkpoints_in_density() {
        // (rho, T, p, h, s, w, cp)
        let rows = [
            (500.0, 650.0, 0.255837018e2, 0.186343019e4, 0.405427273e1, 0.502005554e3, 0.138935717e2),
            (200.0, 650.0, 0.222930643e2, 0.237512401e4, 0.485438792e1, 0.383444594e3, 0.446579342e2),
            (500.0, 750.0, 0.783095639e2, 0.225868845e4, 0.446971906e1, 0.760696041e3, 0.634165359e1),
        ];
        for (rho, t, p, h, s, w, cp) in rows {
            let st = Helmholtz::new(rho, t);
            assert_relative_eq!(st.p(), p, max_relative = 1e-8);
            assert_relative_eq!(st.h(), h, max_relative = 1e-8);
            assert_relative_eq!(st.s(), s, max_relative = 1e-8);
            assert_relative_eq!(st.w(), w, max_relative = 1e-8);
            assert_relative_eq!(st.cp(), cp, max_relative = 1e-8);
        }
    }

    #[test]
    fn density_solve_recovers_checkpoints() {
        let cfg = SolverConfig::default();
        for (rho, t, p) in [
            (500.0, 650.0, 0.255837018e2),
            (200.0, 650.0, 0.222930643e2),
            (500.0, 750.0, 0.783095639e2),
        ] {
            let st = state_pt(p, t, &cfg).unwrap();
            assert_relative_eq!(st.rho, rho, max_relative = 1e-7);
        }
    }

    #[test]
    fn critical_point_is_exact() {
        let cfg = SolverConfig::default();
        assert_eq!(density(PC, TC, Branch::Liquid, &cfg).unwrap(), DC);
        let (l, v) = saturated_states(PC, TC, &cfg).unwrap();
        assert_eq!(l.rho, DC);
        assert_eq!(v.rho, DC);
    }

    #[test]
    fn saturated_liquid_is_denser_than_vapor() {
        let cfg = SolverConfig::default();
        let t = 640.0;
        let (l, v) = saturated_states(region4::psat(t), t, &cfg).unwrap();
        assert!(l.rho > v.rho);
        assert!(l.h() < v.h());
    }

    #[test]
    fn interpolation_extrapolates_past_the_table() {
        let y = interpolate(&SAT_TEMPS, &LIQUID_RHO_MIN, 623.15);
        assert!((y - 503.431).abs() < 1e-9);
        let y = interpolate(&SAT_TEMPS, &VAPOR_RHO_MAX, 647.096);
        assert!((y - 323.0).abs() < 1e-9);
    }
}
