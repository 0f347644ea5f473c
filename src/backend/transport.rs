//! Transport properties from density and temperature: the IAPWS 1985
//! industrial correlations for dynamic viscosity and thermal
//! conductivity.

// ── Viscosity ───────────────────────────────────────────────────────

const VIS_T_STAR: f64 = 647.226;
const VIS_RHO_STAR: f64 = 317.763;
/// Reference viscosity, Pa·s.
const VIS_STAR: f64 = 55.071e-6;

const VIS_H0: [f64; 4] = [1.0, 0.978197, 0.579829, -0.202354];

const VIS_I: [i32; 19] = [0, 1, 4, 5, 0, 1, 2, 3, 0, 1, 2, 0, 1, 2, 3, 0, 3, 1, 3];
const VIS_J: [i32; 19] = [0, 0, 0, 0, 1, 1, 1, 1, 2, 2, 2, 3, 3, 3, 3, 4, 4, 5, 6];
const VIS_H1: [f64; 19] = [
    0.5132047,
    0.3205656,
    -0.7782567,
    0.1885447,
    0.2151778,
    0.7317883,
    1.241044,
    1.476783,
    -0.2818107,
    -1.070786,
    -1.263184,
    0.1778064,
    0.4605040,
    0.2340379,
    -0.4924179,
    -0.04176610,
    0.1600435,
    -0.01578386,
    -0.003629481,
];

/// Dynamic viscosity, µPa·s.
pub(crate) fn viscosity(rho: f64, t: f64) -> f64 {
    let t_bar = t / VIS_T_STAR;
    let rho_bar = rho / VIS_RHO_STAR;

    let dilute = t_bar.sqrt()
        / VIS_H0
            .iter()
            .zip(0..)
            .map(|(&h, i)| h / t_bar.powi(i))
            .sum::<f64>();

    let (dt, dr) = (1.0 / t_bar - 1.0, rho_bar - 1.0);
    let residual: f64 = VIS_I
        .iter()
        .zip(&VIS_J)
        .zip(&VIS_H1)
        .map(|((&i, &j), &h)| h * dt.powi(i) * dr.powi(j))
        .sum();

    VIS_STAR * dilute * (rho_bar * residual).exp() * 1e6
}

// ── Thermal conductivity ────────────────────────────────────────────

const K_T_STAR: f64 = 647.26;
const K_RHO_STAR: f64 = 317.7;

const K_A: [f64; 4] = [0.0102811, 0.0299621, 0.0156146, -0.00422464];

const K_B0: f64 = -0.397070;
const K_B1: f64 = 0.400302;
const K_B2: f64 = 1.060000;
const K_BB1: f64 = -0.171587;
const K_BB2: f64 = 2.392190;

const K_D: [f64; 4] = [0.0701309, 0.0118520, 0.00169937, -1.0200];
const K_C: [f64; 6] = [0.642857, -4.11717, -6.17937, 0.00308976, 0.0822994, 10.0932];

/// Thermal conductivity, mW/(m·K).
pub(crate) fn conductivity(rho: f64, t: f64) -> f64 {
    let t_bar = t / K_T_STAR;
    let rho_bar = rho / K_RHO_STAR;

    let dilute = t_bar.sqrt()
        * K_A
            .iter()
            .zip(0..)
            .map(|(&a, k)| a * t_bar.powi(k))
            .sum::<f64>();

    let background = K_B0 + K_B1 * rho_bar + K_B2 * (K_BB1 * (rho_bar + K_BB2).powi(2)).exp();

    // critical enhancement
    let dt = (t_bar - 1.0).abs() + K_C[3];
    let q = 2.0 + K_C[4] / dt.powf(0.6);
    let s = if t_bar > 1.0 {
        1.0 / dt
    } else {
        K_C[5] / dt.powf(0.6)
    };
    let enhancement = (K_D[0] / t_bar.powi(10) + K_D[1])
        * rho_bar.powf(1.8)
        * (K_C[0] * (1.0 - rho_bar.powf(2.8))).exp()
        + K_D[2] * s * rho_bar.powf(q) * ((q / (1.0 + q)) * (1.0 - rho_bar.powf(1.0 + q))).exp()
        + K_D[3] * (K_C[1] * t_bar.powf(1.5) + K_C[2] / rho_bar.powi(5)).exp();

    (dilute + background + enhancement) * 1e3
}
