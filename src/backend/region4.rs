//! Region 4: the saturation curve from the triple point to the critical
//! point.

const N: [f64; 10] = [
    0.11670521452767e4,
    -0.72421316703206e6,
    -0.17073846940092e2,
    0.12020824702470e5,
    -0.32325550322333e7,
    0.14915108613530e2,
    -0.48232657361591e4,
    0.40511340542057e6,
    -0.23855557567849,
    0.65017534844798e3,
];

/// Saturation pressure (MPa) at temperature `t` (K).
pub(crate) fn psat(t: f64) -> f64 {
    let theta = t + N[8] / (t - N[9]);
    let a = theta * theta + N[0] * theta + N[1];
    let b = N[2] * theta * theta + N[3] * theta + N[4];
    let c = N[5] * theta * theta + N[6] * theta + N[7];
    (2.0 * c / (-b + (b * b - 4.0 * a * c).sqrt())).powi(4)
}

/// Saturation temperature (K) at pressure `p` (MPa).
pub(crate) fn tsat(p: f64) -> f64 {
    let beta = p.powf(0.25);
    let e = beta * beta + N[2] * beta + N[5];
    let f = N[0] * beta * beta + N[3] * beta + N[6];
    let g = N[1] * beta * beta + N[4] * beta + N[7];
    let d = 2.0 * g / (-f - (f * f - 4.0 * e * g).sqrt());
    (N[9] + d - ((N[9] + d).powi(2) - 4.0 * (N[8] + N[9] * d)).sqrt()) / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn saturation_pressure_checkpoints() {
        assert_relative_eq!(psat(300.0), 0.353658941e-2, max_relative = 1e-8);
        assert_relative_eq!(psat(500.0), 0.263889776e1, max_relative = 1e-8);
        assert_relative_eq!(psat(600.0), 0.123443146e2, max_relative = 1e-8);
    }

    #[test]
    fn saturation_temperature_checkpoints() {
        assert_relative_eq!(tsat(0.1), 0.372755919e3, max_relative = 1e-8);
        assert_relative_eq!(tsat(1.0), 0.453035632e3, max_relative = 1e-8);
        assert_relative_eq!(tsat(10.0), 0.584149488e3, max_relative = 1e-8);
    }

    #[test]
    fn curve_is_self_consistent() {
        for t in [280.0, 373.15, 450.0, 550.0, 623.15, 640.0] {
            assert_relative_eq!(tsat(psat(t)), t, max_relative = 1e-9);
        }
    }
}
