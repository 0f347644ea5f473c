//! Boundary between Regions 2 and 3, 623.15 K ≤ T ≤ 863.15 K.

const N: [f64; 5] = [
    0.34805185628969e3,
    -0.11671859879975e1,
    0.10192970039326e-2,
    0.57254459862746e3,
    0.13918839778870e2,
];

/// Boundary pressure (MPa) at temperature `t` (K).
pub(crate) fn p_at(t: f64) -> f64 {
    N[0] + N[1] * t + N[2] * t * t
}

/// Boundary temperature (K) at pressure `p` (MPa).
pub(crate) fn t_at(p: f64) -> f64 {
    N[3] + ((p - N[4]) / N[2]).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn checkpoint_and_inverse() {
        assert_relative_eq!(p_at(623.15), 0.165291643e2, max_relative = 1e-8);
        assert_relative_eq!(t_at(0.165291643e2), 623.15, max_relative = 1e-8);
    }
}
