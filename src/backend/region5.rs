//! Region 5: high-temperature steam, 1073.15 K < T ≤ 2273.15 K, p ≤ 50 MPa.

use super::gibbs::{self, Gibbs};

const T_STAR: f64 = 1000.0;

const J0: [i32; 6] = [0, 1, -3, -2, -1, 2];

const N0: [f64; 6] = [
    -0.13179983674201e2,
    0.68540841634434e1,
    -0.24805148933466e-1,
    0.36901534980333,
    -0.31161318213925e1,
    -0.32961626538917,
];

const I: [i32; 6] = [1, 1, 1, 2, 2, 3];
const J: [i32; 6] = [1, 2, 3, 3, 9, 7];

const N: [f64; 6] = [
    0.15736404855259e-2,
    0.90153761673944e-3,
    -0.50270077677648e-2,
    0.22440037409485e-5,
    -0.41163275453471e-5,
    0.37919454822955e-7,
];

pub(crate) fn gibbs(p: f64, t: f64) -> Gibbs {
    let pi = p;
    let tau = T_STAR / t;
    let (g0, g0_pi, g0_pipi, g0_tau, g0_tautau) = gibbs::ideal_gas(pi, tau, &J0, &N0);
    let (gr, gr_pi, gr_pipi, gr_tau, gr_tautau, gr_pitau) =
        gibbs::residual(pi, tau, 0.0, &I, &J, &N);
    Gibbs {
        t,
        pi,
        tau,
        g: g0 + gr,
        g_pi: g0_pi + gr_pi,
        g_pipi: g0_pipi + gr_pipi,
        g_tau: g0_tau + gr_tau,
        g_tautau: g0_tautau + gr_tautau,
        g_pitau: gr_pitau,
    }
}

pub(crate) fn h(p: f64, t: f64) -> f64 {
    gibbs(p, t).h()
}

pub(crate) fn s(p: f64, t: f64) -> f64 {
    gibbs(p, t).s()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn if97_checkpoints() {
        // (p, T, v, h, s, w, cp)
        let rows = [
            (0.5, 1500.0, 0.138455090e1, 0.521976855e4, 0.965408875e1, 0.917068690e3, 0.261609445e1),
            (30.0, 1500.0, 0.230761299e-1, 0.516723514e4, 0.772970133e1, 0.928548002e3, 0.272724317e1),
            (30.0, 2000.0, 0.311385219e-1, 0.657122604e4, 0.853640523e1, 0.106736948e4, 0.288569882e1),
        ];
        for (p, t, v, h, s, w, cp) in rows {
            let g = gibbs(p, t);
            assert_relative_eq!(g.v(p), v, max_relative = 1e-8);
            assert_relative_eq!(g.h(), h, max_relative = 1e-8);
            assert_relative_eq!(g.s(), s, max_relative = 1e-8);
            assert_relative_eq!(g.w(), w, max_relative = 1e-8);
            assert_relative_eq!(g.cp(), cp, max_relative = 1e-8);
        }
    }
}
