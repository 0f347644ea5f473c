//! Region 2: superheated vapor, from the saturation line (T ≤ 623.15 K)
//! or the Region 2/3 boundary up to 1073.15 K.

use super::gibbs::{self, Gibbs};

const T_STAR: f64 = 540.0;

const J0: [i32; 9] = [0, 1, -5, -4, -3, -2, -1, 2, 3];

const N0: [f64; 9] = [
    -0.96927686500217e1,
    0.10086655968018e2,
    -0.56087911283020e-2,
    0.71452738081455e-1,
    -0.40710498223928,
    0.14240819171444e1,
    -0.43839511319450e1,
    -0.28408632460772,
    0.21268463753307e-1,
];

const I: [i32; 43] = [
    1, 1, 1, 1, 1, 2, 2, 2, 2, 2, 3, 3, 3, 3, 3, 4, 4, 4, 5, 6, 6, 6, 7, 7, 7, 8, 8, 9, 10, 10, 10,
    16, 16, 18, 20, 20, 20, 21, 22, 23, 24, 24, 24,
];

const J: [i32; 43] = [
    0, 1, 2, 3, 6, 1, 2, 4, 7, 36, 0, 1, 3, 6, 35, 1, 2, 3, 7, 3, 16, 35, 0, 11, 25, 8, 36, 13, 4,
    10, 14, 29, 50, 57, 20, 35, 48, 21, 53, 39, 26, 40, 58,
];

const N: [f64; 43] = [
    -0.17731742473213e-2,
    -0.17834862292358e-1,
    -0.45996013696365e-1,
    -0.57581259083432e-1,
    -0.50325278727930e-1,
    -0.33032641670203e-4,
    -0.18948987516315e-3,
    -0.39392777243355e-2,
    -0.43797295650573e-1,
    -0.26674547914087e-4,
    0.20481737692309e-7,
    0.43870667284435e-6,
    -0.32277677238570e-4,
    -0.15033924542148e-2,
    -0.40668253562649e-1,
    -0.78847309559367e-9,
    0.12790717852285e-7,
    0.48225372718507e-6,
    0.22922076337661e-5,
    -0.16714766451061e-10,
    -0.21171472321355e-2,
    -0.23895741934104e2,
    -0.59059564324270e-17,
    -0.12621808899101e-5,
    -0.38946842435739e-1,
    0.11256211360459e-10,
    -0.82311340897998e1,
    0.19809712802088e-7,
    0.10406965210174e-18,
    -0.10234747095929e-12,
    -0.10018179379511e-8,
    -0.80882908646985e-10,
    0.10693031879409,
    -0.33662250574171,
    0.89185845355421e-24,
    0.30629316876232e-12,
    -0.42002467698208e-5,
    -0.59056029685639e-25,
    0.37826947613457e-5,
    -0.12768608934681e-14,
    0.73087610595061e-28,
    0.55414715350778e-16,
    -0.94369707241210e-6,
];

/// γ = γ⁰ + γʳ and derivatives at (p [MPa], t [K]).
pub(crate) fn gibbs(p: f64, t: f64) -> Gibbs {
    let pi = p;
    let tau = T_STAR / t;
    let (g0, g0_pi, g0_pipi, g0_tau, g0_tautau) = gibbs::ideal_gas(pi, tau, &J0, &N0);
    let (gr, gr_pi, gr_pipi, gr_tau, gr_tautau, gr_pitau) =
        gibbs::residual(pi, tau, 0.5, &I, &J, &N);
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
            (0.0035, 300.0, 0.394913866e2, 0.254991145e4, 0.852238967e1, 0.427920172e3, 0.191300162e1),
            (0.0035, 700.0, 0.923015898e2, 0.333568375e4, 0.101749996e2, 0.644289068e3, 0.208141274e1),
            (30.0, 700.0, 0.542946619e-2, 0.263149474e4, 0.517540298e1, 0.480386523e3, 0.103505092e2),
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

    #[test]
    fn internal_energy() {
        assert_relative_eq!(gibbs(0.0035, 300.0).u(), 0.241169160e4, max_relative = 1e-8);
        assert_relative_eq!(gibbs(30.0, 700.0).u(), 0.246861076e4, max_relative = 1e-8);
    }
}
