//! Region 1: compressed liquid, 273.15 K ≤ T ≤ 623.15 K, psat(T) ≤ p ≤ 100 MPa.

use super::gibbs::Gibbs;

const P_STAR: f64 = 16.53;
const T_STAR: f64 = 1386.0;

const I: [i32; 34] = [
    0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 1, 1, 1, 1, 2, 2, 2, 2, 2, 3, 3, 3, 4, 4, 4, 5, 8, 8, 21, 23, 29,
    30, 31, 32,
];

const J: [i32; 34] = [
    -2, -1, 0, 1, 2, 3, 4, 5, -9, -7, -1, 0, 1, 3, -3, 0, 1, 3, 17, -4, 0, 6, -5, -2, 10, -8, -11,
    -6, -29, -31, -38, -39, -40, -41,
];

const N: [f64; 34] = [
    0.14632971213167,
    -0.84548187169114,
    -0.37563603672040e1,
    0.33855169168385e1,
    -0.95791963387872,
    0.15772038513228,
    -0.16616417199501e-1,
    0.81214629983568e-3,
    0.28319080123804e-3,
    -0.60706301565874e-3,
    -0.18990068218419e-1,
    -0.32529748770505e-1,
    -0.21841717175414e-1,
    -0.52838357969930e-4,
    -0.47184321073267e-3,
    -0.30001780793026e-3,
    0.47661393906987e-4,
    -0.44141845330846e-5,
    -0.72694996297594e-15,
    -0.31679644845054e-4,
    -0.28270797985312e-5,
    -0.85205128120103e-9,
    -0.22425281908000e-5,
    -0.65171222895601e-6,
    -0.14341729937924e-12,
    -0.40516996860117e-6,
    -0.12734301741641e-8,
    -0.17424871230634e-9,
    -0.68762131295531e-18,
    0.14478307828521e-19,
    0.26335781662795e-22,
    -0.11947622640071e-22,
    0.18228094581404e-23,
    -0.93537087292458e-25,
];

/// γ and derivatives at (p [MPa], t [K]).
pub(crate) fn gibbs(p: f64, t: f64) -> Gibbs {
    let pi = p / P_STAR;
    let tau = T_STAR / t;
    let a = 7.1 - pi;
    let b = tau - 1.222;

    let mut g = 0.0;
    let mut g_pi = 0.0;
    let mut g_pipi = 0.0;
    let mut g_tau = 0.0;
    let mut g_tautau = 0.0;
    let mut g_pitau = 0.0;
    for k in 0..N.len() {
        let (i, j, n) = (I[k], J[k], N[k]);
        let (fi, fj) = (f64::from(i), f64::from(j));
        let a_i = a.powi(i);
        let a_i1 = a.powi(i - 1);
        let b_j = b.powi(j);
        let b_j1 = b.powi(j - 1);
        g += n * a_i * b_j;
        // d/dπ of (7.1 − π)^I flips the sign
        g_pi -= n * fi * a_i1 * b_j;
        g_pipi += n * fi * (fi - 1.0) * a.powi(i - 2) * b_j;
        g_tau += n * a_i * fj * b_j1;
        g_tautau += n * a_i * fj * (fj - 1.0) * b.powi(j - 2);
        g_pitau -= n * fi * a_i1 * fj * b_j1;
    }

    Gibbs {
        t,
        pi,
        tau,
        g,
        g_pi,
        g_pipi,
        g_tau,
        g_tautau,
        g_pitau,
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
            (3.0, 300.0, 0.100215168e-2, 0.115331273e3, 0.392294792, 0.150773921e4, 0.417301218e1),
            (80.0, 300.0, 0.971180894e-3, 0.184142828e3, 0.368563852, 0.163469054e4, 0.401008987e1),
            (3.0, 500.0, 0.120241800e-2, 0.975542239e3, 0.258041912e1, 0.124071337e4, 0.465580682e1),
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
    fn internal_energy_and_cv() {
        let g = gibbs(3.0, 300.0);
        assert_relative_eq!(g.u(), 0.112324818e3, max_relative = 1e-8);
        assert_relative_eq!(g.cv(), 0.412120160e1, max_relative = 1e-8);
        assert!(g.cv() < g.cp());
    }
}
