//! Backward equations T(p, h) and T(p, s) for Regions 1, 2 and 3.
//!
//! These are the IF97 supplementary fits. They are accurate to a few
//! millikelvin and serve as starting points for the forward Newton
//! refinement in [`super::inverse`].

/// Coefficients of a polynomial `Σ n · x^i · y^j`.
struct Series {
    i: &'static [i32],
    j: &'static [i32],
    n: &'static [f64],
}

impl Series {
    fn eval(&self, x: f64, y: f64) -> f64 {
        self.i
            .iter()
            .zip(self.j)
            .zip(self.n)
            .map(|((&i, &j), &n)| n * x.powi(i) * y.powi(j))
            .sum()
    }
}

// ── Region 1 ────────────────────────────────────────────────────────

pub(crate) fn t1_ph(p: f64, h: f64) -> f64 {
    T1_PH.eval(p, h / 2500.0 + 1.0)
}

pub(crate) fn t1_ps(p: f64, s: f64) -> f64 {
    T1_PS.eval(p, s + 2.0)
}

// ── Region 2 ────────────────────────────────────────────────────────

/// Pressure on the 2b/2c subregion boundary at enthalpy `h`.
fn b2bc_p(h: f64) -> f64 {
    905.84278514723 - 0.67955786399241 * h + 1.2809002730136e-4 * h * h
}

pub(crate) fn t2_ph(p: f64, h: f64) -> f64 {
    let eta = h / 2000.0;
    if p < 4.0 {
        T2A_PH.eval(p, eta - 2.1)
    } else if p < b2bc_p(h) {
        T2B_PH.eval(p - 2.0, eta - 2.6)
    } else {
        T2C_PH.eval(p + 25.0, eta - 1.8)
    }
}

pub(crate) fn t2_ps(p: f64, s: f64) -> f64 {
    if p < 4.0 {
        let sigma = s / 2.0 - 2.0;
        T2A_PS_I
            .iter()
            .zip(&T2A_PS_J)
            .zip(&T2A_PS_N)
            .map(|((&i, &j), &n)| n * p.powf(i) * sigma.powi(j))
            .sum()
    } else if s < 5.85 {
        T2C_PS.eval(p, 2.0 - s / 2.9251)
    } else {
        T2B_PS.eval(p, 10.0 - s / 0.7853)
    }
}

// ── Region 3 ────────────────────────────────────────────────────────

/// Enthalpy on the 3a/3b subregion boundary at pressure `p`.
fn h3ab(p: f64) -> f64 {
    2014.64004206875 + 3.74696550136983 * p - 2.19921901054187e-2 * p * p
        + 8.7513168600995e-5 * p * p * p
}

/// Entropy on the 3a/3b subregion boundary (the critical entropy).
const S3AB: f64 = 4.41202148223476;

pub(crate) fn t3_ph(p: f64, h: f64) -> f64 {
    let pi = p / 100.0;
    if h < h3ab(p) {
        760.0 * T3A_PH.eval(pi + 0.240, h / 2300.0 - 0.615)
    } else {
        860.0 * T3B_PH.eval(pi + 0.298, h / 2800.0 - 0.720)
    }
}

pub(crate) fn t3_ps(p: f64, s: f64) -> f64 {
    let pi = p / 100.0;
    if s <= S3AB {
        760.0 * T3A_PS.eval(pi + 0.240, s / 4.4 - 0.703)
    } else {
        860.0 * T3B_PS.eval(pi + 0.760, s / 5.3 - 0.818)
    }
}

// ── Coefficients ────────────────────────────────────────────────────

const T1_PH: Series = Series {
    i: &[
        0, 0, 0, 0, 0, 0, 1, 1, 1, 1, 1, 1, 1, 2, 2, 3, 3, 4, 5, 6,
    ],
    j: &[
        0, 1, 2, 6, 22, 32, 0, 1, 2, 3, 4, 10, 32, 10, 32, 10, 32, 32, 32, 32,
    ],
    n: &[
        -238.72489924521,
        404.21188637945,
        113.49746881718,
        -5.8457616048039,
        -1.528548241314e-4,
        -1.0866707695377e-6,
        -13.391744872602,
        43.211039183559,
        -54.010067170506,
        30.535892203916,
        -6.5964749423638,
        9.3965400878363e-3,
        1.157364750534e-7,
        -2.5858641282073e-5,
        -4.0644363084799e-9,
        6.6456186191635e-8,
        8.0670734103027e-11,
        -9.3477771213947e-13,
        5.8265442020601e-15,
        -1.5020185953503e-17,
    ],
};

const T1_PS: Series = Series {
    i: &[
        0, 0, 0, 0, 0, 0, 1, 1, 1, 1, 1, 1, 2, 2, 2, 2, 2, 3, 3, 4,
    ],
    j: &[
        0, 1, 2, 3, 11, 31, 0, 1, 2, 3, 12, 31, 0, 1, 2, 9, 31, 10, 32, 32,
    ],
    n: &[
        174.78268058307,
        34.806930892873,
        6.5292584978455,
        0.33039981775489,
        -1.9281382923196e-7,
        -2.4909197244573e-23,
        -0.26107636489332,
        0.22592965981586,
        -0.064256463395226,
        7.8876289270526e-3,
        3.5672110607366e-10,
        1.7332496994895e-24,
        5.6608900654837e-4,
        -3.2635483139717e-4,
        4.4778286690632e-5,
        -5.1322156908507e-10,
        -4.2522657042207e-26,
        2.6400441360689e-13,
        7.8124600459723e-29,
        -3.0732199903668e-31,
    ],
};

const T2A_PH: Series = Series {
    i: &[
        0, 0, 0, 0, 0, 0, 1, 1, 1, 1, 1, 1, 1, 1, 1, 2, 2, 2, 2, 2, 2, 2, 2, 3, 3, 4, 4, 4, 5,
        5, 5, 6, 6, 7,
    ],
    j: &[
        0, 1, 2, 3, 7, 20, 0, 1, 2, 3, 7, 9, 11, 18, 44, 0, 2, 7, 36, 38, 40, 42, 44, 24, 44,
        12, 32, 44, 32, 36, 42, 34, 44, 28,
    ],
    n: &[
        1089.8952318288,
        849.51654495535,
        -107.81748091826,
        33.153654801263,
        -7.4232016790248,
        11.765048724356,
        1.844574935579,
        -4.1792700549624,
        6.2478196935812,
        -17.344563108114,
        -200.58176862096,
        271.96065473796,
        -455.11318285818,
        3091.9688604755,
        252266.40357872,
        -6.1707422868339e-3,
        -0.31078046629583,
        11.670873077107,
        128127984.04046,
        -985549096.23276,
        2822454697.3002,
        -3594897141.0703,
        1722734991.3197,
        -13551.334240775,
        12848734.66465,
        1.3865724283226,
        235988.32556514,
        -13105236.545054,
        7399.9835474766,
        -551966.9703006,
        3715408.5996233,
        19127.72923966,
        -415351.64835634,
        -62.459855192507,
    ],
};

const T2B_PH: Series = Series {
    i: &[
        0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 1, 1, 1, 1, 1, 1, 2, 2, 2, 2, 3, 3, 3, 3, 4, 4, 4, 4, 4,
        4, 5, 5, 5, 6, 7, 7, 9, 9,
    ],
    j: &[
        0, 1, 2, 12, 18, 24, 28, 40, 0, 2, 6, 12, 18, 24, 28, 40, 2, 8, 18, 40, 1, 2, 12, 24,
        2, 12, 18, 24, 28, 40, 18, 24, 40, 28, 2, 28, 1, 40,
    ],
    n: &[
        1489.5041079516,
        743.07798314034,
        -97.708318797837,
        2.4742464705674,
        -0.63281320016026,
        1.1385952129658,
        -0.47811863648625,
        8.5208123431544e-3,
        0.93747147377932,
        3.3593118604916,
        3.3809355601454,
        0.16844539671904,
        0.73875745236695,
        -0.47128737436186,
        0.15020273139707,
        -2.176411421975e-3,
        -0.021810755324761,
        -0.10829784403677,
        -0.046333324635812,
        7.1280351959551e-5,
        1.1032831789999e-4,
        1.8955248387902e-4,
        3.0891541160537e-3,
        1.3555504554949e-3,
        2.8640237477456e-7,
        -1.0779857357512e-5,
        -7.6462712454814e-5,
        1.4052392818316e-5,
        -3.1083814331434e-5,
        -1.0302738212103e-6,
        2.821728163504e-7,
        1.2704902271945e-6,
        7.3803353468292e-8,
        -1.1030139238909e-8,
        -8.1456365207833e-14,
        -2.5180545682962e-11,
        -1.7565233969407e-18,
        8.6934156344163e-15,
    ],
};

const T2C_PH: Series = Series {
    i: &[
        -7, -7, -6, -6, -5, -5, -2, -2, -1, -1, 0, 0, 1, 1, 2, 6, 6, 6, 6, 6, 6, 6, 6,
    ],
    j: &[
        0, 4, 0, 2, 0, 2, 0, 1, 0, 2, 0, 1, 4, 8, 4, 0, 1, 4, 10, 12, 16, 20, 22,
    ],
    n: &[
        -3236839855524.2,
        7326335090218.1,
        358250899454.47,
        -583401318515.9,
        -10783068217.47,
        20825544563.171,
        610747.83564516,
        859777.2253558,
        -25745.72360417,
        31081.088422714,
        1208.2315865936,
        482.19755109255,
        3.7966001272486,
        -10.842984880077,
        -0.04536417267666,
        1.4559115658698e-13,
        1.126159740723e-12,
        -1.7804982240686e-11,
        1.2324579690832e-7,
        -1.1606921130984e-6,
        2.7846367088554e-5,
        -5.9270038474176e-4,
        1.2918582991878e-3,
    ],
};

// Subregion 2a has fractional pressure exponents.
const T2A_PS_I: [f64; 46] = [
    -1.5, -1.5, -1.5, -1.5, -1.5, -1.5, -1.25, -1.25, -1.25, -1.0, -1.0, -1.0, -1.0, -1.0,
    -1.0, -0.75, -0.75, -0.5, -0.5, -0.5, -0.5, -0.25, -0.25, -0.25, -0.25, 0.25, 0.25, 0.25,
    0.25, 0.5, 0.5, 0.5, 0.5, 0.5, 0.5, 0.5, 0.75, 0.75, 0.75, 0.75, 1.0, 1.0, 1.25, 1.25, 1.5,
    1.5,
];

const T2A_PS_J: [i32; 46] = [
    -24, -23, -19, -13, -11, -10, -19, -15, -6, -26, -21, -17, -16, -9, -8, -15, -14, -26,
    -13, -9, -7, -27, -25, -11, -6, 1, 4, 8, 11, 0, 1, 5, 6, 10, 14, 16, 0, 4, 9, 17, 7,
    18, 3, 15, 5, 18,
];

const T2A_PS_N: [f64; 46] = [
    -392359.83861984,
    515265.7382727,
    40482.443161048,
    -321.93790923902,
    96.961424218694,
    -22.867846371773,
    -449429.14124357,
    -5011.8336020166,
    0.35684463560015,
    44235.33584819,
    -13673.388811708,
    421632.60207864,
    22516.925837475,
    474.42144865646,
    -149.31130797647,
    -197811.26320452,
    -23554.39947076,
    -19070.616302076,
    55375.669883164,
    3829.3691437363,
    -603.91860580567,
    1936.3102620331,
    4266.064369861,
    -5978.0638872718,
    -704.01463926862,
    338.36784107553,
    20.862786635187,
    0.033834172656196,
    -4.3124428414893e-5,
    166.53791356412,
    -139.86292055898,
    -0.78849547999872,
    0.072132411753872,
    -5.9754839398283e-3,
    -1.2141358953904e-5,
    2.3227096733871e-7,
    -10.538463566194,
    2.0718925496502,
    -0.072193155260427,
    2.074988708112e-7,
    -0.018340657911379,
    2.9036272348696e-7,
    0.21037527893619,
    2.5681239729999e-4,
    -0.012799002933781,
    -8.2198102652018e-6,
];

const T2B_PS: Series = Series {
    i: &[
        -6, -6, -5, -5, -4, -4, -4, -3, -3, -3, -3, -2, -2, -2, -2, -1, -1, -1, -1, -1, 0, 0,
        0, 0, 0, 0, 0, 1, 1, 1, 1, 1, 1, 2, 2, 2, 3, 3, 3, 4, 4, 5, 5, 5,
    ],
    j: &[
        0, 11, 0, 11, 0, 1, 11, 0, 1, 11, 12, 0, 1, 6, 10, 0, 1, 5, 8, 9, 0, 1, 2, 4, 5, 6, 9,
        0, 1, 2, 3, 7, 8, 0, 1, 5, 0, 1, 3, 0, 1, 0, 1, 2,
    ],
    n: &[
        316876.65083497,
        20.864175881858,
        -398593.99803599,
        -21.816058518877,
        223697.85194242,
        -2784.1703445817,
        9.920743607148,
        -75197.512299157,
        2970.8605951158,
        -3.4406878548526,
        0.38815564249115,
        17511.29508575,
        -1423.7112854449,
        1.0943803364167,
        0.89971619308495,
        -3375.9740098958,
        471.62885818355,
        -1.9188241993679,
        0.41078580492196,
        -0.33465378172097,
        1387.0034777505,
        -406.63326195838,
        41.72734715961,
        2.1932549434532,
        -1.0320050009077,
        0.35882943516703,
        5.2511453726066e-3,
        12.838916450705,
        -2.8642437219381,
        0.56912683664855,
        -0.099962954584931,
        -3.2632037778459e-3,
        2.3320922576723e-4,
        -0.1533480985745,
        0.029072288239902,
        3.7534702741167e-4,
        1.7296691702411e-3,
        -3.8556050844504e-4,
        -3.5017712292608e-5,
        -1.4566393631492e-5,
        5.6420857267269e-6,
        4.1286150074605e-8,
        -2.0684671118824e-8,
        1.6409393674725e-9,
    ],
};

const T2C_PS: Series = Series {
    i: &[
        -2, -2, -1, 0, 0, 0, 0, 1, 1, 1, 1, 2, 2, 2, 3, 3, 3, 4, 4, 4, 5, 5, 5, 6, 6, 7, 7, 7,
        7, 7,
    ],
    j: &[
        0, 1, 0, 0, 1, 2, 3, 0, 1, 3, 4, 0, 1, 2, 0, 1, 5, 0, 1, 4, 0, 1, 2, 0, 1, 0, 1, 3, 4,
        5,
    ],
    n: &[
        909.68501005365,
        2404.566708842,
        -591.6232638713,
        541.45404128074,
        -270.98308411192,
        979.76525097926,
        -469.66772959435,
        14.399274604723,
        -19.104204230429,
        5.3299167111971,
        -21.252975375934,
        -0.3114733441376,
        0.60334840894623,
        -0.042764839702509,
        5.8185597255259e-3,
        -0.014597008284753,
        5.6631175631027e-3,
        -7.6155864584577e-5,
        2.2440342919332e-4,
        -1.2561095013413e-5,
        6.3323132660934e-7,
        -2.0541989675375e-6,
        3.6405370390082e-8,
        -2.9759897789215e-9,
        1.0136618529763e-8,
        5.9925719692351e-12,
        -2.0677870105164e-11,
        -2.0874278181886e-11,
        1.0162166825089e-10,
        -1.6429828281347e-10,
    ],
};

const T3A_PH: Series = Series {
    i: &[
        -12, -12, -12, -12, -12, -12, -12, -12, -10, -10, -10, -8, -8, -8, -8, -5, -3, -2, -2,
        -2, -1, -1, 0, 0, 1, 3, 3, 4, 4, 10, 12,
    ],
    j: &[
        0, 1, 2, 6, 14, 16, 20, 22, 1, 5, 12, 0, 2, 4, 10, 2, 0, 1, 3, 4, 0, 2, 0, 1, 1, 0, 1,
        0, 3, 4, 5,
    ],
    n: &[
        -1.33645667811215e-7,
        4.55912656802978e-6,
        -1.46294640700979e-5,
        6.3934131297008e-3,
        372.783927268847,
        -7186.54377460447,
        573494.7521034,
        -2675693.29111439,
        -3.34066283302614e-5,
        -2.45479214069597e-2,
        47.8087847764996,
        7.64664131818904e-6,
        1.28350627676972e-3,
        1.71219081377331e-2,
        -8.51007304583213,
        -1.36513461629781e-2,
        -3.84460997596657e-6,
        3.37423807911655e-3,
        -0.551624873066791,
        0.72920227710747,
        -9.92522757376041e-3,
        -0.119308831407288,
        0.793929190615421,
        0.454270731799386,
        0.20999859125991,
        -6.42109823904738e-3,
        -0.023515586860454,
        2.52233108341612e-3,
        -7.64885133368119e-3,
        1.36176427574291e-2,
        -1.33027883575669e-2,
    ],
};

const T3B_PH: Series = Series {
    i: &[
        -12, -12, -10, -10, -10, -10, -10, -8, -8, -8, -8, -8, -6, -6, -6, -4, -4, -3, -2, -2,
        -1, -1, -1, -1, -1, -1, 0, 0, 1, 3, 5, 6, 8,
    ],
    j: &[
        0, 1, 0, 1, 5, 10, 12, 0, 1, 2, 4, 10, 0, 1, 2, 0, 1, 5, 0, 4, 2, 4, 6, 10, 14, 16, 0,
        2, 1, 1, 1, 1, 1,
    ],
    n: &[
        3.2325457364492e-5,
        -1.27575556587181e-4,
        -4.75851877356068e-4,
        1.56183014181602e-3,
        0.105724860113781,
        -85.8514221132534,
        724.140095480911,
        2.96475810273257e-3,
        -5.92721983365988e-3,
        -1.26305422818666e-2,
        -0.115716196364853,
        84.9000969739595,
        -1.08602260086615e-2,
        1.54304475328851e-2,
        7.50455441524466e-2,
        2.52520973612982e-2,
        -6.02507901232996e-2,
        -3.07622221350501,
        -5.74011959864879e-2,
        5.03471360939849,
        -0.925081888584834,
        3.91733882917546,
        -77.314600713019,
        9493.08762098587,
        -1410437.19679409,
        8491662.30819026,
        0.861095729446704,
        0.32334644281172,
        0.873281936020439,
        -0.436653048526683,
        0.286596714529479,
        -0.131778331276228,
        6.76682064330275e-3,
    ],
};

const T3A_PS: Series = Series {
    i: &[
        -12, -12, -10, -10, -10, -10, -8, -8, -8, -8, -6, -6, -6, -5, -5, -5, -4, -4, -4, -2,
        -2, -1, -1, 0, 0, 0, 1, 2, 2, 3, 8, 8, 10,
    ],
    j: &[
        28, 32, 4, 10, 12, 14, 5, 7, 8, 28, 2, 6, 32, 0, 14, 32, 6, 10, 36, 1, 4, 1, 6, 0, 1,
        4, 0, 0, 3, 2, 0, 1, 2,
    ],
    n: &[
        1500420082.63875,
        -159397258480.424,
        5.02181140217975e-4,
        -67.2057767855466,
        1450.58545404456,
        -8238.8953488889,
        -0.154852214233853,
        11.2305046746695,
        -29.7000213482822,
        43856513263.5495,
        1.37837838635464e-3,
        -2.97478527157462,
        9717779473494.13,
        -5.71527767052398e-5,
        28830.794977842,
        -74442828926270.3,
        12.8017324848921,
        -368.275545889071,
        6.64768904779177e15,
        0.044935925195888,
        -4.22897836099655,
        -0.240614376434179,
        -4.74341365254924,
        0.72409399912611,
        0.923874349695897,
        3.99043655281015,
        3.84066651868009e-2,
        -3.59344365571848e-3,
        -0.735196448821653,
        0.188367048396131,
        1.41064266818704e-4,
        -2.57418501496337e-3,
        1.23220024851555e-3,
    ],
};

const T3B_PS: Series = Series {
    i: &[
        -12, -12, -12, -12, -8, -8, -8, -6, -6, -6, -5, -5, -5, -5, -5, -4, -3, -3, -2, 0, 2,
        3, 4, 5, 6, 8, 12, 14,
    ],
    j: &[
        1, 3, 4, 7, 0, 1, 3, 0, 2, 4, 0, 1, 2, 4, 6, 12, 1, 6, 2, 0, 1, 1, 0, 24, 0, 3, 1, 2,
    ],
    n: &[
        0.52711170160166,
        -40.1317830052742,
        153.020073134484,
        -2247.99398218827,
        -0.193993484669048,
        -1.40467557893768,
        42.6799878114024,
        0.752810643416743,
        22.6657238616417,
        -622.873556909932,
        -0.660823667935396,
        0.841267087271658,
        -25.3717501764397,
        485.708963532948,
        880.531517490555,
        2650155.92794626,
        -0.359287150025783,
        -656.991567673753,
        2.41768149185367,
        0.856873461222588,
        0.655143675313458,
        -0.213535213206406,
        5.62974957606348e-3,
        -316955725450471.0,
        -6.99997000152457e-4,
        1.19845803210767e-2,
        1.93848122022095e-5,
        -2.15095749182309e-5,
    ],
};

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn region1_checkpoints() {
        assert_relative_eq!(t1_ph(3.0, 500.0), 0.391798509e3, max_relative = 1e-8);
        assert_relative_eq!(t1_ph(80.0, 500.0), 0.378108626e3, max_relative = 1e-8);
        assert_relative_eq!(t1_ph(80.0, 1500.0), 0.611041229e3, max_relative = 1e-8);
        assert_relative_eq!(t1_ps(3.0, 0.5), 0.307842258e3, max_relative = 1e-8);
        assert_relative_eq!(t1_ps(80.0, 0.5), 0.309979785e3, max_relative = 1e-8);
        assert_relative_eq!(t1_ps(80.0, 3.0), 0.565899909e3, max_relative = 1e-8);
    }

    #[test]
    fn region2_ph_subregions() {
        assert_relative_eq!(t2_ph(0.001, 3000.0), 0.534433241e3, max_relative = 1e-8);
        assert_relative_eq!(t2_ph(3.0, 4000.0), 0.101077577e4, max_relative = 1e-8);
        assert_relative_eq!(t2_ph(5.0, 3500.0), 0.801299102e3, max_relative = 1e-8);
        assert_relative_eq!(t2_ph(25.0, 3500.0), 0.875279054e3, max_relative = 1e-8);
        assert_relative_eq!(t2_ph(40.0, 2700.0), 0.743056411e3, max_relative = 1e-8);
        assert_relative_eq!(t2_ph(60.0, 3200.0), 0.882756860e3, max_relative = 1e-8);
    }

    #[test]
    fn region2_ps_subregions() {
        assert_relative_eq!(t2_ps(0.1, 7.5), 0.399517097e3, max_relative = 1e-8);
        assert_relative_eq!(t2_ps(2.5, 8.0), 0.103984917e4, max_relative = 1e-8);
        assert_relative_eq!(t2_ps(8.0, 6.0), 0.600484040e3, max_relative = 1e-8);
        assert_relative_eq!(t2_ps(90.0, 6.0), 0.103801126e4, max_relative = 1e-8);
        assert_relative_eq!(t2_ps(20.0, 5.75), 0.697992849e3, max_relative = 1e-8);
        assert_relative_eq!(t2_ps(80.0, 5.75), 0.949017998e3, max_relative = 1e-8);
    }

    #[test]
    fn region3_checkpoints() {
        assert_relative_eq!(t3_ph(20.0, 1700.0), 0.6293083892e3, max_relative = 1e-8);
        assert_relative_eq!(t3_ph(100.0, 2100.0), 0.7336163014e3, max_relative = 1e-8);
        assert_relative_eq!(t3_ph(20.0, 2500.0), 0.6418418053e3, max_relative = 1e-8);
        assert_relative_eq!(t3_ph(100.0, 2700.0), 0.8420460876e3, max_relative = 1e-8);
        assert_relative_eq!(t3_ps(20.0, 3.8), 0.6282959869e3, max_relative = 1e-8);
        assert_relative_eq!(t3_ps(100.0, 5.0), 0.8474332825e3, max_relative = 1e-8);
    }
}
