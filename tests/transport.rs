use approx::assert_relative_eq;
use watprop::{PropertyFamily, UnitSystem, Water};

fn si() -> Water {
    Water::with_units(Some(UnitSystem::Si), Some(UnitSystem::Si))
}

// (t °C, p MPa, viscosity µPa·s, conductivity mW/(m·K))
const TABLE: [(f64, f64, f64, f64); 6] = [
    (25.0, 0.1, 890.1, 607.5),
    (200.0, 0.1, 16.18, 33.4),
    (800.0, 0.1, 40.38, 107.7),
    (25.0, 100.0, 889.7, 656.4),
    (200.0, 100.0, 155.9, 733.2),
    (800.0, 100.0, 52.10, 213.2),
];

// ═══════════════════════════════════════════════════════════════════
//  Reference values
// ═══════════════════════════════════════════════════════════════════

#[test]
fn viscosity_reference_values() {
    let w = si();
    for (t, p, vis, _) in TABLE {
        assert_relative_eq!(w.vis_pt(p, t).unwrap(), vis, max_relative = 1e-3);
    }
}

#[test]
fn conductivity_reference_values() {
    let w = si();
    for (t, p, _, k) in TABLE {
        assert_relative_eq!(w.k_pt(p, t).unwrap(), k, max_relative = 1e-3);
    }
}

#[test]
fn transport_pt_bundles_both() {
    let w = si();
    let tr = w.transport_pt(0.1, 25.0).unwrap();
    assert_eq!(tr.units, UnitSystem::Si);
    assert_eq!(tr.viscosity, w.vis_pt(0.1, 25.0).unwrap());
    assert_eq!(tr.thermal_conductivity, w.k_pt(0.1, 25.0).unwrap());
    let text = tr.to_string();
    assert!(text.contains("µPa·s"), "{text}");
    assert!(text.contains("mW/(m·K)"), "{text}");
}

#[test]
fn viscosity_drops_with_temperature_in_the_liquid() {
    let w = si();
    let cold = w.vis_pt(1.0, 20.0).unwrap();
    let warm = w.vis_pt(1.0, 80.0).unwrap();
    assert!(warm < cold, "vis(80 °C) = {warm:.2} should be < vis(20 °C) = {cold:.2}");
}

// ═══════════════════════════════════════════════════════════════════
//  Validity limits
// ═══════════════════════════════════════════════════════════════════

#[test]
fn viscosity_undefined_in_upper_region_5() {
    let w = si();
    for p in [50.0, 1e-3] {
        let err = w.vis_pt(p, 2000.0).unwrap_err();
        assert_eq!(
            err.to_string(),
            "shear viscosity calculation is not valid in portions of Region 5"
        );
        assert_eq!(err.family(), Some(PropertyFamily::Viscosity));
    }
    assert!(w.vis_pt(50.0, 900.0).is_ok());
}

#[test]
fn conductivity_stops_just_above_800_c() {
    let w = si();
    assert!(w.k_pt(1.0, 802.0).is_ok());
    let err = w.k_pt(1.0, 802.1).unwrap_err();
    assert_eq!(err.to_string(), "invalid temperature in k_pt");
    let err = w.k_pt(100.5, 25.0).unwrap_err();
    assert_eq!(err.to_string(), "invalid pressure in k_pt");
    assert_eq!(err.family(), Some(PropertyFamily::Conductivity));
}

#[test]
fn english_transport_units() {
    let si_out = si();
    let en_out = Water::with_units(Some(UnitSystem::Si), Some(UnitSystem::English));
    let vis_si = si_out.vis_pt(0.1, 25.0).unwrap();
    let vis_en = en_out.vis_pt(0.1, 25.0).unwrap();
    // µPa·s → lbm/(ft·s)
    assert_relative_eq!(vis_en, vis_si * 1e-6 * 0.671969, max_relative = 1e-12);
    let k_si = si_out.k_pt(0.1, 25.0).unwrap();
    let k_en = en_out.k_pt(0.1, 25.0).unwrap();
    // mW/(m·K) → Btu/(hr·ft·R)
    assert_relative_eq!(k_en, k_si * 1e-3 * 0.5777893, max_relative = 1e-12);
}
