use watprop::{UnitSystem, Water};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    // ================================================================
    //  1. SI: MPa, °C, kJ/kg
    // ================================================================
    println!("=== Saturation table (SI) ===\n");
    let si = Water::with_units(Some(UnitSystem::Si), Some(UnitSystem::Si));

    println!("{:>8} {:>10} {:>10} {:>10} {:>10}", "P MPa", "Tsat °C", "hf", "hg", "hfg");
    for p in [0.01, 0.1, 0.5, 1.0, 5.0, 10.0, 15.0, 20.0, 22.0] {
        let sat = si.saturation_p(p)?;
        println!(
            "{:>8.3} {:>10.3} {:>10.2} {:>10.2} {:>10.2}",
            p,
            sat.temperature,
            sat.hf,
            sat.hg,
            sat.hfg()
        );
    }

    let props = si.props_pt(10.0, 500.0)?;
    println!("\nSuperheated steam at 10 MPa, 500 °C:\n{props}\n");

    // Wet steam: enthalpy halfway across the dome at 1 MPa
    let h = 0.5 * (si.hf_p(1.0)? + si.hg_p(1.0)?);
    let wet = si.props_ph(1.0, h)?;
    println!("Wet steam at 1 MPa, h = {h:.2} kJ/kg:\n{wet}\n");

    let tr = si.transport_pt(0.1, 25.0)?;
    println!("Liquid at 0.1 MPa, 25 °C:\n{tr}\n");

    // ================================================================
    //  2. English (the default): psia, °F, Btu/lbm
    // ================================================================
    println!("=== Compressed liquid (English) ===\n");
    let en = Water::new();

    let props = en.props_pt(2000.0, 300.0)?;
    println!("2000 psia, 300 °F:\n{props}\n");

    let h = props.enthalpy;
    let t = en.t_ph(2000.0, h)?;
    println!("T_PH(2000 psia, {h:.3} Btu/lbm) = {t:.4} °F");

    let tsat = en.t_p(14.696)?;
    println!("Tsat(14.696 psia) = {tsat:.3} °F");

    // Out-of-range inputs come back as errors
    if let Err(e) = en.h_pt(20_000.0, 300.0) {
        println!("h_pt(20000 psia, 300 °F): {e}");
    }

    Ok(())
}
