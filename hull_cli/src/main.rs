//! # Hullstress CLI Application
//!
//! Terminal front end for the longitudinal strength check.
//!
//! ## Usage
//!
//! ```text
//! hull_cli [--json-only] [CONDITION.hlc]
//! ```
//!
//! With a condition file the stored input is evaluated as-is. Without one the
//! principal dimensions and section properties are prompted on stdin and a
//! demonstration cargo plan is applied. Set `RUST_LOG=debug` for kernel logs.

use std::env;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use hull_core::calculations::{SectionProperties, StrengthInput, StrengthResult};
use hull_core::loads::{HullGeometry, LoadKind, PointLoad, UniformLoadSource};
use hull_core::units::{CubicCentimeters, CubicMeters};
use hull_core::{calculate, load_condition, CalcError};
use log::info;

struct Args {
    condition_path: Option<PathBuf>,
    json_only: bool,
}

fn parse_args() -> Args {
    let mut args = Args {
        condition_path: None,
        json_only: false,
    };
    for arg in env::args().skip(1) {
        match arg.as_str() {
            "--json-only" => args.json_only = true,
            _ => args.condition_path = Some(PathBuf::from(arg)),
        }
    }
    args
}

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return default;
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default;
    }

    input.trim().parse().unwrap_or(default)
}

/// Prompt for the hull and section, then apply the demonstration plan.
fn interactive_input() -> StrengthInput {
    let length_m = prompt_f64("Length between perpendiculars (m) [170.0]: ", 170.0);
    let breadth_m = prompt_f64("Breadth (m) [27.0]: ", 27.0);
    let draft_m = prompt_f64("Draft (m) [9.8]: ", 9.8);
    let block_coefficient = prompt_f64("Block coefficient [0.80]: ", 0.80);
    let z_cm3 = prompt_f64("Section modulus (cm³) [12000000]: ", 12_000_000.0);
    let shear_area_m2 = prompt_f64("Shear area (m²) [1.8]: ", 1.8);
    let inertia_m4 = prompt_f64("Moment of inertia (m⁴, 0 = skip deflection) [95.0]: ", 95.0);
    let wave_c = prompt_f64("Wave coefficient (kN/m³, 0 = none) [0.0]: ", 0.0);

    let mut section = SectionProperties::new(
        CubicMeters::from(CubicCentimeters(z_cm3)).value(),
        shear_area_m2,
    );
    if inertia_m4 > 0.0 {
        section = section.with_moment_of_inertia(inertia_m4);
    }

    demo_input(
        HullGeometry::new(length_m, breadth_m, draft_m, block_coefficient),
        section,
        (wave_c > 0.0).then_some(wave_c),
    )
}

/// Five-hold bulk carrier plan plus engine room, floating on its own buoyancy.
fn demo_input(
    geometry: HullGeometry,
    section: SectionProperties,
    wave_coefficient_kn_per_m3: Option<f64>,
) -> StrengthInput {
    let length_m = geometry.length_m;

    // Holds spaced evenly over the middle 70% of the length
    let masses_t = [4200.0, 6100.0, 6800.0, 6100.0, 4200.0];
    let first = length_m * 0.15;
    let spacing = length_m * 0.7 / (masses_t.len() - 1) as f64;
    let mut point_loads: Vec<PointLoad> = masses_t
        .iter()
        .enumerate()
        .map(|(i, &mass)| {
            PointLoad::from_tonnes(format!("hold{}", i + 1), first + spacing * i as f64, mass)
                .with_label(format!("No.{} Hold", i + 1))
                .with_kind(LoadKind::Cargo)
        })
        .collect();
    point_loads.push(
        PointLoad::from_tonnes("er", length_m * 0.05, 1800.0)
            .with_label("Engine room")
            .with_kind(LoadKind::Structure),
    );

    StrengthInput {
        label: "CLI-Demo".to_string(),
        geometry,
        uniform_load: UniformLoadSource::default(),
        point_loads,
        section,
        wave_coefficient_kn_per_m3,
        ..Default::default()
    }
}

fn print_report(input: &StrengthInput, result: &StrengthResult) {
    let g = &input.geometry;
    let c = &result.criticals;
    let r = &result.diagram.reactions;

    println!("═══════════════════════════════════════");
    println!("  LONGITUDINAL STRENGTH: {}", input.label);
    println!("═══════════════════════════════════════");
    println!();
    println!("Hull:");
    println!("  L × B × T: {:.1} × {:.1} × {:.2} m", g.length_m, g.breadth_m, g.draft_m);
    println!("  Cb:        {:.3}", g.block_coefficient);
    println!("  w:         {:.1} kN/m", result.uniform_load_kn_per_m);
    println!("  Loads:     {} point loads, total {:.0} kN", input.point_loads.len(), result.total_load_kn);
    println!();
    println!("Reactions:");
    println!("  R_A = {:.0} kN", r.reaction_a_kn);
    println!("  R_B = {:.0} kN", r.reaction_b_kn);
    println!();
    println!("Diagram ({} stations):", result.diagram.samples.len());
    println!("  V_max = {:.0} kN at x = {:.2} m", c.max_shear.value, c.max_shear.x_m);
    println!("  V_min = {:.0} kN at x = {:.2} m", c.min_shear.value, c.min_shear.x_m);
    println!("  M_max = {:.0} kN·m at x = {:.2} m", c.max_moment.value, c.max_moment.x_m);
    println!("  M_min = {:.0} kN·m at x = {:.2} m", c.min_moment.value, c.min_moment.x_m);
    if result.zero_shear_crossings_m.is_empty() {
        println!("  V = 0:  none");
    } else {
        let xs: Vec<String> = result
            .zero_shear_crossings_m
            .iter()
            .map(|x| format!("{:.2}", x))
            .collect();
        println!("  V = 0:  x = {} m", xs.join(", "));
    }
    println!();
    println!("Bending Moments:");
    println!("  Still water: {:.0} kN·m", result.still_water_bm_knm);
    println!("  Wave:        {:.0} kN·m", result.wave_bm_knm);
    println!("  Design:      {:.0} kN·m", result.design_bm_knm);
    println!("  Sagging:     {:.0} kN·m", result.max_sagging_knm);
    println!("  Hogging:     {:.0} kN·m", result.max_hogging_knm);
    println!();
    println!("Stress Checks:");
    println!(
        "  Bending: {:.1} MPa ({:.0}% of {:.0} MPa yield)",
        result.bending_stress_mpa,
        result.bending_utilization(input.yield_strength_mpa) * 100.0,
        input.yield_strength_mpa
    );
    println!("  Shear:   {:.1} MPa", result.shear_stress_mpa);
    match result.safety_factor {
        Some(sf) => println!("  SF:      {:.2}", sf),
        None => println!("  SF:      n/a (no bending stress)"),
    }
    if let Some(d) = result.deflection_mm {
        println!("  δ_mid:   {:.0} mm (limit L/300 = {:.0} mm)", d, g.length_m * 1000.0 / 300.0);
    }
    if !result.advisories.is_empty() {
        println!();
        println!("Advisories:");
        for advisory in &result.advisories {
            println!("  - {}", advisory.message());
        }
    }
    println!();
    println!("═══════════════════════════════════════");
    println!("  RESULT: {} {}", result.status, status_icon(result.passes()));
    println!("═══════════════════════════════════════");
}

fn print_error(e: &CalcError) {
    eprintln!("Error: {}", e);
    if let Ok(json) = serde_json::to_string_pretty(e) {
        eprintln!();
        eprintln!("Error JSON:");
        eprintln!("{}", json);
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let args = parse_args();

    let input = match &args.condition_path {
        Some(path) => match load_condition(path) {
            Ok(condition) => {
                info!(
                    "Evaluating '{}' of {} from {}",
                    condition.meta.condition_name,
                    condition.meta.vessel,
                    path.display()
                );
                condition.input
            }
            Err(e) => {
                print_error(&e);
                return ExitCode::FAILURE;
            }
        },
        None => {
            if !args.json_only {
                println!("Hullstress CLI - Longitudinal Strength Calculator");
                println!("=================================================");
                println!();
            }
            interactive_input()
        }
    };

    match calculate(&input) {
        Ok(result) => {
            if !args.json_only {
                println!();
                print_report(&input, &result);
                println!();
                println!("JSON Output:");
            }
            if let Ok(json) = serde_json::to_string_pretty(&result) {
                println!("{}", json);
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            print_error(&e);
            ExitCode::FAILURE
        }
    }
}

fn status_icon(pass: bool) -> &'static str {
    if pass { "[OK]" } else { "[FAIL]" }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hull_core::calculations::StrengthStatus;

    #[test]
    fn test_demo_plan_evaluates() {
        let section = SectionProperties::new(12.0, 1.8).with_moment_of_inertia(95.0);
        let input = demo_input(HullGeometry::default(), section, None);

        assert_eq!(input.point_loads.len(), 6);
        assert!(input.validate().is_ok());

        let result = calculate(&input).unwrap();
        assert!(result.uniform_load_kn_per_m < 0.0);
        assert!(result.diagram.is_finite());
        assert!(result.deflection_mm.is_some());
        assert!(result.design_bm_knm > 0.0);
        assert_eq!(result.passes(), result.status != StrengthStatus::Unsafe);
    }

    #[test]
    fn test_demo_plan_scales_with_length() {
        let input = demo_input(
            HullGeometry::new(100.0, 18.0, 7.0, 0.75),
            SectionProperties::new(6.0, 1.0),
            Some(0.01),
        );
        let positions: Vec<f64> = input.point_loads.iter().map(|p| p.position_m).collect();
        assert!(positions.iter().all(|&x| (0.0..=100.0).contains(&x)));
        assert!((positions[0] - 15.0).abs() < 1e-9);
        assert!((positions[4] - 85.0).abs() < 1e-9);

        let result = calculate(&input).unwrap();
        assert!(result.wave_bm_knm > 0.0);
    }
}
