use approx::assert_relative_eq;
use hull_core::calculations::{
    bending_stress_mpa, compute_reactions, find_criticals, sample_sfbm, DEFAULT_SAMPLES,
};
use hull_core::loads::{uniform_load_from_geometry, PointLoad, SEAWATER_UNIT_WEIGHT_KN_PER_M3};

fn cargo_holds() -> Vec<PointLoad> {
    // Six holds, deliberately out of order
    vec![
        PointLoad::new("h4", 80.0, 5886.0),
        PointLoad::new("h1", 20.0, 9810.0),
        PointLoad::new("h6", 120.0, 6867.0),
        PointLoad::new("h2", 40.0, 7848.0),
        PointLoad::new("h5", 100.0, 8829.0),
        PointLoad::new("h3", 60.0, 11772.0),
    ]
}

#[test]
fn reactions_balance_total_load() {
    let cases = [
        (140.0, 0.0),
        (140.0, 350.0),
        (140.0, -1200.0),
        (97.3, 18.25),
    ];
    for (length, w) in cases {
        let loads = cargo_holds();
        let r = compute_reactions(length, w, &loads);
        let total: f64 = w * length + loads.iter().map(|p| p.magnitude_kn).sum::<f64>();
        assert_relative_eq!(r.reaction_a_kn + r.reaction_b_kn, total, max_relative = 1e-6);
    }
}

#[test]
fn zero_load_beam_is_flat() {
    let diagram = sample_sfbm(120.0, 0.0, &[], DEFAULT_SAMPLES);
    assert_eq!(diagram.reactions.reaction_a_kn, 0.0);
    assert!(diagram
        .samples
        .iter()
        .all(|s| s.shear_kn == 0.0 && s.moment_knm == 0.0));
}

#[test]
fn single_central_point_load() {
    let loads = [PointLoad::new("p", 5.0, 100.0)];
    let diagram = sample_sfbm(10.0, 0.0, &loads, DEFAULT_SAMPLES);

    assert_relative_eq!(diagram.reactions.reaction_a_kn, 50.0);
    assert_relative_eq!(diagram.reactions.reaction_b_kn, 50.0);

    let at_load = diagram
        .samples
        .iter()
        .find(|s| (s.x_m - 5.0).abs() < 1e-9)
        .expect("station at x = 5");
    assert_relative_eq!(at_load.moment_knm, 250.0, max_relative = 1e-9);

    let c = find_criticals(&diagram.samples);
    assert_relative_eq!(c.max_moment.value, 250.0, max_relative = 1e-9);
    assert_relative_eq!(c.max_moment.x_m, 5.0, epsilon = 1e-9);

    let zero = c.zero_shear_at_x_m.expect("shear changes sign");
    assert!((zero - 5.0).abs() <= 10.0 / (DEFAULT_SAMPLES - 1) as f64);
}

#[test]
fn shear_steps_by_point_load_magnitude() {
    let length = 140.0;
    let w = 300.0;
    let samples = 141; // 1 m spacing, every hold sits on a station
    let diagram = sample_sfbm(length, w, &cargo_holds(), samples);
    let spacing = length / (samples - 1) as f64;

    for load in cargo_holds() {
        let i = (load.position_m / spacing).round() as usize;
        let before = diagram.samples[i - 1];
        let at = diagram.samples[i];
        // Step = P plus the uniform-load drop over one spacing
        let step = before.shear_kn - at.shear_kn;
        assert_relative_eq!(step, load.magnitude_kn + w * spacing, max_relative = 1e-9);
    }
}

#[test]
fn moment_is_continuous_across_point_loads() {
    let length = 140.0;
    let samples = 1401;
    let w = 300.0;
    let diagram = sample_sfbm(length, w, &cargo_holds(), samples);
    let spacing = length / (samples - 1) as f64;

    // |ΔM| per step is bounded by (max|V| + w·Δx)·Δx, so moment never jumps
    let max_abs_shear = diagram
        .samples
        .iter()
        .map(|s| s.shear_kn.abs())
        .fold(0.0_f64, f64::max);
    for pair in diagram.samples.windows(2) {
        let jump = (pair[1].moment_knm - pair[0].moment_knm).abs();
        assert!(jump <= (max_abs_shear + w * spacing) * spacing * (1.0 + 1e-9));
    }
}

#[test]
fn moment_is_running_integral_of_shear() {
    let diagram = sample_sfbm(140.0, 300.0, &cargo_holds(), 2801);
    let last = diagram.samples.last().unwrap();

    // Trapezoidal ∫V dx from 0 to L equals M(L) − M(0) = 0 up to sampling error
    let integral: f64 = diagram
        .samples
        .windows(2)
        .map(|p| 0.5 * (p[0].shear_kn + p[1].shear_kn) * (p[1].x_m - p[0].x_m))
        .sum();
    let scale = diagram.reactions.reaction_a_kn.abs() * 140.0;
    assert!((integral - last.moment_knm).abs() / scale < 1e-2);
    assert!(last.moment_knm.abs() / scale < 1e-9);
}

#[test]
fn degenerate_geometry_gives_zero_load() {
    let gamma = SEAWATER_UNIT_WEIGHT_KN_PER_M3;
    assert_eq!(uniform_load_from_geometry(0.0, 9.0, 0.8, gamma), 0.0);
    assert_eq!(uniform_load_from_geometry(-3.0, 9.0, 0.8, gamma), 0.0);
    assert_eq!(uniform_load_from_geometry(24.0, f64::NAN, 0.8, gamma), 0.0);
    assert_eq!(uniform_load_from_geometry(24.0, 9.0, f64::INFINITY, gamma), 0.0);
}

#[test]
fn bending_stress_conversion() {
    assert_eq!(bending_stress_mpa(1000.0, 0.0), 0.0);
    assert_eq!(bending_stress_mpa(1000.0, -2.0), 0.0);
    assert_relative_eq!(bending_stress_mpa(1000.0, 1.0), 1.0);
}

#[test]
fn sample_count_boundary() {
    let one = sample_sfbm(50.0, 100.0, &[], 1);
    assert_eq!(one.samples.len(), 2);
    assert!(one.samples.iter().all(|s| s.shear_kn.is_finite()));

    let two = sample_sfbm(50.0, 100.0, &[], 2);
    let xs: Vec<f64> = two.samples.iter().map(|s| s.x_m).collect();
    assert_eq!(xs, vec![0.0, 50.0]);
}

#[test]
fn sampling_is_deterministic() {
    let a = sample_sfbm(140.0, 250.0, &cargo_holds(), DEFAULT_SAMPLES);
    let b = sample_sfbm(140.0, 250.0, &cargo_holds(), DEFAULT_SAMPLES);
    assert_eq!(a, b);
    assert_eq!(find_criticals(&a.samples), find_criticals(&b.samples));
}
