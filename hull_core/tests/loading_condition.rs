use approx::assert_relative_eq;
use hull_core::calculations::StrengthStatus;
use hull_core::condition::LoadingCondition;
use hull_core::file_io::{load_condition, save_condition};

const CONDITION_JSON: &str = r#"{
  "meta": {
    "version": "0.1.0",
    "vessel": "MV Northern Star",
    "condition_name": "Homogeneous departure",
    "prepared_by": "Chief Officer",
    "created": "2025-03-14T08:00:00Z",
    "modified": "2025-03-14T08:30:00Z"
  },
  "input": {
    "label": "LC-1",
    "geometry": { "length_m": 100.0, "breadth_m": 20.0, "draft_m": 8.0, "block_coefficient": 0.75 },
    "uniform_load": { "type": "Direct", "kn_per_m": 0.0 },
    "point_loads": [
      { "id": "h2", "position_m": 70.0, "magnitude_kn": 20000.0, "kind": "Cargo", "label": "No.2 Hold" },
      { "id": "h1", "position_m": 30.0, "magnitude_kn": 20000.0, "kind": "Cargo", "label": "No.1 Hold" }
    ],
    "section": { "section_modulus_m3": 8.0, "shear_area_m2": 1.2 },
    "wave_coefficient_kn_per_m3": 0.01
  }
}"#;

#[test]
fn evaluates_condition_from_json() {
    let condition: LoadingCondition = serde_json::from_str(CONDITION_JSON).unwrap();
    let result = condition.evaluate().unwrap();

    // Symmetric holds: R_A = R_B = 20 000 kN, constant moment 600 000 kN·m between them
    assert_relative_eq!(result.diagram.reactions.reaction_a_kn, 20_000.0, max_relative = 1e-9);
    assert_relative_eq!(result.still_water_bm_knm, 600_000.0, max_relative = 1e-9);
    assert_relative_eq!(result.max_sagging_knm, 600_000.0, max_relative = 1e-9);

    // WIBM = 0.01 × 100² × 20 × 1.45 = 2900
    assert_relative_eq!(result.wave_bm_knm, 2900.0, max_relative = 1e-9);
    assert_relative_eq!(result.design_bm_knm, 602_900.0, max_relative = 1e-9);

    // σ = 602 900 / 8 / 1000 = 75.36 MPa, SF = 235 / 75.36 ≈ 3.12
    assert_relative_eq!(result.bending_stress_mpa, 75.3625, max_relative = 1e-9);
    assert_eq!(result.status, StrengthStatus::Safe);

    // Zero shear over the whole midbody run between the holds
    let first = result.criticals.zero_shear_at_x_m.unwrap();
    assert!(first >= 29.0 && first <= 30.0);
}

#[test]
fn saved_condition_evaluates_identically() {
    let condition: LoadingCondition = serde_json::from_str(CONDITION_JSON).unwrap();
    let path = std::env::temp_dir().join("hullstress_it_departure.hlc");

    save_condition(&condition, &path).unwrap();
    let loaded = load_condition(&path).unwrap();
    let _ = std::fs::remove_file(&path);

    let a = condition.evaluate().unwrap();
    let b = loaded.evaluate().unwrap();
    assert_eq!(a.diagram, b.diagram);
    assert_eq!(a.criticals, b.criticals);
    assert_eq!(loaded.meta.prepared_by, "Chief Officer");
}
