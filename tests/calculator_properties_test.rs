use approx::assert_relative_eq;
use cement_calc::{annular_volume_bbl, calculate_annular_volume, volume_breakdown, WellGeometry};
use proptest::prelude::*;
use std::f64::consts::PI;

/// (height_ft, hole_diameter_in, casing_od_in) with 0 < casing < hole.
fn valid_geometry() -> impl Strategy<Value = (f64, f64, f64)> {
    (1.0f64..30_000.0, 2.0f64..36.0, 0.05f64..0.95)
        .prop_map(|(height, hole, ratio)| (height, hole, hole * ratio))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn test_valid_annulus_is_positive((h, hole, casing) in valid_geometry(), excess in 0.0f64..200.0) {
        prop_assert!(annular_volume_bbl(h, hole, casing, excess) > 0.0);
    }

    #[test]
    fn test_monotonic_in_height((h, hole, casing) in valid_geometry(), extra in 1.0f64..5_000.0, excess in 0.0f64..100.0) {
        let shallow = annular_volume_bbl(h, hole, casing, excess);
        let deep = annular_volume_bbl(h + extra, hole, casing, excess);
        prop_assert!(deep > shallow);
    }

    #[test]
    fn test_monotonic_in_excess((h, hole, casing) in valid_geometry(), excess in 0.0f64..100.0, extra in 0.5f64..100.0) {
        let lean = annular_volume_bbl(h, hole, casing, excess);
        let padded = annular_volume_bbl(h, hole, casing, excess + extra);
        prop_assert!(padded > lean);
    }

    #[test]
    fn test_default_excess_matches_zero((h, hole, casing) in valid_geometry()) {
        let omitted = calculate_annular_volume(&WellGeometry::new(h, hole, casing));
        let explicit = calculate_annular_volume(&WellGeometry::new(h, hole, casing).with_excess(0.0));
        prop_assert_eq!(omitted, explicit);
    }

    #[test]
    fn test_excess_scales_base_volume((h, hole, casing) in valid_geometry(), excess in 0.0f64..300.0) {
        let base = annular_volume_bbl(h, hole, casing, 0.0);
        let scaled = annular_volume_bbl(h, hole, casing, excess);
        assert_relative_eq!(scaled, base * (1.0 + excess / 100.0), max_relative = 1e-12);
    }

    #[test]
    fn test_equal_diameters_collapse(h in 1.0f64..30_000.0, d in 1.0f64..36.0, excess in 0.0f64..300.0) {
        prop_assert_eq!(annular_volume_bbl(h, d, d, excess), 0.0);
    }

    #[test]
    fn test_barrels_back_to_cubic_feet((h, hole, casing) in valid_geometry()) {
        let cubic_feet = annular_volume_bbl(h, hole, casing, 0.0) * 5.615;
        let independent = (PI / 4.0) * (hole * hole - casing * casing) / 144.0 * h;
        assert_relative_eq!(cubic_feet, independent, max_relative = 1e-9);
    }

    #[test]
    fn test_breakdown_total_is_calculator_result((h, hole, casing) in valid_geometry(), excess in 0.0f64..100.0) {
        let geometry = WellGeometry::new(h, hole, casing).with_excess(excess);
        prop_assert_eq!(volume_breakdown(&geometry).total_volume_bbl, calculate_annular_volume(&geometry));
    }
}

#[test]
fn test_surface_casing_job() {
    // 13-3/8" surface casing in a 17-1/2" hole, 2500 ft, 50% excess
    let volume = annular_volume_bbl(2500.0, 17.5, 13.375, 50.0);
    let annulus_ft2 = PI / 4.0 * (17.5f64.powi(2) - 13.375f64.powi(2)) / 144.0;
    assert_relative_eq!(volume, annulus_ft2 * 2500.0 * 1.5 / 5.615, max_relative = 1e-12);
}

#[test]
fn test_negative_height_passes_through() {
    assert!(annular_volume_bbl(-100.0, 8.5, 7.0, 0.0) < 0.0);
}
