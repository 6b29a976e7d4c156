//! Tests for water-drop height-field generation.

use heightfield::{generate, generate_sequential, HeightFieldError, DAMPING};
use test_utils::{
    assert_all_approx_eq, assert_approx_eq, random_drops, random_drops_unbounded, water_drop,
    DropSet,
};

fn generate_drops(
    size_x: usize,
    size_z: usize,
    drops: &DropSet,
    offset_level: f64,
    volatility: f64,
) -> heightfield::HeightField {
    generate(
        size_x,
        size_z,
        &drops.x_positions,
        &drops.z_positions,
        &drops.amplitudes,
        offset_level,
        volatility,
    )
    .unwrap()
}

// ============================================================================
// Shape tests
// ============================================================================

#[test]
fn test_dimensions_match_request() {
    for &(size_x, size_z) in &[(1, 1), (4, 4), (7, 3), (3, 7), (200, 200)] {
        let field = generate_drops(size_x, size_z, &water_drop::drops(), 0.0, 25.0);
        assert_eq!(field.size_x(), size_x);
        assert_eq!(field.size_z(), size_z);
        assert_eq!(field.len(), size_x * size_z);
        assert_eq!(field.rows().count(), size_z);
        assert!(field.rows().all(|row| row.len() == size_x));
    }
}

#[test]
fn test_non_square_grid_samples_each_axis_independently() {
    // Source at the origin; distance of cell (col, row) is known exactly
    let drops = DropSet::single(0.0, 0.0, 1.0);
    let field = generate_drops(5, 2, &drops, 0.0, 0.0);

    let expected_x = (-0.8 * DAMPING).exp(); // col 4 of 5 -> x = 0.8
    let expected_z = (-0.5 * DAMPING).exp(); // row 1 of 2 -> z = 0.5
    assert_approx_eq!(field.get(4, 0).unwrap(), expected_x, 1e-12);
    assert_approx_eq!(field.get(0, 1).unwrap(), expected_z, 1e-12);
}

#[test]
fn test_far_edge_is_never_sampled() {
    let field = generate_drops(4, 4, &DropSet::empty(), 0.0, 25.0);
    let (x, z) = field.sample_point(3, 3).unwrap();
    assert_eq!(x, 0.75);
    assert_eq!(z, 0.75);
}

// ============================================================================
// Value tests
// ============================================================================

#[test]
fn test_no_sources_gives_offset_everywhere() {
    let field = generate(4, 4, &[], &[], &[], 47.0, 25.0).unwrap();
    assert_eq!(field.len(), 16);
    assert!(field.values().iter().all(|&v| v == 47.0));
}

#[test]
fn test_no_sources_various_offsets() {
    for &offset in &[0.0, -12.5, 1e9, 47.0] {
        let field = generate_drops(3, 5, &DropSet::empty(), offset, 3.0);
        assert!(field.values().iter().all(|&v| v == offset));
    }
}

#[test]
fn test_single_source_at_sample_point() {
    let field = generate(1, 1, &[0.0], &[0.0], &[10.0], 0.0, 25.0).unwrap();
    assert_eq!(field.values(), &[10.0]);
}

#[test]
fn test_single_source_peak_at_centre() {
    let drops = DropSet::single(0.5, 0.5, 20.0);
    let field = generate_drops(10, 10, &drops, 0.0, 25.0);

    // Cell (5, 5) samples (0.5, 0.5) exactly
    let peak = field.get(5, 5).unwrap();
    assert_eq!(peak, 20.0);

    for row in 0..10 {
        for col in 0..10 {
            if (col, row) != (5, 5) {
                let v = field.get(col, row).unwrap();
                assert!(v.abs() < peak.abs(), "cell ({col}, {row}) = {v} exceeds peak");
            }
        }
    }
}

#[test]
fn test_matches_closed_form() {
    let drops = water_drop::drops();
    let field = generate_drops(8, 6, &drops, water_drop::OFFSET_LEVEL, water_drop::VOLATILITY);

    for row in 0..6 {
        for col in 0..8 {
            let x = col as f64 * (1.0 / 8.0);
            let z = row as f64 * (1.0 / 6.0);
            let mut expected = 0.0;
            for i in 0..drops.len() {
                let dx = x - drops.x_positions[i];
                let dz = z - drops.z_positions[i];
                let d = (dx * dx + dz * dz).sqrt();
                expected += drops.amplitudes[i]
                    * (d * water_drop::VOLATILITY).cos()
                    * (-d * 3.0).exp();
            }
            expected += water_drop::OFFSET_LEVEL;
            assert_approx_eq!(field.get(col, row).unwrap(), expected, 1e-9);
        }
    }
}

#[test]
fn test_zero_volatility_is_pure_decay() {
    let drops = DropSet::single(0.0, 0.0, 4.0);
    let field = generate_drops(4, 1, &drops, 1.0, 0.0);
    for col in 0..4 {
        let x = col as f64 * 0.25;
        assert_approx_eq!(field.get(col, 0).unwrap(), 1.0 + 4.0 * (-x * 3.0).exp(), 1e-12);
    }
}

#[test]
fn test_sources_are_superposed() {
    let a = DropSet::single(0.2, 0.6, 15.0);
    let b = DropSet::single(0.7, 0.3, 3.0);
    let both = DropSet::new(vec![0.2, 0.7], vec![0.6, 0.3], vec![15.0, 3.0]);

    let fa = generate_drops(16, 16, &a, 0.0, 25.0);
    let fb = generate_drops(16, 16, &b, 0.0, 25.0);
    let fab = generate_drops(16, 16, &both, 0.0, 25.0);

    for idx in 0..fab.len() {
        assert_approx_eq!(fab.values()[idx], fa.values()[idx] + fb.values()[idx], 1e-9);
    }
}

#[test]
fn test_positions_outside_unit_square_are_not_clamped() {
    let outside = generate_drops(6, 6, &DropSet::single(-1.0, 2.0, 50.0), 0.0, 25.0);
    let clamped = generate_drops(6, 6, &DropSet::single(0.0, 1.0, 50.0), 0.0, 25.0);
    assert_ne!(outside.values(), clamped.values());
    // A distant drop barely reaches the grid
    assert!(outside.values().iter().all(|v| v.abs() < 50.0 * (-3.0f64).exp()));
}

#[test]
fn test_negative_amplitude_inverts_field() {
    let up = generate_drops(9, 9, &DropSet::single(0.4, 0.4, 7.0), 0.0, 25.0);
    let down = generate_drops(9, 9, &DropSet::single(0.4, 0.4, -7.0), 0.0, 25.0);
    for (u, d) in up.values().iter().zip(down.values()) {
        assert_eq!(*u, -*d);
    }
}

#[test]
fn test_nan_input_propagates() {
    let field = generate(2, 2, &[0.5], &[0.5], &[f64::NAN], 0.0, 25.0).unwrap();
    assert!(field.values().iter().all(|v| v.is_nan()));

    let field = generate(2, 2, &[], &[], &[], f64::INFINITY, 25.0).unwrap();
    assert!(field.values().iter().all(|v| *v == f64::INFINITY));
}

#[test]
fn test_demo_scene_stays_near_offset_at_corners() {
    let field = generate_drops(
        water_drop::RESOLUTION,
        water_drop::RESOLUTION,
        &water_drop::drops(),
        water_drop::OFFSET_LEVEL,
        water_drop::VOLATILITY,
    );
    let (lo, hi) = field.value_range().unwrap();
    assert!(lo < water_drop::OFFSET_LEVEL && hi > water_drop::OFFSET_LEVEL);
    // Peak is the 50-amplitude drop sampled at (0.5, 0.5) plus nearby ripples
    assert!(hi <= water_drop::OFFSET_LEVEL + 15.0 + 50.0 + 3.0);
    assert_all_approx_eq!([field.get(0, 0).unwrap()], water_drop::OFFSET_LEVEL, 10.0);
}

// ============================================================================
// Determinism tests
// ============================================================================

#[test]
fn test_repeated_calls_are_identical() {
    let drops = random_drops(8, 1234);
    let a = generate_drops(37, 23, &drops, 5.0, 17.0);
    let b = generate_drops(37, 23, &drops, 5.0, 17.0);
    assert_eq!(a, b);
}

#[test]
fn test_parallel_matches_sequential() {
    for seed in 0..5 {
        let drops = random_drops_unbounded(6, seed);
        let parallel = generate_drops(64, 41, &drops, -3.0, 25.0);
        let sequential = generate_sequential(
            64,
            41,
            &drops.x_positions,
            &drops.z_positions,
            &drops.amplitudes,
            -3.0,
            25.0,
        )
        .unwrap();
        // Bit-identical, not merely close
        assert_eq!(parallel, sequential);
    }
}

// ============================================================================
// Validation tests
// ============================================================================

#[test]
fn test_zero_size_x_rejected() {
    let err = generate(0, 4, &[], &[], &[], 0.0, 25.0).unwrap_err();
    assert_eq!(
        err,
        HeightFieldError::InvalidDimension {
            axis: "size_x",
            value: 0
        }
    );
    assert_eq!(err.parameter(), "size_x");
}

#[test]
fn test_zero_size_z_rejected() {
    let err = generate_sequential(4, 0, &[], &[], &[], 0.0, 25.0).unwrap_err();
    assert!(matches!(
        err,
        HeightFieldError::InvalidDimension { axis: "size_z", .. }
    ));
}

#[test]
fn test_mismatched_lengths_rejected() {
    let err = generate(4, 4, &[0.1, 0.2], &[0.1, 0.2, 0.3], &[1.0, 2.0, 3.0], 0.0, 25.0)
        .unwrap_err();
    assert_eq!(
        err,
        HeightFieldError::MismatchedSources {
            x_positions: 2,
            z_positions: 3,
            amplitudes: 3,
        }
    );
    assert!(err.to_string().contains("2 x positions"));
}

#[test]
fn test_extra_positions_rejected() {
    // Longer position arrays are just as invalid as shorter ones
    let err = generate(2, 2, &[0.1, 0.2], &[0.1, 0.2], &[1.0], 0.0, 25.0).unwrap_err();
    assert!(matches!(err, HeightFieldError::MismatchedSources { .. }));
}

#[test]
fn test_dimension_checked_before_sources() {
    let err = generate(0, 0, &[0.1], &[], &[], 0.0, 25.0).unwrap_err();
    assert!(matches!(err, HeightFieldError::InvalidDimension { .. }));
}

#[test]
fn test_field_serializes_row_major() {
    let field = generate(2, 1, &[], &[], &[], 1.5, 0.0).unwrap();
    let json = serde_json::to_value(&field).unwrap();
    assert_eq!(json["size_x"], 2);
    assert_eq!(json["size_z"], 1);
    assert_eq!(json["values"], serde_json::json!([1.5, 1.5]));
}
