//! Model config loading and validation tests.

use elite_capacity_core::{
    config::ModelConfig,
    error::ModelError,
    multi_center::Step,
};

fn data_dir() -> String {
    format!("{}/../data", env!("CARGO_MANIFEST_DIR"))
}

/// The shipped data files describe the same model as the built-in defaults.
#[test]
fn data_dir_matches_standard_config() {
    let loaded = ModelConfig::load(&data_dir()).unwrap();
    assert_eq!(loaded, ModelConfig::standard());
}

#[test]
fn missing_data_dir_is_an_error() {
    let err = ModelConfig::load("/nonexistent/capacity-data").unwrap_err();
    assert!(
        err.to_string().contains("Cannot read"),
        "Unexpected error: {err}"
    );
}

#[test]
fn standard_config_is_valid() {
    ModelConfig::standard().validate().unwrap();
}

#[test]
fn zero_team_capacity_rejected() {
    let mut cfg = ModelConfig::standard();
    cfg.team_member_capacity = 0;
    assert!(matches!(cfg.validate(), Err(ModelError::InvalidConfig { .. })));
}

#[test]
fn empty_role_catalog_rejected() {
    let mut cfg = ModelConfig::standard();
    cfg.roles.clear();
    assert!(matches!(cfg.validate(), Err(ModelError::InvalidConfig { .. })));
}

#[test]
fn allocation_out_of_range_rejected() {
    for allocation in [0.0, -0.5, 1.2, f64::NAN] {
        let mut cfg = ModelConfig::standard();
        cfg.pricing.elite_allocation = allocation;
        assert!(
            cfg.validate().is_err(),
            "allocation {allocation} should be rejected"
        );
    }
}

#[test]
fn unordered_overhead_breakpoints_rejected() {
    let mut cfg = ModelConfig::standard();
    cfg.overhead.corporate_staff.steps.push(Step { up_to: 2, value: 25 });

    match cfg.validate() {
        Err(ModelError::InvalidConfig { reason }) => {
            assert!(reason.contains("corporate_staff"), "reason: {reason}")
        }
        other => panic!("Expected InvalidConfig, got {other:?}"),
    }
}
