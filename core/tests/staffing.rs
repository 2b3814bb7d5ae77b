//! Team and staff derivation tests.

use elite_capacity_core::{
    config::ModelConfig,
    staffing::{staff_needed, teams_needed, total_staff_cost, StaffingPlan, TeamCostProfile},
};

// ── Helpers ──────────────────────────────────────────────────────────────────

fn config() -> ModelConfig {
    ModelConfig::standard()
}

// ── Tests ────────────────────────────────────────────────────────────────────

/// One ELITE team is 4 staff costing $535,000, summed from the role catalog.
#[test]
fn team_profile_sums_role_catalog() {
    let profile = config().team_cost_profile();

    assert_eq!(profile.headcount, 4);
    assert_eq!(profile.annual_cost, 535_000);
    assert_eq!(profile.roles.len(), 3);

    let coordinators = profile
        .roles
        .iter()
        .find(|r| r.title == "Care Coordinator")
        .expect("Care Coordinator role should exist");
    assert_eq!(coordinators.headcount, 2);
    assert_eq!(coordinators.annual_cost, 130_000);
}

/// Changing a role's cost flows through to the team cost.
#[test]
fn team_profile_recomputed_when_roles_change() {
    let mut cfg = config();
    cfg.roles[0].annual_cost = 400_000;

    assert_eq!(cfg.team_cost_profile().annual_cost, 585_000);
    assert_eq!(total_staff_cost(&cfg, 120), 585_000);
}

#[test]
fn zero_members_need_zero_teams() {
    let cfg = config();
    assert_eq!(teams_needed(&cfg, 0), 0);
    assert_eq!(staff_needed(&cfg, 0), 0);
    assert_eq!(total_staff_cost(&cfg, 0), 0);
}

#[test]
fn full_team_at_120_members() {
    let plan = StaffingPlan::for_members(&config(), 120);

    assert_eq!(plan.teams_needed, 1);
    assert_eq!(plan.staff_needed, 4);
    assert_eq!(plan.total_staff_cost, 535_000);
    assert_eq!(plan.spare_capacity, 0);
}

#[test]
fn one_member_over_capacity_adds_a_team() {
    let plan = StaffingPlan::for_members(&config(), 121);

    assert_eq!(plan.teams_needed, 2);
    assert_eq!(plan.staff_needed, 8);
    assert_eq!(plan.total_staff_cost, 1_070_000);
    assert_eq!(plan.spare_capacity, 119);
}

/// Teams, staff and cost follow their closed forms over the whole slider range.
#[test]
fn derivations_match_closed_forms() {
    let cfg = config();

    for members in 0..=1000u32 {
        let teams = teams_needed(&cfg, members);
        let expected = (members as f64 / 120.0).ceil() as u32;

        assert_eq!(teams, expected, "teams for {members} members");
        assert_eq!(staff_needed(&cfg, members), 4 * teams);
        assert_eq!(total_staff_cost(&cfg, members), 535_000 * teams as i64);

        let plan = StaffingPlan::for_members(&cfg, members);
        assert_eq!(plan.teams_needed, teams);
        assert_eq!(plan.staff_needed, staff_needed(&cfg, members));
        assert_eq!(plan.total_staff_cost, total_staff_cost(&cfg, members));
    }
}

#[test]
fn empty_catalog_has_zero_cost() {
    let profile = TeamCostProfile::from_roles(&[]);
    assert_eq!(profile.headcount, 0);
    assert_eq!(profile.annual_cost, 0);
}

/// The largest member count is handled without overflow.
#[test]
fn max_member_count_does_not_overflow() {
    let cfg = config();
    let plan = StaffingPlan::for_members(&cfg, u32::MAX);

    assert_eq!(plan.teams_needed, u32::MAX.div_ceil(120));
    assert_eq!(plan.staff_needed, plan.teams_needed * 4);
    assert_eq!(plan.total_staff_cost, plan.teams_needed as i64 * 535_000);
    // 4_294_967_295 = 35_791_394 × 120 + 15
    assert_eq!(plan.spare_capacity, 105);
    assert_eq!(staff_needed(&cfg, u32::MAX), plan.staff_needed);
}

#[test]
fn spare_capacity_counts_open_slots_in_last_team() {
    let cfg = config();
    for (members, spare) in [(0, 0), (1, 119), (119, 1), (120, 0), (240, 0), (241, 119)] {
        assert_eq!(
            StaffingPlan::for_members(&cfg, members).spare_capacity,
            spare,
            "spare slots at {members} members"
        );
    }
}
