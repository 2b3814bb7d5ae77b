//! Team and staff derivation.
//!
//! Members are served by ELITE teams. Each team has a hard member
//! ceiling (`team_member_capacity`), so the team count is the member
//! count divided by that ceiling, rounded up. Staff and labor cost
//! follow from the team count and the role catalog.

use crate::{
    config::{ModelConfig, StaffingRole},
    types::{Count, Dollars},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoleCost {
    pub title: String,
    pub headcount: Count,
    pub annual_cost: Dollars,
}

/// One ELITE team's headcount and annual cost.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TeamCostProfile {
    pub headcount: Count,
    pub annual_cost: Dollars,
    pub roles: Vec<RoleCost>,
}

impl TeamCostProfile {
    pub fn from_roles(roles: &[StaffingRole]) -> Self {
        let roles: Vec<RoleCost> = roles
            .iter()
            .map(|r| RoleCost {
                title: r.title.clone(),
                headcount: r.count_per_team,
                annual_cost: r.count_per_team as Dollars * r.annual_cost,
            })
            .collect();

        Self {
            headcount: roles.iter().map(|r| r.headcount).sum(),
            annual_cost: roles.iter().map(|r| r.annual_cost).sum(),
            roles,
        }
    }
}

pub fn teams_needed(config: &ModelConfig, members: Count) -> Count {
    match config.team_member_capacity {
        0 => 0,
        capacity => members.div_ceil(capacity),
    }
}

pub fn staff_needed(config: &ModelConfig, members: Count) -> Count {
    teams_needed(config, members).saturating_mul(config.team_cost_profile().headcount)
}

pub fn total_staff_cost(config: &ModelConfig, members: Count) -> Dollars {
    (teams_needed(config, members) as Dollars).saturating_mul(config.team_cost_profile().annual_cost)
}

/// Teams, staff and labor cost required for a member count.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StaffingPlan {
    pub member_count: Count,
    pub teams_needed: Count,
    pub staff_needed: Count,
    pub total_staff_cost: Dollars,
    /// Open member slots left in the last team.
    pub spare_capacity: Count,
}

impl StaffingPlan {
    pub fn for_members(config: &ModelConfig, members: Count) -> Self {
        let profile = config.team_cost_profile();
        let teams = teams_needed(config, members);

        Self {
            member_count: members,
            teams_needed: teams,
            staff_needed: teams.saturating_mul(profile.headcount),
            total_staff_cost: (teams as Dollars).saturating_mul(profile.annual_cost),
            spare_capacity: spare_slots(members, config.team_member_capacity),
        }
    }
}

/// Unfilled slots in the last, partly filled team.
fn spare_slots(members: Count, capacity: Count) -> Count {
    match capacity {
        0 => 0,
        capacity => (capacity - members % capacity) % capacity,
    }
}
