//! Multi-center aggregation — scales the single-center staffing model
//! across a number of centers and adds corporate/executive overhead.
//!
//! Center-level figures scale linearly with the center count.
//! Overhead headcount is a step function of the center count, held
//! as an ordered breakpoint table in config.
//!
//! Every output is non-decreasing in the center count as long as the
//! step tables are (enforced by `StepTable::validate`).

use crate::{
    config::ModelConfig,
    error::{ModelError, ModelResult},
    types::{Count, Dollars},
};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Step {
    pub up_to: Count,
    pub value: Count,
}

/// Ordered breakpoints: the first step whose `up_to` is at least the
/// input wins; inputs past the last step get `beyond`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StepTable {
    pub steps: Vec<Step>,
    pub beyond: Count,
}

impl StepTable {
    pub fn new(steps: Vec<Step>, beyond: Count) -> Self {
        Self { steps, beyond }
    }

    pub fn lookup(&self, n: Count) -> Count {
        self.steps
            .iter()
            .find(|s| n <= s.up_to)
            .map_or(self.beyond, |s| s.value)
    }

    pub fn validate(&self, name: &str) -> ModelResult<()> {
        if !self.steps.windows(2).all(|w| w[0].up_to < w[1].up_to) {
            return Err(ModelError::InvalidConfig {
                reason: format!("{name}: breakpoints must be strictly ascending"),
            });
        }
        let values: Vec<Count> = self
            .steps
            .iter()
            .map(|s| s.value)
            .chain(std::iter::once(self.beyond))
            .collect();
        if !values.windows(2).all(|w| w[0] <= w[1]) {
            return Err(ModelError::InvalidConfig {
                reason: format!("{name}: values must not decrease"),
            });
        }
        Ok(())
    }
}

/// Center counts offered by the selector.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(try_from = "u32", into = "u32")]
pub enum CenterCount {
    #[default]
    One,
    Three,
    Five,
    Ten,
}

impl CenterCount {
    pub const ALL: [CenterCount; 4] = [
        CenterCount::One,
        CenterCount::Three,
        CenterCount::Five,
        CenterCount::Ten,
    ];

    pub fn get(&self) -> Count {
        match self {
            CenterCount::One   => 1,
            CenterCount::Three => 3,
            CenterCount::Five  => 5,
            CenterCount::Ten   => 10,
        }
    }
}

impl TryFrom<u32> for CenterCount {
    type Error = ModelError;

    fn try_from(count: u32) -> Result<Self, Self::Error> {
        CenterCount::ALL
            .into_iter()
            .find(|c| c.get() == count)
            .ok_or(ModelError::UnsupportedCenterCount { count })
    }
}

impl From<CenterCount> for u32 {
    fn from(c: CenterCount) -> u32 {
        c.get()
    }
}

impl fmt::Display for CenterCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct CategoryCosts {
    pub executive: Dollars,
    pub corporate: Dollars,
    pub center_ops: Dollars,
    pub elite_teams: Dollars,
}

impl CategoryCosts {
    pub fn total(&self) -> Dollars {
        self.executive
            .saturating_add(self.corporate)
            .saturating_add(self.center_ops)
            .saturating_add(self.elite_teams)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MultiCenterPlan {
    pub center_count: Count,
    pub phase1_execs: Count,
    pub phase2_execs: Count,
    pub corporate_staff: Count,
    pub elite_teams: Count,
    pub total_elite_staff: Count,
    pub total_center_ops: Count,
    pub total_headcount: Count,
    pub costs: CategoryCosts,
    pub total_multi_center_cost: Dollars,
}

impl MultiCenterPlan {
    /// Total over every `u32`: counts and costs saturate at their type's
    /// maximum instead of overflowing.
    pub fn compute(config: &ModelConfig, centers: Count) -> Self {
        let overhead = &config.overhead;
        let team = config.team_cost_profile();

        let phase2_execs = overhead.phase2_execs.lookup(centers);
        let corporate_staff = overhead.corporate_staff.lookup(centers);
        let elite_teams = centers.saturating_mul(config.teams_per_center);
        let total_elite_staff = elite_teams.saturating_mul(team.headcount);
        let total_center_ops = centers.saturating_mul(overhead.center_ops_staff_per_center);
        let execs = overhead.phase1_execs.saturating_add(phase2_execs);

        let total_headcount = execs
            .saturating_add(corporate_staff)
            .saturating_add(total_center_ops)
            .saturating_add(total_elite_staff);

        let costs = CategoryCosts {
            executive: (execs as Dollars).saturating_mul(overhead.executive_avg_cost),
            corporate: (corporate_staff as Dollars).saturating_mul(overhead.corporate_avg_cost),
            center_ops: (centers as Dollars).saturating_mul(overhead.center_ops_cost_per_center),
            elite_teams: (elite_teams as Dollars).saturating_mul(team.annual_cost),
        };

        log::debug!(
            "multi_center: centers={centers} headcount={total_headcount} cost=${}",
            costs.total()
        );

        Self {
            center_count: centers,
            phase1_execs: overhead.phase1_execs,
            phase2_execs,
            corporate_staff,
            elite_teams,
            total_elite_staff,
            total_center_ops,
            total_headcount,
            costs,
            total_multi_center_cost: costs.total(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> StepTable {
        StepTable::new(
            vec![Step { up_to: 1, value: 10 }, Step { up_to: 3, value: 15 }],
            30,
        )
    }

    #[test]
    fn lookup_picks_first_breakpoint_at_or_above_input() {
        let t = table();
        assert_eq!(t.lookup(0), 10);
        assert_eq!(t.lookup(1), 10);
        assert_eq!(t.lookup(2), 15);
        assert_eq!(t.lookup(3), 15);
        assert_eq!(t.lookup(4), 30);
        assert_eq!(t.lookup(u32::MAX), 30);
    }

    #[test]
    fn empty_table_always_returns_beyond() {
        let t = StepTable::new(vec![], 7);
        assert_eq!(t.lookup(0), 7);
        assert_eq!(t.lookup(100), 7);
        assert!(t.validate("empty").is_ok());
    }

    #[test]
    fn unordered_breakpoints_rejected() {
        let t = StepTable::new(
            vec![Step { up_to: 3, value: 1 }, Step { up_to: 1, value: 2 }],
            3,
        );
        assert!(t.validate("unordered").is_err());
    }

    #[test]
    fn decreasing_values_rejected() {
        let t = StepTable::new(vec![Step { up_to: 1, value: 5 }], 4);
        assert!(t.validate("decreasing").is_err());
    }
}
