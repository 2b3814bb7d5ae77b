//! Derived metrics — everything the Hiring page displays, computed in
//! one pass from the interactive state. Never stored; rebuild on every
//! state change.

use crate::{
    break_even::BreakEvenAnalysis,
    config::ModelConfig,
    multi_center::MultiCenterPlan,
    scenario::CapacityScenario,
    session::InteractiveState,
    staffing::StaffingPlan,
    types::{Count, Dollars},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DerivedMetrics {
    pub member_count: Count,
    pub scenario: CapacityScenario,
    pub annual_capacity: Count,
    pub utilization_percent: f64,
    pub display_utilization_percent: f64,
    pub staffing: StaffingPlan,
    pub break_even: BreakEvenAnalysis,
    pub multi_center: MultiCenterPlan,
}

impl DerivedMetrics {
    pub fn compute(state: &InteractiveState, config: &ModelConfig) -> Self {
        let members = state.member_count();
        let scenario = state.scenario();

        let metrics = Self {
            member_count: members,
            scenario,
            annual_capacity: scenario.annual_capacity(),
            utilization_percent: scenario.utilization_percent(members),
            display_utilization_percent: scenario.display_utilization_percent(members),
            staffing: StaffingPlan::for_members(config, members),
            break_even: BreakEvenAnalysis::compute(config, members),
            multi_center: MultiCenterPlan::compute(config, state.centers().get()),
        };

        log::debug!(
            "metrics: members={members} scenario={} teams={} utilization={:.2}% profit=${}",
            scenario.key(),
            metrics.staffing.teams_needed,
            metrics.utilization_percent,
            metrics.break_even.profit_margin
        );
        metrics
    }

    pub fn teams_needed(&self) -> Count {
        self.staffing.teams_needed
    }

    pub fn staff_needed(&self) -> Count {
        self.staffing.staff_needed
    }

    pub fn total_staff_cost(&self) -> Dollars {
        self.staffing.total_staff_cost
    }

    pub fn total_headcount(&self) -> Count {
        self.multi_center.total_headcount
    }

    pub fn total_multi_center_cost(&self) -> Dollars {
        self.multi_center.total_multi_center_cost
    }
}
