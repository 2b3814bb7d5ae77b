//! Break-even analysis for a single ELITE team.
//!
//! Revenue per member is the membership fee times the ELITE allocation.
//! Break-even is the smallest member count whose revenue covers one
//! team's annual cost.

use crate::{
    config::ModelConfig,
    staffing::total_staff_cost,
    types::{Count, Dollars},
};
use serde::{Deserialize, Serialize};

/// Members needed for one team's revenue to cover its cost.
pub fn break_even_members(config: &ModelConfig) -> Count {
    let team_cost = config.team_cost_profile().annual_cost;
    // revenue_per_member is validated > 0 on load
    let per_member = config.pricing.revenue_per_member().max(1);
    let members = (team_cost.max(0) + per_member - 1) / per_member;
    members as Count
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BreakEvenAnalysis {
    pub revenue_per_member: Dollars,
    pub team_cost: Dollars,
    pub break_even_members: Count,
    pub current_revenue: Dollars,
    pub total_staff_cost: Dollars,
    pub profit_margin: Dollars,
    pub margin_per_member: f64,
}

impl BreakEvenAnalysis {
    pub fn compute(config: &ModelConfig, members: Count) -> Self {
        let revenue_per_member = config.pricing.revenue_per_member();
        let current_revenue = members as Dollars * revenue_per_member;
        let staff_cost = total_staff_cost(config, members);
        let profit_margin = current_revenue - staff_cost;

        let margin_per_member = if members > 0 {
            profit_margin as f64 / members as f64
        } else {
            0.0
        };

        Self {
            revenue_per_member,
            team_cost: config.team_cost_profile().annual_cost,
            break_even_members: break_even_members(config),
            current_revenue,
            total_staff_cost: staff_cost,
            profit_margin,
            margin_per_member,
        }
    }

    pub fn is_profitable(&self) -> bool {
        self.profit_margin > 0
    }

    /// Profit as a percentage of revenue. 0 when there is no revenue.
    pub fn margin_percent(&self) -> f64 {
        if self.current_revenue > 0 {
            self.profit_margin as f64 / self.current_revenue as f64 * 100.0
        } else {
            0.0
        }
    }
}
