//! Interactive state and the calculator session that owns it.
//!
//! RULE: state changes only through `StateCommand`s. Every applied
//! command returns freshly computed metrics; nothing derived is cached.

use crate::{
    config::ModelConfig,
    metrics::DerivedMetrics,
    multi_center::CenterCount,
    scenario::CapacityScenario,
    types::Count,
};
use serde::{Deserialize, Serialize};

/// Slider bounds for the member count.
pub const MIN_MEMBERS: Count = 0;
pub const MAX_MEMBERS: Count = 500;

pub const DEFAULT_MEMBERS: Count = 360;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(from = "StateFields")]
pub struct InteractiveState {
    member_count: Count,
    scenario: CapacityScenario,
    centers: CenterCount,
}

/// Wire form of `InteractiveState`; deserialized values pass through
/// the same clamp as the setters.
#[derive(Deserialize)]
struct StateFields {
    member_count: i64,
    scenario: CapacityScenario,
    centers: CenterCount,
}

impl From<StateFields> for InteractiveState {
    fn from(f: StateFields) -> Self {
        InteractiveState::new(f.member_count, f.scenario, f.centers)
    }
}

impl Default for InteractiveState {
    fn default() -> Self {
        Self {
            member_count: DEFAULT_MEMBERS,
            scenario: CapacityScenario::Standard,
            centers: CenterCount::One,
        }
    }
}

impl InteractiveState {
    pub fn new(members: i64, scenario: CapacityScenario, centers: CenterCount) -> Self {
        let mut state = Self { member_count: 0, scenario, centers };
        state.set_member_count(members);
        state
    }

    pub fn member_count(&self) -> Count { self.member_count }
    pub fn scenario(&self) -> CapacityScenario { self.scenario }
    pub fn centers(&self) -> CenterCount { self.centers }

    /// Clamp into [MIN_MEMBERS, MAX_MEMBERS]. Returns the stored value.
    pub fn set_member_count(&mut self, members: i64) -> Count {
        let clamped = members.clamp(MIN_MEMBERS as i64, MAX_MEMBERS as i64) as Count;
        if clamped as i64 != members {
            log::warn!("session: member count {members} clamped to {clamped}");
        }
        self.member_count = clamped;
        clamped
    }

    pub fn select_scenario(&mut self, scenario: CapacityScenario) {
        self.scenario = scenario;
    }

    pub fn select_centers(&mut self, centers: CenterCount) {
        self.centers = centers;
    }
}

/// All user-issued state changes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StateCommand {
    SetMembers { members: i64 },
    SelectScenario { scenario: CapacityScenario },
    SelectCenters { centers: CenterCount },
}

pub struct CalculatorSession {
    config: ModelConfig,
    state: InteractiveState,
}

impl CalculatorSession {
    pub fn new(config: ModelConfig) -> Self {
        Self::with_state(config, InteractiveState::default())
    }

    pub fn with_state(config: ModelConfig, state: InteractiveState) -> Self {
        Self { config, state }
    }

    pub fn state(&self) -> &InteractiveState {
        &self.state
    }

    pub fn config(&self) -> &ModelConfig {
        &self.config
    }

    pub fn metrics(&self) -> DerivedMetrics {
        DerivedMetrics::compute(&self.state, &self.config)
    }

    /// Apply one command and recompute.
    pub fn apply(&mut self, command: StateCommand) -> DerivedMetrics {
        match command {
            StateCommand::SetMembers { members } => {
                let stored = self.state.set_member_count(members);
                log::info!("session: members set to {stored}");
            }
            StateCommand::SelectScenario { scenario } => {
                self.state.select_scenario(scenario);
                log::info!(
                    "session: scenario {} selected (capacity {})",
                    scenario.key(),
                    scenario.annual_capacity()
                );
            }
            StateCommand::SelectCenters { centers } => {
                self.state.select_centers(centers);
                log::info!("session: {centers} center(s) selected");
            }
        }
        self.metrics()
    }
}
