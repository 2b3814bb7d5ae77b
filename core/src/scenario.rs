//! Capacity scenarios — named operating-hours configurations, each with
//! an annual member-capacity ceiling.
//!
//! The set is closed. Text keys from the runner are parsed through
//! `FromStr`; nothing else can name a scenario that does not exist.

use crate::{
    error::ModelError,
    types::Count,
};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum CapacityScenario {
    #[default]
    Standard,
    Extended,
    Weekend,
}

impl CapacityScenario {
    pub const ALL: [CapacityScenario; 3] = [
        CapacityScenario::Standard,
        CapacityScenario::Extended,
        CapacityScenario::Weekend,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            CapacityScenario::Standard => "standard",
            CapacityScenario::Extended => "extended",
            CapacityScenario::Weekend  => "weekend",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            CapacityScenario::Standard => "Standard",
            CapacityScenario::Extended => "Extended",
            CapacityScenario::Weekend  => "Weekend",
        }
    }

    pub fn annual_capacity(&self) -> Count {
        match self {
            CapacityScenario::Standard => 1750,
            CapacityScenario::Extended => 2250,
            CapacityScenario::Weekend  => 3050,
        }
    }

    pub fn operating_hours(&self) -> &'static str {
        match self {
            CapacityScenario::Standard => "Weekdays, 8am to 6pm",
            CapacityScenario::Extended => "Weekdays, 7am to 9pm",
            CapacityScenario::Weekend  => "Extended weekdays plus Saturday and Sunday clinics",
        }
    }

    /// Members as a percentage of this scenario's annual capacity.
    /// Not clamped: an over-subscribed scenario reports more than 100.
    pub fn utilization_percent(&self, members: Count) -> f64 {
        members as f64 / self.annual_capacity() as f64 * 100.0
    }

    /// Utilization clamped to [0, 100] for bars and gauges.
    pub fn display_utilization_percent(&self, members: Count) -> f64 {
        self.utilization_percent(members).clamp(0.0, 100.0)
    }
}

impl fmt::Display for CapacityScenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CapacityScenario {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        CapacityScenario::ALL
            .into_iter()
            .find(|sc| sc.key() == key)
            .ok_or_else(|| ModelError::UnknownScenario { key: s.to_string() })
    }
}
