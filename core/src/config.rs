use crate::{
    error::{ModelError, ModelResult},
    multi_center::{Step, StepTable},
    staffing::TeamCostProfile,
    types::{Count, Dollars},
};
use serde::{de::DeserializeOwned, Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StaffingRole {
    pub title: String,
    pub count_per_team: Count,
    pub annual_cost: Dollars,
}

#[derive(Debug, Clone, Deserialize)]
struct StaffingRolesFile {
    team_member_capacity: Count,
    teams_per_center: Count,
    roles: Vec<StaffingRole>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PricingConfig {
    pub annual_membership_fee: Dollars,
    /// Share of the membership fee attributed to the ELITE care team.
    pub elite_allocation: f64,
}

impl PricingConfig {
    /// Annual revenue one member brings to their ELITE team.
    pub fn revenue_per_member(&self) -> Dollars {
        (self.annual_membership_fee as f64 * self.elite_allocation).round() as Dollars
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OverheadConfig {
    pub phase1_execs: Count,
    pub phase2_execs: StepTable,
    pub corporate_staff: StepTable,
    pub center_ops_staff_per_center: Count,
    pub executive_avg_cost: Dollars,
    pub corporate_avg_cost: Dollars,
    pub center_ops_cost_per_center: Dollars,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ModelConfig {
    pub roles: Vec<StaffingRole>,
    /// Hard ceiling of members one ELITE team can carry.
    pub team_member_capacity: Count,
    pub teams_per_center: Count,
    pub pricing: PricingConfig,
    pub overhead: OverheadConfig,
}

impl ModelConfig {
    /// Load from the data/model directory.
    /// In tests, use ModelConfig::standard().
    pub fn load(data_dir: &str) -> anyhow::Result<Self> {
        let staffing: StaffingRolesFile =
            read_json(&format!("{data_dir}/model/staffing_roles.json"))?;
        let pricing: PricingConfig = read_json(&format!("{data_dir}/model/pricing.json"))?;
        let overhead: OverheadConfig = read_json(&format!("{data_dir}/model/overhead.json"))?;

        let config = Self {
            roles: staffing.roles,
            team_member_capacity: staffing.team_member_capacity,
            teams_per_center: staffing.teams_per_center,
            pricing,
            overhead,
        };
        config.validate()?;

        log::info!(
            "config: loaded {} staffing roles from {data_dir}, team cost ${}",
            config.roles.len(),
            config.team_cost_profile().annual_cost
        );
        Ok(config)
    }

    /// The figures published on the Hiring page.
    pub fn standard() -> Self {
        let role = |title: &str, count_per_team, annual_cost| StaffingRole {
            title: title.into(),
            count_per_team,
            annual_cost,
        };

        Self {
            roles: vec![
                role("Physician", 1, 350_000),
                role("Medical Assistant", 1, 55_000),
                role("Care Coordinator", 2, 65_000),
            ],
            team_member_capacity: 120,
            teams_per_center: 3,
            pricing: PricingConfig {
                annual_membership_fee: 60_000,
                elite_allocation: 0.85,
            },
            overhead: OverheadConfig {
                phase1_execs: 5,
                phase2_execs: StepTable::new(
                    vec![Step { up_to: 1, value: 0 }, Step { up_to: 3, value: 2 }],
                    4,
                ),
                corporate_staff: StepTable::new(
                    vec![
                        Step { up_to: 1, value: 10 },
                        Step { up_to: 3, value: 15 },
                        Step { up_to: 5, value: 20 },
                    ],
                    30,
                ),
                center_ops_staff_per_center: 14,
                executive_avg_cost: 400_000,
                corporate_avg_cost: 100_000,
                center_ops_cost_per_center: 850_000,
            },
        }
    }

    /// Headcount and cost of one ELITE team, summed from the role catalog.
    pub fn team_cost_profile(&self) -> TeamCostProfile {
        TeamCostProfile::from_roles(&self.roles)
    }

    pub fn validate(&self) -> ModelResult<()> {
        let invalid = |reason: String| Err(ModelError::InvalidConfig { reason });

        if self.roles.is_empty() {
            return invalid("staffing role catalog is empty".into());
        }
        if let Some(r) = self.roles.iter().find(|r| r.annual_cost < 0) {
            return invalid(format!("role '{}' has negative cost {}", r.title, r.annual_cost));
        }
        if self.team_cost_profile().headcount == 0 {
            return invalid("an ELITE team must have at least one staff member".into());
        }
        if self.team_member_capacity == 0 {
            return invalid("team_member_capacity must be positive".into());
        }
        if !(self.pricing.elite_allocation > 0.0 && self.pricing.elite_allocation <= 1.0) {
            return invalid(format!(
                "elite_allocation {} must be in (0, 1]",
                self.pricing.elite_allocation
            ));
        }
        if self.pricing.revenue_per_member() <= 0 {
            return invalid("revenue per member must be positive".into());
        }
        self.overhead.phase2_execs.validate("phase2_execs")?;
        self.overhead.corporate_staff.validate("corporate_staff")?;
        Ok(())
    }
}

fn read_json<T: DeserializeOwned>(path: &str) -> anyhow::Result<T> {
    let content =
        std::fs::read_to_string(path).map_err(|e| anyhow::anyhow!("Cannot read {path}: {e}"))?;
    serde_json::from_str(&content).map_err(|e| anyhow::anyhow!("Cannot parse {path}: {e}"))
}
