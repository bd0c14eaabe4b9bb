//! Configuration for the scoring engine
//!
//! The role-weight table and classification thresholds are fixed lookup data
//! by default, constructed once and passed explicitly into the scoring
//! functions. A TOML file may override them; triples are validated to sum to
//! 1.0 at that boundary, never at scoring time.

use crate::error::{FitRankError, Result};
use crate::model::RoleType;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Weight triple over the three platform sub-scores. Sums to 1.0.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RoleWeights {
    pub leetcode: f64,
    pub github: f64,
    pub linkedin: f64,
}

impl RoleWeights {
    pub fn sum(&self) -> f64 {
        self.leetcode + self.github + self.linkedin
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub weights: RoleWeightTable,
    pub thresholds: Thresholds,
}

/// One weight triple per role type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleWeightTable {
    pub ai: RoleWeights,
    pub sde: RoleWeights,
    pub data_analyst: RoleWeights,
    pub full_stack: RoleWeights,
    pub ml_engineer: RoleWeights,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Thresholds {
    /// Composite score at or above which the decision is APPLY.
    pub apply: u32,
    /// Composite score at or above which the decision is IMPROVE.
    pub improve: u32,
    /// Target proficiency every required skill is measured against.
    pub required_proficiency: u32,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            weights: RoleWeightTable {
                ai: RoleWeights {
                    leetcode: 0.35,
                    github: 0.40,
                    linkedin: 0.25,
                },
                sde: RoleWeights {
                    leetcode: 0.45,
                    github: 0.35,
                    linkedin: 0.20,
                },
                data_analyst: RoleWeights {
                    leetcode: 0.25,
                    github: 0.35,
                    linkedin: 0.40,
                },
                full_stack: RoleWeights {
                    leetcode: 0.30,
                    github: 0.50,
                    linkedin: 0.20,
                },
                ml_engineer: RoleWeights {
                    leetcode: 0.35,
                    github: 0.45,
                    linkedin: 0.20,
                },
            },
            thresholds: Thresholds {
                apply: 80,
                improve: 50,
                required_proficiency: 70,
            },
        }
    }
}

impl ScoringConfig {
    pub fn weights_for(&self, role: RoleType) -> RoleWeights {
        match role {
            RoleType::Ai => self.weights.ai,
            RoleType::Sde => self.weights.sde,
            RoleType::DataAnalyst => self.weights.data_analyst,
            RoleType::FullStack => self.weights.full_stack,
            RoleType::MlEngineer => self.weights.ml_engineer,
        }
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: ScoringConfig = toml::from_str(&content)
            .map_err(|e| FitRankError::Configuration(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self).map_err(|e| {
            FitRankError::Configuration(format!("Failed to serialize config: {}", e))
        })?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        for role in RoleType::ALL {
            let sum = self.weights_for(role).sum();
            if (sum - 1.0).abs() > 1e-6 {
                return Err(FitRankError::Configuration(format!(
                    "weights for {} sum to {:.4}, expected 1.0",
                    role, sum
                )));
            }
        }
        if self.thresholds.improve > self.thresholds.apply {
            return Err(FitRankError::Configuration(format!(
                "improve threshold {} exceeds apply threshold {}",
                self.thresholds.improve, self.thresholds.apply
            )));
        }
        Ok(())
    }
}
