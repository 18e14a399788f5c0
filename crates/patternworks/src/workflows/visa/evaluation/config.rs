use serde::{Deserialize, Serialize};

use super::super::intelligence::DEFAULT_THREAT_LEVEL_CEILING;

/// Rubric configuration describing pass scores and scoring baselines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationConfig {
    pub normal_pass_score: i16,
    pub third_world_pass_score: i16,
    pub language_baseline: i16,
    pub threat_level_ceiling: u8,
}

impl Default for EvaluationConfig {
    fn default() -> Self {
        Self {
            normal_pass_score: 2,
            third_world_pass_score: 3,
            language_baseline: 4,
            threat_level_ceiling: DEFAULT_THREAT_LEVEL_CEILING,
        }
    }
}
