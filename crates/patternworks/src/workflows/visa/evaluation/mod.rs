mod config;
mod policy;
mod rules;

pub use config::EvaluationConfig;
pub use policy::{DenialReason, VisaDecision};

use super::domain::{Applicant, ApplicantCategory, ApplicantScore};
use policy::decide_outcome;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Stateless evaluator that applies the rubric configuration to an applicant.
#[derive(Debug, Clone, Default)]
pub struct EvaluationEngine {
    config: EvaluationConfig,
}

impl EvaluationEngine {
    pub fn new(config: EvaluationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EvaluationConfig {
        &self.config
    }

    pub fn evaluate(&self, applicant: &Applicant) -> EvaluationOutcome {
        let (components, score) = rules::score_applicant(applicant, &self.config);
        let decision = decide_outcome(applicant, &self.config, score);

        info!(
            applicant = %applicant.full_name(),
            category = applicant.kind().category().label(),
            %score,
            status = decision.status(),
            "visa application evaluated"
        );

        EvaluationOutcome {
            applicant: applicant.full_name(),
            category: applicant.kind().category(),
            background_cleared: applicant.background_status(self.config.threat_level_ceiling),
            score,
            decision,
            components,
        }
    }

    /// Evaluate applicants one by one, preserving input order.
    pub fn evaluate_all<'a, I>(&self, applicants: I) -> Vec<EvaluationOutcome>
    where
        I: IntoIterator<Item = &'a Applicant>,
    {
        applicants
            .into_iter()
            .map(|applicant| self.evaluate(applicant))
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreFactor {
    DesiredSkill,
    LanguageProficiency,
    OriginModifier,
    VipStatus,
}

/// Discrete contribution to an evaluation, allowing transparent audits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreComponent {
    pub factor: ScoreFactor,
    pub score: i16,
    pub notes: String,
}

/// Evaluation output describing the score and decision trail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationOutcome {
    pub applicant: String,
    pub category: ApplicantCategory,
    /// `None` when no background check was performed.
    pub background_cleared: Option<bool>,
    pub score: ApplicantScore,
    pub decision: VisaDecision,
    pub components: Vec<ScoreComponent>,
}
