use serde::{Deserialize, Serialize};

use super::super::domain::{Applicant, ApplicantKind, ApplicantScore};
use super::config::EvaluationConfig;

/// Adjudication outcome for a visa application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum VisaDecision {
    Granted,
    Denied(DenialReason),
    BackgroundCheckPending,
}

impl VisaDecision {
    pub const fn status(&self) -> &'static str {
        match self {
            VisaDecision::Granted => "GRANTED",
            VisaDecision::Denied(_) => "DENIED",
            VisaDecision::BackgroundCheckPending => "PENDING",
        }
    }

    pub fn summary(&self) -> String {
        match self {
            VisaDecision::Granted => "visa granted".to_string(),
            VisaDecision::Denied(reason) => reason.summary(),
            VisaDecision::BackgroundCheckPending => "background check was not done".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DenialReason {
    BackgroundCheckFailed,
    InsufficientScore { required: i16, actual: i16 },
}

impl DenialReason {
    pub fn summary(&self) -> String {
        match self {
            DenialReason::BackgroundCheckFailed => {
                "denied: background check NOT CLEARED".to_string()
            }
            DenialReason::InsufficientScore { required, actual } => {
                format!("denied for insufficient score (required {required}, actual {actual})")
            }
        }
    }
}

pub(crate) fn decide_outcome(
    applicant: &Applicant,
    config: &EvaluationConfig,
    score: ApplicantScore,
) -> VisaDecision {
    let Some(check) = applicant.background_check() else {
        return VisaDecision::BackgroundCheckPending;
    };

    if !check.clears(config.threat_level_ceiling) {
        return VisaDecision::Denied(DenialReason::BackgroundCheckFailed);
    }

    let required = match applicant.kind() {
        ApplicantKind::Vip => return VisaDecision::Granted,
        ApplicantKind::Normal(_) => config.normal_pass_score,
        ApplicantKind::ThirdWorld { .. } => config.third_world_pass_score,
    };

    match score {
        ApplicantScore::Points(actual) if actual >= required => VisaDecision::Granted,
        ApplicantScore::Points(actual) => {
            VisaDecision::Denied(DenialReason::InsufficientScore { required, actual })
        }
        ApplicantScore::Vip => VisaDecision::Granted,
    }
}
