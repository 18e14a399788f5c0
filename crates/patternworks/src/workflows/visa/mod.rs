//! Visa application evaluation.
//!
//! Applicants are a tagged variant over their category; each category has a
//! pure scoring rule, and every decision is gated on a background check.

pub mod domain;
pub(crate) mod evaluation;
pub mod intelligence;

#[cfg(test)]
mod tests;

pub use domain::{
    Applicant, ApplicantCategory, ApplicantKind, ApplicantScore, OriginModifier, SkillProfile,
};
pub use evaluation::{
    DenialReason, EvaluationConfig, EvaluationEngine, EvaluationOutcome, ScoreComponent,
    ScoreFactor, VisaDecision,
};
pub use intelligence::{BackgroundCheck, DEFAULT_THREAT_LEVEL_CEILING};
