use super::common::*;
use crate::validation::ValidationError;
use crate::workflows::visa::{
    Applicant, ApplicantCategory, ApplicantScore, BackgroundCheck, EvaluationConfig,
    EvaluationEngine, VisaDecision, DEFAULT_THREAT_LEVEL_CEILING,
};

#[test]
fn full_name_joins_first_and_last_name() {
    assert_eq!(john_doe().full_name(), "John Doe");
}

#[test]
fn third_world_applicants_reject_positive_modifiers() {
    match Applicant::third_world("Jane", "Roe", 6, true, 2) {
        Err(ValidationError::PositiveOriginModifier { modifier }) => assert_eq!(modifier, 2),
        other => panic!("expected positive modifier rejection, got {other:?}"),
    }
    assert!(Applicant::third_world("Jane", "Roe", 6, true, 0).is_ok());
}

#[test]
fn names_must_not_be_blank() {
    assert!(matches!(
        Applicant::vip("", "important"),
        Err(ValidationError::Blank {
            field: "first name"
        })
    ));
}

#[test]
fn background_status_is_none_until_checked() {
    let mut applicant = Applicant::normal("John", "Doe", 5, true).expect("valid");
    assert_eq!(applicant.background_status(DEFAULT_THREAT_LEVEL_CEILING), None);

    applicant.set_background_check(BackgroundCheck::new(0, true));
    assert_eq!(
        applicant.background_status(DEFAULT_THREAT_LEVEL_CEILING),
        Some(false)
    );
}

#[test]
fn background_status_follows_the_given_ceiling() {
    let applicant = Applicant::normal("John", "Doe", 5, true)
        .expect("valid")
        .with_background_check(BackgroundCheck::new(4, false));

    assert_eq!(
        applicant.background_status(DEFAULT_THREAT_LEVEL_CEILING),
        Some(false)
    );
    assert_eq!(applicant.background_status(6), Some(true));

    let engine = EvaluationEngine::new(EvaluationConfig {
        threat_level_ceiling: 6,
        ..EvaluationConfig::default()
    });
    let outcome = engine.evaluate(&applicant);
    assert_eq!(outcome.background_cleared, applicant.background_status(6));
    assert_eq!(outcome.decision, VisaDecision::Granted);
}

#[test]
fn categories_follow_applicant_kind() {
    assert_eq!(john_doe().kind().category(), ApplicantCategory::Normal);
    assert_eq!(muhammed_ali().kind().category(), ApplicantCategory::ThirdWorld);
    assert_eq!(mr_important().kind().category(), ApplicantCategory::Vip);
}

#[test]
fn vip_score_displays_as_vip() {
    assert_eq!(ApplicantScore::Vip.to_string(), "VIP");
    assert_eq!(ApplicantScore::Points(-1).to_string(), "-1");
}
