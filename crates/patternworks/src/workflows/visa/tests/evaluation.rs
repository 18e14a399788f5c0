use super::common::*;
use crate::workflows::visa::{
    Applicant, ApplicantScore, BackgroundCheck, DenialReason, EvaluationConfig, EvaluationEngine,
    ScoreFactor, VisaDecision,
};

#[test]
fn normal_applicant_passes_with_skill_and_language_bonus() {
    let outcome = evaluation_engine().evaluate(&john_doe());

    assert_eq!(outcome.applicant, "John Doe");
    assert_eq!(outcome.score, ApplicantScore::Points(2));
    assert_eq!(outcome.decision, VisaDecision::Granted);
    assert_eq!(outcome.background_cleared, Some(true));
    assert!(outcome
        .components
        .iter()
        .any(|component| component.factor == ScoreFactor::DesiredSkill && component.score == 1));
}

#[test]
fn normal_applicant_below_pass_score_is_denied() {
    let applicant = Applicant::normal("Jane", "Roe", 4, true)
        .expect("valid")
        .with_background_check(clear_check());

    let outcome = evaluation_engine().evaluate(&applicant);

    match outcome.decision {
        VisaDecision::Denied(DenialReason::InsufficientScore { required, actual }) => {
            assert_eq!(required, 2);
            assert_eq!(actual, 1);
        }
        other => panic!("expected insufficient score denial, got {other:?}"),
    }
}

#[test]
fn third_world_modifier_lowers_score_and_raises_bar() {
    let applicant = Applicant::third_world("Amir", "Karimi", 8, true, -1)
        .expect("valid")
        .with_background_check(clear_check());

    let outcome = evaluation_engine().evaluate(&applicant);

    assert_eq!(outcome.score, ApplicantScore::Points(4));
    assert_eq!(outcome.decision, VisaDecision::Granted);

    let borderline = Applicant::third_world("Amir", "Karimi", 6, true, -1)
        .expect("valid")
        .with_background_check(clear_check());
    let outcome = evaluation_engine().evaluate(&borderline);
    assert_eq!(outcome.score, ApplicantScore::Points(2));
    assert_eq!(
        outcome.decision,
        VisaDecision::Denied(DenialReason::InsufficientScore {
            required: 3,
            actual: 2
        })
    );
}

#[test]
fn extreme_language_scores_saturate_instead_of_overflowing() {
    let applicant = Applicant::normal("Jane", "Roe", i16::MAX, true)
        .expect("valid")
        .with_background_check(clear_check());

    for baseline in [0, -5] {
        let engine = EvaluationEngine::new(EvaluationConfig {
            language_baseline: baseline,
            ..EvaluationConfig::default()
        });
        let outcome = engine.evaluate(&applicant);
        assert_eq!(outcome.score, ApplicantScore::Points(i16::MAX));
        assert_eq!(outcome.decision, VisaDecision::Granted);
    }

    let third_world = Applicant::third_world("Amir", "Karimi", i16::MAX, true, i16::MIN)
        .expect("valid")
        .with_background_check(clear_check());
    let outcome = evaluation_engine().evaluate(&third_world);
    assert_eq!(outcome.score, ApplicantScore::Points(-4));
}

#[test]
fn failed_background_check_denies_before_scoring_matters() {
    let outcome = evaluation_engine().evaluate(&muhammed_ali());

    assert_eq!(outcome.score, ApplicantScore::Points(-4));
    assert_eq!(outcome.background_cleared, Some(false));
    assert_eq!(
        outcome.decision,
        VisaDecision::Denied(DenialReason::BackgroundCheckFailed)
    );
}

#[test]
fn vip_short_circuits_to_granted() {
    let outcome = evaluation_engine().evaluate(&mr_important());

    assert_eq!(outcome.score, ApplicantScore::Vip);
    assert_eq!(outcome.decision, VisaDecision::Granted);
    assert_eq!(outcome.decision.status(), "GRANTED");
}

#[test]
fn vip_still_requires_a_clear_background_check() {
    let applicant = Applicant::vip("mr", "important")
        .expect("valid")
        .with_background_check(BackgroundCheck::new(0, true));

    let outcome = evaluation_engine().evaluate(&applicant);

    assert_eq!(
        outcome.decision,
        VisaDecision::Denied(DenialReason::BackgroundCheckFailed)
    );
}

#[test]
fn missing_background_check_leaves_decision_pending() {
    let applicant = Applicant::normal("John", "Doe", 9, true).expect("valid");

    let outcome = evaluation_engine().evaluate(&applicant);

    assert_eq!(outcome.decision, VisaDecision::BackgroundCheckPending);
    assert_eq!(outcome.background_cleared, None);
    assert_eq!(outcome.decision.summary(), "background check was not done");
}

#[test]
fn threat_ceiling_comes_from_config() {
    let engine = EvaluationEngine::new(EvaluationConfig {
        threat_level_ceiling: 6,
        ..evaluation_config()
    });

    let outcome = engine.evaluate(&muhammed_ali());

    assert_eq!(outcome.background_cleared, Some(true));
    assert!(matches!(
        outcome.decision,
        VisaDecision::Denied(DenialReason::InsufficientScore { .. })
    ));
}

#[test]
fn evaluate_all_preserves_input_order() {
    let applicants = [john_doe(), muhammed_ali(), mr_important()];

    let outcomes = evaluation_engine().evaluate_all(&applicants);

    let names: Vec<&str> = outcomes
        .iter()
        .map(|outcome| outcome.applicant.as_str())
        .collect();
    assert_eq!(names, vec!["John Doe", "Muhammed Ali", "mr important"]);
}
