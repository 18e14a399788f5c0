use crate::workflows::visa::{Applicant, BackgroundCheck, EvaluationConfig, EvaluationEngine};

pub(super) fn evaluation_config() -> EvaluationConfig {
    EvaluationConfig::default()
}

pub(super) fn evaluation_engine() -> EvaluationEngine {
    EvaluationEngine::new(evaluation_config())
}

pub(super) fn clear_check() -> BackgroundCheck {
    BackgroundCheck::new(1, false)
}

pub(super) fn john_doe() -> Applicant {
    Applicant::normal("John", "Doe", 5, true)
        .expect("valid applicant")
        .with_background_check(clear_check())
}

pub(super) fn muhammed_ali() -> Applicant {
    Applicant::third_world("Muhammed", "Ali", 5, true, -3)
        .expect("valid applicant")
        .with_background_check(BackgroundCheck::new(5, false))
}

pub(super) fn mr_important() -> Applicant {
    Applicant::vip("mr", "important")
        .expect("valid applicant")
        .with_background_check(BackgroundCheck::new(0, false))
}
