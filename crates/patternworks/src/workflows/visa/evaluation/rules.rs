use super::super::domain::{Applicant, ApplicantKind, ApplicantScore, SkillProfile};
use super::config::EvaluationConfig;
use super::{ScoreComponent, ScoreFactor};

pub(crate) fn score_applicant(
    applicant: &Applicant,
    config: &EvaluationConfig,
) -> (Vec<ScoreComponent>, ApplicantScore) {
    let mut components = Vec::new();

    let total = match applicant.kind() {
        ApplicantKind::Vip => {
            components.push(ScoreComponent {
                factor: ScoreFactor::VipStatus,
                score: 0,
                notes: "VIP applicants skip numeric scoring".to_string(),
            });
            return (components, ApplicantScore::Vip);
        }
        ApplicantKind::Normal(profile) => score_skills(profile, config, &mut components),
        ApplicantKind::ThirdWorld {
            profile,
            origin_modifier,
        } => {
            let modifier = origin_modifier.value();
            components.push(ScoreComponent {
                factor: ScoreFactor::OriginModifier,
                score: modifier,
                notes: format!("origin country modifier {modifier}"),
            });
            modifier.saturating_add(score_skills(profile, config, &mut components))
        }
    };

    (components, ApplicantScore::Points(total))
}

/// Scores saturate at the `i16` bounds.
fn score_skills(
    profile: &SkillProfile,
    config: &EvaluationConfig,
    components: &mut Vec<ScoreComponent>,
) -> i16 {
    let mut total: i16 = 0;

    if profile.desired_skill {
        components.push(ScoreComponent {
            factor: ScoreFactor::DesiredSkill,
            score: 1,
            notes: "holds a skill on the desired list".to_string(),
        });
        total += 1;
    }

    if profile.language_score > config.language_baseline {
        let bonus = profile.language_score.saturating_sub(config.language_baseline);
        components.push(ScoreComponent {
            factor: ScoreFactor::LanguageProficiency,
            score: bonus,
            notes: format!(
                "language score {} exceeds baseline {}",
                profile.language_score, config.language_baseline
            ),
        });
        total = total.saturating_add(bonus);
    } else {
        components.push(ScoreComponent {
            factor: ScoreFactor::LanguageProficiency,
            score: 0,
            notes: format!(
                "language score {} at or below baseline {}",
                profile.language_score, config.language_baseline
            ),
        });
    }

    total
}
