use std::fmt;

use serde::{Deserialize, Serialize};

use super::intelligence::BackgroundCheck;
use crate::validation::{require_text, ValidationError};

/// Language and skill answers shared by the scored applicant categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillProfile {
    pub language_score: i16,
    pub desired_skill: bool,
}

/// Non-positive score adjustment applied by origin country.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "i16", into = "i16")]
pub struct OriginModifier(i16);

impl OriginModifier {
    pub fn new(modifier: i16) -> Result<Self, ValidationError> {
        if modifier > 0 {
            return Err(ValidationError::PositiveOriginModifier { modifier });
        }
        Ok(Self(modifier))
    }

    pub fn value(self) -> i16 {
        self.0
    }
}

impl TryFrom<i16> for OriginModifier {
    type Error = ValidationError;

    fn try_from(value: i16) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<OriginModifier> for i16 {
    fn from(value: OriginModifier) -> Self {
        value.0
    }
}

/// Applicant variants and the data each one is scored on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "category", rename_all = "snake_case")]
pub enum ApplicantKind {
    Normal(SkillProfile),
    ThirdWorld {
        profile: SkillProfile,
        origin_modifier: OriginModifier,
    },
    Vip,
}

impl ApplicantKind {
    pub fn category(&self) -> ApplicantCategory {
        match self {
            ApplicantKind::Normal(_) => ApplicantCategory::Normal,
            ApplicantKind::ThirdWorld { .. } => ApplicantCategory::ThirdWorld,
            ApplicantKind::Vip => ApplicantCategory::Vip,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicantCategory {
    Normal,
    ThirdWorld,
    Vip,
}

impl ApplicantCategory {
    pub const fn label(self) -> &'static str {
        match self {
            ApplicantCategory::Normal => "normal",
            ApplicantCategory::ThirdWorld => "third_world",
            ApplicantCategory::Vip => "vip",
        }
    }
}

/// A visa applicant composed with an optional background check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Applicant {
    first_name: String,
    last_name: String,
    kind: ApplicantKind,
    background_check: Option<BackgroundCheck>,
}

impl Applicant {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        kind: ApplicantKind,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            first_name: require_text("first name", first_name)?,
            last_name: require_text("last name", last_name)?,
            kind,
            background_check: None,
        })
    }

    pub fn normal(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        language_score: i16,
        desired_skill: bool,
    ) -> Result<Self, ValidationError> {
        Self::new(
            first_name,
            last_name,
            ApplicantKind::Normal(SkillProfile {
                language_score,
                desired_skill,
            }),
        )
    }

    pub fn third_world(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        language_score: i16,
        desired_skill: bool,
        origin_modifier: i16,
    ) -> Result<Self, ValidationError> {
        let origin_modifier = OriginModifier::new(origin_modifier)?;
        Self::new(
            first_name,
            last_name,
            ApplicantKind::ThirdWorld {
                profile: SkillProfile {
                    language_score,
                    desired_skill,
                },
                origin_modifier,
            },
        )
    }

    pub fn vip(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Self::new(first_name, last_name, ApplicantKind::Vip)
    }

    pub fn with_background_check(mut self, check: BackgroundCheck) -> Self {
        self.background_check = Some(check);
        self
    }

    pub fn set_background_check(&mut self, check: BackgroundCheck) {
        self.background_check = Some(check);
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn kind(&self) -> &ApplicantKind {
        &self.kind
    }

    pub fn background_check(&self) -> Option<&BackgroundCheck> {
        self.background_check.as_ref()
    }

    /// `None` until a check has been performed.
    pub fn background_status(&self, threat_level_ceiling: u8) -> Option<bool> {
        self.background_check.map(|check| check.clears(threat_level_ceiling))
    }
}

/// Applicant score; VIPs are not scored numerically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicantScore {
    Points(i16),
    Vip,
}

impl fmt::Display for ApplicantScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApplicantScore::Points(points) => write!(f, "{points}"),
            ApplicantScore::Vip => f.write_str("VIP"),
        }
    }
}
