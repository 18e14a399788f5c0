/// Input validation failures shared by the discount and visa workflows.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{field} must not be blank")]
    Blank { field: &'static str },
    #[error("'{email}' is not a valid email address")]
    InvalidEmail { email: String },
    #[error("third-world applicants cannot have a positive origin modifier (found {modifier})")]
    PositiveOriginModifier { modifier: i16 },
}

pub(crate) fn require_text(
    field: &'static str,
    value: impl Into<String>,
) -> Result<String, ValidationError> {
    let value = value.into();
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Blank { field });
    }
    Ok(trimmed.to_string())
}

pub(crate) fn require_email(value: impl Into<String>) -> Result<String, ValidationError> {
    let email = require_text("email", value)?;
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(email),
        _ => Err(ValidationError::InvalidEmail { email }),
    }
}
