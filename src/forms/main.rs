use serde::Deserialize;
use validator::{Validate, ValidationError};

/// Signup form submitted by the landing page.
///
/// All fields default so a missing key deserializes to an empty value and
/// is caught by validation instead of failing JSON extraction.
#[derive(Clone, Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct SignupForm {
    #[validate(length(min = 1))]
    pub company: String,
    #[validate(length(min = 1))]
    pub email: String,
    #[validate(length(min = 1))]
    pub password: String,
    #[validate(length(min = 1))]
    pub username: String,
    #[validate(length(min = 1), custom(function = validate_whatsapp))]
    pub whatsapp: String,
    pub terms_accepted: bool,
}

impl SignupForm {
    /// True when any required field is absent or empty, or terms were not
    /// accepted.
    pub fn has_missing_fields(&self) -> bool {
        !self.terms_accepted
            || [
                &self.company,
                &self.email,
                &self.password,
                &self.username,
                &self.whatsapp,
            ]
            .iter()
            .any(|field| field.trim().is_empty())
    }
}

fn digits_only(value: &str) -> String {
    value.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// A WhatsApp number is valid when it contains exactly 10 or 11 digits
/// after stripping formatting characters.
fn validate_whatsapp(value: &str) -> Result<(), ValidationError> {
    match digits_only(value).len() {
        10 | 11 => Ok(()),
        _ => Err(ValidationError::new("whatsapp")),
    }
}
