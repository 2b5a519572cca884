use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::core::skills::join_skills;
use crate::models::domain::NewVolunteer;

/// Volunteer form submission
///
/// Built from the raw url-encoded pairs because `skills` is a repeated field.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct VolunteerForm {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "email is required"))]
    pub email: String,
    #[serde(default)]
    pub skills: Vec<String>,
}

/// Problems with a submitted form
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("missing form field: {0}")]
    MissingField(&'static str),

    #[error("invalid form: {0}")]
    Invalid(String),
}

impl VolunteerForm {
    /// Collect the url-encoded pairs of a submission
    ///
    /// Later `name`/`email` values win; every `skills` value is kept in order.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Result<Self, FormError> {
        let mut name = None;
        let mut email = None;
        let mut skills = Vec::new();

        for (key, value) in pairs {
            match key.as_str() {
                "name" => name = Some(value),
                "email" => email = Some(value),
                "skills" => skills.push(value),
                _ => {}
            }
        }

        let form = Self {
            name: name.ok_or(FormError::MissingField("name"))?.trim().to_string(),
            email: email.ok_or(FormError::MissingField("email"))?.trim().to_string(),
            skills,
        };

        form.validate()
            .map_err(|errors| FormError::Invalid(errors.to_string()))?;

        Ok(form)
    }

    /// Storage representation, skills joined with ", "
    pub fn into_new_volunteer(self) -> NewVolunteer {
        NewVolunteer {
            skills: join_skills(&self.skills),
            name: self.name,
            email: self.email,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
        items
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_repeated_skills_are_joined() {
        let form = VolunteerForm::from_pairs(pairs(&[
            ("name", "Ann"),
            ("email", "ann@example.org"),
            ("skills", "excel"),
            ("skills", "data entry"),
        ]))
        .unwrap();

        let volunteer = form.into_new_volunteer();
        assert_eq!(volunteer.skills, "excel, data entry");
    }

    #[test]
    fn test_no_skills_is_valid() {
        let form = VolunteerForm::from_pairs(pairs(&[("name", "Ann"), ("email", "a@b.c")])).unwrap();
        assert_eq!(form.into_new_volunteer().skills, "");
    }

    #[test]
    fn test_missing_name_is_rejected() {
        let err = VolunteerForm::from_pairs(pairs(&[("email", "a@b.c")])).unwrap_err();
        assert_eq!(err, FormError::MissingField("name"));
    }

    #[test]
    fn test_blank_email_is_rejected() {
        let err = VolunteerForm::from_pairs(pairs(&[("name", "Ann"), ("email", "  ")])).unwrap_err();
        assert!(matches!(err, FormError::Invalid(_)));
    }
}
