use std::collections::BTreeMap;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::domain::Industry;

/// Details captured from the person taking the survey.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Respondent {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub industry: Option<Industry>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RespondentField {
    Name,
    Email,
    Phone,
}

/// Field-scoped validation messages; empty means the form may advance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<RespondentField, &'static str>);

impl FieldErrors {
    pub fn get(&self, field: RespondentField) -> Option<&'static str> {
        self.0.get(&field).copied()
    }

    pub fn contains(&self, field: RespondentField) -> bool {
        self.0.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub(crate) fn insert(&mut self, field: RespondentField, message: &'static str) {
        self.0.insert(field, message);
    }
}

impl Respondent {
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::default();

        if self.name.trim().is_empty() {
            errors.insert(RespondentField::Name, "Name is required");
        }

        let email = self.email.trim();
        if email.is_empty() {
            errors.insert(RespondentField::Email, "Email is required");
        } else if !is_valid_email(email) {
            errors.insert(RespondentField::Email, "Please enter a valid email address");
        }

        if !self.phone.trim().is_empty() && !is_valid_au_phone(&self.phone) {
            errors.insert(
                RespondentField::Phone,
                "Please enter a valid Australian phone number",
            );
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Copy with surrounding whitespace removed from every free-text field.
    pub fn normalized(&self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            company: self.company.trim().to_string(),
            industry: self.industry,
        }
    }
}

fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"))
}

fn au_phone_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^(?:\+61|0)[23478]\d{8}$").expect("valid phone regex"))
}

pub fn is_valid_email(value: &str) -> bool {
    email_pattern().is_match(value)
}

/// Australian mobile or landline, ignoring spaces and hyphens.
pub fn is_valid_au_phone(value: &str) -> bool {
    let compact: String = value
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '-')
        .collect();
    au_phone_pattern().is_match(&compact)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn respondent(name: &str, email: &str, phone: &str) -> Respondent {
        Respondent {
            name: name.to_string(),
            email: email.to_string(),
            phone: phone.to_string(),
            ..Respondent::default()
        }
    }

    #[test]
    fn accepts_minimal_valid_details() {
        assert!(respondent("Sam", "a@b.c", "").validate().is_ok());
        assert!(respondent("Sam", "a@b.c", "0412345678").validate().is_ok());
    }

    #[test]
    fn missing_fields_are_reported_per_field() {
        let errors = respondent("   ", "", "").validate().expect_err("invalid");
        assert_eq!(errors.len(), 2);
        assert_eq!(errors.get(RespondentField::Name), Some("Name is required"));
        assert_eq!(errors.get(RespondentField::Email), Some("Email is required"));
        assert!(!errors.contains(RespondentField::Phone));
    }

    #[test]
    fn email_shape_is_checked() {
        for bad in ["plainaddress", "a@b", "a @b.c", "a@@b.c", "@b.c", "a@.c x"] {
            assert!(!is_valid_email(bad), "{bad} should be rejected");
        }
        assert!(is_valid_email("jo.smith@example.com.au"));
    }

    #[test]
    fn phone_accepts_australian_shapes() {
        for good in ["0412345678", "0412 345 678", "+61 412 345 678", "02-9876-5432", "0887654321"] {
            assert!(is_valid_au_phone(good), "{good} should be accepted");
        }
        for bad in ["123", "0512345678", "+1 412 345 678", "041234567", "04123456789"] {
            assert!(!is_valid_au_phone(bad), "{bad} should be rejected");
        }
        let errors = respondent("Sam", "a@b.c", "123").validate().expect_err("bad phone");
        assert!(errors.contains(RespondentField::Phone));
    }

    #[test]
    fn normalized_trims_text_fields() {
        let trimmed = respondent("  Sam ", " a@b.c ", " ").normalized();
        assert_eq!(trimmed.name, "Sam");
        assert_eq!(trimmed.email, "a@b.c");
        assert!(trimmed.phone.is_empty());
    }
}
