//! Whole-document validation for submission gating

use crate::processing::dates::DateValidator;
use crate::processing::document::ResumeDocument;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Highest GPA the validator accepts. No lower bound is enforced.
pub const MAX_GPA: f64 = 4.0;

/// One rule violation, addressed by field path (`experience[2].startDate`)
/// so the form layer can attach it to the offending input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

/// Result of one validation pass. `valid` is true iff `errors` is empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub valid: bool,
    pub errors: Vec<ValidationError>,
}

/// Applies every field rule to a document in a single pass.
///
/// Rules are independent: no violation stops evaluation of later rules, so
/// one pass collects everything the form needs to display.
pub struct FormValidator {
    full_name_pattern: Regex,
    email_pattern: Regex,
    phone_pattern: Regex,
    dates: DateValidator,
}

impl FormValidator {
    pub fn new() -> Self {
        Self::with_date_validator(DateValidator::new())
    }

    pub fn with_date_validator(dates: DateValidator) -> Self {
        let full_name_pattern =
            Regex::new(r"^[a-zA-Z\s\-'.]{2,}$").expect("Invalid full name pattern");
        let email_pattern =
            Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Invalid email pattern");
        let phone_pattern = Regex::new(r"^[\d\s\-+()]{10,}$").expect("Invalid phone pattern");

        Self {
            full_name_pattern,
            email_pattern,
            phone_pattern,
            dates,
        }
    }

    pub fn validate(&self, doc: &ResumeDocument) -> ValidationReport {
        let mut errors = Vec::new();

        if !self.full_name_pattern.is_match(&doc.personal_info.full_name) {
            errors.push(ValidationError {
                field: "fullName".to_string(),
                message: "Please enter a valid full name (letters, spaces, and hyphens only)"
                    .to_string(),
            });
        }

        if !self.email_pattern.is_match(&doc.personal_info.email) {
            errors.push(ValidationError {
                field: "email".to_string(),
                message: "Please enter a valid email address".to_string(),
            });
        }

        if !self.phone_pattern.is_match(&doc.personal_info.phone) {
            errors.push(ValidationError {
                field: "phone".to_string(),
                message: "Please enter a valid phone number".to_string(),
            });
        }

        for (index, exp) in doc.experience.iter().enumerate() {
            if !self.dates.is_valid(&exp.start_date) {
                errors.push(ValidationError {
                    field: format!("experience[{}].startDate", index),
                    message: "Please enter a valid date (MM/YYYY)".to_string(),
                });
            }

            if !self.dates.is_valid(&exp.end_date) && !exp.end_date.eq_ignore_ascii_case("present")
            {
                errors.push(ValidationError {
                    field: format!("experience[{}].endDate", index),
                    message: "Please enter a valid date (MM/YYYY) or \"Present\"".to_string(),
                });
            }

            if exp.description.is_empty() {
                errors.push(ValidationError {
                    field: format!("experience[{}].description", index),
                    message: "Please add at least one bullet point".to_string(),
                });
            }
        }

        for (index, edu) in doc.education.iter().enumerate() {
            if !self.dates.is_valid(&edu.start_date) {
                errors.push(ValidationError {
                    field: format!("education[{}].startDate", index),
                    message: "Please enter a valid date (MM/YYYY)".to_string(),
                });
            }

            if !self.dates.is_valid(&edu.end_date)
                && !edu.end_date.eq_ignore_ascii_case("present")
                && !edu.end_date.to_lowercase().contains("expected")
            {
                errors.push(ValidationError {
                    field: format!("education[{}].endDate", index),
                    message: "Please enter a valid date (MM/YYYY), \"Present\", or \"Expected MM/YYYY\""
                        .to_string(),
                });
            }

            if let Some(gpa) = &edu.gpa {
                let in_range = matches!(gpa.trim().parse::<f64>(), Ok(value) if value <= MAX_GPA);
                if !gpa.is_empty() && !in_range {
                    errors.push(ValidationError {
                        field: format!("education[{}].gpa", index),
                        message: "Please enter a valid GPA (0.0-4.0)".to_string(),
                    });
                }
            }
        }

        if doc.skills.is_empty() {
            errors.push(ValidationError {
                field: "skills".to_string(),
                message: "Please add at least one skill".to_string(),
            });
        }

        for (index, group) in doc.skills.iter().enumerate() {
            if group.items.is_empty() {
                errors.push(ValidationError {
                    field: format!("skills[{}].items", index),
                    message: "Please add at least one skill item".to_string(),
                });
            }
        }

        ValidationReport {
            valid: errors.is_empty(),
            errors,
        }
    }
}

impl Default for FormValidator {
    fn default() -> Self {
        Self::new()
    }
}
