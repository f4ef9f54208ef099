//! Field-level normalization and length capping
//!
//! Every edit passes through these functions before the value is stored, so
//! downstream consumers (validator, scorer, renderers) only ever see trimmed,
//! length-capped text.

use crate::error::Result;
use crate::processing::document::{
    EducationEntry, ExperienceEntry, PersonalInfo, ProjectEntry, ResumeDocument,
};
use crate::processing::skills::SkillOrganizer;
use unicode_segmentation::UnicodeSegmentation;

/// Per-field length caps. Values over the cap are truncated, never rejected.
pub mod limits {
    pub const FULL_NAME: usize = 50;
    pub const EMAIL: usize = 50;
    pub const PHONE: usize = 20;
    pub const LOCATION: usize = 100;
    pub const COMPANY: usize = 100;
    pub const POSITION: usize = 100;
    pub const DESCRIPTION_BULLET: usize = 200;
    pub const SUMMARY: usize = 500;
    pub const SCHOOL: usize = 100;
    pub const DEGREE: usize = 100;
    pub const FIELD_OF_STUDY: usize = 100;
    pub const SKILL_CATEGORY: usize = 30;
    pub const SKILL_ITEM: usize = 50;
    pub const PROJECT_NAME: usize = 100;
    pub const PROJECT_DESCRIPTION: usize = 300;
    pub const PROJECT_TECHNOLOGY: usize = 50;
}

/// Verbs recognized at the head of an achievement bullet. A description that
/// does not open with one gets a verb prepended during formatting.
pub const ACTION_VERBS: [&str; 15] = [
    "achieved",
    "developed",
    "implemented",
    "created",
    "managed",
    "led",
    "designed",
    "improved",
    "increased",
    "reduced",
    "coordinated",
    "launched",
    "built",
    "established",
    "generated",
];

/// Truncate to `max_len` grapheme clusters, then trim surrounding whitespace.
/// Total and idempotent.
pub fn normalize_field(value: &str, max_len: usize) -> String {
    let truncated: String = value.graphemes(true).take(max_len).collect();
    truncated.trim().to_string()
}

/// Strip everything but digits; a 10-digit number is reformatted as
/// `(AAA) BBB-CCCC`, anything else is returned unchanged.
pub fn format_phone_number(phone: &str) -> String {
    let digits: String = phone.chars().filter(|c| c.is_ascii_digit()).collect();

    if digits.len() == 10 {
        format!("({}) {}-{}", &digits[..3], &digits[3..6], &digits[6..])
    } else {
        phone.to_string()
    }
}

/// Normalize a single bullet: drop one leading marker, capitalize the first
/// character, end with a period.
pub fn format_bullet_point(text: &str) -> String {
    let text = match text.strip_prefix(&['•', '-', '*'][..]) {
        Some(rest) => rest.trim_start(),
        None => text,
    };

    let mut formatted = String::with_capacity(text.len() + 1);
    let mut chars = text.chars();
    if let Some(first) = chars.next() {
        formatted.extend(first.to_uppercase());
        formatted.push_str(chars.as_str());
    }

    if !formatted.ends_with('.') {
        formatted.push('.');
    }

    formatted
}

/// Supplies the verb prepended to a bullet that does not open with one.
///
/// Injectable so callers control the rewrite: the default picker cycles the
/// vocabulary deterministically, and [`FixedVerbPicker`] pins a single verb
/// for fully reproducible output.
pub trait VerbPicker {
    fn pick(&mut self) -> &str;
}

/// Walks [`ACTION_VERBS`] in declaration order, wrapping around.
#[derive(Debug, Default)]
pub struct CyclingVerbPicker {
    cursor: usize,
}

impl CyclingVerbPicker {
    pub fn new() -> Self {
        Self::default()
    }
}

impl VerbPicker for CyclingVerbPicker {
    fn pick(&mut self) -> &str {
        let verb = ACTION_VERBS[self.cursor % ACTION_VERBS.len()];
        self.cursor += 1;
        verb
    }
}

/// Always returns the same verb.
#[derive(Debug, Clone)]
pub struct FixedVerbPicker {
    verb: String,
}

impl FixedVerbPicker {
    pub fn new(verb: impl Into<String>) -> Self {
        Self { verb: verb.into() }
    }
}

impl VerbPicker for FixedVerbPicker {
    fn pick(&mut self) -> &str {
        &self.verb
    }
}

/// Cap, verb-check, and bullet-format every experience description.
///
/// Re-running over already-formatted bullets never prepends again: the first
/// token then matches the vocabulary.
pub fn format_experience_descriptions(
    descriptions: &[String],
    picker: &mut dyn VerbPicker,
) -> Vec<String> {
    descriptions
        .iter()
        .map(|desc| {
            let desc = normalize_field(desc, limits::DESCRIPTION_BULLET);

            let first_word = desc
                .split_whitespace()
                .next()
                .unwrap_or("")
                .to_lowercase();

            let desc = if ACTION_VERBS.contains(&first_word.as_str()) {
                desc
            } else {
                format!("{} {}", picker.pick(), desc)
            };

            format_bullet_point(&desc)
        })
        .collect()
}

/// Applies every field-level cap and formatter to a whole document.
pub struct DocumentNormalizer {
    organizer: SkillOrganizer,
    picker: Box<dyn VerbPicker>,
}

impl DocumentNormalizer {
    pub fn new() -> Result<Self> {
        Self::with_picker(Box::new(CyclingVerbPicker::new()))
    }

    pub fn with_picker(picker: Box<dyn VerbPicker>) -> Result<Self> {
        Ok(Self {
            organizer: SkillOrganizer::new()?,
            picker,
        })
    }

    /// Rebuild the document with every capped field normalized, the phone
    /// reformatted, descriptions rewritten, and skills re-partitioned.
    ///
    /// The document is replaced whole rather than patched in place, so any
    /// observer sees one consistent new value per edit.
    pub fn normalize(&mut self, doc: &ResumeDocument) -> ResumeDocument {
        ResumeDocument {
            personal_info: PersonalInfo {
                full_name: normalize_field(&doc.personal_info.full_name, limits::FULL_NAME),
                email: normalize_field(&doc.personal_info.email, limits::EMAIL),
                phone: format_phone_number(&doc.personal_info.phone),
                location: normalize_field(&doc.personal_info.location, limits::LOCATION),
                linkedin: doc.personal_info.linkedin.clone(),
                portfolio: doc.personal_info.portfolio.clone(),
            },
            summary: normalize_field(&doc.summary, limits::SUMMARY),
            experience: doc
                .experience
                .iter()
                .map(|exp| ExperienceEntry {
                    company: normalize_field(&exp.company, limits::COMPANY),
                    position: normalize_field(&exp.position, limits::POSITION),
                    location: exp.location.clone(),
                    start_date: exp.start_date.clone(),
                    end_date: exp.end_date.clone(),
                    description: format_experience_descriptions(
                        &exp.description,
                        self.picker.as_mut(),
                    ),
                })
                .collect(),
            education: doc
                .education
                .iter()
                .map(|edu| EducationEntry {
                    school: normalize_field(&edu.school, limits::SCHOOL),
                    degree: normalize_field(&edu.degree, limits::DEGREE),
                    field_of_study: normalize_field(&edu.field_of_study, limits::FIELD_OF_STUDY),
                    start_date: edu.start_date.clone(),
                    end_date: edu.end_date.clone(),
                    gpa: edu.gpa.clone(),
                })
                .collect(),
            skills: self.organizer.organize(&doc.skills),
            projects: doc
                .projects
                .iter()
                .map(|project| ProjectEntry {
                    name: normalize_field(&project.name, limits::PROJECT_NAME),
                    description: normalize_field(
                        &project.description,
                        limits::PROJECT_DESCRIPTION,
                    ),
                    technologies: project
                        .technologies
                        .iter()
                        .map(|tech| normalize_field(tech, limits::PROJECT_TECHNOLOGY))
                        .collect(),
                    link: project.link.clone(),
                })
                .collect(),
        }
    }
}
