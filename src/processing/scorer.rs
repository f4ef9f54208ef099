//! Heuristic ATS compatibility scoring
//!
//! Five weighted rubrics (personal info 20, summary 15, experience 30,
//! education 15, skills 20) evaluated independently and additively. Scoring
//! never fails: any well-typed document produces a score and feedback.

use crate::processing::document::ResumeDocument;
use aho_corasick::AhoCorasick;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Action verbs expected at the head of achievement bullets.
const BULLET_ACTION_VERBS: [&str; 8] = [
    "led",
    "developed",
    "managed",
    "created",
    "implemented",
    "achieved",
    "increased",
    "reduced",
];

/// Terms whose presence in the summary reads as industry signal.
const INDUSTRY_TERMS: [&str; 5] = [
    "experienced",
    "professional",
    "skilled",
    "expertise",
    "accomplished",
];

/// Summary word-count band earning full points.
pub const SUMMARY_WORDS_MIN: usize = 50;
pub const SUMMARY_WORDS_MAX: usize = 200;

/// Severity attached to a feedback message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
    Info,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feedback {
    pub severity: Severity,
    pub message: String,
}

impl Feedback {
    fn error(message: &str) -> Self {
        Self {
            severity: Severity::Error,
            message: message.to_string(),
        }
    }

    fn warning(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            message: message.into(),
        }
    }

    fn info(message: &str) -> Self {
        Self {
            severity: Severity::Info,
            message: message.to_string(),
        }
    }
}

/// The five scoring rubrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rubric {
    PersonalInfo,
    Summary,
    Experience,
    Education,
    Skills,
}

impl fmt::Display for Rubric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rubric::PersonalInfo => write!(f, "Personal Info"),
            Rubric::Summary => write!(f, "Summary"),
            Rubric::Experience => write!(f, "Experience"),
            Rubric::Education => write!(f, "Education"),
            Rubric::Skills => write!(f, "Skills"),
        }
    }
}

/// Earned and maximum points for one rubric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RubricScore {
    pub rubric: Rubric,
    pub earned: u32,
    pub max: u32,
}

/// Display bands for the overall score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoreCategory {
    Excellent,
    Good,
    NeedsImprovement,
    Poor,
}

impl ScoreCategory {
    pub fn from_score(score: u8) -> Self {
        if score >= 85 {
            ScoreCategory::Excellent
        } else if score >= 70 {
            ScoreCategory::Good
        } else if score >= 50 {
            ScoreCategory::NeedsImprovement
        } else {
            ScoreCategory::Poor
        }
    }
}

impl fmt::Display for ScoreCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScoreCategory::Excellent => write!(f, "Excellent"),
            ScoreCategory::Good => write!(f, "Good"),
            ScoreCategory::NeedsImprovement => write!(f, "Needs Improvement"),
            ScoreCategory::Poor => write!(f, "Poor"),
        }
    }
}

/// Result of scoring a document.
///
/// `critical_issues` reports absent required content; `improvements` carries
/// softer quality suggestions. Neither blocks anything by itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreAnalysis {
    pub score: u8,
    pub breakdown: Vec<RubricScore>,
    pub critical_issues: Vec<Feedback>,
    pub improvements: Vec<Feedback>,
}

impl ScoreAnalysis {
    pub fn category(&self) -> ScoreCategory {
        ScoreCategory::from_score(self.score)
    }
}

/// Evaluates a resume against the five rubrics.
pub struct AtsScorer {
    loose_phone_pattern: Regex,
    metric_pattern: Regex,
    month_year_pattern: Regex,
    industry_terms: AhoCorasick,
}

impl AtsScorer {
    pub fn new() -> Self {
        let loose_phone_pattern =
            Regex::new(r"^\+?[\d\s\-()]{10,}$").expect("Invalid phone pattern");
        let metric_pattern =
            Regex::new(r"\d+%|\d+x|\$\d+|\d+ [a-zA-Z]+").expect("Invalid metric pattern");
        let month_year_pattern = Regex::new(r"^\d{2}/\d{4}$").expect("Invalid date pattern");
        let industry_terms = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .build(INDUSTRY_TERMS)
            .expect("Failed to build industry term matcher");

        Self {
            loose_phone_pattern,
            metric_pattern,
            month_year_pattern,
            industry_terms,
        }
    }

    /// Score the document. Deterministic and total: every rubric is
    /// evaluated even when earlier ones find nothing.
    pub fn score(&self, doc: &ResumeDocument) -> ScoreAnalysis {
        let mut critical_issues = Vec::new();
        let mut improvements = Vec::new();
        let mut breakdown = Vec::with_capacity(5);

        breakdown.push(self.score_personal_info(doc, &mut critical_issues, &mut improvements));
        breakdown.push(self.score_summary(doc, &mut critical_issues, &mut improvements));
        breakdown.push(self.score_experience(doc, &mut critical_issues, &mut improvements));
        breakdown.push(self.score_education(doc, &mut critical_issues, &mut improvements));
        breakdown.push(self.score_skills(doc, &mut critical_issues, &mut improvements));

        let earned: u32 = breakdown.iter().map(|r| r.earned).sum();
        let max: u32 = breakdown.iter().map(|r| r.max).sum();
        let score = ((earned as f64 / max as f64) * 100.0).round() as u8;

        ScoreAnalysis {
            score,
            breakdown,
            critical_issues,
            improvements,
        }
    }

    fn score_personal_info(
        &self,
        doc: &ResumeDocument,
        critical_issues: &mut Vec<Feedback>,
        improvements: &mut Vec<Feedback>,
    ) -> RubricScore {
        let info = &doc.personal_info;
        let mut earned = 0;

        if !info.full_name.is_empty() {
            earned += 5;
            if info.full_name.chars().count() < 3 {
                improvements.push(Feedback::warning(
                    "Consider using your full legal name for better ATS recognition",
                ));
            }
        } else {
            critical_issues.push(Feedback::error("Missing full name"));
        }

        if !info.email.is_empty() {
            earned += 5;
            if !info.email.contains('@') {
                improvements.push(Feedback::error("Invalid email format"));
            }
        } else {
            critical_issues.push(Feedback::error("Missing email address"));
        }

        if !info.phone.is_empty() {
            earned += 5;
            if !self.loose_phone_pattern.is_match(&info.phone) {
                improvements.push(Feedback::warning(
                    "Phone number format might not be recognized by all ATS systems",
                ));
            }
        } else {
            critical_issues.push(Feedback::error("Missing phone number"));
        }

        if !info.location.is_empty() {
            earned += 5;
            if !info.location.contains(',') {
                improvements.push(Feedback::info(
                    "Consider adding city and country/state for better location matching",
                ));
            }
        } else {
            critical_issues.push(Feedback::warning(
                "Consider adding location for local job matching",
            ));
        }

        RubricScore {
            rubric: Rubric::PersonalInfo,
            earned,
            max: 20,
        }
    }

    fn score_summary(
        &self,
        doc: &ResumeDocument,
        critical_issues: &mut Vec<Feedback>,
        improvements: &mut Vec<Feedback>,
    ) -> RubricScore {
        let mut earned = 0;

        if !doc.summary.is_empty() {
            let words = doc.summary.split_whitespace().count();
            if (SUMMARY_WORDS_MIN..=SUMMARY_WORDS_MAX).contains(&words) {
                earned += 15;
            } else if words < SUMMARY_WORDS_MIN {
                earned += 10;
                improvements.push(Feedback::warning(
                    "Professional summary should be 50-200 words for optimal ATS scanning",
                ));
            } else {
                earned += 5;
                improvements.push(Feedback::warning(
                    "Professional summary is too long, consider condensing it",
                ));
            }

            if !self.industry_terms.is_match(&doc.summary) {
                improvements.push(Feedback::info(
                    "Consider adding industry-specific keywords to your summary",
                ));
            }
        } else {
            critical_issues.push(Feedback::error("Missing professional summary"));
        }

        RubricScore {
            rubric: Rubric::Summary,
            earned,
            max: 15,
        }
    }

    fn score_experience(
        &self,
        doc: &ResumeDocument,
        critical_issues: &mut Vec<Feedback>,
        improvements: &mut Vec<Feedback>,
    ) -> RubricScore {
        let mut earned = 0;

        if !doc.experience.is_empty() {
            earned += (doc.experience.len() as u32 * 5).min(15);

            let mut has_detailed_descriptions = true;
            let mut has_action_verbs = true;
            let mut has_metrics = true;

            for exp in &doc.experience {
                if exp.description.len() < 3 {
                    has_detailed_descriptions = false;
                }

                let all_bullets_open_with_verb = exp.description.iter().all(|desc| {
                    let lower = desc.to_lowercase();
                    BULLET_ACTION_VERBS.iter().any(|verb| lower.starts_with(verb))
                });
                if !all_bullets_open_with_verb {
                    has_action_verbs = false;
                }

                let some_bullet_has_metric = exp
                    .description
                    .iter()
                    .any(|desc| self.metric_pattern.is_match(desc));
                if !some_bullet_has_metric {
                    has_metrics = false;
                }

                // Looser than the form validator on purpose: this is advisory,
                // so month 13 passes here.
                let start_ok = self.month_year_pattern.is_match(&exp.start_date);
                let end_ok = self.month_year_pattern.is_match(&exp.end_date)
                    || exp.end_date.eq_ignore_ascii_case("present");
                if !start_ok || !end_ok {
                    improvements.push(Feedback::warning(format!(
                        "Date format in {} experience should be MM/YYYY",
                        exp.company
                    )));
                }
            }

            if has_detailed_descriptions {
                earned += 5;
            } else {
                improvements.push(Feedback::warning(
                    "Add more details to work experiences (aim for 3-5 bullet points each)",
                ));
            }

            if has_action_verbs {
                earned += 5;
            } else {
                improvements.push(Feedback::warning(
                    "Start achievement bullets with strong action verbs",
                ));
            }

            if has_metrics {
                earned += 5;
            } else {
                improvements.push(Feedback::info(
                    "Include measurable achievements and metrics in your experience",
                ));
            }
        } else {
            critical_issues.push(Feedback::error("Missing work experience"));
        }

        RubricScore {
            rubric: Rubric::Experience,
            earned,
            max: 30,
        }
    }

    fn score_education(
        &self,
        doc: &ResumeDocument,
        critical_issues: &mut Vec<Feedback>,
        improvements: &mut Vec<Feedback>,
    ) -> RubricScore {
        let mut earned = 0;

        if !doc.education.is_empty() {
            earned += 10;

            let complete = doc.education.iter().all(|edu| {
                !edu.degree.is_empty()
                    && !edu.field_of_study.is_empty()
                    && !edu.school.is_empty()
                    && !edu.start_date.is_empty()
                    && !edu.end_date.is_empty()
            });

            if complete {
                earned += 5;
            } else {
                improvements.push(Feedback::warning(
                    "Include complete education details for better matching",
                ));
            }
        } else {
            critical_issues.push(Feedback::error("Missing education information"));
        }

        RubricScore {
            rubric: Rubric::Education,
            earned,
            max: 15,
        }
    }

    fn score_skills(
        &self,
        doc: &ResumeDocument,
        critical_issues: &mut Vec<Feedback>,
        improvements: &mut Vec<Feedback>,
    ) -> RubricScore {
        let mut earned = 0;

        if !doc.skills.is_empty() {
            earned += (doc.skills.len() as u32 * 3).min(10);

            let categorized = doc
                .skills
                .iter()
                .all(|group| !group.category.is_empty() && group.items.len() >= 3);
            if categorized {
                earned += 5;
            } else {
                improvements.push(Feedback::warning(
                    "Organize skills into clear categories with at least 3 items each",
                ));
            }

            let has_technical = doc.skills.iter().any(|group| {
                let category = group.category.to_lowercase();
                category.contains("technical") || category.contains("programming")
            });
            let has_soft = doc.skills.iter().any(|group| {
                let category = group.category.to_lowercase();
                category.contains("soft") || category.contains("interpersonal")
            });

            if has_technical && has_soft {
                earned += 5;
            } else {
                improvements.push(Feedback::info(
                    "Include both technical and soft skills for a well-rounded profile",
                ));
            }
        } else {
            critical_issues.push(Feedback::error("Missing skills section"));
        }

        RubricScore {
            rubric: Rubric::Skills,
            earned,
            max: 20,
        }
    }
}

impl Default for AtsScorer {
    fn default() -> Self {
        Self::new()
    }
}
