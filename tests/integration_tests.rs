//! Integration tests for resume studio

use resume_studio::input::loader::DocumentLoader;
use resume_studio::processing::dates::DateValidator;
use resume_studio::processing::normalizer::{DocumentNormalizer, FixedVerbPicker};
use resume_studio::processing::scorer::{AtsScorer, ScoreCategory};
use resume_studio::processing::validator::FormValidator;
use std::path::Path;

fn validator() -> FormValidator {
    FormValidator::with_date_validator(DateValidator::with_reference_year(2026))
}

#[test]
fn test_complete_resume_scores_100_and_validates() {
    let mut loader = DocumentLoader::new();
    let doc = loader
        .load(Path::new("tests/fixtures/complete_resume.json"))
        .unwrap();

    let analysis = AtsScorer::new().score(&doc);
    assert_eq!(analysis.score, 100, "breakdown: {:?}", analysis.breakdown);
    assert!(analysis.critical_issues.is_empty());
    assert_eq!(analysis.category(), ScoreCategory::Excellent);

    let report = validator().validate(&doc);
    assert!(report.valid, "unexpected errors: {:?}", report.errors);
}

#[test]
fn test_sparse_resume_scores_low_with_field_errors() {
    let mut loader = DocumentLoader::new();
    let doc = loader
        .load(Path::new("tests/fixtures/sparse_resume.json"))
        .unwrap();

    let analysis = AtsScorer::new().score(&doc);
    // personal 15, summary 10, experience 10 (volume 5 + vacuous verb gate)
    assert_eq!(analysis.score, 35);
    assert_eq!(analysis.category(), ScoreCategory::Poor);
    assert!(!analysis.critical_issues.is_empty());

    let report = validator().validate(&doc);
    assert!(!report.valid);
    let fields: Vec<&str> = report.errors.iter().map(|e| e.field.as_str()).collect();
    assert!(fields.contains(&"fullName"));
    assert!(fields.contains(&"email"));
    assert!(fields.contains(&"phone"));
    assert!(fields.contains(&"experience[0].startDate"));
    assert!(fields.contains(&"experience[0].endDate"));
    assert!(fields.contains(&"experience[0].description"));
    assert!(fields.contains(&"skills"));
}

#[test]
fn test_toml_resume_loads() {
    let mut loader = DocumentLoader::new();
    let doc = loader
        .load(Path::new("tests/fixtures/complete_resume.toml"))
        .unwrap();

    assert_eq!(doc.personal_info.full_name, "Jane Doe");
    assert_eq!(doc.skills.len(), 1);
    assert!(validator().validate(&doc).valid);
}

#[test]
fn test_caching_functionality() {
    let mut loader = DocumentLoader::new();
    let path = Path::new("tests/fixtures/complete_resume.json");

    let first = loader.load(path).unwrap();
    assert_eq!(loader.cache_size(), 1);

    let second = loader.load(path).unwrap();
    assert_eq!(first, second);
    assert_eq!(loader.cache_size(), 1);
}

#[test]
fn test_unsupported_file_type() {
    let mut loader = DocumentLoader::new();
    let result = loader.load(Path::new("tests/fixtures/unsupported.xyz"));
    assert!(result.is_err());
}

#[test]
fn test_nonexistent_file() {
    let mut loader = DocumentLoader::new();
    let result = loader.load(Path::new("tests/fixtures/nonexistent.json"));
    assert!(result.is_err());
}

#[test]
fn test_normalize_round_trip_through_disk() {
    let mut loader = DocumentLoader::new().with_cache(false);
    let doc = loader
        .load(Path::new("tests/fixtures/sparse_resume.json"))
        .unwrap();

    let mut normalizer =
        DocumentNormalizer::with_picker(Box::new(FixedVerbPicker::new("developed"))).unwrap();
    let normalized = normalizer.normalize(&doc);

    let dir = tempfile::tempdir().unwrap();
    let out_path = dir.path().join("normalized.json");
    loader.save(&out_path, &normalized).unwrap();

    let reloaded = loader.load(&out_path).unwrap();
    assert_eq!(reloaded, normalized);
}

#[test]
fn test_normalizing_complete_resume_preserves_score() {
    let mut loader = DocumentLoader::new();
    let doc = loader
        .load(Path::new("tests/fixtures/complete_resume.json"))
        .unwrap();

    let mut normalizer = DocumentNormalizer::new().unwrap();
    let normalized = normalizer.normalize(&doc);

    // bullets already open with action verbs and end with periods, and skill
    // groups keep their stated categories, so normalization costs no points
    let analysis = AtsScorer::new().score(&normalized);
    assert_eq!(analysis.score, 100, "breakdown: {:?}", analysis.breakdown);
}
