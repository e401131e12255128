use super::common::*;
use crate::scoring::domain::EducationLevel;
use crate::scoring::{Program, ScoreCategory, ScoringError};

#[test]
fn worked_example_totals_142() {
    let breakdown = engine()
        .provincial(provincial_profile())
        .expect("profile scores");

    assert_eq!(breakdown.program, Program::Provincial);
    assert_eq!(breakdown.category(ScoreCategory::WorkExperience), 20);
    assert_eq!(breakdown.category(ScoreCategory::CanadianWorkExperience), 10);
    assert_eq!(breakdown.category(ScoreCategory::Education), 22);
    assert_eq!(breakdown.category(ScoreCategory::Language), 30);
    assert_eq!(breakdown.category(ScoreCategory::Wage), 45);
    assert_eq!(breakdown.category(ScoreCategory::Region), 15);
    assert_eq!(breakdown.total, 142);
}

#[test]
fn wage_boundaries() {
    let mut profile = provincial_profile();
    profile.hourly_wage = Some(16.0);
    let breakdown = engine().provincial(profile).expect("profile scores");
    assert_eq!(breakdown.category(ScoreCategory::Wage), 1);

    let mut profile = provincial_profile();
    profile.hourly_wage = Some(15.0);
    let breakdown = engine().provincial(profile).expect("profile scores");
    assert_eq!(breakdown.category(ScoreCategory::Wage), 0);

    let mut profile = provincial_profile();
    profile.hourly_wage = Some(70.0);
    let breakdown = engine().provincial(profile).expect("profile scores");
    assert_eq!(breakdown.category(ScoreCategory::Wage), 55);
}

#[test]
fn experience_brackets() {
    let cases = [
        (0.0, 0),
        (0.5, 1),
        (1.0, 4),
        (2.5, 8),
        (3.0, 12),
        (4.0, 16),
        (5.0, 20),
        (9.0, 20),
    ];
    for (years, expected) in cases {
        let mut profile = provincial_profile();
        profile.work_experience_years = years;
        let breakdown = engine().provincial(profile).expect("profile scores");
        assert_eq!(
            breakdown.category(ScoreCategory::WorkExperience),
            expected,
            "{years} years"
        );
    }
}

#[test]
fn canadian_experience_bonus_is_flat() {
    let mut profile = provincial_profile();
    profile.canadian_work_experience_years = 0.25;
    let breakdown = engine().provincial(profile).expect("profile scores");
    assert_eq!(breakdown.category(ScoreCategory::CanadianWorkExperience), 10);

    let mut profile = provincial_profile();
    profile.canadian_work_experience_years = 8.0;
    let breakdown = engine().provincial(profile).expect("profile scores");
    assert_eq!(breakdown.category(ScoreCategory::CanadianWorkExperience), 10);

    let mut profile = provincial_profile();
    profile.canadian_work_experience_years = 0.0;
    let breakdown = engine().provincial(profile).expect("profile scores");
    assert!(!breakdown
        .categories
        .contains_key(&ScoreCategory::CanadianWorkExperience));
}

#[test]
fn language_uses_the_weakest_skill() {
    let mut profile = provincial_profile();
    profile.first_language = celpip(9.0);
    profile.first_language.speaking = 5.0;
    let breakdown = engine().provincial(profile).expect("profile scores");
    assert_eq!(breakdown.category(ScoreCategory::Language), 10);
}

#[test]
fn education_below_high_school_is_not_in_the_table() {
    let mut profile = provincial_profile();
    profile.education = EducationLevel::LessThanHighSchool;
    match engine().provincial(profile) {
        Err(ScoringError::UnsupportedCategoryValue { field, value }) => {
            assert_eq!(field, "education");
            assert_eq!(value, "less_than_high_school");
        }
        other => panic!("expected unsupported category value, got {other:?}"),
    }
}

#[test]
fn wage_and_region_are_required() {
    let mut profile = provincial_profile();
    profile.hourly_wage = None;
    match engine().provincial(profile) {
        Err(ScoringError::MissingField { field }) => assert_eq!(field, "hourly_wage"),
        other => panic!("expected missing wage, got {other:?}"),
    }

    let mut profile = provincial_profile();
    profile.region = None;
    match engine().provincial(profile) {
        Err(ScoringError::MissingField { field }) => assert_eq!(field, "region"),
        other => panic!("expected missing region, got {other:?}"),
    }
}
