use super::common::*;
use crate::scoring::domain::{Skill, SpouseProfile};
use crate::scoring::{EducationLevel, ProfileValidator, ScoringError, ValidationLimits};

#[test]
fn age_below_minimum_is_rejected() {
    let mut profile = base_profile();
    profile.age = 17;
    match engine().crs(profile) {
        Err(ScoringError::AgeOutOfRange { age, min, .. }) => {
            assert_eq!(age, 17);
            assert_eq!(min, 18);
        }
        other => panic!("expected age rejection, got {other:?}"),
    }
}

#[test]
fn ielts_band_above_nine_is_rejected() {
    let mut profile = base_profile();
    profile.first_language = ielts(9.5, 7.0, 7.0, 7.0);
    match engine().crs(profile) {
        Err(ScoringError::SkillScoreOutOfRange { skill, value, .. }) => {
            assert_eq!(skill, Skill::Listening);
            assert_eq!(value, 9.5);
        }
        other => panic!("expected skill score rejection, got {other:?}"),
    }
}

#[test]
fn pte_score_below_scale_is_rejected() {
    let mut profile = base_profile();
    profile.first_language = pte(50.0, 5.0, 60.0, 60.0);
    match engine().crs(profile) {
        Err(ScoringError::SkillScoreOutOfRange { skill, .. }) => {
            assert_eq!(skill, Skill::Reading);
        }
        other => panic!("expected skill score rejection, got {other:?}"),
    }
}

#[test]
fn second_language_scores_are_validated_too() {
    let mut profile = base_profile();
    profile.second_language = Some(tef(800.0, 400.0, 400.0, 400.0));
    match engine().fsw(profile) {
        Err(ScoringError::SkillScoreOutOfRange { skill, value, .. }) => {
            assert_eq!(skill, Skill::Listening);
            assert_eq!(value, 800.0);
        }
        other => panic!("expected skill score rejection, got {other:?}"),
    }
}

#[test]
fn negative_experience_is_rejected() {
    let mut profile = base_profile();
    profile.work_experience_years = -1.0;
    match engine().crs(profile) {
        Err(ScoringError::ExperienceOutOfRange { field, .. }) => {
            assert_eq!(field, "work_experience_years");
        }
        other => panic!("expected experience rejection, got {other:?}"),
    }
}

#[test]
fn wage_beyond_limit_is_rejected() {
    let mut profile = provincial_profile();
    profile.hourly_wage = Some(10_000.0);
    match engine().provincial(profile) {
        Err(ScoringError::WageOutOfRange { wage, .. }) => assert_eq!(wage, 10_000.0),
        other => panic!("expected wage rejection, got {other:?}"),
    }
}

#[test]
fn spouse_language_level_is_bounded() {
    let mut profile = base_profile();
    profile.spouse = Some(SpouseProfile {
        education: EducationLevel::Bachelor,
        work_experience_years: 2.0,
        language_level: 11,
    });
    match engine().crs(profile) {
        Err(ScoringError::LanguageLevelOutOfRange { level }) => assert_eq!(level, 11),
        other => panic!("expected spouse level rejection, got {other:?}"),
    }
}

#[test]
fn custom_limits_are_honored() {
    let validator = ProfileValidator::with_limits(ValidationLimits {
        min_age: 21,
        ..ValidationLimits::default()
    });
    let mut profile = base_profile();
    profile.age = 19;
    match validator.validate(profile) {
        Err(ScoringError::AgeOutOfRange { min, .. }) => assert_eq!(min, 21),
        other => panic!("expected age rejection, got {other:?}"),
    }
}

#[test]
fn valid_profile_passes_through_unchanged() {
    let validator = ProfileValidator::default();
    let profile = base_profile();
    let validated = validator.validate(profile.clone()).expect("valid profile");
    assert_eq!(validated.get(), &profile);
    assert_eq!(validated.into_inner(), profile);
}
