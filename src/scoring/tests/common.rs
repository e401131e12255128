use crate::scoring::domain::{
    ApplicantProfile, EducationLevel, LanguageScores, LanguageTest, RegionTier,
};
use crate::scoring::ScoringEngine;

pub(super) fn engine() -> ScoringEngine {
    ScoringEngine::default()
}

pub(super) fn ielts(listening: f64, reading: f64, writing: f64, speaking: f64) -> LanguageScores {
    LanguageScores {
        test: LanguageTest::Ielts,
        listening,
        reading,
        writing,
        speaking,
    }
}

pub(super) fn celpip(level: f64) -> LanguageScores {
    LanguageScores {
        test: LanguageTest::Celpip,
        listening: level,
        reading: level,
        writing: level,
        speaking: level,
    }
}

pub(super) fn pte(listening: f64, reading: f64, writing: f64, speaking: f64) -> LanguageScores {
    LanguageScores {
        test: LanguageTest::Pte,
        listening,
        reading,
        writing,
        speaking,
    }
}

pub(super) fn tef(listening: f64, reading: f64, writing: f64, speaking: f64) -> LanguageScores {
    LanguageScores {
        test: LanguageTest::Tef,
        listening,
        reading,
        writing,
        speaking,
    }
}

/// Thirty-year-old bachelor with five years of foreign experience and CLB 8
/// across the board, the reference profile for the CRS worked example.
pub(super) fn base_profile() -> ApplicantProfile {
    ApplicantProfile {
        age: 30,
        education: EducationLevel::Bachelor,
        canadian_education: false,
        work_experience_years: 5.0,
        canadian_work_experience_years: 0.0,
        first_language: celpip(8.0),
        second_language: None,
        spouse: None,
        has_job_offer: false,
        has_provincial_nomination: false,
        hourly_wage: None,
        region: None,
    }
}

pub(super) fn provincial_profile() -> ApplicantProfile {
    ApplicantProfile {
        age: 34,
        education: EducationLevel::Master,
        canadian_education: false,
        work_experience_years: 5.5,
        canadian_work_experience_years: 1.0,
        first_language: celpip(9.0),
        second_language: None,
        spouse: None,
        has_job_offer: false,
        has_provincial_nomination: false,
        hourly_wage: Some(60.0),
        region: Some(RegionTier::Tier3),
    }
}
