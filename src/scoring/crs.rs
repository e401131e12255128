//! Comprehensive Ranking System calculator.

use super::breakdown::{BreakdownBuilder, ScoreBreakdown, ScoreCategory};
use super::domain::{ApplicantProfile, EducationLevel, Program};
use super::language::SkillLevels;

pub const WORK_EXPERIENCE_MAX: u32 = 80;
pub const CANADIAN_EXPERIENCE_MAX: u32 = 20;
pub const LANGUAGE_MAX: u32 = 136;
pub const JOB_OFFER_BONUS: u32 = 50;
pub const PROVINCIAL_NOMINATION_BONUS: u32 = 600;
const CANADIAN_EDUCATION_BONUS: u32 = 15;
const SPOUSE_EXPERIENCE_MAX: f64 = 15.0;
const SPOUSE_LANGUAGE_MAX: u32 = 20;

/// Points by age, indexed directly by age in years. Ages past the end of the
/// table score zero, as do ages under 18.
#[rustfmt::skip]
const AGE_POINTS: &[u32] = &[
    // 0-17
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    // 18, 19
    99, 105,
    // 20-29
    110, 110, 110, 110, 110, 110, 110, 110, 110, 110,
    // 30-44
    105, 99, 94, 88, 83, 77, 72, 66, 61, 55, 50, 39, 28, 17, 6,
];

fn age_points(age: u8) -> u32 {
    AGE_POINTS.get(usize::from(age)).copied().unwrap_or(0)
}

fn education_points(level: EducationLevel) -> u32 {
    match level {
        EducationLevel::LessThanHighSchool => 0,
        EducationLevel::HighSchool => 30,
        EducationLevel::Diploma => 90,
        EducationLevel::Associate => 98,
        EducationLevel::Bachelor => 120,
        EducationLevel::PostgraduateDiploma => 125,
        EducationLevel::Master => 130,
        EducationLevel::Doctorate => 135,
    }
}

fn spouse_education_points(level: EducationLevel) -> u32 {
    match level {
        EducationLevel::LessThanHighSchool => 0,
        EducationLevel::HighSchool => 13,
        EducationLevel::Diploma => 19,
        EducationLevel::Associate => 22,
        EducationLevel::Bachelor => 25,
        EducationLevel::PostgraduateDiploma => 29,
        EducationLevel::Master | EducationLevel::Doctorate => 32,
    }
}

/// Score a validated profile against the CRS tables. Category caps are applied
/// per factor; there is no program-wide maximum beyond them.
pub fn compute(profile: &ApplicantProfile, levels: &SkillLevels) -> ScoreBreakdown {
    let mut builder = BreakdownBuilder::new(Program::Crs);

    builder.score(ScoreCategory::Age, age_points(profile.age));

    let mut education = education_points(profile.education);
    if profile.canadian_education {
        education += CANADIAN_EDUCATION_BONUS;
    }
    builder.score(ScoreCategory::Education, education);

    builder.capped(
        ScoreCategory::WorkExperience,
        profile.work_experience_years * 2.0,
        WORK_EXPERIENCE_MAX,
    );
    if profile.canadian_work_experience_years > 0.0 {
        builder.capped(
            ScoreCategory::CanadianWorkExperience,
            profile.canadian_work_experience_years * 2.0,
            CANADIAN_EXPERIENCE_MAX,
        );
    }

    // Sum-across-skills strategy; individual skill levels are not capped.
    builder.capped(
        ScoreCategory::Language,
        f64::from(levels.combined_total() * 2),
        LANGUAGE_MAX,
    );

    if let Some(spouse) = &profile.spouse {
        let experience = spouse
            .work_experience_years
            .min(SPOUSE_EXPERIENCE_MAX)
            .round() as u32;
        let language = (u32::from(spouse.language_level) * 2).min(SPOUSE_LANGUAGE_MAX);
        let points = spouse_education_points(spouse.education) + experience + language;
        builder.score(ScoreCategory::Spouse, points);
    }

    if profile.has_job_offer {
        builder.score(ScoreCategory::JobOffer, JOB_OFFER_BONUS);
    }
    if profile.has_provincial_nomination {
        builder.score(
            ScoreCategory::ProvincialNomination,
            PROVINCIAL_NOMINATION_BONUS,
        );
    }

    builder.finish()
}
