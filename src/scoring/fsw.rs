//! Federal Skilled Worker calculator.
//!
//! The language factor is the distinctive piece: each first-language skill is
//! scored independently and summed, while the second language is an
//! all-or-nothing bonus gated on the weakest skill. The two rules coexist and
//! must not be conflated.

use super::breakdown::{BreakdownBuilder, ScoreBreakdown, ScoreCategory};
use super::domain::{ApplicantProfile, EducationLevel, Program};
use super::language::SkillLevels;

/// Selection threshold for the program.
pub const PASS_MARK: u32 = 67;
pub const FIRST_LANGUAGE_MAX: u32 = 24;
pub const SECOND_LANGUAGE_BONUS: u32 = 4;
const PROGRAM_MAX: u32 = 100;
const JOB_OFFER_POINTS: u32 = 10;

/// Points for a single first-language skill at the given benchmark level.
pub fn skill_points(level: u8) -> u32 {
    match level {
        level if level >= 9 => 6,
        8 => 5,
        7 => 4,
        5 | 6 => 3,
        _ => 0,
    }
}

/// First official language: per-skill scoring summed across the four skills.
pub fn language_points(levels: &SkillLevels) -> u32 {
    levels
        .as_array()
        .into_iter()
        .map(skill_points)
        .sum::<u32>()
}

/// Second official language: a flat bonus awarded only when the minimum level
/// across all four skills reaches benchmark 5.
pub fn second_language_points(levels: &SkillLevels) -> u32 {
    if levels.weakest() >= 5 {
        SECOND_LANGUAGE_BONUS
    } else {
        0
    }
}

fn age_points(age: u8) -> u32 {
    match age {
        18..=35 => 12,
        36..=46 => u32::from(47 - age),
        _ => 0,
    }
}

fn education_points(level: EducationLevel) -> u32 {
    match level {
        EducationLevel::LessThanHighSchool => 0,
        EducationLevel::HighSchool => 5,
        EducationLevel::Diploma => 15,
        EducationLevel::Associate => 19,
        EducationLevel::Bachelor => 21,
        EducationLevel::PostgraduateDiploma => 22,
        EducationLevel::Master => 23,
        EducationLevel::Doctorate => 25,
    }
}

fn experience_points(years: f64) -> u32 {
    if years >= 6.0 {
        15
    } else if years >= 4.0 {
        13
    } else if years >= 2.0 {
        11
    } else if years >= 1.0 {
        9
    } else {
        0
    }
}

/// Score a validated profile against the FSW selection grid.
pub fn compute(
    profile: &ApplicantProfile,
    first: &SkillLevels,
    second: Option<&SkillLevels>,
) -> ScoreBreakdown {
    let mut builder = BreakdownBuilder::new(Program::Fsw).with_program_cap(PROGRAM_MAX);

    builder.score(ScoreCategory::Age, age_points(profile.age));
    builder.score(ScoreCategory::Education, education_points(profile.education));
    builder.score(
        ScoreCategory::WorkExperience,
        experience_points(profile.work_experience_years),
    );
    builder.capped(
        ScoreCategory::Language,
        f64::from(language_points(first)),
        FIRST_LANGUAGE_MAX,
    );
    if let Some(levels) = second {
        builder.score(ScoreCategory::SecondLanguage, second_language_points(levels));
    }
    if profile.has_job_offer {
        builder.score(ScoreCategory::JobOffer, JOB_OFFER_POINTS);
    }

    builder.finish()
}

/// Whether a breakdown clears the program's selection threshold.
pub fn meets_pass_mark(breakdown: &ScoreBreakdown) -> bool {
    breakdown.total >= PASS_MARK
}
