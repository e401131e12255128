//! BC-style provincial nomination calculator.

use super::breakdown::{BreakdownBuilder, ScoreBreakdown, ScoreCategory};
use super::domain::{ApplicantProfile, EducationLevel, Program, RegionTier};
use super::language::SkillLevels;
use super::ScoringError;

pub const WAGE_MAX_POINTS: u32 = 55;
const CANADIAN_EXPERIENCE_BONUS: u32 = 10;

fn experience_points(years: f64) -> u32 {
    if years >= 5.0 {
        20
    } else if years >= 4.0 {
        16
    } else if years >= 3.0 {
        12
    } else if years >= 2.0 {
        8
    } else if years >= 1.0 {
        4
    } else if years > 0.0 {
        1
    } else {
        0
    }
}

fn education_points(level: EducationLevel) -> Result<u32, ScoringError> {
    match level {
        EducationLevel::Doctorate => Ok(27),
        EducationLevel::Master => Ok(22),
        EducationLevel::PostgraduateDiploma => Ok(15),
        EducationLevel::Bachelor => Ok(15),
        EducationLevel::Associate => Ok(5),
        EducationLevel::Diploma => Ok(5),
        EducationLevel::HighSchool => Ok(0),
        // Not an entry in the provincial education table.
        EducationLevel::LessThanHighSchool => Err(ScoringError::UnsupportedCategoryValue {
            field: "education",
            value: level.label().to_string(),
        }),
    }
}

/// Minimum-across-skills strategy: the weakest skill decides the tier.
fn language_points(levels: &SkillLevels) -> u32 {
    match levels.weakest() {
        level if level >= 9 => 30,
        8 => 25,
        7 => 20,
        6 => 15,
        5 => 10,
        4 => 5,
        _ => 0,
    }
}

fn wage_points(wage: f64) -> u32 {
    if wage >= 70.0 {
        WAGE_MAX_POINTS
    } else if wage >= 16.0 {
        (wage - 15.0).round() as u32
    } else {
        0
    }
}

fn region_points(tier: RegionTier) -> u32 {
    match tier {
        RegionTier::Tier1 => 0,
        RegionTier::Tier2 => 5,
        RegionTier::Tier3 => 15,
    }
}

/// Score a validated profile against the provincial nomination tables. Wage and
/// region are required for this program; the total is an unconstrained sum.
pub fn compute(
    profile: &ApplicantProfile,
    levels: &SkillLevels,
) -> Result<ScoreBreakdown, ScoringError> {
    let wage = profile
        .hourly_wage
        .ok_or(ScoringError::MissingField {
            field: "hourly_wage",
        })?;
    let region = profile
        .region
        .ok_or(ScoringError::MissingField { field: "region" })?;

    let mut builder = BreakdownBuilder::new(Program::Provincial);

    builder.score(
        ScoreCategory::WorkExperience,
        experience_points(profile.work_experience_years),
    );
    // Any Canadian experience at all earns the flat bonus; it is not scaled.
    if profile.canadian_work_experience_years > 0.0 {
        builder.score(
            ScoreCategory::CanadianWorkExperience,
            CANADIAN_EXPERIENCE_BONUS,
        );
    }
    builder.score(
        ScoreCategory::Education,
        education_points(profile.education)?,
    );
    builder.score(ScoreCategory::Language, language_points(levels));
    builder.score(ScoreCategory::Wage, wage_points(wage));
    builder.score(ScoreCategory::Region, region_points(region));

    Ok(builder.finish())
}
