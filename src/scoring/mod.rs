//! Points-based eligibility scoring engine.
//!
//! Pure and stateless: each calculation validates the inbound profile,
//! normalizes the raw language sub-scores into benchmark levels, and applies
//! one program's category tables. No I/O, no shared state, nothing survives a
//! call.

mod breakdown;
pub mod crs;
pub mod domain;
pub mod fsw;
pub mod language;
pub mod provincial;
pub mod router;
mod validate;

#[cfg(test)]
mod tests;

pub use breakdown::{BreakdownBuilder, ScoreBreakdown, ScoreCategory};
pub use domain::{
    ApplicantProfile, EducationLevel, LanguageScores, LanguageTest, Program, RegionTier, Skill,
    SpouseProfile,
};
pub use language::{normalize, SkillLevels, BELOW_BENCHMARK};
pub use router::scoring_router;
pub use validate::{ProfileValidator, ValidatedProfile, ValidationLimits};

/// Errors raised while validating or scoring a single profile. All of them are
/// caller input errors, deterministic, and local to one calculation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ScoringError {
    #[error("age {age} outside supported range {min}..={max}")]
    AgeOutOfRange { age: u8, min: u8, max: u8 },
    #[error("{field} of {years} years outside supported range 0..={max}")]
    ExperienceOutOfRange {
        field: &'static str,
        years: f64,
        max: f64,
    },
    #[error(
        "{} {} score {value} outside valid range {min}..={max}",
        .test.label(),
        .skill.label()
    )]
    SkillScoreOutOfRange {
        test: LanguageTest,
        skill: Skill,
        value: f64,
        min: f64,
        max: f64,
    },
    #[error("hourly wage {wage} outside supported range 0..={max}")]
    WageOutOfRange { wage: f64, max: f64 },
    #[error("spouse language level {level} outside benchmark range 0..=10")]
    LanguageLevelOutOfRange { level: u8 },
    #[error("required field '{field}' missing for the requested program")]
    MissingField { field: &'static str },
    #[error("unsupported language test '{value}'")]
    UnsupportedTestType { value: String },
    #[error("unsupported {field} value '{value}' for this program's tables")]
    UnsupportedCategoryValue {
        field: &'static str,
        value: String,
    },
}

/// Stateless facade wiring validation, benchmark normalization, and the
/// per-program calculators together.
#[derive(Debug, Clone, Default)]
pub struct ScoringEngine {
    validator: ProfileValidator,
}

impl ScoringEngine {
    pub fn new(limits: ValidationLimits) -> Self {
        Self {
            validator: ProfileValidator::with_limits(limits),
        }
    }

    pub fn validator(&self) -> &ProfileValidator {
        &self.validator
    }

    /// Score a profile against the named program.
    pub fn score(
        &self,
        program: Program,
        profile: ApplicantProfile,
    ) -> Result<ScoreBreakdown, ScoringError> {
        match program {
            Program::Crs => self.crs(profile),
            Program::Fsw => self.fsw(profile),
            Program::Provincial => self.provincial(profile),
        }
    }

    pub fn crs(&self, profile: ApplicantProfile) -> Result<ScoreBreakdown, ScoringError> {
        let validated = self.validator.validate(profile)?;
        let levels = language::normalize(&validated.get().first_language)?;
        Ok(crs::compute(validated.get(), &levels))
    }

    pub fn fsw(&self, profile: ApplicantProfile) -> Result<ScoreBreakdown, ScoringError> {
        let validated = self.validator.validate(profile)?;
        let first = language::normalize(&validated.get().first_language)?;
        let second = validated
            .get()
            .second_language
            .as_ref()
            .map(language::normalize)
            .transpose()?;
        Ok(fsw::compute(validated.get(), &first, second.as_ref()))
    }

    pub fn provincial(&self, profile: ApplicantProfile) -> Result<ScoreBreakdown, ScoringError> {
        let validated = self.validator.validate(profile)?;
        let levels = language::normalize(&validated.get().first_language)?;
        provincial::compute(validated.get(), &levels)
    }

    /// Range-check and normalize one test sitting without scoring a program.
    pub fn normalize(&self, scores: &LanguageScores) -> Result<SkillLevels, ScoringError> {
        self.validator.validate_language(scores)?;
        language::normalize(scores)
    }
}
