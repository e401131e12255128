use super::domain::{ApplicantProfile, LanguageScores, Skill, SpouseProfile};
use super::language;
use super::ScoringError;

const DEFAULT_MIN_AGE: u8 = 18;
const DEFAULT_MAX_AGE: u8 = 100;
const DEFAULT_MAX_EXPERIENCE_YEARS: f64 = 60.0;
const DEFAULT_MAX_HOURLY_WAGE: f64 = 500.0;

/// Domain bounds applied before any scoring happens.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationLimits {
    pub min_age: u8,
    pub max_age: u8,
    pub max_experience_years: f64,
    pub max_hourly_wage: f64,
}

impl Default for ValidationLimits {
    fn default() -> Self {
        Self {
            min_age: DEFAULT_MIN_AGE,
            max_age: DEFAULT_MAX_AGE,
            max_experience_years: DEFAULT_MAX_EXPERIENCE_YEARS,
            max_hourly_wage: DEFAULT_MAX_HOURLY_WAGE,
        }
    }
}

/// Guard responsible for producing [`ValidatedProfile`] instances.
///
/// Validation fails fast on the first out-of-domain field; a profile that
/// cannot be validated is never partially scored.
#[derive(Debug, Clone, Default)]
pub struct ProfileValidator {
    limits: ValidationLimits,
}

impl ProfileValidator {
    pub fn with_limits(limits: ValidationLimits) -> Self {
        Self { limits }
    }

    pub fn limits(&self) -> &ValidationLimits {
        &self.limits
    }

    pub fn validate(&self, profile: ApplicantProfile) -> Result<ValidatedProfile, ScoringError> {
        if profile.age < self.limits.min_age || profile.age > self.limits.max_age {
            return Err(ScoringError::AgeOutOfRange {
                age: profile.age,
                min: self.limits.min_age,
                max: self.limits.max_age,
            });
        }

        self.check_experience("work_experience_years", profile.work_experience_years)?;
        self.check_experience(
            "canadian_work_experience_years",
            profile.canadian_work_experience_years,
        )?;

        self.validate_language(&profile.first_language)?;
        if let Some(second) = &profile.second_language {
            self.validate_language(second)?;
        }

        if let Some(wage) = profile.hourly_wage {
            if !wage.is_finite() || wage < 0.0 || wage > self.limits.max_hourly_wage {
                return Err(ScoringError::WageOutOfRange {
                    wage,
                    max: self.limits.max_hourly_wage,
                });
            }
        }

        if let Some(spouse) = &profile.spouse {
            self.check_spouse(spouse)?;
        }

        Ok(ValidatedProfile { profile })
    }

    /// Range-check one test sitting against the declared test's raw-score
    /// domain. Also rejects unsupported test types.
    pub fn validate_language(&self, scores: &LanguageScores) -> Result<(), ScoringError> {
        let (min, max) = language::score_domain(scores.test)?;
        for skill in Skill::ALL {
            let value = scores.raw(skill);
            if !value.is_finite() || value < min || value > max {
                return Err(ScoringError::SkillScoreOutOfRange {
                    test: scores.test,
                    skill,
                    value,
                    min,
                    max,
                });
            }
        }
        Ok(())
    }

    fn check_experience(&self, field: &'static str, years: f64) -> Result<(), ScoringError> {
        if !years.is_finite() || years < 0.0 || years > self.limits.max_experience_years {
            return Err(ScoringError::ExperienceOutOfRange {
                field,
                years,
                max: self.limits.max_experience_years,
            });
        }
        Ok(())
    }

    fn check_spouse(&self, spouse: &SpouseProfile) -> Result<(), ScoringError> {
        self.check_experience("spouse.work_experience_years", spouse.work_experience_years)?;
        if spouse.language_level > 10 {
            return Err(ScoringError::LanguageLevelOutOfRange {
                level: spouse.language_level,
            });
        }
        Ok(())
    }
}

/// An applicant profile whose fields have passed the domain checks. Calculators
/// only accept validated input.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedProfile {
    profile: ApplicantProfile,
}

impl ValidatedProfile {
    pub fn get(&self) -> &ApplicantProfile {
        &self.profile
    }

    pub fn into_inner(self) -> ApplicantProfile {
        self.profile
    }
}
