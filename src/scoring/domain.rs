use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::ScoringError;

/// Immigration programs the engine can score against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Program {
    Crs,
    Fsw,
    Provincial,
}

impl Program {
    pub const fn label(self) -> &'static str {
        match self {
            Program::Crs => "crs",
            Program::Fsw => "fsw",
            Program::Provincial => "provincial",
        }
    }
}

impl FromStr for Program {
    type Err = ScoringError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "crs" | "express-entry" => Ok(Program::Crs),
            "fsw" => Ok(Program::Fsw),
            "provincial" | "pnp" => Ok(Program::Provincial),
            _ => Err(ScoringError::UnsupportedCategoryValue {
                field: "program",
                value: value.to_string(),
            }),
        }
    }
}

/// The four language skills, in the fixed order used throughout the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Skill {
    Listening,
    Reading,
    Writing,
    Speaking,
}

impl Skill {
    pub const ALL: [Skill; 4] = [
        Skill::Listening,
        Skill::Reading,
        Skill::Writing,
        Skill::Speaking,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Skill::Listening => "listening",
            Skill::Reading => "reading",
            Skill::Writing => "writing",
            Skill::Speaking => "speaking",
        }
    }
}

/// Recognized language tests. TCF is accepted on the wire but has no
/// provisioned conversion table yet; normalizing it is an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LanguageTest {
    Ielts,
    Celpip,
    Pte,
    Tef,
    Tcf,
}

impl LanguageTest {
    pub const fn label(self) -> &'static str {
        match self {
            LanguageTest::Ielts => "IELTS",
            LanguageTest::Celpip => "CELPIP",
            LanguageTest::Pte => "PTE",
            LanguageTest::Tef => "TEF",
            LanguageTest::Tcf => "TCF",
        }
    }
}

impl FromStr for LanguageTest {
    type Err = ScoringError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "ielts" => Ok(LanguageTest::Ielts),
            "celpip" => Ok(LanguageTest::Celpip),
            "pte" => Ok(LanguageTest::Pte),
            "tef" => Ok(LanguageTest::Tef),
            "tcf" => Ok(LanguageTest::Tcf),
            _ => Err(ScoringError::UnsupportedTestType {
                value: value.to_string(),
            }),
        }
    }
}

/// Education credential categories shared across the program tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EducationLevel {
    LessThanHighSchool,
    HighSchool,
    Diploma,
    Associate,
    Bachelor,
    PostgraduateDiploma,
    Master,
    Doctorate,
}

impl EducationLevel {
    pub const fn label(self) -> &'static str {
        match self {
            EducationLevel::LessThanHighSchool => "less_than_high_school",
            EducationLevel::HighSchool => "high_school",
            EducationLevel::Diploma => "diploma",
            EducationLevel::Associate => "associate",
            EducationLevel::Bachelor => "bachelor",
            EducationLevel::PostgraduateDiploma => "postgraduate_diploma",
            EducationLevel::Master => "master",
            EducationLevel::Doctorate => "doctorate",
        }
    }
}

/// Wage-region tiers used by the provincial nomination tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegionTier {
    Tier1,
    Tier2,
    Tier3,
}

/// Raw sub-scores for one sitting of a language test.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LanguageScores {
    pub test: LanguageTest,
    pub listening: f64,
    pub reading: f64,
    pub writing: f64,
    pub speaking: f64,
}

impl LanguageScores {
    pub fn raw(&self, skill: Skill) -> f64 {
        match skill {
            Skill::Listening => self.listening,
            Skill::Reading => self.reading,
            Skill::Writing => self.writing,
            Skill::Speaking => self.speaking,
        }
    }
}

/// Spouse or common-law partner subset, consumed only when declared.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpouseProfile {
    pub education: EducationLevel,
    #[serde(default)]
    pub work_experience_years: f64,
    /// Benchmark level already established for the spouse (0-10).
    pub language_level: u8,
}

/// Applicant snapshot consumed by every calculator. Created fresh per request,
/// never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicantProfile {
    pub age: u8,
    pub education: EducationLevel,
    #[serde(default)]
    pub canadian_education: bool,
    pub work_experience_years: f64,
    #[serde(default)]
    pub canadian_work_experience_years: f64,
    pub first_language: LanguageScores,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub second_language: Option<LanguageScores>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spouse: Option<SpouseProfile>,
    #[serde(default)]
    pub has_job_offer: bool,
    #[serde(default)]
    pub has_provincial_nomination: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hourly_wage: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<RegionTier>,
}
