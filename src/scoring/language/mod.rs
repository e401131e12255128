//! Conversion of raw language-test sub-scores into Canadian Language Benchmark
//! levels, independently per skill.

mod tables;

use serde::{Deserialize, Serialize};

use super::domain::{LanguageScores, LanguageTest, Skill};
use super::ScoringError;
use tables::ThresholdTable;

/// Sentinel for a raw score below the lowest published benchmark cut point.
pub const BELOW_BENCHMARK: u8 = 0;

/// Benchmark levels for one test sitting, in the engine's fixed skill order
/// (listening, reading, writing, speaking).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillLevels {
    pub listening: u8,
    pub reading: u8,
    pub writing: u8,
    pub speaking: u8,
}

impl SkillLevels {
    pub fn level(&self, skill: Skill) -> u8 {
        match skill {
            Skill::Listening => self.listening,
            Skill::Reading => self.reading,
            Skill::Writing => self.writing,
            Skill::Speaking => self.speaking,
        }
    }

    pub fn as_array(&self) -> [u8; 4] {
        [self.listening, self.reading, self.writing, self.speaking]
    }

    /// Sum-across-skills aggregation, used by the CRS language factor and the
    /// FSW first-language table.
    pub fn combined_total(&self) -> u32 {
        self.as_array().iter().map(|level| u32::from(*level)).sum()
    }

    /// Minimum-across-skills aggregation, used by the provincial language table
    /// and the FSW second-language eligibility rule. Deliberately distinct from
    /// [`SkillLevels::combined_total`]; the two must never be conflated.
    pub fn weakest(&self) -> u8 {
        self.as_array().into_iter().min().unwrap_or(BELOW_BENCHMARK)
    }
}

/// Convert one test sitting into per-skill benchmark levels.
///
/// Classification is a pure table lookup: the highest threshold at or below the
/// raw score wins, and a score below every threshold maps to
/// [`BELOW_BENCHMARK`]. Monotonic by construction — a higher raw score can never
/// produce a lower level.
pub fn normalize(scores: &LanguageScores) -> Result<SkillLevels, ScoringError> {
    Ok(SkillLevels {
        listening: classify(threshold_table(scores.test, Skill::Listening)?, scores.listening),
        reading: classify(threshold_table(scores.test, Skill::Reading)?, scores.reading),
        writing: classify(threshold_table(scores.test, Skill::Writing)?, scores.writing),
        speaking: classify(threshold_table(scores.test, Skill::Speaking)?, scores.speaking),
    })
}

/// Valid raw-score domain for a test, used by the profile validator.
pub fn score_domain(test: LanguageTest) -> Result<(f64, f64), ScoringError> {
    match test {
        LanguageTest::Ielts => Ok((0.0, 9.0)),
        LanguageTest::Celpip => Ok((1.0, 12.0)),
        LanguageTest::Pte => Ok((10.0, 90.0)),
        LanguageTest::Tef => Ok((0.0, 699.0)),
        LanguageTest::Tcf => Err(ScoringError::UnsupportedTestType {
            value: test.label().to_string(),
        }),
    }
}

fn threshold_table(test: LanguageTest, skill: Skill) -> Result<ThresholdTable, ScoringError> {
    let table = match (test, skill) {
        (LanguageTest::Ielts, Skill::Listening) => tables::IELTS_LISTENING,
        (LanguageTest::Ielts, Skill::Reading) => tables::IELTS_READING,
        (LanguageTest::Ielts, Skill::Writing) => tables::IELTS_WRITING,
        (LanguageTest::Ielts, Skill::Speaking) => tables::IELTS_SPEAKING,
        (LanguageTest::Celpip, _) => tables::CELPIP_ALL_SKILLS,
        (LanguageTest::Pte, Skill::Listening) => tables::PTE_LISTENING,
        (LanguageTest::Pte, Skill::Reading) => tables::PTE_READING,
        (LanguageTest::Pte, Skill::Writing) => tables::PTE_WRITING,
        (LanguageTest::Pte, Skill::Speaking) => tables::PTE_SPEAKING,
        (LanguageTest::Tef, Skill::Listening) => tables::TEF_LISTENING,
        (LanguageTest::Tef, Skill::Reading) => tables::TEF_READING,
        (LanguageTest::Tef, Skill::Writing) => tables::TEF_WRITING,
        (LanguageTest::Tef, Skill::Speaking) => tables::TEF_SPEAKING,
        (LanguageTest::Tcf, _) => {
            return Err(ScoringError::UnsupportedTestType {
                value: test.label().to_string(),
            })
        }
    };
    Ok(table)
}

fn classify(table: ThresholdTable, raw: f64) -> u8 {
    table
        .iter()
        .find(|(minimum, _)| raw >= *minimum)
        .map(|(_, level)| *level)
        .unwrap_or(BELOW_BENCHMARK)
}
