use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::domain::Program;

/// Scoring categories that may contribute to a program total. Ordered so the
/// serialized breakdown is stable for audits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreCategory {
    Age,
    Education,
    WorkExperience,
    CanadianWorkExperience,
    Language,
    SecondLanguage,
    Spouse,
    JobOffer,
    ProvincialNomination,
    Wage,
    Region,
}

impl ScoreCategory {
    pub const fn label(self) -> &'static str {
        match self {
            ScoreCategory::Age => "age",
            ScoreCategory::Education => "education",
            ScoreCategory::WorkExperience => "work_experience",
            ScoreCategory::CanadianWorkExperience => "canadian_work_experience",
            ScoreCategory::Language => "language",
            ScoreCategory::SecondLanguage => "second_language",
            ScoreCategory::Spouse => "spouse",
            ScoreCategory::JobOffer => "job_offer",
            ScoreCategory::ProvincialNomination => "provincial_nomination",
            ScoreCategory::Wage => "wage",
            ScoreCategory::Region => "region",
        }
    }
}

/// Per-category point contributions and their total for one calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub program: Program,
    pub categories: BTreeMap<ScoreCategory, u32>,
    pub total: u32,
}

impl ScoreBreakdown {
    /// Points contributed by one category; absent categories contribute zero.
    pub fn category(&self, category: ScoreCategory) -> u32 {
        self.categories.get(&category).copied().unwrap_or(0)
    }
}

/// Accumulates capped category contributions into a [`ScoreBreakdown`].
///
/// Category caps are clamped before summation; an optional program-wide
/// maximum clamps the final total.
pub struct BreakdownBuilder {
    program: Program,
    categories: BTreeMap<ScoreCategory, u32>,
    program_cap: Option<u32>,
}

impl BreakdownBuilder {
    pub fn new(program: Program) -> Self {
        Self {
            program,
            categories: BTreeMap::new(),
            program_cap: None,
        }
    }

    pub fn with_program_cap(mut self, cap: u32) -> Self {
        self.program_cap = Some(cap);
        self
    }

    /// Record an uncapped category contribution.
    pub fn score(&mut self, category: ScoreCategory, points: u32) -> &mut Self {
        self.categories.insert(category, points);
        self
    }

    /// Record a contribution clamped to the category's maximum. Fractional
    /// inputs (e.g. experience years doubled) are rounded to the nearest point
    /// before the cap applies.
    pub fn capped(&mut self, category: ScoreCategory, points: f64, cap: u32) -> &mut Self {
        let rounded = points.max(0.0).round() as u32;
        self.categories.insert(category, rounded.min(cap));
        self
    }

    pub fn finish(self) -> ScoreBreakdown {
        let sum: u32 = self.categories.values().copied().sum();
        let total = match self.program_cap {
            Some(cap) => sum.min(cap),
            None => sum,
        };
        ScoreBreakdown {
            program: self.program,
            categories: self.categories,
            total,
        }
    }
}
