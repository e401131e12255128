//! Raw-score to Canadian Language Benchmark conversion tables.
//!
//! Each table is an ordered list of `(minimum raw score, CLB level)` pairs sorted
//! descending by minimum. The first entry whose minimum is at or below the raw
//! score decides the level; a raw score below every entry maps to the below-
//! benchmark sentinel (level 0). Cut points intentionally differ between skills
//! of the same test (IELTS, PTE, TEF); CELPIP is the one test whose scale is
//! uniform across skills. Values mirror the official IRCC conversion charts.

pub(super) type ThresholdTable = &'static [(f64, u8)];

pub(super) const IELTS_LISTENING: ThresholdTable = &[
    (8.5, 10),
    (8.0, 9),
    (7.5, 8),
    (6.5, 7),
    (5.5, 6),
    (5.0, 5),
    (4.5, 4),
];

pub(super) const IELTS_READING: ThresholdTable = &[
    (8.0, 10),
    (7.0, 9),
    (6.5, 8),
    (6.0, 7),
    (5.0, 6),
    (4.0, 5),
    (3.5, 4),
];

pub(super) const IELTS_WRITING: ThresholdTable = &[
    (7.5, 10),
    (7.0, 9),
    (6.5, 8),
    (6.0, 7),
    (5.5, 6),
    (5.0, 5),
    (4.0, 4),
];

pub(super) const IELTS_SPEAKING: ThresholdTable = &[
    (7.5, 10),
    (7.0, 9),
    (6.5, 8),
    (6.0, 7),
    (5.5, 6),
    (5.0, 5),
    (4.0, 4),
];

// CELPIP reports CLB-aligned levels directly.
pub(super) const CELPIP_ALL_SKILLS: ThresholdTable = &[
    (10.0, 10),
    (9.0, 9),
    (8.0, 8),
    (7.0, 7),
    (6.0, 6),
    (5.0, 5),
    (4.0, 4),
];

pub(super) const PTE_LISTENING: ThresholdTable = &[
    (89.0, 10),
    (82.0, 9),
    (71.0, 8),
    (60.0, 7),
    (50.0, 6),
    (39.0, 5),
    (28.0, 4),
];

pub(super) const PTE_READING: ThresholdTable = &[
    (88.0, 10),
    (78.0, 9),
    (69.0, 8),
    (60.0, 7),
    (51.0, 6),
    (42.0, 5),
    (33.0, 4),
];

pub(super) const PTE_WRITING: ThresholdTable = &[
    (90.0, 10),
    (88.0, 9),
    (79.0, 8),
    (69.0, 7),
    (60.0, 6),
    (51.0, 5),
    (41.0, 4),
];

pub(super) const PTE_SPEAKING: ThresholdTable = &[
    (89.0, 10),
    (84.0, 9),
    (76.0, 8),
    (68.0, 7),
    (59.0, 6),
    (51.0, 5),
    (42.0, 4),
];

pub(super) const TEF_LISTENING: ThresholdTable = &[
    (546.0, 10),
    (503.0, 9),
    (462.0, 8),
    (434.0, 7),
    (393.0, 6),
    (352.0, 5),
    (306.0, 4),
];

// TEF reading shares the listening cut points.
pub(super) const TEF_READING: ThresholdTable = TEF_LISTENING;

pub(super) const TEF_WRITING: ThresholdTable = &[
    (558.0, 10),
    (512.0, 9),
    (472.0, 8),
    (428.0, 7),
    (379.0, 6),
    (330.0, 5),
    (268.0, 4),
];

pub(super) const TEF_SPEAKING: ThresholdTable = &[
    (556.0, 10),
    (518.0, 9),
    (494.0, 8),
    (456.0, 7),
    (422.0, 6),
    (387.0, 5),
    (328.0, 4),
];
