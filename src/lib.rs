//! Points-based eligibility scoring for Canadian economic immigration programs.
//!
//! The heart of the crate is [`scoring`]: a pure, stateless engine that converts
//! raw language-test sub-scores into Canadian Language Benchmark levels and applies
//! per-program category tables (Comprehensive Ranking System, Federal Skilled
//! Worker, BC-style provincial nomination) to an applicant profile. The
//! configuration, telemetry, and HTTP router modules are plumbing around that
//! engine.

pub mod config;
pub mod error;
pub mod scoring;
pub mod telemetry;
