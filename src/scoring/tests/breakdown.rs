use crate::scoring::{BreakdownBuilder, Program, ScoreCategory};

#[test]
fn capped_contributions_clamp_before_summation() {
    let mut builder = BreakdownBuilder::new(Program::Crs);
    builder.capped(ScoreCategory::WorkExperience, 120.0, 80);
    builder.capped(ScoreCategory::Language, 63.6, 136);
    let breakdown = builder.finish();

    assert_eq!(breakdown.category(ScoreCategory::WorkExperience), 80);
    assert_eq!(breakdown.category(ScoreCategory::Language), 64);
    assert_eq!(breakdown.total, 144);
}

#[test]
fn absent_categories_contribute_zero() {
    let breakdown = BreakdownBuilder::new(Program::Fsw).finish();
    assert_eq!(breakdown.category(ScoreCategory::Age), 0);
    assert_eq!(breakdown.total, 0);
}

#[test]
fn program_cap_clamps_the_total() {
    let mut builder = BreakdownBuilder::new(Program::Fsw).with_program_cap(100);
    builder.score(ScoreCategory::Age, 60);
    builder.score(ScoreCategory::Education, 60);
    let breakdown = builder.finish();
    assert_eq!(breakdown.total, 100);
}

#[test]
fn negative_inputs_floor_at_zero() {
    let mut builder = BreakdownBuilder::new(Program::Provincial);
    builder.capped(ScoreCategory::Wage, -4.0, 55);
    let breakdown = builder.finish();
    assert_eq!(breakdown.category(ScoreCategory::Wage), 0);
}

#[test]
fn breakdown_serializes_with_snake_case_categories() {
    let mut builder = BreakdownBuilder::new(Program::Provincial);
    builder.score(ScoreCategory::CanadianWorkExperience, 10);
    let breakdown = builder.finish();

    let value = serde_json::to_value(&breakdown).expect("serializes");
    assert_eq!(value["program"], "provincial");
    assert_eq!(value["categories"]["canadian_work_experience"], 10);
    assert_eq!(value["total"], 10);
}
