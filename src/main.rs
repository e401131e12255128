use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use axum_prometheus::PrometheusMetricLayer;
use clap::{Args, Parser, Subcommand};
use maple_score::config::AppConfig;
use maple_score::error::AppError;
use maple_score::scoring::{
    fsw, scoring_router, ApplicantProfile, LanguageScores, LanguageTest, Program, ScoreBreakdown,
    ScoringEngine, Skill, SkillLevels,
};
use maple_score::telemetry;
use metrics_exporter_prometheus::PrometheusHandle;
use serde_json::json;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
struct AppState {
    readiness: Arc<AtomicBool>,
    metrics: PrometheusHandle,
}

#[derive(Parser, Debug)]
#[command(
    name = "Maple Score",
    about = "Score applicant profiles against Canadian economic immigration programs",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Score a profile document from the command line
    Score(ScoreArgs),
    /// Normalize one language test sitting into benchmark levels
    Language(LanguageArgs),
}

#[derive(Args, Debug, Default)]
struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    port: Option<u16>,
}

#[derive(Args, Debug)]
struct ScoreArgs {
    /// Program to score against (crs, fsw, provincial)
    #[arg(long, value_parser = parse_program)]
    program: Program,
    /// Path to an applicant profile JSON document
    #[arg(long)]
    profile: PathBuf,
}

#[derive(Args, Debug)]
struct LanguageArgs {
    /// Language test the scores come from (ielts, celpip, pte, tef)
    #[arg(long, value_parser = parse_test)]
    test: LanguageTest,
    #[arg(long)]
    listening: f64,
    #[arg(long)]
    reading: f64,
    #[arg(long)]
    writing: f64,
    #[arg(long)]
    speaking: f64,
}

#[tokio::main]
async fn main() {
    if let Err(err) = run_cli().await {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}

async fn run_cli() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => run_server(args).await,
        Command::Score(args) => run_score(args),
        Command::Language(args) => run_language(args),
    }
}

fn parse_program(raw: &str) -> Result<Program, String> {
    Program::from_str(raw).map_err(|err| err.to_string())
}

fn parse_test(raw: &str) -> Result<LanguageTest, String> {
    LanguageTest::from_str(raw).map_err(|err| err.to_string())
}

async fn run_server(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let state = AppState {
        readiness: readiness_flag.clone(),
        metrics: prometheus_handle,
    };

    let engine = Arc::new(ScoringEngine::new(config.scoring.limits.clone()));
    let infra = Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .with_state(state);

    let app = scoring_router(engine).merge(infra).layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "immigration scoring service ready");

    axum::serve(listener, app).await?;
    Ok(())
}

fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let ScoreArgs { program, profile } = args;

    let raw = std::fs::read_to_string(profile)?;
    let profile: ApplicantProfile = serde_json::from_str(&raw)?;

    let engine = ScoringEngine::default();
    let breakdown = engine.score(program, profile)?;
    render_breakdown(&breakdown);

    Ok(())
}

fn run_language(args: LanguageArgs) -> Result<(), AppError> {
    let scores = LanguageScores {
        test: args.test,
        listening: args.listening,
        reading: args.reading,
        writing: args.writing,
        speaking: args.speaking,
    };

    let engine = ScoringEngine::default();
    let levels = engine.normalize(&scores)?;
    render_levels(scores.test, &levels);

    Ok(())
}

fn render_breakdown(breakdown: &ScoreBreakdown) {
    println!("Program: {}", breakdown.program.label());

    println!("\nCategory scores");
    for (category, points) in &breakdown.categories {
        println!("- {}: {}", category.label(), points);
    }

    println!("\nTotal: {}", breakdown.total);

    if breakdown.program == Program::Fsw {
        if fsw::meets_pass_mark(breakdown) {
            println!("Pass mark {} met", fsw::PASS_MARK);
        } else {
            println!("Below pass mark {}", fsw::PASS_MARK);
        }
    }
}

fn render_levels(test: LanguageTest, levels: &SkillLevels) {
    println!("Test: {}", test.label());

    println!("\nBenchmark levels");
    for skill in Skill::ALL {
        println!("- {}: CLB {}", skill.label(), levels.level(skill));
    }
}

async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

async fn readiness_endpoint(State(state): State<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

async fn metrics_endpoint(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}
