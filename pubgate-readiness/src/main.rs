//! pubgate-readiness - command-line entry point
//!
//! Scores and validates content records stored as JSON files. Logs go to
//! stderr so `--format json` output can be piped.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::Serialize;
use serde_json::Value;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use pubgate_common::Error;
use pubgate_readiness::aliases::{legacy_category_map, resolve_category_key};
use pubgate_readiness::checklist::Checklist;
use pubgate_readiness::full_page::{validate_full_page, PublishGate};
use pubgate_readiness::offpage::OffPageGroup;
use pubgate_readiness::snapshot::record_graph;
use pubgate_readiness::structured_data::validator::parse_failure;
use pubgate_readiness::wizard::WizardState;
use pubgate_readiness::{
    ContentRecord, EngineConfig, FieldErrors, FullPageValidationResult, ReadinessEngine, ScoreResult,
    ValidationReport,
};

/// Command-line arguments for pubgate-readiness
#[derive(Parser, Debug)]
#[command(name = "pubgate-readiness")]
#[command(about = "Pre-publication readiness checks for content records")]
#[command(version)]
struct Cli {
    /// Config file (falls back to $PUBGATE_CONFIG, then the user config dir)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Six-category score and overall band
    Score {
        #[command(flatten)]
        input: RecordInput,

        /// Also emit the keyed category layout for this layout version
        #[arg(long, value_name = "VERSION")]
        layout_version: Option<u32>,

        /// Only this category (canonical key or alias, e.g. `mobile`)
        #[arg(long, value_name = "KEY")]
        category: Option<String>,
    },
    /// Actionable checklist grouped by category
    Checklist {
        #[command(flatten)]
        input: RecordInput,

        /// Include off-page recommendations
        #[arg(long)]
        off_page: bool,
    },
    /// Structured-data validation report
    Validate {
        #[command(flatten)]
        input: RecordInput,
    },
    /// Full-page verdict; exits non-zero when publishing is blocked
    PublishCheck {
        #[command(flatten)]
        input: RecordInput,
    },
    /// Artifacts persisted on save: JSON-LD, head metadata, report
    Snapshot {
        #[command(flatten)]
        input: RecordInput,
    },
    /// Wizard step completion and progress
    Steps {
        /// Content record JSON file
        record: PathBuf,

        /// Active step (0-based)
        #[arg(long, default_value_t = 0)]
        active: usize,

        /// Field errors JSON file (`{"slug": ["Slug already taken"]}`)
        #[arg(long, value_name = "FILE")]
        errors: Option<PathBuf>,
    },
}

#[derive(Args, Debug)]
struct RecordInput {
    /// Content record JSON file
    record: PathBuf,

    /// JSON-LD file; derived from the record when omitted
    #[arg(long, value_name = "FILE")]
    jsonld: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = EngineConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;

    // RUST_LOG wins over the [logging] table
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "pubgate_readiness={level},pubgate_common={level}",
                level = config.logging.level
            ))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting pubgate-readiness v{}", env!("CARGO_PKG_VERSION"));

    let format = cli.format;
    let engine = ReadinessEngine::new(config);

    match cli.command {
        Command::Score {
            input,
            layout_version,
            category,
        } => {
            let record = read_record(&input.record)?;
            let graph = read_graph(input.jsonld.as_deref())?;
            let mut result = engine.score(&record, graph.as_ref());
            if let Some(key) = category {
                let id = resolve_category_key(&key)
                    .ok_or_else(|| Error::InvalidInput(format!("unknown category '{}'", key)))?;
                result.categories.retain(|c| c.category == id);
            }
            match format {
                OutputFormat::Json => {
                    let mut out = serde_json::to_value(&result)?;
                    if let Some(version) = layout_version {
                        out["categoriesByKey"] = serde_json::to_value(legacy_category_map(&result.categories, version))?;
                    }
                    print_json(&out)?;
                }
                OutputFormat::Text => print_score(&result),
            }
        }
        Command::Checklist { input, off_page } => {
            let record = read_record(&input.record)?;
            let graph = read_graph(input.jsonld.as_deref())?;
            let checklist = engine.checklist(&record, graph.as_ref());
            let off_page = off_page.then(|| engine.off_page(&record));
            match format {
                OutputFormat::Json => print_json(&serde_json::json!({
                    "checklist": checklist,
                    "offPage": off_page,
                }))?,
                OutputFormat::Text => {
                    print_checklist(&checklist);
                    if let Some(groups) = &off_page {
                        print_off_page(groups);
                    }
                }
            }
        }
        Command::Validate { input } => {
            let record = read_record(&input.record)?;
            let report = match &input.jsonld {
                Some(path) => engine.validate_json_ld(&read_text(path)?).await,
                None => engine.validate_structured_data(&record_graph(&record)).await,
            };
            match format {
                OutputFormat::Json => print_json(&report)?,
                OutputFormat::Text => print_report(&report),
            }
        }
        Command::PublishCheck { input } => {
            let record = read_record(&input.record)?;
            let result = match &input.jsonld {
                None => engine.prepare_publish(&record, None).await,
                Some(path) => match serde_json::from_str::<Value>(&read_text(path)?) {
                    Ok(graph) => engine.prepare_publish(&record, Some(&graph)).await,
                    // Unparseable JSON-LD is itself a blocking issue
                    Err(e) => validate_full_page(&engine.score(&record, None), &parse_failure(&e)),
                },
            };
            match format {
                OutputFormat::Json => print_json(&result)?,
                OutputFormat::Text => print_verdict(&result),
            }
            PublishGate::check(&result)?;
        }
        Command::Snapshot { input } => {
            let record = read_record(&input.record)?;
            let graph = read_graph(input.jsonld.as_deref())?;
            let report = engine
                .validate_structured_data(&graph.clone().unwrap_or_else(|| record_graph(&record)))
                .await;
            let snapshot = engine.snapshot(&record, graph.as_ref(), Some(report));
            match format {
                OutputFormat::Json => print_json(&snapshot)?,
                OutputFormat::Text => {
                    println!("Generated at {}", snapshot.generated_at_display());
                    println!("JSON-LD: {}", snapshot.json_ld);
                    println!("Metadata: {}", snapshot.metadata);
                    print_report(&snapshot.report);
                }
            }
        }
        Command::Steps { record, active, errors } => {
            let record = read_record(&record)?;
            let errors = match errors {
                Some(path) => serde_json::from_str::<FieldErrors>(&read_text(&path)?)
                    .with_context(|| format!("Invalid field errors in {}", path.display()))?,
                None => FieldErrors::new(),
            };
            let state = engine.wizard_state(active, &record, &errors);
            match format {
                OutputFormat::Json => print_json(&state)?,
                OutputFormat::Text => print_steps(&state),
            }
        }
    }

    Ok(())
}

fn read_text(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

fn read_record(path: &Path) -> Result<ContentRecord> {
    serde_json::from_str(&read_text(path)?).with_context(|| format!("Invalid content record in {}", path.display()))
}

fn read_graph(path: Option<&Path>) -> Result<Option<Value>> {
    path.map(|path| {
        serde_json::from_str(&read_text(path)?).with_context(|| format!("Invalid JSON-LD in {}", path.display()))
    })
    .transpose()
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_score(result: &ScoreResult) {
    println!(
        "Overall: {}% ({}), {}/{} checks passed",
        result.overall,
        result.band.label(),
        result.passed,
        result.total
    );
    println!(
        "Words: {}, reading time: {} min",
        result.word_count, result.reading_time_minutes
    );
    for category in &result.categories {
        println!(
            "  {:<16} {:>3}%  {}/{}  (weight {})",
            category.category.label(),
            category.percentage,
            category.passed,
            category.total,
            category.max_score
        );
    }
}

fn print_checklist(checklist: &Checklist) {
    if checklist.is_empty() {
        println!("Nothing to fix");
        return;
    }
    for group in &checklist.groups {
        println!("{}", group.label);
        for item in &group.items {
            println!("  [{:?}/{:?}] {}", item.status, item.priority, item.label);
            if let Some(reason) = &item.reason {
                println!("      {}", reason);
            }
            println!("      -> {}", item.recommendation);
        }
    }
}

fn print_off_page(groups: &[OffPageGroup]) {
    println!();
    println!("Off-page");
    for group in groups {
        println!("{}", group.label);
        for rec in &group.recommendations {
            println!("  [{:?}] {}", rec.priority, rec.title);
            for (n, step) in rec.steps.iter().enumerate() {
                println!("      {}. {}", n + 1, step);
            }
        }
    }
}

fn print_report(report: &ValidationReport) {
    println!(
        "Structured data: {} ({} error(s), {} warning(s))",
        if report.valid { "valid" } else { "invalid" },
        report.error_count(),
        report.warning_count()
    );
    for issue in &report.external.errors {
        println!("  error: {}", issue.message);
    }
    for message in &report.business.errors {
        println!("  error: {}", message);
    }
    for issue in &report.external.warnings {
        println!("  warning: {}", issue.message);
    }
    for message in &report.business.warnings {
        println!("  warning: {}", message);
    }
}

fn print_verdict(result: &FullPageValidationResult) {
    println!(
        "Score {}% (SEO {}%, {} schema error(s), {} schema warning(s))",
        result.overall_score,
        result.seo.score,
        result.structured_data.schema_errors,
        result.structured_data.schema_warnings
    );
    for (label, issues) in [
        ("critical", &result.issues.critical),
        ("warning", &result.issues.warnings),
        ("suggestion", &result.issues.suggestions),
    ] {
        for issue in issues {
            println!("  {}: {}", label, issue.message);
        }
    }
    println!("{}", if result.can_publish { "Ready to publish" } else { "Blocked" });
}

fn print_steps(state: &WizardState) {
    println!("Progress: {}%", state.progress);
    for view in &state.steps {
        let v = &view.validation;
        println!(
            "  {}. {:<20} {:<9} {:>3}%  required {}/{}",
            v.step,
            view.label,
            format!("{:?}", view.status).to_lowercase(),
            v.completion_percentage,
            v.completed_required_fields,
            v.required_fields
        );
        for error in &v.errors {
            println!("      {}", error);
        }
    }
}
