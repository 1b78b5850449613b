//! Weather Report Core - measurement report CLI
//!
//! Loads measurements from a CSV file and prints sensor, gateway, or
//! network reports on stdout.

use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::debug;
use wr_common::config::load_parameters;
use wr_common::error::StructuredError;
use wr_common::{Error, OutputFormat, ParameterSet, Result, SubjectKind};
use wr_core::config::load_report_config;
use wr_core::exit_codes::ExitCode;
use wr_core::logging::{generate_run_id, init_logging, LogConfig, LogFormat, LogLevel};
use wr_core::source::{load_csv, IngestSummary, SampleStore};
use wr_core::ReportService;
use wr_report::{GatewayReport, NetworkReport, ReportAssembler, SensorReport};

/// Weather Report Core - statistics over sensor measurements
#[derive(Parser)]
#[command(name = "wr-core")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[command(flatten)]
    global: GlobalOpts,
}

/// Global options available to all commands
#[derive(Args, Debug)]
struct GlobalOpts {
    /// Output format
    #[arg(long, short = 'f', global = true, default_value = "json")]
    format: OutputFormat,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Decrease verbosity (quiet mode)
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Log format on stderr (human or jsonl)
    #[arg(long, global = true, env = "WR_LOG_FORMAT")]
    log_format: Option<LogFormat>,
}

#[derive(Subcommand)]
enum Commands {
    /// Statistics, outliers, and value histogram of one sensor
    Sensor(ReportArgs),

    /// Sensor activity, outlier sensors, and inter-arrival histogram of one gateway
    Gateway(ReportArgs),

    /// Gateway activity and time histogram of one network
    Network(ReportArgs),

    /// Validate configuration files and the measurement file
    Check(CheckArgs),
}

#[derive(Args, Debug)]
struct ReportArgs {
    /// Subject code
    code: String,

    /// Measurement CSV file
    #[arg(long, env = "WEATHER_REPORT_DATA")]
    data: PathBuf,

    /// Window start, inclusive (yyyy-MM-dd HH:mm:ss)
    #[arg(long)]
    start: Option<String>,

    /// Window end, inclusive (yyyy-MM-dd HH:mm:ss)
    #[arg(long)]
    end: Option<String>,

    #[command(flatten)]
    config: ConfigArgs,
}

#[derive(Args, Debug)]
struct CheckArgs {
    /// Measurement CSV file to validate
    #[arg(long, env = "WEATHER_REPORT_DATA")]
    data: Option<PathBuf>,

    #[command(flatten)]
    config: ConfigArgs,
}

#[derive(Args, Debug)]
struct ConfigArgs {
    /// Gateway parameters file (JSON)
    #[arg(long)]
    parameters: Option<PathBuf>,

    /// Report engine configuration file (JSON)
    #[arg(long)]
    report_config: Option<PathBuf>,
}

#[derive(Clone, Copy)]
enum ReportKind {
    Sensor,
    Gateway,
    Network,
}

/// Report payload printed on stdout.
#[derive(Serialize)]
struct ReportEnvelope<'a, T: Serialize> {
    run_id: &'a str,
    generated_at: String,
    ingest: IngestSummary,
    report: &'a T,
}

// ============================================================================
// Main entry point
// ============================================================================

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let code = if e.use_stderr() {
                ExitCode::ArgsError
            } else {
                ExitCode::Clean
            };
            let _ = e.print();
            std::process::exit(code.as_i32());
        }
    };

    let level = LogLevel::from_verbosity(cli.global.verbose, cli.global.quiet);
    let log_config = LogConfig::from_env(Some(level), cli.global.log_format);
    init_logging(&log_config);

    let run_id = generate_run_id();
    debug!(run_id = %run_id, "Starting wr-core");

    let exit_code = match &cli.command {
        Commands::Sensor(args) => run_report(&cli.global, &run_id, ReportKind::Sensor, args),
        Commands::Gateway(args) => run_report(&cli.global, &run_id, ReportKind::Gateway, args),
        Commands::Network(args) => run_report(&cli.global, &run_id, ReportKind::Network, args),
        Commands::Check(args) => run_check(&cli.global, &run_id, args),
    };

    std::process::exit(exit_code.as_i32());
}

// ============================================================================
// Reports
// ============================================================================

fn run_report(global: &GlobalOpts, run_id: &str, kind: ReportKind, args: &ReportArgs) -> ExitCode {
    match build_and_print(global, run_id, kind, args) {
        Ok(()) => ExitCode::Clean,
        Err(e) => output_error(global, run_id, &e),
    }
}

fn build_and_print(
    global: &GlobalOpts,
    run_id: &str,
    kind: ReportKind,
    args: &ReportArgs,
) -> Result<()> {
    let (service, ingest) = build_service(&args.data, &args.config)?;
    let start = args.start.as_deref();
    let end = args.end.as_deref();
    let code = args.code.as_str();

    match kind {
        ReportKind::Sensor => {
            let report = service.sensor_report(code, start, end)?;
            emit(global, run_id, ingest, &report, sensor_summary)
        }
        ReportKind::Gateway => {
            let report = service.gateway_report(code, start, end)?;
            emit(global, run_id, ingest, &report, gateway_summary)
        }
        ReportKind::Network => {
            let report = service.network_report(code, start, end)?;
            emit(global, run_id, ingest, &report, network_summary)
        }
    }
}

fn build_service(
    data: &Path,
    config: &ConfigArgs,
) -> Result<(ReportService<SampleStore, ParameterSet>, IngestSummary)> {
    let report_config = load_report_config(config.report_config.as_deref())?;
    let (parameters, source) = load_parameters(config.parameters.as_deref())?;
    debug!(source = %source, gateways = parameters.gateways.len(), "Gateway parameters ready");
    let (store, summary) = load_csv(data)?;
    let service = ReportService::new(store, parameters, ReportAssembler::new(report_config));
    Ok((service, summary))
}

fn emit<T: Serialize>(
    global: &GlobalOpts,
    run_id: &str,
    ingest: IngestSummary,
    report: &T,
    summary: fn(&T) -> String,
) -> Result<()> {
    match global.format {
        OutputFormat::Json => {
            let envelope = ReportEnvelope {
                run_id,
                generated_at: chrono::Utc::now().to_rfc3339(),
                ingest,
                report,
            };
            println!("{}", serde_json::to_string_pretty(&envelope)?);
        }
        OutputFormat::Summary => {
            println!("[{}] {}", run_id, summary(report));
        }
    }
    Ok(())
}

fn sensor_summary(r: &SensorReport) -> String {
    format!(
        "sensor {}: {} samples, mean {:.3}, std_dev {:.3}, {} outliers, {} buckets",
        r.sensor_code,
        r.total_count,
        r.stats.mean,
        r.stats.std_dev,
        r.outliers.len(),
        r.histogram.len()
    )
}

fn gateway_summary(r: &GatewayReport) -> String {
    format!(
        "gateway {}: {} samples, {} sensors, most active [{}], {} outlier sensors, battery {:.1}%",
        r.gateway_code,
        r.total_count,
        r.sensors_load_ratio.len(),
        join(&r.most_active_sensors),
        r.outlier_sensors.len(),
        r.battery_charge_percentage
    )
}

fn network_summary(r: &NetworkReport) -> String {
    let granularity = r
        .granularity
        .map(|g| g.to_string())
        .unwrap_or_else(|| "none".to_string());
    format!(
        "network {}: {} samples, {} gateways, most active [{}], {} {} buckets",
        r.network_code,
        r.total_count,
        r.gateways_load_ratio.len(),
        join(&r.most_active_gateways),
        r.histogram.len(),
        granularity
    )
}

fn join<T: std::fmt::Display>(items: &[T]) -> String {
    items
        .iter()
        .map(|i| i.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

// ============================================================================
// Check
// ============================================================================

fn run_check(global: &GlobalOpts, run_id: &str, args: &CheckArgs) -> ExitCode {
    let mut results: Vec<serde_json::Value> = Vec::new();
    let mut failure: Option<ExitCode> = None;

    match load_parameters(args.config.parameters.as_deref()) {
        Ok((parameters, source)) => results.push(serde_json::json!({
            "check": "parameters",
            "status": "ok",
            "source": source.to_string(),
            "gateways": parameters.gateways.len(),
            "schema_version": parameters.schema_version,
        })),
        Err(e) => {
            failure.get_or_insert(ExitCode::from(&e));
            results.push(check_error("parameters", &e));
        }
    }

    match load_report_config(args.config.report_config.as_deref()) {
        Ok(config) => results.push(serde_json::json!({
            "check": "report_config",
            "status": "ok",
            "using_defaults": args.config.report_config.is_none(),
            "bucket_count": config.bucket_count,
            "hourly_span_limit_hours": config.hourly_span_limit_hours,
            "outlier_sigma": config.outlier_sigma,
        })),
        Err(e) => {
            failure.get_or_insert(ExitCode::from(&e));
            results.push(check_error("report_config", &e));
        }
    }

    if let Some(data) = &args.data {
        match load_csv(data) {
            Ok((store, summary)) => results.push(serde_json::json!({
                "check": "data",
                "status": if summary.skipped == 0 { "ok" } else { "warn" },
                "path": data.display().to_string(),
                "ingest": summary,
                "samples": store.len(),
                "networks": store.codes(SubjectKind::Network).len(),
                "gateways": store.codes(SubjectKind::Gateway).len(),
                "sensors": store.codes(SubjectKind::Sensor).len(),
            })),
            Err(e) => {
                failure.get_or_insert(ExitCode::from(&e));
                results.push(check_error("data", &e));
            }
        }
    }

    let ok = failure.is_none();
    let response = serde_json::json!({
        "run_id": run_id,
        "generated_at": chrono::Utc::now().to_rfc3339(),
        "status": if ok { "ok" } else { "error" },
        "checks": results,
    });

    match global.format {
        OutputFormat::Json => match serde_json::to_string_pretty(&response) {
            Ok(json) => println!("{}", json),
            Err(e) => return output_error(global, run_id, &Error::Json(e)),
        },
        OutputFormat::Summary => {
            println!("[{}] check: {}", run_id, if ok { "OK" } else { "FAILED" });
        }
    }

    failure.unwrap_or(ExitCode::Clean)
}

fn check_error(check: &str, error: &Error) -> serde_json::Value {
    serde_json::json!({
        "check": check,
        "status": "error",
        "error": StructuredError::from(error),
    })
}

/// Output an error in the appropriate format and pick the exit code.
fn output_error(global: &GlobalOpts, run_id: &str, error: &Error) -> ExitCode {
    let exit_code = ExitCode::from(error);
    match global.format {
        OutputFormat::Json => {
            eprintln!("{}", StructuredError::from(error).to_json());
        }
        OutputFormat::Summary => {
            eprintln!("[{}] {}: {}", run_id, error.headline(), error);
            eprintln!("  {}", error.remediation());
        }
    }
    exit_code
}
