//! Command-line interface for ipsweep.
//!
//! Uses `clap` derive macros for declarative argument parsing; `run`
//! drives the whole analysis and hands the results to the output layer.

use crate::config::AppSettings;
use crate::error::CliResult;
use crate::output;
use crate::probe::{run_analysis, IcmpProber, Prober, SweepConfig};
use crate::types::NetworkPrefix;
use clap::{Parser, ValueEnum};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

/// A concurrent IPv4 subnet reachability analyzer.
#[derive(Parser, Debug)]
#[command(name = "ipsweep")]
#[command(author = "HueCodes <huecodes@proton.me>")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Probe every usable host of an IPv4 subnet", long_about = None)]
pub struct Args {
    /// IPv4 network to analyze, in CIDR notation (e.g. 192.168.1.0/24)
    #[arg(value_name = "CIDR")]
    pub cidr: String,

    /// Show only addresses that answered (in use)
    #[arg(short = 'u', long = "used-only")]
    pub used_only: bool,

    /// Maximum number of concurrent probes (0 = one probe per host)
    #[arg(short = 'c', long)]
    pub concurrency: Option<usize>,

    /// Overall probe timeout per host in milliseconds
    #[arg(short = 't', long)]
    pub timeout: Option<u64>,

    /// Echo attempts per host
    #[arg(short = 'a', long)]
    pub attempts: Option<u8>,

    /// Output format for results
    #[arg(short = 'o', long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Path to custom configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Persist the resolved probe options as the new defaults
    #[arg(long)]
    pub save_config: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable plain text
    #[default]
    Plain,
    /// JSON structured output
    Json,
    /// CSV format for data analysis
    Csv,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Plain => write!(f, "plain"),
            Self::Json => write!(f, "json"),
            Self::Csv => write!(f, "csv"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "plain" => Ok(Self::Plain),
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            _ => Err(format!("unknown output format: {}", s)),
        }
    }
}

/// Execute the analysis described by the parsed arguments.
pub async fn run(args: Args) -> CliResult<()> {
    let settings = match &args.config {
        Some(path) => AppSettings::load_from(path)?,
        None => AppSettings::load().unwrap_or_default(),
    };

    let concurrency = args.concurrency.unwrap_or(settings.default_concurrency);
    let timeout = Duration::from_millis(args.timeout.unwrap_or(settings.default_timeout_ms));
    let attempts = args.attempts.unwrap_or(settings.default_attempts);
    let format = args.output.unwrap_or_else(|| {
        settings
            .default_output_format
            .parse()
            .unwrap_or_default()
    });

    if args.save_config {
        let updated = AppSettings {
            default_concurrency: concurrency,
            default_timeout_ms: timeout.as_millis() as u64,
            default_attempts: attempts,
            default_output_format: format.to_string(),
            verbose: settings.verbose,
        };
        updated.save()?;
        if !quietish(format) {
            output::print_info("settings saved as defaults");
        }
    }

    // Validate the input before touching any socket, so a bad CIDR is
    // reported the same way with or without probe privileges.
    let prefix = NetworkPrefix::parse(&args.cidr)?;

    if (args.verbose || settings.verbose) && format == OutputFormat::Plain {
        output::print_sweep_header(&prefix.to_string(), prefix.usable_hosts(), concurrency, timeout);
    }

    let prober = Arc::new(
        IcmpProber::new(timeout, attempts).map_err(|e| {
            output::print_error(&format!("could not open ICMP socket: {}", e));
            eprintln!("Hint: ICMP echo probing requires root/sudo privileges.");
            eprintln!("Try: sudo ipsweep {}", args.cidr);
            e
        })?,
    );

    if prober.requires_privileges() && !is_root() && !quietish(format) {
        output::print_warning("running without root; some probes may be dropped.");
    }

    let spinner = if format == OutputFormat::Plain {
        Some(make_spinner(&args.cidr))
    } else {
        None
    };

    let config = SweepConfig::new(&args.cidr)
        .with_concurrency(concurrency)
        .with_timeout(timeout)
        .with_attempts(attempts);

    let results = run_analysis(prober, &config).await;

    if let Some(pb) = spinner {
        pb.finish_and_clear();
    }

    let results = results?;
    output::print_results(&results, format, args.used_only)?;

    Ok(())
}

/// Spinner shown while the sweep runs.
fn make_spinner(cidr: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap(),
    );
    pb.set_message(format!("probing {}...", cidr));
    pb.enable_steady_tick(Duration::from_millis(120));
    pb
}

/// Structured formats go to stdout for parsing; keep stderr quiet too.
fn quietish(format: OutputFormat) -> bool {
    format != OutputFormat::Plain
}

/// Check if running with root/admin privileges.
fn is_root() -> bool {
    #[cfg(unix)]
    {
        unsafe { libc::geteuid() == 0 }
    }
    #[cfg(not(unix))]
    {
        false
    }
}
