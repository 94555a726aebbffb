//! Output formatting module.
//!
//! Provides formatters for plain text, JSON, and CSV output of sweep
//! results. The plain renderer keeps the classic four-column
//! `address - used|free` layout.

use crate::cli::OutputFormat;
use crate::probe::SweepResults;
use console::{style, Style};
use std::io::{self, Write};

/// Addresses per row in the plain layout.
const NUM_COLUMNS: usize = 4;

/// Column width for an IPv4 address (xxx.xxx.xxx.xxx).
const ADDRESS_WIDTH: usize = 15;

/// Format and print sweep results according to the specified format.
///
/// With `used_only`, addresses that never answered are omitted from the
/// plain and CSV listings (JSON always carries the full pool).
pub fn print_results(results: &SweepResults, format: OutputFormat, used_only: bool) -> io::Result<()> {
    match format {
        OutputFormat::Plain => print_plain(results, used_only),
        OutputFormat::Json => print_json(results),
        OutputFormat::Csv => print_csv(results, used_only),
    }
}

/// Print results in human-readable plain text format.
fn print_plain(results: &SweepResults, used_only: bool) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    writeln!(out)?;
    writeln!(
        out,
        "{} {}",
        style("Analyzed address pool:").bold(),
        style(&results.cidr).cyan()
    )?;
    writeln!(
        out,
        "  {} usable hosts, {} probed in {:.2}s",
        results.usable_hosts,
        results.probed,
        results.duration_ms as f64 / 1000.0
    )?;
    writeln!(
        out,
        "  {} used, {} free, {} dropped",
        style(results.reachable).green().bold(),
        style(results.unreachable).red(),
        style(results.dropped).dim()
    )?;
    writeln!(out)?;

    let entries: Vec<(String, bool)> = results
        .pool
        .iter()
        .filter(|&(_, reachable)| !used_only || reachable)
        .map(|(addr, reachable)| (addr.to_string(), reachable))
        .collect();

    if entries.is_empty() {
        writeln!(out, "  {}", style("No addresses to display.").dim())?;
        writeln!(out)?;
        return Ok(());
    }

    for row in entries.chunks(NUM_COLUMNS) {
        for (addr, reachable) in row {
            let status_style = if *reachable {
                Style::new().green()
            } else {
                Style::new().red()
            };
            let status = if *reachable { "used" } else { "free" };

            write!(
                out,
                "{:<width$} - {}    ",
                addr,
                status_style.apply_to(format!("{:<4}", status)),
                width = ADDRESS_WIDTH
            )?;
        }
        writeln!(out)?;
    }

    writeln!(out)?;
    Ok(())
}

/// Print results in JSON format.
fn print_json(results: &SweepResults) -> io::Result<()> {
    let json = serde_json::to_string_pretty(results)
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
    println!("{}", json);
    Ok(())
}

/// Print results in CSV format.
fn print_csv(results: &SweepResults, used_only: bool) -> io::Result<()> {
    let stdout = io::stdout();
    let mut wtr = csv::Writer::from_writer(stdout.lock());

    wtr.write_record(["address", "status"])?;

    for (addr, reachable) in results.pool.iter() {
        if used_only && !reachable {
            continue;
        }
        let status = if reachable { "used" } else { "free" };
        wtr.write_record([&addr.to_string(), status])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Print a header before the sweep begins (verbose mode).
pub fn print_sweep_header(cidr: &str, hosts: u64, concurrency: usize, timeout: std::time::Duration) {
    println!();
    println!(
        "{} {} v{}",
        style("Starting").cyan(),
        style("ipsweep").cyan().bold(),
        env!("CARGO_PKG_VERSION")
    );
    println!(
        "{} Target: {}",
        style("•").dim(),
        style(cidr).white().bold()
    );
    println!(
        "{} Probing {} hosts ({} concurrent, {}ms timeout)...",
        style("•").dim(),
        style(hosts).white().bold(),
        if concurrency == 0 {
            "all".to_string()
        } else {
            concurrency.to_string()
        },
        timeout.as_millis()
    );
    println!();
}

/// Print an informational message.
pub fn print_info(msg: &str) {
    println!("{} {}", style("•").dim(), msg);
}

/// Print an error message.
pub fn print_error(msg: &str) {
    eprintln!("{} {}", style("Error:").red().bold(), msg);
}

/// Print a warning message.
pub fn print_warning(msg: &str) {
    eprintln!("{} {}", style("Warning:").yellow().bold(), msg);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::AddressPool;
    use std::net::Ipv4Addr;

    fn sample_results() -> SweepResults {
        let pool: AddressPool = [
            (Ipv4Addr::new(10, 0, 0, 1), true),
            (Ipv4Addr::new(10, 0, 0, 2), false),
        ]
        .into_iter()
        .collect();

        SweepResults {
            cidr: "10.0.0.0/30".to_string(),
            usable_hosts: 2,
            probed: 2,
            reachable: 1,
            unreachable: 1,
            dropped: 0,
            duration_ms: 1234,
            pool,
        }
    }

    #[test]
    fn test_results_serialize_to_json() {
        let json = serde_json::to_value(sample_results()).unwrap();
        assert_eq!(json["cidr"], "10.0.0.0/30");
        assert_eq!(json["pool"]["10.0.0.1"], true);
        assert_eq!(json["pool"]["10.0.0.2"], false);
    }

    #[test]
    fn test_print_plain_does_not_fail() {
        assert!(print_plain(&sample_results(), false).is_ok());
        assert!(print_plain(&sample_results(), true).is_ok());
    }
}
