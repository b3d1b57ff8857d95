use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::Command;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "ringheap workspace automation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the benchmark suite against the std collections
    Bench {
        /// Run quickly (lower sample size/time)
        #[arg(long, default_value_t = false)]
        quick: bool,

        /// Generate report only (skip running benchmarks)
        #[arg(long, default_value_t = false)]
        report_only: bool,
    },
}

/// Bench function names used by every group in `benches/workloads`.
const OURS: &str = "ringheap";
const BASELINE: &str = "std";

#[derive(Deserialize)]
struct Estimates {
    mean: Estimate,
}

#[derive(Deserialize)]
struct Estimate {
    point_estimate: f64,
}

#[derive(Deserialize)]
struct BenchmarkInfo {
    throughput: Option<Throughput>,
}

#[derive(Deserialize)]
enum Throughput {
    Elements(u64),
    Bytes(u64),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Bench { quick, report_only } => {
            if !report_only {
                run_benchmarks(quick)?;
            }
            generate_report()?;
        }
    }

    Ok(())
}

fn run_benchmarks(quick: bool) -> Result<()> {
    println!("Running benchmark suite...");
    let start = Instant::now();

    let mut cmd = Command::new("cargo");
    cmd.arg("bench").arg("--bench").arg("suite");

    // Args for the test runner (Criterion) go after --
    cmd.arg("--");
    if quick {
        cmd.arg("--measurement-time").arg("0.1");
        cmd.arg("--noplot");
        cmd.arg("--sample-size").arg("10");
    }

    let status = cmd.status().context("Failed to run cargo bench")?;
    if !status.success() {
        anyhow::bail!("Benchmark suite failed");
    }
    println!("Finished in {:.2?}", start.elapsed());

    Ok(())
}

fn generate_report() -> Result<()> {
    println!("\n>>> Generating Report...");
    let criterion_dir = Path::new("target/criterion");
    if !criterion_dir.exists() {
        eprintln!("No criterion output found at {}", criterion_dir.display());
        return Ok(());
    }

    // workload -> implementation -> ops/s
    let mut results: BTreeMap<String, BTreeMap<String, f64>> = BTreeMap::new();
    collect_results(criterion_dir, &mut results)?;

    let report_path = Path::new("benchmark_results/report.md");
    if let Some(parent) = report_path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = fs::File::create(report_path)
        .with_context(|| format!("Failed to create {}", report_path.display()))?;

    writeln!(file, "# Benchmark Report")?;
    writeln!(file)?;
    writeln!(file, "| Workload | {} (Ops/s) | {} (Ops/s) | vs {} |", OURS, BASELINE, BASELINE)?;
    writeln!(file, "|---|---|---|---|")?;

    for (workload, by_impl) in &results {
        let ours = by_impl.get(OURS).copied();
        let baseline = by_impl.get(BASELINE).copied();
        let ratio = match (ours, baseline) {
            (Some(o), Some(b)) if b > 0.0 => format!("**{:.2}x**", o / b),
            _ => "-".to_string(),
        };
        writeln!(
            file,
            "| {} | {} | {} | {} |",
            workload,
            format_ops(ours),
            format_ops(baseline),
            ratio
        )?;
    }

    println!("Report written to {}", report_path.display());
    Ok(())
}

fn format_ops(ops: Option<f64>) -> String {
    match ops {
        Some(ops) if ops > 1_000_000.0 => format!("{:.2}M", ops / 1_000_000.0),
        Some(ops) if ops > 1_000.0 => format!("{:.2}K", ops / 1_000.0),
        Some(ops) => format!("{:.0}", ops),
        None => "N/A".to_string(),
    }
}

// Criterion layout: <workload>/<implementation>/new/{estimates,benchmark}.json
fn collect_results(dir: &Path, results: &mut BTreeMap<String, BTreeMap<String, f64>>) -> Result<()> {
    for entry in fs::read_dir(dir)?.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_results(&path, results)?;
            continue;
        }
        if path.file_name().and_then(|s| s.to_str()) != Some("estimates.json") {
            continue;
        }

        let Some(run_dir) = path.parent() else { continue };
        if run_dir.file_name().and_then(|s| s.to_str()) != Some("new") {
            continue;
        }
        let Some(impl_dir) = run_dir.parent() else { continue };
        let Some(workload_dir) = impl_dir.parent() else { continue };
        let (Some(implementation), Some(workload)) = (dir_name(impl_dir), dir_name(workload_dir)) else {
            continue;
        };
        if workload == "report" || implementation == "report" {
            continue;
        }

        let estimates: Estimates = read_json(&path)?;
        let time_ns = estimates.mean.point_estimate;
        if time_ns <= 0.0 {
            continue;
        }

        let elements = read_json::<BenchmarkInfo>(&run_dir.join("benchmark.json"))
            .ok()
            .and_then(|info| info.throughput)
            .map_or(1.0, |t| match t {
                Throughput::Elements(n) | Throughput::Bytes(n) => n as f64,
            });

        results
            .entry(workload)
            .or_default()
            .insert(implementation, (elements * 1e9) / time_ns);
    }
    Ok(())
}

fn dir_name(path: &Path) -> Option<String> {
    path.file_name().and_then(|s| s.to_str()).map(str::to_string)
}

fn read_json<T: for<'de> Deserialize<'de>>(path: &Path) -> Result<T> {
    let content = fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("Failed to parse {}", path.display()))
}
