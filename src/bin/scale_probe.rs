use std::time::Instant;

use clap::{Parser, ValueEnum};
use serde::Serialize;
use sysinfo::{get_current_pid, ProcessRefreshKind, System};
use tri_path::{
    solvers, IterativeSolver, MaxPathSolver, NaiveSolver, Triangle, Value,
};

/// Measure every triangle solver at increasing heights and cross-check them.
#[derive(Parser, Debug)]
#[command(name = "scale_probe", version, about)]
struct Options {
    /// Output format for the measurement records.
    #[arg(long, value_enum, default_value_t = OutputFormat::Csv)]
    format: OutputFormat,

    /// Largest height that also runs the naive solver as a baseline.
    #[arg(long, default_value_t = 20)]
    verify_limit: usize,

    /// Largest height measured for the linear solvers.
    #[arg(long, default_value_t = 512)]
    max_height: usize,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum OutputFormat {
    Csv,
    Table,
    Json,
}

impl OutputFormat {
    fn write(self, measurements: &[Measurement]) -> Result<(), String> {
        match self {
            OutputFormat::Csv => write_csv(measurements),
            OutputFormat::Table => write_table(measurements),
            OutputFormat::Json => write_json(measurements),
        }
    }
}

#[derive(Clone, Serialize)]
struct Measurement {
    solver: &'static str,
    height: usize,
    elements: usize,
    best: Value,
    wall_s: f64,
    rss_delta_kib: u64,
    verification: Verification,
}

#[derive(Clone, Serialize)]
struct Verification {
    status: VerificationStatus,
    detail: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
enum VerificationStatus {
    NotChecked,
    Passed,
    Failed,
}

impl VerificationStatus {
    fn label(&self) -> &'static str {
        match self {
            VerificationStatus::NotChecked => "not_checked",
            VerificationStatus::Passed => "passed",
            VerificationStatus::Failed => "failed",
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            VerificationStatus::Passed => "✓",
            VerificationStatus::Failed => "✗",
            VerificationStatus::NotChecked => "○",
        }
    }
}

fn main() {
    let options = Options::parse();

    eprintln!("\n{}", "=".repeat(80));
    eprintln!("Triangle max-path scaling probe");
    eprintln!("{}", "=".repeat(80));
    eprintln!("  • naive runs up to height {}", options.verify_limit);
    eprintln!("  • memoized/iterative/path run up to height {}", options.max_height);
    eprintln!("  • status: 'passed' = matches reference, 'not_checked' = no reference");
    eprintln!();

    let mut sys = System::new();
    let heights = heights(options.max_height);
    let mut measurements = Vec::new();

    for (idx, &height) in heights.iter().enumerate() {
        eprintln!("[{}/{}] height {height}", idx + 1, heights.len());
        let triangle = deterministic_triangle(height);
        measurements.extend(run_height(&triangle, &options, &mut sys));
    }

    print_summary(&measurements);

    if let Err(err) = options.format.write(&measurements) {
        eprintln!("scale_probe output error: {err}");
        std::process::exit(1);
    }
}

/// Powers of two up to `max_height`, with `max_height` itself appended.
fn heights(max_height: usize) -> Vec<usize> {
    let mut out: Vec<usize> = std::iter::successors(Some(1usize), |h| h.checked_mul(2))
        .take_while(|&h| h <= max_height)
        .collect();
    if out.last() != Some(&max_height) && max_height > 0 {
        out.push(max_height);
    }
    out
}

fn run_height(triangle: &Triangle, options: &Options, sys: &mut System) -> Vec<Measurement> {
    let height = triangle.height();
    // The naive solver is the reference when it is affordable; above the
    // limit the iterative solver takes its place.
    let naive_affordable = height <= options.verify_limit;
    let (reference_name, reference) = if naive_affordable {
        (NaiveSolver.name(), NaiveSolver.max_path(triangle))
    } else {
        (IterativeSolver.name(), IterativeSolver.max_path(triangle))
    };

    let mut out = Vec::new();
    for solver in solvers::all() {
        if solver.name() == NaiveSolver.name() && !naive_affordable {
            continue;
        }
        let m = measure(solver, triangle, sys, |best| {
            if solver.name() == reference_name {
                return (
                    VerificationStatus::NotChecked,
                    Some("reference".to_string()),
                );
            }
            verify_against(reference, best)
        });
        eprintln!(
            "      {} {:<10} best={}, time={:.3}s, status={}",
            m.verification.status.icon(),
            m.solver,
            m.best,
            m.wall_s,
            m.verification.status.label()
        );
        out.push(m);
    }
    out
}

fn verify_against(expected: Value, best: Value) -> (VerificationStatus, Option<String>) {
    if best == expected {
        (VerificationStatus::Passed, None)
    } else {
        (
            VerificationStatus::Failed,
            Some(format!("expected {expected}, got {best}")),
        )
    }
}

fn measure<F>(
    solver: &dyn MaxPathSolver,
    triangle: &Triangle,
    sys: &mut System,
    verify: F,
) -> Measurement
where
    F: FnOnce(Value) -> (VerificationStatus, Option<String>),
{
    let before = rss_kib(sys);
    let start = Instant::now();
    let best = solver.max_path(triangle);
    let duration = start.elapsed();
    let after = rss_kib(sys);
    let (status, detail) = verify(best);

    Measurement {
        solver: solver.name(),
        height: triangle.height(),
        elements: triangle.len(),
        best,
        wall_s: duration.as_secs_f64(),
        rss_delta_kib: after.saturating_sub(before),
        verification: Verification { status, detail },
    }
}

fn print_summary(measurements: &[Measurement]) {
    let failed: Vec<_> = measurements
        .iter()
        .filter(|m| m.verification.status == VerificationStatus::Failed)
        .collect();
    let passed = measurements
        .iter()
        .filter(|m| m.verification.status == VerificationStatus::Passed)
        .count();
    eprintln!();
    eprintln!("{}", "=".repeat(80));
    eprintln!(
        "{} measurements: {} passed, {} failed, {} not checked",
        measurements.len(),
        passed,
        failed.len(),
        measurements.len() - passed - failed.len()
    );
    for m in failed {
        eprintln!(
            "  ✗ {} at height {}: {}",
            m.solver,
            m.height,
            m.verification.detail.as_deref().unwrap_or("")
        );
    }
    eprintln!("{}", "=".repeat(80));
    eprintln!();
}

fn write_csv(measurements: &[Measurement]) -> Result<(), String> {
    println!("solver,height,elements,best,wall_s,rss_delta_kib,verification_status,verification_detail");
    for m in measurements {
        let detail = m
            .verification
            .detail
            .as_ref()
            .map(|s| s.replace('"', "'"))
            .unwrap_or_default();
        println!(
            "{},{},{},{},{:.6},{},{},\"{}\"",
            m.solver,
            m.height,
            m.elements,
            m.best,
            m.wall_s,
            m.rss_delta_kib,
            m.verification.status.label(),
            detail
        );
    }
    Ok(())
}

fn write_table(measurements: &[Measurement]) -> Result<(), String> {
    let col1 = measurements
        .iter()
        .map(|m| m.solver.len())
        .chain(std::iter::once("solver".len()))
        .max()
        .unwrap_or_default();

    println!(
        "{:<col1$}  {:>8}  {:>10}  {:>12}  {:>12}  {:>14}  {:>12}  detail",
        "solver", "height", "elements", "best", "wall_s", "rss_delta_kib", "status",
    );
    println!(
        "{:-<col1$}  {:-<8}  {:-<10}  {:-<12}  {:-<12}  {:-<14}  {:-<12}  {:-<12}",
        "", "", "", "", "", "", "", "",
    );
    for m in measurements {
        println!(
            "{:<col1$}  {:>8}  {:>10}  {:>12}  {:>12.6}  {:>14}  {:>12}  {}",
            m.solver,
            m.height,
            m.elements,
            m.best,
            m.wall_s,
            m.rss_delta_kib,
            m.verification.status.label(),
            m.verification.detail.as_deref().unwrap_or(""),
        );
    }
    Ok(())
}

fn write_json(measurements: &[Measurement]) -> Result<(), String> {
    let json = serde_json::to_string_pretty(measurements).map_err(|e| e.to_string())?;
    println!("{json}");
    Ok(())
}

fn rss_kib(sys: &mut System) -> u64 {
    sys.refresh_processes_specifics(ProcessRefreshKind::new());
    if let Some(process) = get_current_pid().ok().and_then(|pid| sys.process(pid)) {
        process.memory() / 1024
    } else {
        0
    }
}

/// Reproducible values in `-499..=499` without pulling in an RNG.
fn deterministic_triangle(height: usize) -> Triangle {
    let rows = (0..height)
        .map(|i| {
            (0..=i)
                .map(|j| {
                    let x = (i as u64)
                        .wrapping_mul(0x9E37_79B9_7F4A_7C15)
                        .wrapping_add((j as u64).wrapping_mul(0xBF58_476D_1CE4_E5B9));
                    ((x >> 33) % 999) as Value - 499
                })
                .collect()
        })
        .collect();
    match Triangle::new(rows) {
        Ok(t) => t,
        Err(e) => unreachable!("generated rows are triangular: {e}"),
    }
}
