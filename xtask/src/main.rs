use std::process::{exit, Command, ExitStatus};

use clap::{Parser, Subcommand, ValueEnum};

// ── CLI definition ─────────────────────────────────────────────────

#[derive(Parser)]
#[command(
    name = "xtask",
    about = "Task runner for the ride pricing workspace",
    long_about = "A unified CLI for printing the sample ride report, running\n\
                  benchmarks, and CI checks in the ride pricing workspace."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the sample ride, driver, and rider report
    Run,
    /// Run all workspace tests
    Test,
    /// Run Criterion benchmarks
    Bench,
    /// Run CI checks (fmt, clippy, tests, report, benchmarks)
    Ci {
        /// Job to run
        #[arg(value_enum, default_value_t = CiJob::Check)]
        job: CiJob,
    },
}

#[derive(Clone, ValueEnum)]
enum CiJob {
    /// Formatting, clippy, and tests
    Check,
    /// Build and run the report binary
    Report,
    /// Run benchmarks
    Bench,
    /// Run check + report + bench
    All,
}

// ── helpers ────────────────────────────────────────────────────────

fn step(label: &str) {
    eprintln!("\n=== {label} ===");
}

fn cargo(args: &[&str]) -> ExitStatus {
    eprintln!("+ cargo {}", args.join(" "));
    match Command::new("cargo").args(args).status() {
        Ok(status) => status,
        Err(error) => {
            eprintln!("failed to execute cargo: {error}");
            exit(1);
        }
    }
}

fn run_cargo(args: &[&str]) {
    let status = cargo(args);
    if !status.success() {
        exit(status.code().unwrap_or(1));
    }
}

fn run_report() {
    run_cargo(&["run", "-p", "ride_core", "--bin", "ride_report"]);
}

fn run_bench() {
    run_cargo(&["bench", "--package", "ride_core", "--bench", "performance"]);
}

fn ci_check() {
    step("Format check");
    run_cargo(&["fmt", "--all", "--", "--check"]);

    step("Clippy");
    run_cargo(&[
        "clippy",
        "--workspace",
        "--all-targets",
        "--",
        "-D",
        "warnings",
    ]);

    step("Tests");
    run_cargo(&["test", "--workspace"]);
}

fn ci_report() {
    step("Sample report");
    run_report();
}

fn ci_bench() {
    step("Benchmarks (compile only)");
    run_cargo(&["bench", "--package", "ride_core", "--no-run"]);
}

// ── main ───────────────────────────────────────────────────────────

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run => run_report(),
        Commands::Test => run_cargo(&["test", "--workspace"]),
        Commands::Bench => run_bench(),
        Commands::Ci { job } => match job {
            CiJob::Check => ci_check(),
            CiJob::Report => ci_report(),
            CiJob::Bench => ci_bench(),
            CiJob::All => {
                ci_check();
                ci_report();
                ci_bench();
            }
        },
    }
}
