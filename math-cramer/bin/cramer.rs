//! Solve a small linear system with Cramer's rule
//!
//! Each line of the input file holds the coefficients of one equation followed
//! by its right-hand side value.
//!
//! Usage:
//!   cargo run --release --bin cramer -- matrix.txt
//!   RUST_LOG=info cargo run --release --bin cramer -- --verify --threads 4 matrix.txt

use clap::Parser;
use math_audio_cramer::{
    CramerSolution, LinearSystem, ParallelConfig, SolverConfig, load_system, solve, verify,
};
use std::error::Error;
use std::fmt::Write as FmtWrite;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(
    name = "cramer",
    about = "Solve Ax = b with Cramer's rule, one parallel task per unknown"
)]
struct Cli {
    /// Input file: one equation per line, coefficients then right-hand side
    #[arg(default_value = "matrix.txt")]
    file: PathBuf,

    /// Print values with this many decimals instead of the default formatting
    #[arg(long)]
    precision: Option<usize>,

    /// Print the solution and determinant as JSON
    #[arg(long)]
    json: bool,

    /// Solve the unknowns one after another on the main thread
    #[arg(long)]
    sequential: bool,

    /// Number of threads for the per-unknown tasks (0 = use all available cores)
    #[arg(long, default_value_t = 0)]
    threads: usize,

    /// Cross-check the result against an LU solve and log the residual
    #[arg(long)]
    verify: bool,
}

impl Cli {
    fn solver_config(&self) -> SolverConfig {
        let parallel = if self.sequential {
            ParallelConfig::sequential()
        } else {
            ParallelConfig {
                enabled: true,
                num_threads: (self.threads > 0).then_some(self.threads),
            }
        };
        SolverConfig { parallel }
    }
}

fn main() {
    env_logger::init();

    let args = Cli::parse();

    // Every failure ends the same way: one line, normal exit.
    match run(&args) {
        Ok(output) => println!("{output}"),
        Err(e) => println!("Error: {e}"),
    }
}

fn run(args: &Cli) -> Result<String, Box<dyn Error>> {
    let start = Instant::now();

    let system = load_system(&args.file)?.into_square()?;
    let solution = solve(&system, &args.solver_config())?;
    log::info!(
        "Solved {}x{} system from {} in {:.2?}",
        system.dim(),
        system.dim(),
        args.file.display(),
        start.elapsed()
    );

    if args.verify {
        check(&system, &solution);
    }

    if args.json {
        return Ok(serde_json::to_string_pretty(&solution)?);
    }
    Ok(format_solution(&solution, args.precision))
}

// Advisory only: a failed cross-check never replaces the Cramer result.
fn check(system: &LinearSystem, solution: &CramerSolution) {
    let report = match verify(system, &solution.x) {
        Ok(report) => report,
        Err(e) => {
            log::warn!("LU cross-check unavailable: {e}");
            return;
        }
    };
    let scale = solution.x.iter().fold(1.0_f64, |acc, v| acc.max(v.abs()));
    if report.max_deviation > 1e-6 * scale {
        log::warn!(
            "Cramer solution deviates from LU by {:.3e}; the system may be ill-conditioned",
            report.max_deviation
        );
    }
}

fn format_solution(solution: &CramerSolution, precision: Option<usize>) -> String {
    let mut line = String::from("Solution:");
    for value in solution.x.iter() {
        let _ = match precision {
            Some(p) => write!(&mut line, " {value:.p$}"),
            None => write!(&mut line, " {value}"),
        };
    }
    line
}
