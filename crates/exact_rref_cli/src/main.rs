//! Exact Row Reduction CLI
//!
//! Reduces an augmented matrix read from a file (or stdin) and prints the
//! reduced system and its solution.
//!
//! # Usage
//! ```bash
//! # Fractions allowed, one equation per line
//! exact-rref system.txt
//!
//! # Integer input, rows rescaled to integer equations
//! echo "2 0 4
//! 0 3 9" | exact-rref --integer
//! ```
//!
//! Exit status is 0 for a consistent system, 1 for an inconsistent one and
//! 2 for invalid input or arithmetic overflow.

mod input;
mod logging;

use anyhow::{Context, Result};
use clap::Parser;
use exact_rref_core::{Matrix, Rational, Solution, Solver, SolverConfig};
use std::fmt::Display;
use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;

#[derive(Parser)]
#[command(name = "exact-rref")]
#[command(about = "Exact fraction row reduction of augmented linear systems")]
#[command(version)]
struct Cli {
    /// Augmented matrix file; reads stdin when omitted
    input: Option<PathBuf>,

    /// Integer entries; solved rows are rescaled to integer equations
    #[arg(long)]
    integer: bool,

    /// Take the first non-zero pivot instead of preferring exact ones
    #[arg(long)]
    no_unit_pivot: bool,

    /// Debug logging (overridden by RUST_LOG)
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init_cli_logger(cli.verbose);

    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => {
            println!("inconsistent");
            ExitCode::from(1)
        }
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::from(2)
        }
    }
}

fn run(cli: &Cli) -> Result<bool> {
    let text = read_input(cli.input.as_ref())?;
    let solver = Solver::new(SolverConfig {
        prefer_unit_pivot: !cli.no_unit_pivot,
    });

    if cli.integer {
        let mut matrix = input::parse_integer_matrix(&text)?;
        info!(rows = matrix.rows(), cols = matrix.cols(), "solving integer system");
        if !solver.solve_integer(&mut matrix)? {
            return Ok(false);
        }
        print_matrix(&matrix);
        print_integer_solution(&matrix)?;
    } else {
        let mut matrix = input::parse_rational_matrix(&text)?;
        info!(rows = matrix.rows(), cols = matrix.cols(), "solving rational system");
        if !solver.solve(&mut matrix)? {
            return Ok(false);
        }
        print_matrix(&matrix);
        print_values(Solution::from_reduced(&matrix)?.values());
    }
    Ok(true)
}

fn read_input(path: Option<&PathBuf>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("failed to read stdin")?;
            Ok(text)
        }
    }
}

fn print_matrix<T: Display>(matrix: &Matrix<T>) {
    for row in matrix.iter_rows() {
        let line: Vec<String> = row.iter().map(ToString::to_string).collect();
        println!("{}", line.join(" "));
    }
    println!();
}

fn print_values(values: &[Option<Rational>]) {
    for (unknown, value) in values.iter().enumerate() {
        match value {
            Some(v) => println!("x{unknown} = {v}"),
            None => println!("x{unknown} free"),
        }
    }
}

/// Each row reads `c * x_pivot + ... = rhs`; report `rhs / c`
fn print_integer_solution(matrix: &Matrix<i64>) -> Result<()> {
    let unknowns = matrix.cols() - 1;
    let mut determined = vec![None; unknowns];
    for row in matrix.iter_rows() {
        let (&rhs, coefficients) = row.split_last().context("empty row")?;
        if let Some(pivot) = coefficients.iter().position(|&c| c != 0) {
            determined[pivot] = Some(Rational::new(rhs, coefficients[pivot])?);
        }
    }
    print_values(&determined);
    Ok(())
}
