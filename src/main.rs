//! Klotski Solver
//!
//! Command-line shell around the solver core: solve a named opening with a
//! chosen engine, show the hint for the next move, or list the built-in
//! layouts. Set `RUST_LOG=debug` for per-solve diagnostics.

use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};

use klotski::board::format_grid;
use klotski::{hint_from_path, layouts, Engine, Solver};

/// Solves 5x4 sliding-block (Hua Rong Dao) boards.
#[derive(Parser)]
#[command(name = "klotski")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compute an optimal solution for a layout.
    Solve {
        /// Name of a built-in layout.
        #[arg(long, default_value = "classic")]
        layout: String,
        /// Search engine to run.
        #[arg(long, value_enum, default_value = "bfs")]
        engine: EngineArg,
        /// Print every board along the solution.
        #[arg(long)]
        show_path: bool,
    },
    /// Show the minimum remaining moves and the next piece to move.
    Hint {
        /// Name of a built-in layout.
        #[arg(long, default_value = "classic")]
        layout: String,
    },
    /// List the built-in layouts.
    Layouts,
}

#[derive(Clone, Copy, ValueEnum)]
enum EngineArg {
    Bfs,
    Astar,
}

impl From<EngineArg> for Engine {
    fn from(arg: EngineArg) -> Engine {
        match arg {
            EngineArg::Bfs => Engine::BreadthFirst,
            EngineArg::Astar => Engine::BestFirst,
        }
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Solve { layout, engine, show_path } => run_solve(&layout, engine.into(), show_path),
        Command::Hint { layout } => run_hint(&layout),
        Command::Layouts => {
            for (name, grid) in layouts::NAMED {
                println!("{name}:\n{}\n", format_grid(grid));
            }
            ExitCode::SUCCESS
        }
    }
}

fn run_solve(layout: &str, engine: Engine, show_path: bool) -> ExitCode {
    let Some(grid) = layouts::by_name(layout) else {
        eprintln!("unknown layout '{layout}'; try the 'layouts' command");
        return ExitCode::FAILURE;
    };

    let report = match Solver::new().run(grid, engine) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("invalid board: {e}");
            return ExitCode::FAILURE;
        }
    };

    println!(
        "explored {} nodes in {:.1?}",
        report.nodes_explored, report.elapsed
    );
    match report.path {
        Some(path) => {
            println!("solved in {} moves", path.len() - 1);
            if show_path {
                for (i, state) in path.iter().enumerate() {
                    println!("\nmove {i}:\n{state}");
                }
            }
            ExitCode::SUCCESS
        }
        None => {
            println!("no solution exists");
            ExitCode::SUCCESS
        }
    }
}

fn run_hint(layout: &str) -> ExitCode {
    let Some(grid) = layouts::by_name(layout) else {
        eprintln!("unknown layout '{layout}'; try the 'layouts' command");
        return ExitCode::FAILURE;
    };

    match Solver::new().solve_from(grid) {
        Ok(report) => {
            match report.min_steps() {
                Some(0) => println!("already solved"),
                Some(steps) => {
                    println!("minimum remaining moves: {steps}");
                    if let Some(path) = &report.path {
                        if let Some((row, col)) = hint_from_path(path) {
                            println!("move the piece at row {row}, column {col}");
                        }
                    }
                }
                None => println!("no solution exists"),
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("invalid board: {e}");
            ExitCode::FAILURE
        }
    }
}
