//! A command line interface to the exact *Traveling Salesman Problem* solver.

mod commands;

use self::commands::create_write_buffer;
use self::commands::solve::{get_solve_app, run_solve};
use clap::Command;
use std::process;

fn main() {
    let matches = get_app().get_matches();

    let result = match matches.subcommand() {
        Some(("solve", solve_matches)) => run_solve(solve_matches, create_write_buffer),
        _ => Err("no subcommand was used. Use -h to print help information".to_string()),
    };

    if let Err(err) = result {
        eprintln!("{err}");
        process::exit(1);
    }
}

fn get_app() -> Command {
    Command::new("Exact TSP Solver")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A command line interface to the exact Traveling Salesman Problem solver")
        .subcommand(get_solve_app())
}
