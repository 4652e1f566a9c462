//! Sequential bargaining simulator CLI.
//!
//! Dual-mode driver: invoked with exactly three positional integers
//! (`d N num_iters`) it runs non-interactively; invoked with no positional
//! arguments it prompts on standard input for `d N` and then `num_iters`.

use std::io;

use seqbargain::display::{format_budget, format_distortion};
use seqbargain::{
    distortion, generate_budget_set, optimal_result, run_simulation, sequential_bargaining,
    Budget, BudgetSet, NormKind, SimulationConfig,
};

/// Parsed command line.
struct Args {
    /// `d N num_iters` when given positionally; `None` means prompt.
    params: Option<(usize, usize, u64)>,
    /// Norm constraint for generated budgets.
    norm: NormKind,
}

fn parse_args() -> Args {
    let argv: Vec<String> = std::env::args().skip(1).collect();

    let mut norm = NormKind::L1;
    let mut positionals: Vec<String> = Vec::new();

    let mut i = 0;
    while i < argv.len() {
        match argv[i].as_str() {
            "--norm" => {
                if i + 1 < argv.len() {
                    norm = match argv[i + 1].as_str() {
                        "l1" => NormKind::L1,
                        "l2" => NormKind::L2,
                        other => {
                            eprintln!("error: invalid norm kind: {other} (expected l1 or l2)");
                            std::process::exit(1);
                        }
                    };
                    i += 2;
                } else {
                    eprintln!("error: --norm requires a value");
                    std::process::exit(1);
                }
            }
            "--help" | "-h" => {
                print_usage();
                std::process::exit(0);
            }
            arg if arg.starts_with("--") => {
                eprintln!("error: unknown argument: {arg}");
                std::process::exit(1);
            }
            arg => {
                positionals.push(arg.to_string());
                i += 1;
            }
        }
    }

    let params = match positionals.len() {
        0 => None,
        3 => {
            let d = parse_integer(&positionals[0], "dimension d");
            let n = parse_integer(&positionals[1], "sample size N");
            let num_iters = parse_integer(&positionals[2], "iteration count");
            Some((d, n, num_iters))
        }
        count => {
            eprintln!(
                "error: expected exactly three positional arguments (d N num_iters), got {count}"
            );
            std::process::exit(1);
        }
    };

    Args { params, norm }
}

fn print_usage() {
    println!("seqbargain-sim - Sequential bargaining simulator");
    println!();
    println!("USAGE:");
    println!("    seqbargain-sim [OPTIONS] [d N num_iters]");
    println!();
    println!("ARGS:");
    println!("    d            Vector dimension (positive integer)");
    println!("    N            Number of agent budgets (positive, conventionally odd)");
    println!("    num_iters    Number of bargaining iterations (non-negative)");
    println!();
    println!("    With no positional arguments, d, N and num_iters are read");
    println!("    from standard input.");
    println!();
    println!("OPTIONS:");
    println!("    --norm <l1|l2>    Norm constraint for generated budgets [default: l1]");
    println!("    -h, --help        Print help information");
}

fn parse_integer<T: std::str::FromStr>(raw: &str, what: &str) -> T {
    raw.parse().unwrap_or_else(|_| {
        eprintln!("error: invalid {what}: {raw}");
        std::process::exit(1);
    })
}

fn ok_or_exit<T, E: std::fmt::Display>(result: Result<T, E>) -> T {
    result.unwrap_or_else(|err| {
        eprintln!("error: {err}");
        std::process::exit(1);
    })
}

fn read_trimmed_line() -> String {
    let mut line = String::new();
    if io::stdin().read_line(&mut line).is_err() {
        eprintln!("error: failed to read from standard input");
        std::process::exit(1);
    }
    line.trim().to_string()
}

fn print_budgets(budgets: &BudgetSet) {
    println!(
        "\nThe {} randomly generated preferred budgets are:\n",
        budgets.len()
    );
    for budget in budgets {
        println!("{}", format_budget(budget));
    }
}

fn print_outcome(num_iters: u64, outcome: &Budget, ratio: f64) {
    println!("\nThe result of {num_iters} iterations of sequential bargaining is:");
    println!("{}", format_budget(outcome));
    println!("\nDistortion:");
    println!("{}", format_distortion(ratio));
}

fn run_batch(dimension: usize, num_agents: usize, num_iters: u64, norm: NormKind) {
    let config = SimulationConfig {
        dimension,
        num_agents,
        num_iters,
        norm,
    };

    let mut rng = rand::thread_rng();
    let report = ok_or_exit(run_simulation(&config, &mut rng));

    print_budgets(&report.budgets);
    print_outcome(num_iters, &report.outcome, report.distortion);
}

fn run_interactive(norm: NormKind) {
    println!("Please input d followed by odd N, separated by a space.");

    let line = read_trimmed_line();
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() != 2 {
        eprintln!("error: expected two integers separated by a space, got: {line}");
        std::process::exit(1);
    }
    let dimension: usize = parse_integer(tokens[0], "dimension d");
    let num_agents: usize = parse_integer(tokens[1], "sample size N");

    // Reject bad parameters before any generation happens.
    let config = SimulationConfig {
        dimension,
        num_agents,
        num_iters: 0,
        norm,
    };
    ok_or_exit(config.validate());

    let mut rng = rand::thread_rng();
    let budgets = ok_or_exit(generate_budget_set(norm, dimension, num_agents, &mut rng));
    print_budgets(&budgets);

    println!("\nPlease input the number of iterations of sequential bargaining you would like to simulate.");
    let num_iters: u64 = parse_integer(&read_trimmed_line(), "iteration count");

    let outcome = ok_or_exit(sequential_bargaining(&budgets, num_iters, &mut rng));
    let optimum = optimal_result(&budgets);
    let ratio = ok_or_exit(distortion(&outcome, &optimum, &budgets));

    print_outcome(num_iters, &outcome, ratio);
}

fn main() {
    let args = parse_args();

    println!("Welcome to the sequential bargaining simulator!");

    match args.params {
        Some((dimension, num_agents, num_iters)) => {
            run_batch(dimension, num_agents, num_iters, args.norm);
        }
        None => run_interactive(args.norm),
    }
}
