//! Jlisp CLI
//!
//! With no command, starts the interactive REPL.

use jlisp::commands::{lex_file, parse_file, run_file};
use jlisp::repl::run_repl;
use jlisp::{init_tracing, ReplConfig, LANGUAGE_VERSION};

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();
    let mut config = ReplConfig::default();

    let Some(command) = args.get(1) else {
        start_repl(&config);
        return;
    };

    match command.as_str() {
        "run" => {
            let Some(path) = args.get(2) else {
                eprintln!("Usage: jlisp run <file>");
                std::process::exit(1);
            };
            run_file(path);
        }
        "parse" => {
            let Some(path) = args.get(2) else {
                eprintln!("Usage: jlisp parse <file>");
                std::process::exit(1);
            };
            parse_file(path);
        }
        "lex" => {
            let Some(path) = args.get(2) else {
                eprintln!("Usage: jlisp lex <file>");
                std::process::exit(1);
            };
            lex_file(path);
        }
        "--no-history" => {
            config = config.without_history();
            start_repl(&config);
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-V" => {
            println!("jlisp {}", env!("CARGO_PKG_VERSION"));
            println!("Jlisp Version {LANGUAGE_VERSION}");
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn start_repl(config: &ReplConfig) {
    if let Err(err) = run_repl(config) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn print_usage() {
    println!("Jlisp interpreter");
    println!();
    println!("Usage: jlisp [command] [options]");
    println!();
    println!("Commands:");
    println!("  (none)               Start the interactive REPL");
    println!("  run <file>           Evaluate a file line by line");
    println!("  parse <file>         Print the syntax tree of each line");
    println!("  lex <file>           Print the tokens of each line");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("REPL options:");
    println!("  --no-history         Do not load or save ~/.jlisp_history");
    println!();
    println!("Set RUST_LOG (e.g. RUST_LOG=jlisp_eval=debug) for evaluator tracing.");
}
