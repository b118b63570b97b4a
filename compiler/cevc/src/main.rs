//! cev CLI
//!
//! Reduce constant guard expressions from the command line.

use cevc::commands::{
    check_expression, eval_expression, parse_eval_options, render_error, EvalOptions,
};

/// Exit code for a parse or evaluation failure.
const EXIT_FAILURE: i32 = 1;
/// Exit code for malformed command-line arguments.
const EXIT_USAGE: i32 = 2;

fn main() {
    cevc::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        std::process::exit(EXIT_USAGE);
    }

    let command = &args[1];

    match command.as_str() {
        "eval" | "check" => {
            if args.len() < 3 {
                eprintln!("Usage: cev {command} <expr> [options]");
                std::process::exit(EXIT_USAGE);
            }
            let source = &args[2];
            let options = match parse_eval_options(&args[3..]) {
                Ok(options) => options,
                Err(message) => {
                    eprintln!("error: {message}");
                    std::process::exit(EXIT_USAGE);
                }
            };
            if command == "eval" {
                run_eval(source, &options);
            } else {
                run_check(source, &options);
            }
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-V" => {
            println!("cev {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(EXIT_USAGE);
        }
    }
}

fn run_eval(source: &str, options: &EvalOptions) {
    match eval_expression(source, options) {
        Ok(value) => println!("{value}"),
        Err(err) => {
            eprintln!("{}", render_error(source, &err));
            std::process::exit(EXIT_FAILURE);
        }
    }
}

fn run_check(source: &str, options: &EvalOptions) {
    match check_expression(source, options) {
        Ok(holds) => println!("{holds}"),
        Err(err) => {
            eprintln!("{}", render_error(source, &err));
            std::process::exit(EXIT_FAILURE);
        }
    }
}

fn print_usage() {
    println!("cev - constant-expression evaluator");
    println!();
    println!("Usage: cev <command> <expr> [options]");
    println!();
    println!("Commands:");
    println!("  eval <expr>          Reduce an expression and print its value");
    println!("  check <expr>         Reduce a condition and print true or false");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Options:");
    println!("  --var NAME=LITERAL   Bind NAME to a literal expression");
    println!("  --declare NAME       Declare NAME without a constant value");
    println!("  --max-depth N        Nesting limit for evaluation (default 512)");
    println!();
    println!("Set CEV_LOG (e.g. CEV_LOG=cev_eval=trace) to log evaluation to stderr.");
    println!();
    println!("Examples:");
    println!("  cev eval '1 + 2 * 3'");
    println!("  cev eval '[10, 20, 30][-1]'");
    println!("  cev check 'x < 3' --var x=1");
    println!("  cev check 'PY2' --declare PY2       # fails: no constant value");
}
