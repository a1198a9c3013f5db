use std::{convert::Infallible, process::ExitCode};

use clap::Parser;
use safecalc::{
    error::{ArithError, Error},
    evaluate, read_expression, trace,
};

/// safecalc evaluates an integer arithmetic expression made of `+`, `-`,
/// `*`, `/` and parentheses.
///
/// Exit codes: 0 on success, 1 when no expression is given, 2 for syntax
/// errors, 3 for arithmetic errors.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Print every intermediate result to stderr, in evaluation order, before
    /// the final value. Also turned on by `STEP_MODE=1`; any other value of
    /// `STEP_MODE` leaves it off.
    #[arg(long, env = "STEP_MODE", value_parser = step_mode)]
    trace: bool,

    /// The expression. Several words are joined with single spaces.
    #[arg(allow_hyphen_values = true, trailing_var_arg = true)]
    words: Vec<String>,
}

/// Reads the trace switch. `--trace` arrives as `true`, the environment
/// switch only counts when it is exactly `1`.
#[allow(clippy::unnecessary_wraps)]
fn step_mode(value: &str) -> Result<bool, Infallible> {
    Ok(matches!(value, "1" | "true"))
}

fn run(args: &Args) -> Result<i64, Error> {
    let expression = read_expression(&args.words)?;

    if !args.trace {
        return evaluate(&expression);
    }

    let mut last = None;
    for (index, step) in trace(&expression)?.enumerate() {
        let value = step?;
        eprintln!("step {}: {value}", index + 1);
        last = Some(value);
    }
    last.ok_or_else(|| ArithError::MalformedTree.into())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    log::debug!("{args:?}");

    match run(&args) {
        Ok(value) => {
            println!("{value}");
            ExitCode::SUCCESS
        },
        Err(e) => {
            eprintln!("{e}");
            ExitCode::from(e.exit_code())
        },
    }
}
