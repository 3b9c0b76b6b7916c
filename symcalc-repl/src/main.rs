mod error;

use clap::{Parser as ClapParser, ValueEnum};
use env_logger::Env;
use error::Error;
use log::{debug, info};
use rustyline::{error::ReadlineError, DefaultEditor};
use std::{fs, io::{self, BufRead, IsTerminal}, path::PathBuf, process::ExitCode};
use symcalc_compute::{
    numerical::{eval, Value},
    symbolic::{expr::Expr, simplify::step::Step, simplify_with_steps},
};
use symcalc_parser::parser::{ast::Expr as AstExpr, Parser};

/// The name used to identify the input in error reports.
const SRC_ID: &str = "input";

/// The prompt shown in interactive mode.
const PROMPT: &str = "calc> ";

/// A calculator that evaluates arithmetic expressions, and differentiates and simplifies
/// formulas containing variables.
#[derive(Debug, ClapParser)]
#[command(version, about)]
struct Cli {
    /// Evaluate every non-empty line of this file.
    file: Option<PathBuf>,

    /// Evaluate this expression and exit.
    #[arg(short, long, value_name = "EXPR", conflicts_with = "file")]
    eval: Option<String>,

    /// Print the simplification steps applied to symbolic results.
    #[arg(long, env = "SYMCALC_STEPS")]
    steps: bool,

    /// Minimum level of log messages to show. Overrides `RUST_LOG`, which defaults to `warn`.
    #[arg(long, value_enum, env = "SYMCALC_LOG_LEVEL")]
    log_level: Option<LogLevel>,
}

#[derive(Debug, Clone, Copy, PartialEq, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Creates the logger configured by `env`, with `level` taking precedence over it if given.
fn logger_builder(env: Env, level: Option<LogLevel>) -> env_logger::Builder {
    let mut builder = env_logger::Builder::from_env(env);
    if let Some(level) = level {
        builder.filter_level(level.into());
    }
    builder
}

/// The result of a calculation, along with the simplification steps applied to it.
#[derive(Debug, Clone, PartialEq)]
struct Calculation {
    value: Value,
    steps: Vec<Step>,
}

/// Parses and evaluates the given input string.
///
/// Symbolic results are simplified once more before they are returned.
fn calculate(input: &str) -> Result<Calculation, Error> {
    let ast = Parser::new(input)?.try_parse_full::<AstExpr>()?;
    let expr = Expr::from(ast);
    debug!("evaluating `{}`", expr);

    match eval(&expr)? {
        Value::Symbolic(remainder) => {
            let (simplified, steps) = simplify_with_steps(&remainder)?;
            Ok(Calculation { value: Value::Symbolic(simplified), steps })
        },
        value => Ok(Calculation { value, steps: Vec::new() }),
    }
}

/// Evaluates one line and prints the result, or reports the error to stderr. Returns `false` if
/// the line failed.
fn run_line(input: &str, show_steps: bool) -> bool {
    match calculate(input) {
        Ok(calculation) => {
            if show_steps {
                for step in &calculation.steps {
                    println!("  {}", step);
                }
            }
            println!("= {}", calculation.value);
            true
        },
        Err(err) => {
            if let Err(io_err) = err.report_to_stderr(SRC_ID, input) {
                eprintln!("error: {}", io_err);
            }
            false
        },
    }
}

/// Evaluates every non-empty line of the given reader. Returns `false` if any line failed.
fn run_lines(reader: impl BufRead, show_steps: bool) -> io::Result<bool> {
    let mut all_ok = true;
    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        all_ok &= run_line(&line, show_steps);
    }
    Ok(all_ok)
}

/// Reads lines from the terminal until the user quits.
fn run_interactive(show_steps: bool) -> Result<(), ReadlineError> {
    let mut rl = DefaultEditor::new()?;

    println!("symcalc {}", env!("CARGO_PKG_VERSION"));
    println!("Type 'exit' or 'quit' to stop.");

    loop {
        let input = match rl.readline(PROMPT) {
            Ok(input) => input,
            Err(ReadlineError::Eof | ReadlineError::Interrupted) => return Ok(()),
            Err(err) => return Err(err),
        };

        let trimmed = input.trim();
        if trimmed.is_empty() {
            continue;
        }

        rl.add_history_entry(trimmed)?;
        if matches!(trimmed.to_lowercase().as_str(), "exit" | "quit") {
            println!("Goodbye!");
            return Ok(());
        }

        run_line(trimmed, show_steps);
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    logger_builder(Env::default().default_filter_or("warn"), cli.log_level).init();
    info!("symcalc {} starting", env!("CARGO_PKG_VERSION"));

    let result = if let Some(input) = &cli.eval {
        Ok(run_line(input, cli.steps))
    } else if let Some(path) = &cli.file {
        // run source file
        fs::read_to_string(path)
            .and_then(|source| run_lines(source.as_bytes(), cli.steps))
            .map_err(|err| format!("could not read `{}`: {}", path.display(), err))
    } else if !io::stdin().is_terminal() {
        // read source from stdin
        run_lines(io::stdin().lock(), cli.steps)
            .map_err(|err| format!("could not read stdin: {}", err))
    } else {
        // run the repl / interactive mode
        run_interactive(cli.steps)
            .map(|()| true)
            .map_err(|err| err.to_string())
    };

    match result {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        },
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;
    use pretty_assertions::assert_eq;
    use super::*;

    use symcalc_parser::parser::error::kind;

    /// Calculates the given input and formats the value as it would be printed.
    fn display(input: &str) -> String {
        calculate(input).unwrap().value.to_string()
    }

    /// Renders the error report for the given input, without colors.
    fn render_error(input: &str) -> String {
        let err = calculate(input).unwrap_err();
        let mut buf = Vec::new();
        err.write_report(SRC_ID, input, &mut buf).unwrap();
        String::from_utf8(strip_ansi_escapes::strip(buf)).unwrap()
    }

    #[test]
    fn cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn cli_eval_flag() {
        let cli = Cli::try_parse_from(["symcalc", "-e", "1 + 1", "--log-level", "debug"]).unwrap();
        assert_eq!(cli.eval.as_deref(), Some("1 + 1"));
        assert_eq!(cli.log_level, Some(LogLevel::Debug));
        assert!(cli.file.is_none());
    }

    #[test]
    fn log_level_comes_from_env_without_flag() {
        std::env::set_var("SYMCALC_TEST_LOG_FROM_ENV", "debug");
        let env = Env::new().filter("SYMCALC_TEST_LOG_FROM_ENV").default_filter_or("warn");
        let logger = logger_builder(env, None).build();
        assert_eq!(logger.filter(), log::LevelFilter::Debug);
    }

    #[test]
    fn log_level_flag_overrides_env() {
        std::env::set_var("SYMCALC_TEST_LOG_OVERRIDDEN", "debug");
        let env = Env::new().filter("SYMCALC_TEST_LOG_OVERRIDDEN").default_filter_or("warn");
        let logger = logger_builder(env, Some(LogLevel::Error)).build();
        assert_eq!(logger.filter(), log::LevelFilter::Error);
    }

    #[test]
    fn log_level_defaults_to_warn() {
        let env = Env::new().filter("SYMCALC_TEST_LOG_UNSET").default_filter_or("warn");
        let logger = logger_builder(env, None).build();
        assert_eq!(logger.filter(), log::LevelFilter::Warn);
    }

    #[test]
    fn cli_eval_conflicts_with_file() {
        assert!(Cli::try_parse_from(["symcalc", "-e", "1", "input.txt"]).is_err());
    }

    #[test]
    fn numeric() {
        assert_eq!(calculate("2 * ((6 + 4) / 10)").unwrap().value, Value::Number(2.0));
        assert_eq!(display("1 / 4"), "0.25");
        assert_eq!(display("2^0.5 * 0"), "0");
    }

    #[test]
    fn derivative() {
        assert_eq!(display("diff(x^2, x)"), "(2 * x)");
        assert_eq!(display("diff(x * x)"), "(x + x)");
        assert_eq!(display("diff(3 * y^2, y)"), "(3 * (2 * y))");
    }

    #[test]
    fn symbolic_result_is_simplified() {
        let calculation = calculate("x * 1 + 0").unwrap();
        assert_eq!(calculation.value, Value::Symbolic(Expr::var("x")));
        assert_eq!(calculation.steps, vec![Step::MulOne, Step::AddZero]);
    }

    #[test]
    fn numeric_result_has_no_steps() {
        assert!(calculate("(5 * 2) + 1").unwrap().steps.is_empty());
    }

    #[test]
    fn parse_error() {
        let Err(Error::Parse(err)) = calculate("2 +") else {
            panic!("expected a parse error");
        };
        assert!(err.is::<kind::UnexpectedEof>());
    }

    #[test]
    fn compute_error() {
        let Err(Error::Compute(err)) = calculate("x + 1 / 0") else {
            panic!("expected a compute error");
        };
        assert_eq!(err, symcalc_compute::Error::DivisionByZero);
    }

    #[test]
    fn deep_input_is_rejected() {
        let source = format!("{}1{}", "(".repeat(5000), ")".repeat(5000));
        let Err(Error::Parse(err)) = calculate(&source) else {
            panic!("expected a parse error");
        };
        assert!(err.is::<kind::ExpressionTooDeep>());
    }

    #[test]
    fn long_line_does_not_stop_batch() {
        let long_sum = vec!["1"; 10_000].join("+");
        let input = format!("{}\n1 + 1\n", long_sum);
        assert!(!run_lines(input.as_bytes(), false).unwrap());

        // a sum that fits within the nesting limit is still evaluated
        let sum = vec!["1"; 100].join("+");
        assert_eq!(display(&sum), "100");
    }

    #[test]
    fn report_to_stderr_succeeds() {
        let err = calculate("1 / 0").unwrap_err();
        assert!(err.report_to_stderr(SRC_ID, "1 / 0").is_ok());
    }

    #[test]
    fn reports() {
        let report = render_error("1 / (2 - 2)");
        assert!(report.contains("division by zero"), "{}", report);

        let report = render_error("diff(x^x)");
        assert!(report.contains("non-constant exponent"), "{}", report);

        let report = render_error("diff(x, x, y)");
        assert!(report.contains("too many arguments"), "{}", report);

        let report = render_error("3 # 4");
        assert!(report.contains("unknown character `#`"), "{}", report);
    }
}
