//! splits-happen: score a ten-pin bowling line from the command line.

use std::ffi::OsString;
use std::io::Write;
use std::process::ExitCode;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use splits_core::regression::run_regression;
use splits_core::score_line_sheet;
use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const BIN_NAME: &str = "splits-happen";

/// Arguments that run the built-in regression games instead of scoring.
const SELF_TEST_TOKENS: [&str; 3] = ["test", "-test", "--test"];

/// Score a ten-pin bowling game
#[derive(Parser, Debug)]
#[command(name = BIN_NAME)]
#[command(
    version,
    about = "Score a ten-pin bowling game from its throw line",
    after_help = "\
Symbols:
  X      strike
  /      spare
  -      miss
  0-9    pins knocked down

Examples:
  splits-happen X7/9-X-88/-6XXX81    Prints 167
  splits-happen test                 Run the built-in regression games"
)]
struct Cli {
    /// Throw line to score, or `test` to run the regression games
    #[arg(allow_hyphen_values = true)]
    scores: String,
}

fn is_self_test(arg: &str) -> bool {
    SELF_TEST_TOKENS
        .iter()
        .any(|token| arg.eq_ignore_ascii_case(token))
}

/// Parse the command line. A lone `--` is a line of two misses, not the
/// end-of-options marker clap would take it for.
fn parse_args<I, T>(args: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
    if let [_, only] = args.as_slice() {
        if only == "--" {
            return Ok(Cli {
                scores: "--".to_string(),
            });
        }
    }
    Cli::try_parse_from(args)
}

fn usage() -> String {
    Cli::command().render_usage().to_string()
}

fn run(cli: &Cli, out: &mut impl Write) -> Result<ExitCode> {
    if is_self_test(&cli.scores) {
        return self_test(out);
    }

    match score_line_sheet(&cli.scores) {
        Ok(sheet) => {
            debug!(sheet = %serde_json::to_string(&sheet)?, "scored line");
            writeln!(out, "{}", sheet.total)?;
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            debug!(%err, "rejected line");
            writeln!(out, "{}: invalid scores: {}", BIN_NAME, cli.scores)?;
            writeln!(out, "{}", usage())?;
            Ok(ExitCode::FAILURE)
        }
    }
}

fn self_test(out: &mut impl Write) -> Result<ExitCode> {
    writeln!(out, "Testing...")?;
    let report = run_regression();
    for failure in &report.failures {
        writeln!(out, "{}", failure)?;
    }
    writeln!(out, "{}", report.describe())?;

    let verdict = if report.is_ok() { "OK" } else { "FAIL" };
    writeln!(out, "{} {:.1}%", verdict, report.pass_rate())?;

    Ok(if report.is_ok() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn main() -> Result<ExitCode> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let cli = parse_args(std::env::args_os()).unwrap_or_else(|err| err.exit());
    run(&cli, &mut std::io::stdout().lock())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_with(args: &[&str]) -> (ExitCode, String) {
        let cli = parse_args(std::iter::once(BIN_NAME).chain(args.iter().copied())).unwrap();
        let mut out = Vec::new();
        let code = run(&cli, &mut out).unwrap();
        (code, String::from_utf8(out).unwrap())
    }

    #[test]
    fn prints_score() {
        let (code, out) = run_with(&["X7/9-X-88/-6XXX81"]);
        assert_eq!(code, ExitCode::SUCCESS);
        assert_eq!(out, "167\n");
    }

    #[test]
    fn accepts_line_starting_with_a_miss() {
        let (_, out) = run_with(&["-9-9-9-9-9-9-9-9-9-9"]);
        assert_eq!(out, "90\n");

        let (_, out) = run_with(&["--------------------"]);
        assert_eq!(out, "0\n");
    }

    #[test]
    fn double_dash_is_two_misses() {
        let (code, out) = run_with(&["--"]);
        assert_eq!(code, ExitCode::SUCCESS);
        assert_eq!(out, "0\n");
    }

    #[test]
    fn spare_cannot_open_the_line() {
        let (code, out) = run_with(&["/5"]);
        assert_eq!(code, ExitCode::FAILURE);
        assert!(out.starts_with("splits-happen: invalid scores: /5\n"));
    }

    #[test]
    fn invalid_line_prints_error_and_usage() {
        let (code, out) = run_with(&["X7/9-Q"]);
        assert_eq!(code, ExitCode::FAILURE);
        assert!(out.starts_with("splits-happen: invalid scores: X7/9-Q\n"));
        assert!(out.contains("Usage:"));
    }

    #[test]
    fn self_test_tokens_ignore_case() {
        for token in ["test", "TEST", "-Test", "--test"] {
            assert!(is_self_test(token), "{token}");
        }
        assert!(!is_self_test("tests"));
        assert!(!is_self_test("---test"));
    }

    #[test]
    fn self_test_reports_all_passing() {
        let (code, out) = run_with(&["--test"]);
        assert_eq!(code, ExitCode::SUCCESS);
        assert_eq!(out, "Testing...\n4 / 4\nOK 100.0%\n");
    }

    #[test]
    fn wrong_argument_count_is_rejected() {
        assert!(parse_args([BIN_NAME]).is_err());
        assert!(parse_args([BIN_NAME, "X", "X"]).is_err());
    }
}
