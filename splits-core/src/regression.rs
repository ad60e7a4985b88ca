//! Built-in games with known scores, used by the self-test.

use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::score_line;

/// A throw line and the score it must produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RegressionCase {
    pub line: &'static str,
    /// Score the line must total.
    pub expected: u32,
}

pub const REGRESSION_CASES: &[RegressionCase] = &[
    RegressionCase {
        line: "XXXXXXXXXXXX",
        expected: 300,
    },
    RegressionCase {
        line: "5/5/5/5/5/5/5/5/5/5/5",
        expected: 150,
    },
    RegressionCase {
        line: "9-9-9-9-9-9-9-9-9-9-",
        expected: 90,
    },
    RegressionCase {
        line: "X7/9-X-88/-6XXX81",
        expected: 167,
    },
];

/// A case whose computed score did not match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegressionFailure {
    pub line: &'static str,
    pub expected: u32,
    /// `None` when the line could not be parsed at all.
    pub computed: Option<u32>,
}

impl fmt::Display for RegressionFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.computed {
            Some(computed) => write!(
                f,
                "FAIL {}: {}, expected {}",
                self.line, computed, self.expected
            ),
            None => write!(
                f,
                "FAIL {}: invalid scores, expected {}",
                self.line, self.expected
            ),
        }
    }
}

/// Outcome of a regression run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RegressionReport {
    /// Cases whose score matched.
    pub passed: u32,
    /// Cases run.
    pub attempted: u32,
    /// Every case that did not match, in run order.
    pub failures: Vec<RegressionFailure>,
}

impl RegressionReport {
    /// Record one case and the score it produced, if any.
    pub fn record(&mut self, case: &RegressionCase, computed: Option<u32>) {
        self.attempted += 1;
        if computed == Some(case.expected) {
            self.passed += 1;
        } else {
            self.failures.push(RegressionFailure {
                line: case.line,
                expected: case.expected,
                computed,
            });
        }
    }

    /// Every attempted case passed.
    pub fn is_ok(&self) -> bool {
        self.passed == self.attempted
    }

    /// Percentage of cases that passed. An empty run counts as a full pass.
    pub fn pass_rate(&self) -> f64 {
        if self.attempted == 0 {
            return 100.0;
        }
        100.0 * f64::from(self.passed) / f64::from(self.attempted)
    }

    /// Summary line such as `4 / 4`.
    pub fn describe(&self) -> String {
        format!("{} / {}", self.passed, self.attempted)
    }
}

/// Score each case and compare against its expected total.
pub fn run_cases(cases: &[RegressionCase]) -> RegressionReport {
    let mut report = RegressionReport::default();
    for case in cases {
        let computed = score_line(case.line).ok();
        debug!(line = case.line, expected = case.expected, ?computed, "regression case");
        report.record(case, computed);
    }
    report
}

/// Run the built-in regression games.
pub fn run_regression() -> RegressionReport {
    run_cases(REGRESSION_CASES)
}
