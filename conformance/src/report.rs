//! Check results, severity levels, and the aggregated report.

use serde::Serialize;

/// Outcome class of one check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// The property holds.
    Pass,
    /// Suspicious but not a violation.
    Warning,
    /// The property is violated.
    Failure,
}

impl Severity {
    /// Four-letter tag used in the text report.
    pub const fn tag(self) -> &'static str {
        match self {
            Severity::Pass => "PASS",
            Severity::Warning => "WARN",
            Severity::Failure => "FAIL",
        }
    }
}

/// Result of one property check.
#[derive(Debug, Clone, Serialize)]
pub struct CheckResult {
    /// Identifier of the check, `<component>/<property>`.
    pub check: String,
    /// One-line outcome.
    pub message: String,
    /// Outcome class.
    pub severity: Severity,
    /// Offending entries, if any.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<String>,
}

impl CheckResult {
    fn with(check: impl Into<String>, message: impl Into<String>, severity: Severity) -> Self {
        Self {
            check: check.into(),
            message: message.into(),
            severity,
            details: Vec::new(),
        }
    }

    /// A passing check.
    pub fn pass(check: impl Into<String>, message: impl Into<String>) -> Self {
        Self::with(check, message, Severity::Pass)
    }

    /// A warning.
    pub fn warn(check: impl Into<String>, message: impl Into<String>) -> Self {
        Self::with(check, message, Severity::Warning)
    }

    /// A failed check.
    pub fn fail(check: impl Into<String>, message: impl Into<String>) -> Self {
        Self::with(check, message, Severity::Failure)
    }

    /// Attach offending entries.
    #[must_use]
    pub fn with_details(mut self, details: Vec<String>) -> Self {
        self.details = details;
        self
    }

    /// Pass if `violations` is empty, otherwise fail listing them.
    pub fn from_violations(
        check: impl Into<String>,
        ok: impl Into<String>,
        violations: Vec<String>,
    ) -> Self {
        if violations.is_empty() {
            Self::pass(check, ok)
        } else {
            let n = violations.len();
            Self::fail(check, format!("{} violation(s)", n)).with_details(violations)
        }
    }

    /// Whether this check failed.
    pub fn is_failure(&self) -> bool {
        self.severity == Severity::Failure
    }
}

/// Every check result of one run.
#[derive(Debug, Default, Serialize)]
pub struct ConformanceReport {
    /// Results in execution order.
    pub results: Vec<CheckResult>,
}

impl ConformanceReport {
    /// Empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one result.
    pub fn push(&mut self, result: CheckResult) {
        self.results.push(result);
    }

    /// Append all results of `other`.
    pub fn extend(&mut self, other: ConformanceReport) {
        self.results.extend(other.results);
    }

    /// Number of results with the given severity.
    pub fn count(&self, severity: Severity) -> usize {
        self.results.iter().filter(|r| r.severity == severity).count()
    }

    /// Number of failed checks.
    pub fn failure_count(&self) -> usize {
        self.count(Severity::Failure)
    }

    /// True when no check failed.
    pub fn all_passed(&self) -> bool {
        self.failure_count() == 0
    }
}
