use std::fmt::Debug;

use proptest::test_runner::TestError;
use thiserror::Error;

/// Why a law did not hold.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LawViolation {
    /// Two computation paths disagreed on a generated input.
    #[error("law `{law}` does not hold: {reason}; minimal failing input: {counterexample}")]
    Counterexample {
        /// Name of the violated law.
        law: &'static str,
        /// What went wrong on the failing trial.
        reason: String,
        /// The shrunk input, rendered with `Debug`.
        counterexample: String,
    },

    /// The runner gave up before reaching a verdict, typically because the
    /// generator rejected too many values.
    #[error("law `{law}` could not be checked: {reason}")]
    Aborted {
        /// Name of the law being checked.
        law: &'static str,
        /// The runner's reason for stopping.
        reason: String,
    },
}

impl LawViolation {
    /// Name of the law concerned.
    pub const fn law(&self) -> &'static str {
        match self {
            Self::Counterexample { law, .. } | Self::Aborted { law, .. } => law,
        }
    }

    pub(crate) fn from_test_error<T: Debug>(law: &'static str, error: TestError<T>) -> Self {
        match error {
            TestError::Fail(reason, counterexample) => Self::Counterexample {
                law,
                reason: reason.to_string(),
                counterexample: format!("{counterexample:?}"),
            },
            TestError::Abort(reason) => Self::Aborted {
                law,
                reason: reason.to_string(),
            },
        }
    }
}
