use proptest::test_runner::Config;

/// How many trials a law runs and how hard a failure is shrunk.
///
/// The defaults come from `proptest`, so `PROPTEST_CASES` and
/// `PROPTEST_MAX_SHRINK_ITERS` in the environment are honoured.
///
/// ```rust
/// use lawful::laws::LawConfig;
///
/// let config = LawConfig::default().with_cases(32);
/// assert_eq!(config.cases(), 32);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LawConfig {
    cases: u32,
    max_shrink_iters: u32,
}

impl LawConfig {
    /// Sets the number of successful trials required.
    #[must_use]
    pub const fn with_cases(mut self, cases: u32) -> Self {
        self.cases = cases;
        self
    }

    /// Bounds the number of shrinking steps after a failure.
    #[must_use]
    pub const fn with_max_shrink_iters(mut self, max_shrink_iters: u32) -> Self {
        self.max_shrink_iters = max_shrink_iters;
        self
    }

    /// Number of trials per law.
    pub const fn cases(&self) -> u32 {
        self.cases
    }

    /// Maximum shrinking steps.
    pub const fn max_shrink_iters(&self) -> u32 {
        self.max_shrink_iters
    }

    /// Runner configuration for a single law. Failures are never written to
    /// disk: laws are not tied to a source file.
    pub(crate) fn to_proptest(self) -> Config {
        Config {
            cases: self.cases,
            max_shrink_iters: self.max_shrink_iters,
            failure_persistence: None,
            ..Config::default()
        }
    }
}

impl Default for LawConfig {
    fn default() -> Self {
        let defaults = Config::default();
        Self {
            cases: defaults.cases,
            max_shrink_iters: defaults.max_shrink_iters,
        }
    }
}
