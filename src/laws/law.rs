use std::fmt;
use std::rc::Rc;

use proptest::strategy::Strategy;
use proptest::test_runner::{TestCaseError, TestRunner};

use super::{Equality, LawConfig, LawViolation};

type Check = Rc<dyn Fn(&LawConfig) -> Result<(), LawViolation>>;

/// A named check that a typeclass instance must pass.
///
/// Laws are plain data: a list of them can be fed to any test runner, one
/// test per law or all at once through [`verify`](super::verify).
///
/// ```rust
/// use lawful::laws::{Law, LawConfig, generators};
///
/// let law = Law::property("addition_commutes", (generators::int_small(), generators::int_small()), |(a, b)| a + b == b + a);
/// assert_eq!(law.name(), "addition_commutes");
/// assert!(law.check_with(&LawConfig::default().with_cases(16)).is_ok());
/// ```
#[derive(Clone)]
pub struct Law {
    name: &'static str,
    check: Check,
}

impl Law {
    /// A law backed by an arbitrary check.
    pub fn new<F>(name: &'static str, check: F) -> Self
    where
        F: Fn(&LawConfig) -> Result<(), LawViolation> + 'static,
    {
        Self {
            name,
            check: Rc::new(check),
        }
    }

    /// A law that must hold for every value drawn from `strategy`.
    ///
    /// The first failing input is shrunk and reported as a
    /// [`LawViolation::Counterexample`].
    pub fn property<S, P>(name: &'static str, strategy: S, holds: P) -> Self
    where
        S: Strategy + 'static,
        P: Fn(S::Value) -> bool + 'static,
    {
        Self::new(name, move |config| {
            let mut runner = TestRunner::new(config.to_proptest());
            runner
                .run(&strategy, |value| {
                    if holds(value) {
                        Ok(())
                    } else {
                        Err(TestCaseError::fail("the property does not hold"))
                    }
                })
                .map_err(|error| LawViolation::from_test_error(name, error))
        })
    }

    /// A law stating that two computations agree under `equality` for every
    /// value drawn from `strategy`.
    ///
    /// `sides` returns the left and right side of the equation. When they
    /// disagree, both are rendered with `Debug` into the violation's reason.
    ///
    /// ```rust
    /// use lawful::laws::{Equality, Law, LawConfig, generators};
    ///
    /// let law = Law::equation("doubling_is_adding", generators::int_small(), Equality::natural(), |n| (n * 2, n + n));
    /// assert!(law.check_with(&LawConfig::default().with_cases(16)).is_ok());
    /// ```
    pub fn equation<S, T, P>(name: &'static str, strategy: S, equality: Equality<T>, sides: P) -> Self
    where
        S: Strategy + 'static,
        T: fmt::Debug + 'static,
        P: Fn(S::Value) -> (T, T) + 'static,
    {
        Self::new(name, move |config| {
            let mut runner = TestRunner::new(config.to_proptest());
            runner
                .run(&strategy, |value| {
                    let (left, right) = sides(value);
                    if equality.holds(&left, &right) {
                        Ok(())
                    } else {
                        Err(TestCaseError::fail(format!("left side {left:?} differs from right side {right:?}")))
                    }
                })
                .map_err(|error| LawViolation::from_test_error(name, error))
        })
    }

    /// The law's name.
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Checks the law with the default configuration.
    ///
    /// # Errors
    ///
    /// Returns the violation if a counterexample is found or the run aborts.
    pub fn check(&self) -> Result<(), LawViolation> {
        self.check_with(&LawConfig::default())
    }

    /// Checks the law with `config`.
    ///
    /// # Errors
    ///
    /// Returns the violation if a counterexample is found or the run aborts.
    pub fn check_with(&self, config: &LawConfig) -> Result<(), LawViolation> {
        let outcome = (self.check)(config);
        match &outcome {
            Ok(()) => tracing::debug!(law = self.name, cases = config.cases(), "law holds"),
            Err(violation) => tracing::warn!(law = self.name, %violation, "law violated"),
        }
        outcome
    }
}

impl fmt::Debug for Law {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("Law").field("name", &self.name).finish_non_exhaustive()
    }
}

/// Checks every law with the default configuration, stopping at the first
/// violation.
///
/// # Errors
///
/// Returns the first violation found, in list order.
pub fn verify(laws: &[Law]) -> Result<(), LawViolation> {
    verify_with(laws, &LawConfig::default())
}

/// Checks every law with `config`, stopping at the first violation.
///
/// # Errors
///
/// Returns the first violation found, in list order.
pub fn verify_with(laws: &[Law], config: &LawConfig) -> Result<(), LawViolation> {
    laws.iter().try_for_each(|law| law.check_with(config))
}

/// Checks every law with `config` and collects all violations.
pub fn verify_all(laws: &[Law], config: &LawConfig) -> Vec<LawViolation> {
    laws.iter().filter_map(|law| law.check_with(config).err()).collect()
}
