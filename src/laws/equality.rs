use std::fmt;
use std::rc::Rc;

/// The comparison a law uses to decide whether two results agree.
///
/// Most instances compare with `PartialEq` ([`Equality::natural`]). Types
/// whose observable behaviour is coarser than their structure compare
/// through a projection ([`Equality::by`]).
///
/// ```rust
/// use lawful::laws::Equality;
///
/// let case_insensitive = Equality::by(|text: &String| text.to_lowercase());
/// assert!(case_insensitive.holds(&String::from("Law"), &String::from("LAW")));
/// assert!(Equality::<i32>::natural().lift_option().holds(&Some(1), &Some(1)));
/// ```
pub struct Equality<T> {
    compare: Rc<dyn Fn(&T, &T) -> bool>,
}

impl<T: 'static> Equality<T> {
    /// Uses an arbitrary comparison.
    pub fn new<F>(compare: F) -> Self
    where
        F: Fn(&T, &T) -> bool + 'static,
    {
        Self {
            compare: Rc::new(compare),
        }
    }

    /// Compares with `PartialEq`.
    pub fn natural() -> Self
    where
        T: PartialEq,
    {
        Self::new(|left: &T, right: &T| left == right)
    }

    /// Compares the keys extracted by `key`.
    pub fn by<K, F>(key: F) -> Self
    where
        K: PartialEq,
        F: Fn(&T) -> K + 'static,
    {
        Self::new(move |left: &T, right: &T| key(left) == key(right))
    }

    /// Returns `true` if `left` and `right` agree.
    pub fn holds(&self, left: &T, right: &T) -> bool {
        (self.compare)(left, right)
    }

    /// Lifts the comparison to `Option<T>`; two `None`s agree.
    pub fn lift_option(&self) -> Equality<Option<T>> {
        let inner = self.clone();
        Equality::new(move |left: &Option<T>, right: &Option<T>| match (left, right) {
            (Some(left), Some(right)) => inner.holds(left, right),
            (None, None) => true,
            _ => false,
        })
    }

    /// Lifts the comparison to `Vec<T>`: equal lengths, and agreement at
    /// every position.
    pub fn lift_vec(&self) -> Equality<Vec<T>> {
        let inner = self.clone();
        Equality::new(move |left: &Vec<T>, right: &Vec<T>| {
            left.len() == right.len() && left.iter().zip(right).all(|(left, right)| inner.holds(left, right))
        })
    }

    /// Lifts the comparison to `Result<T, E>`; errors compare with
    /// `PartialEq`.
    pub fn lift_result<E: PartialEq + 'static>(&self) -> Equality<Result<T, E>> {
        let inner = self.clone();
        Equality::new(move |left: &Result<T, E>, right: &Result<T, E>| match (left, right) {
            (Ok(left), Ok(right)) => inner.holds(left, right),
            (Err(left), Err(right)) => left == right,
            _ => false,
        })
    }
}

impl<T> Clone for Equality<T> {
    fn clone(&self) -> Self {
        Self {
            compare: Rc::clone(&self.compare),
        }
    }
}

impl<T: PartialEq + 'static> Default for Equality<T> {
    fn default() -> Self {
        Self::natural()
    }
}

impl<T> fmt::Debug for Equality<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("Equality(<function>)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Some(1), Some(1), true)]
    #[case(Some(1), Some(2), false)]
    #[case(None, None, true)]
    #[case(Some(1), None, false)]
    fn lifted_option(#[case] left: Option<i32>, #[case] right: Option<i32>, #[case] expected: bool) {
        assert_eq!(Equality::natural().lift_option().holds(&left, &right), expected);
    }

    #[rstest]
    #[case(vec![1.0, 2.0], vec![1.0, 2.0], true)]
    #[case(vec![f64::NAN], vec![f64::NAN], true)]
    #[case(vec![1.0], vec![1.0, 2.0], false)]
    #[case(vec![2.0, 1.0], vec![1.0, 2.0], false)]
    fn lifted_vec_compares_position_by_position(#[case] left: Vec<f64>, #[case] right: Vec<f64>, #[case] expected: bool) {
        let bitwise = Equality::by(|x: &f64| x.to_bits());
        assert_eq!(bitwise.lift_vec().holds(&left, &right), expected);
    }

    #[rstest]
    fn lifted_result_compares_errors_naturally() {
        let equality = Equality::by(|n: &i32| n.abs()).lift_result::<&str>();
        assert!(equality.holds(&Ok(-3), &Ok(3)));
        assert!(equality.holds(&Err("e"), &Err("e")));
        assert!(!equality.holds(&Err("e"), &Ok(3)));
    }
}
