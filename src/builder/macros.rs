//! Macros for ergonomic lock construction.

/// Build a [`CombinationLock`](crate::lock::CombinationLock) with the default
/// configuration.
///
/// Expands to [`CombinationBuilder::build`](crate::builder::CombinationBuilder::build),
/// so it returns a `Result`.
///
/// # Example
///
/// ```
/// use tumbler::combination_lock;
///
/// let mut lock = combination_lock![4, 2].unwrap();
/// lock.enter_digit(4);
/// lock.enter_digit(2);
/// assert!(lock.is_open());
/// ```
#[macro_export]
macro_rules! combination_lock {
    ($($digit:expr),+ $(,)?) => {
        $crate::builder::CombinationBuilder::new([$($digit),+]).build()
    };
}

#[cfg(test)]
mod tests {
    use crate::builder::BuildError;

    #[test]
    fn combination_lock_macro_builds_lock() {
        let mut lock = combination_lock![1, 2, 3].unwrap();
        assert_eq!(lock.status(), "LOCKED");

        for digit in [1, 2, 3] {
            lock.enter_digit(digit);
        }
        assert!(lock.is_open());
    }

    #[test]
    fn combination_lock_macro_accepts_trailing_comma() {
        let lock = combination_lock![7,].unwrap();
        assert_eq!(lock.len(), 1);
    }

    #[test]
    fn combination_lock_macro_reports_bad_digits() {
        let result = combination_lock![1, 10];
        assert!(matches!(result, Err(BuildError::InvalidDigit { digit: 10 })));
    }
}
