//! This module provides a trait [`Input`] for representing inputs generated for property based
//! testing.

use proptest::{prop_assert_eq, test_runner::TestCaseResult};

/// Represents an input generated for testing purposes.
///
/// An input knows the source text it renders to (usually through `Display`) and can check that
/// what a phase produced from that text is what it expects.
pub trait Input<Output> {
    /// Verifies that the given output complies with this input.
    ///
    /// # Errors
    /// [`proptest::test_runner::TestCaseError`]: for any reason the assertion fails.
    fn assert(self, output: Output) -> TestCaseResult;
}

impl<'o, T, U> Input<&'o [T]> for &[U]
where
    for<'a, 'b> &'a U: Input<&'b T>,
{
    fn assert(self, output: &'o [T]) -> TestCaseResult {
        prop_assert_eq!(
            self.len(),
            output.len(),
            "expected {} outputs, got {}",
            self.len(),
            output.len()
        );

        for (input, output) in self.iter().zip(output) {
            input.assert(output)?;
        }

        Ok(())
    }
}

impl<'o, T, U> Input<&'o Vec<T>> for &Vec<U>
where
    for<'a, 'b> &'a U: Input<&'b T>,
{
    fn assert(self, output: &'o Vec<T>) -> TestCaseResult {
        self.as_slice().assert(output.as_slice())
    }
}
