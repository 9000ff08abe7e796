//! This module provides a trait [`Input`] for representing inputs generated for property based
//! testing

use proptest::{prop_assert_eq, test_runner::TestCaseResult};

/// Represents an input generated for testing purposes.
///
/// An input is usually rendered to source text with [`std::fmt::Display`], fed to the scanner,
/// and then checked against what the scanner produced.
pub trait Input<Output> {
    /// Verifies that the given output complies with this input.
    ///
    /// # Errors
    /// [`proptest::test_runner::TestCaseError`]: for any reason the assertion fails.
    fn assert(self, output: Output) -> TestCaseResult;
}

impl<'a, T, U> Input<&'a [T]> for &[U]
where
    for<'b> &'b U: Input<&'a T>,
{
    fn assert(self, output: &'a [T]) -> TestCaseResult {
        prop_assert_eq!(self.len(), output.len());

        for (input, output) in self.iter().zip(output.iter()) {
            input.assert(output)?;
        }

        Ok(())
    }
}
