//! Error types for worked-example checks.

/// Errors raised when a worked example disagrees with the castle counter.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScenarioError {
    /// The computed castle count differs from the recorded one.
    #[error("Failed test #{number}: result={result}, expectedResult={expected}")]
    Mismatch {
        number: usize,
        result: usize,
        expected: usize,
    },
}

impl ScenarioError {
    /// Process exit status the regression harness uses for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            ScenarioError::Mismatch { .. } => 1,
        }
    }
}
