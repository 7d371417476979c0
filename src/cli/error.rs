//! CLI-level errors (wraps application errors)

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Application(#[from] ApplicationError),

    #[error("{0}")]
    Usage(String),
}

impl From<DomainError> for CliError {
    fn from(e: DomainError) -> Self {
        CliError::Application(e.into())
    }
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Usage(_) => crate::exitcode::USAGE,
            CliError::Application(e) => match e {
                ApplicationError::Domain(
                    DomainError::IdentityViolated { .. } | DomainError::BruteForceMismatch { .. },
                ) => crate::exitcode::SOFTWARE,
                ApplicationError::Domain(_)
                | ApplicationError::Parse { .. }
                | ApplicationError::NodeCountOutOfRange { .. }
                | ApplicationError::TooLargeToRender { .. }
                | ApplicationError::InvalidProblem { .. } => crate::exitcode::DATAERR,
                ApplicationError::Config { .. } => crate::exitcode::CONFIG,
                ApplicationError::OperationFailed { .. } => crate::exitcode::IOERR,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(CliError::Usage("x".into()), crate::exitcode::USAGE)]
    #[case(DomainError::SelfLoop { index: 0, node: 2 }.into(), crate::exitcode::DATAERR)]
    #[case(DomainError::IdentityViolated { total: 1, expected: 2 }.into(), crate::exitcode::SOFTWARE)]
    #[case(
        ApplicationError::Config { message: "bad".into() }.into(),
        crate::exitcode::CONFIG
    )]
    fn given_error_when_mapping_then_uses_sysexits_code(#[case] err: CliError, #[case] code: i32) {
        assert_eq!(err.exit_code(), code);
    }
}
