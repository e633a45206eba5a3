use std::process::ExitCode;

/// Outcome of one CLI command: a single rendered output stream plus the
/// process exit code it maps to.
#[derive(Debug)]
pub(crate) enum CommandResult {
    Failure(String),
    Success(String),
}

impl CommandResult {
    pub fn stderr(fmt_args: std::fmt::Arguments<'_>) -> Self {
        Self::Failure(format!("{fmt_args}"))
    }

    pub fn stdout(fmt_args: std::fmt::Arguments<'_>) -> Self {
        Self::Success(format!("{fmt_args}"))
    }

    pub fn exit_code(&self) -> ExitCode {
        match self {
            Self::Failure(_) => ExitCode::FAILURE,
            Self::Success(_) => ExitCode::SUCCESS,
        }
    }
}
