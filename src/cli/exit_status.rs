use std::process::ExitCode;

/// Process exit status of a tsglot command.
///
/// - `Success` (0): the command ran and nothing needs attention
/// - `Failure` (1): the command ran but reported errors (or files failed to parse)
/// - `Error` (2): the command could not run (bad config, missing directory, I/O)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Failure,
    Error,
}

impl ExitStatus {
    pub fn code(self) -> u8 {
        match self {
            ExitStatus::Success => 0,
            ExitStatus::Failure => 1,
            ExitStatus::Error => 2,
        }
    }
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        ExitCode::from(status.code())
    }
}
