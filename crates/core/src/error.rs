use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Every way a resolve-then-exec run can end without replacing the process.
///
/// The display strings are the user-facing messages; the binary prefixes them
/// with `envroot: `.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum Error {
    #[error("missing EXECUTABLE (argv[1])")]
    MissingExecutable,

    #[error("EXECUTABLE is not valid UTF-8: {}", .0)]
    NonUnicodeTemplate(String),

    #[error("{} is not set", .0)]
    UnresolvedVariable(String),

    #[error("EXECUTABLE is not executable: {}", .0)]
    UnexecutablePath(String),

    #[error("exec failed: {}", .0)]
    Launch(String),
}

impl Error {
    /// Builds a launch failure from the error returned by the exec call.
    ///
    /// Uses the bare OS description when there is an errno, so the message
    /// reads `Permission denied` rather than `Permission denied (os error 13)`.
    pub fn launch_error(original: &std::io::Error) -> Self {
        let description = match original.raw_os_error() {
            Some(code) => nix::errno::Errno::from_raw(code).desc().to_string(),
            None => original.to_string(),
        };

        Self::Launch(description)
    }
}
