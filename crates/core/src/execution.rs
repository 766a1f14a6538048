//! Replacing the current process with the resolved executable.

use std::ffi::{OsStr, OsString};
use std::os::unix::ffi::OsStrExt;
use std::os::unix::process::CommandExt;
use std::process::Command;

use log::info;

use crate::error::Error;
use crate::resolution::Resolution;

/// The argument vector for the final process image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchPlan {
    path: OsString,
    arguments: Vec<OsString>,
}

impl LaunchPlan {
    /// `arguments` are the caller's arguments after the template, forwarded
    /// unchanged, whatever bytes they hold.
    pub fn new(resolution: Resolution, arguments: Vec<OsString>) -> Self {
        Self {
            path: resolution.path,
            arguments,
        }
    }

    pub fn path(&self) -> &OsStr {
        &self.path
    }

    /// Element 0 is the resolved path, followed by the forwarded arguments.
    pub fn argv(&self) -> Vec<&OsStr> {
        std::iter::once(self.path.as_os_str())
            .chain(self.arguments.iter().map(OsString::as_os_str))
            .collect()
    }

    /// The program handed to the exec call.
    ///
    /// A bare name would trigger a PATH search; the probe checked it relative
    /// to the working directory, so it is run from there.
    fn program(&self) -> OsString {
        if self.path.as_bytes().contains(&b'/') {
            return self.path.clone();
        }

        let mut program = OsString::from("./");
        program.push(&self.path);
        program
    }

    /// Replaces the current process image, keeping the environment as is.
    ///
    /// Only returns if the exec call fails.
    pub fn exec(self) -> Error {
        info!("Executing {:?} with arguments {:?}", self.path, self.arguments);

        let error = Command::new(self.program())
            .arg0(&self.path)
            .args(&self.arguments)
            .exec();

        Error::launch_error(&error)
    }
}
