//! Executability checks.

use std::path::Path;

use log::trace;
use nix::unistd::{access, AccessFlags};

/// Decides whether a candidate path may be executed by the current user.
pub trait Probe {
    fn is_executable(&self, path: &Path) -> bool;
}

/// Asks the OS, with the same check `access(2)` performs for `X_OK`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemProbe;

impl Probe for SystemProbe {
    fn is_executable(&self, path: &Path) -> bool {
        if path.as_os_str().is_empty() {
            return false;
        }

        match access(path, AccessFlags::X_OK) {
            Ok(()) => true,
            Err(errno) => {
                trace!("`{}` is not executable: {}", path.display(), errno.desc());
                false
            }
        }
    }
}

/// Probe with a fixed set of executable paths.
#[cfg(test)]
#[derive(Default)]
pub struct MockProbe {
    executables: std::collections::HashSet<std::path::PathBuf>,
    pub checked: std::cell::RefCell<Vec<std::path::PathBuf>>,
}

#[cfg(test)]
impl MockProbe {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_executable(mut self, path: impl Into<std::path::PathBuf>) -> Self {
        self.executables.insert(path.into());
        self
    }
}

#[cfg(test)]
impl Probe for MockProbe {
    fn is_executable(&self, path: &Path) -> bool {
        self.checked.borrow_mut().push(path.to_path_buf());
        self.executables.contains(path)
    }
}
