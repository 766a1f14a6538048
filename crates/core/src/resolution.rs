//! Turning a template into a validated executable path.

use std::ffi::OsString;
use std::fmt::{Display, Formatter};
use std::path::Path;

use log::{debug, info};

use crate::environment::Environment;
use crate::error::{Error, Result};
use crate::expansion::expand_variables;
use crate::list_suffix::{resolve_list_suffix, ListMatch};
use crate::probe::Probe;
use crate::quoting::strip_quotes;

/// Which strategy produced the resolved path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    ListSuffix,
    Expansion,
}

impl Display for Strategy {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Strategy::ListSuffix => formatter.write_str("list-suffix search"),
            Strategy::Expansion => formatter.write_str("variable expansion"),
        }
    }
}

/// A path that passed the executability check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub path: OsString,
    pub strategy: Strategy,
}

/// Resolves `template` to an executable path.
///
/// Quotes are stripped first. The list-suffix search runs before generic
/// expansion, so a `$VAR/suffix` template whose variable is unset falls through
/// instead of failing early.
///
/// # Errors
///
/// - [`Error::MissingExecutable`] if the template is empty
/// - [`Error::UnresolvedVariable`] if expansion hits an unset or empty variable
/// - [`Error::UnexecutablePath`] if the expanded path is not executable
pub fn resolve<E, P>(template: &str, environment: &E, probe: &P) -> Result<Resolution>
where
    E: Environment + ?Sized,
    P: Probe + ?Sized,
{
    if template.is_empty() {
        return Err(Error::MissingExecutable);
    }

    let stripped = strip_quotes(template);
    debug!("Resolving template `{}`", stripped);

    if let ListMatch::Matched(path) = resolve_list_suffix(&stripped, environment, probe) {
        if probe.is_executable(Path::new(&path)) {
            info!(
                "Resolved `{}` to `{}` by list-suffix search",
                stripped,
                Path::new(&path).display()
            );
            return Ok(Resolution {
                path,
                strategy: Strategy::ListSuffix,
            });
        }
    }

    let path = expand_variables(&stripped, environment)?;
    if !probe.is_executable(Path::new(&path)) {
        return Err(Error::UnexecutablePath(path.to_string_lossy().into_owned()));
    }

    info!(
        "Resolved `{}` to `{}` by variable expansion",
        stripped,
        Path::new(&path).display()
    );
    Ok(Resolution {
        path,
        strategy: Strategy::Expansion,
    })
}
