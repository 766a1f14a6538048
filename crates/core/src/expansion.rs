//! Generic `$VAR` / `${VAR}` substitution.
//!
//! Only plain references are understood: no defaults, no nesting, no
//! arithmetic. Substituted values are copied verbatim and never rescanned.

use std::ffi::OsString;
use std::path::Path;

use log::debug;

use crate::environment::Environment;
use crate::error::{Error, Result};

/// Characters that may appear in a bare `$NAME` reference.
pub(crate) fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Expands every variable reference in `template`.
///
/// A `$` that does not start a name (trailing `$`, `$` before a non-identifier
/// character, or `${}`) is kept as a literal `$`. A `${` without a closing brace
/// takes the rest of the template as the name.
///
/// # Errors
///
/// Returns [`Error::UnresolvedVariable`] for the first referenced variable that
/// is unset or empty.
pub fn expand_variables<E>(template: &str, environment: &E) -> Result<OsString>
where
    E: Environment + ?Sized,
{
    let mut expanded = OsString::with_capacity(template.len());
    let mut rest = template;

    while let Some(dollar) = rest.find('$') {
        expanded.push(&rest[..dollar]);
        rest = &rest[dollar + 1..];

        let name = if let Some(braced) = rest.strip_prefix('{') {
            let (name, after) = match braced.find('}') {
                Some(close) => (&braced[..close], &braced[close + 1..]),
                None => (braced, ""),
            };
            rest = after;
            name
        } else {
            let end = rest.find(|c: char| !is_name_char(c)).unwrap_or(rest.len());
            let (name, after) = rest.split_at(end);
            rest = after;
            name
        };

        if name.is_empty() {
            expanded.push("$");
            continue;
        }

        let value = environment
            .non_empty(name)
            .ok_or_else(|| Error::UnresolvedVariable(name.to_string()))?;
        debug!("Expanded `{}` to `{}`", name, Path::new(&value).display());
        expanded.push(&value);
    }

    expanded.push(rest);
    Ok(expanded)
}
