//! Searching a colon-separated variable for `$VAR/suffix` templates.
//!
//! `${ROOTS}/bin/tool` with `ROOTS=/opt/a:/opt/b` tries `/opt/a/bin/tool`, then
//! `/opt/b/bin/tool`, and yields the first one that is executable. The suffix is
//! appended literally, leading `/` included; there is no other path joining.

use std::ffi::{OsStr, OsString};
use std::os::unix::ffi::OsStrExt;
use std::path::Path;

use log::debug;

use crate::environment::Environment;
use crate::expansion::is_name_char;
use crate::probe::Probe;

/// Outcome of the list-suffix search.
///
/// `NoMatch` is not an error: it tells the caller to fall back to generic
/// expansion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListMatch {
    Matched(OsString),
    NoMatch,
}

/// A template split into the variable it names and the suffix after it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Pattern<'a> {
    name: &'a str,
    suffix: &'a str,
}

/// Splits `$NAME/suffix` or `${NAME}/suffix`. The suffix keeps its leading `/`.
fn parse(template: &str) -> Option<Pattern<'_>> {
    let rest = template.strip_prefix('$')?;

    let (name, suffix) = if let Some(braced) = rest.strip_prefix('{') {
        let close = braced.find('}')?;
        (&braced[..close], &braced[close + 1..])
    } else {
        let end = rest.find(|c: char| !is_name_char(c)).unwrap_or(rest.len());
        rest.split_at(end)
    };

    if name.is_empty() || !suffix.starts_with('/') {
        return None;
    }

    Some(Pattern { name, suffix })
}

/// Resolves `template` against the directories listed in the variable it names.
///
/// A value without `:` is treated as a single directory. Empty list entries are
/// skipped. Candidates are tried in list order and the first executable one
/// wins.
pub fn resolve_list_suffix<E, P>(template: &str, environment: &E, probe: &P) -> ListMatch
where
    E: Environment + ?Sized,
    P: Probe + ?Sized,
{
    let Some(pattern) = parse(template) else {
        return ListMatch::NoMatch;
    };

    let Some(value) = environment.non_empty(pattern.name) else {
        debug!(
            "`{}` is unset, skipping list-suffix search for `{}`",
            pattern.name, template
        );
        return ListMatch::NoMatch;
    };

    let entries = value
        .as_bytes()
        .split(|byte| *byte == b':')
        .filter(|entry| !entry.is_empty());

    for entry in entries {
        let mut candidate = OsStr::from_bytes(entry).to_os_string();
        candidate.push(pattern.suffix);
        debug!(
            "Trying list-suffix candidate `{}`",
            Path::new(&candidate).display()
        );

        if probe.is_executable(Path::new(&candidate)) {
            return ListMatch::Matched(candidate);
        }
    }

    ListMatch::NoMatch
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::probe::MockProbe;
    use std::collections::HashMap;
    use std::path::PathBuf;

    fn environment(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn test_parse_shapes() {
        assert_eq!(
            parse("${ROOTS}/bin/x"),
            Some(Pattern {
                name: "ROOTS",
                suffix: "/bin/x"
            })
        );
        assert_eq!(
            parse("$HOME/app"),
            Some(Pattern {
                name: "HOME",
                suffix: "/app"
            })
        );
        assert_eq!(parse("$HOME"), None);
        assert_eq!(parse("${HOME}"), None);
        assert_eq!(parse("${HOME}x/app"), None);
        assert_eq!(parse("$HOME-x/app"), None);
        assert_eq!(parse("${}/app"), None);
        assert_eq!(parse("$/app"), None);
        assert_eq!(parse("${HOME/app"), None);
        assert_eq!(parse("/usr/$HOME/app"), None);
    }

    #[test]
    fn test_braced_name_runs_to_first_brace() {
        assert_eq!(
            parse("${A:B}/x"),
            Some(Pattern {
                name: "A:B",
                suffix: "/x"
            })
        );
    }

    #[test]
    fn test_template_without_dollar_never_matches() {
        let environment = environment(&[("HOME", "/home/u")]);
        let probe = MockProbe::new().with_executable("/home/u/app");
        for template in ["/home/u/app", "HOME/app", " $HOME/app", ""] {
            assert_eq!(
                resolve_list_suffix(template, &environment, &probe),
                ListMatch::NoMatch
            );
        }
        assert!(probe.checked.borrow().is_empty());
    }

    #[test]
    fn test_first_executable_entry_wins() {
        let environment = environment(&[("PATH_LIKE", "/a:/b:/c")]);
        let probe = MockProbe::new()
            .with_executable("/b/bin/x")
            .with_executable("/c/bin/x");

        assert_eq!(
            resolve_list_suffix("${PATH_LIKE}/bin/x", &environment, &probe),
            ListMatch::Matched("/b/bin/x".into())
        );
        assert_eq!(
            *probe.checked.borrow(),
            vec![PathBuf::from("/a/bin/x"), PathBuf::from("/b/bin/x")]
        );
    }

    #[test]
    fn test_empty_entries_are_skipped() {
        let environment = environment(&[("ROOTS", "::/a::/b:")]);
        let probe = MockProbe::new().with_executable("/b/x");

        assert_eq!(
            resolve_list_suffix("$ROOTS/x", &environment, &probe),
            ListMatch::Matched("/b/x".into())
        );
        assert_eq!(
            *probe.checked.borrow(),
            vec![PathBuf::from("/a/x"), PathBuf::from("/b/x")]
        );
    }

    #[test]
    fn test_no_executable_entry() {
        let environment = environment(&[("ROOTS", "/a:/b")]);
        let probe = MockProbe::new();
        assert_eq!(
            resolve_list_suffix("$ROOTS/x", &environment, &probe),
            ListMatch::NoMatch
        );
        assert_eq!(probe.checked.borrow().len(), 2);
    }

    #[test]
    fn test_single_value() {
        let environment = environment(&[("HOME", "/home/u")]);

        let probe = MockProbe::new().with_executable("/home/u/app");
        assert_eq!(
            resolve_list_suffix("$HOME/app", &environment, &probe),
            ListMatch::Matched("/home/u/app".into())
        );

        let probe = MockProbe::new();
        assert_eq!(
            resolve_list_suffix("$HOME/app", &environment, &probe),
            ListMatch::NoMatch
        );
    }

    #[test]
    fn test_non_utf8_entries_keep_their_bytes() {
        let environment: HashMap<String, OsString> = HashMap::from([(
            "ROOTS".to_string(),
            OsStr::from_bytes(b"/caf\xe9:/b").to_os_string(),
        )]);
        let expected = OsStr::from_bytes(b"/caf\xe9/bin/x").to_os_string();
        let probe = MockProbe::new().with_executable(expected.clone());

        assert_eq!(
            resolve_list_suffix("$ROOTS/bin/x", &environment, &probe),
            ListMatch::Matched(expected)
        );
    }

    #[test]
    fn test_unset_or_empty_variable() {
        let environment = environment(&[("EMPTY", "")]);
        let probe = MockProbe::new().with_executable("/bin/tool");

        assert_eq!(
            resolve_list_suffix("${FOO}/bin/tool", &environment, &probe),
            ListMatch::NoMatch
        );
        assert_eq!(
            resolve_list_suffix("$EMPTY/bin/tool", &environment, &probe),
            ListMatch::NoMatch
        );
        assert!(probe.checked.borrow().is_empty());
    }
}
