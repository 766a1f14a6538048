//! Command-line argument parsing and validation.
//!
//! Options are only recognised before the template. From the template onward
//! every token belongs to the launched program and is forwarded untouched, even
//! tokens that look like envroot's own flags.

use std::ffi::OsString;

use clap::Parser;
use envroot_core::error::{Error, Result};

/// Command-line arguments for the envroot wrapper.
///
/// # Examples
///
/// ```rust
/// use std::ffi::OsString;
///
/// use clap::Parser;
/// use envroot_cli::cli_args::Args;
///
/// let args = Args::parse_from(["envroot", "${ROOTS}/bin/tool", "--help"]);
/// let (template, arguments) = args.split_command()?;
/// assert_eq!(template, "${ROOTS}/bin/tool");
/// assert_eq!(arguments, ["--help"].map(OsString::from));
/// # Ok::<(), envroot_core::error::Error>(())
/// ```
#[derive(Parser, Debug)]
#[command(name = "envroot", version, about, term_width = 0)]
pub struct Args {
    /// Resolve and print the command instead of executing it.
    #[arg(long, short = 'd', action)]
    pub dry_run: bool,

    /// Executable template followed by the arguments for the resolved executable.
    ///
    /// Quotes are stripped from the template. `$VAR/suffix` searches each
    /// colon-separated entry of `VAR`; anything else has its variables expanded.
    /// The arguments start at the executable's argv[1] and may hold any bytes.
    #[arg(
        value_name = "TEMPLATE [ARG]...",
        value_parser = clap::value_parser!(OsString),
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub command: Vec<OsString>,
}

impl Args {
    /// Splits the command into the template and the forwarded arguments.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingExecutable`] if the template is missing or empty,
    /// or if no argument follows it, and [`Error::NonUnicodeTemplate`] if the
    /// template is not valid UTF-8.
    pub fn split_command(&self) -> Result<(&str, &[OsString])> {
        let (template, arguments) = match self.command.split_first() {
            Some((template, arguments)) if !template.is_empty() && !arguments.is_empty() => {
                (template, arguments)
            }
            _ => return Err(Error::MissingExecutable),
        };

        let template = template
            .to_str()
            .ok_or_else(|| Error::NonUnicodeTemplate(template.to_string_lossy().into_owned()))?;

        Ok((template, arguments))
    }
}
