//! Envroot Core Library
//!
//! This crate resolves an executable template such as `${ROOTS}/bin/tool` or
//! `$HOME/.local/bin/tool` into a concrete path the current user may execute,
//! and replaces the current process with it.
//!
//! # Resolution
//!
//! - **Quote stripping**: every `"` and `'` is dropped from the template
//! - **List-suffix search**: `$VAR/suffix` tries `suffix` under each
//!   colon-separated entry of `VAR`
//! - **Variable expansion**: otherwise every `$VAR`/`${VAR}` is substituted, and
//!   an unset variable is an error
//!
//! # Examples
//!
//! ```no_run
//! use envroot_core::environment::ProcessEnvironment;
//! use envroot_core::probe::SystemProbe;
//! use envroot_core::resolution::resolve;
//!
//! let resolution = resolve("${PATH}/env", &ProcessEnvironment, &SystemProbe)?;
//! println!("{}", std::path::Path::new(&resolution.path).display());
//! # Ok::<(), envroot_core::error::Error>(())
//! ```

pub mod environment;
pub mod error;
pub mod execution;
pub mod expansion;
pub mod list_suffix;
pub mod probe;
pub mod quoting;
pub mod resolution;
