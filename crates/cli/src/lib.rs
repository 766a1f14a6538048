//! Envroot CLI Library
//!
//! This crate provides the `envroot` binary: it resolves an executable template
//! with [`envroot_core`] and replaces itself with the result.
//!
//! # Examples
//!
//! ```bash
//! # Run the first `bin/tool` found under any entry of $TOOL_ROOTS
//! envroot '${TOOL_ROOTS}/bin/tool' --flag value
//!
//! # Expand variables and run the result
//! envroot '$HOME/.local/$ARCH/bin/tool' run
//!
//! # Show what would run
//! envroot --dry-run '$HOME/bin/tool' run
//! ```

pub mod cli_args;
