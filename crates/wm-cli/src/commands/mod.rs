//! Command handlers.
//!
//! Each submodule owns one subcommand: argument structs live in `crate::cli`,
//! the behaviour lives here.

pub mod completions;
pub mod run;
pub mod template;
