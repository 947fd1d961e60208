//! Command handlers. Each submodule implements one subcommand; argument
//! definitions live in `crate::cli`.

pub mod completions;
pub mod generate;
pub mod init;
