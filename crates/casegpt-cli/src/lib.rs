//! casegpt-cli library root.
//!
//! Re-exports internal modules so that integration tests can drive the
//! case desk and config handling without going through the terminal.

pub mod aws;
pub mod backend;
pub mod cli;
pub mod config;
pub mod credentials;
pub mod desk;
pub mod repl;
