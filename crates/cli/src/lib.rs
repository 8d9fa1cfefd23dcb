//! `salescomp` command-line front end: configuration, wiring and report
//! rendering around the commission engine and the order projections.

pub mod args;
pub mod render;
pub mod run;

pub use args::{Cli, Command, OutputFormat};
pub use run::execute;
