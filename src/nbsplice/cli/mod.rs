//! # CLI Layer
//!
//! This module is **one possible UI client** for nbsplice, not the application
//! itself. It is the only place in the codebase that:
//! - Knows about terminal I/O (stdout, stderr)
//! - Handles argument parsing
//! - Installs the tracing subscriber
//! - Formats output for human consumption
//!
//! ## Structure
//!
//! - `setup`: the clap definition
//! - `commands`: `run()`, config lookup and dispatch to the API
//! - `print`: message output

mod commands;
mod print;
mod setup;

pub use commands::run;
