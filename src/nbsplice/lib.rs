//! # nbsplice Architecture
//!
//! nbsplice moves cells between notebook documents: it picks a subset of the
//! cells of a source notebook and splices them into a destination notebook at
//! a chosen position, then writes the destination back.
//!
//! It is a library with a CLI client, split in layers:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, prints messages, sets up logging       │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Normalizes inputs (tokens → CellRef, flags → choices)    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - select: which cells to take                              │
//! │  - insert: where to put them                                │
//! │  - merge: load, select, insert, save                        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - NotebookStore trait                                      │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Cell references
//!
//! Cells are named either by position or by their `metadata.id`. The two are
//! kept apart by [`reference::CellRef`]; see that module for how user tokens
//! are read.
//!
//! ## Failure model
//!
//! Every error is fatal to the run. Both notebooks are loaded and the whole
//! transformation is computed before the destination is written, so a failed
//! run never leaves a half-written destination behind.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Selection, insertion and the merge pipeline
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: `Notebook` and `Cell`
//! - [`reference`]: Cell references and their resolution
//! - [`config`]: Output formatting configuration
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod reference;
pub mod store;
