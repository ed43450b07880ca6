//! # Introduction
//!
//! Historian bundles three small puzzle tools. Each reads one text file,
//! applies a pure function to it and prints the result:
//!
//! - `lists`: total distance and similarity score of two location columns
//! - `reports`: number of safe reactor reports, with and without the
//!   Problem Dampener
//! - `memory`: sum of the `mul(X,Y)` instructions hidden in corrupted memory,
//!   with and without `do()`/`don't()` toggles
//!
//! A fourth binary, `memory-trace`, steps through a memory scan in a terminal
//! UI built with [ratatui](https://docs.rs/ratatui).
//!
//! ## Scan pipeline
//!
//! ```text
//! Memory → Lexer → Instructions → Evaluator → Sums
//!                                    ↓
//!                               Snapshots → TUI
//! ```
//!
//! 1. [`scanner`] — matches instructions in the memory blob.
//! 2. [`interpreter`] — runs the toggle state machine and accumulates
//!    products, optionally recording a [`snapshot::Snapshot`] per step.
//! 3. [`snapshot`] — snapshot history with a configurable memory limit.
//! 4. [`puzzles`] — the list and report puzzles.
//! 5. [`cli`] — argument checking, file loading and error reporting shared by
//!    every binary.
//! 6. [`ui`] — ratatui-based trace viewer; not part of the stable library API.

pub mod cli;
pub mod interpreter;
pub mod puzzles;
pub mod scanner;
pub mod snapshot;
pub mod ui;

pub use interpreter::engine::{
    extract_multiply_results_conditional, extract_multiply_results_unconditional,
};
