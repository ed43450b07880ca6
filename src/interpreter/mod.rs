//! Instruction evaluator
//!
//! This module provides the evaluation logic:
//! - [`engine`]: toggle state machine, evaluator and the two scan operations
//! - [`session`]: recorded scan history for stepping backward and forward
//! - [`errors`]: Scan error types
//!
//! # Execution Model
//!
//! The evaluator reads instructions left to right. `do()` and `don't()` move
//! the toggle between `Enabled` and `Disabled`; a multiply is an action taken
//! in the current state and never changes it. In unconditional mode every
//! multiply counts.

pub mod constants;
pub mod engine;
pub mod errors;
pub mod session;
