//! Instruction scanner for corrupted memory
//!
//! This module turns a memory blob into a flat list of instructions:
//! - [`instruction`]: instruction and source location definitions
//! - [`digits`]: decimal digit classification and operand values
//! - [`lexer`]: pattern matching (memory text → instructions)
//!
//! # Instruction Language
//!
//! Only three patterns are recognised, everything else is noise:
//! - `mul(X,Y)` where `X` and `Y` are one or more decimal digits of any
//!   script (`0-9`, `٣`, `７`, ...), with no upper bound on the value
//! - `do()` enables subsequent multiplications
//! - `don't()` disables subsequent multiplications
//!
//! Matching is substring based and never lenient: `mul(1a,2)`, `mul[3,7]`
//! and `mul ( 2 , 4 )` produce nothing. Matches never overlap and are
//! reported in the order they start.
//!
//! # Scanner Implementation
//!
//! Hand-written character scanner, no regex engine. Scanning cannot fail:
//! every input yields an instruction list, possibly empty.

pub mod digits;
pub mod instruction;
pub mod lexer;
