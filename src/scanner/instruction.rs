// Instruction definitions for the memory scanner

use num_bigint::BigUint;
use std::fmt;

/// Source location information for error reporting and the trace viewer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLocation {
    pub line: usize,
    pub column: usize,
    /// Character offset from the start of the blob
    pub offset: usize,
    /// Number of characters covered by the match
    pub len: usize,
}

impl SourceLocation {
    pub fn new(line: usize, column: usize, offset: usize, len: usize) -> Self {
        Self {
            line,
            column,
            offset,
            len,
        }
    }

    /// Location used before any instruction has been read
    pub fn start() -> Self {
        Self::new(1, 1, 0, 0)
    }
}

/// Kind of a parsed instruction, without position information
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstructionKind {
    /// Operands have no upper bound
    Multiply(BigUint, BigUint),
    Enable,
    Disable,
}

/// A matched instruction together with where it was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instruction {
    pub kind: InstructionKind,
    pub location: SourceLocation,
}

impl Instruction {
    pub fn new(kind: InstructionKind, location: SourceLocation) -> Self {
        Self { kind, location }
    }
}

impl fmt::Display for InstructionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InstructionKind::Multiply(a, b) => write!(f, "mul({},{})", a, b),
            InstructionKind::Enable => write!(f, "do()"),
            InstructionKind::Disable => write!(f, "don't()"),
        }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} at line {}, column {}",
            self.kind, self.location.line, self.location.column
        )
    }
}
