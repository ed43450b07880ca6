//! Lexer (pattern scanner) for corrupted memory
//!
//! Converts a raw memory blob into a flat [`Instruction`] list consumed by the
//! evaluator. Characters that do not start a valid instruction are skipped one
//! at a time, so a failed near-match never swallows the text after it.

use super::digits::{is_decimal_digit, parse_decimal};
use super::instruction::{Instruction, InstructionKind, SourceLocation};
use log::{debug, trace};

const MUL_PREFIX: &str = "mul(";
const DO_TOKEN: &str = "do()";
const DONT_TOKEN: &str = "don't()";

/// Lexer for corrupted memory
pub struct Lexer {
    input: Vec<char>,
    position: usize,
    line: usize,
    column: usize,
}

impl Lexer {
    /// Create a new lexer for the given memory blob.
    pub fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            position: 0,
            line: 1,
            column: 1,
        }
    }

    /// Scan the entire input, returning instructions in order of appearance
    pub fn tokenize(&mut self) -> Vec<Instruction> {
        let mut instructions = Vec::new();

        while !self.is_at_end() {
            match self.match_instruction() {
                Some(instruction) => {
                    trace!("matched {}", instruction);
                    instructions.push(instruction);
                }
                None => {
                    self.advance();
                }
            }
        }

        debug!(
            "scanned {} characters, found {} instructions",
            self.input.len(),
            instructions.len()
        );

        instructions
    }

    /// Try to match an instruction at the current position.
    ///
    /// On success the matched characters are consumed. On failure nothing is
    /// consumed and the caller moves on by a single character.
    fn match_instruction(&mut self) -> Option<Instruction> {
        let start = self.current_location();

        let matched = if self.starts_with(MUL_PREFIX) {
            self.match_multiply()
        } else if self.starts_with(DONT_TOKEN) {
            Some((InstructionKind::Disable, DONT_TOKEN.len()))
        } else if self.starts_with(DO_TOKEN) {
            Some((InstructionKind::Enable, DO_TOKEN.len()))
        } else {
            None
        };

        let (kind, len) = matched?;

        for _ in 0..len {
            self.advance();
        }

        let location = SourceLocation::new(start.line, start.column, start.offset, len);
        Some(Instruction::new(kind, location))
    }

    /// Match the tail of `mul(X,Y)` after the prefix.
    ///
    /// Returns the instruction kind and the total match length in characters.
    fn match_multiply(&self) -> Option<(InstructionKind, usize)> {
        let left_start = MUL_PREFIX.len();
        let left_len = self.digit_run_at(left_start);
        if left_len == 0 {
            return None;
        }

        let mut cursor = left_start + left_len;
        if self.peek_ahead(cursor) != Some(',') {
            return None;
        }
        cursor += 1;

        let right_start = cursor;
        let right_len = self.digit_run_at(right_start);
        if right_len == 0 {
            return None;
        }

        cursor += right_len;
        if self.peek_ahead(cursor) != Some(')') {
            return None;
        }
        cursor += 1;

        let a = parse_decimal(self.slice_ahead(left_start, left_len));
        let b = parse_decimal(self.slice_ahead(right_start, right_len));

        Some((InstructionKind::Multiply(a, b), cursor))
    }

    /// Length of the run of decimal digits starting `n` characters ahead
    fn digit_run_at(&self, n: usize) -> usize {
        self.input
            .iter()
            .skip(self.position + n)
            .take_while(|&&ch| is_decimal_digit(ch))
            .count()
    }

    /// `len` characters starting `n` characters ahead
    fn slice_ahead(&self, n: usize, len: usize) -> &[char] {
        let start = self.position + n;
        &self.input[start..start + len]
    }

    /// Check whether the input at the current position begins with `literal`
    fn starts_with(&self, literal: &str) -> bool {
        literal
            .chars()
            .enumerate()
            .all(|(i, expected)| self.peek_ahead(i) == Some(expected))
    }

    /// Peek ahead n characters
    fn peek_ahead(&self, n: usize) -> Option<char> {
        self.input.get(self.position + n).copied()
    }

    /// Advance to next character
    fn advance(&mut self) -> Option<char> {
        if self.position >= self.input.len() {
            return None;
        }

        let ch = self.input[self.position];
        self.position += 1;

        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }

        Some(ch)
    }

    /// Check if at end of input
    fn is_at_end(&self) -> bool {
        self.position >= self.input.len()
    }

    /// Get current source location
    fn current_location(&self) -> SourceLocation {
        SourceLocation::new(self.line, self.column, self.position, 0)
    }
}
