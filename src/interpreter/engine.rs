// Evaluation engine for memory instructions

use crate::scanner::instruction::{Instruction, InstructionKind};
use crate::scanner::lexer::Lexer;
use log::debug;
use num_bigint::BigUint;
use std::fmt;

/// Whether multiplications are currently counted in conditional mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToggleState {
    #[default]
    Enabled,
    Disabled,
}

impl ToggleState {
    /// Next state after reading `kind`. Multiplies never change the state.
    pub fn transition(self, kind: &InstructionKind) -> Self {
        match kind {
            InstructionKind::Enable => ToggleState::Enabled,
            InstructionKind::Disable => ToggleState::Disabled,
            InstructionKind::Multiply(..) => self,
        }
    }

    pub fn is_enabled(self) -> bool {
        self == ToggleState::Enabled
    }
}

impl fmt::Display for ToggleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ToggleState::Enabled => write!(f, "ENABLED"),
            ToggleState::Disabled => write!(f, "DISABLED"),
        }
    }
}

/// Which multiplications count towards the sum
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanMode {
    /// Every multiply counts, toggles are ignored
    Unconditional,
    /// Only multiplies read while the toggle is enabled count
    Conditional,
}

impl fmt::Display for ScanMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScanMode::Unconditional => write!(f, "Unconditional"),
            ScanMode::Conditional => write!(f, "Conditional"),
        }
    }
}

/// What executing one instruction did to the evaluator
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Nothing executed yet
    Start,
    /// Product added to the accumulator
    Accumulated(BigUint),
    /// Product ignored because the toggle was disabled
    Skipped(BigUint),
    /// Toggle token read, state after the transition
    Toggled(ToggleState),
}

/// Evaluator for a single scan.
///
/// Toggle state and accumulator live here and nowhere else, so every scan
/// starts from `Enabled` and zero. The accumulator is unbounded.
#[derive(Debug, Clone)]
pub struct Evaluator {
    mode: ScanMode,
    toggle: ToggleState,
    accumulator: BigUint,
}

impl Evaluator {
    pub fn new(mode: ScanMode) -> Self {
        Evaluator {
            mode,
            toggle: ToggleState::default(),
            accumulator: BigUint::default(),
        }
    }

    /// Execute one instruction in the current state
    pub fn execute(&mut self, instruction: &Instruction) -> Effect {
        match &instruction.kind {
            InstructionKind::Multiply(a, b) => {
                let product = a * b;
                let counted = match self.mode {
                    ScanMode::Unconditional => true,
                    ScanMode::Conditional => self.toggle.is_enabled(),
                };

                if !counted {
                    return Effect::Skipped(product);
                }

                self.accumulator += &product;
                Effect::Accumulated(product)
            }
            kind => {
                self.toggle = self.toggle.transition(kind);
                Effect::Toggled(self.toggle)
            }
        }
    }

    /// Execute every instruction in order and return the final sum
    pub fn run(&mut self, instructions: &[Instruction]) -> BigUint {
        for instruction in instructions {
            self.execute(instruction);
        }

        debug!(
            "{} scan over {} instructions: {}",
            self.mode,
            instructions.len(),
            self.accumulator
        );

        self.accumulator.clone()
    }

    pub fn mode(&self) -> ScanMode {
        self.mode
    }

    pub fn toggle(&self) -> ToggleState {
        self.toggle
    }

    pub fn accumulator(&self) -> &BigUint {
        &self.accumulator
    }
}

/// Scan `text` and evaluate it in the given mode
pub fn evaluate(text: &str, mode: ScanMode) -> BigUint {
    let instructions = Lexer::new(text).tokenize();
    Evaluator::new(mode).run(&instructions)
}

/// Sum of every valid `mul(X,Y)` in `text`
pub fn extract_multiply_results_unconditional(text: &str) -> BigUint {
    evaluate(text, ScanMode::Unconditional)
}

/// Sum of the `mul(X,Y)` instructions in `text` read while enabled by the
/// most recent `do()`/`don't()` (enabled at the start)
pub fn extract_multiply_results_conditional(text: &str) -> BigUint {
    evaluate(text, ScanMode::Conditional)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scanner::instruction::SourceLocation;

    const PART_ONE: &str =
        "xmul(2,4)%&mul[3,7]!@^do_not_mul(5,5)+mul(32,64]then(mul(11,8)mul(8,5))";
    const PART_TWO: &str =
        "xmul(2,4)&mul[3,7]!^don't()_mul(5,5)+mul(32,64](mul(11,8)undo()?mul(8,5))";

    fn instr(kind: InstructionKind) -> Instruction {
        Instruction::new(kind, SourceLocation::start())
    }

    fn mul(a: u32, b: u32) -> InstructionKind {
        InstructionKind::Multiply(BigUint::from(a), BigUint::from(b))
    }

    fn big(n: u64) -> BigUint {
        BigUint::from(n)
    }

    fn decimal(digits: &str) -> BigUint {
        digits.parse().unwrap()
    }

    #[test]
    fn test_transitions() {
        use InstructionKind::*;
        use ToggleState::*;

        assert_eq!(Enabled.transition(&Disable), Disabled);
        assert_eq!(Disabled.transition(&Enable), Enabled);
        assert_eq!(Enabled.transition(&Enable), Enabled);
        assert_eq!(Disabled.transition(&Disable), Disabled);
        assert_eq!(Disabled.transition(&mul(1, 2)), Disabled);
        assert_eq!(Enabled.transition(&mul(1, 2)), Enabled);
    }

    #[test]
    fn test_effects() {
        let mut evaluator = Evaluator::new(ScanMode::Conditional);

        assert_eq!(
            evaluator.execute(&instr(mul(3, 4))),
            Effect::Accumulated(big(12))
        );
        assert_eq!(
            evaluator.execute(&instr(InstructionKind::Disable)),
            Effect::Toggled(ToggleState::Disabled)
        );
        assert_eq!(evaluator.execute(&instr(mul(5, 5))), Effect::Skipped(big(25)));
        assert_eq!(evaluator.toggle(), ToggleState::Disabled);
        assert_eq!(evaluator.accumulator(), &big(12));
    }

    #[test]
    fn test_unconditional_ignores_toggles() {
        let instructions = [instr(InstructionKind::Disable), instr(mul(2, 3))];

        assert_eq!(Evaluator::new(ScanMode::Unconditional).run(&instructions), big(6));
        assert_eq!(Evaluator::new(ScanMode::Conditional).run(&instructions), big(0));
    }

    #[test]
    fn test_part_one_sample() {
        assert_eq!(extract_multiply_results_unconditional(PART_ONE), big(161));
    }

    #[test]
    fn test_part_two_sample() {
        assert_eq!(extract_multiply_results_conditional(PART_TWO), big(48));
        assert_eq!(extract_multiply_results_unconditional(PART_TWO), big(161));
    }

    #[test]
    fn test_no_multiplies() {
        for text in ["", "do()don't()", "mul[1,2] mu(3,4) mul(5,6", "\n\n"] {
            assert_eq!(extract_multiply_results_unconditional(text), big(0));
            assert_eq!(extract_multiply_results_conditional(text), big(0));
        }
    }

    #[test]
    fn test_without_toggles_modes_agree() {
        assert_eq!(
            extract_multiply_results_conditional(PART_ONE),
            extract_multiply_results_unconditional(PART_ONE)
        );
    }

    #[test]
    fn test_toggle_persists_across_lines() {
        let text = "mul(1,1)don't()\nnoise\nmore noise mul(7,7)\n\nmul(2,2)\ndo()\nmul(3,3)";

        assert_eq!(extract_multiply_results_conditional(text), big(1 + 9));
        assert_eq!(
            extract_multiply_results_unconditional(text),
            big(1 + 49 + 4 + 9)
        );
    }

    #[test]
    fn test_idempotent() {
        let first = extract_multiply_results_conditional(PART_TWO);
        let second = extract_multiply_results_conditional(PART_TWO);
        assert_eq!(first, second);
    }

    #[test]
    fn test_rejects_non_digit_group() {
        assert_eq!(
            extract_multiply_results_unconditional("mul(1a,2)mul(2,3)"),
            big(6)
        );
    }

    #[test]
    fn test_operand_past_u64() {
        // 2^64 + 6
        assert_eq!(
            extract_multiply_results_unconditional("mul(18446744073709551616,1)mul(2,3)"),
            decimal("18446744073709551622")
        );
    }

    #[test]
    fn test_large_operands() {
        let text = format!("mul({},{})", u64::MAX, u64::MAX);
        let expected = big(u64::MAX) * big(u64::MAX);
        assert_eq!(extract_multiply_results_unconditional(&text), expected);
    }

    #[test]
    fn test_sum_past_u128() {
        let text = format!("mul({0},{0})mul({0},{0})", u64::MAX);
        assert_eq!(
            extract_multiply_results_unconditional(&text),
            decimal("680564733841876926852962238568698216450")
        );

        // The second product is read while disabled
        let guarded = format!("mul({0},{0})don't()mul({0},{0})", u64::MAX);
        assert_eq!(
            extract_multiply_results_conditional(&guarded),
            decimal("340282366920938463426481119284349108225")
        );
    }

    #[test]
    fn test_unicode_digit_operands() {
        assert_eq!(extract_multiply_results_unconditional("mul(٣,1)"), big(3));
        assert_eq!(
            extract_multiply_results_conditional("don't()mul(٣,1)do()mul(１２,５)"),
            big(60)
        );
    }
}
