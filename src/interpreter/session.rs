// Recorded scan with time-travel navigation

use crate::interpreter::engine::{Evaluator, ScanMode};
use crate::interpreter::errors::ScanError;
use crate::scanner::instruction::Instruction;
use crate::scanner::lexer::Lexer;
use crate::snapshot::{Snapshot, SnapshotManager};
use log::debug;

/// A fully evaluated scan whose history can be stepped through.
///
/// Both evaluators run in lockstep over the same instructions, and a snapshot
/// is recorded before the first instruction and after every instruction.
pub struct ScanSession {
    instructions: Vec<Instruction>,

    /// Snapshot manager for reverse stepping
    snapshot_manager: SnapshotManager,

    /// Current position in scan history
    history_position: usize,

    /// State restored from the snapshot at `history_position`
    current: Snapshot,
}

impl ScanSession {
    /// Scan and evaluate `source`, recording the whole history
    pub fn new(source: &str, snapshot_memory_limit: usize) -> Result<Self, ScanError> {
        let instructions = Lexer::new(source).tokenize();
        let mut snapshot_manager = SnapshotManager::new(snapshot_memory_limit);

        let mut all = Evaluator::new(ScanMode::Unconditional);
        let mut enabled = Evaluator::new(ScanMode::Conditional);

        snapshot_manager.push(Snapshot::initial())?;

        for (index, instruction) in instructions.iter().enumerate() {
            all.execute(instruction);
            let effect = enabled.execute(instruction);

            snapshot_manager.push(Snapshot {
                instruction_index: Some(index),
                location: instruction.location,
                toggle: enabled.toggle(),
                total_sum: all.accumulator().clone(),
                enabled_sum: enabled.accumulator().clone(),
                effect,
            })?;
        }

        debug!(
            "recorded {} snapshots ({} bytes)",
            snapshot_manager.len(),
            snapshot_manager.memory_usage()
        );

        Ok(ScanSession {
            instructions,
            snapshot_manager,
            history_position: 0,
            current: Snapshot::initial(),
        })
    }

    fn restore(&mut self, position: usize) -> Result<(), ScanError> {
        match self.snapshot_manager.get(position) {
            Some(snapshot) => {
                self.current = snapshot.clone();
                self.history_position = position;
                Ok(())
            }
            None => Err(ScanError::Generic {
                message: "Snapshot not found in history".to_string(),
                location: self.current.location,
            }),
        }
    }

    /// Step backward (restore previous snapshot)
    pub fn step_backward(&mut self) -> Result<(), ScanError> {
        if self.history_position == 0 {
            return Err(ScanError::Generic {
                message: "Already at the beginning of the scan".to_string(),
                location: self.current.location,
            });
        }

        self.restore(self.history_position - 1)
    }

    /// Step forward (restore next snapshot)
    pub fn step_forward(&mut self) -> Result<(), ScanError> {
        if self.history_position + 1 >= self.snapshot_manager.len() {
            return Err(ScanError::Generic {
                message: "No more snapshots available (scan finished)".to_string(),
                location: self.current.location,
            });
        }

        self.restore(self.history_position + 1)
    }

    /// Rewind to the beginning of scan history
    pub fn rewind_to_start(&mut self) -> Result<(), ScanError> {
        self.restore(0)
    }

    /// Jump to the final snapshot
    pub fn jump_to_end(&mut self) -> Result<(), ScanError> {
        self.restore(self.snapshot_manager.len().saturating_sub(1))
    }

    // ========== Getter methods for UI ==========

    /// Get the snapshot at the current position
    pub fn current(&self) -> &Snapshot {
        &self.current
    }

    /// Get the final snapshot, whose sums are the scan results
    pub fn final_snapshot(&self) -> &Snapshot {
        self.snapshot_manager.last().unwrap_or(&self.current)
    }

    /// Snapshot recorded right after instruction `index` ran
    pub fn snapshot_after(&self, index: usize) -> Option<&Snapshot> {
        self.snapshot_manager.get(index + 1)
    }

    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    /// Get the current history position
    pub fn history_position(&self) -> usize {
        self.history_position
    }

    /// Get the total number of snapshots
    pub fn total_snapshots(&self) -> usize {
        self.snapshot_manager.len()
    }

    pub fn is_at_end(&self) -> bool {
        self.history_position + 1 >= self.snapshot_manager.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::engine::{
        extract_multiply_results_conditional, extract_multiply_results_unconditional, Effect,
        ToggleState,
    };
    use num_bigint::BigUint;

    const SAMPLE: &str =
        "xmul(2,4)&mul[3,7]!^don't()_mul(5,5)+mul(32,64](mul(11,8)undo()?mul(8,5))";
    const LIMIT: usize = 1024 * 1024;

    #[test]
    fn test_history_shape() {
        let session = ScanSession::new(SAMPLE, LIMIT).unwrap();

        // mul(2,4) don't() mul(5,5) mul(11,8) do() mul(8,5)
        assert_eq!(session.instructions().len(), 6);
        assert_eq!(session.total_snapshots(), 7);
        assert_eq!(session.history_position(), 0);
        assert_eq!(session.current(), &Snapshot::initial());
    }

    #[test]
    fn test_final_snapshot_matches_scans() {
        let session = ScanSession::new(SAMPLE, LIMIT).unwrap();
        let last = session.final_snapshot();

        assert_eq!(last.total_sum, extract_multiply_results_unconditional(SAMPLE));
        assert_eq!(last.enabled_sum, extract_multiply_results_conditional(SAMPLE));
        assert_eq!(last.toggle, ToggleState::Enabled);
        assert_eq!(last.effect, Effect::Accumulated(BigUint::from(40u32)));
    }

    #[test]
    fn test_stepping() {
        let mut session = ScanSession::new(SAMPLE, LIMIT).unwrap();

        assert!(session.step_backward().is_err());

        session.step_forward().unwrap();
        session.step_forward().unwrap();
        assert_eq!(session.current().toggle, ToggleState::Disabled);
        assert_eq!(
            session.current().effect,
            Effect::Toggled(ToggleState::Disabled)
        );

        session.step_forward().unwrap();
        assert_eq!(
            session.current().effect,
            Effect::Skipped(BigUint::from(25u32))
        );
        assert_eq!(session.current().enabled_sum, BigUint::from(8u32));
        assert_eq!(session.current().total_sum, BigUint::from(33u32));

        session.jump_to_end().unwrap();
        let end = session.current().clone();
        assert!(session.is_at_end());
        assert!(session.step_forward().is_err());

        session.step_backward().unwrap();
        session.step_forward().unwrap();
        assert_eq!(session.current(), &end);

        session.rewind_to_start().unwrap();
        assert_eq!(session.history_position(), 0);
    }

    #[test]
    fn test_empty_blob() {
        let mut session = ScanSession::new("", LIMIT).unwrap();

        assert_eq!(session.total_snapshots(), 1);
        assert!(session.is_at_end());
        assert!(session.step_forward().is_err());
        session.jump_to_end().unwrap();
        assert_eq!(session.final_snapshot().total_sum, BigUint::default());
    }

    #[test]
    fn test_snapshot_limit() {
        let tight = Snapshot::initial().estimated_size() * 3;
        let result = ScanSession::new(SAMPLE, tight);

        assert!(matches!(
            result,
            Err(ScanError::SnapshotLimitExceeded { .. })
        ));
    }

    #[test]
    fn test_sums_past_u64() {
        let text = "mul(18446744073709551616,1)don't()mul(9,9)do()mul(2,3)";
        let session = ScanSession::new(text, LIMIT).unwrap();
        let last = session.final_snapshot();

        let expected: BigUint = "18446744073709551703".parse().unwrap();
        assert_eq!(last.total_sum, expected);
        assert_eq!(
            last.enabled_sum,
            "18446744073709551622".parse::<BigUint>().unwrap()
        );
    }
}
