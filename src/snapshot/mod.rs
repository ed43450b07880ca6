// Snapshot management for stepping through a scan

use crate::interpreter::engine::{Effect, ToggleState};
use crate::interpreter::errors::ScanError;
use crate::scanner::instruction::SourceLocation;
use num_bigint::BigUint;

/// Evaluator state after a number of instructions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    /// Index of the instruction just executed, `None` before the first one
    pub instruction_index: Option<usize>,
    pub location: SourceLocation,
    /// Toggle state of the conditional evaluator
    pub toggle: ToggleState,
    /// Sum of every multiply so far
    pub total_sum: BigUint,
    /// Sum of the multiplies read while enabled
    pub enabled_sum: BigUint,
    /// What the conditional evaluator did with the last instruction
    pub effect: Effect,
}

impl Snapshot {
    /// Snapshot taken before any instruction runs
    pub fn initial() -> Self {
        Snapshot {
            instruction_index: None,
            location: SourceLocation::start(),
            toggle: ToggleState::default(),
            total_sum: BigUint::default(),
            enabled_sum: BigUint::default(),
            effect: Effect::Start,
        }
    }

    /// Estimate the memory usage of this snapshot in bytes
    pub fn estimated_size(&self) -> usize {
        let product = match &self.effect {
            Effect::Accumulated(n) | Effect::Skipped(n) => heap_size(n),
            Effect::Start | Effect::Toggled(_) => 0,
        };

        std::mem::size_of::<Snapshot>()
            + heap_size(&self.total_sum)
            + heap_size(&self.enabled_sum)
            + product
    }
}

/// Bytes of digit storage behind a big integer
fn heap_size(n: &BigUint) -> usize {
    n.to_u64_digits().len() * std::mem::size_of::<u64>()
}

/// Manages scan history for stepping backward and forward
#[derive(Debug)]
pub struct SnapshotManager {
    snapshots: Vec<Snapshot>,
    max_memory: usize,
    current_memory: usize,
}

impl SnapshotManager {
    pub fn new(max_memory: usize) -> Self {
        SnapshotManager {
            snapshots: Vec::new(),
            max_memory,
            current_memory: 0,
        }
    }

    /// Add a snapshot to history
    pub fn push(&mut self, snapshot: Snapshot) -> Result<(), ScanError> {
        let snapshot_size = snapshot.estimated_size();

        if self.current_memory + snapshot_size > self.max_memory {
            return Err(ScanError::SnapshotLimitExceeded {
                current: self.current_memory,
                limit: self.max_memory,
            });
        }

        self.current_memory += snapshot_size;
        self.snapshots.push(snapshot);
        Ok(())
    }

    /// Get a snapshot by index
    pub fn get(&self, index: usize) -> Option<&Snapshot> {
        self.snapshots.get(index)
    }

    /// Most recent snapshot
    pub fn last(&self) -> Option<&Snapshot> {
        self.snapshots.last()
    }

    /// Get the number of snapshots
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Get current memory usage
    pub fn memory_usage(&self) -> usize {
        self.current_memory
    }

    /// Get max memory limit
    pub fn memory_limit(&self) -> usize {
        self.max_memory
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_tracks_memory() {
        let mut manager = SnapshotManager::new(1024);
        assert!(manager.is_empty());

        manager.push(Snapshot::initial()).unwrap();

        assert_eq!(manager.len(), 1);
        assert_eq!(manager.memory_usage(), Snapshot::initial().estimated_size());
        assert_eq!(manager.get(0), Some(&Snapshot::initial()));
    }

    #[test]
    fn test_limit_exceeded() {
        let size = Snapshot::initial().estimated_size();
        let mut manager = SnapshotManager::new(size * 2);

        manager.push(Snapshot::initial()).unwrap();
        manager.push(Snapshot::initial()).unwrap();
        let err = manager.push(Snapshot::initial()).unwrap_err();

        assert_eq!(
            err,
            ScanError::SnapshotLimitExceeded {
                current: size * 2,
                limit: size * 2
            }
        );
        assert_eq!(manager.len(), 2);
        assert_eq!(manager.memory_limit(), size * 2);
    }

    #[test]
    fn test_big_sums_count_towards_size() {
        let small = Snapshot::initial();
        let big = Snapshot {
            total_sum: BigUint::from(u64::MAX) * BigUint::from(u64::MAX),
            effect: Effect::Accumulated(BigUint::from(u64::MAX)),
            ..Snapshot::initial()
        };

        assert_eq!(
            big.estimated_size(),
            small.estimated_size() + 3 * std::mem::size_of::<u64>()
        );
    }
}
