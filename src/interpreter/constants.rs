// Constants for the scan tools

/// Snapshot memory limit for a recorded scan (64 MB)
pub const SNAPSHOT_MEMORY_LIMIT: usize = 64 * 1024 * 1024;

/// Delay between steps while auto-playing in the trace viewer
pub const PLAY_INTERVAL_MS: u64 = 500;

/// Minimum delay between two space presses
pub const SPACE_DEBOUNCE_MS: u64 = 200;

/// Event poll timeout for the trace viewer loop
pub const EVENT_POLL_MS: u64 = 50;
