//! TUI pane rendering modules
//!
//! # Pane Modules
//!
//! - [`source`]: Memory blob with instruction highlighting and current match indicator
//! - [`tape`]: Every matched instruction in scan order, with its effect once executed
//! - [`state`]: Toggle state, both running sums and the last effect
//! - [`status`]: Status bar with keybindings and playback state
//!
//! Each pane module exports a primary `render_*` function; panes own no state
//! beyond the scroll values passed in by the app.

pub mod source;
pub mod state;
pub mod status;
pub mod tape;

pub use source::{index_by_line, render_source_pane, SourceScrollState};
pub use state::render_state_pane;
pub use status::render_status_bar;
pub use tape::render_tape_pane;
