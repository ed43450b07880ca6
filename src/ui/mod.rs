//! Terminal trace viewer built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into three layers:
//!
//! - **[`app`]** — application state, keyboard event loop, pane focus, auto-play
//! - **[`panes`]** — render functions for each visible pane (memory, state,
//!   instruction tape, status bar)
//! - **[`theme`]** — centralized color palette used by all panes
//!
//! The entry point for consumers is [`App`]: construct it with a [`ScanSession`] and
//! call [`App::run`] to start the event loop.
//!
//! [`ScanSession`]: crate::interpreter::session::ScanSession
//! [`App::run`]: app::App::run

pub mod app;
pub mod panes;
pub mod theme;

pub use app::App;
