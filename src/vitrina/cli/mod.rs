//! # CLI Behavior
//!
//! This is **one possible UI client** for vitrina, not the application itself.
//! The CLI is the only place that knows about terminal I/O, exit codes, and output
//! formatting.
//!
//! ## Naked Execution (`vitrina`)
//!
//! Running `vitrina` with no arguments defaults to `vitrina list`: the whole catalog in
//! the configured layout.
//!
//! ## One-shot vs. Interactive
//!
//! `list`, `categories`, `view` and `link` each render one answer and exit. `browse`
//! keeps a [`vitrina::state::ViewState`] alive and reads commands from stdin, so the
//! search text, category and layout carry over between screens and a product's detail
//! can be opened and closed.
//!
//! ## Output
//!
//! Colors follow terminal detection unless `--no-color` is given. `list --json` prints
//! the structured result instead of the rendered screen. Logs always go to stderr.

mod browse;
mod commands;
mod render;
mod setup;
mod styles;
mod templates;

pub use commands::run;
