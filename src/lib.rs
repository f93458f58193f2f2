//! # Sup - Status Update Composer
//!
//! A terminal tool for composing short, consistently formatted START / PAUSE /
//! STOP status updates for posting into chat or ticket systems.
//!
//! ## Key Features
//!
//! - **Live Composer Page**: Form on the left, fenced-block preview on the
//!   right, one key to copy the result to the system clipboard.
//! - **Paste Recovery**: Paste a previously posted block and the recognisable
//!   fields (project, task, name, role, header time) flow back into the form.
//! - **Stopwatch**: A four-state elapsed-time timer whose result pre-fills the
//!   time-taken fields of a STOP update.
//! - **Scriptable CLI**: `format` and `parse` subcommands for one-shot use in
//!   pipelines, with JSON output for the parser.
//! - **Persistent Defaults**: Name, role, project, and the show-time option
//!   live in a small JSON config file.
//!
//! ## Quick Start
//!
//! ```bash
//! # Open the composer page
//! sup ui
//!
//! # One-shot: format a START block
//! sup format --kind start --project "Urban Space" --task "Size guide popup" \
//!     --estimated-hours 2 --estimated-minutes 30 --copy
//!
//! # Recover fields from a posted block
//! sup parse --json < pasted.txt
//!
//! # Remember who you are
//! sup config set --name Akash --role dev
//! ```
//!
//! The formatter, parser, and timer are pure and live in [`format`],
//! [`parse`], and [`timer`]; everything terminal- or clipboard-shaped sits
//! behind them.

pub mod cli;
pub mod clipboard;
pub mod clock;
pub mod cmd;
pub mod config;
pub mod fields;
pub mod format;
pub mod parse;
pub mod status;
pub mod timer;
pub mod tui {
    pub mod app;
    pub mod colors;
    pub mod enums;
    pub mod form;
    pub mod input;
    pub mod run;
}
