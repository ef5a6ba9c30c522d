//! # Artistly CLI
//!
//! The `artistly` binary is a terminal front-end over the `artistly` engine.
//! This file only invokes `cli::run()` and handles process termination; the
//! CLI itself lives in `src/cli/`.
//!
//! ## Layering
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (crates/artistly-cli/src/cli/)                   │
//! │  - clap argument parsing (setup.rs)                         │
//! │  - Session wiring + dispatch (mod.rs, handlers.rs)          │
//! │  - Terminal rendering via minijinja templates (render.rs)   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Engine (crates/artistly/)                                  │
//! │  - Session, views, criteria mutators                        │
//! │  - Pure filter/sort pipeline                                │
//! │  - No knowledge of stdout/stderr or process exits           │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Everything in the engine is UI agnostic. The CLI is responsible for all
//! user-facing concerns: argument parsing, logging setup, configuration
//! layering, error reporting and rendering.
//!
//! ## Rendering
//!
//! Text output goes through minijinja templates in `src/cli/templates/`,
//! embedded at compile time via `include_str!()`. `--output json` bypasses
//! the templates and prints the same data as JSON.
//!
//! ## Persistence
//!
//! Records live in memory for the duration of one invocation. Dashboard
//! writes (`--submit`, `--approve`, `--reject`) are visible in that
//! invocation's output only.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
