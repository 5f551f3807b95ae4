//! # Jotpad Architecture
//!
//! Jotpad is a **UI-agnostic notepad library** with an interactive CLI
//! client. The library holds every rule of the notepad; the binary only
//! reads lines, feeds them in, and prints what comes back.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, args.rs, wired by main.rs)                │
//! │  - Prompts, line reading, colored output, exit codes        │
//! │  - The ONLY place that knows about stdin/stdout             │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Session: notepad state + termination flag                │
//! │  - Resolves keywords, dispatches, returns Result<CmdResult> │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure business logic per command                          │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Model Layer (model.rs, position.rs)                        │
//! │  - Notepad: bounded, ordered, in-memory note sequence       │
//! │  - Note: validated non-empty text                           │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes regular Rust arguments, returns regular
//! Rust types (`Result<CmdResult>`), never writes to stdout/stderr, and never
//! calls `std::process::exit`. Errors are values: the REPL prints them as
//! `[Error]` lines and keeps the session alive. The same core could sit
//! behind any other front end.
//!
//! ## Testing Strategy
//!
//! 1. **Commands** (`commands/*.rs`): thorough unit tests of the business
//!    logic — the lion's share of testing.
//! 2. **API** (`api.rs`): dispatch tests over a real session.
//! 3. **CLI**: integration tests drive the compiled binary over stdin
//!    (`tests/repl_integration.rs`) and assert on the exact output lines.
//!
//! ## Module Overview
//!
//! - [`api`]: the session facade — entry point for all operations
//! - [`commands`]: business logic for each command
//! - [`command`]: the keyword registry
//! - [`input`]: input line tokenization and capacity parsing
//! - [`model`]: core data types (`Notepad`, `Note`)
//! - [`position`]: the 1-based position type
//! - [`error`]: error types
//! - `cli`, `args`: prompts, REPL loop, argument parsing for the binary
//!   (not part of the lib API)

pub mod api;
pub mod command;
pub mod commands;
pub mod error;
pub mod input;
pub mod model;
pub mod position;
