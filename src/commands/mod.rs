//! Command handler layer.
//!
//! This module owns CLI-oriented orchestration and output wiring.
//!
//! ## Files
//! - `runtime.rs` — run/compile/paths handlers.
//! - `check.rs` — installation and tooling precondition report.
//!
//! ## Principles
//! - Parse/match CLI inputs here.
//! - Delegate business logic to `services/*`.
//! - Keep behavior and output schema stable.

pub mod check;
pub mod runtime;

pub use check::handle_check;
pub use runtime::{handle_compile, handle_paths, handle_run};
