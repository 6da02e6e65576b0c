//! Service layer containing business logic and side-effect helpers.
//!
//! ## Service map
//! - `layout.rs` — installation-root resolution, derived paths, simulator
//!   binary lookup, classpath assembly.
//! - `process.rs` — external step invocation and exit-status triage.
//! - `storage.rs` — best-effort run history persistence.
//! - `output.rs` — JSON/text output helpers.
//!
//! ## Conventions
//! - Prefer pure helpers where possible.
//! - Side effects should be explicit and localized.
//! - Keep command handlers thin; delegate to services.

pub mod layout;
pub mod output;
pub mod process;
pub mod storage;
