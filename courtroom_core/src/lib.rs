//! # Courtroom Core (The Docket)
//!
//! The branching-narrative engine behind the courtroom. This crate consumes
//! case content from `case_rules`, walks its dialogue graphs, resolves
//! evidence presentations and combinations, and runs the confidence economy
//! that gates success and failure endings.
//!
//! ## Core Components
//!
//! - **navigator**: validates and executes transitions through one dialogue
//!   tree at a time
//! - **inventory**: the evidence collection and combination recipe lookup
//! - **confidence**: the bounded resource every outcome feeds into
//! - **reaction**: severity-driven flavor text with injected randomness
//! - **session**: the caller-owned game state tying the pieces together,
//!   plus its snapshot persistence boundary
//!
//! ## Design Philosophy
//!
//! - **Synchronous**: the engine reacts to one player intent at a time and
//!   never blocks; pacing and animation live entirely outside it
//! - **Failure is gameplay**: blocked choices, wrong evidence, and dud
//!   combinations are ordinary outcomes with flavor text, not errors
//! - **Fail fast on content**: broken trees are rejected at load time, so
//!   traversal never discovers a dangling reference

pub mod confidence;
pub mod inventory;
pub mod navigator;
pub mod reaction;
pub mod session;

pub use confidence::*;
pub use inventory::*;
pub use navigator::*;
pub use reaction::*;
pub use session::*;
