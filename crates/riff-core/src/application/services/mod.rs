//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish the
//! `init`, `build`, `apply` and `create` commands.

pub mod create_pipeline;
pub mod scaffold_service;

pub use create_pipeline::{ApplyOutcome, BuildOutcome, CreateOutcome, CreatePipeline, InitOutcome};
pub use scaffold_service::{FileAction, ScaffoldReport, ScaffoldService, ScaffoldedFile};
