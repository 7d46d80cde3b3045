//! # Cinebot Runtime
//!
//! Drives a presentation console through one programming run: pick and
//! ingest content, rename its block, then lay the week's screenings onto
//! the schedule grid.

pub mod driver;
pub mod error;
pub mod report;
pub mod retry;
pub mod scripted;
pub mod workflow;

pub use driver::{EntryKind, PresentationDriver, ShowRequest};
pub use error::{DriverError, ExecutionError, WorkflowError};
pub use report::{RunReport, StepOutcome, StepStatus};
pub use retry::{is_retryable, RetryConfig};
pub use scripted::{DriverAction, DriverCall, ScriptedDriver};
pub use workflow::{RunOptions, Workflow};
