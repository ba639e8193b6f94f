//! Record Client
//!
//! A client for an event-sourced user record service: fetch a user, apply a
//! sequence of audited field mutations, and roll the user back to the state
//! captured by a prior event.
//!
//! # Features
//!
//! - **Full snapshots**: Every event carries the complete user before and after
//!   its mutation, so any single event is enough to restore state
//! - **Ordered pipeline**: One event per edit step, submitted before the user
//!   replacement is pushed
//! - **Rollback**: Read a user's state as of any event, optionally audited
//! - **Shared transport**: One pooled HTTP client with a bounded timeout
//!
//! # Modules
//!
//! - `types`: User, Snapshot and Event structures
//! - `client`: Record Service transport, repository, event log and rollback clients
//! - `pipeline`: Edit steps and the mutation pipeline
//! - `utils`: Timestamp and query-string helpers
//!
//! # Example
//!
//! ```no_run
//! use record_client::{demo_edits, ClientConfig, MutationPipeline, RecordService, UserRepository};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
//! let service = RecordService::new(ClientConfig::from_env())?;
//! let mut user = UserRepository::new(service.clone()).fetch_user(1).await?;
//! let report = MutationPipeline::new(service).run(&mut user, &demo_edits()).await?;
//! println!("{} events recorded", report.len());
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod pipeline;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use client::{
    Acknowledgement, ClientConfig, ClientError, ClientResult, DateEcho, EventLog, RecordService,
    RollbackResolver, UserRepository,
};
pub use pipeline::{
    demo_edits, EditStep, FieldEdit, MutationPipeline, PipelineError, PipelineReport, StepRecord,
};
pub use types::{build_event, Backpack, Event, Snapshot, User};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
