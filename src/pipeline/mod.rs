//! Mutation pipeline
//!
//! Applies edit steps to a live user one at a time. Every step is recorded as
//! an event carrying full before/after snapshots, then the whole user is
//! pushed to the Record Service.
//!
//! # Step protocol
//!
//! ```text
//! ┌──────────────┐   ┌──────────┐   ┌───────┐   ┌─────────┐   ┌───────────┐   ┌───────────┐
//! │ precondition │──►│ before = │──►│ apply │──►│ after = │──►│ POST      │──►│ PUT       │
//! │ (no-op name) │   │ snapshot │   │ edits │   │ snapshot│   │ /event/add│   │ /user/... │
//! └──────────────┘   └──────────┘   └───────┘   └─────────┘   └───────────┘   └───────────┘
//! ```
//!
//! A failure stops the run. Steps that already completed stay committed on the
//! service; undoing them is an explicit rollback.

pub mod steps;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tracing::{info, warn};

use crate::client::{Acknowledgement, ClientError, EventLog, RecordService, UserRepository};
use crate::types::{build_event, Event, Snapshot, User};

pub use steps::{demo_edits, EditStep, FieldEdit, DEMO_NAMES};

/// Outcome of one completed step
#[derive(Debug, Clone)]
pub struct StepRecord {
    /// The event submitted for this step
    pub event: Event,
    /// Service reply to the event append
    pub event_ack: Acknowledgement,
    /// Service reply to the user replacement
    pub user_ack: Acknowledgement,
}

/// Completed steps of a pipeline run, in order
#[derive(Debug, Clone, Default)]
pub struct PipelineReport {
    pub steps: Vec<StepRecord>,
}

impl PipelineReport {
    /// Number of completed steps
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Submitted events in step order
    pub fn events(&self) -> impl Iterator<Item = &Event> {
        self.steps.iter().map(|s| &s.event)
    }
}

/// A pipeline run that stopped early
#[derive(Debug, thiserror::Error)]
#[error("pipeline aborted at step {step}: {source}")]
pub struct PipelineError {
    /// 1-based number of the step that failed
    pub step: usize,
    /// Steps completed before the failure
    pub report: PipelineReport,
    #[source]
    pub source: ClientError,
}

impl PipelineError {
    /// Precondition violations are fatal; everything else is recoverable
    pub fn is_fatal(&self) -> bool {
        self.source.is_fatal()
    }

    /// Number of steps committed before the failure
    pub fn completed(&self) -> usize {
        self.report.len()
    }
}

/// Applies edit steps to a user, recording one event per step
pub struct MutationPipeline {
    events: EventLog,
    users: UserRepository,
    initiator: String,
    subject: String,
    action: String,
    cancel: Option<Arc<AtomicBool>>,
}

impl MutationPipeline {
    /// Create a pipeline using the actor labels from the service config
    pub fn new(service: RecordService) -> Self {
        let config = service.config();
        Self {
            initiator: config.initiator.clone(),
            subject: config.subject.clone(),
            action: config.action.clone(),
            events: EventLog::new(service.clone()),
            users: UserRepository::new(service),
            cancel: None,
        }
    }

    /// Stop before the next step once `flag` is set
    pub fn with_cancel_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancel = Some(flag);
        self
    }

    fn is_cancelled(&self) -> bool {
        self.cancel
            .as_ref()
            .map(|flag| flag.load(Ordering::SeqCst))
            .unwrap_or(false)
    }

    /// Run every step against `user`, strictly in order
    ///
    /// `user` is mutated in place and always reflects the last fully
    /// completed step, including when the run stops early.
    pub async fn run(
        &self,
        user: &mut User,
        steps: &[EditStep],
    ) -> Result<PipelineReport, PipelineError> {
        let mut report = PipelineReport::default();

        for (idx, step) in steps.iter().enumerate() {
            let sequence = idx + 1;

            if self.is_cancelled() {
                warn!(user_id = user.id, step = sequence, "Pipeline cancelled");
                return Err(PipelineError {
                    step: sequence,
                    source: ClientError::Cancelled {
                        completed: report.len(),
                    },
                    report,
                });
            }

            if let Some(name) = step.target_name() {
                if name == user.name {
                    warn!(user_id = user.id, step = sequence, name, "Refusing no-op rename");
                    return Err(PipelineError {
                        step: sequence,
                        source: ClientError::Precondition {
                            name: name.to_string(),
                        },
                        report,
                    });
                }
            }

            match self.run_step(user, step, sequence as i64).await {
                Ok(record) => report.steps.push(record),
                Err(source) => {
                    warn!(user_id = user.id, step = sequence, error = %source, "Pipeline step failed");
                    return Err(PipelineError {
                        step: sequence,
                        report,
                        source,
                    });
                }
            }
        }

        info!(user_id = user.id, steps = report.len(), "Pipeline finished");
        Ok(report)
    }

    async fn run_step(
        &self,
        user: &mut User,
        step: &EditStep,
        sequence: i64,
    ) -> Result<StepRecord, ClientError> {
        let before = Snapshot::capture(user);
        let mut next = user.clone();
        step.apply(&mut next);
        let after = Snapshot::capture(&next);

        let event = build_event(
            sequence,
            &self.initiator,
            &self.subject,
            &self.action,
            before,
            after,
        );

        let event_ack = self.events.submit_event(&event).await?;
        let user_ack = self.users.push_user(&next).await?;
        *user = next;

        Ok(StepRecord {
            event,
            event_ack,
            user_ack,
        })
    }
}
