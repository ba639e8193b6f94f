//! Rollback resolver
//!
//! A rollback is a read: the Record Service returns the user as captured in
//! the `rollback` payload of the target event. The log is only written when
//! rollback auditing is enabled.

use tracing::{info, warn};

use super::error::{ClientError, ClientResult};
use super::events::EventLog;
use super::transport::RecordService;
use crate::types::{Event, Snapshot, User, ACTION_USER_ROLLBACK};

/// Restores users to the state recorded by a prior event
#[derive(Debug, Clone)]
pub struct RollbackResolver {
    service: RecordService,
    events: EventLog,
}

impl RollbackResolver {
    pub fn new(service: RecordService) -> Self {
        let events = EventLog::new(service.clone());
        Self { service, events }
    }

    /// GET /patch/rollback/{event_id}/{user_id}
    ///
    /// Returns the user's state as of the target event. The caller's value is
    /// left untouched; see [`RollbackResolver::restore`] for in-place use.
    /// With auditing enabled, a failed audit append is returned as an error
    /// and the restored user is discarded.
    pub async fn rollback_to(&self, user: &User, event_id: i64) -> ClientResult<User> {
        const OPERATION: &str = "rollback read";

        let path = format!("/patch/rollback/{}/{}", event_id, user.id);
        let body = self.service.get_text(OPERATION, &path).await?;

        let mut restored: User = serde_json::from_str(&body).map_err(|e| {
            ClientError::protocol(OPERATION, format!("unparseable user snapshot: {}", e))
        })?;

        if restored.id == 0 {
            restored.id = user.id;
        } else if restored.id != user.id {
            return Err(ClientError::protocol(
                OPERATION,
                format!(
                    "event {} restored user {} instead of user {}",
                    event_id, restored.id, user.id
                ),
            ));
        }

        info!(user_id = user.id, event_id, "Rolled back user");

        if self.service.config().audit_rollbacks {
            self.record_rollback(user, &restored).await?;
        }

        Ok(restored)
    }

    /// Replace the caller's user wholesale with its state as of `event_id`
    ///
    /// On any error the caller's user is left unchanged. With rollback
    /// auditing enabled this includes a failed append of the audit event,
    /// even though the rollback read itself succeeded.
    pub async fn restore(&self, user: &mut User, event_id: i64) -> ClientResult<()> {
        *user = self.rollback_to(user, event_id).await?;
        Ok(())
    }

    async fn record_rollback(&self, current: &User, restored: &User) -> ClientResult<()> {
        let config = self.service.config();
        let event = Event {
            created_at: Some(chrono::Utc::now()),
            initiator: config.initiator.clone(),
            subject: config.subject.clone(),
            action: ACTION_USER_ROLLBACK.to_string(),
            rollback: Some(Snapshot::capture(current)),
            update: Some(Snapshot::capture(restored)),
            ..Default::default()
        };

        if let Err(e) = self.events.submit_event(&event).await {
            warn!(user_id = current.id, error = %e, "Failed to record rollback event");
            return Err(e);
        }
        Ok(())
    }
}
