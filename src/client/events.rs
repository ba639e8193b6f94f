//! Event log client: append and list audit events

use chrono::{DateTime, Utc};
use reqwest::Method;
use tracing::{debug, info};

use super::error::ClientResult;
use super::transport::{Acknowledgement, RecordService};
use crate::types::Event;
use crate::utils::created_at_query;

/// Client for the Record Service event log
///
/// Appends are not idempotent: submitting the same event twice creates two
/// log entries.
#[derive(Debug, Clone)]
pub struct EventLog {
    service: RecordService,
}

impl EventLog {
    pub fn new(service: RecordService) -> Self {
        Self { service }
    }

    /// POST /event/add
    pub async fn submit_event(&self, event: &Event) -> ClientResult<Acknowledgement> {
        let ack = self
            .service
            .send_json("submit event", Method::POST, "/event/add", event)
            .await?;

        info!(event_id = event.id, action = %event.action, status = %ack, "Event recorded");
        Ok(ack)
    }

    /// GET /events?created_at={since}
    pub async fn events_since(&self, since: DateTime<Utc>) -> ClientResult<Vec<Event>> {
        let path = format!("/events?created_at={}", created_at_query(since));
        let events: Vec<Event> = self.service.get_json("list events", &path).await?;

        debug!(count = events.len(), "Listed events");
        Ok(events)
    }
}
