//! Event types for the audit log
//!
//! An event pairs a full snapshot of the user before a mutation with a full
//! snapshot after it. Either payload alone is enough to reconstruct state, so
//! restoring from an event never requires replaying other events.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::is_zero;
use super::user::User;

/// Action label for a mutation applied by the pipeline
pub const ACTION_USER_UPDATE: &str = "user_update";

/// Action label for an audited rollback
pub const ACTION_USER_ROLLBACK: &str = "user_rollback";

/// A point-in-time copy of a user
///
/// Captured by value: the snapshot owns its own backpack and never shares
/// state with the live user it was taken from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Snapshot(User);

impl Snapshot {
    /// Capture the current fields of a user
    pub fn capture(user: &User) -> Self {
        Self(user.clone())
    }

    /// Borrow the captured user
    pub fn user(&self) -> &User {
        &self.0
    }

    /// Turn the snapshot back into a user value
    pub fn into_user(self) -> User {
        self.0
    }
}

impl From<User> for Snapshot {
    fn from(user: User) -> Self {
        Self(user)
    }
}

/// An immutable audit record of one mutation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Sequence number within a pipeline run; the service may re-assign it
    #[serde(default, skip_serializing_if = "is_zero")]
    pub id: i64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    /// Actor performing the mutation (a service identity)
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub initiator: String,

    /// Actor the mutation is performed on behalf of
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub subject: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub action: String,

    /// State before the mutation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rollback: Option<Snapshot>,

    /// State after the mutation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub update: Option<Snapshot>,
}

/// Assemble an event from its parts, stamped with the current time
///
/// No validation happens here; the caller guarantees `before` was captured
/// before any change reflected in `after`.
pub fn build_event(
    sequence: i64,
    initiator: &str,
    subject: &str,
    action: &str,
    before: Snapshot,
    after: Snapshot,
) -> Event {
    Event {
        id: sequence,
        created_at: Some(Utc::now()),
        initiator: initiator.to_string(),
        subject: subject.to_string(),
        action: action.to_string(),
        rollback: Some(before),
        update: Some(after),
    }
}

impl Event {
    /// The user as it was before this event's mutation
    pub fn rollback_user(&self) -> Option<&User> {
        self.rollback.as_ref().map(Snapshot::user)
    }

    /// The user as it was after this event's mutation
    pub fn update_user(&self) -> Option<&User> {
        self.update.as_ref().map(Snapshot::user)
    }

    /// Serialize event to JSON string
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
