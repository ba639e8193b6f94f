//! Record Service clients
//!
//! This module provides the HTTP-facing half of the mutation/rollback
//! protocol:
//! - `RecordService`: Shared transport (one pooled HTTP client)
//! - `UserRepository`: Fetch and replace users
//! - `EventLog`: Append and list audit events
//! - `RollbackResolver`: Read a user's state as of a prior event
//! - `DateEcho`: Date parsing echo endpoint
//!
//! # Endpoints
//!
//! ```text
//! GET  /user/{id}                          -> User
//! PUT  /user/update/{id}        User       -> status text
//! POST /event/add               Event      -> status text
//! GET  /patch/rollback/{event}/{user}      -> User
//! GET  /events?created_at={rfc3339}        -> [Event]
//! GET  /parse_date?created_at={date}       -> text
//! ```

mod config;
mod dates;
mod error;
mod events;
mod rollback;
mod transport;
mod users;

pub use config::{ClientConfig, DEFAULT_BASE_URL, DEFAULT_INITIATOR, DEFAULT_TIMEOUT_SECS};
pub use dates::DateEcho;
pub use error::{ClientError, ClientResult};
pub use events::EventLog;
pub use rollback::RollbackResolver;
pub use transport::{Acknowledgement, RecordService};
pub use users::UserRepository;
