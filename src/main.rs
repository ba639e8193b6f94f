//! Record Client - Binary Entry Point
//!
//! Runs the demonstration sequence against a Record Service:
//! fetch → audited edits → re-fetch → rollback → date echo → event listing.

use std::env;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use chrono::{Duration, Utc};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use record_client::{
    demo_edits, ClientConfig, DateEcho, EventLog, MutationPipeline, RecordService,
    RollbackResolver, UserRepository,
};

type MainResult<T> = Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// How far ahead of now the event listing starts
const EVENTS_LOOKAHEAD_HOURS: i64 = 72;

fn env_i64(key: &str, default: i64) -> i64 {
    env::var(key)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

#[tokio::main]
async fn main() -> MainResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let config = ClientConfig::from_env();
    let user_id = env_i64("RECORD_USER_ID", 1);
    let rollback_event_id = env_i64("RECORD_ROLLBACK_EVENT_ID", 4);
    info!(base_url = %config.base_url, user_id, "Starting record client");

    let cancel = Arc::new(AtomicBool::new(false));
    {
        let cancel = cancel.clone();
        ctrlc::set_handler(move || {
            cancel.store(true, Ordering::SeqCst);
        })?;
    }

    let service = RecordService::new(config)?;
    let users = UserRepository::new(service.clone());

    let mut user = users.fetch_user(user_id).await?;

    let pipeline = MutationPipeline::new(service.clone()).with_cancel_flag(cancel);
    if let Err(e) = pipeline.run(&mut user, &demo_edits()).await {
        if e.is_fatal() {
            warn!(completed = e.completed(), "Stopping on fatal precondition");
        }
        return Err(e.into());
    }

    let user = users.fetch_user(user_id).await?;
    println!("before rollback: {}", user);

    let user = RollbackResolver::new(service.clone())
        .rollback_to(&user, rollback_event_id)
        .await?;
    println!("after rollback: {}", user);

    let reply = DateEcho::new(service.clone())
        .parse_date(Utc::now().date_naive())
        .await?;
    println!("parse_date result: {}", reply);

    let since = Utc::now() + Duration::hours(EVENTS_LOOKAHEAD_HOURS);
    let events = EventLog::new(service).events_since(since).await?;
    println!("events after required date: {}", events.len());

    Ok(())
}
