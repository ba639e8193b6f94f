//! Date parsing echo endpoint

use chrono::NaiveDate;
use tracing::debug;

use super::error::ClientResult;
use super::transport::RecordService;
use crate::utils::calendar_date;

/// Client for `GET /parse_date`
#[derive(Debug, Clone)]
pub struct DateEcho {
    service: RecordService,
}

impl DateEcho {
    pub fn new(service: RecordService) -> Self {
        Self { service }
    }

    /// Ask the service to parse a calendar date and return its text reply
    pub async fn parse_date(&self, date: NaiveDate) -> ClientResult<String> {
        let rendered = calendar_date(date);
        debug!(date = %rendered, "Sending date");

        let path = format!("/parse_date?created_at={}", urlencoding::encode(&rendered));
        self.service.get_text("parse date", &path).await
    }
}
