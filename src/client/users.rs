//! Entity repository client: read and replace users

use reqwest::Method;
use tracing::info;

use super::error::{ClientError, ClientResult};
use super::transport::{Acknowledgement, RecordService};
use crate::types::User;

/// Stateless fetch/replace operations for users
#[derive(Debug, Clone)]
pub struct UserRepository {
    service: RecordService,
}

impl UserRepository {
    pub fn new(service: RecordService) -> Self {
        Self { service }
    }

    /// GET /user/{id}
    pub async fn fetch_user(&self, id: i64) -> ClientResult<User> {
        let mut user: User = self
            .service
            .get_json("fetch user", &format!("/user/{}", id))
            .await?;

        // An omitted id decodes to zero; the identifier is the one requested
        if user.id == 0 {
            user.id = id;
        } else if user.id != id {
            return Err(ClientError::protocol(
                "fetch user",
                format!("requested user {} but received user {}", id, user.id),
            ));
        }

        Ok(user)
    }

    /// PUT /user/update/{id} with the full user
    pub async fn push_user(&self, user: &User) -> ClientResult<Acknowledgement> {
        let ack = self
            .service
            .send_json(
                "push user",
                Method::PUT,
                &format!("/user/update/{}", user.id),
                user,
            )
            .await?;

        info!(user_id = user.id, status = %ack, "Update user status");
        Ok(ack)
    }
}
