use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::utils::mailer::ContactMessage;

/// Missing fields deserialize as empty so validation can report them.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub company: Option<String>,
    pub message: String,
}

impl ContactRequest {
    pub fn into_message(self, received_at: DateTime<Utc>) -> ContactMessage {
        let company = self
            .company
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty());
        ContactMessage {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            company,
            message: self.message.trim().to_string(),
            received_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ContactResponse {
    pub message: String,
}
