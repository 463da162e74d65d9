//! Data models for the notifications domain.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Notification priority.
///
/// Unknown strings fail to parse; callers that accept user input coerce
/// failures to the default instead of erroring.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Priority::Low => write!(f, "low"),
            Priority::Medium => write!(f, "medium"),
            Priority::High => write!(f, "high"),
        }
    }
}

impl std::str::FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            _ => Err(format!("Unknown priority: {}", s)),
        }
    }
}

/// A notification record, persisted through the document store.
///
/// The store assigns the id on insert; it is not part of the record body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    /// User the notification is addressed to.
    pub recipient_id: String,
    pub subject: String,
    pub body: String,
    /// Record category, fixed to "Alert" for system notifications.
    pub notification_type: String,
    /// Doctype of the document the notification points back at.
    pub related_doctype: String,
    /// Id of the related document (the recipient's user record).
    pub related_id: String,
    pub priority: Priority,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    /// Build a system alert addressed to `recipient_id`.
    pub fn system_alert(
        recipient_id: impl Into<String>,
        subject: impl Into<String>,
        body: impl Into<String>,
        priority: Priority,
    ) -> Self {
        let recipient_id = recipient_id.into();
        Self {
            related_id: recipient_id.clone(),
            recipient_id,
            subject: subject.into(),
            body: body.into(),
            notification_type: "Alert".to_string(),
            related_doctype: "User".to_string(),
            priority,
            created_at: Utc::now(),
        }
    }
}
