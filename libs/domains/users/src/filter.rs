//! Filtering of loosely-shaped user records.

use serde_json::Value;

use crate::models::UserSummary;
use crate::validation::validate_email;

/// Keep enabled users with a well-formed email, reshaped to [`UserSummary`].
///
/// Records are raw store rows; any field may be absent. A record survives iff
/// its `enabled` field is truthy and its `email` field validates. Order is
/// preserved and nothing is deduplicated.
pub fn filter_active_users(records: &[Value]) -> Vec<UserSummary> {
    records
        .iter()
        .filter_map(|record| {
            let enabled = record.get("enabled").is_some_and(docstore::truthy);
            let email = record.get("email").and_then(Value::as_str).unwrap_or("");

            if !enabled || !validate_email(email) {
                return None;
            }

            let id = field(record, "name");
            let display_name = field(record, "full_name").or_else(|| id.clone());

            Some(UserSummary {
                id,
                email: email.to_string(),
                display_name,
            })
        })
        .collect()
}

/// Non-empty string field, or `None`.
fn field(record: &Value, key: &str) -> Option<String> {
    record
        .get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}
