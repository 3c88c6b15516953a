//! Organization webhook registrations.
//!
//! The platform posts a notification to `url` whenever a worker task of the
//! registered kind finishes (e.g. `"bulk_shops"` or
//! `"process_user_stats_operation"`).

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Webhook returned when registering or deleting a task webhook.
///
/// # Example
///
/// ```json
/// {
///   "id": "550e8400-e29b-41d4-a716-446655440000",
///   "organization_code": "pocketchange",
///   "task": "bulk_shops",
///   "url": "https://example.com/hooks/bulk-shops",
///   "content_type": "application/json",
///   "is_active": true
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrganizationWorkerTaskWebhook {
    pub id: Uuid,
    pub organization_code: String,
    pub task: String,
    pub url: String,
    pub content_type: String,
    pub is_active: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn webhook_decodes() {
        let body = json!({
            "id": "550e8400-e29b-41d4-a716-446655440000",
            "organization_code": "pocketchange",
            "task": "bulk_shops",
            "url": "https://example.com/hooks/bulk-shops",
            "content_type": "application/json",
            "is_active": true,
            "created_at": "2026-10-18T09:00:00+09:00"
        });

        let webhook: OrganizationWorkerTaskWebhook = serde_json::from_value(body).unwrap();

        assert_eq!(webhook.task, "bulk_shops");
        assert!(webhook.is_active);
    }
}
