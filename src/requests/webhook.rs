//! Webhook endpoints.
//!
//! - POST /webhooks - Register a URL for a worker task
//! - DELETE /webhooks/{webhook_id} - Remove a registration

use uuid::Uuid;

use crate::models::OrganizationWorkerTaskWebhook;

endpoint! {
    /// Register a webhook for a worker task.
    ///
    /// `task` is the worker task name, e.g. `"bulk_shops"` or
    /// `"process_user_stats_operation"`.
    pub struct CreateWebhook => OrganizationWorkerTaskWebhook {
        name: "create_webhook",
        builder: CreateWebhookBuilder,
        method: Post,
        path: "/webhooks",
        path_params: {},
        required: {
            task: String,
            url: String,
        },
        optional: {},
    }
}

endpoint! {
    pub struct DeleteWebhook => OrganizationWorkerTaskWebhook {
        name: "delete_webhook",
        builder: DeleteWebhookBuilder,
        method: Delete,
        path: "/webhooks/{webhook_id}",
        path_params: { webhook_id: Uuid },
        required: {},
        optional: {},
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::requests::{Method, Request};
    use serde_json::json;

    #[test]
    fn create_webhook_requires_task_then_url() {
        let err = CreateWebhook::builder()
            .url("https://example.com/hooks")
            .build()
            .unwrap_err();
        assert!(matches!(err, Error::MissingField("task")));

        let err = CreateWebhook::builder().task("bulk_shops").build().unwrap_err();
        assert!(matches!(err, Error::MissingField("url")));
    }

    #[test]
    fn create_webhook_body() {
        let request = CreateWebhook::builder()
            .task("bulk_shops")
            .url("https://example.com/hooks")
            .build()
            .unwrap();

        assert_eq!(CreateWebhook::METHOD, Method::Post);
        assert_eq!(request.path(), "/webhooks");
        assert_eq!(
            json!(request.params().unwrap()),
            json!({ "task": "bulk_shops", "url": "https://example.com/hooks" })
        );
    }

    #[test]
    fn delete_webhook_path() {
        let webhook_id = Uuid::parse_str("550e8400-e29b-41d4-a716-446655440000").unwrap();
        let request = DeleteWebhook::builder().webhook_id(webhook_id).build().unwrap();

        assert_eq!(DeleteWebhook::METHOD, Method::Delete);
        assert_eq!(
            request.path(),
            "/webhooks/550e8400-e29b-41d4-a716-446655440000"
        );
        assert!(request.params().unwrap().is_empty());
    }
}
