//! Private money endpoints.
//!
//! - GET /private-moneys/{private_money_id}/organization-summaries - Topup and
//!   payment totals per participating organization

use uuid::Uuid;

use crate::models::{PaginatedPrivateMoneyOrganizationSummaries, Timestamp};

endpoint! {
    pub struct GetPrivateMoneyOrganizationSummaries => PaginatedPrivateMoneyOrganizationSummaries {
        name: "get_private_money_organization_summaries",
        builder: GetPrivateMoneyOrganizationSummariesBuilder,
        method: Get,
        path: "/private-moneys/{private_money_id}/organization-summaries",
        path_params: { private_money_id: Uuid },
        required: {},
        optional: {
            from: Timestamp,
            to: Timestamp,
            page: u32,
            per_page: u32,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::requests::Request;
    use chrono::DateTime;
    use serde_json::json;

    #[test]
    fn summaries_path_and_window() {
        let from = DateTime::parse_from_rfc3339("2026-09-01T00:00:00+09:00").unwrap();
        let request = GetPrivateMoneyOrganizationSummaries::builder()
            .private_money_id(Uuid::parse_str("4b138a4c-8944-4f98-a5c4-96d3c1c415eb").unwrap())
            .from(from)
            .build()
            .unwrap();

        assert_eq!(
            request.path(),
            "/private-moneys/4b138a4c-8944-4f98-a5c4-96d3c1c415eb/organization-summaries"
        );
        assert_eq!(
            json!(request.params().unwrap()),
            json!({ "from": "2026-09-01T00:00:00+09:00" })
        );
    }
}
