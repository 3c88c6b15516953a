//! Point campaign records.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Pagination, PrivateMoney, Timestamp, User};

/// A rule that grants points when matching transactions happen.
///
/// Only the commonly used fields are modelled; the rule definitions
/// themselves are kept as their wire string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Campaign {
    pub id: Uuid,
    pub name: String,

    #[serde(default)]
    pub applicable_shops: Vec<User>,

    /// Exclusive campaigns stop lower-priority campaigns from applying
    pub is_exclusive: bool,

    pub starts_at: Timestamp,
    pub ends_at: Timestamp,

    #[serde(default)]
    pub point_expires_at: Option<Timestamp>,
    #[serde(default)]
    pub point_expires_in_days: Option<u32>,

    pub priority: i32,

    #[serde(default)]
    pub description: Option<String>,

    pub bear_point_shop: User,
    pub private_money: PrivateMoney,
    pub dest_private_money: PrivateMoney,

    #[serde(default)]
    pub max_total_point_amount: Option<f64>,

    /// `"topup"`, `"payment"`, `"external-transaction"`, ...
    pub event: String,

    pub point_calculation_rule: String,

    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub budget_caps_amount: Option<f64>,
    #[serde(default)]
    pub budget_current_amount: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaginatedCampaigns {
    pub rows: Vec<Campaign>,
    pub count: u64,
    pub pagination: Pagination,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::fixtures;
    use serde_json::json;

    #[test]
    fn campaign_decodes_and_defaults_missing_shop_list() {
        let body = json!({
            "id": "6e5d4c3b-2a19-4f08-9e7d-6c5b4a392817",
            "name": "autumn 5% back",
            "is_exclusive": true,
            "starts_at": "2026-10-01T00:00:00+09:00",
            "ends_at": "2026-10-31T23:59:59+09:00",
            "point_expires_at": null,
            "point_expires_in_days": 90,
            "priority": 10,
            "description": null,
            "bear_point_shop": fixtures::shop_user(),
            "private_money": fixtures::private_money(),
            "dest_private_money": fixtures::private_money(),
            "max_total_point_amount": 1000,
            "event": "payment",
            "point_calculation_rule": "[{\"point_amount\":5,\"point_amount_unit\":\"percent\"}]",
            "status": "enabled",
            "budget_caps_amount": null,
            "applicable_days_of_week": [0, 6]
        });

        let campaign: Campaign = serde_json::from_value(body).unwrap();

        assert!(campaign.applicable_shops.is_empty());
        assert_eq!(campaign.priority, 10);
        assert_eq!(campaign.max_total_point_amount, Some(1000.0));
        assert_eq!(campaign.budget_caps_amount, None);
        assert_eq!(campaign.budget_current_amount, None);
        assert!(campaign.ends_at > campaign.starts_at);
    }
}
