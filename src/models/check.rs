//! Check records.
//!
//! A check is a reusable top-up code issued by an organization; customers
//! redeem it to receive money and/or points.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{PrivateMoney, Timestamp, User};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Check {
    pub id: Uuid,
    pub created_at: Timestamp,
    pub amount: f64,
    pub money_amount: f64,
    pub point_amount: f64,
    pub description: String,

    /// Issuer of the check
    pub user: User,

    /// One-time checks can be redeemed once in total, others once per customer
    pub is_onetime: bool,

    pub is_disabled: bool,
    pub expires_at: Timestamp,

    #[serde(default)]
    pub last_used_at: Option<Timestamp>,

    pub private_money: PrivateMoney,

    #[serde(default)]
    pub usage_limit: Option<u32>,

    pub usage_count: u32,

    #[serde(default)]
    pub point_expires_at: Option<Timestamp>,
    #[serde(default)]
    pub point_expires_in_days: Option<u32>,

    pub token: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::fixtures;
    use serde_json::json;

    #[test]
    fn check_decodes_with_nulls_and_unknown_keys() {
        let body = json!({
            "id": "2f1e0d9c-8b7a-4654-a321-0fedcba98765",
            "created_at": "2026-10-01T12:00:00.000000+09:00",
            "amount": 300,
            "money_amount": 0,
            "point_amount": 300,
            "description": "welcome points",
            "user": fixtures::shop_user(),
            "is_onetime": false,
            "is_disabled": false,
            "expires_at": "2027-10-01T00:00:00.000000+09:00",
            "last_used_at": null,
            "private_money": fixtures::private_money(),
            "usage_limit": null,
            "usage_count": 12,
            "point_expires_at": null,
            "point_expires_in_days": 30,
            "token": "https://www.pokepay.jp/checks/2f1e0d9c",
            "bear_point_account": null
        });

        let check: Check = serde_json::from_value(body).unwrap();

        assert_eq!(check.point_amount, 300.0);
        assert_eq!(check.usage_limit, None);
        assert_eq!(check.usage_count, 12);
        assert_eq!(check.point_expires_in_days, Some(30));
        assert!(check.user.is_merchant);
    }
}
