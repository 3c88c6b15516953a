//! Bill records.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::AccountWithUser;

/// A payment QR code issued by a shop.
///
/// A bill without `amount` lets the customer enter the amount, bounded by
/// `min_amount`/`max_amount` when present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bill {
    pub id: Uuid,

    #[serde(default)]
    pub amount: Option<f64>,
    #[serde(default)]
    pub max_amount: Option<f64>,
    #[serde(default)]
    pub min_amount: Option<f64>,

    pub description: String,
    pub account: AccountWithUser,
    pub is_disabled: bool,
    pub token: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::fixtures;
    use serde_json::json;

    #[test]
    fn open_amount_bill_keeps_bounds() {
        let body = json!({
            "id": "b7e3c1a2-9d8f-4e6a-b5c4-3d2e1f0a9b8c",
            "amount": null,
            "max_amount": 10000,
            "min_amount": 100,
            "description": "donation",
            "account": fixtures::account_with_user(fixtures::SHOP_ID, fixtures::shop_user()),
            "is_disabled": false,
            "token": "https://www.pokepay.jp/bills/b7e3c1a2",
            "created_at": "2026-10-18T09:00:00+09:00"
        });

        let bill: Bill = serde_json::from_value(body).unwrap();

        assert_eq!(bill.amount, None);
        assert_eq!(bill.max_amount, Some(10000.0));
        assert_eq!(bill.min_amount, Some(100.0));
        assert_eq!(bill.account.account.name, "main");
    }
}
