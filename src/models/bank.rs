//! Bank accounts linked to a user device for direct-debit top-ups.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::PrivateMoney;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bank {
    pub id: Uuid,
    pub private_money: PrivateMoney,
    pub bank_name: String,
    pub bank_code: String,
    pub branch_number: String,
    pub branch_name: String,

    /// `"regular"` or `"current"`
    pub deposit_type: String,

    pub masked_account_number: String,
    pub account_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Banks {
    pub rows: Vec<Bank>,
    pub count: u64,
}

/// Where to send the user to finish registering a bank account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BankRegisteringInfo {
    pub redirect_url: String,

    #[serde(default)]
    pub paytree_customer_number: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::fixtures;
    use serde_json::json;

    #[test]
    fn bank_list_decodes() {
        let body = json!({
            "rows": [{
                "id": "1a2b3c4d-5e6f-4a7b-8c9d-0e1f2a3b4c5d",
                "private_money": fixtures::private_money(),
                "bank_name": "Pokepay Bank",
                "bank_code": "0001",
                "branch_number": "001",
                "branch_name": "Head Office",
                "deposit_type": "regular",
                "masked_account_number": "****567",
                "account_name": "ALICE",
                "registered_at": "2026-01-01T00:00:00+09:00"
            }],
            "count": 1
        });

        let banks: Banks = serde_json::from_value(body).unwrap();

        assert_eq!(banks.count, 1);
        assert_eq!(banks.rows[0].deposit_type, "regular");
        assert_eq!(banks.rows[0].private_money.unit, "pt");
    }

    #[test]
    fn registering_info_without_customer_number() {
        let body = json!({
            "redirect_url": "https://bank.example.jp/register?session=abc",
            "paytree_customer_number": null
        });

        let info: BankRegisteringInfo = serde_json::from_value(body).unwrap();

        assert_eq!(info.paytree_customer_number, None);
    }
}
