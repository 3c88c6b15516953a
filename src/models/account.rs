//! Account records.
//!
//! An account is one user's wallet in one private money. The API returns it in
//! several projections depending on the endpoint:
//! - `Account`: the account and its private money
//! - `AccountWithUser`: the same plus the owning user
//! - `AccountDetail`: the same plus balances
//! - `AccountWithoutPrivateMoneyDetail`: used inside transfers

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Pagination, PrivateMoney};

/// A user or shop as seen from another record.
///
/// Shops are users with `is_merchant` set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub is_merchant: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub id: Uuid,
    pub name: String,
    pub is_suspended: bool,

    /// `"active"`, `"suspended"`, `"pre-closed"` or `"closed"`
    pub status: String,

    pub private_money: PrivateMoney,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountWithUser {
    #[serde(flatten)]
    pub account: Account,

    pub user: User,
}

/// Account with balances, returned by account lookups and updates.
///
/// # Balances
///
/// `balance` is always `money_balance + point_balance`. `point_debt` appears
/// only when points were clawed back after being spent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountDetail {
    #[serde(flatten)]
    pub account: Account,

    pub balance: f64,
    pub money_balance: f64,
    pub point_balance: f64,

    #[serde(default)]
    pub point_debt: Option<f64>,

    pub user: User,

    #[serde(default)]
    pub external_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountWithoutPrivateMoneyDetail {
    pub id: Uuid,
    pub name: String,
    pub is_suspended: bool,
    pub status: String,
    pub private_money_id: Uuid,
    pub user: User,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaginatedAccountWithUsers {
    pub rows: Vec<AccountWithUser>,
    pub count: u64,
    pub pagination: Pagination,
}

/// Totals for one transfer type over the requested period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountTransferSummaryElement {
    /// e.g. `"topup"`, `"payment"`, `"exchange-outflow"`
    pub transfer_type: String,
    pub money_amount: f64,
    pub point_amount: f64,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountTransferSummary {
    pub summaries: Vec<AccountTransferSummaryElement>,
}
