//! Transaction records.
//!
//! This module defines:
//! - `Transaction` / `TransactionDetail`: platform transactions, the detail
//!   form carrying its individual transfers
//! - `ExternalTransaction` / `ExternalTransactionDetail`: payments settled
//!   outside the platform and recorded for point campaigns
//! - `Product`: line item attached to payments (also a request parameter)
//! - `BulkTransaction` / `BulkTransactionJob`: CSV-driven batch transfers

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Account, AccountWithoutPrivateMoneyDetail, Pagination, Timestamp, User};

/// A transaction between two accounts.
///
/// # Amounts
///
/// `amount` is always `money_amount + point_amount`. Amounts are plain
/// numbers in the private money's unit, not minor units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: Uuid,

    /// `"topup"`, `"payment"`, `"exchange"`, `"transfer"`, `"cashback"`, ...
    #[serde(rename = "type")]
    pub transaction_type: String,

    /// Set once the transaction has been partially or fully refunded
    pub is_modified: bool,

    pub sender: User,
    pub sender_account: Account,
    pub receiver: User,
    pub receiver_account: Account,
    pub amount: f64,
    pub money_amount: f64,
    pub point_amount: f64,
    pub done_at: Timestamp,

    #[serde(default)]
    pub description: Option<String>,
}

/// One leg of a transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transfer {
    pub id: Uuid,

    /// Absent for legs that mint or burn value
    #[serde(default)]
    pub sender_account: Option<AccountWithoutPrivateMoneyDetail>,
    #[serde(default)]
    pub receiver_account: Option<AccountWithoutPrivateMoneyDetail>,

    pub amount: f64,
    pub money_amount: f64,
    pub point_amount: f64,
    pub done_at: Timestamp,

    #[serde(rename = "type")]
    pub transfer_type: String,

    #[serde(default)]
    pub description: Option<String>,

    pub transaction_id: Uuid,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionDetail {
    #[serde(flatten)]
    pub transaction: Transaction,

    pub transfers: Vec<Transfer>,
}

/// Cursor-paginated transaction listing (`/transactions-v2`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaginatedTransactionV2 {
    pub rows: Vec<Transaction>,
    pub per_page: u32,
    pub count: u64,

    #[serde(default)]
    pub next_page_cursor_id: Option<Uuid>,
    #[serde(default)]
    pub prev_page_cursor_id: Option<Uuid>,
}

/// Purchased item attached to a payment.
///
/// # JSON Example
///
/// ```json
/// {
///   "jan_code": "4901234567894",
///   "name": "Green tea 500ml",
///   "unit_price": 150,
///   "price": 300,
///   "quantity": 2,
///   "is_discounted": false,
///   "other": "{}"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub jan_code: String,
    pub name: String,
    pub unit_price: f64,

    /// Line total after any discount
    pub price: f64,

    pub quantity: f64,
    pub is_discounted: bool,

    /// Free-form JSON string passed through to campaigns
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub other: Option<String>,
}

impl Product {
    /// A non-discounted line whose price is `unit_price * quantity`.
    pub fn new(
        jan_code: impl Into<String>,
        name: impl Into<String>,
        unit_price: f64,
        quantity: f64,
    ) -> Self {
        Self {
            jan_code: jan_code.into(),
            name: name.into(),
            unit_price,
            price: unit_price * quantity,
            quantity,
            is_discounted: false,
            other: None,
        }
    }

    /// Mark the line as discounted to the given total.
    pub fn discounted(mut self, price: f64) -> Self {
        self.price = price;
        self.is_discounted = true;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExternalTransaction {
    pub id: Uuid,
    pub is_modified: bool,
    pub sender: User,
    pub sender_account: Account,
    pub receiver: User,
    pub receiver_account: Account,
    pub amount: f64,
    pub done_at: Timestamp,

    #[serde(default)]
    pub description: Option<String>,
}

/// External transaction plus the point transaction it triggered, if any.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExternalTransactionDetail {
    #[serde(flatten)]
    pub external_transaction: ExternalTransaction,

    #[serde(default)]
    pub transaction: Option<TransactionDetail>,
}

/// A batch of transfers submitted as one CSV upload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BulkTransaction {
    pub id: Uuid,
    pub request_id: Uuid,
    pub name: String,
    pub description: String,

    /// `"pending"`, `"processing"`, `"done"` or `"error"`
    pub status: String,

    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub error_lineno: Option<u64>,

    pub submitted_at: Timestamp,
    pub updated_at: Timestamp,
}

/// One CSV line of a bulk transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BulkTransactionJob {
    pub id: u64,
    pub bulk_transaction: BulkTransaction,

    #[serde(rename = "type")]
    pub job_type: String,

    #[serde(default)]
    pub sender_account_id: Option<Uuid>,
    #[serde(default)]
    pub receiver_account_id: Option<Uuid>,

    pub money_amount: f64,
    pub point_amount: f64,

    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub bear_point_account_id: Option<Uuid>,
    #[serde(default)]
    pub point_expires_at: Option<Timestamp>,

    pub status: String,

    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub lineno: Option<u64>,
    #[serde(default)]
    pub transaction_id: Option<Uuid>,

    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaginatedBulkTransactionJob {
    pub rows: Vec<BulkTransactionJob>,
    pub count: u64,
    pub pagination: Pagination,
}
