//! Resource records returned by the partner API.
//!
//! Every record here is the decoded body of one endpoint's response, or a
//! record nested inside one. Unknown fields are ignored on decode so that new
//! platform fields do not break older SDK builds.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// Accounts, their owners and transfer summaries
pub mod account;
/// Linked bank accounts
pub mod bank;
/// Payment bills
pub mod bill;
/// Point campaigns
pub mod campaign;
/// Cashtrays
pub mod cashtray;
/// Checks (top-up codes)
pub mod check;
/// CPM tokens
pub mod cpm;
/// Private moneys and organizations
pub mod private_money;
/// Shops
pub mod shop;
/// Transactions, transfers and bulk jobs
pub mod transaction;
/// Organization webhooks
pub mod webhook;

pub use account::*;
pub use bank::*;
pub use bill::*;
pub use campaign::*;
pub use cashtray::*;
pub use check::*;
pub use cpm::*;
pub use private_money::*;
pub use shop::*;
pub use transaction::*;
pub use webhook::*;

/// Timestamps are sent and received as RFC 3339 with an explicit offset.
pub type Timestamp = DateTime<FixedOffset>;

/// Page-number pagination block attached to most list responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pagination {
    pub current: u32,
    pub per_page: u32,
    pub max_page: u32,
    pub has_prev: bool,
    pub has_next: bool,
}

/// Reply to `POST /echo`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Echo {
    /// Always `"ok"` when the call reached the platform
    pub status: String,
    pub message: String,
}
