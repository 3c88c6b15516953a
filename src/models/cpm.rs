//! Customer-presented-mode (CPM) tokens.
//!
//! In CPM the customer shows a short-lived code and the shop scans it. The
//! token record tells the shop which account it belongs to and what, if
//! anything, has already been charged against it.

use serde::{Deserialize, Serialize};

use super::{AccountDetail, ExternalTransaction, Timestamp, Transaction};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CpmToken {
    pub cpm_token: String,
    pub account: AccountDetail,

    #[serde(default)]
    pub transaction: Option<Transaction>,

    #[serde(default)]
    pub event: Option<ExternalTransaction>,

    /// Operations the token authorizes, e.g. `["payment", "topup"]`
    pub scopes: Vec<String>,

    pub expires_at: Timestamp,

    #[serde(default)]
    pub metadata: Option<String>,
}
