//! Cashtray records.
//!
//! A cashtray is a one-shot QR code a shop presents for a fixed amount. A
//! positive amount tops up the scanning customer, a negative one charges them.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{AccountWithUser, Timestamp, Transaction};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cashtray {
    pub id: Uuid,
    pub amount: f64,
    pub description: String,

    /// The shop account the cashtray belongs to
    pub account: AccountWithUser,

    pub expires_at: Timestamp,

    #[serde(default)]
    pub canceled_at: Option<Timestamp>,

    /// Value encoded in the QR code
    pub token: String,
}

/// Latest scan of a cashtray, successful or not.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CashtrayAttempt {
    #[serde(default)]
    pub account: Option<AccountWithUser>,

    pub status_code: u16,
    pub error_type: String,
    pub error_message: String,
    pub created_at: Timestamp,
}

/// Cashtray together with the outcome of its last scan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CashtrayWithResult {
    #[serde(flatten)]
    pub cashtray: Cashtray,

    #[serde(default)]
    pub attempt: Option<CashtrayAttempt>,

    #[serde(default)]
    pub transaction: Option<Transaction>,
}
