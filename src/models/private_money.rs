//! Private moneys, their issuing organizations, and per-organization summaries.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Pagination;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Organization {
    pub code: String,
    pub name: String,
}

/// A currency issued on the platform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrivateMoney {
    pub id: Uuid,
    pub name: String,

    /// `"own"` or `"third-party"`
    #[serde(rename = "type")]
    pub money_type: String,

    pub unit: String,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub oneline_message: Option<String>,

    pub organization: Organization,
    pub max_balance: f64,
    pub transfer_limit: f64,

    #[serde(default)]
    pub money_topup_transfer_limit: Option<f64>,

    /// `"static"`, `"last-update"` or `"last-topup-update"`
    pub expiration_type: String,

    #[serde(default)]
    pub enable_topup_by_member: Option<bool>,

    pub display_money_and_point: String,
}

/// Transfer totals for one direction (topup or payment).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrganizationSummary {
    pub count: u64,
    pub money_amount: f64,
    pub money_count: u64,
    pub point_amount: f64,
    #[serde(default)]
    pub raw_point_amount: Option<f64>,
    #[serde(default)]
    pub campaign_point_amount: Option<f64>,
    pub point_count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrivateMoneyOrganizationSummary {
    pub organization_code: String,
    pub topup: OrganizationSummary,
    pub payment: OrganizationSummary,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaginatedPrivateMoneyOrganizationSummaries {
    pub rows: Vec<PrivateMoneyOrganizationSummary>,
    pub count: u64,
    pub pagination: Pagination,
}
