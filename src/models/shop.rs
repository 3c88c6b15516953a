//! Shop records.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Pagination, PrivateMoney};

/// A shop's account in one private money.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShopAccount {
    pub id: Uuid,
    pub name: String,
    pub is_suspended: bool,

    /// Whether the shop may top up customer accounts from this account
    pub can_transfer_topup: bool,

    pub private_money: PrivateMoney,
}

/// Shop row as listed by `GET /shops`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShopWithMetadata {
    pub id: Uuid,
    pub name: String,
    pub organization_code: String,

    /// `"active"` or `"disabled"`
    pub status: String,

    #[serde(default)]
    pub postal_code: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub tel: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub external_id: Option<String>,
}

/// Shop with every private-money account it holds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShopWithAccounts {
    #[serde(flatten)]
    pub shop: ShopWithMetadata,

    pub accounts: Vec<ShopAccount>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaginatedShops {
    pub rows: Vec<ShopWithMetadata>,
    pub count: u64,
    pub pagination: Pagination,
}
