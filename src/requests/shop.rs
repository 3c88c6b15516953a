//! Shop endpoints.
//!
//! - GET /shops/{shop_id} - Shop with its accounts
//! - GET /shops - Search shops

use uuid::Uuid;

use crate::models::{PaginatedShops, ShopWithAccounts};

endpoint! {
    pub struct GetShop => ShopWithAccounts {
        name: "get_shop",
        builder: GetShopBuilder,
        method: Get,
        path: "/shops/{shop_id}",
        path_params: { shop_id: Uuid },
        required: {},
        optional: {},
    }
}

endpoint! {
    /// Search shops. Disabled shops are hidden unless `with_disabled` is set.
    pub struct ListShops => PaginatedShops {
        name: "list_shops",
        builder: ListShopsBuilder,
        method: Get,
        path: "/shops",
        path_params: {},
        required: {},
        optional: {
            organization_code: String,
            private_money_id: Uuid,
            name: String,
            postal_code: String,
            address: String,
            tel: String,
            email: String,
            external_id: String,
            with_disabled: bool,
            page: u32,
            per_page: u32,
        },
    }
}
