//! Campaign endpoints.
//!
//! - GET /campaigns/{campaign_id} - Get one campaign
//! - GET /campaigns - List campaigns of a private money

use uuid::Uuid;

use crate::models::{Campaign, PaginatedCampaigns, Timestamp};

endpoint! {
    pub struct GetCampaign => Campaign {
        name: "get_campaign",
        builder: GetCampaignBuilder,
        method: Get,
        path: "/campaigns/{campaign_id}",
        path_params: { campaign_id: Uuid },
        required: {},
        optional: {},
    }
}

endpoint! {
    /// List campaigns.
    ///
    /// `available_from` / `available_to` select campaigns whose running period
    /// overlaps the window.
    pub struct ListCampaigns => PaginatedCampaigns {
        name: "list_campaigns",
        builder: ListCampaignsBuilder,
        method: Get,
        path: "/campaigns",
        path_params: {},
        required: { private_money_id: Uuid },
        optional: {
            is_ongoing: bool,
            available_from: Timestamp,
            available_to: Timestamp,
            page: u32,
            per_page: u32,
        },
    }
}
