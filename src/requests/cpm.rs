//! CPM token endpoints.
//!
//! - GET /cpm/{cpm_token} - Inspect a customer-presented token

use crate::models::CpmToken;

endpoint! {
    /// Look up a CPM token. The token is the 22-character string the
    /// customer's app displays, not a UUID.
    pub struct GetCpmToken => CpmToken {
        name: "get_cpm_token",
        builder: GetCpmTokenBuilder,
        method: Get,
        path: "/cpm/{cpm_token}",
        path_params: { cpm_token: String },
        required: {},
        optional: {},
    }
}
