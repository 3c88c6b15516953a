//! Check endpoints.
//!
//! - PATCH /checks/{check_id} - Change amounts, limits or expiry of a check

use uuid::Uuid;

use crate::models::{Check, Timestamp};

endpoint! {
    /// Update a check.
    ///
    /// # Point expiry
    ///
    /// `point_expires_at` (absolute) and `point_expires_in_days` (relative to
    /// redemption) are alternatives; when both are sent the platform uses the
    /// absolute date.
    ///
    /// `bear_point_account` is the account that funds the points.
    pub struct UpdateCheck => Check {
        name: "update_check",
        builder: UpdateCheckBuilder,
        method: Patch,
        path: "/checks/{check_id}",
        path_params: { check_id: Uuid },
        required: {},
        optional: {
            money_amount: f64,
            point_amount: f64,
            description: String,
            is_onetime: bool,
            usage_limit: u32,
            expires_at: Timestamp,
            point_expires_at: Timestamp,
            point_expires_in_days: u32,
            bear_point_account: Uuid,
            is_disabled: bool,
        },
    }
}
