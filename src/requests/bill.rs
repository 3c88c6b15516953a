//! Bill endpoints.
//!
//! - POST /bills - Issue a payment QR code for a shop

use uuid::Uuid;

use crate::models::Bill;

endpoint! {
    /// Issue a bill. Without `amount` the customer enters the amount.
    pub struct CreateBill => Bill {
        name: "create_bill",
        builder: CreateBillBuilder,
        method: Post,
        path: "/bills",
        path_params: {},
        required: {
            private_money_id: Uuid,
            shop_id: Uuid,
        },
        optional: {
            amount: f64,
            description: String,
        },
    }
}
