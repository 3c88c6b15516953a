//! Bank registration endpoints.
//!
//! - POST /user-devices/{user_device_id}/banks - Start linking a bank account
//! - GET /user-devices/{user_device_id}/banks - List linked bank accounts

use uuid::Uuid;

use crate::models::{BankRegisteringInfo, Banks};

endpoint! {
    /// Start registering a bank account for direct-debit top-ups.
    ///
    /// The response carries a URL the user must visit to finish; the platform
    /// then redirects to `callback_url`. `kana` is the account holder's name in
    /// full-width katakana and `birthdate` is `YYYYMMDD`.
    pub struct CreateBank => BankRegisteringInfo {
        name: "create_bank",
        builder: CreateBankBuilder,
        method: Post,
        path: "/user-devices/{user_device_id}/banks",
        path_params: { user_device_id: Uuid },
        required: {
            private_money_id: Uuid,
            callback_url: String,
            kana: String,
        },
        optional: {
            email: String,
            birthdate: String,
        },
    }
}

endpoint! {
    pub struct ListBanks => Banks {
        name: "list_banks",
        builder: ListBanksBuilder,
        method: Get,
        path: "/user-devices/{user_device_id}/banks",
        path_params: { user_device_id: Uuid },
        required: {},
        optional: { private_money_id: Uuid },
    }
}
