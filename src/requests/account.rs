//! Account endpoints.
//!
//! - GET /accounts/{account_id} - Get account details and balances
//! - PATCH /accounts/{account_id} - Suspend, close or reconfigure an account
//! - GET /accounts/customers - List customer accounts of a private money
//! - POST /accounts/customers - Create a customer together with their account
//! - POST /users/{user_id}/accounts - Open an account for an existing user
//! - GET /accounts/{account_id}/transfers/summary - Transfer totals per type

use uuid::Uuid;

use crate::models::{
    AccountDetail, AccountTransferSummary, AccountWithUser, PaginatedAccountWithUsers, Timestamp,
};

endpoint! {
    /// Get an account with its balances.
    pub struct GetAccount => AccountDetail {
        name: "get_account",
        builder: GetAccountBuilder,
        method: Get,
        path: "/accounts/{account_id}",
        path_params: { account_id: Uuid },
        required: {},
        optional: {},
    }
}

endpoint! {
    /// Update an account's state.
    ///
    /// `status` takes `"active"`, `"suspended"`, `"pre-closed"` or `"closed"`.
    pub struct UpdateAccount => AccountDetail {
        name: "update_account",
        builder: UpdateAccountBuilder,
        method: Patch,
        path: "/accounts/{account_id}",
        path_params: { account_id: Uuid },
        required: {},
        optional: {
            is_suspended: bool,
            status: String,
            can_transfer_topup: bool,
        },
    }
}

endpoint! {
    /// List customer accounts in one private money.
    ///
    /// # Filters
    ///
    /// - `created_at_from` / `created_at_to`: account creation window
    /// - `tel` / `email`: exact match on the owner's contact details
    pub struct GetCustomerAccounts => PaginatedAccountWithUsers {
        name: "get_customer_accounts",
        builder: GetCustomerAccountsBuilder,
        method: Get,
        path: "/accounts/customers",
        path_params: {},
        required: { private_money_id: Uuid },
        optional: {
            page: u32,
            per_page: u32,
            created_at_from: Timestamp,
            created_at_to: Timestamp,
            is_suspended: bool,
            status: String,
            external_id: String,
            tel: String,
            email: String,
        },
    }
}

endpoint! {
    /// Create a new customer and their account in one private money.
    pub struct CreateCustomerAccount => AccountWithUser {
        name: "create_customer_account",
        builder: CreateCustomerAccountBuilder,
        method: Post,
        path: "/accounts/customers",
        path_params: {},
        required: { private_money_id: Uuid },
        optional: {
            user_name: String,
            account_name: String,
            external_id: String,
        },
    }
}

endpoint! {
    /// Open an account in another private money for an existing user.
    pub struct CreateUserAccount => AccountDetail {
        name: "create_user_account",
        builder: CreateUserAccountBuilder,
        method: Post,
        path: "/users/{user_id}/accounts",
        path_params: { user_id: Uuid },
        required: { private_money_id: Uuid },
        optional: {
            name: String,
            external_id: String,
            metadata: String,
        },
    }
}

endpoint! {
    /// Summarize an account's transfers per transfer type over a period.
    pub struct GetAccountTransferSummary => AccountTransferSummary {
        name: "get_account_transfer_summary",
        builder: GetAccountTransferSummaryBuilder,
        method: Get,
        path: "/accounts/{account_id}/transfers/summary",
        path_params: { account_id: Uuid },
        required: {},
        optional: {
            from: Timestamp,
            to: Timestamp,
            transfer_types: Vec<String>,
        },
    }
}
