//! Transaction endpoints.
//!
//! - POST /transactions - Top up a customer (money and/or points)
//! - POST /transactions/payment - Charge a customer for a basket of products
//! - POST /external-transactions - Record a payment settled outside the platform
//! - GET /transactions/{transaction_id} - Get one transaction
//! - GET /transactions/requests/{request_id} - Look up by client request id
//! - GET /transactions-v2 - Cursor-paginated transaction search
//! - GET /bulk-transactions/{bulk_transaction_id} - Bulk transaction status
//! - GET /bulk-transactions/{bulk_transaction_id}/jobs - Per-line results
//!
//! # Idempotency
//!
//! Payment endpoints accept a client-chosen `request_id`. Replaying a call with
//! the same id returns the original transaction instead of charging twice, and
//! [`GetTransactionByRequestId`] recovers it after a lost response.

use uuid::Uuid;

use crate::models::{
    BulkTransaction, ExternalTransactionDetail, PaginatedBulkTransactionJob,
    PaginatedTransactionV2, Product, Timestamp, TransactionDetail,
};

endpoint! {
    /// Top up a customer account from a shop.
    ///
    /// At least one of `money_amount` / `point_amount` should be set; the
    /// platform rejects a top-up of nothing.
    pub struct CreateTransaction => TransactionDetail {
        name: "create_transaction",
        builder: CreateTransactionBuilder,
        method: Post,
        path: "/transactions",
        path_params: {},
        required: {
            shop_id: Uuid,
            customer_id: Uuid,
            private_money_id: Uuid,
        },
        optional: {
            money_amount: f64,
            point_amount: f64,
            point_expires_at: Timestamp,
            description: String,
        },
    }
}

endpoint! {
    /// Charge a customer for a list of products.
    pub struct CreatePaymentTransaction => TransactionDetail {
        name: "create_payment_transaction",
        builder: CreatePaymentTransactionBuilder,
        method: Post,
        path: "/transactions/payment",
        path_params: {},
        required: {
            shop_id: Uuid,
            customer_id: Uuid,
            private_money_id: Uuid,
            amount: f64,
            products: Vec<Product>,
        },
        optional: {
            description: String,
            metadata: String,
            request_id: Uuid,
        },
    }
}

endpoint! {
    /// Record a payment made by other means so campaigns can award points.
    pub struct CreateExternalTransaction => ExternalTransactionDetail {
        name: "create_external_transaction",
        builder: CreateExternalTransactionBuilder,
        method: Post,
        path: "/external-transactions",
        path_params: {},
        required: {
            shop_id: Uuid,
            customer_id: Uuid,
            private_money_id: Uuid,
            amount: f64,
        },
        optional: {
            description: String,
            metadata: String,
            products: Vec<Product>,
            request_id: Uuid,
        },
    }
}

endpoint! {
    pub struct GetTransaction => TransactionDetail {
        name: "get_transaction",
        builder: GetTransactionBuilder,
        method: Get,
        path: "/transactions/{transaction_id}",
        path_params: { transaction_id: Uuid },
        required: {},
        optional: {},
    }
}

endpoint! {
    /// Find the transaction created with a given `request_id`.
    pub struct GetTransactionByRequestId => TransactionDetail {
        name: "get_transaction_by_request_id",
        builder: GetTransactionByRequestIdBuilder,
        method: Get,
        path: "/transactions/requests/{request_id}",
        path_params: { request_id: Uuid },
        required: {},
        optional: {},
    }
}

endpoint! {
    /// Search transactions with cursor pagination.
    ///
    /// Pass the previous page's `next_page_cursor_id` to continue. Walking
    /// the pages is left to the caller.
    pub struct ListTransactionsV2 => PaginatedTransactionV2 {
        name: "list_transactions_v2",
        builder: ListTransactionsV2Builder,
        method: Get,
        path: "/transactions-v2",
        path_params: {},
        required: {},
        optional: {
            private_money_id: Uuid,
            organization_code: String,
            shop_id: Uuid,
            terminal_id: Uuid,
            customer_id: Uuid,
            customer_name: String,
            description: String,
            transaction_id: Uuid,
            is_modified: bool,
            types: Vec<String>,
            from: Timestamp,
            to: Timestamp,
            next_page_cursor_id: Uuid,
            prev_page_cursor_id: Uuid,
            per_page: u32,
        },
    }
}

endpoint! {
    pub struct GetBulkTransaction => BulkTransaction {
        name: "get_bulk_transaction",
        builder: GetBulkTransactionBuilder,
        method: Get,
        path: "/bulk-transactions/{bulk_transaction_id}",
        path_params: { bulk_transaction_id: Uuid },
        required: {},
        optional: {},
    }
}

endpoint! {
    pub struct ListBulkTransactionJobs => PaginatedBulkTransactionJob {
        name: "list_bulk_transaction_jobs",
        builder: ListBulkTransactionJobsBuilder,
        method: Get,
        path: "/bulk-transactions/{bulk_transaction_id}/jobs",
        path_params: { bulk_transaction_id: Uuid },
        required: {},
        optional: {
            page: u32,
            per_page: u32,
        },
    }
}
