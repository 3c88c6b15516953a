//! Request types, one per partner API endpoint.
//!
//! Every endpoint is declared with the [`endpoint!`] macro, which produces:
//! 1. A request struct whose fields are the path parameters, the required
//!    parameters, and the optional parameters (`Option<T>`)
//! 2. A builder with one setter per field and a fallible `build()`
//! 3. The [`Request`] impl tying method, path template and response type together
//!
//! Constructing a request literally enforces required fields at compile time.
//! The builder and [`Request::from_params`] enforce them at runtime and fail
//! with [`Error::MissingField`] naming the first absent field.
//!
//! # Example
//!
//! ```
//! use pokepay_partner::requests::{Method, Request};
//! use pokepay_partner::requests::cashtray::UpdateCashtray;
//! use uuid::Uuid;
//!
//! let cashtray_id = Uuid::parse_str("e3b0c442-98fc-4c14-9afb-f4c8996fb924").unwrap();
//! let request = UpdateCashtray::builder()
//!     .cashtray_id(cashtray_id)
//!     .amount(-500.0)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(UpdateCashtray::METHOD, Method::Patch);
//! assert_eq!(request.path(), "/cashtrays/e3b0c442-98fc-4c14-9afb-f4c8996fb924");
//! ```

use std::fmt;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::client::PreparedRequest;
use crate::config::Config;
use crate::error::Error;

/// Declares one endpoint: request struct, builder and [`Request`] impl.
///
/// Path parameters are substituted into the path template and never appear in
/// the parameter object. Required and path fields are checked by `build()` in
/// declaration order.
macro_rules! endpoint {
    (
        $(#[$meta:meta])*
        pub struct $name:ident => $response:ty {
            name: $label:literal,
            builder: $builder:ident,
            method: $method:ident,
            path: $path:literal,
            path_params: { $($pp:ident: $pp_ty:ty),* $(,)? },
            required: { $($req:ident: $req_ty:ty),* $(,)? },
            optional: { $($opt:ident: $opt_ty:ty),* $(,)? } $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, ::serde::Serialize)]
        pub struct $name {
            $(
                #[serde(skip)]
                pub $pp: $pp_ty,
            )*
            $(
                pub $req: $req_ty,
            )*
            $(
                #[serde(skip_serializing_if = "Option::is_none")]
                pub $opt: Option<$opt_ty>,
            )*
        }

        #[doc = concat!("Builder for [`", stringify!($name), "`].")]
        #[derive(Debug, Clone, Default, ::serde::Deserialize)]
        #[serde(default, deny_unknown_fields)]
        pub struct $builder {
            $( $pp: Option<$pp_ty>, )*
            $( $req: Option<$req_ty>, )*
            $( $opt: Option<$opt_ty>, )*
        }

        impl $builder {
            $(
                pub fn $pp(mut self, value: impl Into<$pp_ty>) -> Self {
                    self.$pp = Some(value.into());
                    self
                }
            )*
            $(
                pub fn $req(mut self, value: impl Into<$req_ty>) -> Self {
                    self.$req = Some(value.into());
                    self
                }
            )*
            $(
                pub fn $opt(mut self, value: impl Into<$opt_ty>) -> Self {
                    self.$opt = Some(value.into());
                    self
                }
            )*

            /// Fails with [`Error::MissingField`](crate::error::Error::MissingField)
            /// on the first absent path or required field.
            pub fn build(self) -> Result<$name, $crate::error::Error> {
                Ok($name {
                    $(
                        $pp: self
                            .$pp
                            .ok_or($crate::error::Error::MissingField(stringify!($pp)))?,
                    )*
                    $(
                        $req: self
                            .$req
                            .ok_or($crate::error::Error::MissingField(stringify!($req)))?,
                    )*
                    $( $opt: self.$opt, )*
                })
            }
        }

        impl $name {
            pub fn builder() -> $builder {
                $builder::default()
            }
        }

        impl $crate::requests::Request for $name {
            type Response = $response;

            const NAME: &'static str = $label;
            const METHOD: $crate::requests::Method = $crate::requests::Method::$method;

            fn path(&self) -> String {
                $crate::requests::render_path(
                    $path,
                    &[$( (stringify!($pp), self.$pp.to_string()) ),*],
                )
            }

            fn from_params(params: ::serde_json::Value) -> Result<Self, $crate::error::Error> {
                ::serde_json::from_value::<$builder>(params)?.build()
            }
        }
    };
}

/// Account lookups, updates and creation
pub mod account;
/// Bank account registration
pub mod bank;
/// Bills
pub mod bill;
/// Campaigns
pub mod campaign;
/// Cashtrays
pub mod cashtray;
/// Checks
pub mod check;
/// CPM tokens
pub mod cpm;
/// Connectivity check
pub mod echo;
/// Private money summaries
pub mod private_money;
/// Shops
pub mod shop;
/// Transactions and bulk transactions
pub mod transaction;
/// Organization webhooks
pub mod webhook;

/// HTTP method of an endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Method {
    Get,
    Post,
    Patch,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Patch => "PATCH",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One partner API endpoint.
///
/// Implemented by [`endpoint!`]; the serialized form of the implementing
/// struct is the endpoint's parameter object.
pub trait Request: Serialize {
    /// Shape the endpoint answers with.
    type Response: DeserializeOwned;

    /// Snake-case endpoint name, e.g. `"create_transaction"`.
    const NAME: &'static str;

    const METHOD: Method;

    /// Path with every `{param}` placeholder substituted.
    fn path(&self) -> String;

    /// Build the request from a JSON parameter object.
    ///
    /// Path parameters are read from the same object. Unknown keys are
    /// rejected.
    fn from_params(params: Value) -> Result<Self, Error>
    where
        Self: Sized;

    /// Parameter object sent with the call.
    ///
    /// Path parameters are excluded and absent optional fields are omitted.
    fn params(&self) -> Result<Map<String, Value>, Error> {
        match serde_json::to_value(self)? {
            Value::Object(map) => Ok(map),
            Value::Null => Ok(Map::new()),
            other => Err(Error::Json(<serde_json::Error as serde::ser::Error>::custom(
                format!("parameters must serialize to an object, got {other}"),
            ))),
        }
    }
}

/// Substitute `{name}` placeholders in a path template.
///
/// Values are percent-encoded so an identifier can never introduce extra
/// path segments.
pub fn render_path(template: &str, params: &[(&str, String)]) -> String {
    let mut path = template.to_owned();
    for (name, value) in params {
        path = path.replace(&format!("{{{name}}}"), &urlencoding::encode(value));
    }
    path
}

/// Generates the endpoint catalogue from the list of request types.
macro_rules! catalogue {
    ($($ty:ty),* $(,)?) => {
        /// Every endpoint name, in catalogue order.
        pub const ENDPOINTS: &[&str] = &[$( <$ty as Request>::NAME ),*];

        /// Build the endpoint called `name` from a JSON parameter object and
        /// prepare it against `config`.
        ///
        /// # Errors
        ///
        /// - `UnknownEndpoint`: no endpoint has this name
        /// - `MissingField`: a path or required parameter is absent
        /// - `Json`: a parameter has the wrong type or is not recognised
        pub fn prepare_by_name(
            config: &Config,
            name: &str,
            params: Value,
        ) -> Result<PreparedRequest, Error> {
            $(
                if name == <$ty as Request>::NAME {
                    let request = <$ty as Request>::from_params(params)?;
                    return PreparedRequest::new(config, &request);
                }
            )*
            Err(Error::UnknownEndpoint(name.to_owned()))
        }
    };
}

catalogue! {
    account::GetAccount,
    account::UpdateAccount,
    account::GetCustomerAccounts,
    account::CreateCustomerAccount,
    account::CreateUserAccount,
    account::GetAccountTransferSummary,
    transaction::CreateTransaction,
    transaction::CreatePaymentTransaction,
    transaction::CreateExternalTransaction,
    transaction::GetTransaction,
    transaction::GetTransactionByRequestId,
    transaction::ListTransactionsV2,
    transaction::GetBulkTransaction,
    transaction::ListBulkTransactionJobs,
    cashtray::GetCashtray,
    cashtray::UpdateCashtray,
    cashtray::CancelCashtray,
    check::UpdateCheck,
    webhook::CreateWebhook,
    webhook::DeleteWebhook,
    shop::GetShop,
    shop::ListShops,
    bank::CreateBank,
    bank::ListBanks,
    bill::CreateBill,
    campaign::GetCampaign,
    campaign::ListCampaigns,
    cpm::GetCpmToken,
    private_money::GetPrivateMoneyOrganizationSummaries,
    echo::SendEcho,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn render_path_substitutes_every_placeholder() {
        let path = render_path(
            "/users/{user_id}/accounts",
            &[("user_id", "d6b1f8b2-52a1-4bb6-a9a8-0b5d28d0c0f0".to_string())],
        );

        assert_eq!(path, "/users/d6b1f8b2-52a1-4bb6-a9a8-0b5d28d0c0f0/accounts");
    }

    #[test]
    fn render_path_encodes_values() {
        let path = render_path("/cpm/{cpm_token}", &[("cpm_token", "ab/../c d".to_string())]);

        assert_eq!(path, "/cpm/ab%2F..%2Fc%20d");
    }

    #[test]
    fn render_path_without_params_is_identity() {
        assert_eq!(render_path("/transactions", &[]), "/transactions");
    }

    #[test]
    fn method_serializes_upper_case() {
        assert_eq!(serde_json::to_value(Method::Patch).unwrap(), "PATCH");
        assert_eq!(Method::Delete.to_string(), "DELETE");
    }

    fn config() -> Config {
        Config::from_vars(vec![
            ("POKEPAY_CLIENT_ID".to_string(), "client-1".to_string()),
            ("POKEPAY_CLIENT_SECRET".to_string(), "secret".to_string()),
            (
                "POKEPAY_API_BASE_URL".to_string(),
                "https://partnerapi.example.jp".to_string(),
            ),
        ])
        .unwrap()
    }

    /// First field each endpoint reports when built from an empty object.
    const FIRST_MISSING_FIELD: &[(&str, Option<&str>)] = &[
        ("get_account", Some("account_id")),
        ("update_account", Some("account_id")),
        ("get_customer_accounts", Some("private_money_id")),
        ("create_customer_account", Some("private_money_id")),
        ("create_user_account", Some("user_id")),
        ("get_account_transfer_summary", Some("account_id")),
        ("create_transaction", Some("shop_id")),
        ("create_payment_transaction", Some("shop_id")),
        ("create_external_transaction", Some("shop_id")),
        ("get_transaction", Some("transaction_id")),
        ("get_transaction_by_request_id", Some("request_id")),
        ("list_transactions_v2", None),
        ("get_bulk_transaction", Some("bulk_transaction_id")),
        ("list_bulk_transaction_jobs", Some("bulk_transaction_id")),
        ("get_cashtray", Some("cashtray_id")),
        ("update_cashtray", Some("cashtray_id")),
        ("cancel_cashtray", Some("cashtray_id")),
        ("update_check", Some("check_id")),
        ("create_webhook", Some("task")),
        ("delete_webhook", Some("webhook_id")),
        ("get_shop", Some("shop_id")),
        ("list_shops", None),
        ("create_bank", Some("user_device_id")),
        ("list_banks", Some("user_device_id")),
        ("create_bill", Some("private_money_id")),
        ("get_campaign", Some("campaign_id")),
        ("list_campaigns", Some("private_money_id")),
        ("get_cpm_token", Some("cpm_token")),
        ("get_private_money_organization_summaries", Some("private_money_id")),
        ("send_echo", Some("message")),
    ];

    #[test]
    fn empty_params_name_the_first_missing_field() {
        assert_eq!(FIRST_MISSING_FIELD.len(), ENDPOINTS.len());

        for (name, expected) in FIRST_MISSING_FIELD {
            let result = prepare_by_name(&config(), name, serde_json::json!({}));

            match expected {
                Some(field) => assert_eq!(
                    result.unwrap_err().missing_field(),
                    Some(*field),
                    "{name}"
                ),
                None => assert!(result.is_ok(), "{name} should need no parameters"),
            }
        }
    }

    #[test]
    fn builders_check_path_params_before_required_fields() {
        let device = "f47ac10b-58cc-4372-a567-0e02b2c3d479";

        let err = prepare_by_name(
            &config(),
            "create_bank",
            serde_json::json!({ "user_device_id": device }),
        )
        .unwrap_err();
        assert_eq!(err.missing_field(), Some("private_money_id"));

        let err = prepare_by_name(
            &config(),
            "create_webhook",
            serde_json::json!({ "task": "bulk_shops" }),
        )
        .unwrap_err();
        assert_eq!(err.missing_field(), Some("url"));
    }

    #[test]
    fn endpoint_names_are_unique() {
        let names: HashSet<_> = ENDPOINTS.iter().collect();

        assert_eq!(names.len(), ENDPOINTS.len());
        assert_eq!(ENDPOINTS.len(), 30);
    }
}
