//! Partner client - prepares requests and hands them to a dispatcher.
//!
//! The client owns no transport. Sending the call and unsealing the reply are
//! the job of a [`Dispatcher`] implementation supplied by the caller, which
//! typically posts [`PreparedRequest::seal`] and hands back
//! [`Cipher::unseal_response`](crate::crypto::Cipher::unseal_response).
//!
//! # Call Flow
//!
//! 1. Resolve the request path against the configured base URL
//! 2. Stamp the call with a timestamp and a fresh partner call id
//! 3. Dispatch the prepared call
//! 4. Map non-2xx replies to `Error::Api`
//! 5. Decode the body into the endpoint's response type

#[allow(
    redundant_imports,
    reason = "Future needed for RPITIT despite being in Edition 2024 prelude"
)]
use std::future::Future;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{Map, Value};
use url::Url;
use uuid::Uuid;

use crate::config::Config;
use crate::error::Error;
use crate::models::Timestamp;
use crate::requests::{Method, Request};

/// A request ready for dispatch.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PreparedRequest {
    /// Endpoint name, e.g. `"create_transaction"`
    pub endpoint: &'static str,

    pub method: Method,

    /// Base URL joined with the rendered path
    pub url: Url,

    pub partner_client_id: String,

    /// Parameter object; path parameters excluded
    pub request_data: Map<String, Value>,

    /// Call time in the configured timezone
    pub timestamp: Timestamp,

    /// Unique per call
    pub partner_call_id: Uuid,
}

/// Payload the dispatcher seals with the client secret.
///
/// # JSON Example
///
/// ```json
/// {
///   "request_data": { "message": "hello" },
///   "timestamp": "2026-10-18T09:30:00.123456+09:00",
///   "partner_call_id": "1b4e28ba-2fa1-41d2-883f-0016d3cca427"
/// }
/// ```
#[derive(Debug, Serialize)]
pub struct Envelope<'a> {
    pub request_data: &'a Map<String, Value>,
    pub timestamp: &'a Timestamp,
    pub partner_call_id: &'a Uuid,
}

impl PreparedRequest {
    /// Prepare `request` now, with a random partner call id.
    pub fn new<R: Request>(config: &Config, request: &R) -> Result<Self, Error> {
        Self::at(config, request, Utc::now(), Uuid::new_v4())
    }

    /// Prepare `request` as of `now` with the given call id.
    pub fn at<R: Request>(
        config: &Config,
        request: &R,
        now: DateTime<Utc>,
        partner_call_id: Uuid,
    ) -> Result<Self, Error> {
        let url = resolve_url(&config.api_base_url, &request.path())?;

        Ok(Self {
            endpoint: R::NAME,
            method: R::METHOD,
            url,
            partner_client_id: config.client_id.clone(),
            request_data: request.params()?,
            timestamp: now.with_timezone(&config.timezone).fixed_offset(),
            partner_call_id,
        })
    }

    pub fn envelope(&self) -> Envelope<'_> {
        Envelope {
            request_data: &self.request_data,
            timestamp: &self.timestamp,
            partner_call_id: &self.partner_call_id,
        }
    }
}

/// Append `path` to `base`, keeping any path prefix `base` already has.
fn resolve_url(base: &Url, path: &str) -> Result<Url, Error> {
    let joined = format!("{}{}", base.as_str().trim_end_matches('/'), path);
    Ok(Url::parse(&joined)?)
}

/// Reply handed back by a dispatcher, body already unsealed.
#[derive(Debug, Clone, PartialEq)]
pub struct RawResponse {
    pub status: u16,
    pub elapsed: Duration,
    pub body: Value,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Carries prepared calls to the platform.
///
/// Implementations own transport, sealing, timeouts and retries. Returning
/// `Ok` with a non-2xx status is expected for API-level failures; `Err` is for
/// calls that produced no reply at all.
pub trait Dispatcher {
    fn dispatch(
        &self,
        request: &PreparedRequest,
    ) -> impl Future<Output = Result<RawResponse, Error>> + Send;
}

/// Decoded reply of one call.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse<T> {
    pub status: u16,
    pub elapsed: Duration,
    pub url: Url,
    pub body: T,
}

/// Partner API client.
///
/// # Example
///
/// ```rust,ignore
/// let client = Client::new(Config::from_env()?, my_dispatcher);
/// let echo = client
///     .send(&SendEcho::builder().message("hello").build()?)
///     .await?;
/// assert_eq!(echo.body.message, "hello");
/// ```
#[derive(Debug, Clone)]
pub struct Client<D> {
    config: Config,
    dispatcher: D,
}

impl<D: Dispatcher> Client<D> {
    pub fn new(config: Config, dispatcher: D) -> Self {
        Self { config, dispatcher }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn dispatcher(&self) -> &D {
        &self.dispatcher
    }

    pub fn prepare<R: Request>(&self, request: &R) -> Result<PreparedRequest, Error> {
        let prepared = PreparedRequest::new(&self.config, request)?;
        tracing::debug!(
            endpoint = prepared.endpoint,
            method = %prepared.method,
            path = prepared.url.path(),
            partner_call_id = %prepared.partner_call_id,
            "Prepared request"
        );
        Ok(prepared)
    }

    /// Prepare, dispatch and decode one call.
    ///
    /// # Errors
    ///
    /// - `Url` / `Json`: the request could not be prepared
    /// - `Dispatch`: the dispatcher produced no reply
    /// - `Api`: the platform answered with a non-2xx status
    /// - `Json`: a 2xx body did not match `R::Response`
    pub async fn send<R: Request>(&self, request: &R) -> Result<ApiResponse<R::Response>, Error> {
        let prepared = self.prepare(request)?;
        let raw = self.dispatcher.dispatch(&prepared).await?;

        tracing::debug!(
            endpoint = prepared.endpoint,
            status = raw.status,
            elapsed = ?raw.elapsed,
            "Received response"
        );

        if !raw.is_success() {
            tracing::warn!(
                endpoint = prepared.endpoint,
                status = raw.status,
                partner_call_id = %prepared.partner_call_id,
                "API returned an error status"
            );
            return Err(Error::Api {
                status: raw.status,
                body: raw.body,
            });
        }

        let body = serde_json::from_value::<R::Response>(raw.body)?;

        Ok(ApiResponse {
            status: raw.status,
            elapsed: raw.elapsed,
            url: prepared.url,
            body,
        })
    }
}
