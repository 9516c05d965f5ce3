// -------------------------------------------------------------------------------------------------
//  Copyright (C) 2015-2026 Nautech Systems Pty Ltd. All rights reserved.
//  https://nautechsystems.io
//
//  Licensed under the GNU Lesser General Public License Version 3.0 (the "License");
//  You may not use this file except in compliance with the License.
//  You may obtain a copy of the License at https://www.gnu.org/licenses/lgpl-3.0.en.html
//
//  Unless required by applicable law or agreed to in writing, software
//  distributed under the License is distributed on an "AS IS" BASIS,
//  WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//  See the License for the specific language governing permissions and
//  limitations under the License.
// -------------------------------------------------------------------------------------------------

//! Generic request dispatch shared by all exchange REST clients.
//!
//! The [`RawHttpClient`] validates parameters, serializes them into either a
//! query string or a JSON body depending on the HTTP verb, attaches
//! authentication headers produced by the venue's [`RequestSigner`], and
//! decodes the response. Venue specifics live entirely behind the signer
//! type parameter.

use std::{fmt::Debug, time::Duration};

use reqwest::header::{HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;

use super::error::ExchangeHttpError;
use crate::common::{
    enums::HttpMethod,
    params::{ParamSpec, Params, build_query_string, check_parameters},
};

/// Borrowed view of a request at signing time.
///
/// Every field references the exact bytes that will go on the wire: `query`
/// is appended verbatim to the URL for GET/DELETE requests and `body` is sent
/// unmodified for POST/PUT requests. Signers must not re-encode any of them,
/// otherwise the signed string and the transmitted request diverge.
#[derive(Clone, Copy, Debug)]
pub struct SignContext<'a> {
    /// HTTP method for the request.
    pub method: HttpMethod,
    /// Base URL the request dispatches to, without a trailing slash.
    pub base_url: &'a str,
    /// URL path including any version prefix.
    pub path: &'a str,
    /// Query string including its leading `?`, or empty for bodied requests.
    pub query: &'a str,
    /// JSON body for POST/PUT requests, or empty for query requests.
    pub body: &'a str,
    /// Unix epoch milliseconds captured at dispatch time.
    pub timestamp_ms: u64,
}

/// Produces authentication headers from a request signing context.
///
/// Implementations are stateless: a fresh timestamp arrives with every
/// context, so two calls over the same request never reuse a signature.
pub trait RequestSigner: Debug + Send + Sync {
    /// Returns the headers to attach for an authenticated request.
    fn auth_headers(&self, ctx: &SignContext<'_>) -> Vec<(&'static str, String)>;
}

/// Raw HTTP client handling validation, serialization, signing and dispatch.
///
/// Exchange clients wrap this with one method per endpoint; this layer knows
/// nothing about any venue beyond the signer type parameter. Each instance
/// owns its connection pool, so two clients never share transport state.
#[derive(Clone, Debug)]
pub struct RawHttpClient<S: RequestSigner> {
    base_url: String,
    client: reqwest::Client,
    signer: Option<S>,
    treat_falsy_as_missing: bool,
}

impl<S: RequestSigner> RawHttpClient<S> {
    /// Creates a new [`RawHttpClient`] instance.
    ///
    /// `default_headers` are applied to every outgoing request. A client
    /// without a signer can still issue public requests; private requests
    /// then fail with [`ExchangeHttpError::MissingCredentials`].
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be constructed.
    pub fn new(
        base_url: String,
        default_headers: &[(&'static str, &'static str)],
        signer: Option<S>,
        timeout_secs: Option<u64>,
        treat_falsy_as_missing: bool,
    ) -> Result<Self, ExchangeHttpError> {
        let mut headers = HeaderMap::new();
        for (name, value) in default_headers {
            headers.insert(*name, HeaderValue::from_static(value));
        }

        let mut builder = reqwest::Client::builder().default_headers(headers);
        if let Some(secs) = timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            base_url,
            client: builder.build()?,
            signer,
            treat_falsy_as_missing,
        })
    }

    /// Returns the base URL for this client.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns whether a signer is configured for private requests.
    #[must_use]
    pub fn has_signer(&self) -> bool {
        self.signer.is_some()
    }

    /// Sends a request to `path` after validating `params` against `map`.
    ///
    /// Parameters travel as a percent-encoded query string for GET/DELETE and
    /// as a JSON body for POST/PUT; the unused channel is the empty string in
    /// the signing context. With `authenticate` set, the configured signer
    /// provides the venue's authentication headers over those exact bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if required parameters are missing, if `authenticate`
    /// is set without a signer, or if the transport fails, the venue returns
    /// a non-success status, or the response body is empty or undecodable.
    pub async fn send_request<T: DeserializeOwned>(
        &self,
        method: HttpMethod,
        path: &str,
        params: &Params,
        map: &[ParamSpec],
        authenticate: bool,
    ) -> Result<T, ExchangeHttpError> {
        check_parameters(params, map, self.treat_falsy_as_missing)?;

        let in_query = method.sends_params_in_query();
        let query = if in_query {
            build_query_string(params)
        } else {
            String::new()
        };
        let body = if in_query {
            String::new()
        } else {
            serde_json::to_string(params)?
        };

        let url = format!("{}{path}{query}", self.base_url);
        let mut request = self.client.request(method.as_reqwest(), &url);

        if authenticate {
            let signer = self
                .signer
                .as_ref()
                .ok_or(ExchangeHttpError::MissingCredentials)?;
            let ctx = SignContext {
                method,
                base_url: &self.base_url,
                path,
                query: &query,
                body: &body,
                timestamp_ms: chrono::Utc::now().timestamp_millis() as u64,
            };
            for (name, value) in signer.auth_headers(&ctx) {
                request = request.header(name, value);
            }
        }

        if !in_query {
            request = request.body(body);
        }

        tracing::debug!("{method} {url}");

        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(ExchangeHttpError::UnexpectedStatus {
                status: status.as_u16(),
                body: text,
            });
        }

        if text.is_empty() {
            return Err(ExchangeHttpError::EmptyResponse);
        }

        serde_json::from_str(&text).map_err(|e| {
            ExchangeHttpError::JsonError(format!("Failed to deserialize response: {e}"))
        })
    }
}
