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

//! HTTP client for the MEXC open API v2.

use serde::de::DeserializeOwned;
use serde_json::Value;

use super::models::{MexcAccountInfo, MexcMarketSymbol, MexcResponse, MexcTicker};
use crate::{
    common::{
        consts::MEXC_HTTP_URL,
        credential::Credential,
        enums::HttpMethod,
        params::{ParamSpec, Params},
    },
    config::MexcHttpConfig,
    http::{
        client::{RawHttpClient, RequestSigner, SignContext},
        error::ExchangeHttpResult,
    },
};

const MEXC_DEFAULT_HEADERS: &[(&str, &str)] = &[("Content-Type", "application/json")];

/// Signs MEXC requests for the `Signature` header scheme.
///
/// The canonical string is `accessKey + timestamp + requestParameters`,
/// signed with HMAC SHA256. Request parameters are the query string without
/// its leading `?` for GET/DELETE and the JSON body otherwise. The timestamp
/// is epoch milliseconds.
#[derive(Clone, Debug)]
pub struct MexcSigner {
    credential: Credential,
}

impl MexcSigner {
    /// Creates a new [`MexcSigner`] instance.
    #[must_use]
    pub fn new(api_key: String, api_secret: String) -> Self {
        Self {
            credential: Credential::new(api_key, api_secret),
        }
    }

    fn canonical_string(&self, ctx: &SignContext<'_>, timestamp: &str) -> String {
        let request_parameters = if ctx.method.sends_params_in_query() {
            ctx.query.strip_prefix('?').unwrap_or(ctx.query)
        } else {
            ctx.body
        };

        format!(
            "{access_key}{timestamp}{request_parameters}",
            access_key = self.credential.api_key(),
        )
    }
}

impl RequestSigner for MexcSigner {
    fn auth_headers(&self, ctx: &SignContext<'_>) -> Vec<(&'static str, String)> {
        let timestamp = ctx.timestamp_ms.to_string();
        let signature = self
            .credential
            .sign_sha256(&self.canonical_string(ctx, &timestamp));

        vec![
            ("ApiKey", self.credential.api_key().to_string()),
            ("Request-Time", timestamp),
            ("Signature", signature),
        ]
    }
}

/// HTTP client for MEXC market and account endpoints.
#[derive(Clone, Debug)]
pub struct MexcHttpClient {
    inner: RawHttpClient<MexcSigner>,
}

impl MexcHttpClient {
    /// Creates a new [`MexcHttpClient`] from the given configuration.
    ///
    /// Without both an API key and secret the client only serves public
    /// endpoints.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be constructed.
    pub fn new(config: MexcHttpConfig) -> ExchangeHttpResult<Self> {
        let signer = match (config.api_key, config.api_secret) {
            (Some(api_key), Some(api_secret)) => Some(MexcSigner::new(api_key, api_secret)),
            _ => None,
        };

        let inner = RawHttpClient::new(
            config.base_url.unwrap_or_else(|| MEXC_HTTP_URL.to_string()),
            MEXC_DEFAULT_HEADERS,
            signer,
            config.timeout_secs,
            config.treat_falsy_as_missing,
        )?;

        Ok(Self { inner })
    }

    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        params: Params,
        map: &[ParamSpec],
        authenticate: bool,
    ) -> ExchangeHttpResult<T> {
        self.inner
            .send_request(HttpMethod::Get, path, &params, map, authenticate)
            .await
    }

    /// Lists all market pair symbols supported.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be
    /// decoded.
    ///
    /// # References
    ///
    /// <https://mxcdevelop.github.io/APIDoc/open.api.v2.en.html#all-symbols>
    pub async fn market_symbols(&self) -> ExchangeHttpResult<MexcResponse<Vec<MexcMarketSymbol>>> {
        self.get("/open/api/v2/market/symbols", Params::new(), &[], false)
            .await
    }

    /// Retrieves ticker information.
    ///
    /// Returns only the matching ticker when `symbol` is given, otherwise
    /// tickers for all symbols.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be
    /// decoded.
    ///
    /// # References
    ///
    /// <https://mxcdevelop.github.io/APIDoc/open.api.v2.en.html#ticker-information>
    pub async fn ticker(
        &self,
        symbol: Option<&str>,
    ) -> ExchangeHttpResult<MexcResponse<Vec<MexcTicker>>> {
        let mut params = Params::new();
        if let Some(symbol) = symbol {
            params.insert("symbol".to_string(), Value::from(symbol));
        }

        self.get(
            "/open/api/v2/market/ticker",
            params,
            &[ParamSpec::optional("symbol")],
            false,
        )
        .await
    }

    /// Retrieves the current system time in epoch milliseconds.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be
    /// decoded.
    ///
    /// # References
    ///
    /// <https://mxcdevelop.github.io/APIDoc/open.api.v2.en.html#current-system-time>
    pub async fn server_time(&self) -> ExchangeHttpResult<MexcResponse<u64>> {
        self.get("/open/api/v2/common/timestamp", Params::new(), &[], false)
            .await
    }

    /// Retrieves balance information for each currency on the account.
    ///
    /// # Errors
    ///
    /// Returns an error if credentials are missing, the request fails, or
    /// the response cannot be decoded.
    ///
    /// # References
    ///
    /// <https://mxcdevelop.github.io/APIDoc/open.api.v2.en.html#balance>
    pub async fn account_balances(&self) -> ExchangeHttpResult<MexcResponse<MexcAccountInfo>> {
        self.get("/open/api/v2/account/info", Params::new(), &[], true)
            .await
    }
}
