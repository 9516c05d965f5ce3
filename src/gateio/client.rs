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

//! HTTP client for the Gate.io v4 REST API.

use serde::de::DeserializeOwned;
use serde_json::Value;

use super::models::{GateioCurrencyPair, GateioSpotAccount, GateioTicker};
use crate::{
    common::{
        consts::{GATEIO_API_PATH, GATEIO_HTTP_URL},
        credential::{Credential, sha512_hex},
        enums::HttpMethod,
        params::{ParamSpec, Params},
    },
    config::GateioHttpConfig,
    http::{
        client::{RawHttpClient, RequestSigner, SignContext},
        error::ExchangeHttpResult,
    },
};

const GATEIO_DEFAULT_HEADERS: &[(&str, &str)] = &[
    ("Accept", "application/json"),
    ("Content-Type", "application/json"),
];

/// Signs Gate.io requests for the `SIGN` header scheme.
///
/// The canonical string is `METHOD\npath\nquery\nSHA512(body)\ntimestamp`,
/// signed with HMAC SHA512. The timestamp is whole seconds since the epoch.
///
/// # References
///
/// <https://www.gate.io/docs/developers/apiv4/#authentication>
#[derive(Clone, Debug)]
pub struct GateioSigner {
    credential: Credential,
}

impl GateioSigner {
    /// Creates a new [`GateioSigner`] instance.
    #[must_use]
    pub fn new(api_key: String, api_secret: String) -> Self {
        Self {
            credential: Credential::new(api_key, api_secret),
        }
    }

    // The query string keeps its leading '?' in the canonical string.
    fn canonical_string(ctx: &SignContext<'_>, timestamp: &str) -> String {
        let content_hash = sha512_hex(ctx.body);
        format!(
            "{method}\n{path}\n{query}\n{content_hash}\n{timestamp}",
            method = ctx.method,
            path = ctx.path,
            query = ctx.query,
        )
    }
}

impl RequestSigner for GateioSigner {
    fn auth_headers(&self, ctx: &SignContext<'_>) -> Vec<(&'static str, String)> {
        let timestamp = (ctx.timestamp_ms / 1000).to_string();
        let signature = self
            .credential
            .sign_sha512(&Self::canonical_string(ctx, &timestamp));

        vec![
            ("KEY", self.credential.api_key().to_string()),
            ("Timestamp", timestamp),
            ("SIGN", signature),
        ]
    }
}

/// HTTP client for Gate.io spot market and account endpoints.
#[derive(Clone, Debug)]
pub struct GateioHttpClient {
    inner: RawHttpClient<GateioSigner>,
}

impl GateioHttpClient {
    /// Creates a new [`GateioHttpClient`] from the given configuration.
    ///
    /// Without both an API key and secret the client only serves public
    /// endpoints.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be constructed.
    pub fn new(config: GateioHttpConfig) -> ExchangeHttpResult<Self> {
        let signer = match (config.api_key, config.api_secret) {
            (Some(api_key), Some(api_secret)) => Some(GateioSigner::new(api_key, api_secret)),
            _ => None,
        };

        let inner = RawHttpClient::new(
            config
                .base_url
                .unwrap_or_else(|| GATEIO_HTTP_URL.to_string()),
            GATEIO_DEFAULT_HEADERS,
            signer,
            config.timeout_secs,
            config.treat_falsy_as_missing,
        )?;

        Ok(Self { inner })
    }

    async fn get<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: Params,
        map: &[ParamSpec],
        authenticate: bool,
    ) -> ExchangeHttpResult<T> {
        let path = format!("{GATEIO_API_PATH}{endpoint}");
        self.inner
            .send_request(HttpMethod::Get, &path, &params, map, authenticate)
            .await
    }

    /// Lists all currency pairs supported on spot.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be
    /// decoded.
    ///
    /// # References
    ///
    /// <https://www.gate.io/docs/developers/apiv4/#list-all-currency-pairs-supported>
    pub async fn currency_pairs(&self) -> ExchangeHttpResult<Vec<GateioCurrencyPair>> {
        self.get("/spot/currency_pairs", Params::new(), &[], false)
            .await
    }

    /// Retrieves ticker information.
    ///
    /// Returns only the matching ticker when `currency_pair` is given,
    /// otherwise tickers for all pairs.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be
    /// decoded.
    ///
    /// # References
    ///
    /// <https://www.gate.io/docs/developers/apiv4/#retrieve-ticker-information>
    pub async fn tickers(
        &self,
        currency_pair: Option<&str>,
    ) -> ExchangeHttpResult<Vec<GateioTicker>> {
        let mut params = Params::new();
        if let Some(currency_pair) = currency_pair {
            params.insert("currency_pair".to_string(), Value::from(currency_pair));
        }

        self.get(
            "/spot/tickers",
            params,
            &[ParamSpec::optional("currency_pair")],
            false,
        )
        .await
    }

    /// Lists spot account balances, optionally for a single currency.
    ///
    /// # Errors
    ///
    /// Returns an error if credentials are missing, the request fails, or
    /// the response cannot be decoded.
    ///
    /// # References
    ///
    /// <https://www.gate.io/docs/developers/apiv4/#list-spot-accounts>
    pub async fn spot_accounts(
        &self,
        currency: Option<&str>,
    ) -> ExchangeHttpResult<Vec<GateioSpotAccount>> {
        let mut params = Params::new();
        if let Some(currency) = currency {
            params.insert("currency".to_string(), Value::from(currency));
        }

        self.get(
            "/spot/accounts",
            params,
            &[ParamSpec::optional("currency")],
            true,
        )
        .await
    }
}
