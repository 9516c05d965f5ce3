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

//! HTTP client for the Bittrex v3 REST API.

use serde::de::DeserializeOwned;

use super::models::{BittrexBalance, BittrexCurrency, BittrexMarket, BittrexTicker};
use crate::{
    common::{
        consts::{BITTREX_API_PATH, BITTREX_HTTP_URL},
        credential::{Credential, sha512_hex},
        enums::HttpMethod,
        params::Params,
    },
    config::BittrexHttpConfig,
    http::{
        client::{RawHttpClient, RequestSigner, SignContext},
        error::ExchangeHttpResult,
    },
};

const BITTREX_DEFAULT_HEADERS: &[(&str, &str)] = &[("Content-Type", "application/json")];

/// Signs Bittrex requests for the `Api-Signature` header scheme.
///
/// The canonical string is
/// `timestamp + baseUrl + path + METHOD + SHA512(body)` signed with HMAC
/// SHA512. The timestamp is epoch milliseconds. The base URL participates in
/// the signature, so URL overrides affect signing as well as dispatch.
///
/// # References
///
/// <https://bittrex.github.io/api/v3#topic-Authentication>
#[derive(Clone, Debug)]
pub struct BittrexSigner {
    credential: Credential,
}

impl BittrexSigner {
    /// Creates a new [`BittrexSigner`] instance.
    #[must_use]
    pub fn new(api_key: String, api_secret: String, subaccount_id: Option<String>) -> Self {
        Self {
            credential: Credential::with_subaccount(api_key, api_secret, subaccount_id),
        }
    }

    // The subaccount id is always the empty string in the canonical string,
    // even when the Api-Subaccount-Id header is sent.
    fn canonical_string(ctx: &SignContext<'_>, timestamp: &str, content_hash: &str) -> String {
        format!(
            "{timestamp}{base_url}{path}{method}{content_hash}",
            base_url = ctx.base_url,
            path = ctx.path,
            method = ctx.method,
        )
    }
}

impl RequestSigner for BittrexSigner {
    fn auth_headers(&self, ctx: &SignContext<'_>) -> Vec<(&'static str, String)> {
        let timestamp = ctx.timestamp_ms.to_string();
        let content_hash = sha512_hex(ctx.body);
        let signature = self
            .credential
            .sign_sha512(&Self::canonical_string(ctx, &timestamp, &content_hash));

        let mut headers = vec![
            ("Api-Key", self.credential.api_key().to_string()),
            ("Api-Timestamp", timestamp),
            ("Api-Content-Hash", content_hash),
            ("Api-Signature", signature),
        ];

        if let Some(subaccount_id) = self.credential.subaccount_id().filter(|id| !id.is_empty()) {
            headers.push(("Api-Subaccount-Id", subaccount_id.to_string()));
        }

        headers
    }
}

/// HTTP client for Bittrex market and account endpoints.
#[derive(Clone, Debug)]
pub struct BittrexHttpClient {
    inner: RawHttpClient<BittrexSigner>,
}

impl BittrexHttpClient {
    /// Creates a new [`BittrexHttpClient`] from the given configuration.
    ///
    /// Without both an API key and secret the client only serves public
    /// endpoints; the subaccount id is ignored in that case.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be constructed.
    pub fn new(config: BittrexHttpConfig) -> ExchangeHttpResult<Self> {
        let signer = match (config.api_key, config.api_secret) {
            (Some(api_key), Some(api_secret)) => Some(BittrexSigner::new(
                api_key,
                api_secret,
                config.subaccount_id,
            )),
            _ => None,
        };

        let inner = RawHttpClient::new(
            config
                .base_url
                .unwrap_or_else(|| BITTREX_HTTP_URL.to_string()),
            BITTREX_DEFAULT_HEADERS,
            signer,
            config.timeout_secs,
            config.treat_falsy_as_missing,
        )?;

        Ok(Self { inner })
    }

    async fn get<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        authenticate: bool,
    ) -> ExchangeHttpResult<T> {
        let path = format!("{BITTREX_API_PATH}{endpoint}");
        self.inner
            .send_request(HttpMethod::Get, &path, &Params::new(), &[], authenticate)
            .await
    }

    /// Lists all markets available for trading.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be
    /// decoded.
    ///
    /// # References
    ///
    /// <https://bittrex.github.io/api/v3#operation--markets-get>
    pub async fn markets(&self) -> ExchangeHttpResult<Vec<BittrexMarket>> {
        self.get("/markets", false).await
    }

    /// Retrieves tickers for all markets, including 24h volume.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be
    /// decoded.
    ///
    /// # References
    ///
    /// <https://bittrex.github.io/api/v3#operation--markets-tickers-get>
    pub async fn tickers(&self) -> ExchangeHttpResult<Vec<BittrexTicker>> {
        self.get("/markets/tickers", false).await
    }

    /// Lists all supported currencies.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be
    /// decoded.
    ///
    /// # References
    ///
    /// <https://bittrex.github.io/api/v3#operation--currencies-get>
    pub async fn currencies(&self) -> ExchangeHttpResult<Vec<BittrexCurrency>> {
        self.get("/currencies", false).await
    }

    /// Lists account balances.
    ///
    /// # Errors
    ///
    /// Returns an error if credentials are missing, the request fails, or
    /// the response cannot be decoded.
    ///
    /// # References
    ///
    /// <https://bittrex.github.io/api/v3#operation--balances-get>
    pub async fn balances(&self) -> ExchangeHttpResult<Vec<BittrexBalance>> {
        self.get("/balances", true).await
    }
}
