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

//! Exchange client configuration structures.

/// Configuration for the Gate.io HTTP client.
#[derive(Clone, Debug)]
pub struct GateioHttpConfig {
    /// Optional base URL override for the HTTP API.
    pub base_url: Option<String>,
    /// API key for authenticated endpoints.
    pub api_key: Option<String>,
    /// API secret for request signing.
    pub api_secret: Option<String>,
    /// Request timeout in seconds.
    pub timeout_secs: Option<u64>,
    /// Treat falsy values (empty string, zero, null, false) of required
    /// parameters as missing. Disable for strict key-presence checks only.
    pub treat_falsy_as_missing: bool,
}

impl Default for GateioHttpConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            api_key: None,
            api_secret: None,
            timeout_secs: Some(60),
            treat_falsy_as_missing: true,
        }
    }
}

/// Configuration for the Bittrex HTTP client.
#[derive(Clone, Debug)]
pub struct BittrexHttpConfig {
    /// Optional base URL override for the HTTP API.
    ///
    /// The base URL participates in the Bittrex canonical signing string, so
    /// an override affects signatures as well as dispatch.
    pub base_url: Option<String>,
    /// API key for authenticated endpoints.
    pub api_key: Option<String>,
    /// API secret for request signing.
    pub api_secret: Option<String>,
    /// Optional subaccount identifier sent as `Api-Subaccount-Id`.
    pub subaccount_id: Option<String>,
    /// Request timeout in seconds.
    pub timeout_secs: Option<u64>,
    /// Treat falsy values (empty string, zero, null, false) of required
    /// parameters as missing. Disable for strict key-presence checks only.
    pub treat_falsy_as_missing: bool,
}

impl Default for BittrexHttpConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            api_key: None,
            api_secret: None,
            subaccount_id: None,
            timeout_secs: Some(60),
            treat_falsy_as_missing: true,
        }
    }
}

/// Configuration for the MEXC HTTP client.
#[derive(Clone, Debug)]
pub struct MexcHttpConfig {
    /// Optional base URL override for the HTTP API.
    pub base_url: Option<String>,
    /// API key for authenticated endpoints.
    pub api_key: Option<String>,
    /// API secret for request signing.
    pub api_secret: Option<String>,
    /// Request timeout in seconds.
    pub timeout_secs: Option<u64>,
    /// Treat falsy values (empty string, zero, null, false) of required
    /// parameters as missing. Disable for strict key-presence checks only.
    pub treat_falsy_as_missing: bool,
}

impl Default for MexcHttpConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            api_key: None,
            api_secret: None,
            timeout_secs: Some(60),
            treat_falsy_as_missing: true,
        }
    }
}
