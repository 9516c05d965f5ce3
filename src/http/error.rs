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

//! Error structures and enumerations for the exchange HTTP clients.

use thiserror::Error;

/// Result type alias for exchange HTTP operations.
pub type ExchangeHttpResult<T> = Result<T, ExchangeHttpError>;

/// A typed error enumeration for the exchange HTTP clients.
#[derive(Debug, Clone, Error)]
pub enum ExchangeHttpError {
    /// Error variant when credentials are missing but the request is private.
    #[error("Missing credentials for private request")]
    MissingCredentials,
    /// Required parameters were absent (or falsy) in the supplied params.
    ///
    /// `keys` lists the missing parameter names comma-separated in map order.
    #[error("Missing required parameters: {keys}")]
    MissingParameters { keys: String },
    /// The HTTP method is outside the supported set (GET, POST, PUT, DELETE).
    #[error("Unsupported HTTP method: {0}")]
    UnsupportedMethod(String),
    /// The transport returned a success status with no body to decode.
    #[error("Empty response body")]
    EmptyResponse,
    /// Failure during JSON serialization/deserialization.
    #[error("JSON error: {0}")]
    JsonError(String),
    /// Network failure surfaced by the HTTP transport, propagated unchanged.
    #[error("Network error: {0}")]
    NetworkError(String),
    /// Any non-success HTTP status returned by the exchange.
    #[error("Unexpected HTTP status code {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },
}

impl From<serde_json::Error> for ExchangeHttpError {
    fn from(error: serde_json::Error) -> Self {
        Self::JsonError(error.to_string())
    }
}

impl From<reqwest::Error> for ExchangeHttpError {
    fn from(error: reqwest::Error) -> Self {
        Self::NetworkError(error.to_string())
    }
}
