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

//! Unified HTTP clients for cryptocurrency exchange REST APIs.
//!
//! This crate provides typed clients for querying spot market data and account
//! balances across multiple exchanges, each with its own request-signing
//! scheme:
//!
//! - **Gate.io** (`gateio`): HMAC-SHA512 over a newline-separated canonical
//!   string of method, path, query, payload hash, and timestamp.
//! - **Bittrex** (`bittrex`): HMAC-SHA512 over the concatenation of timestamp,
//!   URL, method, and content hash.
//! - **MEXC** (`mexc`): HMAC-SHA256 over the concatenation of access key,
//!   timestamp, and request parameters.
//!
//! All clients share one request pipeline ([`http::client::RawHttpClient`]):
//! caller-supplied parameters are validated against the endpoint's declared
//! parameter map before any network I/O, serialized to a canonical query
//! string or JSON body, signed when the endpoint is private, and dispatched
//! over an owned HTTP client. Responses are decoded into typed models.
//!
//! The crate is deliberately stateless: no retries, no rate limiting, no
//! caching. Each client method performs exactly one request, and credentials
//! are held in memory only, zeroized on drop.

#![warn(rustc::all)]
#![deny(unsafe_code)]
#![deny(nonstandard_style)]
#![deny(missing_debug_implementations)]
#![deny(clippy::missing_errors_doc)]
#![deny(clippy::missing_panics_doc)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod bittrex;
pub mod common;
pub mod config;
pub mod gateio;
pub mod http;
pub mod mexc;
