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

//! Venue constants and API endpoints.

// ------------------------------------------------------------------------------------------------
// HTTP Base URLs
// ------------------------------------------------------------------------------------------------

/// Gate.io REST API base URL.
pub const GATEIO_HTTP_URL: &str = "https://api.gateio.ws";

/// Bittrex REST API base URL.
///
/// The URL itself is part of the Bittrex canonical signing string, so any
/// override must be applied consistently to both request dispatch and
/// signing.
pub const BITTREX_HTTP_URL: &str = "https://api.bittrex.com";

/// MEXC REST API base URL.
pub const MEXC_HTTP_URL: &str = "https://www.mxc.com";

// ------------------------------------------------------------------------------------------------
// API Paths
// ------------------------------------------------------------------------------------------------

/// Gate.io API version path.
pub const GATEIO_API_PATH: &str = "/api/v4";

/// Bittrex API version path.
pub const BITTREX_API_PATH: &str = "/v3";
