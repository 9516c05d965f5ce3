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

//! Bittrex HTTP response models.

use serde::{Deserialize, Serialize};
use ustr::Ustr;

/// Market definition from `GET /v3/markets`.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BittrexMarket {
    /// Market symbol (e.g., "BTC-USDT").
    pub symbol: Ustr,
    /// Base currency of the market.
    pub base_currency_symbol: Ustr,
    /// Quote currency of the market.
    pub quote_currency_symbol: Ustr,
    /// Minimum order size in base currency.
    pub min_trade_size: f64,
    /// Price precision in decimal places.
    pub precision: u32,
    /// Market status (e.g., "ONLINE").
    pub status: String,
    /// Market creation timestamp (ISO 8601).
    pub created_at: String,
    /// Notice text published for the market.
    pub notice: String,
    /// Region codes where trading is prohibited.
    pub prohibited_in: String,
    /// Terms of service documents associated with the market.
    pub associated_terms_of_service: Vec<String>,
    /// Tags applied to the market.
    pub tags: Vec<String>,
}

/// Market ticker from `GET /v3/markets/tickers`.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BittrexTicker {
    /// Market symbol (e.g., "BTC-USDT").
    pub symbol: Ustr,
    /// Last trade rate.
    pub last_trade_rate: f64,
    /// Current best bid rate.
    pub bid_rate: f64,
    /// Current best ask rate.
    pub ask_rate: f64,
}

/// Currency definition from `GET /v3/currencies`.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BittrexCurrency {
    /// Currency symbol (e.g., "BTC").
    pub symbol: Ustr,
    /// Full currency name.
    pub name: String,
    /// Ledger type of the coin.
    pub coin_type: String,
    /// Currency status (e.g., "ONLINE").
    pub status: String,
    /// Confirmations required before a deposit credits.
    pub min_confirmations: u32,
    /// Notice text published for the currency.
    pub notice: String,
    /// Withdrawal transaction fee.
    pub tx_fee: f64,
    /// URL of the currency logo.
    pub logo_url: String,
    /// Region codes where the currency is prohibited.
    pub prohibited_in: String,
    /// Base chain address for the currency.
    pub base_address: String,
    /// Terms of service document associated with the currency.
    pub associated_terms_of_service: String,
    /// Tags applied to the currency.
    pub tags: String,
}

/// Account balance from `GET /v3/balances`.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BittrexBalance {
    /// Currency symbol (e.g., "BTC").
    pub currency_symbol: Ustr,
    /// Total balance including holds.
    pub total: f64,
    /// Balance available for trading.
    pub available: f64,
    /// Last update timestamp (ISO 8601).
    pub updated_at: String,
}
