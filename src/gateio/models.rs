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

//! Gate.io HTTP response models.
//!
//! Prices and quantities arrive as decimal strings and are kept as strings,
//! exactly as the venue serializes them.

use serde::{Deserialize, Serialize};
use ustr::Ustr;

/// Trading availability of a currency pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GateioTradeStatus {
    /// Cannot be bought or sold.
    Untradable,
    /// Can only be bought.
    Buyable,
    /// Can only be sold.
    Sellable,
    /// Can be bought and sold.
    Tradable,
}

/// Supported currency pair from `GET /api/v4/spot/currency_pairs`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GateioCurrencyPair {
    /// Pair identifier (e.g., "BTC_USDT").
    pub id: Ustr,
    /// Base currency.
    pub base: Ustr,
    /// Quote currency.
    pub quote: Ustr,
    /// Trading fee rate as a decimal string.
    pub fee: String,
    /// Minimum order amount in base currency.
    pub min_base_amount: String,
    /// Minimum order amount in quote currency.
    pub min_quote_amount: String,
    /// Amount (base) precision in decimal places.
    pub amount_precision: u32,
    /// Price (quote) precision in decimal places.
    pub precision: u32,
    /// Trading status for the pair.
    pub trade_status: GateioTradeStatus,
    /// Sell start timestamp in epoch seconds.
    pub sell_start: u64,
    /// Buy start timestamp in epoch seconds.
    pub buy_start: u64,
}

/// Spot ticker from `GET /api/v4/spot/tickers`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GateioTicker {
    /// Pair identifier (e.g., "BTC_USDT").
    pub currency_pair: Ustr,
    /// Last traded price.
    pub last: String,
    /// Lowest ask price.
    pub lowest_ask: String,
    /// Highest bid price.
    pub highest_bid: String,
    /// Price change percentage over the last 24h.
    pub change_percentage: String,
    /// Base currency volume over the last 24h.
    pub base_volume: String,
    /// Quote currency volume over the last 24h.
    pub quote_volume: String,
    /// Highest price over the last 24h.
    pub high_24h: String,
    /// Lowest price over the last 24h.
    pub low_24h: String,
    /// ETF net value.
    pub etf_net_value: String,
    /// ETF previous net value.
    pub etf_pre_net_value: String,
    /// ETF previous rebalance timestamp.
    pub etf_pre_timestamp: u64,
    /// ETF current leverage.
    pub etf_leverage: String,
}

/// Spot account balance from `GET /api/v4/spot/accounts`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GateioSpotAccount {
    /// Currency code (e.g., "BTC").
    pub currency: Ustr,
    /// Amount available for trading.
    pub available: String,
    /// Amount locked by open orders.
    pub locked: String,
}
