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

//! MEXC HTTP response models.
//!
//! Every endpoint wraps its payload in a `code` + `data` envelope.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use ustr::Ustr;

/// Response envelope wrapping every MEXC payload.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MexcResponse<T> {
    /// Venue response code (200 on success).
    pub code: i64,
    /// Payload for the requested endpoint.
    pub data: T,
}

/// Market symbol definition from `GET /open/api/v2/market/symbols`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MexcMarketSymbol {
    /// Symbol name (e.g., "BTC_USDT").
    pub symbol: Ustr,
    /// Trading state (e.g., "ENABLED").
    pub state: String,
    /// Price precision in decimal places.
    pub price_scale: u32,
    /// Quantity precision in decimal places.
    pub quantity_scale: u32,
    /// Minimum order amount in quote currency.
    pub min_amount: String,
    /// Maximum order amount in quote currency.
    pub max_amount: String,
    /// Maker fee rate as a decimal string.
    pub maker_fee_rate: String,
    /// Taker fee rate as a decimal string.
    pub taker_fee_rate: String,
}

/// Market ticker from `GET /open/api/v2/market/ticker`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MexcTicker {
    /// Symbol name (e.g., "BTC_USDT").
    pub symbol: Ustr,
    /// Trade volume over the last 24h.
    pub volume: String,
    /// Highest price over the last 24h.
    pub high: String,
    /// Lowest price over the last 24h.
    pub low: String,
    /// Current best bid price.
    pub bid: String,
    /// Current best ask price.
    pub ask: String,
    /// Opening price of the 24h window.
    pub open: String,
    /// Last traded price.
    pub last: String,
    /// Ticker timestamp in epoch milliseconds.
    pub time: u64,
    /// Price change rate over the last 24h.
    pub change_rate: String,
}

/// Per-currency balance from `GET /open/api/v2/account/info`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MexcBalance {
    /// Amount frozen by open orders.
    pub frozen: String,
    /// Amount available for trading.
    pub available: String,
}

/// Account info payload keyed by currency code.
pub type MexcAccountInfo = HashMap<String, MexcBalance>;

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn test_deserialize_market_symbols_response() {
        let json = r#"{
            "code": 200,
            "data": [{
                "symbol": "BTC_USDT",
                "state": "ENABLED",
                "price_scale": 2,
                "quantity_scale": 6,
                "min_amount": "5",
                "max_amount": "5000000",
                "maker_fee_rate": "0.002",
                "taker_fee_rate": "0.002"
            }]
        }"#;

        let response: MexcResponse<Vec<MexcMarketSymbol>> = serde_json::from_str(json).unwrap();
        assert_eq!(response.code, 200);
        assert_eq!(response.data[0].symbol, "BTC_USDT");
        assert_eq!(response.data[0].price_scale, 2);
        assert_eq!(response.data[0].taker_fee_rate, "0.002");
    }

    #[rstest]
    fn test_deserialize_ticker_response() {
        let json = r#"{
            "code": 200,
            "data": [{
                "symbol": "BTC_USDT",
                "volume": "2.19423",
                "high": "11392.57",
                "low": "10583.66",
                "bid": "11328.5",
                "ask": "11329.59",
                "open": "10860.11",
                "last": "11329.57",
                "time": 1597725600000,
                "change_rate": "0.0432"
            }]
        }"#;

        let response: MexcResponse<Vec<MexcTicker>> = serde_json::from_str(json).unwrap();
        assert_eq!(response.data[0].symbol, "BTC_USDT");
        assert_eq!(response.data[0].time, 1597725600000);
    }

    #[rstest]
    fn test_deserialize_server_time_response() {
        let json = r#"{"code": 200, "data": 1597726650000}"#;

        let response: MexcResponse<u64> = serde_json::from_str(json).unwrap();
        assert_eq!(response.data, 1597726650000);
    }

    #[rstest]
    fn test_deserialize_account_info_response() {
        let json = r#"{
            "code": 200,
            "data": {
                "BTC": {"frozen": "0", "available": "140"},
                "ETH": {"frozen": "8471.296525048", "available": "10464.1989"}
            }
        }"#;

        let response: MexcResponse<MexcAccountInfo> = serde_json::from_str(json).unwrap();
        assert_eq!(response.data["BTC"].available, "140");
        assert_eq!(response.data["ETH"].frozen, "8471.296525048");
    }
}
