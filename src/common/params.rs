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

//! Parameter validation and canonical query-string construction shared by all
//! exchange clients.
//!
//! Both functions here are pure: validation's only side effect is a warning
//! for unrecognized keys, and serialization never mutates its input. Query
//! strings participate in request signing, so their byte-for-byte output
//! (ordering, encoding, array joining) is part of the wire contract.

use serde_json::{Map, Value};

use crate::http::error::ExchangeHttpError;

/// Caller-supplied arguments for a single API call, keyed by parameter name.
///
/// Backed by an insertion-ordered map so query strings and signed payloads
/// preserve the order in which parameters were added.
pub type Params = Map<String, Value>;

/// Declares one accepted parameter for an endpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParamSpec {
    /// Parameter name as it appears on the wire.
    pub key: &'static str,
    /// Whether the endpoint rejects calls without this parameter.
    pub required: bool,
}

impl ParamSpec {
    /// Creates a spec for an optional parameter.
    #[must_use]
    pub const fn optional(key: &'static str) -> Self {
        Self {
            key,
            required: false,
        }
    }

    /// Creates a spec for a required parameter.
    #[must_use]
    pub const fn required(key: &'static str) -> Self {
        Self {
            key,
            required: true,
        }
    }
}

/// Checks `params` against an endpoint's declared parameter map.
///
/// Keys absent from `map` are logged at warn level and never fail the call.
/// Required keys fail the call when absent from `params`, or additionally
/// when present with a falsy value (`null`, `false`, `""`, numeric zero) if
/// `treat_falsy_as_missing` is set. The falsy check flags a required numeric
/// parameter legitimately set to zero; pass `false` for strict key-presence
/// semantics.
///
/// Callers must surface the error before performing any network I/O.
///
/// # Errors
///
/// Returns [`ExchangeHttpError::MissingParameters`] listing the missing keys
/// comma-separated in map order.
pub fn check_parameters(
    params: &Params,
    map: &[ParamSpec],
    treat_falsy_as_missing: bool,
) -> Result<(), ExchangeHttpError> {
    let unused: Vec<&str> = params
        .keys()
        .filter(|key| !map.iter().any(|spec| spec.key == key.as_str()))
        .map(String::as_str)
        .collect();

    if !unused.is_empty() {
        tracing::warn!(
            "Unrecognized parameters may be unused: {}",
            unused.join(", ")
        );
    }

    let missing: Vec<&str> = map
        .iter()
        .filter(|spec| {
            spec.required
                && match params.get(spec.key) {
                    None => true,
                    Some(value) => treat_falsy_as_missing && is_falsy(value),
                }
        })
        .map(|spec| spec.key)
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(ExchangeHttpError::MissingParameters {
            keys: missing.join(", "),
        })
    }
}

/// Arrays and objects are never falsy, even when empty.
fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::String(s) => s.is_empty(),
        Value::Number(n) => n.as_f64().is_some_and(|f| f == 0.0),
        Value::Array(_) | Value::Object(_) => false,
    }
}

/// Serializes `params` into a canonical URL query string.
///
/// An empty map yields the empty string. Otherwise pairs are emitted in
/// insertion order as `?key=value&...` with both key and value
/// percent-encoded. Array values are joined with `,` before encoding, so the
/// separator itself arrives as `%2C` rather than as repeated keys. Nested
/// objects are JSON-encoded.
#[must_use]
pub fn build_query_string(params: &Params) -> String {
    if params.is_empty() {
        return String::new();
    }

    let pairs: Vec<String> = params
        .iter()
        .map(|(key, value)| {
            format!(
                "{}={}",
                urlencoding::encode(key),
                urlencoding::encode(&stringify(value))
            )
        })
        .collect();

    format!("?{}", pairs.join("&"))
}

fn stringify(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(stringify)
            .collect::<Vec<String>>()
            .join(","),
        Value::Null | Value::Bool(_) | Value::Number(_) | Value::Object(_) => value.to_string(),
    }
}
