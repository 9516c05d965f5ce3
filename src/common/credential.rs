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

//! API credential handling and signing primitives.

#![allow(unused_assignments)] // Fields are used in methods; false positive on some toolchains

use std::fmt::Debug;

use aws_lc_rs::{digest, hmac};
use ustr::Ustr;
use zeroize::ZeroizeOnDrop;

/// Exchange API credentials for signing private requests.
///
/// The secret is held as raw bytes and zeroized on drop. All supported
/// exchanges expect lowercase hex digests, which both signing entry points
/// produce.
#[derive(Clone, ZeroizeOnDrop)]
pub struct Credential {
    #[zeroize(skip)]
    pub api_key: Ustr,
    api_secret: Box<[u8]>,
    #[zeroize(skip)]
    subaccount_id: Option<Ustr>,
}

impl Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct(stringify!(Credential))
            .field("api_key", &self.api_key)
            .field("api_secret", &"<redacted>")
            .field("subaccount_id", &self.subaccount_id)
            .finish()
    }
}

impl Credential {
    /// Creates a new [`Credential`] instance.
    #[must_use]
    pub fn new(api_key: String, api_secret: String) -> Self {
        Self {
            api_key: api_key.into(),
            api_secret: api_secret.into_bytes().into_boxed_slice(),
            subaccount_id: None,
        }
    }

    /// Creates a new [`Credential`] scoped to an optional subaccount.
    #[must_use]
    pub fn with_subaccount(
        api_key: String,
        api_secret: String,
        subaccount_id: Option<String>,
    ) -> Self {
        Self {
            api_key: api_key.into(),
            api_secret: api_secret.into_bytes().into_boxed_slice(),
            subaccount_id: subaccount_id.map(Into::into),
        }
    }

    /// Returns the API key.
    #[must_use]
    pub fn api_key(&self) -> &str {
        self.api_key.as_str()
    }

    /// Returns the subaccount identifier when one was configured.
    #[must_use]
    pub fn subaccount_id(&self) -> Option<&str> {
        self.subaccount_id.as_ref().map(Ustr::as_str)
    }

    /// Signs a message with HMAC SHA256 and returns a lowercase hex digest.
    #[must_use]
    pub fn sign_sha256(&self, message: &str) -> String {
        let key = hmac::Key::new(hmac::HMAC_SHA256, &self.api_secret);
        let tag = hmac::sign(&key, message.as_bytes());
        hex::encode(tag.as_ref())
    }

    /// Signs a message with HMAC SHA512 and returns a lowercase hex digest.
    #[must_use]
    pub fn sign_sha512(&self, message: &str) -> String {
        let key = hmac::Key::new(hmac::HMAC_SHA512, &self.api_secret);
        let tag = hmac::sign(&key, message.as_bytes());
        hex::encode(tag.as_ref())
    }
}

/// Computes the SHA-512 digest of `content` as a lowercase hex string.
///
/// Used for content hashing in canonical signing strings; the content may be
/// the empty string, which several signing schemes hash for bodyless
/// requests.
#[must_use]
pub fn sha512_hex(content: &str) -> String {
    hex::encode(digest::digest(&digest::SHA512, content.as_bytes()).as_ref())
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    const SHA512_EMPTY: &str = "cf83e1357eefb8bdf1542850d66d8007d620e4050b5715dc83f4a921d36ce9ce47d0d13c5d85f2b0ff8318d2877eec2f63b931bd47417a81a538327af927da3e";

    fn credential() -> Credential {
        Credential::new("test_key".to_string(), "test_secret".to_string())
    }

    #[rstest]
    fn test_sign_sha256_matches_vector() {
        let expected = "566ac465050f79d6200f16bd93431197edc73d8d18d4e9286e94971599e8eb4f";
        assert_eq!(credential().sign_sha256("timestamp=1578963600000"), expected);
    }

    #[rstest]
    fn test_sign_sha512_matches_vector() {
        let expected = "2190860081d9f2fb66c4694252f7643a1987c3dc9cedb161387a34d81c32b8f263c3b5932f90aecc19bcfda31a9cdfb8587ef81efdcdd4c4ab4839bfee75f1bf";
        assert_eq!(credential().sign_sha512("timestamp=1578963600000"), expected);
    }

    #[rstest]
    fn test_digest_widths_match_algorithms() {
        let cred = credential();
        assert_eq!(cred.sign_sha256("message").len(), 64);
        assert_eq!(cred.sign_sha512("message").len(), 128);
    }

    #[rstest]
    fn test_sha512_hex_of_empty_string() {
        assert_eq!(sha512_hex(""), SHA512_EMPTY);
    }

    #[rstest]
    fn test_sha512_hex_of_content() {
        let expected = "0cbf4caef38047bba9a24e621a961484e5d2a92176a859e7eb27df343dd34eb98d538a6c5f4da1ce302ec250b821cc001e46cc97a704988297185a4df7e99602";
        assert_eq!(sha512_hex("test content"), expected);
    }

    #[rstest]
    fn test_debug_does_not_leak_secret() {
        let output = format!("{:?}", credential());

        assert!(output.contains("<redacted>"));
        assert!(!output.contains("test_secret"));
    }

    #[rstest]
    fn test_subaccount_round_trip() {
        let cred = Credential::with_subaccount(
            "key".to_string(),
            "secret".to_string(),
            Some("sub-1".to_string()),
        );
        assert_eq!(cred.subaccount_id(), Some("sub-1"));

        let cred = Credential::new("key".to_string(), "secret".to_string());
        assert_eq!(cred.subaccount_id(), None);
    }
}
