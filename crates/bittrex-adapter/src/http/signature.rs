/*
[INPUT]:  API key/secret and the fully built request URL
[OUTPUT]: apikey/nonce query pairs and the `apisign` header value
[POS]:    HTTP layer - request signing for market and account endpoints
[UPDATE]: When changing signing algorithm or header format
*/

use chrono::Utc;
use hmac::{Hmac, Mac};
use sha2::Sha512;
use url::Url;

use crate::http::{BittrexError, Result};

type HmacSha512 = Hmac<Sha512>;

/// Header carrying the request signature
pub const SIGNATURE_HEADER: &str = "apisign";

/// Signs private requests with HMAC-SHA512 over the full URI
#[derive(Clone)]
pub struct RequestSigner {
    api_key: String,
    api_secret: String,
}

impl std::fmt::Debug for RequestSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestSigner")
            .field("api_key", &self.api_key)
            .finish_non_exhaustive()
    }
}

impl RequestSigner {
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_secret: api_secret.into(),
        }
    }

    /// Nonce for the next request (milliseconds since epoch)
    pub fn nonce() -> i64 {
        Utc::now().timestamp_millis()
    }

    /// Append `apikey` and `nonce` to the URL and return the signature for it
    pub fn sign_url(&self, url: &mut Url, nonce: i64) -> Result<String> {
        url.query_pairs_mut()
            .append_pair("apikey", &self.api_key)
            .append_pair("nonce", &nonce.to_string());
        self.sign(url.as_str())
    }

    /// Hex-encoded HMAC-SHA512 of `uri` keyed with the API secret
    pub fn sign(&self, uri: &str) -> Result<String> {
        let mut mac = HmacSha512::new_from_slice(self.api_secret.as_bytes()).map_err(|e| {
            BittrexError::Authentication {
                message: format!("HMAC error: {e}"),
            }
        })?;
        mac.update(uri.as_bytes());
        Ok(hex::encode(mac.finalize().into_bytes()))
    }

    /// Check a signature produced by [`RequestSigner::sign`]
    pub fn verify(&self, uri: &str, signature: &str) -> bool {
        let Ok(expected) = hex::decode(signature) else {
            return false;
        };
        let Ok(mut mac) = HmacSha512::new_from_slice(self.api_secret.as_bytes()) else {
            return false;
        };
        mac.update(uri.as_bytes());
        mac.verify_slice(&expected).is_ok()
    }
}
