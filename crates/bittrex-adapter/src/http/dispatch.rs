/*
[INPUT]:  Method name, ordered query parameters, per-call caching/simulation overrides
[OUTPUT]: Decoded JSON responses, cached or fresh
[POS]:    HTTP layer - request dispatch and the shared accessor helpers
[UPDATE]: When changing URL layout, signing, or cache policy
*/

use crate::cache::CacheKey;
use crate::http::endpoints::classify;
use crate::http::signature::{RequestSigner, SIGNATURE_HEADER};
use crate::http::{BittrexClient, BittrexError, Result};
use crate::types::{Category, QueryParams};
use reqwest::{RequestBuilder, Url};
use serde_json::Value;
use tracing::{debug, warn};

impl BittrexClient {
    /// Send one GET for `method` and return the decoded body verbatim.
    ///
    /// Unknown method names fail before anything is sent. Bodies are decoded
    /// whatever the HTTP status; the exchange envelope is not inspected.
    pub async fn dispatch(&self, method: &str, params: &QueryParams) -> Result<Value> {
        let category = classify(method).ok_or_else(|| BittrexError::UnknownEndpoint {
            method: method.to_string(),
        })?;

        let mut url = self.endpoint_url(category, method, params)?;
        let mut signature = None;

        if category.is_private() && self.sign_requests {
            match &self.credentials {
                Some(credentials) => {
                    let signer = RequestSigner::new(&credentials.api_key, &credentials.api_secret);
                    signature = Some(signer.sign_url(&mut url, RequestSigner::nonce())?);
                }
                None => warn!(method, "sending {category} request without credentials"),
            }
        }

        debug!(method, %category, signed = signature.is_some(), "dispatching request");

        let mut builder = self.http_client.get(url);
        if let Some(signature) = signature {
            builder = builder.header(SIGNATURE_HEADER, signature);
        }
        self.send_json(builder).await
    }

    /// `base/category/method?params`, absent params omitted
    pub(crate) fn endpoint_url(
        &self,
        category: Category,
        method: &str,
        params: &QueryParams,
    ) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| BittrexError::Config(format!("base URL cannot take a path: {}", self.base_url)))?
            .pop_if_empty()
            .push(category.path_segment())
            .push(method);

        if params.present().next().is_some() {
            url.query_pairs_mut().extend_pairs(params.present());
        }
        Ok(url)
    }

    pub(crate) async fn send_json(&self, builder: RequestBuilder) -> Result<Value> {
        let response = builder.send().await?;
        let status = response.status();
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|_| BittrexError::invalid_response(status, &body))
    }

    /// Read path shared by every lookup accessor.
    ///
    /// With caching in effect a stored entry is returned as is. Otherwise the
    /// call is dispatched and the result stored under its key, also when
    /// caching is off: `cached = false` skips the lookup, not the write.
    pub async fn cached_call(
        &self,
        method: &str,
        params: QueryParams,
        cached: Option<bool>,
    ) -> Result<Value> {
        let use_cache = cached.unwrap_or(self.cached);
        let key = CacheKey::new(method, &params);

        if use_cache {
            if let Some(value) = self.cache.lock().await.get(&key) {
                return Ok(value.clone());
            }
        }

        let value = self.dispatch(method, &params).await?;
        self.cache.lock().await.insert(key, value.clone());
        Ok(value)
    }

    /// Write path shared by every trading accessor; never cached.
    ///
    /// Returns `None` without sending anything when simulation is in effect.
    pub async fn trade_call(
        &self,
        method: &str,
        params: QueryParams,
        simulated: Option<bool>,
    ) -> Result<Option<Value>> {
        if simulated.unwrap_or(self.simulation) {
            debug!(method, "simulated, request not sent");
            return Ok(None);
        }
        self.dispatch(method, &params).await.map(Some)
    }
}
