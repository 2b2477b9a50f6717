/*
[INPUT]:  Market identifiers and query parameters
[OUTPUT]: Market data (markets, currencies, tickers, summaries, order book, history)
[POS]:    HTTP layer - public market data endpoints (no auth required)
[UPDATE]: When adding new public endpoints or changing response format
*/

use crate::http::{BittrexClient, Result};
use crate::types::{OrderBookType, QueryParams};
use serde_json::Value;

/// Depth used by `getorderbook` when none is given
pub const DEFAULT_ORDER_BOOK_DEPTH: u32 = 20;
/// Number of trades returned by `getmarkethistory` when none is given
pub const DEFAULT_HISTORY_COUNT: u32 = 20;

impl BittrexClient {
    /// GET /public/getmarkets
    pub async fn getmarkets(&self, cached: Option<bool>) -> Result<Value> {
        self.cached_call("getmarkets", QueryParams::new(), cached).await
    }

    /// GET /public/getcurrencies
    pub async fn getcurrencies(&self, cached: Option<bool>) -> Result<Value> {
        self.cached_call("getcurrencies", QueryParams::new(), cached).await
    }

    /// GET /public/getticker?market={market}
    pub async fn getticker(&self, market: &str, cached: Option<bool>) -> Result<Value> {
        let params = QueryParams::new().with("market", market);
        self.cached_call("getticker", params, cached).await
    }

    /// GET /public/getmarketsummaries
    pub async fn getmarketsummaries(&self, cached: Option<bool>) -> Result<Value> {
        self.cached_call("getmarketsummaries", QueryParams::new(), cached).await
    }

    /// GET /public/getmarketsummary?market={market}
    pub async fn getmarketsummary(&self, market: &str, cached: Option<bool>) -> Result<Value> {
        let params = QueryParams::new().with("market", market);
        self.cached_call("getmarketsummary", params, cached).await
    }

    /// GET /public/getorderbook?market={market}&type={book_type}&depth={depth}
    ///
    /// `book_type` defaults to both sides and `depth` to 20.
    pub async fn getorderbook(
        &self,
        market: &str,
        book_type: Option<OrderBookType>,
        depth: Option<u32>,
        cached: Option<bool>,
    ) -> Result<Value> {
        let params = QueryParams::new()
            .with("market", market)
            .with("type", book_type.unwrap_or_default())
            .with("depth", depth.unwrap_or(DEFAULT_ORDER_BOOK_DEPTH));
        self.cached_call("getorderbook", params, cached).await
    }

    /// GET /public/getmarkethistory?market={market}&count={count}
    pub async fn getmarkethistory(
        &self,
        market: &str,
        count: Option<u32>,
        cached: Option<bool>,
    ) -> Result<Value> {
        let params = QueryParams::new()
            .with("market", market)
            .with("count", count.unwrap_or(DEFAULT_HISTORY_COUNT));
        self.cached_call("getmarkethistory", params, cached).await
    }
}
