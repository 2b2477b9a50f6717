/*
[INPUT]:  Currency codes, order uuids, optional history filters
[OUTPUT]: Account data (balances, deposit addresses, orders, histories) and withdrawals
[POS]:    HTTP layer - account endpoints
[UPDATE]: When adding new account endpoints or changing query parameters
*/

use crate::http::{BittrexClient, Result};
use crate::types::QueryParams;
use rust_decimal::Decimal;
use serde_json::Value;
use uuid::Uuid;

impl BittrexClient {
    /// GET /account/getbalances
    pub async fn getbalances(&self, cached: Option<bool>) -> Result<Value> {
        self.cached_call("getbalances", QueryParams::new(), cached).await
    }

    /// GET /account/getbalance?currency={currency}
    pub async fn getbalance(&self, currency: &str, cached: Option<bool>) -> Result<Value> {
        let params = QueryParams::new().with("currency", currency);
        self.cached_call("getbalance", params, cached).await
    }

    /// GET /account/getdepositaddress?currency={currency}
    pub async fn getdepositaddress(&self, currency: &str, cached: Option<bool>) -> Result<Value> {
        let params = QueryParams::new().with("currency", currency);
        self.cached_call("getdepositaddress", params, cached).await
    }

    /// Withdraw funds to an external address; never cached
    ///
    /// GET /account/withdraw?currency={currency}&quantity={quantity}&address={address}[&paymentid={paymentid}]
    pub async fn withdraw(
        &self,
        currency: &str,
        quantity: Decimal,
        address: &str,
        paymentid: Option<&str>,
        simulated: Option<bool>,
    ) -> Result<Option<Value>> {
        let params = QueryParams::new()
            .with("currency", currency)
            .with("quantity", quantity)
            .with("address", address)
            .with_opt("paymentid", paymentid);
        self.trade_call("withdraw", params, simulated).await
    }

    /// GET /account/getorder?uuid={uuid}
    pub async fn getorder(&self, uuid: Uuid, cached: Option<bool>) -> Result<Value> {
        let params = QueryParams::new().with("uuid", uuid);
        self.cached_call("getorder", params, cached).await
    }

    /// GET /account/getorderhistory[?market={market}&count={count}]
    pub async fn getorderhistory(
        &self,
        market: Option<&str>,
        count: Option<u32>,
        cached: Option<bool>,
    ) -> Result<Value> {
        let params = QueryParams::new()
            .with_opt("market", market)
            .with_opt("count", count);
        self.cached_call("getorderhistory", params, cached).await
    }

    /// GET /account/getwithdrawalhistory[?currency={currency}&count={count}]
    pub async fn getwithdrawalhistory(
        &self,
        currency: Option<&str>,
        count: Option<u32>,
        cached: Option<bool>,
    ) -> Result<Value> {
        let params = QueryParams::new()
            .with_opt("currency", currency)
            .with_opt("count", count);
        self.cached_call("getwithdrawalhistory", params, cached).await
    }

    /// GET /account/getdeposithistory[?currency={currency}&count={count}]
    pub async fn getdeposithistory(
        &self,
        currency: Option<&str>,
        count: Option<u32>,
        cached: Option<bool>,
    ) -> Result<Value> {
        let params = QueryParams::new()
            .with_opt("currency", currency)
            .with_opt("count", count);
        self.cached_call("getdeposithistory", params, cached).await
    }
}
