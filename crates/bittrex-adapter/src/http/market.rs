/*
[INPUT]:  Order parameters (market, quantity, rate, order uuid)
[OUTPUT]: Raw order responses, or nothing when simulated
[POS]:    HTTP layer - market endpoints (orders and open order lookup)
[UPDATE]: When adding new trading endpoints or changing order flow
*/

use crate::http::{BittrexClient, Result};
use crate::types::QueryParams;
use rust_decimal::Decimal;
use serde_json::Value;
use uuid::Uuid;

impl BittrexClient {
    /// Place a limit buy
    ///
    /// GET /market/buylimit?market={market}&quantity={quantity}&rate={rate}
    pub async fn buylimit(
        &self,
        market: &str,
        quantity: Decimal,
        rate: Decimal,
        simulated: Option<bool>,
    ) -> Result<Option<Value>> {
        let params = QueryParams::new()
            .with("market", market)
            .with("quantity", quantity)
            .with("rate", rate);
        self.trade_call("buylimit", params, simulated).await
    }

    /// Place a limit sell
    ///
    /// GET /market/selllimit?market={market}&quantity={quantity}&rate={rate}
    pub async fn selllimit(
        &self,
        market: &str,
        quantity: Decimal,
        rate: Decimal,
        simulated: Option<bool>,
    ) -> Result<Option<Value>> {
        let params = QueryParams::new()
            .with("market", market)
            .with("quantity", quantity)
            .with("rate", rate);
        self.trade_call("selllimit", params, simulated).await
    }

    /// Place a market buy
    ///
    /// GET /market/buymarket?market={market}&quantity={quantity}[&rate={rate}]
    pub async fn buymarket(
        &self,
        market: &str,
        quantity: Decimal,
        rate: Option<Decimal>,
        simulated: Option<bool>,
    ) -> Result<Option<Value>> {
        let params = QueryParams::new()
            .with("market", market)
            .with("quantity", quantity)
            .with_opt("rate", rate);
        self.trade_call("buymarket", params, simulated).await
    }

    /// Place a market sell
    ///
    /// GET /market/sellmarket?market={market}&quantity={quantity}[&rate={rate}]
    pub async fn sellmarket(
        &self,
        market: &str,
        quantity: Decimal,
        rate: Option<Decimal>,
        simulated: Option<bool>,
    ) -> Result<Option<Value>> {
        let params = QueryParams::new()
            .with("market", market)
            .with("quantity", quantity)
            .with_opt("rate", rate);
        self.trade_call("sellmarket", params, simulated).await
    }

    /// Cancel an open order
    ///
    /// GET /market/cancel?uuid={uuid}
    pub async fn cancel(&self, uuid: Uuid, simulated: Option<bool>) -> Result<Option<Value>> {
        let params = QueryParams::new().with("uuid", uuid);
        self.trade_call("cancel", params, simulated).await
    }

    /// GET /market/getopenorders?market={market}
    pub async fn getopenorders(&self, market: &str, cached: Option<bool>) -> Result<Value> {
        let params = QueryParams::new().with("market", market);
        self.cached_call("getopenorders", params, cached).await
    }
}

#[cfg(test)]
mod tests {
    use crate::http::{BittrexClient, ClientConfig, Credentials};
    use rust_decimal::Decimal;
    use serde_json::json;
    use std::str::FromStr;
    use uuid::Uuid;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer, simulation: bool) -> BittrexClient {
        let config = ClientConfig {
            simulation,
            ..ClientConfig::default()
        };
        let mut client =
            BittrexClient::with_config_and_base_url(config, &format!("{}/api/v1.1", server.uri()))
                .expect("client init");
        client.set_credentials(Credentials::new("key", "secret"));
        client
    }

    fn dec(value: &str) -> Decimal {
        Decimal::from_str(value).expect("decimal")
    }

    #[tokio::test]
    async fn test_simulated_trades_send_nothing() {
        let server = MockServer::start().await;
        let _mock = Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
            .expect(0)
            .mount(&server)
            .await;

        let client = client_for(&server, true);
        let uuid = Uuid::new_v4();

        assert_eq!(client.buylimit("BTC-LTC", dec("10"), dec("0.01"), None).await.unwrap(), None);
        assert_eq!(client.selllimit("BTC-LTC", dec("10"), dec("0.01"), None).await.unwrap(), None);
        assert_eq!(client.buymarket("BTC-LTC", dec("1"), None, None).await.unwrap(), None);
        assert_eq!(client.sellmarket("BTC-LTC", dec("1"), None, None).await.unwrap(), None);
        assert_eq!(client.cancel(uuid, None).await.unwrap(), None);
        assert_eq!(client.cache_len().await, 0);
    }

    #[tokio::test]
    async fn test_live_buylimit_sends_order() {
        let server = MockServer::start().await;
        let body = json!({"success": true, "message": "", "result": {"uuid": "e606d53c-8d70-11e3-94b5-425861b86ab6"}});
        let _mock = Mock::given(method("GET"))
            .and(path("/api/v1.1/market/buylimit"))
            .and(query_param("market", "BTC-LTC"))
            .and(query_param("quantity", "10"))
            .and(query_param("rate", "0.01"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
            .expect(2)
            .mount(&server)
            .await;

        let client = client_for(&server, false);
        let first = client.buylimit("BTC-LTC", dec("10"), dec("0.01"), None).await.unwrap();
        // Orders are never served from the cache
        let second = client.buylimit("BTC-LTC", dec("10"), dec("0.01"), None).await.unwrap();

        assert_eq!(first, Some(body.clone()));
        assert_eq!(second, Some(body));
        assert_eq!(client.cache_len().await, 0);
    }

    #[tokio::test]
    async fn test_simulated_override_per_call() {
        let server = MockServer::start().await;
        let _mock = Mock::given(method("GET"))
            .and(path("/api/v1.1/market/selllimit"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
            .expect(1)
            .mount(&server)
            .await;

        let simulated_client = client_for(&server, true);
        let result = simulated_client
            .selllimit("BTC-LTC", dec("1"), dec("0.02"), Some(false))
            .await
            .unwrap();
        assert!(result.is_some());

        let live_client = client_for(&server, false);
        let result = live_client
            .selllimit("BTC-LTC", dec("1"), dec("0.02"), Some(true))
            .await
            .unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_market_orders_use_their_own_endpoints() {
        let server = MockServer::start().await;
        let _buy = Mock::given(method("GET"))
            .and(path("/api/v1.1/market/buymarket"))
            .and(query_param("quantity", "2.5"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"side": "buy"})))
            .expect(1)
            .mount(&server)
            .await;
        let _sell = Mock::given(method("GET"))
            .and(path("/api/v1.1/market/sellmarket"))
            .and(query_param("rate", "0.5"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"side": "sell"})))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server, false);
        let buy = client.buymarket("BTC-LTC", dec("2.5"), None, None).await.unwrap();
        let sell = client
            .sellmarket("BTC-LTC", dec("2.5"), Some(dec("0.5")), None)
            .await
            .unwrap();

        assert_eq!(buy, Some(json!({"side": "buy"})));
        assert_eq!(sell, Some(json!({"side": "sell"})));

        let requests = server.received_requests().await.unwrap();
        assert!(!requests[0].url.query_pairs().any(|(k, _)| k == "rate"));
    }

    #[tokio::test]
    async fn test_cancel_sends_uuid() {
        let server = MockServer::start().await;
        let uuid = Uuid::parse_str("e606d53c-8d70-11e3-94b5-425861b86ab6").unwrap();
        let _mock = Mock::given(method("GET"))
            .and(path("/api/v1.1/market/cancel"))
            .and(query_param("uuid", "e606d53c-8d70-11e3-94b5-425861b86ab6"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true, "result": null})))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server, false);
        let result = client.cancel(uuid, None).await.unwrap();
        assert_eq!(result, Some(json!({"success": true, "result": null})));
    }

    #[tokio::test]
    async fn test_getopenorders_is_cached() {
        let server = MockServer::start().await;
        let _mock = Mock::given(method("GET"))
            .and(path("/api/v1.1/market/getopenorders"))
            .and(query_param("market", "BTC-LTC"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"result": []})))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server, false);
        client.getopenorders("BTC-LTC", Some(true)).await.unwrap();
        client.getopenorders("BTC-LTC", Some(true)).await.unwrap();
    }
}
