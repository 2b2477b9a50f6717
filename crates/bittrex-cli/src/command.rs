/*
[INPUT]:  Parsed subcommand and a configured client
[OUTPUT]: Decoded JSON response, or nothing for simulated trades
[POS]:    Command layer - one accessor call per invocation
[UPDATE]: When the adapter gains or changes accessors
*/

use bittrex_adapter::{BittrexClient, OrderBookType, Result};
use clap::{Subcommand, ValueEnum};
use rust_decimal::Decimal;
use serde_json::Value;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum BookSide {
    Buy,
    Sell,
    Both,
}

impl From<BookSide> for OrderBookType {
    fn from(side: BookSide) -> Self {
        match side {
            BookSide::Buy => OrderBookType::Buy,
            BookSide::Sell => OrderBookType::Sell,
            BookSide::Both => OrderBookType::Both,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Subcommand)]
pub enum Command {
    /// List all markets
    Markets,
    /// List all currencies
    Currencies,
    /// Current bid/ask/last for a market
    Ticker { market: String },
    /// 24h summaries for every market
    MarketSummaries,
    /// 24h summary for one market
    MarketSummary { market: String },
    /// Order book for a market
    OrderBook {
        market: String,
        #[arg(long = "type", value_enum)]
        book_type: Option<BookSide>,
        #[arg(long)]
        depth: Option<u32>,
    },
    /// Latest trades for a market
    MarketHistory {
        market: String,
        #[arg(long)]
        count: Option<u32>,
    },
    /// Open orders on a market
    OpenOrders { market: String },
    /// Place a limit buy
    BuyLimit {
        market: String,
        quantity: Decimal,
        rate: Decimal,
    },
    /// Place a limit sell
    SellLimit {
        market: String,
        quantity: Decimal,
        rate: Decimal,
    },
    /// Place a market buy
    BuyMarket {
        market: String,
        quantity: Decimal,
        #[arg(long)]
        rate: Option<Decimal>,
    },
    /// Place a market sell
    SellMarket {
        market: String,
        quantity: Decimal,
        #[arg(long)]
        rate: Option<Decimal>,
    },
    /// Cancel an order
    Cancel { uuid: Uuid },
    /// All balances
    Balances,
    /// Balance for one currency
    Balance { currency: String },
    /// Deposit address for a currency
    DepositAddress { currency: String },
    /// Withdraw to an external address
    Withdraw {
        currency: String,
        quantity: Decimal,
        address: String,
        #[arg(long)]
        paymentid: Option<String>,
    },
    /// Look up a single order
    Order { uuid: Uuid },
    /// Closed orders, optionally for one market
    OrderHistory {
        #[arg(long)]
        market: Option<String>,
        #[arg(long)]
        count: Option<u32>,
    },
    /// Past withdrawals
    WithdrawalHistory {
        #[arg(long)]
        currency: Option<String>,
        #[arg(long)]
        count: Option<u32>,
    },
    /// Past deposits
    DepositHistory {
        #[arg(long)]
        currency: Option<String>,
        #[arg(long)]
        count: Option<u32>,
    },
}

impl Command {
    /// Trading commands move funds and honour the simulation flag
    pub fn is_trade(&self) -> bool {
        matches!(
            self,
            Command::BuyLimit { .. }
                | Command::SellLimit { .. }
                | Command::BuyMarket { .. }
                | Command::SellMarket { .. }
                | Command::Cancel { .. }
                | Command::Withdraw { .. }
        )
    }

    /// Run against `client` using its caching and simulation defaults
    pub async fn execute(&self, client: &BittrexClient) -> Result<Option<Value>> {
        let value = match self {
            Command::Markets => client.getmarkets(None).await?,
            Command::Currencies => client.getcurrencies(None).await?,
            Command::Ticker { market } => client.getticker(market, None).await?,
            Command::MarketSummaries => client.getmarketsummaries(None).await?,
            Command::MarketSummary { market } => client.getmarketsummary(market, None).await?,
            Command::OrderBook {
                market,
                book_type,
                depth,
            } => {
                client
                    .getorderbook(market, book_type.map(Into::into), *depth, None)
                    .await?
            }
            Command::MarketHistory { market, count } => {
                client.getmarkethistory(market, *count, None).await?
            }
            Command::OpenOrders { market } => client.getopenorders(market, None).await?,
            Command::BuyLimit {
                market,
                quantity,
                rate,
            } => return client.buylimit(market, *quantity, *rate, None).await,
            Command::SellLimit {
                market,
                quantity,
                rate,
            } => return client.selllimit(market, *quantity, *rate, None).await,
            Command::BuyMarket {
                market,
                quantity,
                rate,
            } => return client.buymarket(market, *quantity, *rate, None).await,
            Command::SellMarket {
                market,
                quantity,
                rate,
            } => return client.sellmarket(market, *quantity, *rate, None).await,
            Command::Cancel { uuid } => return client.cancel(*uuid, None).await,
            Command::Balances => client.getbalances(None).await?,
            Command::Balance { currency } => client.getbalance(currency, None).await?,
            Command::DepositAddress { currency } => {
                client.getdepositaddress(currency, None).await?
            }
            Command::Withdraw {
                currency,
                quantity,
                address,
                paymentid,
            } => {
                return client
                    .withdraw(currency, *quantity, address, paymentid.as_deref(), None)
                    .await;
            }
            Command::Order { uuid } => client.getorder(*uuid, None).await?,
            Command::OrderHistory { market, count } => {
                client
                    .getorderhistory(market.as_deref(), *count, None)
                    .await?
            }
            Command::WithdrawalHistory { currency, count } => {
                client
                    .getwithdrawalhistory(currency.as_deref(), *count, None)
                    .await?
            }
            Command::DepositHistory { currency, count } => {
                client
                    .getdeposithistory(currency.as_deref(), *count, None)
                    .await?
            }
        };
        Ok(Some(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bittrex_adapter::ClientConfig;

    #[test]
    fn test_trade_classification() {
        assert!(Command::Cancel { uuid: Uuid::nil() }.is_trade());
        assert!(!Command::Markets.is_trade());
        assert!(
            !Command::OrderHistory {
                market: None,
                count: None
            }
            .is_trade()
        );
    }

    #[test]
    fn test_book_side_mapping() {
        assert_eq!(OrderBookType::from(BookSide::Sell), OrderBookType::Sell);
        assert_eq!(OrderBookType::from(BookSide::Both), OrderBookType::default());
    }

    #[tokio::test]
    async fn test_simulated_trade_returns_none() {
        let config = ClientConfig {
            simulation: true,
            ..ClientConfig::default()
        };
        let client = BittrexClient::with_config(config).unwrap();
        let command = Command::Withdraw {
            currency: "BTC".to_string(),
            quantity: Decimal::ONE,
            address: "1BoatSLRHtKNngkdXEeobR76b53LETtpyT".to_string(),
            paymentid: None,
        };

        assert_eq!(command.execute(&client).await.unwrap(), None);
    }
}
