/*
[INPUT]:  Bittrex v1.1 endpoint groups and enumerated query values
[OUTPUT]: Typed Rust enums with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize};
use std::fmt;

/// Access category of an endpoint, used as the URL path segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Public,
    Market,
    Account,
}

impl Category {
    /// Path segment placed between the API base and the method name
    pub fn path_segment(self) -> &'static str {
        match self {
            Category::Public => "public",
            Category::Market => "market",
            Category::Account => "account",
        }
    }

    /// Market and account endpoints act on the key holder's funds
    pub fn is_private(self) -> bool {
        !matches!(self, Category::Public)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path_segment())
    }
}

/// Side filter for `getorderbook`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderBookType {
    Buy,
    Sell,
    #[default]
    Both,
}

impl OrderBookType {
    pub fn as_str(self) -> &'static str {
        match self {
            OrderBookType::Buy => "buy",
            OrderBookType::Sell => "sell",
            OrderBookType::Both => "both",
        }
    }
}

impl fmt::Display for OrderBookType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_path_segment() {
        assert_eq!(Category::Public.to_string(), "public");
        assert_eq!(Category::Market.to_string(), "market");
        assert_eq!(Category::Account.to_string(), "account");
    }

    #[test]
    fn test_category_privacy() {
        assert!(!Category::Public.is_private());
        assert!(Category::Market.is_private());
        assert!(Category::Account.is_private());
    }

    #[test]
    fn test_order_book_type_default_is_both() {
        assert_eq!(OrderBookType::default(), OrderBookType::Both);
        assert_eq!(
            serde_json::to_string(&OrderBookType::Sell).unwrap(),
            "\"sell\""
        );
    }
}
