/*
[INPUT]:  Endpoint method names
[OUTPUT]: Access category (public / market / account) or no match
[POS]:    HTTP layer - static endpoint table
[UPDATE]: When the exchange adds or moves endpoints
*/

use crate::types::Category;

/// Every endpoint the client knows about, grouped by URL category.
pub const ENDPOINTS: &[(Category, &[&str])] = &[
    (
        Category::Public,
        &[
            "getmarkets",
            "getcurrencies",
            "getticker",
            "getmarketsummaries",
            "getmarketsummary",
            "getorderbook",
            "getmarkethistory",
        ],
    ),
    (
        Category::Market,
        &[
            "buylimit",
            "buymarket",
            "selllimit",
            "sellmarket",
            "cancel",
            "getopenorders",
        ],
    ),
    (
        Category::Account,
        &[
            "getbalances",
            "getbalance",
            "getdepositaddress",
            "withdraw",
            "getorder",
            "getorderhistory",
            "getwithdrawalhistory",
            "getdeposithistory",
        ],
    ),
];

/// Look up the category a method belongs to
pub fn classify(method: &str) -> Option<Category> {
    ENDPOINTS
        .iter()
        .find(|(_, methods)| methods.contains(&method))
        .map(|(category, _)| *category)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::collections::HashSet;

    #[rstest]
    #[case("getmarkets", Category::Public)]
    #[case("getticker", Category::Public)]
    #[case("getmarketsummary", Category::Public)]
    #[case("getorderbook", Category::Public)]
    #[case("buylimit", Category::Market)]
    #[case("sellmarket", Category::Market)]
    #[case("cancel", Category::Market)]
    #[case("getopenorders", Category::Market)]
    #[case("getbalances", Category::Account)]
    #[case("withdraw", Category::Account)]
    #[case("getorder", Category::Account)]
    #[case("getdeposithistory", Category::Account)]
    fn test_classify_known(#[case] method: &str, #[case] expected: Category) {
        assert_eq!(classify(method), Some(expected));
    }

    #[rstest]
    #[case("nosuchmethod")]
    #[case("")]
    #[case("GETMARKETS")]
    #[case("public")]
    fn test_classify_unknown(#[case] method: &str) {
        assert_eq!(classify(method), None);
    }

    #[test]
    fn test_method_names_are_unique() {
        let mut seen = HashSet::new();
        for (_, methods) in ENDPOINTS {
            for method in *methods {
                assert!(seen.insert(*method), "{method} listed twice");
            }
        }
    }
}
