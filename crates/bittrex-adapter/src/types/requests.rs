/*
[INPUT]:  Accessor arguments (market, quantity, rate, currency, uuid, ...)
[OUTPUT]: Ordered query parameters shared by the URL builder and cache keys
[POS]:    Data layer - request parameter definitions
[UPDATE]: When accessor arguments change
*/

/// Ordered query parameters for a single endpoint call.
///
/// Every declared argument is kept, including absent optional ones, so the
/// same declaration drives both the cache key and the query string. Absent
/// values are skipped when the query string is built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(&'static str, Option<String>)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a required argument
    pub fn with(mut self, name: &'static str, value: impl ToString) -> Self {
        self.pairs.push((name, Some(value.to_string())));
        self
    }

    /// Append an optional argument; `None` is kept for the cache key only
    pub fn with_opt<T: ToString>(mut self, name: &'static str, value: Option<T>) -> Self {
        self.pairs.push((name, value.map(|v| v.to_string())));
        self
    }

    /// Pairs that end up in the query string, in declared order
    pub fn present(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        self.pairs
            .iter()
            .filter_map(|(name, value)| value.as_deref().map(|v| (*name, v)))
    }

    /// Every declared value in order, absent ones included
    pub fn values(&self) -> impl Iterator<Item = Option<&str>> + '_ {
        self.pairs.iter().map(|(_, value)| value.as_deref())
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(n, _)| *n == name)
            .and_then(|(_, value)| value.as_deref())
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}
