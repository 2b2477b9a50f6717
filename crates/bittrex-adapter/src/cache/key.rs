/*
[INPUT]:  Method name and ordered accessor arguments
[OUTPUT]: Cache key identifying one distinct call
[POS]:    Cache layer - key derivation
[UPDATE]: When key composition changes
*/

use std::fmt;

use crate::types::QueryParams;

/// Identity of one accessor call: method plus every declared argument.
///
/// Arguments are kept as separate slots rather than one concatenated string,
/// so `("AB", "C")` and `("A", "BC")` never collide and an absent optional
/// argument is distinct from the literal string `"None"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    method: String,
    args: Vec<Option<String>>,
}

impl CacheKey {
    pub fn new(method: impl Into<String>, params: &QueryParams) -> Self {
        Self {
            method: method.into(),
            args: params.values().map(|v| v.map(str::to_string)).collect(),
        }
    }

    pub fn method(&self) -> &str {
        &self.method
    }

    pub fn args(&self) -> &[Option<String>] {
        &self.args
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.method)?;
        for arg in &self.args {
            match arg {
                Some(value) => write!(f, "/{value}")?,
                None => f.write_str("/-")?,
            }
        }
        Ok(())
    }
}
