/*
[INPUT]:  Decoded JSON bodies returned by the exchange
[OUTPUT]: Standard success/message/result envelope
[POS]:    Data layer - optional response interpretation for callers
[UPDATE]: When the exchange envelope changes
*/

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::http::{BittrexError, Result};

/// Envelope wrapped around every v1.1 response.
///
/// The dispatcher returns bodies verbatim; callers that want `success: false`
/// turned into an error go through this type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse {
    pub success: bool,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub message: String,
    #[serde(default)]
    pub result: Value,
}

impl ApiResponse {
    pub fn from_value(value: &Value) -> Result<Self> {
        Ok(Self::deserialize(value)?)
    }

    /// Unwrap `result`, or fail with the exchange's message
    pub fn into_result(self) -> Result<Value> {
        if self.success {
            Ok(self.result)
        } else {
            Err(BittrexError::Exchange {
                message: self.message,
            })
        }
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_success_envelope_yields_result() {
        let body = json!({"success": true, "message": "", "result": [{"MarketName": "BTC-LTC"}]});
        let result = ApiResponse::from_value(&body).unwrap().into_result().unwrap();
        assert_eq!(result[0]["MarketName"], "BTC-LTC");
    }

    #[test]
    fn test_failure_envelope_yields_exchange_error() {
        let body = json!({"success": false, "message": "INVALID_MARKET", "result": null});
        let err = ApiResponse::from_value(&body)
            .unwrap()
            .into_result()
            .unwrap_err();
        match err {
            BittrexError::Exchange { message } => assert_eq!(message, "INVALID_MARKET"),
            other => panic!("Expected Exchange error variant, got {other:?}"),
        }
    }

    #[test]
    fn test_null_message_still_yields_exchange_error() {
        let body = json!({"success": false, "message": null, "result": null});
        let err = ApiResponse::from_value(&body)
            .unwrap()
            .into_result()
            .unwrap_err();
        match err {
            BittrexError::Exchange { message } => assert!(message.is_empty()),
            other => panic!("Expected Exchange error variant, got {other:?}"),
        }
    }

    #[test]
    fn test_non_envelope_body_is_a_serialization_error() {
        let err = ApiResponse::from_value(&json!([1, 2, 3])).unwrap_err();
        assert!(matches!(err, BittrexError::Serialization(_)));
    }
}
