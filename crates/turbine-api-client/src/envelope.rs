//! The `{result, error}` response envelope used by the API.

use serde::Deserialize;
use serde_json::Value;

/// Error codes the server attaches to envelope errors. Only the ones the
/// client dispatches on are named here.
pub(crate) mod codes {
    pub const NOT_FOUND: &str = "NotFound";
    pub const MODIFICATION_CONFLICT: &str = "UnknownModificationConflict";
}

/// Constructed at API render time to transmit either an error or a
/// payload to the client in a predictable way.
#[derive(Debug, Deserialize)]
pub(crate) struct Envelope {
    #[serde(default)]
    pub error: Option<WireError>,
    #[serde(default)]
    pub result: Option<Value>,
}

/// The serialized error inside an envelope.
#[derive(Debug, Deserialize)]
pub(crate) struct WireError {
    pub message: String,
    #[serde(default)]
    pub code: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_payload_envelope() {
        let env: Envelope =
            serde_json::from_str(r#"{"result": {"zone_key": "zk-1"}}"#).unwrap();
        assert!(env.error.is_none());
        assert_eq!(env.result.unwrap()["zone_key"], "zk-1");
    }

    #[test]
    fn decodes_error_envelope() {
        let env: Envelope = serde_json::from_str(
            r#"{"error": {"message": "no such zone", "code": "NotFound"}}"#,
        )
        .unwrap();
        let err = env.error.unwrap();
        assert_eq!(err.code, codes::NOT_FOUND);
        assert_eq!(err.message, "no such zone");
    }
}
