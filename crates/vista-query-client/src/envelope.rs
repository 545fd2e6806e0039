// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use serde::de::DeserializeOwned;
use serde::Deserialize;
use vista_filter::QueryError;

#[derive(Deserialize)]
struct Envelope {
    status: u16,
    #[serde(default)]
    data: Option<serde_json::Value>,
    #[serde(default)]
    message: Option<String>,
}

/// Decode a backend response body.
///
/// A non-2xx HTTP status or a non-200 envelope status becomes a
/// [`QueryError`] with that status; the envelope message is kept verbatim.
pub fn decode_envelope<T>(http_status: u16, body: &[u8]) -> Result<T, QueryError>
where
    T: DeserializeOwned,
{
    let envelope: Envelope = match serde_json::from_slice(body) {
        Ok(envelope) => envelope,
        Err(err) if (200..300).contains(&http_status) => {
            return Err(QueryError::transport(format!("malformed response: {err}")));
        }
        Err(_) => {
            let text = String::from_utf8_lossy(body).trim().to_owned();
            let message = if text.is_empty() {
                format!("HTTP {http_status}")
            } else {
                text
            };
            return Err(QueryError::new(http_status, message));
        }
    };

    let status = if (200..300).contains(&http_status) {
        envelope.status
    } else {
        http_status
    };
    if status != 200 {
        let message = envelope
            .message
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| format!("request failed with status {status}"));
        return Err(QueryError::new(status, message));
    }

    let data = envelope
        .data
        .ok_or_else(|| QueryError::transport("response carried no data"))?;
    serde_json::from_value(data).map_err(|err| QueryError::transport(format!("unexpected data: {err}")))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn ok_envelope_yields_data() {
        let body = br#"{"status":200,"data":[1,2],"message":null}"#;
        assert_eq!(decode_envelope::<Vec<u8>>(200, body).unwrap(), vec![1, 2]);
    }

    #[test]
    fn envelope_status_wins_over_http_200() {
        let body = br#"{"status":400,"data":null,"message":"Undefined edge label: likes"}"#;
        let err = decode_envelope::<serde_json::Value>(200, body).unwrap_err();
        assert_eq!(err, QueryError::new(400, "Undefined edge label: likes"));
    }

    #[test]
    fn http_401_is_unauthorized_even_without_envelope() {
        let err = decode_envelope::<serde_json::Value>(401, b"").unwrap_err();
        assert!(err.is_unauthorized());
        assert_eq!(err.message, "HTTP 401");

        let body = br#"{"status":401,"message":"login expired"}"#;
        let err = decode_envelope::<serde_json::Value>(401, body).unwrap_err();
        assert_eq!(err.message, "login expired");
    }

    #[test]
    fn garbage_on_success_is_transport_error() {
        let err = decode_envelope::<serde_json::Value>(200, b"<html>").unwrap_err();
        assert_eq!(err.status, None);
    }
}
