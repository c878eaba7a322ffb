use httpwait_core::{AttemptFailure, BodyReadMode, ResponseBody};

use crate::executor::html::html_to_text;

/// Decode a response body according to `mode`.
///
/// `NONE` never looks at the bytes, so a missing body is fine there.
pub fn decode_body(
    mode: BodyReadMode,
    html: bool,
    bytes: Option<&[u8]>,
) -> Result<Option<ResponseBody>, AttemptFailure> {
    let bytes = bytes.unwrap_or_default();
    match mode {
        BodyReadMode::None => Ok(None),
        BodyReadMode::Json => serde_json::from_slice(bytes)
            .map(|v| Some(ResponseBody::Json(v)))
            .map_err(|e| AttemptFailure::BodyParse(e.to_string())),
        BodyReadMode::Text => {
            let text = String::from_utf8_lossy(bytes);
            let text = if html {
                html_to_text(&text)
            } else {
                text.into_owned()
            };
            Ok(Some(ResponseBody::Text(text)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn none_mode_ignores_body() {
        assert_eq!(decode_body(BodyReadMode::None, false, Some(b"{}")), Ok(None));
        assert_eq!(decode_body(BodyReadMode::None, false, None), Ok(None));
    }

    #[test]
    fn json_mode_parses() {
        let body = decode_body(BodyReadMode::Json, false, Some(br#"{"actor":"john"}"#)).unwrap();
        assert_eq!(body, Some(ResponseBody::Json(serde_json::json!({"actor": "john"}))));
    }

    #[test]
    fn json_mode_reports_parse_failure() {
        let err = decode_body(BodyReadMode::Json, false, Some(b"<html>")).unwrap_err();
        assert!(matches!(err, AttemptFailure::BodyParse(_)));
    }

    #[test]
    fn text_mode_optionally_strips_markup() {
        let raw = Some(&b"<p>actor john</p>"[..]);
        assert_eq!(
            decode_body(BodyReadMode::Text, false, raw).unwrap(),
            Some(ResponseBody::Text("<p>actor john</p>".to_string()))
        );
        assert_eq!(
            decode_body(BodyReadMode::Text, true, raw).unwrap(),
            Some(ResponseBody::Text("actor john".to_string()))
        );
    }
}
