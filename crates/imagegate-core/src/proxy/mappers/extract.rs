//! Locate the generated image inside an upstream response.
//!
//! Only `candidates[0].content.parts[0]` is inspected. That part either
//! carries structured inline data, or free text that may embed the image as
//! a Markdown data URI (`![alt](data:image/png;base64,...)`). Inline data
//! always wins over text.

use imagegate_types::models::DEFAULT_MIME_TYPE;
use regex::Regex;
use serde_json::Value;
use std::sync::OnceLock;

static MARKDOWN_DATA_URI_REGEX: OnceLock<Regex> = OnceLock::new();

/// `![`, alt text without `]`, `](data:`, an `image/<subtype>` media type,
/// `;base64,`, then the payload up to the first `)`. A match never spans
/// two references.
pub fn get_markdown_data_uri_regex() -> &'static Regex {
    MARKDOWN_DATA_URI_REGEX.get_or_init(|| {
        Regex::new(r"!\[[^\]]*\]\(data:(image/[A-Za-z0-9.+\-]+);base64,([^)]+?)\)")
            .expect("Markdown data URI regex is valid")
    })
}

/// Image payload pulled out of an upstream response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedImage {
    /// Base64 payload, exactly as the upstream sent it.
    pub data: String,
    pub mime_type: String,
}

/// The first response part, classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponsePart<'a> {
    /// `inline_data` / `inlineData` with a non-empty payload.
    Inline { data: &'a str, mime_type: Option<&'a str> },
    /// Free text, possibly with an embedded data URI.
    Text(&'a str),
    /// Anything else (function calls, empty inline data without text, ...).
    Unsupported,
}

impl<'a> ResponsePart<'a> {
    pub fn classify(part: &'a Value) -> Self {
        let inline = part.get("inline_data").or_else(|| part.get("inlineData"));
        if let Some(inline) = inline {
            let data = inline.get("data").and_then(Value::as_str).unwrap_or("");
            if !data.is_empty() {
                let mime_type = inline
                    .get("mimeType")
                    .or_else(|| inline.get("mime_type"))
                    .and_then(Value::as_str)
                    .filter(|m| !m.is_empty());
                return Self::Inline { data, mime_type };
            }
        }

        match part.get("text").and_then(Value::as_str) {
            Some(text) => Self::Text(text),
            None => Self::Unsupported,
        }
    }

    pub fn resolve(self) -> Option<ExtractedImage> {
        match self {
            Self::Inline { data, mime_type } => Some(ExtractedImage {
                data: data.to_string(),
                mime_type: mime_type.unwrap_or(DEFAULT_MIME_TYPE).to_string(),
            }),
            Self::Text(text) => find_markdown_image(text),
            Self::Unsupported => None,
        }
    }
}

/// `candidates[0].content.parts[0]`, unwrapping a `{"response": ...}`
/// envelope when the top level has no candidates.
pub fn first_part(upstream: &Value) -> Option<&Value> {
    let root = match upstream.get("candidates") {
        Some(_) => upstream,
        None => upstream.get("response").unwrap_or(upstream),
    };

    root.get("candidates")?.get(0)?.get("content")?.get("parts")?.get(0)
}

/// `None` is the normal "no image" outcome, not an error.
pub fn extract_image(upstream: &Value) -> Option<ExtractedImage> {
    first_part(upstream).map(ResponsePart::classify).and_then(ResponsePart::resolve)
}

fn find_markdown_image(text: &str) -> Option<ExtractedImage> {
    let caps = get_markdown_data_uri_regex().captures(text)?;
    Some(ExtractedImage {
        mime_type: caps.get(1)?.as_str().to_string(),
        data: caps.get(2)?.as_str().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn with_part(part: Value) -> Value {
        json!({"candidates": [{"content": {"role": "model", "parts": [part]}}]})
    }

    #[test]
    fn test_inline_data_with_mime_type() {
        let resp = with_part(json!({"inline_data": {"data": "xyz", "mimeType": "image/jpeg"}}));
        assert_eq!(
            extract_image(&resp),
            Some(ExtractedImage { data: "xyz".to_string(), mime_type: "image/jpeg".to_string() })
        );
    }

    #[test]
    fn test_inline_data_defaults_to_png() {
        let resp = with_part(json!({"inline_data": {"data": "xyz"}}));
        assert_eq!(extract_image(&resp).unwrap().mime_type, "image/png");
    }

    #[test]
    fn test_camel_case_inline_data() {
        let resp = with_part(json!({"inlineData": {"data": "QUJD", "mimeType": "image/webp"}}));
        let image = extract_image(&resp).unwrap();
        assert_eq!(image.data, "QUJD");
        assert_eq!(image.mime_type, "image/webp");
    }

    #[test]
    fn test_markdown_data_uri_in_text() {
        let resp = with_part(json!({
            "text": "Here you go:\n![x](data:image/jpeg;base64,ABC123)\nEnjoy."
        }));
        assert_eq!(
            extract_image(&resp),
            Some(ExtractedImage {
                data: "ABC123".to_string(),
                mime_type: "image/jpeg".to_string()
            })
        );
    }

    #[test]
    fn test_inline_data_preferred_over_text() {
        let resp = with_part(json!({
            "inline_data": {"data": "INLINE", "mimeType": "image/png"},
            "text": "![x](data:image/jpeg;base64,MARKDOWN)"
        }));
        assert_eq!(extract_image(&resp).unwrap().data, "INLINE");
    }

    #[test]
    fn test_empty_inline_data_falls_back_to_text() {
        let resp = with_part(json!({
            "inline_data": {"data": ""},
            "text": "![x](data:image/gif;base64,R0lG)"
        }));
        let image = extract_image(&resp).unwrap();
        assert_eq!(image.data, "R0lG");
        assert_eq!(image.mime_type, "image/gif");
    }

    #[test]
    fn test_first_markdown_match_stops_at_paren() {
        let resp = with_part(json!({
            "text": "![a](data:image/png;base64,FIRST) and ![b](data:image/jpeg;base64,SECOND)"
        }));
        let image = extract_image(&resp).unwrap();
        assert_eq!(image.data, "FIRST");
        assert_eq!(image.mime_type, "image/png");
    }

    #[test]
    fn test_match_stays_within_one_reference() {
        let text = "![a](data:image/png;base64,) ![b](data:image/jpeg;base64,QQ)";
        let found = get_markdown_data_uri_regex().find(text).unwrap();
        assert_eq!(found.as_str(), "![b](data:image/jpeg;base64,QQ)");

        let image = extract_image(&with_part(json!({"text": text}))).unwrap();
        assert_eq!(image.data, "QQ");
        assert_eq!(image.mime_type, "image/jpeg");
    }

    #[test]
    fn test_non_image_data_uri_ignored() {
        let resp = with_part(json!({"text": "![doc](data:text/plain;base64,SGVsbG8=)"}));
        assert_eq!(extract_image(&resp), None);
    }

    #[test]
    fn test_plain_text_is_not_found() {
        let resp = with_part(json!({"text": "I cannot draw that."}));
        assert_eq!(extract_image(&resp), None);
    }

    #[test]
    fn test_missing_path_segments_are_not_found() {
        for resp in [
            json!({}),
            json!({"candidates": []}),
            json!({"candidates": [{}]}),
            json!({"candidates": [{"content": {}}]}),
            json!({"candidates": [{"content": {"parts": []}}]}),
            json!({"promptFeedback": {"blockReason": "SAFETY"}}),
        ] {
            assert_eq!(extract_image(&resp), None, "expected NotFound for {resp}");
        }
    }

    #[test]
    fn test_only_first_part_is_inspected() {
        let resp = json!({"candidates": [{"content": {"parts": [
            {"text": "thinking..."},
            {"inline_data": {"data": "SECOND_PART"}}
        ]}}]});
        assert_eq!(extract_image(&resp), None);
    }

    #[test]
    fn test_response_envelope_unwrapped() {
        let resp = json!({"response": {"candidates": [{"content": {"parts": [
            {"inlineData": {"data": "WRAPPED", "mimeType": "image/png"}}
        ]}}]}});
        assert_eq!(extract_image(&resp).unwrap().data, "WRAPPED");
    }

    #[test]
    fn test_extraction_does_not_mutate_input() {
        let resp = with_part(json!({"inline_data": {"data": "xyz"}}));
        let before = resp.clone();
        let _ = extract_image(&resp);
        assert_eq!(resp, before);
    }

    #[test]
    fn test_classify_variants() {
        let inline = json!({"inline_data": {"data": "d", "mime_type": "image/jpeg"}});
        assert_eq!(
            ResponsePart::classify(&inline),
            ResponsePart::Inline { data: "d", mime_type: Some("image/jpeg") }
        );
        assert_eq!(ResponsePart::classify(&json!({"text": "t"})), ResponsePart::Text("t"));
        assert_eq!(
            ResponsePart::classify(&json!({"functionCall": {}})),
            ResponsePart::Unsupported
        );
    }
}
