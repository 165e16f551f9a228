// Extracted image -> caller-facing response shape

use imagegate_types::protocol::{ImageDatum, ImagesResponse};
use imagegate_types::{OutputMode, ProxyError};
use serde::Serialize;
use serde_json::Value;

use super::extract::ExtractedImage;

/// Body returned to the caller.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum NormalizedResponse {
    /// Upstream body, untouched.
    Passthrough(Value),
    OpenAi(ImagesResponse),
}

/// Shape the response for `mode`, stamping `created` with the current time.
pub fn format_response(
    upstream: Value,
    extracted: Option<ExtractedImage>,
    mode: OutputMode,
    original_prompt: &str,
) -> Result<NormalizedResponse, ProxyError> {
    format_response_at(upstream, extracted, mode, original_prompt, chrono::Utc::now().timestamp())
}

/// Same as [`format_response`] with an explicit `created` timestamp.
pub fn format_response_at(
    upstream: Value,
    extracted: Option<ExtractedImage>,
    mode: OutputMode,
    original_prompt: &str,
    created: i64,
) -> Result<NormalizedResponse, ProxyError> {
    match mode {
        OutputMode::Passthrough => Ok(NormalizedResponse::Passthrough(upstream)),
        OutputMode::OpenAiCompatible => {
            let image =
                extracted.ok_or(ProxyError::NoImageData { upstream_response: upstream })?;
            Ok(NormalizedResponse::OpenAi(ImagesResponse {
                created,
                data: vec![ImageDatum {
                    b64_json: image.data,
                    revised_prompt: original_prompt.to_string(),
                }],
            }))
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::proxy::mappers::extract_image;
    use serde_json::json;

    fn image(data: &str) -> ExtractedImage {
        ExtractedImage { data: data.to_string(), mime_type: "image/jpeg".to_string() }
    }

    #[test]
    fn test_passthrough_returns_upstream_unchanged() {
        let upstream = json!({"candidates": [], "usageMetadata": {"totalTokenCount": 3}});
        let out =
            format_response(upstream.clone(), None, OutputMode::Passthrough, "a cat").unwrap();
        assert_eq!(out, NormalizedResponse::Passthrough(upstream.clone()));
        assert_eq!(serde_json::to_value(&out).unwrap(), upstream);
    }

    #[test]
    fn test_openai_shape() {
        let out = format_response_at(
            json!({}),
            Some(image("xyz")),
            OutputMode::OpenAiCompatible,
            "a cat",
            1_700_000_000,
        )
        .unwrap();

        assert_eq!(
            serde_json::to_value(&out).unwrap(),
            json!({"created": 1_700_000_000, "data": [{"b64_json": "xyz", "revised_prompt": "a cat"}]})
        );
    }

    #[test]
    fn test_openai_without_image_is_no_image_data() {
        let upstream = json!({"candidates": [{"content": {"parts": [{"text": "refused"}]}}]});
        let err = format_response(upstream.clone(), extract_image(&upstream), OutputMode::OpenAiCompatible, "p")
            .unwrap_err();

        assert_eq!(err, ProxyError::NoImageData { upstream_response: upstream });
        assert_eq!(err.http_status_code(), 500);
    }

    #[test]
    fn test_formatting_is_idempotent_apart_from_created() {
        let first =
            format_response(json!({}), Some(image("abc")), OutputMode::OpenAiCompatible, "p")
                .unwrap();
        let second =
            format_response(json!({}), Some(image("abc")), OutputMode::OpenAiCompatible, "p")
                .unwrap();

        match (first, second) {
            (NormalizedResponse::OpenAi(mut a), NormalizedResponse::OpenAi(b)) => {
                assert!(b.created >= a.created);
                a.created = b.created;
                assert_eq!(a, b);
            },
            other => panic!("expected OpenAI responses, got {other:?}"),
        }
    }

    #[test]
    fn test_created_is_current_unix_seconds() {
        let before = chrono::Utc::now().timestamp();
        let out = format_response(json!({}), Some(image("a")), OutputMode::OpenAiCompatible, "p")
            .unwrap();
        let after = chrono::Utc::now().timestamp();

        let NormalizedResponse::OpenAi(resp) = out else { panic!("expected OpenAI response") };
        assert!(resp.created >= before && resp.created <= after);
    }
}
