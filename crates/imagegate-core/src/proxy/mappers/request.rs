// Inbound body -> upstream generateContent body

use imagegate_types::protocol::{
    GeminiContent, GeminiGenerationConfig, GeminiRequest, GeminiRole, GeminiTextPart,
};
use imagegate_types::GenerationRequest;

pub fn build_upstream_request(request: &GenerationRequest) -> GeminiRequest {
    GeminiRequest {
        contents: vec![GeminiContent {
            role: GeminiRole::User,
            parts: vec![GeminiTextPart { text: request.prompt.clone() }],
        }],
        generation_config: GeminiGenerationConfig {
            response_mime_type: request.response_mime_type.clone(),
            temperature: request.temperature,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_proxy_overrides_do_not_leak_into_upstream_body() {
        let request = GenerationRequest::from_proxy_body(&json!({
            "prompt": "a lighthouse at dusk",
            "temperature": 1.2,
            "response_mime_type": "image/webp",
            "target_url": "https://upstream.example",
            "key": "secret"
        }))
        .unwrap();

        let body = serde_json::to_value(build_upstream_request(&request)).unwrap();

        assert_eq!(
            body,
            json!({
                "contents": [{"role": "user", "parts": [{"text": "a lighthouse at dusk"}]}],
                "generationConfig": {"response_mime_type": "image/webp", "temperature": 1.2}
            })
        );
        assert!(!body.to_string().contains("secret"));
    }
}
