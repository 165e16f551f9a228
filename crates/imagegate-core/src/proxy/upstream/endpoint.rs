//! Credential handling for upstream endpoint URLs.
//!
//! The provider authenticates via a `key` query parameter. Anything shown to
//! callers or written to logs goes through [`redact_credential`] first.

use url::Url;

pub const KEY_PARAM: &str = "key";

/// Endpoint URL with `key` set to `credential`, replacing any existing value.
pub fn with_credential(endpoint: &Url, credential: &str) -> Url {
    let mut url = strip_key(endpoint);
    url.query_pairs_mut().append_pair(KEY_PARAM, credential);
    url
}

/// Endpoint URL as text with every `key` parameter removed.
pub fn redact_credential(endpoint: &Url) -> String {
    strip_key(endpoint).to_string()
}

fn strip_key(endpoint: &Url) -> Url {
    let mut url = endpoint.clone();
    if endpoint.query().is_none() {
        return url;
    }

    let retained: Vec<(String, String)> = endpoint
        .query_pairs()
        .filter(|(name, _)| name != KEY_PARAM)
        .map(|(name, value)| (name.into_owned(), value.into_owned()))
        .collect();

    if retained.is_empty() {
        url.set_query(None);
    } else {
        url.query_pairs_mut().clear().extend_pairs(retained);
    }
    url
}

#[cfg(test)]
mod tests {
    use super::*;

    fn url(s: &str) -> Url {
        Url::parse(s).unwrap()
    }

    #[test]
    fn test_key_appended() {
        let out = with_credential(&url("https://api.example/v1beta/models/img:generateContent"), "k1");
        assert_eq!(out.as_str(), "https://api.example/v1beta/models/img:generateContent?key=k1");
    }

    #[test]
    fn test_existing_key_replaced_not_duplicated() {
        let out = with_credential(&url("https://api.example/gen?alt=json&key=old"), "new");
        let keys: Vec<_> = out.query_pairs().filter(|(k, _)| k == "key").collect();
        assert_eq!(keys.len(), 1);
        assert_eq!(keys[0].1, "new");
        assert!(out.query_pairs().any(|(k, v)| k == "alt" && v == "json"));
    }

    #[test]
    fn test_credential_is_percent_encoded() {
        let out = with_credential(&url("https://api.example/gen"), "a&b=c");
        assert_eq!(out.query_pairs().find(|(k, _)| k == "key").unwrap().1, "a&b=c");
    }

    #[test]
    fn test_redaction_strips_key() {
        assert_eq!(
            redact_credential(&url("https://api.example/gen?key=secret")),
            "https://api.example/gen"
        );
        assert_eq!(
            redact_credential(&url("https://api.example/gen?alt=json&key=secret")),
            "https://api.example/gen?alt=json"
        );
        assert_eq!(redact_credential(&url("https://api.example/gen")), "https://api.example/gen");
    }
}
