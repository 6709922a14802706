//! Response shapes returned by the mailboxlayer `check` endpoint.

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// Result of checking one email address.
///
/// Boolean flags arrive on the wire as `true`, `false` or `null`; both `null`
/// and a missing field decode to `false`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Verdict {
    /// The address as echoed back by the service.
    pub email: String,
    /// Suggested correction; empty when the service offers none.
    #[serde(default)]
    pub did_you_mean: String,
    /// Local part of the address.
    pub user: String,
    /// Domain part of the address.
    pub domain: String,
    #[serde(default, deserialize_with = "tri_state")]
    pub format_valid: bool,
    #[serde(default, deserialize_with = "tri_state")]
    pub mx_found: bool,
    #[serde(rename = "smtp_check", default, deserialize_with = "tri_state")]
    pub smtp_check_passed: bool,
    #[serde(rename = "catch_all", default, deserialize_with = "tri_state")]
    pub is_catch_all: bool,
    #[serde(rename = "role", default, deserialize_with = "tri_state")]
    pub is_role_account: bool,
    #[serde(rename = "disposable", default, deserialize_with = "tri_state")]
    pub is_disposable: bool,
    #[serde(rename = "free", default, deserialize_with = "tri_state")]
    pub is_free_provider: bool,
    /// Confidence score between 0.0 and 1.0, passed through verbatim.
    pub score: f64,
}

impl Verdict {
    /// The suggested correction, or `None` when the service offered none.
    pub fn suggestion(&self) -> Option<&str> {
        if self.did_you_mean.is_empty() {
            None
        } else {
            Some(&self.did_you_mean)
        }
    }
}

/// Error reported by the service, kept exactly as it was sent.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("mailboxlayer: {code} {kind} {message}")]
pub struct ApiError {
    /// Service-assigned error code (not the HTTP status).
    pub code: i64,
    /// Machine-readable category, e.g. `no_email_address_supplied`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Human-readable detail.
    #[serde(rename = "info")]
    pub message: String,
}

/// Envelope wrapping [`ApiError`] on non-success responses.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorResponse {
    #[serde(default)]
    pub success: bool,
    pub error: ApiError,
}

/// Collapse a `true`/`false`/`null` wire value into a plain `bool`.
fn tri_state<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(false))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Map, Value, json};

    const FLAGS: [&str; 7] = [
        "format_valid",
        "mx_found",
        "smtp_check",
        "catch_all",
        "role",
        "disposable",
        "free",
    ];

    fn base() -> Map<String, Value> {
        let Value::Object(map) = json!({
            "email": "a@gmail.com",
            "did_you_mean": "",
            "user": "a",
            "domain": "gmail.com",
            "score": 0.5
        }) else {
            unreachable!()
        };
        map
    }

    fn flag(verdict: &Verdict, name: &str) -> bool {
        match name {
            "format_valid" => verdict.format_valid,
            "mx_found" => verdict.mx_found,
            "smtp_check" => verdict.smtp_check_passed,
            "catch_all" => verdict.is_catch_all,
            "role" => verdict.is_role_account,
            "disposable" => verdict.is_disposable,
            "free" => verdict.is_free_provider,
            other => panic!("unknown flag {other}"),
        }
    }

    #[test]
    fn tri_state_mapping_applies_to_every_flag() {
        let cases = [
            (Some(json!(true)), true),
            (Some(json!(false)), false),
            (Some(Value::Null), false),
            (None, false),
        ];

        for name in FLAGS {
            for (wire, expected) in &cases {
                let mut body = base();
                if let Some(value) = wire {
                    body.insert(name.to_string(), value.clone());
                }
                let verdict: Verdict = serde_json::from_value(Value::Object(body)).unwrap();
                assert_eq!(flag(&verdict, name), *expected, "{name} = {wire:?}");
                for other in FLAGS.iter().filter(|other| **other != name) {
                    assert!(!flag(&verdict, other), "{other} leaked from {name}");
                }
            }
        }
    }

    #[test]
    fn decodes_success_body() {
        let body = r#"{"email":"a@gmail.com","format_valid":true,"mx_found":true,"smtp_check":true,"role":false,"catch_all":null,"disposable":false,"free":true,"domain":"gmail.com","user":"a","did_you_mean":"","score":0.8}"#;
        let verdict: Verdict = serde_json::from_str(body).unwrap();

        assert_eq!(verdict.email, "a@gmail.com");
        assert!(verdict.format_valid);
        assert!(verdict.mx_found);
        assert!(verdict.smtp_check_passed);
        assert!(!verdict.is_role_account);
        assert!(!verdict.is_catch_all);
        assert!(!verdict.is_disposable);
        assert!(verdict.is_free_provider);
        assert_eq!(verdict.score, 0.8);
        assert_eq!(verdict.domain, "gmail.com");
        assert_eq!(verdict.user, "a");
        assert_eq!(verdict.suggestion(), None);
    }

    #[test]
    fn keeps_suggested_correction() {
        let body = json!({
            "catch_all": null,
            "did_you_mean": "alexander.ostrow@gmail.com",
            "disposable": false,
            "domain": "gail.com",
            "email": "alexander.ostrow@gail.com",
            "format_valid": true,
            "free": false,
            "mx_found": true,
            "role": false,
            "score": 0.32,
            "smtp_check": false,
            "user": "alexander.ostrow"
        });
        let verdict: Verdict = serde_json::from_value(body).unwrap();
        assert_eq!(verdict.suggestion(), Some("alexander.ostrow@gmail.com"));
        assert!(!verdict.smtp_check_passed);
        assert_eq!(verdict.score, 0.32);
    }

    #[test]
    fn missing_suggestion_defaults_to_empty() {
        let mut body = base();
        body.remove("did_you_mean");
        let verdict: Verdict = serde_json::from_value(Value::Object(body)).unwrap();
        assert_eq!(verdict.did_you_mean, "");
    }

    #[test]
    fn decodes_error_body() {
        let body = r#"{"success":false,"error":{"code":210,"type":"no_email_address_supplied","info":"Please specify an email address."}}"#;
        let response: ErrorResponse = serde_json::from_str(body).unwrap();
        assert_eq!(
            response.error,
            ApiError {
                code: 210,
                kind: "no_email_address_supplied".to_string(),
                message: "Please specify an email address.".to_string(),
            }
        );
        assert!(serde_json::from_str::<Verdict>(body).is_err());
    }

    #[test]
    fn success_body_is_not_an_error_body() {
        let body = Value::Object(base());
        assert!(serde_json::from_value::<ErrorResponse>(body).is_err());
    }

    #[test]
    fn rejects_non_boolean_flag() {
        let mut body = base();
        body.insert("mx_found".to_string(), json!("yes"));
        assert!(serde_json::from_value::<Verdict>(Value::Object(body)).is_err());
    }

    #[test]
    fn rejects_bodies_without_required_fields() {
        assert!(serde_json::from_str::<Verdict>("{}").is_err());
        assert!(serde_json::from_str::<Verdict>(r#"{"email":"a@b.c""#).is_err());
        assert!(serde_json::from_str::<ErrorResponse>(r#"{"success":false}"#).is_err());
    }

    #[test]
    fn reencoding_is_stable_on_flags() {
        let body = r#"{"email":"a@gmail.com","format_valid":true,"mx_found":null,"smtp_check":true,"role":false,"catch_all":null,"free":true,"domain":"gmail.com","user":"a","score":0.8}"#;
        let first: Verdict = serde_json::from_str(body).unwrap();
        let encoded = serde_json::to_string(&first).unwrap();
        let second: Verdict = serde_json::from_str(&encoded).unwrap();
        assert_eq!(first, second);

        let value: Value = serde_json::from_str(&encoded).unwrap();
        assert_eq!(value["mx_found"], json!(false));
        assert_eq!(value["smtp_check"], json!(true));
    }
}
