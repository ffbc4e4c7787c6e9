//! Contact form validation and relay response handling.

use serde::Deserialize;

use crate::error::{SiteError, SiteResult};

/// Fields the relay needs, in the order they are checked.
pub const REQUIRED_FIELDS: [&str; 4] = ["name", "email", "topic", "message"];

pub const SUCCESS_TEXT: &str = "✅ Success! Your message has been sent successfully.";
pub const MISSING_FIELDS_TEXT: &str = "⚠️ Please fill in all required fields.";
pub const SENT_LABEL: &str = "✓ Message Sent!";
pub const SENDING_HTML: &str = "<span style=\"display: inline-flex; align-items: center; gap: 8px;\">\
<span style=\"display: inline-block; width: 16px; height: 16px; border: 2px solid currentColor; \
border-top-color: transparent; border-radius: 50%; animation: spin 0.6s linear infinite;\"></span> \
Sending...</span>";

const DEFAULT_FAILURE: &str = "Failed to send message";

/// Check that every required field is present and non-empty.
///
/// `lookup` returns the string value of a form field, `None` when the field
/// is absent or not text.
pub fn validate<F>(lookup: F) -> SiteResult<()>
where
    F: Fn(&str) -> Option<String>,
{
    for field in REQUIRED_FIELDS {
        match lookup(field) {
            Some(v) if !v.is_empty() => {}
            _ => return Err(SiteError::MissingField(field)),
        }
    }
    Ok(())
}

/// JSON body returned by the relay.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct RelayResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

impl RelayResponse {
    pub fn parse(body: &str) -> SiteResult<Self> {
        Ok(serde_json::from_str(body)?)
    }

    pub fn into_result(self) -> SiteResult<()> {
        if self.success {
            return Ok(());
        }
        let msg = self
            .message
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| DEFAULT_FAILURE.to_string());
        Err(SiteError::Rejected(msg))
    }
}

/// Parse a relay body and fold it into success or a user-facing error.
pub fn interpret_reply(body: &str) -> SiteResult<()> {
    RelayResponse::parse(body)?.into_result()
}

/// Notification text for a failed submission.
pub fn failure_text(err: &SiteError) -> String {
    match err {
        SiteError::MissingField(_) => MISSING_FIELDS_TEXT.to_string(),
        other => format!("❌ Error: {}", other.user_message()),
    }
}

/// Visual style of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

impl NoticeKind {
    pub fn background(self) -> &'static str {
        match self {
            NoticeKind::Success => "rgba(58, 242, 255, 0.15)",
            NoticeKind::Error => "rgba(255, 52, 93, 0.15)",
        }
    }

    pub fn border(self) -> &'static str {
        match self {
            NoticeKind::Success => "var(--cyan)",
            NoticeKind::Error => "var(--red)",
        }
    }

    pub fn shadow(self) -> &'static str {
        match self {
            NoticeKind::Success => "rgba(58, 242, 255, 0.3)",
            NoticeKind::Error => "rgba(255, 52, 93, 0.3)",
        }
    }

    /// Inline style for the notification box.
    pub fn css(self) -> String {
        format!(
            "position: fixed; top: 100px; right: 30px; padding: 20px 30px; \
             background: {}; border: 2px solid {}; border-radius: 12px; \
             color: var(--text-primary); font-size: 16px; font-weight: 600; \
             z-index: 10000; backdrop-filter: blur(22px); -webkit-backdrop-filter: blur(22px); \
             box-shadow: 0 10px 40px {}; \
             animation: slideInRight 0.4s cubic-bezier(0.34, 1.56, 0.64, 1);",
            self.background(),
            self.border(),
            self.shadow()
        )
    }
}

/// True when the landing URL carries `success=true`, as set by the relay's
/// redirect fallback.
pub fn is_success_redirect(search: &str) -> bool {
    search
        .trim_start_matches('?')
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .any(|(k, v)| k == "success" && v == "true")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn form(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn empty_message_fails_validation() {
        let f = form(&[
            ("name", "Ada"),
            ("email", "ada@example.com"),
            ("topic", "hello"),
            ("message", ""),
        ]);
        let err = validate(|k| f.get(k).cloned()).unwrap_err();
        assert!(matches!(err, SiteError::MissingField("message")));
        assert_eq!(failure_text(&err), MISSING_FIELDS_TEXT);
    }

    #[test]
    fn complete_form_passes() {
        let f = form(&[
            ("name", "Ada"),
            ("email", "ada@example.com"),
            ("topic", "hello"),
            ("message", "hi"),
        ]);
        assert!(validate(|k| f.get(k).cloned()).is_ok());
    }

    #[test]
    fn rejected_reply_carries_service_message() {
        let err = interpret_reply(r#"{"success":false,"message":"Invalid access key"}"#)
            .unwrap_err();
        assert_eq!(failure_text(&err), "❌ Error: Invalid access key");
    }

    #[test]
    fn rejected_reply_without_message_uses_default() {
        let err = interpret_reply(r#"{"success":false}"#).unwrap_err();
        assert_eq!(failure_text(&err), "❌ Error: Failed to send message");
    }

    #[test]
    fn success_reply() {
        assert!(interpret_reply(r#"{"success":true,"message":"Email sent"}"#).is_ok());
    }

    #[test]
    fn non_json_reply_is_decode_error() {
        assert!(matches!(
            interpret_reply("<html>"),
            Err(SiteError::Decode(_))
        ));
    }

    #[test]
    fn success_redirect_detection() {
        assert!(is_success_redirect("?success=true"));
        assert!(is_success_redirect("?a=1&success=true"));
        assert!(!is_success_redirect("?success=false"));
        assert!(!is_success_redirect(""));
    }
}
