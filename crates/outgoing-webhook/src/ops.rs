use rich_text_mrkdwn::{RichTextBlock, render_block};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::http::{HttpClient, HttpRequest};

/// Validated `run` inputs.
#[derive(Debug, Clone, Deserialize)]
pub struct FunctionInputs {
    pub webhook: String,
    pub message: Vec<RichTextBlock>,
}

/// Serialize a value to JSON bytes, returning `{}` on failure.
pub(crate) fn json_bytes<T: Serialize>(value: &T) -> Vec<u8> {
    serde_json::to_vec(value).unwrap_or_else(|_| b"{}".to_vec())
}

/// Run the outgoing-webhook step: render the message to mrkdwn, POST it to
/// the webhook, and surface the webhook's reply.
///
/// Failures are reported as `{"ok": false, "error": ...}` envelopes; a non-2xx
/// status is a hard failure with no retry and no partial output.
pub fn handle_run(input_json: &[u8], client: &dyn HttpClient) -> Vec<u8> {
    let parsed: Value = match serde_json::from_slice(input_json) {
        Ok(val) => val,
        Err(err) => {
            return json_bytes(&json!({"ok": false, "error": format!("invalid json: {err}")}));
        }
    };

    let inputs: FunctionInputs = match serde_json::from_value(parsed) {
        Ok(inputs) => inputs,
        Err(err) => {
            return json_bytes(&json!({"ok": false, "error": format!("invalid inputs: {err}")}));
        }
    };

    if let Err(err) = validate_webhook_url(&inputs.webhook) {
        return json_bytes(&json!({"ok": false, "error": err}));
    }

    // The composer hands over a list of rich text blocks; only the first one
    // is dispatched, matching the platform's workflow-step behavior.
    let block = match inputs.message.first() {
        Some(block) => block,
        None => return json_bytes(&json!({"ok": false, "error": "message required"})),
    };
    let mrkdwn = render_block(block);

    let request = HttpRequest {
        method: "POST".into(),
        url: inputs.webhook.clone(),
        headers: vec![
            ("content-type".into(), "application/json".into()),
            ("body-type".into(), "raw".into()),
        ],
        body: Some(json_bytes(&json!({"message": mrkdwn}))),
    };

    let resp = match client.send(&request) {
        Ok(resp) => resp,
        Err(err) => {
            return json_bytes(&json!({"ok": false, "error": format!("transport error: {err}")}));
        }
    };
    if resp.status < 200 || resp.status >= 300 {
        return json_bytes(
            &json!({"ok": false, "error": format!("webhook returned status {}", resp.status)}),
        );
    }

    let body = resp.body.unwrap_or_default();
    let body_text = String::from_utf8_lossy(&body).into_owned();
    // Webhook replies are free-form. Prefer a JSON body's `message` field,
    // fall back to the raw body text.
    let response = serde_json::from_str::<Value>(&body_text)
        .ok()
        .and_then(|val| {
            val.get("message")
                .and_then(Value::as_str)
                .map(ToOwned::to_owned)
        })
        .unwrap_or(body_text);

    json_bytes(&json!({"ok": true, "response": response}))
}

pub(crate) fn validate_webhook_url(url: &str) -> Result<(), String> {
    if url.trim().is_empty() {
        return Err("webhook required".to_string());
    }
    if !(url.starts_with("http://") || url.starts_with("https://")) {
        return Err("invalid webhook: must be an absolute URL".to_string());
    }
    Ok(())
}
