//! Outgoing Webhook workflow step.
//!
//! Renders a composer rich text message to mrkdwn and POSTs it as a JSON
//! payload to a configurable webhook URL. Rendering lives in
//! `rich-text-mrkdwn`; this crate owns the function descriptor, input
//! validation, and the HTTP dispatch.

pub mod describe;
pub mod http;
pub mod ops;

use serde_json::json;

use crate::http::HttpClient;
use crate::ops::{handle_run, json_bytes};

pub const CALLBACK_ID: &str = "outgoing_webhook";

/// Dispatch a named operation against raw JSON input bytes.
///
/// `send` is accepted as an alias for `run`; anything else yields the
/// standard `unsupported op` envelope.
pub fn invoke(op: &str, input_json: &[u8], client: &dyn HttpClient) -> Vec<u8> {
    let op = if op == "send" { "run" } else { op };
    match op {
        "run" => handle_run(input_json, client),
        other => json_bytes(&json!({"ok": false, "error": format!("unsupported op: {other}")})),
    }
}
