//! Pulling answer text out of a Responses API payload.

use serde_json::Value;

/// Best-effort answer text.
///
/// Joins every non-blank `output[].content[].text`. Falls back to the first
/// non-blank `output_text`, `text` or `content` string at the top level, and
/// finally to the pretty-printed payload itself.
pub fn extract_text(resp: &Value) -> String {
    if let Some(output) = resp.get("output").and_then(Value::as_array) {
        let parts: Vec<&str> = output
            .iter()
            .filter_map(|item| item.get("content").and_then(Value::as_array))
            .flatten()
            .filter_map(|c| c.get("text").and_then(Value::as_str))
            .filter(|t| !t.trim().is_empty())
            .collect();

        if !parts.is_empty() {
            return parts.join("\n").trim().to_string();
        }
    }

    for key in ["output_text", "text", "content"] {
        if let Some(v) = resp.get(key).and_then(Value::as_str) {
            if !v.trim().is_empty() {
                return v.trim().to_string();
            }
        }
    }

    serde_json::to_string_pretty(resp).unwrap_or_default()
}
