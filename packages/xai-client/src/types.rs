//! xAI Responses API request and response types.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Server-side tool the model may call while answering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Tool {
    /// Live search over X posts.
    XSearch,
    /// General web search.
    WebSearch,
}

/// `POST /v1/responses` request body.
#[derive(Debug, Clone, Serialize)]
pub struct ResponsesRequest {
    pub model: String,

    /// The prompt.
    pub input: String,

    /// Tools enabled for this request. An empty list disables tool use.
    pub tools: Vec<Tool>,
}

impl ResponsesRequest {
    /// Request with the default tool set (`x_search`).
    pub fn new(model: impl Into<String>, input: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            input: input.into(),
            tools: vec![Tool::XSearch],
        }
    }

    /// Replace the tool set.
    pub fn tools(mut self, tools: Vec<Tool>) -> Self {
        self.tools = tools;
        self
    }

    /// Disable tool use entirely.
    pub fn without_tools(self) -> Self {
        self.tools(Vec::new())
    }
}

/// Raw response plus the text pulled out of it.
#[derive(Debug, Clone)]
pub struct XaiResponse {
    pub raw: Value,
    pub text: String,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_default_request_uses_x_search() {
        let req = ResponsesRequest::new("grok-4", "what's new?");
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({
                "model": "grok-4",
                "input": "what's new?",
                "tools": [{ "type": "x_search" }]
            })
        );
    }

    #[test]
    fn test_request_without_tools() {
        let req = ResponsesRequest::new("grok-4", "draft").without_tools();
        assert_eq!(serde_json::to_value(&req).unwrap()["tools"], json!([]));
    }

    #[test]
    fn test_web_search_tool_name() {
        assert_eq!(serde_json::to_value(Tool::WebSearch).unwrap(), json!({ "type": "web_search" }));
    }
}
