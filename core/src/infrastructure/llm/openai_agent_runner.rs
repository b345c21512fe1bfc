use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::domain::{
    common::{LLMConfig, entities::app_errors::CoreError},
    product_analysis::{
        agents::{AgentDefinition, AgentTool},
        ports::{AgentRun, AgentRunner},
    },
};

/// Agent runtime backed by the OpenAI Responses API.
#[derive(Debug, Clone)]
pub struct OpenAIAgentRunner {
    api_key: String,
    model: String,
    base_url: String,
    search_context_size: String,
    client: Client,
}

#[derive(Debug, Serialize)]
struct ResponsesRequest {
    model: String,
    instructions: String,
    input: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    tools: Vec<ToolSpec>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tool_choice: Option<String>,
    text: TextConfig,
}

#[derive(Debug, Serialize)]
struct ToolSpec {
    #[serde(rename = "type")]
    kind: String,
    search_context_size: String,
}

#[derive(Debug, Serialize)]
struct TextConfig {
    format: TextFormat,
}

#[derive(Debug, Serialize)]
struct TextFormat {
    #[serde(rename = "type")]
    kind: String,
    name: String,
    schema: Value,
    strict: bool,
}

#[derive(Debug, Deserialize)]
struct ResponsesResponse {
    #[serde(default)]
    output: Vec<OutputItem>,
}

#[derive(Debug, Deserialize)]
struct OutputItem {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    content: Vec<OutputContent>,
}

#[derive(Debug, Deserialize)]
struct OutputContent {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    text: String,
}

impl OpenAIAgentRunner {
    pub fn new(config: &LLMConfig) -> Self {
        Self {
            api_key: config.openai_api_key.clone(),
            model: config.openai_model.clone(),
            base_url: config.openai_base_url.clone(),
            search_context_size: config.web_search_context_size.clone(),
            client: Client::new(),
        }
    }

    fn responses_url(&self) -> String {
        let base = self.base_url.trim_end_matches('/');
        format!("{base}/responses")
    }

    fn build_request(&self, agent: &AgentDefinition, input: String) -> ResponsesRequest {
        // The preference store is written by the orchestrator, never remotely.
        let tools: Vec<ToolSpec> = agent
            .tools
            .iter()
            .filter(|tool| **tool == AgentTool::WebSearch)
            .map(|_| ToolSpec {
                kind: "web_search_preview".to_string(),
                search_context_size: self.search_context_size.clone(),
            })
            .collect();

        let tool_choice = (!tools.is_empty()).then(|| agent.tool_choice.as_str().to_string());

        ResponsesRequest {
            model: self.model.clone(),
            instructions: agent.instructions.to_string(),
            input,
            tools,
            tool_choice,
            text: TextConfig {
                format: TextFormat {
                    kind: "json_schema".to_string(),
                    name: agent.output.schema_name().to_string(),
                    schema: agent.output.json_schema(),
                    strict: true,
                },
            },
        }
    }
}

fn parse_response(response: ResponsesResponse) -> AgentRun {
    let mut output = String::new();
    let mut tool_calls = 0;

    for item in response.output {
        match item.kind.as_str() {
            "web_search_call" => tool_calls += 1,
            "message" => {
                // Only the last message carries the final output.
                output = item
                    .content
                    .iter()
                    .filter(|c| c.kind == "output_text")
                    .map(|c| c.text.as_str())
                    .collect();
            }
            _ => {}
        }
    }

    AgentRun { output, tool_calls }
}

impl AgentRunner for OpenAIAgentRunner {
    async fn run(&self, agent: AgentDefinition, input: String) -> Result<AgentRun, CoreError> {
        let request = self.build_request(&agent, input);

        debug!(
            agent = agent.name,
            model = %self.model,
            tools = request.tools.len(),
            "sending responses request"
        );

        let response = self
            .client
            .post(self.responses_url())
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("OpenAI API request failed: {}", e);
                CoreError::ExternalServiceError(format!("Agent API error: {}", e))
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!("OpenAI API error: {} - {}", status, body);
            return Err(CoreError::ExternalServiceError(format!(
                "Agent API returned error: {}",
                status
            )));
        }

        let parsed: ResponsesResponse = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse OpenAI response: {}", e);
            CoreError::ExternalServiceError(format!("Failed to parse agent response: {}", e))
        })?;

        let run = parse_response(parsed);
        debug!(
            agent = agent.name,
            tool_calls = run.tool_calls,
            "responses request completed"
        );

        Ok(run)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::product_analysis::agents::{
        PREFERENCE_AGENT, RECOMMENDER_AGENT, SCORER_AGENT, WEB_SEARCH_AGENT,
    };

    fn runner() -> OpenAIAgentRunner {
        OpenAIAgentRunner::new(&LLMConfig {
            openai_api_key: "sk-test".to_string(),
            openai_model: "gpt-4.1-mini".to_string(),
            openai_base_url: "https://api.openai.com/v1/".to_string(),
            web_search_context_size: "low".to_string(),
        })
    }

    #[test]
    fn url_has_no_double_slash() {
        assert_eq!(runner().responses_url(), "https://api.openai.com/v1/responses");
    }

    #[test]
    fn search_agents_get_the_search_tool_and_required_choice() {
        for agent in [WEB_SEARCH_AGENT, RECOMMENDER_AGENT] {
            let body = serde_json::to_value(runner().build_request(&agent, "x".into())).unwrap();

            assert_eq!(body["tools"][0]["type"], "web_search_preview");
            assert_eq!(body["tools"][0]["search_context_size"], "low");
            assert_eq!(body["tool_choice"], "required");
            assert_eq!(body["text"]["format"]["type"], "json_schema");
            assert_eq!(body["text"]["format"]["strict"], true);
        }
    }

    #[test]
    fn tool_less_agents_send_no_tools() {
        for agent in [SCORER_AGENT, PREFERENCE_AGENT] {
            let body = serde_json::to_value(runner().build_request(&agent, "x".into())).unwrap();

            assert!(body.get("tools").is_none());
            assert!(body.get("tool_choice").is_none());
            assert_eq!(body["text"]["format"]["name"], agent.output.schema_name());
        }
    }

    #[test]
    fn counts_search_calls_and_collects_output_text() {
        let raw = serde_json::json!({
            "id": "resp_1",
            "output": [
                { "type": "web_search_call", "id": "ws_1", "status": "completed" },
                { "type": "web_search_call", "id": "ws_2", "status": "completed" },
                {
                    "type": "message",
                    "role": "assistant",
                    "content": [
                        { "type": "output_text", "text": "{\"ingredients\":", "annotations": [] },
                        { "type": "output_text", "text": "[]}", "annotations": [] }
                    ]
                }
            ]
        });

        let run = parse_response(serde_json::from_value(raw).unwrap());
        assert_eq!(run.tool_calls, 2);
        assert_eq!(run.output, "{\"ingredients\":[]}");
    }

    #[test]
    fn refusal_yields_empty_output() {
        let raw = serde_json::json!({
            "output": [{
                "type": "message",
                "content": [{ "type": "refusal", "refusal": "no" }]
            }]
        });

        let run = parse_response(serde_json::from_value(raw).unwrap());
        assert_eq!(run.tool_calls, 0);
        assert!(run.output.is_empty());
    }
}
