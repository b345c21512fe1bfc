use crate::domain::product_analysis::{
    instructions::{
        PREFERENCE_AGENT_INSTRUCTIONS, RECOMMENDER_AGENT_INSTRUCTIONS, SCORER_AGENT_INSTRUCTIONS,
        WEB_SEARCH_AGENT_INSTRUCTIONS,
    },
    schema::{
        get_preference_update_schema, get_recommendation_schema, get_scoring_schema,
        get_web_search_schema,
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgentTool {
    WebSearch,
    /// Write access to the preference store.
    PreferenceStore,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolChoice {
    Auto,
    /// At least one tool call must happen before the final output.
    Required,
}

impl ToolChoice {
    pub fn as_str(&self) -> &str {
        match self {
            ToolChoice::Auto => "auto",
            ToolChoice::Required => "required",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageOutput {
    WebSearchResult,
    ScoringResult,
    RecommendationResult,
    PreferenceUpdate,
}

impl StageOutput {
    pub fn schema_name(&self) -> &str {
        match self {
            StageOutput::WebSearchResult => "web_search_result",
            StageOutput::ScoringResult => "scoring_result",
            StageOutput::RecommendationResult => "recommendation_result",
            StageOutput::PreferenceUpdate => "preference_update",
        }
    }

    pub fn json_schema(&self) -> serde_json::Value {
        match self {
            StageOutput::WebSearchResult => get_web_search_schema(),
            StageOutput::ScoringResult => get_scoring_schema(),
            StageOutput::RecommendationResult => get_recommendation_schema(),
            StageOutput::PreferenceUpdate => get_preference_update_schema(),
        }
    }
}

/// Fixed configuration of one pipeline stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgentDefinition {
    pub name: &'static str,
    pub instructions: &'static str,
    pub tools: &'static [AgentTool],
    pub output: StageOutput,
    pub tool_choice: ToolChoice,
}

impl AgentDefinition {
    pub fn allows(&self, tool: AgentTool) -> bool {
        self.tools.contains(&tool)
    }

    pub fn requires_tool_call(&self) -> bool {
        self.tool_choice == ToolChoice::Required
    }
}

pub const WEB_SEARCH_AGENT: AgentDefinition = AgentDefinition {
    name: "WebSearchAgent",
    instructions: WEB_SEARCH_AGENT_INSTRUCTIONS,
    tools: &[AgentTool::WebSearch],
    output: StageOutput::WebSearchResult,
    tool_choice: ToolChoice::Required,
};

pub const SCORER_AGENT: AgentDefinition = AgentDefinition {
    name: "ScorerAgent",
    instructions: SCORER_AGENT_INSTRUCTIONS,
    tools: &[],
    output: StageOutput::ScoringResult,
    tool_choice: ToolChoice::Auto,
};

pub const RECOMMENDER_AGENT: AgentDefinition = AgentDefinition {
    name: "RecommenderAgent",
    instructions: RECOMMENDER_AGENT_INSTRUCTIONS,
    tools: &[AgentTool::WebSearch],
    output: StageOutput::RecommendationResult,
    tool_choice: ToolChoice::Required,
};

// The store write is carried by the structured output and committed by the
// orchestrator, so no remote tool call is required.
pub const PREFERENCE_AGENT: AgentDefinition = AgentDefinition {
    name: "PreferenceAgent",
    instructions: PREFERENCE_AGENT_INSTRUCTIONS,
    tools: &[AgentTool::PreferenceStore],
    output: StageOutput::PreferenceUpdate,
    tool_choice: ToolChoice::Auto,
};

pub fn registry() -> [AgentDefinition; 4] {
    [
        WEB_SEARCH_AGENT,
        SCORER_AGENT,
        RECOMMENDER_AGENT,
        PREFERENCE_AGENT,
    ]
}
