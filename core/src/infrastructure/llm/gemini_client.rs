use base64::{Engine as _, engine::general_purpose};
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::domain::{
    common::{VisionConfig, entities::app_errors::CoreError},
    product_analysis::ports::ProductNameExtractor,
};

const PRODUCT_NAME_PROMPT: &str =
    "Return the product name shown in the image. Return only the cleaned product name nothing else.";

#[derive(Debug, Clone)]
pub struct GeminiProductNameExtractor {
    api_key: String,
    model_name: String,
    default_mime_type: String,
    base_url: String,
    client: Client,
}

#[derive(Debug, Serialize)]
struct GeminiRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum Part {
    Text { text: String },
    InlineData { inline_data: InlineData },
}

#[derive(Debug, Serialize)]
struct InlineData {
    mime_type: String,
    data: String,
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<ContentResponse>,
}

#[derive(Debug, Deserialize)]
struct ContentResponse {
    #[serde(default)]
    parts: Vec<PartResponse>,
}

#[derive(Debug, Deserialize)]
struct PartResponse {
    #[serde(default)]
    text: String,
}

impl GeminiProductNameExtractor {
    pub fn new(config: &VisionConfig) -> Self {
        Self {
            api_key: config.gemini_api_key.clone(),
            model_name: config.gemini_model.clone(),
            default_mime_type: config.image_mime_type.clone(),
            base_url: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            client: Client::new(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn generate_content_url(&self) -> String {
        format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url.trim_end_matches('/'),
            self.model_name,
            self.api_key
        )
    }

    async fn call_gemini_api(&self, request: GeminiRequest) -> Result<String, CoreError> {
        let url = self.generate_content_url();

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Gemini API request failed: {}", e);
                CoreError::ExternalServiceError(format!("Vision API error: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("Gemini API error: {} - {}", status, error_text);
            return Err(CoreError::ExternalServiceError(format!(
                "Vision API returned error: {}",
                status
            )));
        }

        let gemini_response: GeminiResponse = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse Gemini response: {}", e);
            CoreError::ExternalServiceError(format!("Failed to parse vision response: {}", e))
        })?;

        // No candidate text means nothing was recognized, not a failure.
        Ok(gemini_response
            .candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .map(|content| {
                content
                    .parts
                    .iter()
                    .map(|p| p.text.as_str())
                    .collect::<String>()
            })
            .unwrap_or_default())
    }
}

/// Strips whitespace, wrapping quotes and markdown emphasis from a model
/// reply so only the product name remains.
pub fn clean_product_name(raw: &str) -> String {
    let mut name = raw
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .unwrap_or_default();

    loop {
        let stripped = name
            .trim_matches(|c| matches!(c, '"' | '\'' | '*' | '`' | '_'))
            .trim_end_matches('.')
            .trim();
        if stripped == name {
            break;
        }
        name = stripped;
    }

    name.to_string()
}

impl ProductNameExtractor for GeminiProductNameExtractor {
    async fn extract_product_name(
        &self,
        image_data: Vec<u8>,
        mime_type: Option<String>,
    ) -> Result<String, CoreError> {
        let base64_image = general_purpose::STANDARD.encode(&image_data);

        let request = GeminiRequest {
            contents: vec![Content {
                parts: vec![
                    Part::InlineData {
                        inline_data: InlineData {
                            mime_type: mime_type.unwrap_or_else(|| self.default_mime_type.clone()),
                            data: base64_image,
                        },
                    },
                    Part::Text {
                        text: PRODUCT_NAME_PROMPT.to_string(),
                    },
                ],
            }],
        };

        let raw = self.call_gemini_api(request).await?;
        Ok(clean_product_name(&raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cleans_quotes_and_emphasis() {
        assert_eq!(clean_product_name("  \"Diet Cola\"\n"), "Diet Cola");
        assert_eq!(clean_product_name("**Nutella Hazelnut Spread**."), "Nutella Hazelnut Spread");
        assert_eq!(clean_product_name("Diet Cola\nExtra commentary"), "Diet Cola");
    }

    #[test]
    fn trailing_period_does_not_shield_emphasis() {
        assert_eq!(clean_product_name("**Diet Cola**."), "Diet Cola");
        assert_eq!(clean_product_name("\"`Oreo Cookies`\"."), "Oreo Cookies");
        assert_eq!(clean_product_name("Dr. Pepper"), "Dr. Pepper");
    }

    #[test]
    fn generate_content_url_joins_base_and_model() {
        let extractor = GeminiProductNameExtractor::new(&VisionConfig {
            gemini_api_key: "gm-test".to_string(),
            gemini_model: "gemini-2.0-flash-exp".to_string(),
            image_mime_type: "image/jpeg".to_string(),
        })
        .with_base_url("http://localhost:9000/v1beta/");

        assert_eq!(
            extractor.generate_content_url(),
            "http://localhost:9000/v1beta/models/gemini-2.0-flash-exp:generateContent?key=gm-test"
        );
    }

    #[test]
    fn empty_reply_stays_empty() {
        assert_eq!(clean_product_name(""), "");
        assert_eq!(clean_product_name("  \n"), "");
    }

    #[test]
    fn inline_image_part_uses_gemini_field_names() {
        let part = Part::InlineData {
            inline_data: InlineData {
                mime_type: "image/heic".to_string(),
                data: "AAA=".to_string(),
            },
        };

        let value = serde_json::to_value(part).unwrap();
        assert_eq!(value["inline_data"]["mime_type"], "image/heic");
    }

    #[test]
    fn response_without_candidates_parses() {
        let parsed: GeminiResponse = serde_json::from_str(r#"{"promptFeedback": {}}"#).unwrap();
        assert!(parsed.candidates.is_empty());
    }
}
