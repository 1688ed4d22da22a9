use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::domain::{
    common::{LLMConfig, entities::app_errors::CoreError},
    food_analysis::{ports::LLMClient, value_objects::ImagePayload},
};

pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";

#[derive(Debug, Clone)]
pub struct GeminiLLMClient {
    api_key: String,
    model_name: String,
    base_url: String,
    client: Client,
}

#[derive(Debug, Serialize)]
struct GeminiRequest {
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
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

#[derive(Debug, Serialize)]
struct GenerationConfig {
    response_mime_type: String,
    response_schema: serde_json::Value,
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: ContentResponse,
}

#[derive(Debug, Deserialize)]
struct ContentResponse {
    #[serde(default)]
    parts: Vec<PartResponse>,
}

#[derive(Debug, Deserialize)]
struct PartResponse {
    #[serde(default)]
    text: Option<String>,
}

impl GeminiLLMClient {
    pub fn new(api_key: String, model_name: String) -> Self {
        Self {
            api_key,
            model_name,
            base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
            client: Client::new(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.base_url, self.model_name, self.api_key
        )
    }

    fn json_request(parts: Vec<Part>, response_schema: serde_json::Value) -> GeminiRequest {
        GeminiRequest {
            contents: vec![Content { parts }],
            generation_config: Some(GenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema,
            }),
        }
    }

    async fn call_gemini_api(&self, request: GeminiRequest) -> Result<String, CoreError> {
        let response = self
            .client
            .post(self.endpoint())
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                // the request url carries the api key
                let e = e.without_url();
                tracing::error!("Gemini API request failed: {}", e);
                CoreError::ExternalServiceError(format!("LLM API error: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("Gemini API error: {} - {}", status, error_text);
            return Err(CoreError::ExternalServiceError(format!(
                "LLM API returned error: {} - {}",
                status, error_text
            )));
        }

        let gemini_response: GeminiResponse = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse Gemini response: {}", e);
            CoreError::ExternalServiceError(format!("Failed to parse LLM response: {}", e))
        })?;

        first_text(gemini_response)
            .ok_or_else(|| CoreError::ExternalServiceError("No response from LLM".to_string()))
    }
}

/// Text of the first part of the first candidate that carries any.
fn first_text(response: GeminiResponse) -> Option<String> {
    response
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content.parts.into_iter().find_map(|p| p.text))
}

impl From<&LLMConfig> for GeminiLLMClient {
    fn from(config: &LLMConfig) -> Self {
        GeminiLLMClient::new(config.gemini_api_key.clone(), config.gemini_model.clone())
            .with_base_url(config.gemini_base_url.clone())
    }
}

impl LLMClient for GeminiLLMClient {
    async fn generate_with_image(
        &self,
        prompt: String,
        image: ImagePayload,
        response_schema: serde_json::Value,
    ) -> Result<String, CoreError> {
        let request = Self::json_request(
            vec![
                Part::Text { text: prompt },
                Part::InlineData {
                    inline_data: InlineData {
                        mime_type: image.mime_type,
                        data: image.data,
                    },
                },
            ],
            response_schema,
        );

        self.call_gemini_api(request).await
    }

    async fn generate_with_text(
        &self,
        prompt: String,
        response_schema: serde_json::Value,
    ) -> Result<String, CoreError> {
        let request = Self::json_request(vec![Part::Text { text: prompt }], response_schema);

        self.call_gemini_api(request).await
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use tokio::{
        io::{AsyncReadExt, AsyncWriteExt},
        net::TcpListener,
    };

    use super::*;

    #[test]
    fn image_request_carries_inline_data_and_schema() {
        let image = ImagePayload::from_data_url("data:image/png;base64,aGVsbG8=").unwrap();
        let request = GeminiLLMClient::json_request(
            vec![
                Part::Text {
                    text: "analise".to_string(),
                },
                Part::InlineData {
                    inline_data: InlineData {
                        mime_type: image.mime_type,
                        data: image.data,
                    },
                },
            ],
            json!({ "type": "object" }),
        );

        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(
            body,
            json!({
                "contents": [{
                    "parts": [
                        { "text": "analise" },
                        { "inline_data": { "mime_type": "image/png", "data": "aGVsbG8=" } }
                    ]
                }],
                "generation_config": {
                    "response_mime_type": "application/json",
                    "response_schema": { "type": "object" }
                }
            })
        );
    }

    #[test]
    fn endpoint_uses_model_key_and_trimmed_base_url() {
        let client = GeminiLLMClient::new("secret".to_string(), "gemini-3-flash-preview".to_string())
            .with_base_url("http://localhost:8089/");

        assert_eq!(
            client.endpoint(),
            "http://localhost:8089/v1beta/models/gemini-3-flash-preview:generateContent?key=secret"
        );
    }

    #[test]
    fn first_text_part_is_extracted_from_the_envelope() {
        let response: GeminiResponse = serde_json::from_value(json!({
            "candidates": [{
                "content": { "parts": [{ "thought": true }, { "text": "{\"ok\":true}" }] }
            }]
        }))
        .unwrap();

        assert_eq!(first_text(response).as_deref(), Some("{\"ok\":true}"));
    }

    #[test]
    fn envelope_without_candidates_has_no_text() {
        let response: GeminiResponse = serde_json::from_value(json!({})).unwrap();
        assert_eq!(first_text(response), None);
    }

    /// Answers a single HTTP request with a canned status line and body.
    async fn serve_once(status_line: &'static str, body: String) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 4096];
            loop {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);

                if let Some(end) = request.windows(4).position(|w| w == b"\r\n\r\n") {
                    let headers = String::from_utf8_lossy(&request[..end]).to_lowercase();
                    let length = headers
                        .lines()
                        .find_map(|line| line.strip_prefix("content-length:"))
                        .and_then(|value| value.trim().parse::<usize>().ok())
                        .unwrap_or(0);
                    if request.len() >= end + 4 + length {
                        break;
                    }
                }
            }

            let response = format!(
                "{}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
        });

        format!("http://{}", addr)
    }

    #[tokio::test]
    async fn successful_call_returns_the_candidate_text() {
        let envelope = json!({
            "candidates": [{ "content": { "parts": [{ "text": "{\"healthStatus\":\"ok\"}" }] } }]
        });
        let base_url = serve_once("HTTP/1.1 200 OK", envelope.to_string()).await;
        let client = GeminiLLMClient::new("secret".to_string(), "model".to_string())
            .with_base_url(base_url);

        let text = client
            .generate_with_text("oi".to_string(), json!({}))
            .await
            .unwrap();

        assert_eq!(text, "{\"healthStatus\":\"ok\"}");
    }

    #[tokio::test]
    async fn non_success_status_is_an_external_service_error() {
        let base_url = serve_once(
            "HTTP/1.1 429 Too Many Requests",
            json!({ "error": { "message": "quota exceeded" } }).to_string(),
        )
        .await;
        let client = GeminiLLMClient::new("secret".to_string(), "model".to_string())
            .with_base_url(base_url);

        let err = client
            .generate_with_text("oi".to_string(), json!({}))
            .await
            .unwrap_err();

        assert!(
            matches!(&err, CoreError::ExternalServiceError(msg) if msg.contains("429") && msg.contains("quota exceeded")),
            "unexpected error: {err:?}"
        );
    }

    #[tokio::test]
    async fn unreachable_service_is_an_external_service_error() {
        let client = GeminiLLMClient::new("secret".to_string(), "model".to_string())
            .with_base_url("http://127.0.0.1:9");

        let err = client
            .generate_with_text("oi".to_string(), json!({}))
            .await
            .unwrap_err();

        assert!(matches!(err, CoreError::ExternalServiceError(msg) if !msg.contains("secret")));
    }
}
