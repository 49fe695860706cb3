//! Gemini REST implementation of the provider contract.

use std::path::Path;

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Response};
use serde::Deserialize;
use tracing::debug;

use crate::provider::{GenAiProvider, DEFAULT_PROMPT};
use crate::response::{number_response_schema, NumberResponse};
use crate::{GenAiError, Result};

const BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Gemini provider: file media upload followed by schema-constrained
/// content generation.
pub struct GeminiProvider {
    client: Client,
    api_key: String,
    model: String,
    prompt: String,
}

impl GeminiProvider {
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            model: model.into(),
            prompt: DEFAULT_PROMPT.to_string(),
        }
    }

    /// Replace the built-in extraction prompt.
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Upload the PDF to the file API and return its file URI.
    async fn upload_pdf(&self, path: &Path) -> Result<String> {
        let data = std::fs::read(path)?;
        debug!("Uploading {} ({} bytes)", path.display(), data.len());

        let url = format!(
            "{}/upload/v1beta/files?uploadType=media&key={}",
            BASE_URL, self.api_key
        );
        let response = self
            .client
            .post(&url)
            .header(CONTENT_TYPE, "application/pdf")
            .body(data)
            .send()
            .await?;
        let response = check_status(response).await?;

        let upload: FileUploadResponse = response.json().await?;
        debug!("Uploaded as {}", upload.file.uri);
        Ok(upload.file.uri)
    }

    /// Ask the model for the largest number, constrained to the response
    /// schema, and return the generated JSON text.
    async fn generate(&self, file_uri: &str) -> Result<String> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            BASE_URL, self.model, self.api_key
        );
        let body = serde_json::json!({
            "contents": [{
                "parts": [
                    { "file_data": { "mime_type": "application/pdf", "file_uri": file_uri } },
                    { "text": self.prompt },
                ]
            }],
            "generationConfig": {
                "response_mime_type": "application/json",
                "response_schema": number_response_schema(),
            }
        });

        let response = self.client.post(&url).json(&body).send().await?;
        let response = check_status(response).await?;

        let generated: GenerateContentResponse = response.json().await?;
        first_text(generated)
            .ok_or_else(|| GenAiError::InvalidResponse("reply contained no text part".to_string()))
    }
}

#[async_trait]
impl GenAiProvider for GeminiProvider {
    async fn largest_number(&self, pdf_path: &Path) -> Result<NumberResponse> {
        let file_uri = self.upload_pdf(pdf_path).await?;
        let text = self.generate(&file_uri).await?;

        serde_json::from_str(&text)
            .map_err(|e| GenAiError::InvalidResponse(format!("schema mismatch: {}", e)))
    }
}

async fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let message = response.text().await.unwrap_or_default();
    Err(GenAiError::Api {
        status: status.as_u16(),
        message,
    })
}

/// The first text part of the first candidate, if any.
fn first_text(response: GenerateContentResponse) -> Option<String> {
    response
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content.parts.into_iter().find_map(|p| p.text))
}

#[derive(Debug, Deserialize)]
struct FileUploadResponse {
    file: UploadedFile,
}

#[derive(Debug, Deserialize)]
struct UploadedFile {
    uri: String,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}
