use axum::body::Bytes;
use reqwest::{Client, Url};
use serde::de::IgnoredAny;
use crate::config::Config;
use crate::error::RecipeError;
use crate::models::GenerateContentRequest;

/// Thin client for the Gemini `generateContent` endpoint.
///
/// Cloning shares the underlying connection pool.
#[derive(Clone)]
pub struct GeminiClient {
    http: Client,
    api_base_url: String,
    model: String
}

impl GeminiClient {

    pub fn new(http: Client, config: &Config) -> Self {

        GeminiClient {
            http,
            api_base_url: config.api_base_url.clone(),
            model: config.model.clone()
        }

    }

    fn endpoint(&self, api_key: &str) -> Result<Url, RecipeError> {

        let raw = format!("{}/models/{}:generateContent", self.api_base_url, self.model);
        let mut url = Url::parse(&raw)
            .map_err(|e| RecipeError::InvalidEndpoint(e.to_string()))?;
        url.query_pairs_mut().append_pair("key", api_key);

        Ok(url)

    }

    /// Sends one `generateContent` call and returns the upstream body as sent.
    pub async fn generate(
        &self,
        api_key: &str,
        payload: &GenerateContentRequest
    ) -> Result<Bytes, RecipeError> {

        let response = self.http
            .post(self.endpoint(api_key)?)
            .json(payload)
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await?;
            return Err(RecipeError::Upstream { status: status.as_u16(), body });
        }

        let body = response.bytes().await?;

        // must be JSON, but the bytes are relayed untouched
        serde_json::from_slice::<IgnoredAny>(&body)
            .map_err(RecipeError::InvalidUpstreamBody)?;

        Ok(body)

    }

}
