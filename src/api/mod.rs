//! HTTP client for the exams API. One `ApiClient` is provided through
//! context at the composition root and cloned into the tasks that need it.

use crate::models::{Category, ExamSummary, NewQuestion};

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The server answered with a non-success status.
    #[error("servidor respondeu {0}")]
    Status(reqwest::StatusCode),
    /// The request never completed (DNS, connection, abort).
    #[error("falha de rede: {0}")]
    Transport(#[from] reqwest::Error),
}

#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        ApiClient { base_url, http: reqwest::Client::new() }
    }

    /// Base URL baked in at build time, localhost fallback for dev.
    pub fn from_env() -> Self {
        ApiClient::new(option_env!("API_URL").unwrap_or("http://localhost:3333"))
    }

    pub async fn fetch_categories(&self) -> Result<Vec<Category>, ApiError> {
        let response = self
            .http
            .get(format!("{}/categories", self.base_url))
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(ApiError::Status(response.status()));
        }
        Ok(response.json().await?)
    }

    pub async fn fetch_exams(&self) -> Result<Vec<ExamSummary>, ApiError> {
        let response = self
            .http
            .get(format!("{}/exams", self.base_url))
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(ApiError::Status(response.status()));
        }
        Ok(response.json().await?)
    }

    pub async fn create_question(&self, question: &NewQuestion) -> Result<(), ApiError> {
        let response = self
            .http
            .post(format!("{}/questions", self.base_url))
            .json(question)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(ApiError::Status(response.status()));
        }
        Ok(())
    }

    pub async fn delete_exam(&self, id: &str) -> Result<(), ApiError> {
        let response = self
            .http
            .delete(format!("{}/exams/{id}", self.base_url))
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(ApiError::Status(response.status()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_trimmed() {
        let client = ApiClient::new("http://localhost:3333/");
        assert_eq!(client.base_url, "http://localhost:3333");
    }
}
