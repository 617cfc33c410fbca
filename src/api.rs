use async_trait::async_trait;
use reqwest::{Method, Response};
use serde_json::Value;

use crate::{error::ApiError, schema::TaskSchema};

/// The four calls the task list makes against the backend resource.
///
/// `list` hands back raw JSON: whether the payload is usable as a task
/// list is the caller's decision.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskApi: Send + Sync {
    /// `GET /tarefa`
    async fn list(&self) -> Result<Value, ApiError>;

    /// `POST /tarefa`
    async fn create(&self, body: &TaskSchema) -> Result<(), ApiError>;

    /// `PUT /tarefa/{id}`
    async fn update(&self, id: i64, body: &TaskSchema) -> Result<(), ApiError>;

    /// `DELETE /tarefa/{id}`
    async fn delete(&self, id: i64) -> Result<(), ApiError>;
}

/// `TaskApi` over HTTP, rooted at the resource URL (e.g.
/// `http://localhost:8080/tarefa`).
#[derive(Debug, Clone)]
pub struct HttpTaskApi {
    http: reqwest::Client,
    base_url: String,
}

impl HttpTaskApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn item_url(&self, id: i64) -> String {
        format!("{}/{}", self.base_url, id)
    }

    // Writes are fire-and-refresh: a non-success status is logged, never
    // turned into an error.
    async fn send_write(
        &self,
        method: Method,
        url: String,
        body: Option<&TaskSchema>,
    ) -> Result<(), ApiError> {
        let mut request = self.http.request(method.clone(), &url);
        if let Some(body) = body {
            request = request.json(body);
        }
        let response = send(request, &url).await?;
        if !response.status().is_success() {
            tracing::warn!(%method, %url, status = %response.status(), "write was not accepted");
        }
        Ok(())
    }
}

async fn send(request: reqwest::RequestBuilder, url: &str) -> Result<Response, ApiError> {
    request.send().await.map_err(|source| ApiError::Transport {
        url: url.to_string(),
        source,
    })
}

#[async_trait]
impl TaskApi for HttpTaskApi {
    async fn list(&self) -> Result<Value, ApiError> {
        let url = self.base_url.clone();
        let response = send(self.http.get(&url), &url).await?;
        let bytes = response
            .bytes()
            .await
            .map_err(|source| ApiError::Transport { url, source })?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    async fn create(&self, body: &TaskSchema) -> Result<(), ApiError> {
        self.send_write(Method::POST, self.base_url.clone(), Some(body))
            .await
    }

    async fn update(&self, id: i64, body: &TaskSchema) -> Result<(), ApiError> {
        self.send_write(Method::PUT, self.item_url(id), Some(body))
            .await
    }

    async fn delete(&self, id: i64) -> Result<(), ApiError> {
        self.send_write(Method::DELETE, self.item_url(id), None).await
    }
}
