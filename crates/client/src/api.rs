//! HTTP client for the garage API.

use std::collections::HashMap;
use std::time::Duration;

use backon::{ExponentialBuilder, Retryable};
use db::{
    models::rendezvous::{CreateRendezvous, Rendezvous},
    validation::ValidationError,
};
use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;
use tracing::warn;
use utils::response::ApiResponse;

#[derive(Debug, Clone, Error)]
pub enum ClientError {
    #[error("network error: {0}")]
    Transport(String),
    #[error("timeout")]
    Timeout,
    #[error("http {status}: {body}")]
    Http { status: u16, body: String },
    #[error("record not found")]
    NotFound,
    #[error("api error: {0}")]
    Api(String),
    #[error("json error: {0}")]
    Serde(String),
    #[error("invalid url: {0}")]
    Url(String),
    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

impl ClientError {
    /// Transient failures worth retrying; everything else fails fast.
    pub fn should_retry(&self) -> bool {
        match self {
            Self::Transport(_) | Self::Timeout => true,
            Self::Http { status, .. } => (500..=599).contains(status),
            _ => false,
        }
    }

    fn from_reqwest(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else {
            Self::Transport(err.to_string())
        }
    }
}

pub struct ApiClient {
    base_url: Url,
    http: Client,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let base_url = Url::parse(base_url).map_err(|e| ClientError::Url(e.to_string()))?;
        let http = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .map_err(ClientError::from_reqwest)?;
        Ok(Self { base_url, http })
    }

    fn url(&self, path: &str) -> Result<Url, ClientError> {
        self.base_url
            .join(path)
            .map_err(|e| ClientError::Url(e.to_string()))
    }

    fn retry_policy() -> ExponentialBuilder {
        ExponentialBuilder::default()
            .with_min_delay(Duration::from_millis(250))
            .with_max_delay(Duration::from_secs(10))
            .with_max_times(3)
            .with_jitter()
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<ApiResponse<T>, ClientError> {
        let send = || async {
            let request = request
                .try_clone()
                .ok_or_else(|| ClientError::Transport("request not cloneable".to_string()))?;
            let response = request.send().await.map_err(ClientError::from_reqwest)?;
            Self::unwrap_response(response).await
        };

        send.retry(&Self::retry_policy())
            .when(|e: &ClientError| e.should_retry())
            .notify(|e, dur| {
                warn!(
                    "api call failed, retrying after {:.2}s: {}",
                    dur.as_secs_f64(),
                    e
                )
            })
            .await
    }

    async fn unwrap_response<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<ApiResponse<T>, ClientError> {
        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(ClientError::NotFound);
        }
        if status.is_server_error() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::Http {
                status: status.as_u16(),
                body,
            });
        }
        if status.is_client_error() {
            // Rejections such as 422 still carry the response envelope, but
            // a framework-level 4xx can answer in plain text.
            let body = response.text().await.unwrap_or_default();
            return match serde_json::from_str(&body) {
                Ok(envelope) => Ok(envelope),
                Err(_) => Err(ClientError::Http {
                    status: status.as_u16(),
                    body,
                }),
            };
        }

        response
            .json()
            .await
            .map_err(|e| ClientError::Serde(e.to_string()))
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        self.execute(self.http.get(self.url(path)?))
            .await?
            .into_result()
            .map_err(ClientError::Api)
    }

    async fn post_json<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ClientError> {
        self.execute(self.http.post(self.url(path)?).json(body))
            .await?
            .into_result()
            .map_err(ClientError::Api)
    }

    async fn put_json<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ClientError> {
        self.execute(self.http.put(self.url(path)?).json(body))
            .await?
            .into_result()
            .map_err(ClientError::Api)
    }

    async fn delete_json(&self, path: &str) -> Result<(), ClientError> {
        // The delete envelope carries no payload worth keeping.
        let envelope: ApiResponse<serde_json::Value> =
            self.execute(self.http.delete(self.url(path)?)).await?;
        if envelope.success {
            Ok(())
        } else {
            Err(ClientError::Api(
                envelope.message.unwrap_or_else(|| "unknown error".to_string()),
            ))
        }
    }

    pub async fn list_rendezvous(&self) -> Result<Vec<Rendezvous>, ClientError> {
        self.get_json("api/rendezvous").await
    }

    pub async fn rendezvous(&self, id: i64) -> Result<Rendezvous, ClientError> {
        self.get_json(&format!("api/rendezvous/{id}")).await
    }

    pub async fn create_rendezvous(
        &self,
        data: &CreateRendezvous,
    ) -> Result<Rendezvous, ClientError> {
        self.post_json("api/rendezvous", data).await
    }

    pub async fn update_rendezvous(
        &self,
        id: i64,
        data: &CreateRendezvous,
    ) -> Result<Rendezvous, ClientError> {
        self.put_json(&format!("api/rendezvous/{id}"), data).await
    }

    pub async fn delete_rendezvous(&self, id: i64) -> Result<(), ClientError> {
        self.delete_json(&format!("api/rendezvous/{id}")).await
    }

    /// Fetch a literal bundle, general or context-scoped.
    pub async fn literals(
        &self,
        lang: &str,
        context: Option<&str>,
    ) -> Result<HashMap<String, String>, ClientError> {
        let path = match context {
            Some(ctx) => format!("api/literals?lang={lang}&context={ctx}"),
            None => format!("api/literals?lang={lang}"),
        };
        self.get_json(&path).await
    }
}
