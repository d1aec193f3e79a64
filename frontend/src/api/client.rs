use reqwest::{Client, Response};

use crate::{api::types::*, config};

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: Some(base_url.into()),
        }
    }

    async fn resolved_base_url(&self) -> String {
        if let Some(base) = &self.base_url {
            base.clone()
        } else {
            config::await_api_base_url().await
        }
    }

    async fn send(&self, request: reqwest::RequestBuilder) -> Result<Response, ApiError> {
        let request = request
            .build()
            .map_err(|e| ApiError::unknown(format!("Invalid request: {}", e)))?;

        if let Some(mocked) = mocked_response(&request) {
            return mocked;
        }

        self.client
            .execute(request)
            .await
            .map_err(|e| ApiError::network(format!("Request failed: {}", e)))
    }

    pub async fn get_user(&self, id: i64) -> Result<User, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(self.client.get(format!("{}/users/{}", base_url, id)))
            .await?;

        let status = response.status();
        if status.is_success() {
            response
                .json()
                .await
                .map_err(|e| ApiError::parse(format!("Failed to parse response: {}", e)))
        } else {
            Err(error_from_response(response).await)
        }
    }
}

async fn error_from_response(response: Response) -> ApiError {
    let status = response.status().as_u16();
    let body = response.text().await.unwrap_or_default();
    serde_json::from_str::<ApiError>(&body).unwrap_or_else(|_| ApiError::http_status(status))
}

#[cfg(not(all(test, not(target_arch = "wasm32"))))]
fn mocked_response(_request: &reqwest::Request) -> Option<Result<Response, ApiError>> {
    None
}

#[cfg(all(test, not(target_arch = "wasm32")))]
fn mocked_response(request: &reqwest::Request) -> Option<Result<Response, ApiError>> {
    let responder = mock_transport::find_mock(request.url().as_str())?;
    Some(
        responder
            .respond(request)
            .and_then(MockResponse::into_response),
    )
}

#[cfg(all(test, not(target_arch = "wasm32")))]
pub use mock_transport::{register_mock, MockResponse, TestResponder};
