use reqwest::{multipart, Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::{api::types::*, config};

#[derive(Clone, Default)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
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

    pub(crate) async fn resolved_base_url(&self) -> String {
        if let Some(base) = &self.base_url {
            base.clone()
        } else {
            config::await_api_base_url().await
        }
    }

    pub(crate) fn http_client(&self) -> &Client {
        &self.client
    }

    async fn url(&self, path: &str) -> String {
        let base_url = self.resolved_base_url().await;
        format!("{}{}", base_url.trim_end_matches('/'), path)
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.url(path).await;
        log::debug!("GET {}", url);
        let response = self
            .http_client()
            .get(&url)
            .send()
            .await
            .map_err(ApiClient::map_transport_failure)?;
        ApiClient::map_json_response(response).await
    }

    /// Posts `payload` as `multipart/form-data`. Only `201 Created` counts as
    /// success; any other status is returned as an error.
    pub(crate) async fn post_multipart(
        &self,
        path: &str,
        payload: SubmissionPayload,
    ) -> Result<Value, ApiError> {
        let url = self.url(path).await;
        for (name, value) in &payload.fields {
            log::debug!("{}: {}", name, value);
        }
        if let Some((name, file)) = &payload.file {
            log::debug!("{}: {:?}", name, file);
        }
        let form = build_multipart(payload)?;
        let response = self
            .http_client()
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(ApiClient::map_transport_failure)?;
        ApiClient::map_created_response(response).await
    }

    async fn map_json_response<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        let status = response.status();
        if status.is_success() {
            response
                .json()
                .await
                .map_err(|e| ApiError::unknown(format!("Failed to parse response: {}", e)))
        } else {
            Err(ApiClient::map_error_response(status, response).await)
        }
    }

    async fn map_created_response(response: Response) -> Result<Value, ApiError> {
        let status = response.status();
        if status == StatusCode::CREATED {
            let body = response
                .text()
                .await
                .map_err(ApiClient::map_error_payload_parse_failure)?;
            log::debug!("status: {}, data: {}", status, body);
            if body.trim().is_empty() {
                return Ok(Value::Null);
            }
            serde_json::from_str(&body)
                .map_err(|e| ApiError::unknown(format!("Failed to parse response: {}", e)))
        } else if status.is_success() {
            Err(ApiError::http_status(
                status.as_u16(),
                format!("Unexpected response status: {}", status),
            ))
        } else {
            Err(ApiClient::map_error_response(status, response).await)
        }
    }

    async fn map_error_response(status: StatusCode, response: Response) -> ApiError {
        match response.text().await {
            Ok(body) => error_from_body(status, &body),
            Err(err) => ApiClient::map_error_payload_parse_failure(err),
        }
    }

    fn map_transport_failure(err: reqwest::Error) -> ApiError {
        ApiError::request_failed(format!("Request failed: {}", err))
    }

    fn map_error_payload_parse_failure(err: reqwest::Error) -> ApiError {
        ApiError::unknown(format!("Failed to parse error: {}", err))
    }
}

fn error_from_body(status: StatusCode, body: &str) -> ApiError {
    let fallback = || {
        ApiError::http_status(
            status.as_u16(),
            format!("Request failed with status {}", status),
        )
    };
    let Ok(value) = serde_json::from_str::<Value>(body) else {
        return fallback();
    };
    if value.get("errors").is_some_and(Value::is_object) {
        return ApiError::validation("Validation failed").with_details(value);
    }
    match serde_json::from_value::<ApiError>(value.clone()) {
        Ok(error) => error,
        Err(_) => fallback().with_details(value),
    }
}

fn build_multipart(payload: SubmissionPayload) -> Result<multipart::Form, ApiError> {
    let mut form = multipart::Form::new();
    for (name, value) in payload.fields {
        form = form.text(name, value.to_string());
    }
    if let Some((name, file)) = payload.file {
        let mut part = multipart::Part::bytes(file.bytes).file_name(file.file_name);
        if !file.mime_type.is_empty() {
            part = part
                .mime_str(&file.mime_type)
                .map_err(|e| ApiError::validation(format!("Invalid file type: {}", e)))?;
        }
        form = form.part(name, part);
    }
    Ok(form)
}
