use serde::{de::DeserializeOwned, Serialize};

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{FieldErrors, Todo, TodoPayload};

const JSON_HEADER: (&str, &str) = ("content-type", "application/json");

/// Stateless client for `/api/todos`.
///
/// Every operation is a `build_*` / `parse_*` pair. The caller executes the
/// request in between.
#[derive(Debug, Clone)]
pub struct TodoClient {
    base_url: String,
}

impl TodoClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn collection_url(&self) -> String {
        format!("{}/api/todos", self.base_url)
    }

    fn item_url(&self, id: i64) -> String {
        format!("{}/api/todos/{id}", self.base_url)
    }

    pub fn build_list_todos(&self) -> HttpRequest {
        bare(HttpMethod::Get, self.collection_url())
    }

    pub fn build_get_todo(&self, id: i64) -> HttpRequest {
        bare(HttpMethod::Get, self.item_url(id))
    }

    pub fn build_create_todo(&self, input: &TodoPayload) -> Result<HttpRequest, ApiError> {
        with_json(HttpMethod::Post, self.collection_url(), input)
    }

    pub fn build_update_todo(&self, id: i64, input: &TodoPayload) -> Result<HttpRequest, ApiError> {
        with_json(HttpMethod::Put, self.item_url(id), input)
    }

    pub fn build_delete_todo(&self, id: i64) -> HttpRequest {
        bare(HttpMethod::Delete, self.item_url(id))
    }

    pub fn parse_list_todos(&self, response: HttpResponse) -> Result<Vec<Todo>, ApiError> {
        check_status(&response, 200)?;
        decode(&response.body)
    }

    pub fn parse_get_todo(&self, response: HttpResponse) -> Result<Todo, ApiError> {
        check_status(&response, 200)?;
        decode(&response.body)
    }

    pub fn parse_create_todo(&self, response: HttpResponse) -> Result<Todo, ApiError> {
        check_status(&response, 200)?;
        decode(&response.body)
    }

    pub fn parse_update_todo(&self, response: HttpResponse) -> Result<Todo, ApiError> {
        check_status(&response, 200)?;
        decode(&response.body)
    }

    pub fn parse_delete_todo(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response, 204)
    }
}

fn bare(method: HttpMethod, url: String) -> HttpRequest {
    HttpRequest {
        method,
        url,
        headers: Vec::new(),
        body: None,
    }
}

fn with_json<T: Serialize>(method: HttpMethod, url: String, input: &T) -> Result<HttpRequest, ApiError> {
    let body = serde_json::to_string(input).map_err(|e| ApiError::Serialization(e.to_string()))?;
    Ok(HttpRequest {
        method,
        url,
        headers: vec![(JSON_HEADER.0.to_string(), JSON_HEADER.1.to_string())],
        body: Some(body),
    })
}

fn decode<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Deserialization(e.to_string()))
}

/// Maps an unexpected status to the matching `ApiError`.
fn check_status(response: &HttpResponse, expected: u16) -> Result<(), ApiError> {
    if response.status == expected {
        return Ok(());
    }
    match response.status {
        404 => Err(ApiError::NotFound),
        // A malformed-body 400 carries `{"error": ...}` instead of field errors.
        400 => match serde_json::from_str::<FieldErrors>(&response.body) {
            Ok(errors) if !errors.is_empty() && !errors.contains_key("error") => {
                Err(ApiError::Validation(errors))
            }
            _ => Err(http_error(response)),
        },
        _ => Err(http_error(response)),
    }
}

fn http_error(response: &HttpResponse) -> ApiError {
    ApiError::Http {
        status: response.status,
        body: response.body.clone(),
    }
}
