use gloo_net::http::Response;
use std::collections::HashMap;

use crate::data::{AuthToken, CreatedSet, Credentials, ErrorBody, SetCreateRequest, TokenResponse};

pub const LOGIN_ENDPOINT: &str = "auth/token/login/";
pub const CREATE_SET_ENDPOINT: &str = "api/sets/create/";

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Bad request to {endpoint}")]
    BadRequest { endpoint: String, body: ErrorBody },
    #[error("Unauthorized access to {endpoint}")]
    UnauthorizedAccess { endpoint: String, body: ErrorBody },
    #[error("Forbidden access to {endpoint}")]
    ForbiddenAccess { endpoint: String, body: ErrorBody },
    #[error("{endpoint} not found")]
    NotFound { endpoint: String, body: ErrorBody },
    #[error("Internal server error at {endpoint}")]
    InternalServerError { endpoint: String, body: ErrorBody },
    #[error("Unexpected response status code: {status}")]
    UnexpectedStatusCode { status: u16, body: ErrorBody },
    #[error("Network error: {0}")]
    NetworkError(gloo_net::Error),
    #[error("Parse error: {0}")]
    ParseError(gloo_net::Error),
    #[error("Serialize error: {0}")]
    SerializeError(gloo_net::Error),
}

impl ApiError {
    /// Maps a non-2xx status onto a rejection carrying the server's error body.
    pub fn rejected(status: u16, endpoint: &str, body: ErrorBody) -> Self {
        let endpoint = endpoint.to_string();
        match status {
            400 => ApiError::BadRequest { endpoint, body },
            401 => ApiError::UnauthorizedAccess { endpoint, body },
            403 => ApiError::ForbiddenAccess { endpoint, body },
            404 => ApiError::NotFound { endpoint, body },
            500..=599 => ApiError::InternalServerError { endpoint, body },
            status => ApiError::UnexpectedStatusCode { status, body },
        }
    }

    /// The server's error body, when the server answered at all.
    pub fn rejection(&self) -> Option<&ErrorBody> {
        match self {
            ApiError::BadRequest { body, .. }
            | ApiError::UnauthorizedAccess { body, .. }
            | ApiError::ForbiddenAccess { body, .. }
            | ApiError::NotFound { body, .. }
            | ApiError::InternalServerError { body, .. }
            | ApiError::UnexpectedStatusCode { body, .. } => Some(body),
            ApiError::NetworkError(_) | ApiError::ParseError(_) | ApiError::SerializeError(_) => {
                None
            }
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ApiHeaders(HashMap<String, String>);

impl ApiHeaders {
    pub fn new() -> Self {
        Self(HashMap::new())
    }

    pub fn with_token(token: &AuthToken) -> Self {
        let mut headers = Self::new();
        headers.insert("Authorization".to_string(), token.header_value());
        headers
    }

    pub fn insert(&mut self, key: String, value: String) {
        self.0.insert(key, value);
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Per-request headers win over defaults.
    pub fn merged(&self, overrides: &ApiHeaders) -> ApiHeaders {
        let mut merged = self.clone();
        for (key, value) in &overrides.0 {
            merged.insert(key.clone(), value.clone());
        }
        merged
    }
}

impl From<ApiHeaders> for gloo_net::http::Headers {
    fn from(val: ApiHeaders) -> Self {
        let headers = gloo_net::http::Headers::new();
        for (key, value) in val.0 {
            headers.set(&key, &value);
        }
        headers
    }
}

async fn handle_response_status(response: Response, endpoint: &str) -> ApiResult<Response> {
    let status = response.status();
    if (200..=299).contains(&status) {
        return Ok(response);
    }

    // A failure body that cannot be read still counts as a rejection.
    let body = match response.text().await {
        Ok(text) => ErrorBody::from_text(&text),
        Err(_) => ErrorBody::default(),
    };
    Err(ApiError::rejected(status, endpoint, body))
}

async fn parse_json_response<T>(response: Response) -> ApiResult<T>
where
    T: serde::de::DeserializeOwned,
{
    response.json::<T>().await.map_err(ApiError::ParseError)
}

async fn handle_json_response<T>(response: Response, endpoint: &str) -> ApiResult<T>
where
    T: serde::de::DeserializeOwned,
{
    let validated_response = handle_response_status(response, endpoint).await?;
    parse_json_response(validated_response).await
}

/// Transport seam. The browser uses [`HttpApiClient`]; tests plug in a fake.
#[async_trait::async_trait(?Send)]
pub trait ApiClient {
    async fn post<T, B>(&self, endpoint: &str, body: &B, headers: &ApiHeaders) -> ApiResult<T>
    where
        T: serde::de::DeserializeOwned,
        B: serde::Serialize;
}

pub struct HttpApiClient {
    root_url: String,
    headers: ApiHeaders,
}

impl HttpApiClient {
    pub fn new(root_url: impl Into<String>) -> Self {
        Self {
            root_url: root_url.into(),
            headers: ApiHeaders::new(),
        }
    }

    pub fn set_header(&mut self, key: String, value: String) {
        self.headers.insert(key, value);
    }

    async fn post_json<B>(&self, endpoint: &str, body: &B, headers: &ApiHeaders) -> ApiResult<Response>
    where
        B: serde::Serialize,
    {
        let url = format!("{}{}", self.root_url, endpoint);

        gloo_net::http::Request::post(&url)
            .headers(self.headers.merged(headers).into())
            .json(body)
            .map_err(ApiError::SerializeError)?
            .send()
            .await
            .map_err(ApiError::NetworkError)
    }
}

#[async_trait::async_trait(?Send)]
impl ApiClient for HttpApiClient {
    async fn post<T, B>(&self, endpoint: &str, body: &B, headers: &ApiHeaders) -> ApiResult<T>
    where
        T: serde::de::DeserializeOwned,
        B: serde::Serialize,
    {
        let response = self.post_json(endpoint, body, headers).await?;
        handle_json_response(response, endpoint).await
    }
}

/// Endpoint-level calls against the flashcard API.
pub struct FlashcardApi<C = HttpApiClient> {
    client: C,
}

impl<C: ApiClient> FlashcardApi<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    pub async fn login(&self, credentials: &Credentials) -> ApiResult<TokenResponse> {
        self.client
            .post(LOGIN_ENDPOINT, credentials, &ApiHeaders::new())
            .await
    }

    pub async fn create_set(
        &self,
        token: &AuthToken,
        request: &SetCreateRequest,
    ) -> ApiResult<CreatedSet> {
        self.client
            .post(CREATE_SET_ENDPOINT, request, &ApiHeaders::with_token(token))
            .await
    }
}
