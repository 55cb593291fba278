// Pulse API HTTP client.
// Builds requests from a base address, serializes JSON bodies, and maps
// transport and status failures onto the closed error taxonomy.

use log::debug;
use reqwest::{
    Client, Method, Response, StatusCode, Url,
    header::{ACCEPT, HeaderMap, HeaderValue, USER_AGENT},
};
use serde::{Serialize, de::DeserializeOwned};

use crate::error::{ApiError, Result};

const CLIENT_USER_AGENT: &str = "pulse-client";

/// Default page size for paginated endpoints.
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// HTTP client for the Pulse REST API.
///
/// Stateless beyond the pooled connection: every call builds a URL from
/// the base address and maps the response through [`check_response`].
#[derive(Debug)]
pub struct ApiClient {
    client: Client,
    base_url: Url,
}

impl ApiClient {
    /// Create a client for the given base address.
    pub fn new(base_url: &str) -> Result<Self> {
        let base_url =
            Url::parse(base_url).map_err(|_| ApiError::InvalidUrl(base_url.to_string()))?;

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(USER_AGENT, HeaderValue::from_static(CLIENT_USER_AGENT));

        let client = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(ApiError::NetworkUnavailable)?;

        Ok(Self { client, base_url })
    }

    /// Make a GET request and decode the JSON response.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let response = self.send(Method::GET, path, &[], None).await?;
        decode_body(response).await
    }

    /// Make a GET request with ordered query parameters.
    pub async fn get_with_params<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<T> {
        let response = self.send(Method::GET, path, params, None).await?;
        decode_body(response).await
    }

    /// Make a POST request with a JSON body and decode the response.
    pub async fn post<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T> {
        let payload = serde_json::to_vec(body).map_err(ApiError::Encoding)?;
        let response = self.send(Method::POST, path, &[], Some(payload)).await?;
        decode_body(response).await
    }

    /// Make a POST request with no body, discarding the response payload.
    pub async fn post_empty(&self, path: &str) -> Result<()> {
        self.send(Method::POST, path, &[], None).await?;
        Ok(())
    }

    /// Make a PUT request with a JSON body and decode the response.
    pub async fn put<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T> {
        let payload = serde_json::to_vec(body).map_err(ApiError::Encoding)?;
        let response = self.send(Method::PUT, path, &[], Some(payload)).await?;
        decode_body(response).await
    }

    /// Make a DELETE request, discarding the response payload.
    pub async fn delete(&self, path: &str) -> Result<()> {
        self.send(Method::DELETE, path, &[], None).await?;
        Ok(())
    }

    /// Send a raw body with an explicit content type (media uploads).
    pub async fn post_raw<T: DeserializeOwned>(
        &self,
        path: &str,
        content_type: &str,
        body: Vec<u8>,
    ) -> Result<T> {
        let url = self.build_url(path, &[])?;
        debug!("POST {} ({} bytes)", url, body.len());

        let response = self
            .client
            .post(url)
            .header(reqwest::header::CONTENT_TYPE, content_type)
            .body(body)
            .send()
            .await
            .map_err(ApiError::NetworkUnavailable)?;

        let response = check_response(response)?;
        decode_body(response).await
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        params: &[(&str, String)],
        body: Option<Vec<u8>>,
    ) -> Result<Response> {
        let url = self.build_url(path, params)?;
        debug!("{} {}", method, url);

        let mut request = self.client.request(method, url);
        if let Some(payload) = body {
            request = request
                .header(reqwest::header::CONTENT_TYPE, "application/json")
                .body(payload);
        }

        let response = request.send().await.map_err(ApiError::NetworkUnavailable)?;
        check_response(response)
    }

    fn build_url(&self, path: &str, params: &[(&str, String)]) -> Result<Url> {
        let mut url = self
            .base_url
            .join(path.trim_start_matches('/'))
            .map_err(|_| ApiError::InvalidUrl(format!("{}{}", self.base_url, path)))?;

        if !params.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in params {
                pairs.append_pair(key, value);
            }
        }

        Ok(url)
    }
}

/// Check response status and convert failures to typed errors.
fn check_response(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    match status {
        StatusCode::UNAUTHORIZED => Err(ApiError::Unauthorized),
        StatusCode::FORBIDDEN => Err(ApiError::Forbidden),
        StatusCode::NOT_FOUND => Err(ApiError::NotFound(response.url().to_string())),
        status if status.is_server_error() => Err(ApiError::ServerError(status.as_u16())),
        status => Err(ApiError::InvalidResponse(status.as_u16())),
    }
}

/// Decode a response body, mapping parse failures to `Decoding`.
async fn decode_body<T: DeserializeOwned>(response: Response) -> Result<T> {
    let bytes = response
        .bytes()
        .await
        .map_err(ApiError::NetworkUnavailable)?;
    serde_json::from_slice(&bytes).map_err(ApiError::Decoding)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_base_url_rejected() {
        let err = ApiClient::new("not a url").unwrap_err();
        assert!(matches!(err, ApiError::InvalidUrl(_)));
    }

    #[test]
    fn test_build_url_joins_path_and_params() {
        let client = ApiClient::new("https://api.pulse.example/").unwrap();
        let url = client
            .build_url(
                "/posts",
                &[("page", "2".to_string()), ("limit", "20".to_string())],
            )
            .unwrap();
        // Query parameter order is preserved.
        assert_eq!(url.as_str(), "https://api.pulse.example/posts?page=2&limit=20");
    }

    #[test]
    fn test_encoding_failure_short_circuits() {
        // Maps that serialize to non-string JSON keys fail up front; the
        // client must surface Encoding without issuing a request.
        let mut bad = std::collections::HashMap::new();
        bad.insert(vec![1u8], "value");
        let err = serde_json::to_vec(&bad).map_err(ApiError::Encoding).unwrap_err();
        assert!(matches!(err, ApiError::Encoding(_)));
    }
}
