use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use shared::ErrorResponse;
use log::debug;
use crate::api::{api_url, ApiError};

/// Turns a non-2xx response into `ApiError::Status`, using the API's error
/// body for the detail when it has one
pub async fn error_for_status(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        return Ok(response);
    }

    let status = response.status();
    let detail = match response.json::<ErrorResponse>().await {
        Ok(body) => body.message(),
        Err(_) => response.status_text(),
    };
    Err(ApiError::Status { status, detail })
}

/// GET `path` and decode the JSON body
pub async fn get_json<T: DeserializeOwned>(path: &str, what: &str) -> Result<T, ApiError> {
    let url = api_url(path);
    debug!("Fetching {} from {}", what, url);

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| ApiError::Transport(format!("Failed to fetch {}: {}", what, e)))?;

    error_for_status(response)
        .await?
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(format!("Failed to parse {} response: {}", what, e)))
}
