//! Shared response handling for both API clients

use reqwest::Response;
use serde::de::DeserializeOwned;

use crate::error::{ApiError, Result};

/// Decode a 2xx JSON body, or map the failure onto the error taxonomy.
pub(crate) async fn expect_json<T: DeserializeOwned>(response: Response) -> Result<T> {
    let response = check_status(response).await?;
    response
        .json()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// Read a 2xx body as plain text. The health endpoint is not JSON.
pub(crate) async fn expect_text(response: Response) -> Result<String> {
    let response = check_status(response).await?;
    Ok(response.text().await?)
}

/// Accept any 2xx with no interest in the body.
pub(crate) async fn expect_empty(response: Response) -> Result<()> {
    check_status(response).await.map(|_| ())
}

async fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let message = response.text().await.unwrap_or_default();
    Err(classify(status.as_u16(), message))
}

/// Map a non-2xx status onto the error taxonomy.
pub(crate) fn classify(status: u16, message: String) -> ApiError {
    match status {
        404 => ApiError::NotFound(message),
        400 | 422 => ApiError::Validation(message),
        _ => ApiError::Api { status, message },
    }
}
