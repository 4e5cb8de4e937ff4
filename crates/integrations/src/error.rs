/// Errors from the external API layer.
#[derive(Debug, thiserror::Error)]
pub enum IntegrationError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The upstream service returned a non-2xx status code.
    #[error("Upstream API error ({status}): {body}")]
    ApiError {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// The service answered but reported a failure or an unusable payload.
    #[error("Upstream returned no usable result: {0}")]
    Unusable(String),
}

/// Return the response unchanged on a 2xx status, otherwise an
/// [`IntegrationError::ApiError`] carrying the status and body text.
pub(crate) async fn ensure_success(
    response: reqwest::Response,
) -> Result<reqwest::Response, IntegrationError> {
    let status = response.status();
    if !status.is_success() {
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "<unreadable body>".to_string());
        return Err(IntegrationError::ApiError {
            status: status.as_u16(),
            body,
        });
    }
    Ok(response)
}
