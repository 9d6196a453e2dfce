use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// Wrapper turning any error into a 500 response carrying the error text.
///
/// Mutating routes swallow and log store failures instead; this is only the
/// failure path of the rendered index page.
pub struct AppError(pub anyhow::Error);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (StatusCode::INTERNAL_SERVER_ERROR, format!("Error: {}", self.0)).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
