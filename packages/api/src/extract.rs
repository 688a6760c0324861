// ABOUTME: Request extractors that reject through AppError
// ABOUTME: Wraps axum's Json and Path so bad bodies and path params share the API error shape

use axum::{
    extract::{rejection::JsonRejection, FromRequest, FromRequestParts, Request},
    http::header::CONTENT_TYPE,
};

use crate::error::AppError;

/// JSON body. Requires `Content-Type: application/json`; unknown fields are
/// rejected by the target type's `deny_unknown_fields`.
///
/// A request with no `Content-Type` at all is malformed (400). One that names
/// some other media type is unsupported (415).
#[derive(Debug)]
pub struct ValidJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidJson<T>
where
    axum::Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let has_content_type = req
            .headers()
            .get(CONTENT_TYPE)
            .is_some_and(|value| !value.is_empty());

        match axum::Json::<T>::from_request(req, state).await {
            Ok(axum::Json(value)) => Ok(Self(value)),
            Err(JsonRejection::MissingJsonContentType(_)) if !has_content_type => Err(
                AppError::validation("missing `Content-Type: application/json` header"),
            ),
            Err(rejection) => Err(rejection.into()),
        }
    }
}

/// Typed path parameters; a parse failure becomes a 400.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct ValidPath<T>(pub T);
