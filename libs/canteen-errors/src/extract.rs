use axum::{
    Json,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
};
use serde::de::DeserializeOwned;

use crate::problem::{Problem, bad_request};

/// JSON body extractor whose rejections (missing body, wrong content type,
/// malformed or mistyped fields) all render as 400 problems.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonPayload<T>(pub T);

impl<S, T> FromRequest<S> for JsonPayload<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = Problem;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => {
                tracing::debug!(error = %rejection, "rejected request body");
                Err(bad_request(rejection.body_text()).with_code("INVALID_BODY"))
            }
        }
    }
}

/// Path extractor rendering undecodable segments (`/worker/month/abc/1`)
/// as 400 problems instead of axum's plain-text rejection.
#[derive(Debug, Clone, Copy, Default)]
pub struct PathParams<T>(pub T);

impl<S, T> FromRequestParts<S> for PathParams<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = Problem;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<T>::from_request_parts(parts, state).await {
            Ok(Path(value)) => Ok(Self(value)),
            Err(rejection) => {
                tracing::debug!(error = %rejection, "rejected path parameters");
                Err(bad_request(rejection.body_text()).with_code("INVALID_PATH"))
            }
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{StatusCode, header};
    use axum::{Router, routing::get};
    use tower::ServiceExt;

    #[derive(Debug, serde::Deserialize)]
    struct Rename {
        name: String,
    }

    async fn extract(req: Request) -> Result<JsonPayload<Rename>, Problem> {
        JsonPayload::<Rename>::from_request(req, &()).await
    }

    #[tokio::test]
    async fn accepts_valid_body() {
        let req = Request::builder()
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(r#"{"name":"Lunch"}"#))
            .unwrap();
        let JsonPayload(body) = extract(req).await.unwrap();
        assert_eq!(body.name, "Lunch");
    }

    #[tokio::test]
    async fn missing_body_is_bad_request() {
        let req = Request::builder().body(Body::empty()).unwrap();
        let err = extract(req).await.unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.code, "INVALID_BODY");
    }

    #[tokio::test]
    async fn missing_field_is_bad_request() {
        let req = Request::builder()
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{}"))
            .unwrap();
        assert_eq!(extract(req).await.unwrap_err().status, StatusCode::BAD_REQUEST);
    }

    async fn month(PathParams((year, month)): PathParams<(i32, u32)>) -> String {
        format!("{year}-{month:02}")
    }

    async fn get_month(uri: &str) -> axum::response::Response {
        Router::new()
            .route("/month/{year}/{month}", get(month))
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn decodes_typed_segments() {
        let resp = get_month("/month/2024/3").await;
        assert_eq!(resp.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&bytes[..], b"2024-03");
    }

    #[tokio::test]
    async fn undecodable_segment_is_problem() {
        let resp = get_month("/month/abc/1").await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            resp.headers()[header::CONTENT_TYPE],
            crate::APPLICATION_PROBLEM_JSON
        );
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        let problem: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(problem["code"], "INVALID_PATH");
    }
}
