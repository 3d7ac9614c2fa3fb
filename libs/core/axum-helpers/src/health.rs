use axum::{routing::get, Json, Router};
use serde::Serialize;
use utoipa::ToSchema;

/// Liveness response with application identity.
#[derive(Serialize, ToSchema, Clone)]
pub struct HealthResponse {
    pub status: String,
    pub name: String,
    pub version: String,
}

/// Router exposing `/health` for liveness probes.
///
/// The store is in-memory, so liveness is the only meaningful probe; there
/// is no external dependency to gate readiness on.
pub fn health_router(name: &'static str, version: &'static str) -> Router {
    Router::new().route(
        "/health",
        get(move || async move {
            Json(HealthResponse {
                status: "ok".to_string(),
                name: name.to_string(),
                version: version.to_string(),
            })
        }),
    )
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use super::*;

    #[tokio::test]
    async fn health_reports_ok() {
        let app = health_router("adboard", "0.1.0");
        let response = app
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["status"], "ok");
        assert_eq!(json["name"], "adboard");
    }
}
