//! Handler-level tests for requests rejected before any table is touched.

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use std::sync::Arc;

    use axum::{
        Extension, Router,
        body::Body,
        http::{Request, Response, StatusCode, header},
        routing::{delete, get, post},
    };
    use sea_orm::Database;
    use tower::ServiceExt;

    use crate::api::rest::handlers;
    use crate::domain::service::Service;
    use crate::infra::storage::{SeaOrmFoodsRepository, SeaOrmMenusRepository};

    async fn app() -> Router {
        let db = Database::connect("sqlite::memory:").await.unwrap();
        let service = Arc::new(Service::new(
            Arc::new(SeaOrmMenusRepository::new(db.clone())),
            Arc::new(SeaOrmFoodsRepository::new(db)),
        ));

        Router::new()
            .route(
                "/menu",
                post(handlers::create_menu).delete(handlers::delete_menus),
            )
            .route(
                "/menu/{id}",
                get(handlers::get_menu).patch(handlers::change_menu_name),
            )
            .route("/menu/{id}/food", post(handlers::create_food))
            .route("/menu/food", delete(handlers::delete_foods))
            .layer(Extension(service))
    }

    async fn send(method: &str, uri: &str, body: Option<&str>) -> Response<Body> {
        let builder = Request::builder().method(method).uri(uri);
        let req = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_owned())),
            None => builder.body(Body::empty()),
        }
        .unwrap();
        app().await.oneshot(req).await.unwrap()
    }

    async fn problem(resp: Response<Body>) -> serde_json::Value {
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn create_menu_without_body_is_bad_request() {
        let resp = send("POST", "/menu", None).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn create_menu_with_short_name_lists_violation() {
        let resp = send("POST", "/menu", Some(r#"{"name":"ab"}"#)).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body = problem(resp).await;
        assert_eq!(body["code"], "MENU_VALIDATION");
        assert_eq!(
            body["errors"][0]["message"],
            "Menu name must be at least 3 characters long"
        );
    }

    #[tokio::test]
    async fn malformed_menu_id_is_bad_request() {
        assert_eq!(
            send("GET", "/menu/5bef0f8a2230ef670c779b05", None)
                .await
                .status(),
            StatusCode::BAD_REQUEST
        );
    }

    #[tokio::test]
    async fn food_for_malformed_menu_id_is_not_found() {
        let resp = send("POST", "/menu/nope/food", Some(r#"{"name":"Soup","price":4}"#)).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn delete_needs_valid_ids() {
        for (uri, body) in [
            ("/menu", r#"{"ids":[]}"#),
            ("/menu", "{}"),
            ("/menu", r#"{"ids":["abc"]}"#),
            ("/menu/food", r#"{"ids":[]}"#),
            ("/menu/food", r#"{"ids":["abc"]}"#),
        ] {
            let resp = send("DELETE", uri, Some(body)).await;
            assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "{uri} {body}");
        }
    }

    #[tokio::test]
    async fn rename_checks_name_before_lookup() {
        let resp = send(
            "PATCH",
            "/menu/00000000-0000-0000-0000-000000000000",
            Some(r#"{"name":"  "}"#),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            problem(resp).await["errors"][0]["message"],
            "Menu name is required"
        );
    }
}
