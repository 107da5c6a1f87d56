//! Router construction.
//!
//! Builds the axum router with all routes and middleware.

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware::security;
use crate::state::AppState;

/// Create the application router.
pub(crate) fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/resolve", get(handlers::pages::get_resolve))
        .route(
            "/api/reference/{type}/{name}",
            get(handlers::pages::get_entry),
        )
        .route(
            "/api/reference/{type}/{name}/{method}",
            get(handlers::pages::get_method),
        )
        .route("/reference/{*path}", get(handlers::pages::get_canonical))
        .route("/api/navigation", get(handlers::navigation::get_navigation))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(security::content_type_options_layer())
                .layer(security::frame_options_layer()),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use apiref_index::{DefinitionType, IndexSource, MockIndexSource};
    use apiref_site::{MemoryContentStore, Reference, ReferenceConfig};
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode, header};
    use pretty_assertions::assert_eq;
    use serde_json::Value;
    use tower::ServiceExt;

    use super::*;

    fn create_app() -> Router {
        let source = MockIndexSource::new()
            .with_entry(DefinitionType::Class, "MyClass")
            .with_method(DefinitionType::Class, "MyClass", "myMethod")
            .with_entry(DefinitionType::Class, "HH.Vector")
            .with_entry(DefinitionType::Function, "strlen")
            .with_entry(DefinitionType::Function, "orphan");
        let content = MemoryContentStore::new()
            .with_fragment("class.MyClass.html", "<h1>MyClass</h1>")
            .with_fragment("class.MyClass.myMethod.html", "<h1>myMethod</h1>")
            .with_fragment("function.strlen.html", "<h1>strlen</h1>")
            .with_fragment("class.HH.Vector.html", "<h1>HH.Vector</h1>");
        let reference = Reference::new(
            Arc::new(source) as Arc<dyn IndexSource>,
            Arc::new(content),
            ReferenceConfig::default(),
        );

        create_router(Arc::new(AppState {
            reference: Arc::new(reference),
            version: "1.0.0".to_owned(),
        }))
    }

    async fn get(app: Router, uri: &str) -> axum::response::Response {
        app.oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn json_body(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_resolve_function_page() {
        let response = get(create_app(), "/api/resolve?type=function&name=strlen").await;

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().contains_key(header::ETAG));
        let json = json_body(response).await;
        assert_eq!(json["title"], "strlen");
        assert_eq!(json["kind"], "function");
        assert_eq!(json["urlPath"], "/reference/function/strlen/");
        assert_eq!(json["content"], "<h1>strlen</h1>");
        assert_eq!(json["breadcrumbs"].as_array().unwrap().len(), 4);
        assert_eq!(json["breadcrumbs"][3]["label"], "strlen");
        assert!(json["breadcrumbs"][3].get("url").is_none());
    }

    #[tokio::test]
    async fn test_resolve_renamed_redirects() {
        let response = get(create_app(), "/api/resolve?type=class&name=Vector").await;

        assert_eq!(response.status(), StatusCode::PERMANENT_REDIRECT);
        assert_eq!(
            response.headers()[header::LOCATION],
            "/reference/class/HH.Vector/"
        );
    }

    #[tokio::test]
    async fn test_redirect_target_is_served() {
        let app = create_app();
        let redirect = get(app.clone(), "/api/reference/class/Vector").await;
        assert_eq!(redirect.status(), StatusCode::PERMANENT_REDIRECT);
        let location = redirect.headers()[header::LOCATION].to_str().unwrap().to_owned();

        let response = get(app, &location).await;

        assert_eq!(response.status(), StatusCode::OK);
        let json = json_body(response).await;
        assert_eq!(json["name"], "HH.Vector");
        assert_eq!(json["urlPath"], location);
    }

    #[tokio::test]
    async fn test_canonical_method_url() {
        let response = get(create_app(), "/reference/class/MyClass/myMethod/").await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await["title"], "MyClass::myMethod");
    }

    #[tokio::test]
    async fn test_unparseable_canonical_url_is_not_found() {
        for uri in ["/reference/method/x/", "/reference/function/a/b/", "/reference/bogus/x/"] {
            let response = get(create_app(), uri).await;
            assert_eq!(response.status(), StatusCode::NOT_FOUND, "{uri}");
        }
    }

    #[tokio::test]
    async fn test_reference_method_page() {
        let response = get(create_app(), "/api/reference/class/MyClass/myMethod").await;

        assert_eq!(response.status(), StatusCode::OK);
        let json = json_body(response).await;
        assert_eq!(json["title"], "MyClass::myMethod");
        assert_eq!(json["method"], "myMethod");
        assert_eq!(json["content"], "<h1>myMethod</h1>");
        assert_eq!(
            json["activeNavPath"],
            serde_json::json!(["Class", "MyClass", "myMethod"])
        );
        assert_eq!(json["breadcrumbs"][3]["url"], "/reference/class/MyClass/");
    }

    #[tokio::test]
    async fn test_reference_entry_page() {
        let response = get(create_app(), "/api/reference/class/MyClass").await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await["content"], "<h1>MyClass</h1>");
    }

    #[tokio::test]
    async fn test_unknown_name_is_not_found() {
        let response = get(create_app(), "/api/reference/class/DoesNotExist").await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(json_body(response).await["error"].is_string());
    }

    #[tokio::test]
    async fn test_missing_content_is_not_found() {
        let response = get(create_app(), "/api/reference/function/orphan").await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_unknown_type_is_bad_request() {
        let response = get(create_app(), "/api/resolve?type=bogus&name=anything").await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_missing_name_is_bad_request() {
        let response = get(create_app(), "/api/resolve?type=class").await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_if_none_match_returns_not_modified() {
        let app = create_app();
        let first = get(app.clone(), "/api/reference/function/strlen").await;
        let etag = first.headers()[header::ETAG].clone();

        let response = app
            .oneshot(
                Request::get("/api/reference/function/strlen")
                    .header(header::IF_NONE_MATCH, etag)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_MODIFIED);
    }

    #[tokio::test]
    async fn test_navigation() {
        let response = get(create_app(), "/api/navigation").await;

        assert_eq!(response.status(), StatusCode::OK);
        let json = json_body(response).await;
        assert_eq!(json["items"].as_array().unwrap().len(), 6);
        assert_eq!(json["items"][0]["label"], "Class");
        assert_eq!(json["items"][0]["children"][0]["label"], "MyClass");
    }

    #[tokio::test]
    async fn test_security_headers() {
        let response = get(create_app(), "/api/navigation").await;

        assert_eq!(response.headers()["x-content-type-options"], "nosniff");
        assert_eq!(response.headers()["x-frame-options"], "DENY");
    }
}
