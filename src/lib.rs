// Copyright 2026 Aptove
// SPDX-License-Identifier: Apache-2.0

//! holded-bridge - Holded projects and time tracking bridge
//!
//! This service exposes a handful of Holded API operations as plain HTTP
//! endpoints and publishes action and card descriptors so a host automation
//! platform can trigger them from its UI or programmatically.

use axum::{
    http::{header, Method},
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub mod catalog;
pub mod config;
pub mod credentials;
pub mod error;
pub mod handlers;
pub mod holded;
pub mod models;
pub mod registry;
pub mod state;

use handlers::routes;
use state::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/status", get(handlers::status::status))
        .route(routes::EMPLOYEES, get(handlers::employees::list))
        .route(routes::PROJECT_TIME_SLOTS, get(handlers::time::time_slots))
        .route(routes::REGISTER_TIME, post(handlers::time::register))
        .route(routes::PROJECTS, get(handlers::projects::list))
        .route(routes::UPDATE_PROJECT_TIME, post(handlers::time::update))
        .route(routes::CATALOG, get(handlers::catalog::catalog))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::config;
    use crate::credentials::{KeyFile, ProviderChain, HOLDED_API_KEY};
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
        response::Response,
    };
    use serde_json::{json, Value};
    use std::collections::HashMap;
    use tower::ServiceExt;
    use wiremock::matchers::{body_json, header as header_is, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn app_for(server: &MockServer) -> Router {
        let mut config = config::test_config();
        config.projects_url = format!("{}/api/projects/v1", server.uri());
        config.team_url = format!("{}/api/team/v1", server.uri());

        let keys = HashMap::from([(HOLDED_API_KEY.to_string(), "test-key".to_string())]);
        let credentials = ProviderChain::new().with(KeyFile::new(keys));
        let catalog = Catalog::build(None, "svc");
        let state = AppState::new(config, reqwest::Client::new(), credentials, catalog).unwrap();
        create_router(Arc::new(state))
    }

    async fn send_get(app: Router, uri: &str) -> Response {
        app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn post_json(app: Router, uri: &str, body: Value) -> Response {
        app.oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap()
    }

    async fn json_body(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    /// Any request reaching Holded fails the test when the server drops.
    async fn no_remote_calls(server: &MockServer) {
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(server)
            .await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(server)
            .await;
        Mock::given(method("PUT"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn test_status_endpoint() {
        let server = MockServer::start().await;
        let response = send_get(app_for(&server), "/status").await;

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["healthy"], json!(true));
        assert_eq!(body["actions"], json!(5));
    }

    #[tokio::test]
    async fn test_employees_relayed_unchanged() {
        let server = MockServer::start().await;
        let employees = json!([{ "id": "e1", "name": "Ana" }, { "id": "e2", "name": "Luis" }]);
        Mock::given(method("GET"))
            .and(path("/api/team/v1/employees"))
            .and(header_is("key", "test-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(employees.clone()))
            .expect(1)
            .mount(&server)
            .await;

        let response = send_get(app_for(&server), routes::EMPLOYEES).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await, employees);
    }

    #[tokio::test]
    async fn test_register_time_coerces_duration() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/projects/v1/projects/p1/times"))
            .and(body_json(json!({ "userId": "u1", "duration": 1800 })))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({ "status": 1, "id": "t1" })),
            )
            .expect(1)
            .mount(&server)
            .await;

        let response = post_json(
            app_for(&server),
            routes::REGISTER_TIME,
            json!({ "projectId": "p1", "userId": "u1", "duration": "1800" }),
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await, json!({ "status": 1, "id": "t1" }));
    }

    #[tokio::test]
    async fn test_register_time_missing_field_is_400() {
        for body in [
            json!({ "userId": "u1", "duration": 60 }),
            json!({ "projectId": "p1", "duration": 60 }),
            json!({ "projectId": "p1", "userId": "u1" }),
            json!({ "projectId": "p1", "userId": "u1", "duration": null }),
        ] {
            let server = MockServer::start().await;
            no_remote_calls(&server).await;

            let response = post_json(app_for(&server), routes::REGISTER_TIME, body).await;
            assert_eq!(response.status(), StatusCode::BAD_REQUEST);
            assert_eq!(
                json_body(response).await,
                json!({ "error": "Required parameters: projectId, userId, duration" })
            );
        }
    }

    #[tokio::test]
    async fn test_register_time_without_body_is_400() {
        let server = MockServer::start().await;
        no_remote_calls(&server).await;

        let response = app_for(&server)
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(routes::REGISTER_TIME)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_register_time_non_numeric_duration_is_400() {
        let server = MockServer::start().await;
        no_remote_calls(&server).await;

        let response = post_json(
            app_for(&server),
            routes::REGISTER_TIME,
            json!({ "projectId": "p1", "userId": "u1", "duration": "an hour" }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_projects_forward_non_empty_filters() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/projects/v1/projects"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([{ "id": "p1" }])))
            .expect(1)
            .mount(&server)
            .await;

        let response =
            send_get(app_for(&server), "/api/v1/holded/projects?status=&name=Acme").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await, json!([{ "id": "p1" }]));

        let received = server.received_requests().await.unwrap();
        assert_eq!(received[0].url.query(), Some("name=Acme"));
    }

    #[tokio::test]
    async fn test_projects_repeated_parameter_keeps_first() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/projects/v1/projects"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&server)
            .await;

        send_get(app_for(&server), "/api/v1/holded/projects?page=2&page=3&limit=10").await;

        let received = server.received_requests().await.unwrap();
        assert_eq!(received[0].url.query(), Some("page=2&limit=10"));
    }

    #[tokio::test]
    async fn test_time_slots_require_project_id() {
        let server = MockServer::start().await;
        no_remote_calls(&server).await;

        let response = send_get(app_for(&server), routes::PROJECT_TIME_SLOTS).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            json_body(response).await,
            json!({ "error": "projectId query parameter is required" })
        );
    }

    #[tokio::test]
    async fn test_time_slots_empty_project_id_is_400() {
        let server = MockServer::start().await;
        no_remote_calls(&server).await;

        let response =
            send_get(app_for(&server), "/api/v1/holded/project_time_slots?projectId=").await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            json_body(response).await,
            json!({ "error": "projectId query parameter is required" })
        );
    }

    #[tokio::test]
    async fn test_time_slots_repeated_project_id_keeps_first() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/projects/v1/projects/p1/times"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(1)
            .mount(&server)
            .await;

        let response = send_get(
            app_for(&server),
            "/api/v1/holded/project_time_slots?projectId=p1&projectId=p2",
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()["content-type"], "application/json");
        assert_eq!(json_body(response).await, json!([]));
    }

    #[tokio::test]
    async fn test_update_requires_project_id() {
        for body in [
            json!({ "timeTrackingId": "t1", "desc": "review" }),
            json!({ "projectId": "", "timeTrackingId": "t1", "desc": "review" }),
        ] {
            let server = MockServer::start().await;
            no_remote_calls(&server).await;

            let response = post_json(app_for(&server), routes::UPDATE_PROJECT_TIME, body).await;
            assert_eq!(response.status(), StatusCode::BAD_REQUEST);
            assert_eq!(
                json_body(response).await,
                json!({ "error": "projectId is required" })
            );
        }
    }

    #[tokio::test]
    async fn test_time_slots_for_project() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/projects/v1/projects/p1/times"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([{ "timeId": "t1" }])))
            .expect(1)
            .mount(&server)
            .await;

        let response = send_get(
            app_for(&server),
            "/api/v1/holded/project_time_slots?projectId=p1",
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await, json!([{ "timeId": "t1" }]));
    }

    #[tokio::test]
    async fn test_update_without_fields_is_400() {
        let server = MockServer::start().await;
        no_remote_calls(&server).await;

        let response = post_json(
            app_for(&server),
            routes::UPDATE_PROJECT_TIME,
            json!({ "projectId": "p1" }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            json_body(response).await,
            json!({ "error": "timeTrackingId is required" })
        );

        let response = post_json(
            app_for(&server),
            routes::UPDATE_PROJECT_TIME,
            json!({ "projectId": "p1", "timeTrackingId": "t1", "desc": "", "date": null }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            json_body(response).await,
            json!({ "error": "Provide at least one field to update" })
        );
    }

    #[tokio::test]
    async fn test_update_sends_only_non_empty_fields() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/api/projects/v1/projects/p1/times/t1"))
            .and(body_json(json!({ "desc": "review", "billable": true })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": 1 })))
            .expect(1)
            .mount(&server)
            .await;

        let response = post_json(
            app_for(&server),
            routes::UPDATE_PROJECT_TIME,
            json!({
                "projectId": "p1",
                "timeTrackingId": "t1",
                "desc": "review",
                "billable": true,
                "start": ""
            }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await, json!({ "status": 1 }));
    }

    #[tokio::test]
    async fn test_remote_failure_returns_generic_message() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/team/v1/employees"))
            .respond_with(
                ResponseTemplate::new(500).set_body_string("stack trace: secret internals"),
            )
            .mount(&server)
            .await;

        let response = send_get(app_for(&server), routes::EMPLOYEES).await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            json_body(response).await,
            json!({ "error": "Failed to fetch employees" })
        );
    }

    #[tokio::test]
    async fn test_unreachable_remote_returns_generic_message() {
        let server = MockServer::start().await;
        let mut config = config::test_config();
        // Nothing listens on port 9 of the loopback interface.
        config.projects_url = "http://127.0.0.1:9/api/projects/v1".to_string();
        config.team_url = format!("{}/api/team/v1", server.uri());
        let keys = HashMap::from([(HOLDED_API_KEY.to_string(), "k".to_string())]);
        let state = AppState::new(
            config,
            reqwest::Client::new(),
            ProviderChain::new().with(KeyFile::new(keys)),
            Catalog::build(None, ""),
        )
        .unwrap();

        let response = send_get(
            create_router(Arc::new(state)),
            "/api/v1/holded/project_time_slots?projectId=p1",
        )
        .await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            json_body(response).await,
            json!({ "error": "Failed to fetch project time slots" })
        );
    }

    #[tokio::test]
    async fn test_missing_credential_is_generic_500() {
        let server = MockServer::start().await;
        no_remote_calls(&server).await;

        let mut config = config::test_config();
        config.projects_url = format!("{}/api/projects/v1", server.uri());
        config.team_url = format!("{}/api/team/v1", server.uri());
        let state = AppState::new(
            config,
            reqwest::Client::new(),
            ProviderChain::new().with(KeyFile::default()),
            Catalog::build(None, ""),
        )
        .unwrap();

        let response = send_get(create_router(Arc::new(state)), routes::EMPLOYEES).await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            json_body(response).await,
            json!({ "error": "Failed to fetch employees" })
        );
    }

    #[tokio::test]
    async fn test_catalog_endpoint() {
        let server = MockServer::start().await;
        let response = send_get(app_for(&server), routes::CATALOG).await;

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["actions"].as_array().unwrap().len(), 5);
        assert_eq!(body["cards"][2]["id"], json!("holded_register_time_request"));
        assert_eq!(body["actions"][0]["token"], json!("svc"));
    }
}
