// SPDX-FileCopyrightText: 2026 ShelfSense Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP-level tests against a wiremock backend.

use std::sync::Arc;
use std::time::Duration;

use serde_json::json;
use shelfsense_api::{
    ApiClient, Category, HttpAdapter, HttpAuthGateway, Product, ProductShelf, Shelf,
};
use shelfsense_config::model::ApiConfig;
use shelfsense_core::{
    AuthError, EntityId, FieldMap, FormMode, ResourceAdapter, ResourceError, Role,
};
use shelfsense_resource::ResourceController;
use shelfsense_session::{AuthGateway, Credentials, SessionStore};
use shelfsense_test_utils::test_token;
use tokio_util::sync::CancellationToken;
use wiremock::matchers::{body_json, header, header_exists, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer, session: Arc<SessionStore>) -> ApiClient {
    let config = ApiConfig {
        base_url: server.uri(),
        timeout_secs: 5,
        accept_invalid_certs: false,
    };
    ApiClient::new(&config, session).expect("client builds for local mock server")
}

fn signed_in(role: &str) -> (Arc<SessionStore>, String) {
    let session = Arc::new(SessionStore::in_memory());
    let token = test_token(role);
    session.set_session(&token, "refresh").unwrap();
    (session, token)
}

// --- auth ---

#[tokio::test]
async fn login_returns_session_without_storing_it() {
    let server = MockServer::start().await;
    let token = test_token("Manager");
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .and(body_json(json!({ "email": "m@shelf.example", "password": "secret1" })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "accessToken": token, "refreshToken": "r-1" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let store = Arc::new(SessionStore::in_memory());
    let gateway = HttpAuthGateway::new(&client_for(&server, Arc::clone(&store)));
    let session = gateway
        .login(&Credentials::new("m@shelf.example", "secret1"))
        .await
        .unwrap();

    assert_eq!(session.role, Role::Manager);
    assert_eq!(session.refresh_token.as_deref(), Some("r-1"));
    assert!(!store.is_authenticated());
}

#[tokio::test]
async fn login_accepts_token_alias() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "token": test_token("warehouse") })),
        )
        .mount(&server)
        .await;

    let gateway = HttpAuthGateway::new(&client_for(&server, Arc::new(SessionStore::in_memory())));
    let session = gateway
        .login(&Credentials::new("w@shelf.example", "secret1"))
        .await
        .unwrap();
    assert_eq!(session.role, Role::Warehouse);
    assert_eq!(session.refresh_token, None);
}

#[tokio::test]
async fn login_maps_rejections_to_invalid_credentials() {
    for status in [401, 403, 409] {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(status))
            .mount(&server)
            .await;
        let gateway =
            HttpAuthGateway::new(&client_for(&server, Arc::new(SessionStore::in_memory())));
        let err = gateway
            .login(&Credentials::new("a@shelf.example", "secret1"))
            .await
            .unwrap_err();
        assert_eq!(err, AuthError::InvalidCredentials, "status {status}");
    }
}

#[tokio::test]
async fn login_server_error_carries_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(json!({ "message": "database offline" })),
        )
        .mount(&server)
        .await;

    let gateway = HttpAuthGateway::new(&client_for(&server, Arc::new(SessionStore::in_memory())));
    let err = gateway
        .login(&Credentials::new("a@shelf.example", "secret1"))
        .await
        .unwrap_err();
    assert_eq!(err, AuthError::ServerError("database offline".into()));
}

#[tokio::test]
async fn login_network_failure() {
    let server = MockServer::start().await;
    let client = client_for(&server, Arc::new(SessionStore::in_memory()));
    drop(server);

    let err = HttpAuthGateway::new(&client)
        .login(&Credentials::new("a@shelf.example", "secret1"))
        .await
        .unwrap_err();
    assert!(matches!(err, AuthError::NetworkFailure(_)));
}

// --- resources ---

#[tokio::test]
async fn list_sends_bearer_and_unwraps_envelope() {
    let server = MockServer::start().await;
    let (session, token) = signed_in("Admin");
    Mock::given(method("GET"))
        .and(path("/api/Category"))
        .and(header("Authorization", format!("Bearer {token}").as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": "ok",
            "data": [
                { "id": 1, "categoryName": "Dairy" },
                { "categoryId": 2, "categoryName": "Bakery", "description": "Bread" }
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let adapter = HttpAdapter::<Category>::new(client_for(&server, session));
    let categories = adapter.list(&CancellationToken::new()).await.unwrap();
    assert_eq!(categories.len(), 2);
    assert_eq!(categories[1].id, EntityId(2));
}

#[tokio::test]
async fn unexpected_list_shape_is_a_server_error() {
    let server = MockServer::start().await;
    let (session, _) = signed_in("Admin");
    Mock::given(method("GET"))
        .and(path("/api/Shelf"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "message": "ok" })))
        .mount(&server)
        .await;

    let adapter = HttpAdapter::<Shelf>::new(client_for(&server, session));
    let err = adapter.list(&CancellationToken::new()).await.unwrap_err();
    assert!(matches!(err, ResourceError::ServerError { .. }));
}

#[tokio::test]
async fn missing_token_fails_before_any_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(0)
        .mount(&server)
        .await;

    let adapter =
        HttpAdapter::<Product>::new(client_for(&server, Arc::new(SessionStore::in_memory())));
    let err = adapter.list(&CancellationToken::new()).await.unwrap_err();
    assert_eq!(err, ResourceError::MissingToken);
    assert_eq!(
        adapter.delete(EntityId(1)).await.unwrap_err(),
        ResourceError::MissingToken
    );
}

#[tokio::test]
async fn cancelled_list_returns_cancelled() {
    let server = MockServer::start().await;
    let (session, _) = signed_in("Admin");
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([]))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let adapter = HttpAdapter::<Product>::new(client_for(&server, session));
    let cancel = CancellationToken::new();
    let canceller = cancel.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(50)).await;
        canceller.cancel();
    });
    assert_eq!(
        adapter.list(&cancel).await.unwrap_err(),
        ResourceError::Cancelled
    );
}

#[tokio::test]
async fn create_posts_typed_payload() {
    let server = MockServer::start().await;
    let (session, _) = signed_in("Manager");
    Mock::given(method("POST"))
        .and(path("/api/Product"))
        .and(body_json(json!({
            "stockKeepingUnit": "SKU-9",
            "productName": "Flour",
            "categoryId": 2,
            "packageSize": null,
            "unit": "kg"
        })))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    let adapter = HttpAdapter::<Product>::new(client_for(&server, session));
    let fields = FieldMap::new()
        .with("stockKeepingUnit", "SKU-9")
        .with("productName", "Flour")
        .with("categoryId", "2")
        .with("unit", "kg");
    adapter.create(&fields).await.unwrap();
}

#[tokio::test]
async fn product_shelf_create_and_update_use_their_own_shapes() {
    let server = MockServer::start().await;
    let (session, _) = signed_in("Admin");
    Mock::given(method("POST"))
        .and(path("/api/ProductShelf/auto-assign"))
        .and(body_json(json!({ "productId": 3, "categoryId": 2, "initialQuantity": 10 })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/api/ProductShelf/8"))
        .and(body_json(json!({ "productId": 3, "shelfId": 5, "quantity": 12 })))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let adapter = HttpAdapter::<ProductShelf>::new(client_for(&server, session));
    let create = FieldMap::new()
        .with("productId", "3")
        .with("categoryId", "2")
        .with("initialQuantity", "10");
    adapter.create(&create).await.unwrap();

    let update = FieldMap::new()
        .with("productId", "3")
        .with("shelfId", "5")
        .with("initialQuantity", "12");
    adapter.update(EntityId(8), &update).await.unwrap();
}

#[tokio::test]
async fn delete_sends_confirmation_header() {
    let server = MockServer::start().await;
    let (session, _) = signed_in("Admin");
    Mock::given(method("DELETE"))
        .and(path("/api/Category/4"))
        .and(header("X-Confirm-Delete", "true"))
        .and(header_exists("Authorization"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let adapter = HttpAdapter::<Category>::new(client_for(&server, session));
    adapter.delete(EntityId(4)).await.unwrap();
}

#[tokio::test]
async fn statuses_map_to_resource_errors() {
    let server = MockServer::start().await;
    let (session, _) = signed_in("Admin");
    Mock::given(method("PUT"))
        .and(path("/api/Category/1"))
        .respond_with(
            ResponseTemplate::new(409).set_body_json(json!({ "message": "Category already exists." })),
        )
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/Category/2"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/Category/3"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let adapter = HttpAdapter::<Category>::new(client_for(&server, session));
    let fields = FieldMap::new().with("categoryName", "Dairy");

    assert_eq!(
        adapter.update(EntityId(1), &fields).await.unwrap_err(),
        ResourceError::Conflict {
            message: "Category already exists.".into()
        }
    );
    assert_eq!(adapter.delete(EntityId(2)).await.unwrap_err(), ResourceError::NotFound);
    assert_eq!(
        adapter.delete(EntityId(3)).await.unwrap_err(),
        ResourceError::ServerError {
            status: Some(500),
            message: "boom".into()
        }
    );
}

#[tokio::test]
async fn controller_over_http_reloads_after_update() {
    let server = MockServer::start().await;
    let (session, _) = signed_in("Manager");
    Mock::given(method("GET"))
        .and(path("/api/Category"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([{ "id": 5, "categoryName": "Dairy" }])),
        )
        .expect(2)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/api/Category/5"))
        .and(body_json(json!({ "categoryName": "Dairy & Eggs", "description": null })))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let adapter = Arc::new(HttpAdapter::<Category>::new(client_for(&server, session)));
    let controller = ResourceController::new(adapter);
    controller.load().await.unwrap();
    assert!(controller.begin_edit_id(EntityId(5)));

    let fields = controller.snapshot().draft.with("categoryName", "Dairy & Eggs");
    controller.submit(fields).await.unwrap();
    assert_eq!(controller.snapshot().mode, FormMode::Create);
    assert!(
        controller
            .take_notices()
            .iter()
            .any(|n| n.message == "Category updated!")
    );
}
