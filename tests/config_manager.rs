//! Integration tests for the config-manager endpoint

use async_trait::async_trait;
use axum::http::StatusCode;
use prize_admin::{
    config::AdminCredentials,
    error::StoreError,
    model::{ConfigFields, StoredRecord},
    routes::router,
    state::AppState,
    store::{MemoryStore, RecordStore},
};
use serde_json::{Value, json};
use std::{net::SocketAddr, sync::Arc};

async fn spawn(store: Arc<dyn RecordStore>) -> SocketAddr {
    let app = router(
        AppState::new(store, AdminCredentials::new("admin", "admin-pass")),
        "/.netlify/functions",
    );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

fn url(addr: SocketAddr) -> String {
    format!("http://{}/.netlify/functions/config-manager", addr)
}

/// Store whose every call fails, as if the upstream rejected the API key.
struct BrokenStore;

#[async_trait]
impl RecordStore for BrokenStore {
    async fn find_singleton(&self) -> Result<Option<StoredRecord>, StoreError> {
        Err(StoreError::Upstream {
            status: 401,
            message: "AUTHENTICATION_REQUIRED".to_string(),
        })
    }

    async fn create(&self, _fields: ConfigFields) -> Result<StoredRecord, StoreError> {
        unreachable!("create after failed lookup")
    }

    async fn update_fields(&self, _id: &str, _fields: ConfigFields) -> Result<(), StoreError> {
        unreachable!("update after failed lookup")
    }
}

#[tokio::test]
async fn test_get_seeds_defaults() {
    let store = Arc::new(MemoryStore::new());
    let addr = spawn(store.clone()).await;

    let response = reqwest::get(url(addr)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get("access-control-allow-origin").unwrap(),
        "*"
    );
    assert_eq!(
        response.headers().get("access-control-allow-methods").unwrap(),
        "GET, POST, OPTIONS"
    );

    let body: Value = response.json().await.unwrap();
    assert_eq!(
        body,
        json!({
            "success": true,
            "data": {
                "nombreModelo": "Nombre por Defecto",
                "avatarURL": "",
                "premios": ["Premio A", "Premio B", "Premio C"],
            }
        })
    );
    assert_eq!(store.snapshot().await.unwrap().fields, ConfigFields::defaults());
    assert_eq!(store.writes(), 1);
}

#[tokio::test]
async fn test_options_skips_store() {
    let store = Arc::new(MemoryStore::new());
    let addr = spawn(store.clone()).await;

    let response = reqwest::Client::new()
        .request(reqwest::Method::OPTIONS, url(addr))
        .header("origin", "https://panel.example.com")
        .header("access-control-request-method", "POST")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get("access-control-allow-headers").unwrap(),
        "Content-Type"
    );
    assert!(response.text().await.unwrap().is_empty());
    assert!(store.snapshot().await.is_none());
}

#[tokio::test]
async fn test_post_prizes_only() {
    let store = Arc::new(MemoryStore::with_record(ConfigFields {
        model_name: Some("Luna".to_string()),
        avatar: Some("https://example.com/luna.png".to_string()),
        prizes: Some("Premio A".to_string()),
    }));
    let addr = spawn(store.clone()).await;
    let client = reqwest::Client::new();

    let response = client
        .post(url(addr))
        .json(&json!({ "nuevaListaPremios": ["Beso", "Foto", "Saludo"] }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Configuración actualizada con éxito.");

    let body: Value = client.get(url(addr)).send().await.unwrap().json().await.unwrap();
    assert_eq!(
        body["data"],
        json!({
            "nombreModelo": "Luna",
            "avatarURL": "https://example.com/luna.png",
            "premios": ["Beso", "Foto", "Saludo"],
        })
    );
}

#[tokio::test]
async fn test_post_without_fields_writes_nothing() {
    let store = Arc::new(MemoryStore::with_record(ConfigFields::defaults()));
    let addr = spawn(store.clone()).await;

    let response = reqwest::Client::new()
        .post(url(addr))
        .json(&json!({ "otroCampo": 1 }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(store.writes(), 0);
}

#[tokio::test]
async fn test_post_clears_avatar() {
    let store = Arc::new(MemoryStore::with_record(ConfigFields {
        avatar: Some("https://example.com/old.png".to_string()),
        ..ConfigFields::defaults()
    }));
    let addr = spawn(store.clone()).await;

    let response = reqwest::Client::new()
        .post(url(addr))
        .json(&json!({ "nuevoNombreModelo": "Sol", "nuevaAvatarURL": "" }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let fields = store.snapshot().await.unwrap().fields;
    assert_eq!(fields.model_name.as_deref(), Some("Sol"));
    assert_eq!(fields.avatar.as_deref(), Some(""));
}

#[tokio::test]
async fn test_post_avatar_rejections() {
    let store = Arc::new(MemoryStore::with_record(ConfigFields::defaults()));
    let addr = spawn(store.clone()).await;
    let client = reqwest::Client::new();

    let oversized = format!("data:image/png;base64,{}", "A".repeat(500_001 - 22));
    let cases = [
        (
            oversized.as_str(),
            "La imagen es demasiado grande. Máximo 500KB o usa una URL directa.",
        ),
        ("http://", "La URL de imagen proporcionada no es válida."),
        (
            "ftp://x",
            "El avatar debe ser una URL válida o imagen en formato base64.",
        ),
    ];

    for (avatar, message) in cases {
        let response = client
            .post(url(addr))
            .json(&json!({ "nuevaAvatarURL": avatar }))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response.headers().get("access-control-allow-origin").unwrap(),
            "*"
        );
        let body: Value = response.json().await.unwrap();
        assert_eq!(body, json!({ "success": false, "message": message }));
    }

    assert_eq!(store.writes(), 0);
}

#[tokio::test]
async fn test_post_accepts_inline_image() {
    let store = Arc::new(MemoryStore::with_record(ConfigFields::defaults()));
    let addr = spawn(store.clone()).await;

    let response = reqwest::Client::new()
        .post(url(addr))
        .json(&json!({ "nuevaAvatarURL": "data:image/png;base64,AAAA" }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        store.snapshot().await.unwrap().fields.avatar.as_deref(),
        Some("data:image/png;base64,AAAA")
    );
}

#[tokio::test]
async fn test_malformed_body_is_server_error() {
    let addr = spawn(Arc::new(MemoryStore::new())).await;

    let response = reqwest::Client::new()
        .post(url(addr))
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["success"], false);
    assert!(
        body["message"]
            .as_str()
            .unwrap()
            .starts_with("Error interno del servidor: ")
    );
}

#[tokio::test]
async fn test_store_failure_is_reported() {
    let addr = spawn(Arc::new(BrokenStore)).await;

    let response = reqwest::get(url(addr)).await.unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json().await.unwrap();
    assert_eq!(
        body,
        json!({
            "success": false,
            "message": "Error interno del servidor: 401: AUTHENTICATION_REQUIRED",
        })
    );
}

#[tokio::test]
async fn test_put_not_allowed() {
    let store = Arc::new(MemoryStore::new());
    let addr = spawn(store.clone()).await;

    let response = reqwest::Client::new()
        .put(url(addr))
        .json(&json!({}))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(
        response.headers().get("access-control-allow-methods").unwrap(),
        "GET, POST, OPTIONS"
    );
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({ "success": false, "message": "Método no permitido" }));
    assert!(store.snapshot().await.is_none());
}

#[tokio::test]
async fn test_large_inline_image_gets_size_message() {
    let store = Arc::new(MemoryStore::with_record(ConfigFields::defaults()));
    let addr = spawn(store.clone()).await;

    let avatar = format!("data:image/png;base64,{}", "A".repeat(2_500_000));
    let response = reqwest::Client::new()
        .post(url(addr))
        .json(&json!({ "nuevaAvatarURL": avatar }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.unwrap();
    assert_eq!(
        body,
        json!({
            "success": false,
            "message": "La imagen es demasiado grande. Máximo 500KB o usa una URL directa.",
        })
    );
    assert_eq!(store.writes(), 0);
}

#[tokio::test]
async fn test_falsy_avatar_values_clear() {
    let client = reqwest::Client::new();

    for avatar in [json!(false), json!(0), json!(null)] {
        let store = Arc::new(MemoryStore::with_record(ConfigFields {
            avatar: Some("https://example.com/old.png".to_string()),
            ..ConfigFields::defaults()
        }));
        let addr = spawn(store.clone()).await;

        let response = client
            .post(url(addr))
            .json(&json!({ "nuevaAvatarURL": avatar }))
            .send()
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK, "{}", avatar);
        assert_eq!(
            store.snapshot().await.unwrap().fields.avatar.as_deref(),
            Some(""),
            "{}",
            avatar
        );
    }
}

#[tokio::test]
async fn test_non_string_avatar_is_server_error() {
    let store = Arc::new(MemoryStore::with_record(ConfigFields::defaults()));
    let addr = spawn(store.clone()).await;

    let response = reqwest::Client::new()
        .post(url(addr))
        .json(&json!({ "nuevaAvatarURL": 42 }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["success"], false);
    assert_eq!(store.writes(), 0);
}
