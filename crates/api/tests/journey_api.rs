//! HTTP-level integration tests for the journey endpoints.
//!
//! Covers journey CRUD, the duplicate-journey endpoint, and the error
//! envelope for resolution failures.

mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use common::{body_json, delete, get, post_json};

use panelcast_core::journey::JourneyItemType;
use panelcast_core::types::{new_id, now, Id};
use panelcast_db::models::journey::Journey;
use panelcast_db::models::journey_item::JourneyItem;
use panelcast_db::models::journey_item_version::JourneyItemVersion;
use panelcast_db::models::journey_structure::JourneyStructure;
use panelcast_db::models::journey_structure_version::JourneyStructureVersion;
use panelcast_db::models::journey_version::JourneyVersion;
use panelcast_db::repositories::{
    JourneyItemRepo, JourneyItemVersionRepo, JourneyRepo, JourneyStructureRepo,
    JourneyStructureVersionRepo, JourneyVersionRepo,
};
use panelcast_store::MemoryStore;

// ---------------------------------------------------------------------------
// Seeding
// ---------------------------------------------------------------------------

/// Seed a journey with a two-item chain ("opening" -> "closing") directly
/// through the repositories and return (journey_id, organization_id).
async fn seed_source_journey(store: &MemoryStore) -> (Id, Id) {
    let organization_id = new_id();
    let created = now();

    let mut journey = Journey {
        id: new_id(),
        template_id: None,
        organization_id,
        owner_id: Some(new_id()),
        current_version_id: None,
        disabled: false,
        disabled_at: None,
        created_at: created,
        updated_at: created,
        updated_by: None,
    };
    let version = JourneyVersion {
        id: new_id(),
        journey_id: journey.id,
        template_id: None,
        template_version_id: None,
        name: "v1".to_string(),
        description: None,
        metadata: None,
        organization_id,
        owner_id: journey.owner_id,
        version_of_id: journey.id,
        created_at: created,
        updated_at: created,
    };
    journey.current_version_id = Some(version.id);

    let mut items = Vec::new();
    let mut item_versions = Vec::new();
    let mut structures = Vec::new();
    let mut structure_versions = Vec::new();
    for name in ["opening", "closing"] {
        let mut item = JourneyItem {
            id: new_id(),
            journey_id: journey.id,
            template_item_id: None,
            organization_id,
            owner_id: journey.owner_id,
            current_version_id: None,
            disabled: false,
            disabled_at: None,
            created_at: created,
            updated_at: created,
        };
        let item_version = JourneyItemVersion {
            id: new_id(),
            journey_id: journey.id,
            name: name.to_string(),
            item_type: JourneyItemType::Module,
            data: None,
            metadata: None,
            organization_id,
            owner_id: journey.owner_id,
            version_of_id: item.id,
            disabled: false,
            created_at: created,
            updated_at: created,
        };
        item.current_version_id = Some(item_version.id);

        let mut structure = JourneyStructure {
            id: new_id(),
            journey_id: journey.id,
            organization_id,
            owner_id: journey.owner_id,
            current_version_id: None,
            disabled: false,
            disabled_at: None,
            created_at: created,
            updated_at: created,
        };
        let structure_version = JourneyStructureVersion {
            id: new_id(),
            journey_id: journey.id,
            journey_item_id: item.id,
            version_id: item_version.id,
            parent_id: None,
            next_id: None,
            previous_id: None,
            organization_id,
            owner_id: journey.owner_id,
            version_of_id: structure.id,
            disabled: false,
            created_at: created,
            updated_at: created,
        };
        structure.current_version_id = Some(structure_version.id);

        items.push(item);
        item_versions.push(item_version);
        structures.push(structure);
        structure_versions.push(structure_version);
    }
    structure_versions[0].next_id = Some(structure_versions[1].id);
    structure_versions[1].previous_id = Some(structure_versions[0].id);

    JourneyRepo::upsert(store, &journey).await.unwrap();
    JourneyVersionRepo::upsert(store, &version).await.unwrap();
    JourneyItemRepo::upsert_many(store, &items).await.unwrap();
    JourneyItemVersionRepo::upsert_many(store, &item_versions)
        .await
        .unwrap();
    JourneyStructureRepo::upsert_many(store, &structures)
        .await
        .unwrap();
    JourneyStructureVersionRepo::upsert_many(store, &structure_versions)
        .await
        .unwrap();

    (journey.id, organization_id)
}

// ---------------------------------------------------------------------------
// Health
// ---------------------------------------------------------------------------

#[tokio::test]
async fn health_returns_ok() {
    let store = Arc::new(MemoryStore::new());
    let app = common::build_test_app(store);

    let response = get(app, "/health").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
}

// ---------------------------------------------------------------------------
// Journey CRUD
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_journey_returns_201() {
    let store = Arc::new(MemoryStore::new());
    let organization_id = new_id();

    let app = common::build_test_app(store);
    let response = post_json(
        app,
        "/api/v1/journeys",
        serde_json::json!({"organization_id": organization_id}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["data"]["organization_id"], organization_id.to_string());
    assert_eq!(json["data"]["disabled"], false);
}

#[tokio::test]
async fn get_journey_by_id() {
    let store = Arc::new(MemoryStore::new());
    let (journey_id, _) = seed_source_journey(&store).await;

    let app = common::build_test_app(store);
    let response = get(app, &format!("/api/v1/journeys/{journey_id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["id"], journey_id.to_string());
}

#[tokio::test]
async fn get_nonexistent_journey_returns_404() {
    let store = Arc::new(MemoryStore::new());

    let app = common::build_test_app(store);
    let response = get(app, &format!("/api/v1/journeys/{}", new_id())).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
}

#[tokio::test]
async fn disabled_journey_disappears_from_listing() {
    let store = Arc::new(MemoryStore::new());
    let (journey_id, organization_id) = seed_source_journey(&store).await;

    let app = common::build_test_app(store.clone());
    let response = delete(app, &format!("/api/v1/journeys/{journey_id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["disabled"], true);

    let app = common::build_test_app(store);
    let response = get(
        app,
        &format!("/api/v1/journeys?organization_id={organization_id}"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn list_items_of_journey() {
    let store = Arc::new(MemoryStore::new());
    let (journey_id, _) = seed_source_journey(&store).await;

    let app = common::build_test_app(store);
    let response = get(app, &format!("/api/v1/journeys/{journey_id}/items")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 2);
}

// ---------------------------------------------------------------------------
// Duplicate journey
// ---------------------------------------------------------------------------

#[tokio::test]
async fn copy_journey_returns_full_bundle() {
    let store = Arc::new(MemoryStore::new());
    let (journey_id, _) = seed_source_journey(&store).await;
    let target_org = new_id();

    let app = common::build_test_app(store.clone());
    let response = post_json(
        app,
        "/api/v1/journeys/copy",
        serde_json::json!({
            "journey_id": journey_id,
            "organization_id": target_org,
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    let data = &json["data"];

    assert_ne!(data["journey"]["id"], journey_id.to_string());
    assert_eq!(
        data["journey"]["organization_id"],
        target_org.to_string()
    );
    assert_eq!(data["items"].as_array().unwrap().len(), 2);
    assert_eq!(data["item_versions"].as_array().unwrap().len(), 2);
    assert_eq!(data["structures"].as_array().unwrap().len(), 2);
    assert_eq!(data["structure_versions"].as_array().unwrap().len(), 2);

    // The copy is a real journey in the store, not just a response body.
    let new_journey_id = data["journey"]["id"].as_str().unwrap();
    let app = common::build_test_app(store);
    let response = get(app, &format!("/api/v1/journeys/{new_journey_id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn copy_preserves_chain_links_within_new_ids() {
    let store = Arc::new(MemoryStore::new());
    let (journey_id, _) = seed_source_journey(&store).await;

    let app = common::build_test_app(store);
    let response = post_json(
        app,
        "/api/v1/journeys/copy",
        serde_json::json!({
            "journey_id": journey_id,
            "organization_id": new_id(),
        }),
    )
    .await;

    let json = body_json(response).await;
    let versions = json["data"]["structure_versions"].as_array().unwrap();
    let ids: Vec<&str> = versions
        .iter()
        .map(|v| v["id"].as_str().unwrap())
        .collect();

    let head = versions
        .iter()
        .find(|v| v["previous_id"].is_null())
        .unwrap();
    let next_id = head["next_id"].as_str().unwrap();
    assert!(ids.contains(&next_id));
}

#[tokio::test]
async fn copy_unknown_journey_returns_404() {
    let store = Arc::new(MemoryStore::new());

    let app = common::build_test_app(store);
    let response = post_json(
        app,
        "/api/v1/journeys/copy",
        serde_json::json!({
            "journey_id": new_id(),
            "organization_id": new_id(),
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
}

#[tokio::test]
async fn copy_without_any_source_returns_400() {
    let store = Arc::new(MemoryStore::new());

    let app = common::build_test_app(store);
    let response = post_json(
        app,
        "/api/v1/journeys/copy",
        serde_json::json!({"organization_id": new_id()}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "INVALID_STATE");
}

#[tokio::test]
async fn copy_journey_without_current_version_returns_400() {
    let store = Arc::new(MemoryStore::new());

    // A bare journey created via the API has no versions at all.
    let app = common::build_test_app(store.clone());
    let response = post_json(
        app,
        "/api/v1/journeys",
        serde_json::json!({"organization_id": new_id()}),
    )
    .await;
    let created = body_json(response).await;
    let journey_id = created["data"]["id"].as_str().unwrap().to_string();

    let app = common::build_test_app(store);
    let response = post_json(
        app,
        "/api/v1/journeys/copy",
        serde_json::json!({
            "journey_id": journey_id,
            "organization_id": new_id(),
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "INVALID_STATE");
}
