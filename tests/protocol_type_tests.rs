//! Integration tests for the typed protocol-types resource.
//!
//! These tests exercise the CRUD contract against a stateful mock NSoT
//! service: uniqueness constraints, default-site assignment, partial
//! updates, and not-found handling.

use wiremock::MockServer;

use nsot_client::resources::{
    NewProtocolType, ProtocolType, ProtocolTypeFilter, ProtocolTypePatch, Site,
};
use nsot_client::{ApiClient, BaseUrl, Email, HttpError, NsotConfig, SiteId};

mod support;

async fn start_client() -> (MockServer, ApiClient) {
    let server = support::start_nsot_server().await;
    let config = NsotConfig::builder()
        .base_url(BaseUrl::new(server.uri()).unwrap())
        .email(Email::new("jathan@localhost").unwrap())
        .build()
        .unwrap();
    let client = ApiClient::new(&config);
    (server, client)
}

// ============================================================================
// Create
// ============================================================================

#[tokio::test]
async fn test_create_assigns_id_and_default_site() {
    let (_server, client) = start_client().await;

    let created = ProtocolType::create(&client, NewProtocolType::new("bgp"))
        .await
        .unwrap();

    assert_eq!(created.id, 1);
    assert_eq!(created.name, "bgp");
    assert_eq!(created.description, "");
    assert_eq!(created.site_id, SiteId(1));
}

#[tokio::test]
async fn test_create_round_trips_all_fields() {
    let (_server, client) = start_client().await;

    let created = ProtocolType::create(
        &client,
        NewProtocolType::new("ospf")
            .description("OSPF is the best")
            .site(SiteId(1)),
    )
    .await
    .unwrap();

    let listed = ProtocolType::list(&client, &ProtocolTypeFilter::default().id(created.id))
        .await
        .unwrap();

    assert_eq!(listed, vec![created]);
    assert_eq!(listed[0].description, "OSPF is the best");
}

#[tokio::test]
async fn test_duplicate_site_name_pair_fails_with_verbatim_message() {
    let (_server, client) = start_client().await;

    ProtocolType::create(&client, NewProtocolType::new("bgp"))
        .await
        .unwrap();
    let result = ProtocolType::create(&client, NewProtocolType::new("bgp")).await;

    match result {
        Err(HttpError::Response(e)) => {
            assert_eq!(e.code, 400);
            assert!(e.message.contains(support::UNIQUE_ERROR));
        }
        other => panic!("expected uniqueness violation, got {other:?}"),
    }
}

#[tokio::test]
async fn test_same_name_on_different_sites_is_allowed() {
    let (_server, client) = start_client().await;

    ProtocolType::create(&client, NewProtocolType::new("bgp").site(SiteId(1)))
        .await
        .unwrap();
    let second = ProtocolType::create(&client, NewProtocolType::new("bgp").site(SiteId(2))).await;

    assert!(second.is_ok());
}

// ============================================================================
// List
// ============================================================================

#[tokio::test]
async fn test_list_filters_by_name_site_and_id() {
    let (_server, client) = start_client().await;

    let bgp = ProtocolType::create(&client, NewProtocolType::new("bgp"))
        .await
        .unwrap();
    ProtocolType::create(&client, NewProtocolType::new("ospf"))
        .await
        .unwrap();

    let by_name = ProtocolType::list(&client, &ProtocolTypeFilter::default().name("bgp"))
        .await
        .unwrap();
    assert_eq!(by_name.len(), 1);
    assert_eq!(by_name[0].name, "bgp");

    let by_site = ProtocolType::list(&client, &ProtocolTypeFilter::default().site(SiteId(1)))
        .await
        .unwrap();
    assert_eq!(by_site.len(), 2);

    let by_id = ProtocolType::list(&client, &ProtocolTypeFilter::default().id(bgp.id))
        .await
        .unwrap();
    assert_eq!(by_id.len(), 1);
    assert_eq!(by_id[0].id, bgp.id);
}

#[tokio::test]
async fn test_list_with_zero_matches_is_empty_not_error() {
    let (_server, client) = start_client().await;

    let listed = ProtocolType::list(&client, &ProtocolTypeFilter::default().name("eigrp"))
        .await
        .unwrap();

    assert!(listed.is_empty());
}

// ============================================================================
// Update
// ============================================================================

#[tokio::test]
async fn test_independent_field_updates_compose() {
    let (_server, client) = start_client().await;

    let created = ProtocolType::create(&client, NewProtocolType::new("bgp"))
        .await
        .unwrap();

    ProtocolType::update(
        &client,
        created.id,
        created.site_id,
        ProtocolTypePatch::default().name("Cake"),
    )
    .await
    .unwrap();

    ProtocolType::update(
        &client,
        created.id,
        created.site_id,
        ProtocolTypePatch::default().description("Rise"),
    )
    .await
    .unwrap();

    let fetched = ProtocolType::fetch(&client, created.id).await.unwrap();
    assert_eq!(fetched.name, "Cake");
    assert_eq!(fetched.description, "Rise");
}

#[tokio::test]
async fn test_update_with_unchanged_value_is_idempotent() {
    let (_server, client) = start_client().await;

    let created = ProtocolType::create(&client, NewProtocolType::new("bgp"))
        .await
        .unwrap();

    let updated = ProtocolType::update(
        &client,
        created.id,
        created.site_id,
        ProtocolTypePatch::default().name("bgp"),
    )
    .await
    .unwrap();

    assert_eq!(updated, created);
}

#[tokio::test]
async fn test_update_nonexistent_pair_is_not_found() {
    let (_server, client) = start_client().await;

    let created = ProtocolType::create(&client, NewProtocolType::new("bgp"))
        .await
        .unwrap();

    // Right id, wrong site.
    let result = ProtocolType::update(
        &client,
        created.id,
        SiteId(9),
        ProtocolTypePatch::default().name("Cake"),
    )
    .await;

    assert!(matches!(result, Err(ref e) if e.is_not_found()));
}

// ============================================================================
// Delete
// ============================================================================

#[tokio::test]
async fn test_delete_removes_the_resource() {
    let (_server, client) = start_client().await;

    let created = ProtocolType::create(&client, NewProtocolType::new("bgp"))
        .await
        .unwrap();

    ProtocolType::delete(&client, created.id, created.site_id)
        .await
        .unwrap();

    let listed = ProtocolType::list(&client, &ProtocolTypeFilter::default().id(created.id))
        .await
        .unwrap();
    assert!(listed.is_empty());
}

#[tokio::test]
async fn test_delete_nonexistent_pair_is_not_found() {
    let (_server, client) = start_client().await;

    let result = ProtocolType::delete(&client, 42, SiteId(1)).await;
    assert!(matches!(result, Err(ref e) if e.is_not_found()));
}

// ============================================================================
// Sites
// ============================================================================

#[tokio::test]
async fn test_site_fetch_round_trips() {
    let (_server, client) = start_client().await;

    let site = Site::fetch(&client, SiteId(1)).await.unwrap();
    assert_eq!(site.id, SiteId(1));
    assert_eq!(site.name, "Default Site");

    let listed = Site::list(&client).await.unwrap();
    assert_eq!(listed, vec![site]);
}

#[tokio::test]
async fn test_site_fetch_unknown_id_is_not_found() {
    let (_server, client) = start_client().await;

    let result = Site::fetch(&client, SiteId(99)).await;
    assert!(matches!(result, Err(ref e) if e.is_not_found()));
}

// ============================================================================
// State machine: absent -> present -> present -> absent
// ============================================================================

#[tokio::test]
async fn test_full_lifecycle() {
    let (_server, client) = start_client().await;

    // absent
    assert!(
        ProtocolType::list(&client, &ProtocolTypeFilter::default())
            .await
            .unwrap()
            .is_empty()
    );

    // add -> present
    let created = ProtocolType::create(
        &client,
        NewProtocolType::new("isis").description("Intermediate System"),
    )
    .await
    .unwrap();

    // update* -> present
    let updated = ProtocolType::update(
        &client,
        created.id,
        created.site_id,
        ProtocolTypePatch::default().description("IS-IS"),
    )
    .await
    .unwrap();
    assert_eq!(updated.name, "isis");
    assert_eq!(updated.description, "IS-IS");

    // remove -> absent
    ProtocolType::delete(&client, created.id, created.site_id)
        .await
        .unwrap();
    assert!(
        ProtocolType::list(&client, &ProtocolTypeFilter::default())
            .await
            .unwrap()
            .is_empty()
    );
}
