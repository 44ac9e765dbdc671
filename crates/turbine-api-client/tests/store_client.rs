#![allow(clippy::expect_used, reason = "integration test — panics are the assertion mechanism")]

use serde_json::json;
use turbine_api_client::{ApiClient, ApiError, ClientConfig};
use turbine_api_types::{Checksum, Cluster, Domain, Instance, Proxy, Zone};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const API_KEY: &str = "test-api-key";

fn client(server: &MockServer) -> ApiClient {
    ApiClient::new(ClientConfig {
        base_url: server.uri(),
        api_key: API_KEY.to_string(),
        timeout_secs: 5,
    })
    .expect("client construction")
}

fn ok_envelope(result: serde_json::Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({ "result": result }))
}

fn error_envelope(status: u16, message: &str, code: &str) -> ResponseTemplate {
    ResponseTemplate::new(status)
        .set_body_json(json!({ "error": { "message": message, "code": code } }))
}

#[tokio::test]
async fn index_signs_requests_and_decodes_the_list() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1.0/zone"))
        .and(header("X-Turbine-Api-Key", API_KEY))
        .respond_with(ok_envelope(json!([
            { "zone_key": "zk-1", "name": "zone-a", "checksum": "cs-1" },
            { "zone_key": "zk-2", "name": "zone-b", "checksum": "cs-2" }
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let zones: Vec<Zone> = client(&server).index().await.expect("index");
    assert_eq!(zones.len(), 2);
    assert_eq!(zones[0].zone_key.as_str(), "zk-1");
    assert_eq!(zones[1].name, "zone-b");
}

#[tokio::test]
async fn index_repairs_null_optional_collections() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1.0/cluster"))
        .respond_with(ok_envelope(json!([{
            "cluster_key": "ck-1",
            "zone_key": "zk-1",
            "name": "backend",
            "instances": null,
            "checksum": "cs-1"
        }])))
        .mount(&server)
        .await;

    let clusters: Vec<Cluster> = client(&server).index().await.expect("index");
    assert!(clusters[0].instances.is_empty());
}

#[tokio::test]
async fn get_missing_resource_is_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1.0/zone/zk-missing"))
        .respond_with(error_envelope(404, "no zone with that key", "NotFound"))
        .mount(&server)
        .await;

    let err = client(&server).get::<Zone>("zk-missing").await.expect_err("get");
    assert!(err.is_not_found(), "expected NotFound, got {err:?}");
}

#[tokio::test]
async fn get_with_empty_key_fails_before_any_request() {
    let server = MockServer::start().await;

    let err = client(&server).get::<Zone>("").await.expect_err("get");
    assert!(matches!(err, ApiError::Invalid(_)), "expected Invalid, got {err:?}");
    assert!(server.received_requests().await.expect("requests").is_empty());
}

#[tokio::test]
async fn create_returns_server_assigned_key_and_checksum() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1.0/zone"))
        .respond_with(ok_envelope(json!({
            "zone_key": "zk-1",
            "name": "zone-a",
            "checksum": "cs-initial"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let created = client(&server).create(&Zone::named("zone-a")).await.expect("create");
    assert_eq!(created.zone_key.as_str(), "zk-1");
    assert_eq!(created.checksum, Checksum::from("cs-initial"));
}

#[tokio::test]
async fn create_surfaces_server_validation_verbatim() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1.0/domain"))
        .respond_with(error_envelope(
            400,
            "zone_key zk-dangling does not exist",
            "InvalidObjectCode",
        ))
        .mount(&server)
        .await;

    let template = Domain {
        zone_key: "zk-dangling".into(),
        name: "example.com".into(),
        port: 8080,
        ..Domain::default()
    };
    let err = client(&server).create(&template).await.expect_err("create");
    match err {
        ApiError::Validation { code, message } => {
            assert_eq!(code, "InvalidObjectCode");
            assert_eq!(message, "zone_key zk-dangling does not exist");
        }
        other => panic!("expected Validation, got {other:?}"),
    }
}

#[tokio::test]
async fn create_rejects_invalid_body_client_side() {
    let server = MockServer::start().await;

    // port 0 never leaves the client
    let template = Domain { zone_key: "zk-1".into(), name: "d".into(), ..Domain::default() };
    let err = client(&server).create(&template).await.expect_err("create");
    assert!(matches!(err, ApiError::Invalid(_)));
    assert!(server.received_requests().await.expect("requests").is_empty());
}

#[tokio::test]
async fn stale_checksum_update_conflicts_after_successful_update() {
    let server = MockServer::start().await;
    let api = client(&server);

    let zone = Zone {
        zone_key: "zk-1".into(),
        name: "zone-a".into(),
        checksum: "cs-1".into(),
    };

    {
        let _guard = Mock::given(method("PUT"))
            .and(path("/v1.0/zone/zk-1"))
            .respond_with(ok_envelope(json!({
                "zone_key": "zk-1",
                "name": "zone-a",
                "checksum": "cs-2"
            })))
            .expect(1)
            .mount_as_scoped(&server)
            .await;

        let updated = api.modify(&zone).await.expect("first update");
        assert_eq!(updated.checksum, Checksum::from("cs-2"));
    }

    {
        // server now holds cs-2; replaying the cs-1 body is a stale write
        let _guard = Mock::given(method("PUT"))
            .and(path("/v1.0/zone/zk-1"))
            .respond_with(error_envelope(409, "checksum mismatch", "UnknownModificationConflict"))
            .expect(1)
            .mount_as_scoped(&server)
            .await;

        let err = api.modify(&zone).await.expect_err("stale update");
        assert!(err.is_conflict(), "expected Conflict, got {err:?}");
    }
}

#[tokio::test]
async fn delete_sends_checksum_query_and_accepts_empty_result() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/v1.0/zone/zk-1"))
        .and(query_param("checksum", "cs-2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    client(&server)
        .delete::<Zone>("zk-1", &Checksum::from("cs-2"))
        .await
        .expect("delete");
}

#[tokio::test]
async fn delete_with_stale_checksum_conflicts() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/v1.0/zone/zk-1"))
        .and(query_param("checksum", "cs-stale"))
        .respond_with(error_envelope(409, "checksum mismatch", "UnknownModificationConflict"))
        .mount(&server)
        .await;

    let err = client(&server)
        .delete::<Zone>("zk-1", &Checksum::from("cs-stale"))
        .await
        .expect_err("delete");
    assert!(err.is_conflict(), "expected Conflict, got {err:?}");
}

#[tokio::test]
async fn add_instance_posts_subresource_with_checksum() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1.0/cluster/ck-1/instance"))
        .and(query_param("checksum", "cs-1"))
        .respond_with(ok_envelope(json!({
            "cluster_key": "ck-1",
            "zone_key": "zk-1",
            "name": "backend",
            "instances": [{ "host": "host-1", "port": 8000, "metadata": [] }],
            "checksum": "cs-2"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let cluster = client(&server)
        .add_instance(&"ck-1".into(), &"cs-1".into(), &Instance::new("host-1", 8000))
        .await
        .expect("add_instance");

    // the mutation bumps the owning cluster's checksum
    assert_eq!(cluster.checksum, Checksum::from("cs-2"));
    assert!(cluster.instance("host-1", 8000).is_some());
}

#[tokio::test]
async fn remove_instance_deletes_host_port_identity() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/v1.0/cluster/ck-1/instance/host-1:8000"))
        .and(query_param("checksum", "cs-2"))
        .respond_with(ok_envelope(json!({
            "cluster_key": "ck-1",
            "zone_key": "zk-1",
            "name": "backend",
            "instances": [],
            "checksum": "cs-3"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let cluster = client(&server)
        .remove_instance(&"ck-1".into(), &"cs-2".into(), &Instance::new("host-1", 8000))
        .await
        .expect("remove_instance");

    assert!(cluster.instance("host-1", 8000).is_none());
    assert_eq!(cluster.checksum, Checksum::from("cs-3"));
}

#[tokio::test]
async fn proxy_round_trips_through_the_generic_client() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1.0/proxy/pk-1"))
        .respond_with(ok_envelope(json!({
            "proxy_key": "pk-1",
            "zone_key": "zk-1",
            "name": "edge",
            "host": "10.0.0.1",
            "port": 443,
            "domain_keys": ["dk-1", "dk-2"],
            "checksum": "cs-p1"
        })))
        .mount(&server)
        .await;

    let proxy: Proxy = client(&server).get("pk-1").await.expect("get");
    assert_eq!(proxy.host, "10.0.0.1");
    assert_eq!(proxy.domain_keys.len(), 2);
}

#[tokio::test]
async fn undecodable_success_body_is_a_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1.0/zone"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let err = client(&server).index::<Zone>().await.expect_err("index");
    assert!(matches!(err, ApiError::Decode(_)), "expected Decode, got {err:?}");
}

#[tokio::test]
async fn non_envelope_failure_is_transport_level() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1.0/zone"))
        .respond_with(ResponseTemplate::new(502).set_body_string("bad gateway"))
        .mount(&server)
        .await;

    let err = client(&server).index::<Zone>().await.expect_err("index");
    match err {
        ApiError::UnexpectedStatus { status, body } => {
            assert_eq!(status, 502);
            assert_eq!(body, "bad gateway");
        }
        other => panic!("expected UnexpectedStatus, got {other:?}"),
    }
}
