use serde_json::json;
use vhub_domain::config::{ApiConfig, CatalogConfig, ServerConfig, SessionConfig};

#[test]
fn config_defaults_are_sane() {
    let server = ServerConfig::default();
    assert_eq!(server.port, 4280);
    assert!(server.ssl.is_none());

    let catalog = CatalogConfig::default();
    assert!(catalog.path.is_none());

    let session = SessionConfig::default();
    assert_eq!(session.cache_capacity, 10_000);
    assert_eq!(session.idle_ttl_seconds, 3600);
}

#[test]
fn api_config_deserializes() {
    let raw = json!({
        "server": { "address": "::", "port": 8080 },
        "catalog": { "path": "/tmp/catalog.json" },
        "session": { "cache_capacity": 64, "idle_ttl_seconds": 120 }
    });

    let cfg: ApiConfig = serde_json::from_value(raw).expect("config deserialize");
    assert_eq!(cfg.server.port, 8080);
    assert_eq!(cfg.catalog.path.as_deref(), Some(std::path::Path::new("/tmp/catalog.json")));
    assert_eq!(cfg.session.cache_capacity, 64);
}

#[test]
fn partial_config_falls_back_to_defaults() {
    let raw = json!({ "server": { "port": 9000 } });

    let cfg: ApiConfig = serde_json::from_value(raw).expect("config deserialize");
    assert_eq!(cfg.server.port, 9000);
    assert_eq!(cfg.session.idle_ttl_seconds, 3600);
    assert!(cfg.catalog.path.is_none());
}
