//! Tests for valve settings and model list derivation.

use manifold_cloudflare::{CloudflareConfig, DEFAULT_BASE_URL, DEFAULT_MODEL_IDS};

#[test]
fn test_models_trims_whitespace_and_preserves_order() {
    let config = CloudflareConfig::builder()
        .model_ids("@cf/a/b, @cf/c/d")
        .build()
        .unwrap();

    let models = config.models();
    assert_eq!(models.len(), 2);
    assert_eq!(models[0].id, "@cf/a/b");
    assert_eq!(models[0].name, "Cloudflare: b");
    assert_eq!(models[1].id, "@cf/c/d");
    assert_eq!(models[1].name, "Cloudflare: d");
}

#[test]
fn test_models_drops_empty_entries() {
    let config = CloudflareConfig::builder()
        .model_ids(",@cf/x/y,, ,@cf/z/w,")
        .build()
        .unwrap();

    let models = config.models();
    let ids: Vec<&str> = models.iter().map(|m| m.id.as_str()).collect();
    assert_eq!(ids, vec!["@cf/x/y", "@cf/z/w"]);
}

#[test]
fn test_models_without_path_segments_use_full_id_as_label() {
    let config = CloudflareConfig::builder()
        .model_ids("plain-model")
        .build()
        .unwrap();

    let models = config.models();
    assert_eq!(models[0].name, "Cloudflare: plain-model");
}

#[test]
fn test_models_is_rederived_on_every_call() {
    let config = CloudflareConfig::builder()
        .model_ids("@cf/a/b")
        .build()
        .unwrap();

    assert_eq!(config.models(), config.models());
}

#[test]
fn test_defaults() {
    let config = CloudflareConfig::default();
    assert!(config.account_id().is_empty());
    assert!(config.api_key().is_empty());
    assert_eq!(config.model_ids(), DEFAULT_MODEL_IDS);
    assert_eq!(config.base_url(), DEFAULT_BASE_URL);
    assert_eq!(config.models().len(), 2);
}

#[test]
fn test_endpoint_url_interpolates_account_id() {
    let config = CloudflareConfig::builder()
        .account_id("acct-1")
        .build()
        .unwrap();

    assert_eq!(
        config.endpoint_url(),
        "https://api.cloudflare.com/client/v4/accounts/acct-1/ai/v1/responses"
    );
}

#[test]
fn test_endpoint_url_tolerates_trailing_slash_in_base() {
    let config = CloudflareConfig::builder()
        .account_id("acct-1")
        .base_url("http://localhost:8080/")
        .build()
        .unwrap();

    assert_eq!(
        config.endpoint_url(),
        "http://localhost:8080/accounts/acct-1/ai/v1/responses"
    );
}

#[test]
fn test_from_file_parses_toml() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("valves.toml");
    std::fs::write(
        &path,
        r#"
account_id = "acct-42"
api_key = "secret"
model_ids = "@cf/a/b"
"#,
    )?;

    let config = CloudflareConfig::from_file(&path)?;
    assert_eq!(config.account_id(), "acct-42");
    assert_eq!(config.api_key(), "secret");
    assert_eq!(config.model_ids(), "@cf/a/b");
    assert_eq!(config.base_url(), DEFAULT_BASE_URL);
    Ok(())
}

#[test]
fn test_from_file_rejects_invalid_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("valves.toml");
    std::fs::write(&path, "account_id = [not toml").unwrap();

    let err = CloudflareConfig::from_file(&path).unwrap_err();
    assert!(err.to_string().contains("Failed to parse config"));
}

#[test]
fn test_from_file_reports_missing_file() {
    let err = CloudflareConfig::from_file("/does/not/exist/valves.toml").unwrap_err();
    assert!(err.to_string().contains("Failed to read config file"));
}
