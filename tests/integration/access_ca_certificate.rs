//! Integration tests for Access CA certificates.
//!
//! # Environment Variables
//!
//! | Variable | Required | Description |
//! |----------|----------|-------------|
//! | `CLOUDFLARE_API_TOKEN` | Yes | API token with Access: Apps and Policies edit permission |
//! | `CLOUDFLARE_ACCOUNT_ID` | Yes | Account that owns the test application |
//! | `CLOUDFLARE_ACCESS_APP_ID` | Yes | UUID of an Access application without a CA |

use cfaccess::{Client, Scope};
use std::env;

/// Test configuration loaded from environment.
struct TestConfig {
    client: Client,
    scope: Scope,
    app_id: String,
}

/// Returns None if credentials are not available.
fn get_test_config() -> Option<TestConfig> {
    // Load .env file if present (ignore errors if file doesn't exist)
    let _ = dotenvy::dotenv();

    let api_token = env::var("CLOUDFLARE_API_TOKEN").ok()?;
    let account_id = env::var("CLOUDFLARE_ACCOUNT_ID").ok()?;
    let app_id = env::var("CLOUDFLARE_ACCESS_APP_ID").ok()?;

    Some(TestConfig {
        client: Client::new(&api_token).ok()?,
        scope: Scope::account(account_id),
        app_id,
    })
}

#[tokio::test]
#[ignore = "requires CLOUDFLARE credentials in .env"]
async fn test_list_certificates() {
    let config = get_test_config().expect(
        "CLOUDFLARE credentials not found. Set CLOUDFLARE_API_TOKEN and CLOUDFLARE_ACCOUNT_ID in .env",
    );

    let certs = config
        .client
        .access_ca_certificates(&config.scope)
        .await
        .unwrap_or_else(|e| panic!("Failed to list certificates: {:?}", e));

    println!("Found {} CA certificates", certs.len());
    for cert in &certs {
        println!("  - {} (aud: {})", cert.id, cert.aud);
    }
}

#[tokio::test]
#[ignore = "requires CLOUDFLARE credentials in .env"]
async fn test_certificate_lifecycle() {
    let config = get_test_config().expect("CLOUDFLARE credentials not found in .env");

    // Clean up a CA left over from a previous run.
    let _ = config
        .client
        .delete_access_ca_certificate(&config.scope, &config.app_id)
        .await;

    let created = config
        .client
        .create_access_ca_certificate(&config.scope, &config.app_id)
        .await
        .expect("Failed to create certificate");
    assert!(!created.id.is_empty());
    assert!(created.ssh_public_key().is_ok());

    let fetched = config
        .client
        .access_ca_certificate(&config.scope, &config.app_id)
        .await
        .expect("Failed to get certificate");
    assert_eq!(fetched, created);

    let listed = config
        .client
        .access_ca_certificates(&config.scope)
        .await
        .expect("Failed to list certificates");
    assert!(listed.iter().any(|c| c.id == created.id));

    config
        .client
        .delete_access_ca_certificate(&config.scope, &config.app_id)
        .await
        .expect("Failed to delete certificate");

    let after = config
        .client
        .access_ca_certificate(&config.scope, &config.app_id)
        .await;
    assert!(after.is_err(), "Certificate should be gone after delete");
}

/// Test that authentication failure is handled properly.
#[tokio::test]
#[ignore = "requires network access"]
async fn test_invalid_credentials() {
    let client = Client::new("invalid_api_token").expect("Client creation should succeed");

    let result = client
        .access_ca_certificates(&Scope::account("01a7362d577a6c3019a474fd6f485823"))
        .await;
    assert!(result.is_err(), "Expected error with invalid credentials");
}
