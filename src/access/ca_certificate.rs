//! Short-lived certificate authorities for Access applications.
//!
//! Each Access application can have one SSH certificate authority. Access
//! signs short-lived SSH certificates with it, and servers trust the CA's
//! public key instead of individual user keys.
//!
//! # Example
//!
//! ```no_run
//! use cfaccess::{Client, Scope};
//!
//! # async fn example() -> Result<(), cfaccess::Error> {
//! let client = Client::new("your_api_token")?;
//! let scope = Scope::account("01a7362d577a6c3019a474fd6f485823");
//!
//! let cert = client
//!     .create_access_ca_certificate(&scope, "f174e90a-fafe-4643-bbbc-4a0ed4fc8415")
//!     .await?;
//! println!("{}", cert.public_key);
//! # Ok(())
//! # }
//! ```
//!
//! # API Reference
//!
//! - [Short-lived certificate CAs](https://developers.cloudflare.com/api/resources/zero_trust/subresources/access/subresources/applications/subresources/cas/)

use serde::{Deserialize, Serialize};

use crate::api::{Client, Error};
use crate::types::{PublicKeyError, SshPublicKey};
use crate::Scope;

/// An SSH certificate authority bound to one Access application.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct AccessCaCertificate {
    /// Certificate ID, assigned by the API.
    pub id: String,
    /// Audience tag of the associated application.
    pub aud: String,
    /// CA public key in OpenSSH `authorized_keys` format.
    pub public_key: String,
}

impl AccessCaCertificate {
    /// Splits [`Self::public_key`] into its algorithm, key and comment.
    pub fn ssh_public_key(&self) -> Result<SshPublicKey<'_>, PublicKeyError> {
        SshPublicKey::parse(&self.public_key)
    }
}

fn ca_path(scope: &Scope, app_id: &str) -> String {
    format!("{}/access/apps/{}/ca", scope, app_id)
}

fn ca_list_path(scope: &Scope) -> String {
    format!("{}/access/apps/ca", scope)
}

impl Client {
    /// Gets the CA certificate of an Access application.
    pub async fn access_ca_certificate(
        &self,
        scope: &Scope,
        app_id: &str,
    ) -> Result<AccessCaCertificate, Error> {
        self.get(&ca_path(scope, app_id)).await
    }

    /// Lists the CA certificates of every Access application in the scope.
    pub async fn access_ca_certificates(
        &self,
        scope: &Scope,
    ) -> Result<Vec<AccessCaCertificate>, Error> {
        self.get_list(&ca_list_path(scope)).await
    }

    /// Generates a new CA certificate for an Access application.
    pub async fn create_access_ca_certificate(
        &self,
        scope: &Scope,
        app_id: &str,
    ) -> Result<AccessCaCertificate, Error> {
        self.post(&ca_path(scope, app_id)).await
    }

    /// Deletes the CA certificate of an Access application.
    pub async fn delete_access_ca_certificate(
        &self,
        scope: &Scope,
        app_id: &str,
    ) -> Result<(), Error> {
        self.delete(&ca_path(scope, app_id)).await
    }
}
