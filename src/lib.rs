//! Cloudflare Access API client.
//!
//! `cfaccess` wraps the Cloudflare v4 REST API for Zero Trust Access
//! resources. Every call maps onto one HTTP request, decodes the standard
//! `{result, success, errors, messages}` envelope and returns the typed
//! `result` or an [`Error`].
//!
//! # Example
//!
//! ```no_run
//! use cfaccess::{Client, Scope};
//!
//! # async fn example() -> Result<(), cfaccess::Error> {
//! let client = Client::new("your_api_token")?;
//!
//! for cert in client
//!     .access_ca_certificates(&Scope::account("01a7362d577a6c3019a474fd6f485823"))
//!     .await?
//! {
//!     println!("{} {}", cert.aud, cert.public_key);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Logging
//!
//! Requests are logged through [`tracing`] at `debug` level and failures at
//! `warn` level. Install a subscriber in the application to see them.

use std::net::IpAddr;
use std::time::Duration;

pub mod access;
pub mod api;
pub mod scope;
pub mod types;

pub use access::AccessCaCertificate;
pub use api::{ApiError, ApiErrors, Client, Error};
pub use scope::Scope;

/// Network configuration for the underlying HTTP client.
///
/// # Example
///
/// ```
/// use cfaccess::HttpClientConfig;
/// use std::time::Duration;
///
/// let config = HttpClientConfig::new()
///     .local_address("192.168.1.100".parse().unwrap())
///     .timeout(Duration::from_secs(10));
/// assert_eq!(config.timeout, Some(Duration::from_secs(10)));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HttpClientConfig {
    /// Local IP address to bind outgoing connections to.
    pub local_address: Option<IpAddr>,
    /// Network interface to bind to (Linux, Android, Fuchsia and Apple
    /// platforms only; ignored elsewhere).
    pub interface: Option<String>,
    /// Request timeout. Defaults to 30 seconds when unset.
    pub timeout: Option<Duration>,
}

impl HttpClientConfig {
    /// Creates an empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds outgoing connections to a local IP address.
    pub fn local_address(mut self, addr: IpAddr) -> Self {
        self.local_address = Some(addr);
        self
    }

    /// Binds outgoing connections to a network interface.
    pub fn interface(mut self, interface: impl Into<String>) -> Self {
        self.interface = Some(interface.into());
        self
    }

    /// Sets the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}
