//! Low-level Cloudflare API transport.
//!
//! Every endpoint answers with the same JSON envelope:
//!
//! ```json
//! { "result": ..., "success": true, "errors": [], "messages": [] }
//! ```
//!
//! [`Client`] issues one request per call, decodes the envelope and hands the
//! `result` back to the resource modules (see [`crate::access`]).
//!
//! # API Reference
//!
//! - [API overview](https://developers.cloudflare.com/fundamentals/api/)

use std::fmt;

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Method, RequestBuilder, StatusCode};
use serde::de::{DeserializeOwned, IgnoredAny};
use serde::{Deserialize, Deserializer};
use thiserror::Error;

use crate::HttpClientConfig;

/// The Cloudflare API base URL.
pub const CLOUDFLARE_API_URL: &str = "https://api.cloudflare.com/client/v4";

const DEFAULT_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(30);

/// Errors that may occur when interacting with the Cloudflare API.
#[derive(Debug, Error)]
pub enum Error {
    /// The API answered with `success: false`.
    #[error("API error: {0}")]
    Api(ApiErrors),

    /// The API answered with a non-2xx status and no usable error envelope.
    #[error("unexpected HTTP status {status}")]
    Status {
        /// The HTTP status code.
        status: u16,
    },

    /// An HTTP request error occurred.
    #[error("HTTP request error: {0}")]
    Request(#[from] reqwest::Error),

    /// Failed to serialize/deserialize.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The envelope reported success but carried no `result`.
    #[error("no result in response")]
    MissingResult,

    /// The API token cannot be sent as an HTTP header.
    #[error("API token contains characters not allowed in an HTTP header")]
    InvalidToken,
}

impl Error {
    /// Returns the provider error list if this is an [`Error::Api`].
    pub fn api_errors(&self) -> Option<&ApiErrors> {
        match self {
            Error::Api(errors) => Some(errors),
            _ => None,
        }
    }
}

/// A single entry of the envelope's `errors` array.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ApiError {
    /// Error code.
    pub code: i32,
    /// Error message.
    pub message: String,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

/// The full error list reported by a failed request, in response order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApiErrors(pub Vec<ApiError>);

impl ApiErrors {
    /// Iterates over the reported errors.
    pub fn iter(&self) -> std::slice::Iter<'_, ApiError> {
        self.0.iter()
    }

    /// Number of reported errors.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the API reported no error entries.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the reported error codes, in response order.
    pub fn codes(&self) -> Vec<i32> {
        self.0.iter().map(|e| e.code).collect()
    }

    /// Returns `true` if any reported error has the given code.
    pub fn contains_code(&self, code: i32) -> bool {
        self.0.iter().any(|e| e.code == code)
    }
}

impl fmt::Display for ApiErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return write!(f, "unknown error");
        }
        for (i, error) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{}", error)?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a ApiErrors {
    type Item = &'a ApiError;
    type IntoIter = std::slice::Iter<'a, ApiError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Cloudflare API response wrapper.
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    /// Whether the request succeeded.
    pub success: bool,
    /// Errors reported by the API.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub errors: Vec<ApiError>,
    /// Informational messages. Their shape varies by endpoint.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub messages: Vec<serde_json::Value>,
    /// The payload, absent or `null` on failure.
    pub result: Option<T>,
}

/// Treats a JSON `null` list the same as a missing one.
fn null_as_empty<'de, D, E>(deserializer: D) -> Result<Vec<E>, D::Error>
where
    D: Deserializer<'de>,
    E: Deserialize<'de>,
{
    Ok(Option::<Vec<E>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Decodes a response body into an envelope, applying the failure rules.
///
/// A `success: false` envelope wins over the HTTP status so the provider's
/// error list is never lost. Otherwise a non-2xx status is reported as
/// [`Error::Status`], and only a 2xx body that fails to decode is reported
/// as [`Error::Serialization`].
pub fn decode_envelope<T: DeserializeOwned>(
    status: StatusCode,
    body: &str,
) -> Result<Envelope<T>, Error> {
    match serde_json::from_str::<Envelope<T>>(body) {
        Ok(envelope) if !envelope.success => Err(Error::Api(ApiErrors(envelope.errors))),
        Ok(envelope) => {
            if status.is_success() {
                Ok(envelope)
            } else {
                Err(Error::Status {
                    status: status.as_u16(),
                })
            }
        }
        Err(err) => {
            // The result may not fit `T` on failure; look at the envelope alone.
            if let Ok(envelope) = serde_json::from_str::<Envelope<IgnoredAny>>(body) {
                if !envelope.success {
                    return Err(Error::Api(ApiErrors(envelope.errors)));
                }
            }
            if status.is_success() {
                Err(Error::Serialization(err))
            } else {
                Err(Error::Status {
                    status: status.as_u16(),
                })
            }
        }
    }
}

// =============================================================================
// API Client
// =============================================================================

/// Cloudflare API client.
///
/// Holds the connection pool and authentication headers. Cloning is cheap
/// and shares the pool.
#[derive(Clone)]
pub struct Client {
    http_client: reqwest::Client,
    headers: HeaderMap,
    base_url: String,
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl Client {
    /// Creates a new Cloudflare API client.
    ///
    /// # Arguments
    ///
    /// * `api_token` - Cloudflare API token (Bearer token)
    pub fn new(api_token: &str) -> Result<Self, Error> {
        Self::with_base_url(api_token, CLOUDFLARE_API_URL, HttpClientConfig::default())
    }

    /// Creates a new Cloudflare API client with custom HTTP configuration.
    ///
    /// # Arguments
    ///
    /// * `api_token` - Cloudflare API token (Bearer token)
    /// * `config` - HTTP client configuration for network binding
    pub fn with_config(api_token: &str, config: HttpClientConfig) -> Result<Self, Error> {
        Self::with_base_url(api_token, CLOUDFLARE_API_URL, config)
    }

    /// Creates a new Cloudflare API client with a custom base URL.
    ///
    /// This is primarily useful for testing with mock servers.
    ///
    /// # Arguments
    ///
    /// * `api_token` - Cloudflare API token (Bearer token)
    /// * `base_url` - Custom base URL for the API
    /// * `config` - HTTP client configuration for network binding
    pub fn with_base_url(
        api_token: &str,
        base_url: &str,
        config: HttpClientConfig,
    ) -> Result<Self, Error> {
        let headers = auth_headers(api_token)?;

        let mut builder =
            reqwest::Client::builder().timeout(config.timeout.unwrap_or(DEFAULT_TIMEOUT));

        if let Some(addr) = config.local_address {
            builder = builder.local_address(addr);
        }

        #[cfg(any(
            target_os = "android",
            target_os = "fuchsia",
            target_os = "linux",
            target_os = "macos",
            target_os = "ios",
            target_os = "tvos",
            target_os = "watchos",
            target_os = "illumos",
            target_os = "solaris",
        ))]
        if let Some(ref iface) = config.interface {
            builder = builder.interface(iface);
        }

        let http_client = builder.build()?;

        Ok(Self {
            http_client,
            headers,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Returns the base URL requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!("{} {}", method, url);
        self.http_client
            .request(method, url)
            .headers(self.headers.clone())
    }

    /// Sends a request and decodes the response envelope.
    async fn send<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
    ) -> Result<Envelope<T>, Error> {
        let response = self.request(method.clone(), path).send().await?;
        let status = response.status();
        let body = response.text().await?;

        decode_envelope(status, &body).inspect_err(|err| {
            tracing::warn!("{} {} failed: {}", method, path, err);
        })
    }

    /// Make a GET request for a single object.
    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, Error> {
        self.send::<T>(Method::GET, path)
            .await?
            .result
            .ok_or(Error::MissingResult)
    }

    /// Make a GET request returning a list.
    ///
    /// A `null` or absent result is an empty list.
    pub(crate) async fn get_list<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>, Error> {
        Ok(self
            .send::<Vec<T>>(Method::GET, path)
            .await?
            .result
            .unwrap_or_default())
    }

    /// Make a POST request without a body.
    pub(crate) async fn post<T: DeserializeOwned>(&self, path: &str) -> Result<T, Error> {
        self.send::<T>(Method::POST, path)
            .await?
            .result
            .ok_or(Error::MissingResult)
    }

    /// Make a DELETE request, discarding whatever result the API returns.
    pub(crate) async fn delete(&self, path: &str) -> Result<(), Error> {
        self.send::<IgnoredAny>(Method::DELETE, path).await?;
        Ok(())
    }
}

/// Build headers for API requests.
fn auth_headers(api_token: &str) -> Result<HeaderMap, Error> {
    let mut token = HeaderValue::from_str(&format!("Bearer {}", api_token))
        .map_err(|_| Error::InvalidToken)?;
    token.set_sensitive(true);

    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, token);
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    Ok(headers)
}
