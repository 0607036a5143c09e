//! Cloudflare Zero Trust Access resources.
//!
//! Resources are exposed as methods on [`crate::Client`], each taking a
//! [`crate::Scope`] to select between the account and zone trees.
//!
//! # API Reference
//!
//! - [Access applications](https://developers.cloudflare.com/api/resources/zero_trust/subresources/access/subresources/applications/)

pub mod ca_certificate;

pub use ca_certificate::AccessCaCertificate;
