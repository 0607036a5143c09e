//! Value types shared by Access resources.
//!
//! Access hands out SSH certificate authority keys in the OpenSSH
//! `authorized_keys` text format:
//!
//! ```text
//! <algorithm> <base64 key material> [comment]
//! ```
//!
//! [`SshPublicKey`] is a borrowed view over that text. It never allocates and
//! never rewrites the original string.

use core::fmt;

use thiserror::Error;

/// Error returned when OpenSSH public key text cannot be split.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PublicKeyError {
    /// The text is empty or whitespace only.
    #[error("public key is empty")]
    Empty,
    /// Only an algorithm name was present.
    #[error("public key has no key material")]
    MissingKey,
    /// The key material contains characters outside the base64 alphabet.
    #[error("public key material is not base64")]
    InvalidKey,
}

/// The fields of an OpenSSH public key line.
///
/// # Example
///
/// ```
/// use cfaccess::types::SshPublicKey;
///
/// let key = SshPublicKey::parse("ssh-ed25519 AAAAC3NzaC1lZDI1NTE5 ca@example.org").unwrap();
/// assert_eq!(key.algorithm(), "ssh-ed25519");
/// assert_eq!(key.key(), "AAAAC3NzaC1lZDI1NTE5");
/// assert_eq!(key.comment(), Some("ca@example.org"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SshPublicKey<'a> {
    algorithm: &'a str,
    key: &'a str,
    comment: Option<&'a str>,
}

impl<'a> SshPublicKey<'a> {
    /// Splits `text` into algorithm, key material and optional comment.
    ///
    /// Fields are separated by runs of whitespace. Everything after the key
    /// material is the comment, inner whitespace included.
    pub fn parse(text: &'a str) -> Result<Self, PublicKeyError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(PublicKeyError::Empty);
        }

        let (algorithm, rest) = text
            .split_once(char::is_whitespace)
            .ok_or(PublicKeyError::MissingKey)?;
        let rest = rest.trim_start();

        let (key, comment) = match rest.split_once(char::is_whitespace) {
            Some((key, comment)) => (key, Some(comment.trim_start())),
            None => (rest, None),
        };

        if !key.bytes().all(is_base64_byte) {
            return Err(PublicKeyError::InvalidKey);
        }

        Ok(Self {
            algorithm,
            key,
            comment,
        })
    }

    /// Key algorithm, e.g. `ecdsa-sha2-nistp256`.
    pub fn algorithm(&self) -> &'a str {
        self.algorithm
    }

    /// Base64 key material.
    pub fn key(&self) -> &'a str {
        self.key
    }

    /// Trailing comment, if any.
    pub fn comment(&self) -> Option<&'a str> {
        self.comment
    }
}

impl fmt::Display for SshPublicKey<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.algorithm, self.key)?;
        if let Some(comment) = self.comment {
            write!(f, " {}", comment)?;
        }
        Ok(())
    }
}

#[inline]
fn is_base64_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'+' | b'/' | b'=')
}
