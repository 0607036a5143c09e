//! Account and zone scopes.
//!
//! Most Access resources exist twice in the API: once under an account and
//! once under a zone. The two trees differ only in their path prefix, so
//! every resource operation takes a [`Scope`] instead of being duplicated.

use core::fmt;

/// The account or zone a resource lives under.
///
/// # Example
///
/// ```
/// use cfaccess::Scope;
///
/// let scope = Scope::zone("023e105f4ecef8ad9ca31a8372d0c353");
/// assert_eq!(scope.path_prefix(), "/zones/023e105f4ecef8ad9ca31a8372d0c353");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Scope {
    /// An account, identified by its account ID.
    Account(String),
    /// A zone, identified by its zone ID.
    Zone(String),
}

impl Scope {
    /// Creates an account scope.
    pub fn account(id: impl Into<String>) -> Self {
        Scope::Account(id.into())
    }

    /// Creates a zone scope.
    pub fn zone(id: impl Into<String>) -> Self {
        Scope::Zone(id.into())
    }

    /// Returns the account or zone identifier.
    pub fn id(&self) -> &str {
        match self {
            Scope::Account(id) | Scope::Zone(id) => id,
        }
    }

    /// Returns the collection name used in paths (`accounts` or `zones`).
    pub fn kind(&self) -> &'static str {
        match self {
            Scope::Account(_) => "accounts",
            Scope::Zone(_) => "zones",
        }
    }

    /// Returns `true` for [`Scope::Account`].
    pub fn is_account(&self) -> bool {
        matches!(self, Scope::Account(_))
    }

    /// Returns `true` for [`Scope::Zone`].
    pub fn is_zone(&self) -> bool {
        matches!(self, Scope::Zone(_))
    }

    /// Returns the path prefix, e.g. `/accounts/{id}`.
    pub fn path_prefix(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}/{}", self.kind(), self.id())
    }
}
