//! Domain entity representing a registered domain name.

/// A domain name record: a name paired with its top-level domain label.
///
/// The `id` is assigned by the database on insert and never changes.
/// Duplicate `(name, tld)` pairs are allowed; there is no uniqueness
/// constraint on the pair.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Domain {
    pub id: i64,
    pub name: String,
    pub tld: String,
}

impl Domain {
    /// Creates a new Domain instance.
    pub fn new(id: i64, name: String, tld: String) -> Self {
        Self { id, name, tld }
    }
}

/// Input data for creating a new domain record.
///
/// The database assigns the `id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewDomain {
    pub name: String,
    pub tld: String,
}

/// Input data for updating an existing domain record.
///
/// Both fields are required: an update overwrites `name` and `tld` in full.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateDomain {
    pub name: String,
    pub tld: String,
}
