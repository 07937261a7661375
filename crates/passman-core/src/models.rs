//! Data models for credential entries and the vault

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::error::{VaultError, VaultResult};

/// Closed set of entry categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    Social,
    Banking,
    Shopping,
    Work,
    Other,
}

impl Category {
    /// Every category, in display order
    pub const ALL: [Category; 5] = [
        Category::Social,
        Category::Banking,
        Category::Shopping,
        Category::Work,
        Category::Other,
    ];

    /// Lowercase name as stored in the vault
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Social => "social",
            Category::Banking => "banking",
            Category::Shopping => "shopping",
            Category::Work => "work",
            Category::Other => "other",
        }
    }

    /// Parse a stored category name; anything unrecognized becomes `social`
    pub fn parse_lossy(s: &str) -> Self {
        match s {
            "banking" => Category::Banking,
            "shopping" => Category::Shopping,
            "work" => Category::Work,
            "other" => Category::Other,
            _ => Category::Social,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// Hand-written so unrecognized names decay to the default instead of
// failing the decode of an otherwise valid record.
impl<'de> Deserialize<'de> for Category {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        Ok(Category::parse_lossy(&name))
    }
}

/// One stored credential record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CredentialEntry {
    /// Unique identifier, assigned at creation, never reused
    pub id: Uuid,

    /// Website or URL as the user typed it, not normalized
    pub website: String,

    /// Account name on the site
    pub username: String,

    /// Stored in plaintext
    pub password: String,

    /// Defaults to `social` when absent or unrecognized
    #[serde(default)]
    pub category: Category,

    /// Creation time, immutable
    pub created_at: DateTime<Utc>,
}

/// User-supplied fields for a new entry, before an id and timestamp exist
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntryDraft {
    pub website: String,
    pub username: String,
    pub password: String,
    pub category: Category,
}

impl EntryDraft {
    /// Reject empty required fields. Fields are checked as-is, without
    /// trimming: whitespace-only input counts as filled.
    pub fn validate(&self) -> VaultResult<()> {
        if self.website.is_empty() {
            return Err(VaultError::MissingField("website"));
        }
        if self.username.is_empty() {
            return Err(VaultError::MissingField("username"));
        }
        if self.password.is_empty() {
            return Err(VaultError::MissingField("password"));
        }
        Ok(())
    }

    /// Promote the draft to a stored entry with a fresh id and timestamp
    pub fn into_entry(self) -> CredentialEntry {
        CredentialEntry {
            id: Uuid::new_v4(),
            website: self.website,
            username: self.username,
            password: self.password,
            category: self.category,
            created_at: Utc::now(),
        }
    }
}
