//! Fetched records and their wire shape.

use crate::model::error::InvalidRecord;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identity of a record. The dedup key of the record store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(u64);

impl RecordId {
    /// Wrap a raw id.
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Raw id.
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A fetched entity.
///
/// Immutable once stored. A later fetch of the same id replaces the whole value;
/// fields are never merged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Dedup key.
    pub id: RecordId,
    /// Given name, if the source sent one.
    pub first_name: Option<String>,
    /// Family name, if the source sent one.
    pub last_name: Option<String>,
    /// Email address, if the source sent one.
    pub email: Option<String>,
    /// Avatar URI; empty when absent.
    #[serde(default)]
    pub avatar: String,
}

impl Record {
    /// Record with only an identity; the remaining fields are filled with the `with_*` builders.
    pub fn new(id: u64) -> Self {
        Self {
            id: RecordId::new(id),
            first_name: None,
            last_name: None,
            email: None,
            avatar: String::new(),
        }
    }

    /// Set the first name.
    pub fn with_first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = Some(first_name.into());
        self
    }

    /// Set the last name.
    pub fn with_last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = Some(last_name.into());
        self
    }

    /// Set the email address.
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Set the avatar URI.
    pub fn with_avatar(mut self, avatar: impl Into<String>) -> Self {
        self.avatar = avatar.into();
        self
    }

    /// `"{first_name} {last_name}"` with missing parts rendered empty.
    pub fn full_name(&self) -> String {
        format!(
            "{} {}",
            self.first_name.as_deref().unwrap_or(""),
            self.last_name.as_deref().unwrap_or("")
        )
    }
}

/// Record as it arrives on the wire. Every field may be absent.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawRecord {
    /// Identity; a record without one is rejected.
    pub id: Option<u64>,
    /// Given name.
    pub first_name: Option<String>,
    /// Family name.
    pub last_name: Option<String>,
    /// Email address.
    pub email: Option<String>,
    /// Avatar URI.
    pub avatar: Option<String>,
}

impl RawRecord {
    /// Validate identity and convert into a [`Record`].
    ///
    /// `position` is only used for error reporting.
    pub fn into_record(self, position: usize) -> Result<Record, InvalidRecord> {
        let id = self.id.ok_or(InvalidRecord::MissingId { position })?;
        Ok(Record {
            id: RecordId::new(id),
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            avatar: self.avatar.unwrap_or_default(),
        })
    }
}
