//! Itinerary records.
//!
//! An itinerary is created once and never edited. Its destination list is a
//! denormalised snapshot of the catalogue entries the user picked, so later
//! catalogue changes do not rewrite stored itineraries.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Destination, UserId};

/// Validation errors returned when building an itinerary draft.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ItineraryValidationError {
    #[error("title must not be empty")]
    EmptyTitle,
}

/// Itinerary identifier, a random v4 UUID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItineraryId(Uuid);

impl ItineraryId {
    #[must_use]
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    #[must_use]
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for ItineraryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Non-blank itinerary title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ItineraryTitle(String);

impl ItineraryTitle {
    /// # Examples
    /// ```
    /// use destinate::domain::ItineraryTitle;
    ///
    /// assert!(ItineraryTitle::new("Spring in Japan").is_ok());
    /// assert!(ItineraryTitle::new("   ").is_err());
    /// ```
    pub fn new(value: impl Into<String>) -> Result<Self, ItineraryValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ItineraryValidationError::EmptyTitle);
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// Copy of the catalogue fields kept with an itinerary.
///
/// All three fields are free text, empty strings included. Snapshots are not
/// foreign keys and may name destinations the catalogue does not know.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DestinationSnapshot {
    pub id: String,
    pub name: String,
    pub country: String,
}

impl DestinationSnapshot {
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, country: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            country: country.into(),
        }
    }
}

impl From<&Destination> for DestinationSnapshot {
    fn from(value: &Destination) -> Self {
        Self {
            id: value.id().to_string(),
            name: value.name().to_owned(),
            country: value.country().to_owned(),
        }
    }
}

/// Validated input for creating an itinerary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItineraryDraft {
    pub user_id: Option<UserId>,
    pub title: ItineraryTitle,
    pub description: Option<String>,
    pub destinations: Vec<DestinationSnapshot>,
}

/// Stored itinerary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Itinerary {
    id: ItineraryId,
    user_id: Option<UserId>,
    title: ItineraryTitle,
    description: Option<String>,
    destinations: Vec<DestinationSnapshot>,
    created_at: DateTime<Utc>,
}

impl Itinerary {
    /// Materialise a draft with its assigned id and creation time.
    #[must_use]
    pub fn new(id: ItineraryId, draft: ItineraryDraft, created_at: DateTime<Utc>) -> Self {
        let ItineraryDraft {
            user_id,
            title,
            description,
            destinations,
        } = draft;
        Self {
            id,
            user_id,
            title,
            description,
            destinations,
            created_at,
        }
    }

    pub fn id(&self) -> ItineraryId {
        self.id
    }

    pub fn user_id(&self) -> Option<&UserId> {
        self.user_id.as_ref()
    }

    pub fn title(&self) -> &str {
        self.title.as_str()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn destinations(&self) -> &[DestinationSnapshot] {
        &self.destinations
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
