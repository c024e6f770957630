//! Destination catalogue entries.
//!
//! Destinations are immutable records built once at startup. Each one is
//! validated through [`DestinationDraft`] so the catalogue cannot carry a
//! blank name or a malformed identifier.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::slug::is_valid_slug;

/// Validation errors returned when building a [`Destination`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DestinationValidationError {
    #[error("destination id must contain lowercase ASCII letters, digits, and hyphens")]
    InvalidId,
    #[error("{field} must not be empty")]
    EmptyField { field: &'static str },
}

/// Stable slug identifying a catalogue entry, for example `tokyo`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DestinationId(String);

impl DestinationId {
    /// Validate and wrap a catalogue identifier.
    ///
    /// # Examples
    /// ```
    /// use destinate::domain::DestinationId;
    ///
    /// assert!(DestinationId::new("santorini").is_ok());
    /// assert!(DestinationId::new("Santorini").is_err());
    /// ```
    pub fn new(id: impl Into<String>) -> Result<Self, DestinationValidationError> {
        let id = id.into();
        if is_valid_slug(&id) {
            Ok(Self(id))
        } else {
            Err(DestinationValidationError::InvalidId)
        }
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for DestinationId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for DestinationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for DestinationId {
    type Error = DestinationValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<DestinationId> for String {
    fn from(value: DestinationId) -> Self {
        value.0
    }
}

/// Latitude and longitude in decimal degrees.
///
/// No range checks are applied; the distance helpers accept any finite pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    #[must_use]
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// Input payload for building a [`Destination`].
#[derive(Debug, Clone, PartialEq)]
pub struct DestinationDraft {
    pub id: String,
    pub name: String,
    pub country: String,
    pub coordinates: Coordinates,
    pub description: String,
    pub image: String,
    pub highlights: Vec<String>,
    pub best_time_to_visit: String,
}

/// A catalogue destination.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Destination {
    id: DestinationId,
    name: String,
    country: String,
    coordinates: Coordinates,
    description: String,
    image: String,
    highlights: Vec<String>,
    best_time_to_visit: String,
}

impl Destination {
    pub fn id(&self) -> &DestinationId {
        &self.id
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn country(&self) -> &str {
        self.country.as_str()
    }

    pub fn coordinates(&self) -> Coordinates {
        self.coordinates
    }

    pub fn description(&self) -> &str {
        self.description.as_str()
    }

    pub fn image(&self) -> &str {
        self.image.as_str()
    }

    pub fn highlights(&self) -> &[String] {
        &self.highlights
    }

    pub fn best_time_to_visit(&self) -> &str {
        self.best_time_to_visit.as_str()
    }

    /// Case-insensitive substring match on name, country and description.
    ///
    /// `needle` must already be lowercased by the caller.
    pub fn matches_lowercase(&self, needle: &str) -> bool {
        [&self.name, &self.country, &self.description]
            .into_iter()
            .any(|field| field.to_lowercase().contains(needle))
    }
}

impl TryFrom<DestinationDraft> for Destination {
    type Error = DestinationValidationError;

    fn try_from(draft: DestinationDraft) -> Result<Self, Self::Error> {
        let DestinationDraft {
            id,
            name,
            country,
            coordinates,
            description,
            image,
            highlights,
            best_time_to_visit,
        } = draft;

        let id = DestinationId::new(id)?;
        let name = non_empty(name, "destination.name")?;
        let country = non_empty(country, "destination.country")?;

        Ok(Self {
            id,
            name,
            country,
            coordinates,
            description,
            image,
            highlights,
            best_time_to_visit,
        })
    }
}

fn non_empty(value: String, field: &'static str) -> Result<String, DestinationValidationError> {
    if value.trim().is_empty() {
        Err(DestinationValidationError::EmptyField { field })
    } else {
        Ok(value)
    }
}
