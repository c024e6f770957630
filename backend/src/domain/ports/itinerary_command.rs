//! Driving port for itinerary mutations.

use async_trait::async_trait;

use crate::domain::{Error, Itinerary, ItineraryDraft, ItineraryId};

/// Use-case port for creating and removing itineraries.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ItineraryCommand: Send + Sync {
    /// Assign an id and creation time, then store the itinerary.
    async fn create_itinerary(&self, draft: ItineraryDraft) -> Result<Itinerary, Error>;

    /// Remove an itinerary, failing with `not_found` when it does not exist.
    async fn delete_itinerary(&self, id: &ItineraryId) -> Result<(), Error>;
}
