//! Driving port for itinerary reads.

use async_trait::async_trait;

use crate::domain::{Error, Itinerary, ItineraryId, UserId};

/// Use-case port for reading itineraries.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ItineraryQuery: Send + Sync {
    /// Fetch one itinerary, failing with `not_found` when absent.
    async fn get_itinerary(&self, id: &ItineraryId) -> Result<Itinerary, Error>;

    /// List itineraries, scoped to `owner` when one is given.
    async fn list_itineraries(&self, owner: Option<UserId>) -> Result<Vec<Itinerary>, Error>;
}
