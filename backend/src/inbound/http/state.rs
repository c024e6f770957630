//! Shared HTTP adapter state.
//!
//! Handlers receive this through `web::Data`, so they only see the driving
//! ports and stay testable without real storage.

use std::sync::Arc;

use crate::domain::ports::{DestinationQuery, ItineraryCommand, ItineraryQuery};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub destinations: Arc<dyn DestinationQuery>,
    pub itineraries: Arc<dyn ItineraryCommand>,
    pub itineraries_query: Arc<dyn ItineraryQuery>,
}

impl HttpState {
    pub fn new(
        destinations: Arc<dyn DestinationQuery>,
        itineraries: Arc<dyn ItineraryCommand>,
        itineraries_query: Arc<dyn ItineraryQuery>,
    ) -> Self {
        Self {
            destinations,
            itineraries,
            itineraries_query,
        }
    }
}
