//! Builders wiring domain services over the in-memory adapters.

use std::sync::Arc;

use mockable::{Clock, DefaultClock};

use destinate::domain::ports::{DestinationQuery, ItineraryCommand, ItineraryQuery, UserAccounts};
use destinate::domain::{
    DestinationCatalogueService, ExampleDataSeeder, ItineraryCommandService,
    ItineraryQueryService, UserAccountService,
};
use destinate::inbound::http::state::HttpState;
use destinate::outbound::catalogue::StaticDestinationRepository;
use destinate::outbound::memory::{InMemoryItineraryRepository, InMemoryUserRepository};

/// Driving ports shared by every worker.
#[derive(Clone)]
pub struct AppPorts {
    destinations: Arc<dyn DestinationQuery>,
    itineraries: Arc<dyn ItineraryCommand>,
    itineraries_query: Arc<dyn ItineraryQuery>,
    users: Arc<dyn UserAccounts>,
}

impl AppPorts {
    /// Build the services over fresh process-lifetime storage.
    ///
    /// # Errors
    ///
    /// Returns [`std::io::Error`] when the built-in catalogue fails
    /// validation.
    pub fn in_memory() -> std::io::Result<Self> {
        let catalogue = StaticDestinationRepository::new().map_err(|err| {
            std::io::Error::other(format!("destination catalogue is invalid: {err}"))
        })?;
        let clock: Arc<dyn Clock> = Arc::new(DefaultClock);
        let itinerary_repo = Arc::new(InMemoryItineraryRepository::new());

        Ok(Self {
            destinations: Arc::new(DestinationCatalogueService::new(Arc::new(catalogue))),
            itineraries: Arc::new(ItineraryCommandService::new(
                Arc::clone(&itinerary_repo),
                clock,
            )),
            itineraries_query: Arc::new(ItineraryQueryService::new(itinerary_repo)),
            users: Arc::new(UserAccountService::new(Arc::new(
                InMemoryUserRepository::new(),
            ))),
        })
    }

    pub fn http_state(&self) -> HttpState {
        HttpState::new(
            Arc::clone(&self.destinations),
            Arc::clone(&self.itineraries),
            Arc::clone(&self.itineraries_query),
        )
    }

    pub fn seeder(&self) -> ExampleDataSeeder {
        ExampleDataSeeder::new(
            Arc::clone(&self.users),
            Arc::clone(&self.itineraries),
            Arc::clone(&self.destinations),
        )
    }
}
