//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, web};
use mockable::DefaultClock;

use crate::Trace;
use crate::domain::{DestinationCatalogueService, ItineraryCommandService, ItineraryQueryService};
use crate::inbound::http::api_scope;
use crate::inbound::http::state::HttpState;
use crate::outbound::catalogue::StaticDestinationRepository;
use crate::outbound::memory::InMemoryItineraryRepository;

/// State backed by the real services over fresh in-memory adapters.
pub fn in_memory_state() -> HttpState {
    let catalogue =
        Arc::new(StaticDestinationRepository::new().expect("built-in catalogue is valid"));
    let itineraries = Arc::new(InMemoryItineraryRepository::new());
    HttpState::new(
        Arc::new(DestinationCatalogueService::new(catalogue)),
        Arc::new(ItineraryCommandService::new(
            Arc::clone(&itineraries),
            Arc::new(DefaultClock),
        )),
        Arc::new(ItineraryQueryService::new(itineraries)),
    )
}

/// Application with the `/api` scope and trace middleware over `state`.
pub fn test_app(
    state: HttpState,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(state))
        .wrap(Trace)
        .service(api_scope())
}
