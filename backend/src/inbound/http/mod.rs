//! HTTP inbound adapter exposing the REST endpoints.

pub mod auth;
pub mod destinations;
pub mod error;
pub mod health;
pub mod itineraries;
pub mod schemas;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod validation;

pub use error::{ApiResult, json_config};

use actix_web::{Scope, web};

/// The `/api` scope with every REST handler registered.
///
/// Literal `/destinations/...` routes are registered before
/// `/destinations/{id}` so the path parameter does not swallow them.
pub fn api_scope() -> Scope {
    web::scope("/api")
        .app_data(json_config())
        .service(destinations::search_destinations)
        .service(destinations::trip_distance)
        .service(destinations::get_destination)
        .service(itineraries::list_itineraries)
        .service(itineraries::create_itinerary)
        .service(itineraries::get_itinerary)
        .service(itineraries::delete_itinerary)
}
