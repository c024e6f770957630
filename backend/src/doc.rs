//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every inbound HTTP path, the schema wrappers from
//! [`crate::inbound::http::schemas`] and the optional bearer token scheme.
//! Swagger UI serves it in debug builds and `openapi-dump` writes it out for
//! external tooling.

use crate::inbound::http::destinations::TripDistanceResponse;
use crate::inbound::http::itineraries::{CreateItineraryRequest, DestinationSnapshotRequest};
use crate::inbound::http::schemas::{
    CoordinatesSchema, DestinationSchema, DestinationSnapshotSchema, ErrorCodeSchema, ErrorSchema,
    ItinerarySchema,
};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

/// Enrich the generated document with the bearer token security scheme.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "BearerToken",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .description(Some(
                        "Identity provider JWT. Only the `sub` claim is read.",
                    ))
                    .build(),
            ),
        );
    }
}

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "Destinate API",
        description = "Destination catalogue, trip distances and saved itineraries.",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::destinations::search_destinations,
        crate::inbound::http::destinations::trip_distance,
        crate::inbound::http::destinations::get_destination,
        crate::inbound::http::itineraries::list_itineraries,
        crate::inbound::http::itineraries::get_itinerary,
        crate::inbound::http::itineraries::create_itinerary,
        crate::inbound::http::itineraries::delete_itinerary,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        ErrorSchema,
        ErrorCodeSchema,
        CoordinatesSchema,
        DestinationSchema,
        DestinationSnapshotSchema,
        ItinerarySchema,
        TripDistanceResponse,
        CreateItineraryRequest,
        DestinationSnapshotRequest,
    )),
    tags(
        (name = "destinations", description = "Read-only destination catalogue"),
        (name = "itineraries", description = "Saved trip plans"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
