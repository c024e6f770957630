//! Domain primitives, ports and services.
//!
//! Purpose: define the strongly typed entities used by the HTTP and storage
//! adapters, together with the use-case services that sit between them.
//! Nothing in this module depends on Actix or any other transport crate.
//!
//! Public surface:
//! - `Destination`, `Coordinates`, `DestinationId`: static catalogue entries.
//! - `haversine_km`, `trip_distance_km`: great-circle distance helpers.
//! - `Itinerary`, `ItineraryDraft`, `DestinationSnapshot`: stored itineraries.
//! - `User`, `NewUser`, `UserId`, `Username`, `Password`: account records.
//! - `Error`, `ErrorCode`: transport-agnostic failure payload.
//! - Services implementing the driving ports declared in [`ports`].

pub mod destination;
pub mod destination_service;
pub mod distance;
pub mod error;
pub mod example_data;
pub mod itinerary;
pub mod itinerary_service;
pub mod ports;
mod slug;
pub mod trace_id;
pub mod user;
pub mod user_service;

pub use self::destination::{
    Coordinates, Destination, DestinationDraft, DestinationId, DestinationValidationError,
};
pub use self::destination_service::DestinationCatalogueService;
pub use self::distance::{EARTH_RADIUS_KM, haversine_km, trip_distance_km};
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::example_data::{ExampleDataSeeder, ExampleDataSeedingError, SeededExampleData};
pub use self::itinerary::{
    DestinationSnapshot, Itinerary, ItineraryDraft, ItineraryId, ItineraryTitle,
    ItineraryValidationError,
};
pub use self::itinerary_service::{ItineraryCommandService, ItineraryQueryService};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{NewUser, Password, User, UserId, UserValidationError, Username};
pub use self::user_service::UserAccountService;
