//! Domain ports for the hexagonal boundary.
//!
//! Driving ports (`*Command`, `*Query`, `UserAccounts`) are what inbound
//! adapters call. Driven ports (`*Repository`) are what the services call to
//! reach storage.

mod macros;
pub(crate) use macros::define_port_error;

mod destination_query;
mod destination_repository;
mod itinerary_command;
mod itinerary_query;
mod itinerary_repository;
mod user_accounts;
mod user_repository;

pub use destination_query::DestinationQuery;
#[cfg(test)]
pub use destination_query::MockDestinationQuery;
#[cfg(test)]
pub use destination_repository::MockDestinationRepository;
pub use destination_repository::{
    DestinationRepository, DestinationRepositoryError, FixtureDestinationRepository,
};
pub use itinerary_command::ItineraryCommand;
#[cfg(test)]
pub use itinerary_command::MockItineraryCommand;
pub use itinerary_query::ItineraryQuery;
#[cfg(test)]
pub use itinerary_query::MockItineraryQuery;
#[cfg(test)]
pub use itinerary_repository::MockItineraryRepository;
pub use itinerary_repository::{
    FixtureItineraryRepository, ItineraryRepository, ItineraryRepositoryError,
};
#[cfg(test)]
pub use user_accounts::MockUserAccounts;
pub use user_accounts::UserAccounts;
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{FixtureUserRepository, UserRepository, UserRepositoryError};
