//! Driven port for the destination catalogue source.

use async_trait::async_trait;

use crate::domain::Destination;

use super::define_port_error;

define_port_error! {
    /// Errors raised while reading the catalogue.
    pub enum DestinationRepositoryError {
        /// Catalogue data could not be loaded.
        Unavailable { message: String } => "destination catalogue unavailable: {message}",
    }
}

/// Read access to the destination catalogue.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DestinationRepository: Send + Sync {
    /// Every destination, in catalogue order.
    async fn all(&self) -> Result<Vec<Destination>, DestinationRepositoryError>;
}

/// Fixture with an empty catalogue.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureDestinationRepository;

#[async_trait]
impl DestinationRepository for FixtureDestinationRepository {
    async fn all(&self) -> Result<Vec<Destination>, DestinationRepositoryError> {
        Ok(Vec::new())
    }
}
