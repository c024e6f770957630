//! Catalogue browsing and trip distance service.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::error;

use crate::domain::ports::{DestinationQuery, DestinationRepository, DestinationRepositoryError};
use crate::domain::{Destination, DestinationId, Error, trip_distance_km};

fn map_repository_error(err: DestinationRepositoryError) -> Error {
    error!(error = %err, "destination catalogue failure");
    match err {
        DestinationRepositoryError::Unavailable { message } => {
            Error::internal(format!("destination catalogue unavailable: {message}"))
        }
    }
}

/// Implements [`DestinationQuery`] over a catalogue source.
#[derive(Clone)]
pub struct DestinationCatalogueService<R> {
    repo: Arc<R>,
}

impl<R> DestinationCatalogueService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }
}

impl<R> DestinationCatalogueService<R>
where
    R: DestinationRepository,
{
    async fn catalogue(&self) -> Result<Vec<Destination>, Error> {
        self.repo.all().await.map_err(map_repository_error)
    }
}

#[async_trait]
impl<R> DestinationQuery for DestinationCatalogueService<R>
where
    R: DestinationRepository,
{
    async fn search(&self, query: &str) -> Result<Vec<Destination>, Error> {
        let catalogue = self.catalogue().await?;
        let needle = query.to_lowercase();
        if needle.is_empty() {
            return Ok(catalogue);
        }
        Ok(catalogue
            .into_iter()
            .filter(|destination| destination.matches_lowercase(&needle))
            .collect())
    }

    async fn get_destination(&self, id: &DestinationId) -> Result<Destination, Error> {
        self.catalogue()
            .await?
            .into_iter()
            .find(|destination| destination.id() == id)
            .ok_or_else(|| Error::not_found("Destination not found"))
    }

    async fn trip_distance(&self, ids: &[String]) -> Result<u64, Error> {
        let catalogue = self.catalogue().await?;
        Ok(trip_distance_km(ids, &catalogue))
    }
}
