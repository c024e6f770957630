//! Itinerary domain services implementing the command and query ports.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use tracing::{debug, error};

use crate::domain::ports::{
    ItineraryCommand, ItineraryQuery, ItineraryRepository, ItineraryRepositoryError,
};
use crate::domain::{Error, Itinerary, ItineraryDraft, ItineraryId, UserId};

fn map_repository_error(err: ItineraryRepositoryError) -> Error {
    error!(error = %err, "itinerary store failure");
    match err {
        ItineraryRepositoryError::Lock { message } => {
            Error::internal(format!("itinerary store unavailable: {message}"))
        }
    }
}

fn itinerary_not_found() -> Error {
    Error::not_found("Itinerary not found")
}

/// Creates and deletes itineraries.
#[derive(Clone)]
pub struct ItineraryCommandService<R> {
    repo: Arc<R>,
    clock: Arc<dyn Clock>,
}

impl<R> ItineraryCommandService<R> {
    /// Build the service over a store and a clock for creation timestamps.
    ///
    /// ```rust,no_run
    /// # use std::sync::Arc;
    /// # use destinate::domain::ItineraryCommandService;
    /// # use destinate::domain::ports::FixtureItineraryRepository;
    /// # use mockable::DefaultClock;
    /// let service = ItineraryCommandService::new(
    ///     Arc::new(FixtureItineraryRepository),
    ///     Arc::new(DefaultClock),
    /// );
    /// # let _ = service;
    /// ```
    pub fn new(repo: Arc<R>, clock: Arc<dyn Clock>) -> Self {
        Self { repo, clock }
    }
}

#[async_trait]
impl<R> ItineraryCommand for ItineraryCommandService<R>
where
    R: ItineraryRepository,
{
    async fn create_itinerary(&self, draft: ItineraryDraft) -> Result<Itinerary, Error> {
        let itinerary = Itinerary::new(ItineraryId::random(), draft, self.clock.utc());
        self.repo
            .insert(&itinerary)
            .await
            .map_err(map_repository_error)?;
        debug!(
            itinerary_id = %itinerary.id(),
            destinations = itinerary.destinations().len(),
            "itinerary created"
        );
        Ok(itinerary)
    }

    async fn delete_itinerary(&self, id: &ItineraryId) -> Result<(), Error> {
        let removed = self.repo.delete(id).await.map_err(map_repository_error)?;
        if !removed {
            return Err(itinerary_not_found());
        }
        debug!(itinerary_id = %id, "itinerary deleted");
        Ok(())
    }
}

/// Reads itineraries.
#[derive(Clone)]
pub struct ItineraryQueryService<R> {
    repo: Arc<R>,
}

impl<R> ItineraryQueryService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R> ItineraryQuery for ItineraryQueryService<R>
where
    R: ItineraryRepository,
{
    async fn get_itinerary(&self, id: &ItineraryId) -> Result<Itinerary, Error> {
        self.repo
            .find_by_id(id)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(itinerary_not_found)
    }

    async fn list_itineraries(&self, owner: Option<UserId>) -> Result<Vec<Itinerary>, Error> {
        let listed = match owner {
            Some(user_id) => self.repo.list_by_user(&user_id).await,
            None => self.repo.list_all().await,
        };
        listed.map_err(map_repository_error)
    }
}

#[cfg(test)]
#[path = "itinerary_service_tests.rs"]
mod tests;
