//! Driven port for itinerary storage.
//!
//! A missing record is `None` or `false`, never an error. Errors are reserved
//! for adapter failures such as a poisoned lock.

use async_trait::async_trait;

use crate::domain::{Itinerary, ItineraryId, UserId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by itinerary storage adapters.
    pub enum ItineraryRepositoryError {
        /// The store's lock was poisoned by a panicking writer.
        Lock { message: String } => "itinerary store lock poisoned: {message}",
    }
}

/// Storage operations for itineraries.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ItineraryRepository: Send + Sync {
    /// Store a newly created itinerary.
    async fn insert(&self, itinerary: &Itinerary) -> Result<(), ItineraryRepositoryError>;

    async fn find_by_id(
        &self,
        id: &ItineraryId,
    ) -> Result<Option<Itinerary>, ItineraryRepositoryError>;

    /// Every stored itinerary, ordered by creation time then id.
    async fn list_all(&self) -> Result<Vec<Itinerary>, ItineraryRepositoryError>;

    /// Itineraries owned by `user_id`, in the same order as [`Self::list_all`].
    async fn list_by_user(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<Itinerary>, ItineraryRepositoryError>;

    /// Remove an itinerary, returning whether it existed.
    async fn delete(&self, id: &ItineraryId) -> Result<bool, ItineraryRepositoryError>;
}

/// Stateless fixture that stores nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureItineraryRepository;

#[async_trait]
impl ItineraryRepository for FixtureItineraryRepository {
    async fn insert(&self, _itinerary: &Itinerary) -> Result<(), ItineraryRepositoryError> {
        Ok(())
    }

    async fn find_by_id(
        &self,
        _id: &ItineraryId,
    ) -> Result<Option<Itinerary>, ItineraryRepositoryError> {
        Ok(None)
    }

    async fn list_all(&self) -> Result<Vec<Itinerary>, ItineraryRepositoryError> {
        Ok(Vec::new())
    }

    async fn list_by_user(
        &self,
        _user_id: &UserId,
    ) -> Result<Vec<Itinerary>, ItineraryRepositoryError> {
        Ok(Vec::new())
    }

    async fn delete(&self, _id: &ItineraryId) -> Result<bool, ItineraryRepositoryError> {
        Ok(false)
    }
}
