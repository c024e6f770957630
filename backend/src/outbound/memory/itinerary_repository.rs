//! `RwLock`-guarded itinerary store.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;

use crate::domain::ports::{ItineraryRepository, ItineraryRepositoryError};
use crate::domain::{Itinerary, ItineraryId, UserId};

fn poisoned<T>(_: PoisonError<T>) -> ItineraryRepositoryError {
    ItineraryRepositoryError::lock("a writer panicked while holding the itinerary map")
}

fn ordered(mut itineraries: Vec<Itinerary>) -> Vec<Itinerary> {
    itineraries.sort_by_key(|itinerary| (itinerary.created_at(), itinerary.id()));
    itineraries
}

/// Itinerary store keyed by id.
#[derive(Debug, Default)]
pub struct InMemoryItineraryRepository {
    itineraries: RwLock<HashMap<ItineraryId, Itinerary>>,
}

impl InMemoryItineraryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ItineraryRepository for InMemoryItineraryRepository {
    async fn insert(&self, itinerary: &Itinerary) -> Result<(), ItineraryRepositoryError> {
        let mut map = self.itineraries.write().map_err(poisoned)?;
        map.insert(itinerary.id(), itinerary.clone());
        Ok(())
    }

    async fn find_by_id(
        &self,
        id: &ItineraryId,
    ) -> Result<Option<Itinerary>, ItineraryRepositoryError> {
        let map = self.itineraries.read().map_err(poisoned)?;
        Ok(map.get(id).cloned())
    }

    async fn list_all(&self) -> Result<Vec<Itinerary>, ItineraryRepositoryError> {
        let listed = {
            let map = self.itineraries.read().map_err(poisoned)?;
            map.values().cloned().collect()
        };
        Ok(ordered(listed))
    }

    async fn list_by_user(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<Itinerary>, ItineraryRepositoryError> {
        let listed = {
            let map = self.itineraries.read().map_err(poisoned)?;
            map.values()
                .filter(|itinerary| itinerary.user_id() == Some(user_id))
                .cloned()
                .collect()
        };
        Ok(ordered(listed))
    }

    async fn delete(&self, id: &ItineraryId) -> Result<bool, ItineraryRepositoryError> {
        let mut map = self.itineraries.write().map_err(poisoned)?;
        Ok(map.remove(id).is_some())
    }
}
