//! Driving port for catalogue browsing and trip distances.

use async_trait::async_trait;

use crate::domain::{Destination, DestinationId, Error};

/// Use-case port over the destination catalogue.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DestinationQuery: Send + Sync {
    /// Destinations whose name, country or description contain `query`,
    /// ignoring case. An empty query returns the whole catalogue.
    async fn search(&self, query: &str) -> Result<Vec<Destination>, Error>;

    /// One destination, failing with `not_found` when unknown.
    async fn get_destination(&self, id: &DestinationId) -> Result<Destination, Error>;

    /// Rounded great-circle length of the trip visiting `ids` in order.
    ///
    /// Ids are plain lookup keys; unknown ones break the legs around them.
    async fn trip_distance(&self, ids: &[String]) -> Result<u64, Error>;
}
