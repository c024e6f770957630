//! Demo data seeding.
//!
//! Creates one demo account and a Tokyo to Paris itinerary it owns, built
//! from live catalogue entries so the snapshot matches the catalogue.

use std::sync::Arc;

use thiserror::Error;
use tracing::info;

use crate::domain::ports::{DestinationQuery, ItineraryCommand, UserAccounts};
use crate::domain::{
    DestinationId, DestinationSnapshot, Itinerary, ItineraryDraft, ItineraryTitle, NewUser,
    Password, User, UserValidationError, Username,
};

const DEMO_USERNAME: &str = "demo-traveller";
const DEMO_PASSWORD: &str = "demo-traveller";
const SAMPLE_TITLE: &str = "Tokyo to Paris";
const SAMPLE_DESCRIPTION: &str = "A first taste of Japan followed by a week in France.";
const SAMPLE_ROUTE: [&str; 2] = ["tokyo", "paris"];

/// Records created by [`ExampleDataSeeder::seed`].
#[derive(Debug, Clone)]
pub struct SeededExampleData {
    pub user: User,
    pub itinerary: Itinerary,
}

/// Errors raised while seeding demo data.
#[derive(Debug, Error)]
pub enum ExampleDataSeedingError {
    /// Built-in demo values failed validation.
    #[error("demo data failed validation: {0}")]
    Invalid(String),
    /// A driving port rejected the seed.
    #[error("demo data could not be stored: {0}")]
    Port(#[from] crate::domain::Error),
}

impl From<UserValidationError> for ExampleDataSeedingError {
    fn from(value: UserValidationError) -> Self {
        Self::Invalid(value.to_string())
    }
}

impl From<crate::domain::ItineraryValidationError> for ExampleDataSeedingError {
    fn from(value: crate::domain::ItineraryValidationError) -> Self {
        Self::Invalid(value.to_string())
    }
}

impl From<crate::domain::DestinationValidationError> for ExampleDataSeedingError {
    fn from(value: crate::domain::DestinationValidationError) -> Self {
        Self::Invalid(value.to_string())
    }
}

/// Seeds the demo account and sample itinerary through the driving ports.
#[derive(Clone)]
pub struct ExampleDataSeeder {
    users: Arc<dyn UserAccounts>,
    itineraries: Arc<dyn ItineraryCommand>,
    destinations: Arc<dyn DestinationQuery>,
}

impl ExampleDataSeeder {
    pub fn new(
        users: Arc<dyn UserAccounts>,
        itineraries: Arc<dyn ItineraryCommand>,
        destinations: Arc<dyn DestinationQuery>,
    ) -> Self {
        Self {
            users,
            itineraries,
            destinations,
        }
    }

    /// Create the demo user and its sample itinerary.
    ///
    /// # Errors
    ///
    /// Returns [`ExampleDataSeedingError`] when a catalogue entry on the
    /// sample route is missing or a port fails.
    pub async fn seed(&self) -> Result<SeededExampleData, ExampleDataSeedingError> {
        let user = self
            .users
            .create_user(NewUser {
                username: Username::new(DEMO_USERNAME)?,
                password: Password::new(DEMO_PASSWORD)?,
            })
            .await?;

        let mut destinations = Vec::with_capacity(SAMPLE_ROUTE.len());
        for slug in SAMPLE_ROUTE {
            let destination = self
                .destinations
                .get_destination(&DestinationId::new(slug)?)
                .await?;
            destinations.push(DestinationSnapshot::from(&destination));
        }

        let itinerary = self
            .itineraries
            .create_itinerary(ItineraryDraft {
                user_id: Some(*user.id()),
                title: ItineraryTitle::new(SAMPLE_TITLE)?,
                description: Some(SAMPLE_DESCRIPTION.to_owned()),
                destinations,
            })
            .await?;

        info!(
            user_id = %user.id(),
            itinerary_id = %itinerary.id(),
            "demo data seeded"
        );
        Ok(SeededExampleData { user, itinerary })
    }
}
