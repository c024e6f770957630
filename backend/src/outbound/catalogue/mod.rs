//! Compiled-in destination catalogue.

use async_trait::async_trait;

use crate::domain::ports::{DestinationRepository, DestinationRepositoryError};
use crate::domain::{Coordinates, Destination, DestinationDraft};

struct Entry {
    id: &'static str,
    name: &'static str,
    country: &'static str,
    lat: f64,
    lng: f64,
    description: &'static str,
    highlights: [&'static str; 5],
    best_time_to_visit: &'static str,
}

const ENTRIES: [Entry; 6] = [
    Entry {
        id: "tokyo",
        name: "Tokyo",
        country: "Japan",
        lat: 35.6762,
        lng: 139.6503,
        description: "Experience the perfect blend of traditional culture and cutting-edge \
                      technology in Japan's vibrant capital.",
        highlights: [
            "Shibuya Crossing",
            "Senso-ji Temple",
            "Tokyo Skytree",
            "Tsukiji Fish Market",
            "Imperial Palace",
        ],
        best_time_to_visit: "March to May, September to November",
    },
    Entry {
        id: "venice",
        name: "Venice",
        country: "Italy",
        lat: 45.4408,
        lng: 12.3155,
        description: "Discover the enchanting floating city with its romantic canals, stunning \
                      architecture, and rich artistic heritage.",
        highlights: [
            "St. Mark's Basilica",
            "Grand Canal",
            "Rialto Bridge",
            "Doge's Palace",
            "Murano Glass Island",
        ],
        best_time_to_visit: "April to June, September to November",
    },
    Entry {
        id: "paris",
        name: "Paris",
        country: "France",
        lat: 48.8566,
        lng: 2.3522,
        description: "The City of Light captivates with world-class museums, iconic landmarks, \
                      and unparalleled culinary experiences.",
        highlights: [
            "Eiffel Tower",
            "Louvre Museum",
            "Notre-Dame Cathedral",
            "Arc de Triomphe",
            "Champs-Élysées",
        ],
        best_time_to_visit: "April to June, September to November",
    },
    Entry {
        id: "london",
        name: "London",
        country: "United Kingdom",
        lat: 51.5074,
        lng: -0.1278,
        description: "Explore the historic capital where royal heritage meets modern innovation \
                      and multicultural charm.",
        highlights: [
            "Big Ben",
            "Tower of London",
            "British Museum",
            "Buckingham Palace",
            "London Eye",
        ],
        best_time_to_visit: "May to September",
    },
    Entry {
        id: "amsterdam",
        name: "Amsterdam",
        country: "Netherlands",
        lat: 52.3676,
        lng: 4.9041,
        description: "Cycle through picturesque canals, visit world-renowned museums, and \
                      embrace the laid-back Dutch lifestyle.",
        highlights: [
            "Anne Frank House",
            "Van Gogh Museum",
            "Canal Ring",
            "Rijksmuseum",
            "Vondelpark",
        ],
        best_time_to_visit: "April to May, September to November",
    },
    Entry {
        id: "santorini",
        name: "Santorini",
        country: "Greece",
        lat: 36.3932,
        lng: 25.4615,
        description: "Marvel at stunning sunsets, white-washed buildings, and crystal-clear \
                      waters in this Aegean paradise.",
        highlights: [
            "Oia Sunset",
            "Red Beach",
            "Ancient Akrotiri",
            "Fira Town",
            "Wine Tasting Tours",
        ],
        best_time_to_visit: "April to November",
    },
];

impl Entry {
    fn to_draft(&self) -> DestinationDraft {
        DestinationDraft {
            id: self.id.to_owned(),
            name: self.name.to_owned(),
            country: self.country.to_owned(),
            coordinates: Coordinates::new(self.lat, self.lng),
            description: self.description.to_owned(),
            image: format!("/images/{}.jpg", self.id),
            highlights: self.highlights.iter().map(|h| (*h).to_owned()).collect(),
            best_time_to_visit: self.best_time_to_visit.to_owned(),
        }
    }
}

/// Static catalogue of the six built-in destinations, in display order.
#[derive(Debug, Clone)]
pub struct StaticDestinationRepository {
    destinations: Vec<Destination>,
}

impl StaticDestinationRepository {
    /// Validate the built-in entries.
    ///
    /// # Errors
    ///
    /// Returns [`DestinationRepositoryError::Unavailable`] if an entry fails
    /// validation.
    pub fn new() -> Result<Self, DestinationRepositoryError> {
        let destinations = ENTRIES
            .iter()
            .map(|entry| {
                Destination::try_from(entry.to_draft()).map_err(|err| {
                    DestinationRepositoryError::unavailable(format!("{}: {err}", entry.id))
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { destinations })
    }
}

#[async_trait]
impl DestinationRepository for StaticDestinationRepository {
    async fn all(&self) -> Result<Vec<Destination>, DestinationRepositoryError> {
        Ok(self.destinations.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[tokio::test]
    async fn lists_six_destinations_in_catalogue_order() {
        let repo = StaticDestinationRepository::new().expect("catalogue is valid");

        let all = repo.all().await.expect("catalogue");
        let ids: Vec<&str> = all.iter().map(|d| d.id().as_str()).collect();

        assert_eq!(
            ids,
            ["tokyo", "venice", "paris", "london", "amsterdam", "santorini"]
        );
    }

    #[rstest]
    #[tokio::test]
    async fn entries_carry_images_and_five_highlights() {
        let repo = StaticDestinationRepository::new().expect("catalogue is valid");

        for destination in repo.all().await.expect("catalogue") {
            assert_eq!(
                destination.image(),
                format!("/images/{}.jpg", destination.id())
            );
            assert_eq!(destination.highlights().len(), 5);
            assert!(!destination.best_time_to_visit().is_empty());
        }
    }
}
