//! Destination catalogue HTTP handlers.
//!
//! ```text
//! GET /api/destinations/search?q=japan
//! GET /api/destinations/trip-distance?ids=tokyo,paris,venice
//! GET /api/destinations/{id}
//! ```

use actix_web::{get, web};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::{Destination, DestinationId, Error};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{DestinationSchema, ErrorSchema};
use crate::inbound::http::state::HttpState;

/// Query string for [`search_destinations`].
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchQuery {
    /// Case-insensitive text matched against name, country and description.
    #[param(example = "japan")]
    pub q: Option<String>,
}

/// Query string for [`trip_distance`].
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct TripDistanceQuery {
    /// Comma-separated destination ids in visiting order.
    #[param(example = "tokyo,paris,venice")]
    pub ids: Option<String>,
}

/// Response body for [`trip_distance`].
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TripDistanceResponse {
    #[schema(example = json!(["tokyo", "paris"]))]
    pub destination_ids: Vec<String>,
    /// Sum of great-circle legs, rounded to whole kilometres.
    #[schema(example = 9712)]
    pub total_distance_km: u64,
}

/// Split `ids` on commas, trimming each segment.
///
/// Blank segments stay in place so the legs either side of them are skipped.
/// A missing or blank parameter is an empty trip.
fn parse_trip_ids(raw: Option<&str>) -> Vec<String> {
    match raw.map(str::trim) {
        None | Some("") => Vec::new(),
        Some(raw) => raw.split(',').map(|segment| segment.trim().to_owned()).collect(),
    }
}

/// Search the destination catalogue.
#[utoipa::path(
    get,
    path = "/api/destinations/search",
    params(SearchQuery),
    responses(
        (status = 200, description = "Matching destinations in catalogue order", body = [DestinationSchema]),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["destinations"],
    operation_id = "searchDestinations"
)]
#[get("/destinations/search")]
pub async fn search_destinations(
    state: web::Data<HttpState>,
    query: web::Query<SearchQuery>,
) -> ApiResult<web::Json<Vec<Destination>>> {
    let text = query.q.as_deref().unwrap_or_default();
    let found = state.destinations.search(text).await?;
    Ok(web::Json(found))
}

/// Length of a trip through the given destinations.
///
/// Unknown, blank or malformed ids are skipped along with the legs touching
/// them.
#[utoipa::path(
    get,
    path = "/api/destinations/trip-distance",
    params(TripDistanceQuery),
    responses(
        (status = 200, description = "Trip distance", body = TripDistanceResponse),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["destinations"],
    operation_id = "tripDistance"
)]
#[get("/destinations/trip-distance")]
pub async fn trip_distance(
    state: web::Data<HttpState>,
    query: web::Query<TripDistanceQuery>,
) -> ApiResult<web::Json<TripDistanceResponse>> {
    let ids = parse_trip_ids(query.ids.as_deref());
    let total_distance_km = state.destinations.trip_distance(&ids).await?;
    Ok(web::Json(TripDistanceResponse {
        destination_ids: ids,
        total_distance_km,
    }))
}

/// Fetch one destination.
#[utoipa::path(
    get,
    path = "/api/destinations/{id}",
    params(("id" = String, Path, description = "Destination slug", example = "tokyo")),
    responses(
        (status = 200, description = "Destination", body = DestinationSchema),
        (status = 404, description = "Unknown destination", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["destinations"],
    operation_id = "getDestination"
)]
#[get("/destinations/{id}")]
pub async fn get_destination(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<Destination>> {
    let id = DestinationId::new(path.into_inner())
        .map_err(|_| Error::not_found("Destination not found"))?;
    let destination = state.destinations.get_destination(&id).await?;
    Ok(web::Json(destination))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inbound::http::test_utils::{in_memory_state, test_app};
    use actix_web::http::StatusCode;
    use actix_web::test as actix_test;
    use rstest::rstest;
    use serde_json::Value;

    async fn get_json(uri: &str) -> (StatusCode, Value) {
        let app = actix_test::init_service(test_app(in_memory_state())).await;
        let request = actix_test::TestRequest::get().uri(uri).to_request();
        let response = actix_test::call_service(&app, request).await;
        let status = response.status();
        (status, actix_test::read_body_json(response).await)
    }

    fn ids_of(body: &Value) -> Vec<&str> {
        body.as_array()
            .expect("array body")
            .iter()
            .map(|item| item["id"].as_str().expect("id string"))
            .collect()
    }

    #[rstest]
    #[case("/api/destinations/search", 6)]
    #[case("/api/destinations/search?q=", 6)]
    #[case("/api/destinations/search?q=zzz", 0)]
    #[actix_web::test]
    async fn search_returns_expected_counts(#[case] uri: &str, #[case] count: usize) {
        let (status, body) = get_json(uri).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(ids_of(&body).len(), count);
    }

    #[rstest]
    #[case("Japan", vec!["tokyo"])]
    #[case("canals", vec!["venice", "amsterdam"])]
    #[case("PARIS", vec!["paris"])]
    #[actix_web::test]
    async fn search_matches_text_case_insensitively(
        #[case] q: &str,
        #[case] expected: Vec<&str>,
    ) {
        let (_, body) = get_json(&format!("/api/destinations/search?q={q}")).await;
        assert_eq!(ids_of(&body), expected);
    }

    #[rstest]
    #[actix_web::test]
    async fn get_destination_returns_full_record() {
        let (status, body) = get_json("/api/destinations/santorini").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["country"], "Greece");
        assert_eq!(body["image"], "/images/santorini.jpg");
        assert_eq!(body["bestTimeToVisit"], "April to November");
        assert_eq!(body["coordinates"]["lat"], 36.3932);
    }

    #[rstest]
    #[case("/api/destinations/atlantis")]
    #[case("/api/destinations/Not%20A%20Slug")]
    #[actix_web::test]
    async fn unknown_destinations_are_404(#[case] uri: &str) {
        let (status, body) = get_json(uri).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "Destination not found");
    }

    #[rstest]
    #[actix_web::test]
    async fn trip_distance_sums_legs_in_order() {
        let (status, body) =
            get_json("/api/destinations/trip-distance?ids=tokyo,%20paris,venice").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body["destinationIds"],
            serde_json::json!(["tokyo", "paris", "venice"])
        );
        let km = body["totalDistanceKm"].as_u64().expect("integer distance");
        assert!((10_400..10_600).contains(&km), "got {km}");
    }

    #[rstest]
    #[case("/api/destinations/trip-distance")]
    #[case("/api/destinations/trip-distance?ids=tokyo")]
    #[case("/api/destinations/trip-distance?ids=atlantis,lemuria")]
    #[actix_web::test]
    async fn degenerate_trips_have_zero_distance(#[case] uri: &str) {
        let (status, body) = get_json(uri).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["totalDistanceKm"], 0);
    }

    #[rstest]
    #[case("/api/destinations/trip-distance?ids=tokyo,Atlantis,paris")]
    #[case("/api/destinations/trip-distance?ids=tokyo,,paris")]
    #[case("/api/destinations/trip-distance?ids=tokyo,New%20York,paris")]
    #[actix_web::test]
    async fn unusable_ids_break_their_legs_without_failing(#[case] uri: &str) {
        let (status, body) = get_json(uri).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["totalDistanceKm"], 0);
        assert_eq!(body["destinationIds"].as_array().map(Vec::len), Some(3));
    }

    #[rstest]
    #[case(None, &[])]
    #[case(Some("  "), &[])]
    #[case(Some("tokyo,, paris ,"), &["tokyo", "", "paris", ""])]
    fn trip_ids_keep_blank_segments_in_place(#[case] raw: Option<&str>, #[case] expected: &[&str]) {
        assert_eq!(parse_trip_ids(raw), expected);
    }
}
