//! Itinerary HTTP handlers.
//!
//! ```text
//! GET    /api/itineraries
//! GET    /api/itineraries/{id}
//! POST   /api/itineraries {"title":"…","destinations":[{"id":"…","name":"…","country":"…"}]}
//! DELETE /api/itineraries/{id}
//! ```
//!
//! A bearer token is optional everywhere. When it is readable, listings are
//! scoped to its subject and new itineraries are owned by it.

use actix_web::{HttpResponse, delete, get, post, web};
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{
    DestinationSnapshot, Error, Itinerary, ItineraryDraft, ItineraryId, ItineraryTitle, UserId,
};
use crate::inbound::http::ApiResult;
use crate::inbound::http::auth::BearerIdentity;
use crate::inbound::http::schemas::{ErrorSchema, ItinerarySchema};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, empty_field_error, missing_field_error};

const TITLE: FieldName = FieldName::new("title");
const DESTINATIONS: FieldName = FieldName::new("destinations");

/// Destination entry in a create request. Any strings are accepted.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct DestinationSnapshotRequest {
    #[schema(example = "tokyo")]
    pub id: String,
    #[schema(example = "Tokyo")]
    pub name: String,
    #[schema(example = "Japan")]
    pub country: String,
}

/// Request body for [`create_itinerary`].
///
/// Fields are optional at the serde level so a missing field produces a
/// field-specific error rather than a generic parse failure.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateItineraryRequest {
    #[schema(example = "Spring in Europe")]
    pub title: Option<String>,
    pub description: Option<String>,
    pub destinations: Option<Vec<DestinationSnapshotRequest>>,
}

impl CreateItineraryRequest {
    fn into_draft(self, owner: Option<UserId>) -> Result<ItineraryDraft, Error> {
        let title = self.title.ok_or_else(|| missing_field_error(TITLE))?;
        let title = ItineraryTitle::new(title).map_err(|_| empty_field_error(TITLE))?;
        let destinations = self
            .destinations
            .ok_or_else(|| missing_field_error(DESTINATIONS))?
            .into_iter()
            .map(|item| DestinationSnapshot::new(item.id, item.name, item.country))
            .collect();

        Ok(ItineraryDraft {
            user_id: owner,
            title,
            description: self.description,
            destinations,
        })
    }
}

/// Non-UUID path segments cannot name a stored itinerary.
fn parse_itinerary_id(raw: &str) -> Result<ItineraryId, Error> {
    Uuid::parse_str(raw)
        .map(ItineraryId::from_uuid)
        .map_err(|_| Error::not_found("Itinerary not found"))
}

/// List itineraries, scoped to the caller when a bearer token is sent.
#[utoipa::path(
    get,
    path = "/api/itineraries",
    responses(
        (status = 200, description = "Itineraries ordered by creation time", body = [ItinerarySchema]),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["itineraries"],
    operation_id = "listItineraries",
    security((), ("BearerToken" = []))
)]
#[get("/itineraries")]
pub async fn list_itineraries(
    state: web::Data<HttpState>,
    identity: Option<BearerIdentity>,
) -> ApiResult<web::Json<Vec<Itinerary>>> {
    let owner = identity.map(|identity| identity.user_id());
    let itineraries = state.itineraries_query.list_itineraries(owner).await?;
    Ok(web::Json(itineraries))
}

/// Fetch one itinerary.
#[utoipa::path(
    get,
    path = "/api/itineraries/{id}",
    params(("id" = String, Path, description = "Itinerary UUID")),
    responses(
        (status = 200, description = "Itinerary", body = ItinerarySchema),
        (status = 404, description = "Itinerary not found", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["itineraries"],
    operation_id = "getItinerary"
)]
#[get("/itineraries/{id}")]
pub async fn get_itinerary(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<Itinerary>> {
    let id = parse_itinerary_id(&path)?;
    let itinerary = state.itineraries_query.get_itinerary(&id).await?;
    Ok(web::Json(itinerary))
}

/// Create an itinerary.
#[utoipa::path(
    post,
    path = "/api/itineraries",
    request_body = CreateItineraryRequest,
    responses(
        (status = 201, description = "Created itinerary", body = ItinerarySchema),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["itineraries"],
    operation_id = "createItinerary",
    security((), ("BearerToken" = []))
)]
#[post("/itineraries")]
pub async fn create_itinerary(
    state: web::Data<HttpState>,
    identity: Option<BearerIdentity>,
    payload: web::Json<CreateItineraryRequest>,
) -> ApiResult<HttpResponse> {
    let owner = identity.map(|identity| identity.user_id());
    let draft = payload.into_inner().into_draft(owner)?;
    let itinerary = state.itineraries.create_itinerary(draft).await?;
    Ok(HttpResponse::Created().json(itinerary))
}

/// Delete an itinerary.
#[utoipa::path(
    delete,
    path = "/api/itineraries/{id}",
    params(("id" = String, Path, description = "Itinerary UUID")),
    responses(
        (status = 204, description = "Itinerary deleted"),
        (status = 404, description = "Itinerary not found", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["itineraries"],
    operation_id = "deleteItinerary"
)]
#[delete("/itineraries/{id}")]
pub async fn delete_itinerary(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = parse_itinerary_id(&path)?;
    state.itineraries.delete_itinerary(&id).await?;
    Ok(HttpResponse::NoContent().finish())
}

#[cfg(test)]
#[path = "itineraries_tests.rs"]
mod tests;
