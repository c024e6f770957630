//! OpenAPI schema definitions for domain types.
//!
//! Domain types do not derive `ToSchema`, so the domain stays free of
//! utoipa. The wrappers below mirror their serialized shape and register
//! under the domain type's name.

use utoipa::ToSchema;

/// Machine-readable error codes.
#[derive(ToSchema)]
#[schema(as = ErrorCode)]
pub enum ErrorCodeSchema {
    /// The request is malformed or fails validation.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// A bearer token was required but missing or unreadable.
    #[schema(rename = "unauthorized")]
    Unauthorized,
    /// The requested resource does not exist.
    #[schema(rename = "not_found")]
    NotFound,
    /// An unexpected error occurred on the server.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// API error payload.
#[derive(ToSchema)]
#[schema(as = Error)]
#[schema(rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorSchema {
    #[schema(example = "not_found")]
    code: ErrorCodeSchema,
    #[schema(example = "Itinerary not found")]
    message: String,
    /// Correlation id echoed in the `trace-id` response header.
    #[schema(example = "6f1c0c1e-9f55-4d6b-a2a4-2f7d3f1b7f00")]
    trace_id: Option<String>,
    /// Field-level context such as `{"field": "title"}`.
    details: Option<serde_json::Value>,
}

/// Latitude and longitude in decimal degrees.
#[derive(ToSchema)]
#[schema(as = Coordinates)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct CoordinatesSchema {
    #[schema(example = 35.6762)]
    lat: f64,
    #[schema(example = 139.6503)]
    lng: f64,
}

/// Catalogue destination.
#[derive(ToSchema)]
#[schema(as = Destination)]
#[schema(rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct DestinationSchema {
    #[schema(example = "tokyo")]
    id: String,
    #[schema(example = "Tokyo")]
    name: String,
    #[schema(example = "Japan")]
    country: String,
    coordinates: CoordinatesSchema,
    description: String,
    #[schema(example = "/images/tokyo.jpg")]
    image: String,
    highlights: Vec<String>,
    #[schema(example = "March to May, September to November")]
    best_time_to_visit: String,
}

/// Destination copy stored with an itinerary.
#[derive(ToSchema)]
#[schema(as = DestinationSnapshot)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct DestinationSnapshotSchema {
    #[schema(example = "paris")]
    id: String,
    #[schema(example = "Paris")]
    name: String,
    #[schema(example = "France")]
    country: String,
}

/// Stored itinerary.
#[derive(ToSchema)]
#[schema(as = Itinerary)]
#[schema(rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ItinerarySchema {
    #[schema(value_type = String, format = Uuid)]
    id: String,
    /// Owner taken from the bearer token `sub`, if the creator sent one.
    #[schema(value_type = Option<String>, format = Uuid)]
    user_id: Option<String>,
    #[schema(example = "Spring in Europe")]
    title: String,
    description: Option<String>,
    destinations: Vec<DestinationSnapshotSchema>,
    #[schema(value_type = String, format = DateTime)]
    created_at: String,
}
