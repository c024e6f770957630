//! Great-circle distance helpers.
//!
//! Both functions are pure. Coordinates are not range checked, so
//! out-of-range input yields a defined but meaningless distance.

use super::{Coordinates, Destination};

/// Mean Earth radius used by the haversine formula.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance between two points in kilometres.
///
/// # Examples
/// ```
/// use destinate::domain::{Coordinates, haversine_km};
///
/// let london = Coordinates::new(51.5074, -0.1278);
/// let paris = Coordinates::new(48.8566, 2.3522);
/// let km = haversine_km(london, paris);
/// assert!((km - 343.5).abs() < 1.0);
/// ```
#[must_use]
pub fn haversine_km(from: Coordinates, to: Coordinates) -> f64 {
    let d_lat = (to.lat - from.lat).to_radians();
    let d_lng = (to.lng - from.lng).to_radians();

    let a = (d_lat / 2.0).sin().powi(2)
        + from.lat.to_radians().cos() * to.lat.to_radians().cos() * (d_lng / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Total distance of an ordered trip, rounded to whole kilometres.
///
/// Each id is compared verbatim against the catalogue slugs. Consecutive
/// pairs where either id is unknown, blank or malformed are skipped. Fewer
/// than two ids yields zero.
#[must_use]
pub fn trip_distance_km<S: AsRef<str>>(ids: &[S], catalogue: &[Destination]) -> u64 {
    let lookup = |id: &S| {
        catalogue
            .iter()
            .find(|destination| destination.id().as_str() == id.as_ref())
            .map(Destination::coordinates)
    };

    let total: f64 = ids
        .windows(2)
        .filter_map(|pair| match pair {
            [from, to] => Some(haversine_km(lookup(from)?, lookup(to)?)),
            _ => None,
        })
        .sum();

    whole_kilometres(total)
}

#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "haversine sums are finite and non-negative"
)]
fn whole_kilometres(km: f64) -> u64 {
    km.round() as u64
}
