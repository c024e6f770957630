//! In-memory storage adapters.
//!
//! Each store wraps a `HashMap` in a `std::sync::RwLock`. Readers share the
//! lock; writers take it exclusively. Guards are never held across an
//! `.await`. A poisoned lock surfaces as the port's `Lock` error rather than
//! a panic.

mod itinerary_repository;
mod user_repository;

pub use itinerary_repository::InMemoryItineraryRepository;
pub use user_repository::InMemoryUserRepository;
