//! Outbound adapters implementing the driven ports.
//!
//! - **memory**: `RwLock`-guarded maps for users and itineraries. Nothing
//!   survives a restart.
//! - **catalogue**: the compiled-in destination list.
//!
//! Adapters only translate between storage and domain types; they hold no
//! business rules.

pub mod catalogue;
pub mod memory;
