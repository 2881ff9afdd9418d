//! SeaORM entities for the league schema
//!
//! Sport, Team and Venue are read-only reference data from this service's
//! perspective; Game is the only entity mutated at runtime.

pub mod prelude;

pub mod games;
pub mod sports;
pub mod teams;
pub mod venues;
