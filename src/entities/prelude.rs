pub use super::games::Entity as Games;
pub use super::sports::Entity as Sports;
pub use super::teams::Entity as Teams;
pub use super::venues::Entity as Venues;
