//! SeaORM repository implementations
//!
//! Repository implementations that work across SQLite and PostgreSQL. The
//! game repository is the sole writer of game rows; reference data is
//! read-only.

pub mod game;
pub mod reference;

// Re-export for convenience
pub use game::GameSeaOrmRepository;
pub use reference::ReferenceSeaOrmRepository;
