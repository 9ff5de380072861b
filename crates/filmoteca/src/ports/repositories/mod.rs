//! Repository Ports
//!
//! Abstract interfaces for data persistence operations.

mod actor_repository;
mod director_repository;
mod movie_repository;

pub use actor_repository::*;
pub use director_repository::*;
pub use movie_repository::*;
