//! Application Layer (Use Cases)
//!
//! Orchestrates catalog rules between the HTTP routes and the
//! repository ports.

mod actor_service;
mod director_service;
mod movie_service;

pub use actor_service::ActorService;
pub use director_service::DirectorService;
pub use movie_service::MovieService;
