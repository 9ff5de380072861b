//! Filmoteca Domain Library
//!
//! Core domain types and interfaces for the Filmoteca film catalog.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain/`): Pure business entities and rules
//!   - `entities/`: Catalog records (Movie, Actor, Director)
//!   - `value_objects/`: Immutable value types (NamePolicy)
//!   - `errors/`: Domain-specific error types
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `repositories/`: Data access interfaces
//!
//! # Usage
//!
//! ```rust,ignore
//! use filmoteca::domain::{Director, NewDirector, NamePolicy};
//! use filmoteca::ports::DirectorRepository;
//! ```

pub mod domain;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    Actor, ActorChanges, Director, DirectorChanges, DomainError, Movie, MovieChanges, NamePolicy,
    NewActor, NewDirector, NewMovie,
};
pub use ports::{ActorRepository, DirectorRepository, MovieRepository};

#[cfg(any(test, feature = "testing"))]
pub use ports::{MockActorRepository, MockDirectorRepository, MockMovieRepository};
